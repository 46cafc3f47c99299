/*
[INPUT]:  Currency pair (e.g., "btcusd")
[OUTPUT]: Market data (ticker, order book, recent trades, pair info)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use bitstamp_adapter::*;

/// Example: Query market data (no authentication required)
#[tokio::main]
async fn main() {
    println!("=== Bitstamp Market Data Example ===\n");

    let client = match BitstampClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created (no auth required for public endpoints)\n");

    let pair = "btcusd";

    println!("Querying ticker for {}...", pair);
    match client.ticker(pair).await {
        Ok(ticker) => println!("✓ Last: {} (bid {} / ask {})", ticker.last, ticker.bid, ticker.ask),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying order book for {}...", pair);
    match client.order_book(pair).await {
        Ok(book) => println!(
            "✓ Best bid: {:?}, best ask: {:?}",
            book.best_bid(),
            book.best_ask()
        ),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying trades from the last minute...");
    match client.transactions(pair, TransactionWindow::Minute).await {
        Ok(trades) => println!("✓ {} trades", trades.len()),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying trading pairs...");
    match client.pairs_info().await {
        Ok(pairs) => {
            let enabled = pairs.iter().filter(|p| p.is_enabled()).count();
            println!("✓ {} pairs, {} enabled", pairs.len(), enabled);
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
