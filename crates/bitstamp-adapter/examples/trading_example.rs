/*
[INPUT]:  BITSTAMP_CUSTOMER_ID, BITSTAMP_API_KEY and BITSTAMP_API_SECRET
[OUTPUT]: Balance, open orders and a small limit order round trip
[POS]:    Examples - signed trading requests
[UPDATE]: When trading endpoints change
*/

use bitstamp_adapter::*;
use rust_decimal::Decimal;

/// Example: Place and cancel a limit order far from the market
///
/// Reads credentials from the environment. Without them the example stops
/// after printing the configuration error.
#[tokio::main]
async fn main() {
    println!("=== Bitstamp Trading Example ===\n");

    let credentials = match Credentials::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("✗ {}", e);
            return;
        }
    };
    println!("✓ Credentials loaded: {:?}\n", credentials);

    let client = match BitstampPrivateClient::new(credentials) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let pair = "btcusd";

    match client.account_balance(pair).await {
        Ok(balance) => println!("✓ Balance: {}", balance),
        Err(e) => println!("✗ Error: {}", e),
    }

    match client.open_orders(pair).await {
        Ok(orders) => println!("✓ Open orders: {}", orders),
        Err(e) => println!("✗ Error: {}", e),
    }

    let order = LimitOrderParams::new(Decimal::new(1, 3), Decimal::new(1_000, 0));
    println!("\nPlacing buy limit order {:?}...", order);
    let placed = match client.buy_limit_order(pair, &order).await {
        Ok(response) => response,
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    };
    println!("✓ Order response: {}", placed);

    let order_id = placed
        .get("id")
        .and_then(|id| id.as_u64().or_else(|| id.as_str()?.parse().ok()));
    if let Some(id) = order_id {
        match client.cancel_order(id).await {
            Ok(response) => println!("✓ Cancelled: {}", response),
            Err(e) => println!("✗ Error: {}", e),
        }
    }

    println!("\n✓ Trading example complete");
}
