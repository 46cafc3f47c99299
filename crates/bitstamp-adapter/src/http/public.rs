/*
[INPUT]:  Currency pairs and transaction windows
[OUTPUT]: Market data (ticker, order book, trades, pair metadata, EUR/USD)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use crate::http::{BitstampClient, Result};
use crate::types::endpoints::{EUR_USD, HOURLY_TICKER, ORDER_BOOK, PAIRS_INFO, TICKER, TRANSACTIONS};
use crate::types::{EurUsdRate, OrderBook, Ticker, TradingPairInfo, Transaction, TransactionWindow};

impl BitstampClient {
    /// Ticker for the last 24 hours
    ///
    /// GET /api/v2/ticker/{pair}/
    pub async fn ticker(&self, pair: &str) -> Result<Ticker> {
        self.send_json(TICKER.descriptor(&[("pair", pair)])).await
    }

    /// Ticker for the last hour
    ///
    /// GET /api/v2/ticker_hour/{pair}/
    pub async fn hourly_ticker(&self, pair: &str) -> Result<Ticker> {
        self.send_json(HOURLY_TICKER.descriptor(&[("pair", pair)]))
            .await
    }

    /// Full order book
    ///
    /// GET /api/v2/order_book/{pair}/
    pub async fn order_book(&self, pair: &str) -> Result<OrderBook> {
        self.send_json(ORDER_BOOK.descriptor(&[("pair", pair)])).await
    }

    /// Trades executed within `window`
    ///
    /// GET /api/v2/transactions/{pair}?&time={window}
    pub async fn transactions(
        &self,
        pair: &str,
        window: TransactionWindow,
    ) -> Result<Vec<Transaction>> {
        let descriptor = TRANSACTIONS.descriptor(&[("pair", pair), ("time", window.as_str())]);
        self.send_json(descriptor).await
    }

    /// Metadata for every trading pair
    ///
    /// GET /api/v2/trading-pairs-info/
    pub async fn pairs_info(&self) -> Result<Vec<TradingPairInfo>> {
        self.send_json(PAIRS_INFO.descriptor(&[])).await
    }

    /// EUR/USD conversion rate
    ///
    /// GET /api/v2/eur_usd/
    pub async fn eur_usd(&self) -> Result<EurUsdRate> {
        self.send_json(EUR_USD.descriptor(&[])).await
    }
}
