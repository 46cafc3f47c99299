/*
[INPUT]:  Order parameters (amount, price, optional limit price) and order ids
[OUTPUT]: Order placement and cancellation results (raw JSON)
[POS]:    HTTP layer - trading endpoints (require signed requests)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use serde_json::Value;

use crate::http::{BitstampPrivateClient, Result};
use crate::types::endpoints::{
    BUY_LIMIT_ORDER, BUY_MARKET_ORDER, CANCEL_ALL_ORDERS, CANCEL_ORDER, SELL_LIMIT_ORDER,
    SELL_MARKET_ORDER,
};
use crate::types::{LimitOrderParams, MarketOrderParams, NoParams, OrderIdParams};

impl BitstampPrivateClient {
    /// Cancel an open order
    ///
    /// POST /api/v2/cancel_order/
    pub async fn cancel_order(&self, id: u64) -> Result<Value> {
        self.call(&CANCEL_ORDER, &[], &OrderIdParams { id }).await
    }

    /// Cancel every open order on the account
    ///
    /// POST /api/cancel_all_orders/
    pub async fn cancel_all_orders(&self) -> Result<Value> {
        self.call(&CANCEL_ALL_ORDERS, &[], &NoParams {}).await
    }

    /// Place a buy limit order
    ///
    /// POST /api/v2/buy/{pair}/
    pub async fn buy_limit_order(&self, pair: &str, order: &LimitOrderParams) -> Result<Value> {
        self.call(&BUY_LIMIT_ORDER, &[("pair", pair)], order).await
    }

    /// Place a buy market order
    ///
    /// POST /api/v2/buy/market/{pair}/
    pub async fn buy_market_order(&self, pair: &str, order: &MarketOrderParams) -> Result<Value> {
        self.call(&BUY_MARKET_ORDER, &[("pair", pair)], order).await
    }

    /// Place a sell limit order
    ///
    /// POST /api/v2/sell/{pair}/
    pub async fn sell_limit_order(&self, pair: &str, order: &LimitOrderParams) -> Result<Value> {
        self.call(&SELL_LIMIT_ORDER, &[("pair", pair)], order).await
    }

    /// Place a sell market order
    ///
    /// POST /api/v2/sell/market/{pair}/
    pub async fn sell_market_order(&self, pair: &str, order: &MarketOrderParams) -> Result<Value> {
        self.call(&SELL_MARKET_ORDER, &[("pair", pair)], order).await
    }
}
