/*
[INPUT]:  Currency pairs, paging options and order ids
[OUTPUT]: Balances, account transactions and order state (raw JSON)
[POS]:    HTTP layer - private account endpoints
[UPDATE]: When adding account endpoints or changing query defaults
*/

use serde_json::Value;

use crate::http::{BitstampPrivateClient, Result};
use crate::types::endpoints::{ACCOUNT_BALANCE, OPEN_ORDERS, ORDER_STATUS, USER_TRANSACTIONS};
use crate::types::{NoParams, OrderIdParams, UserTransactionsParams};

impl BitstampPrivateClient {
    /// Balances, reserved amounts and fees for a pair
    ///
    /// POST /api/v2/balance/{pair}/
    pub async fn account_balance(&self, pair: &str) -> Result<Value> {
        self.call(&ACCOUNT_BALANCE, &[("pair", pair)], &NoParams {})
            .await
    }

    /// Account transactions, newest first by default
    ///
    /// POST /api/v2/user_transactions/{pair}/
    pub async fn user_transactions(
        &self,
        pair: &str,
        params: &UserTransactionsParams,
    ) -> Result<Value> {
        self.call(&USER_TRANSACTIONS, &[("pair", pair)], params)
            .await
    }

    /// POST /api/v2/open_orders/{pair}/
    pub async fn open_orders(&self, pair: &str) -> Result<Value> {
        self.call(&OPEN_ORDERS, &[("pair", pair)], &NoParams {})
            .await
    }

    /// POST /api/order_status/
    pub async fn order_status(&self, id: u64) -> Result<Value> {
        self.call(&ORDER_STATUS, &[], &OrderIdParams { id }).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::auth::Credentials;
    use crate::http::{BitstampClient, BitstampPrivateClient, MockTransport};
    use crate::types::{SortOrder, UserTransactionsParams};

    fn private_client(transport: Arc<MockTransport>) -> BitstampPrivateClient {
        let client = BitstampClient::with_transport(transport, "https://example.com").unwrap();
        BitstampPrivateClient::with_client(client, Credentials::new("1", "key", "secret"))
    }

    #[tokio::test]
    async fn test_account_balance_path() {
        let transport = Arc::new(MockTransport::json(&serde_json::json!({
            "usd_balance": "100.00", "btc_balance": "0.5", "fee": "0.5"
        })));
        let client = private_client(transport.clone());

        let balance = client.account_balance("btcusd").await.unwrap();

        assert_eq!(balance["btc_balance"], "0.5");
        let request = transport.last_request().unwrap();
        assert_eq!(request.url.path(), "/api/v2/balance/btcusd/");
        assert_eq!(request.params.len(), 3);
    }

    #[tokio::test]
    async fn test_user_transactions_defaults() {
        let transport = Arc::new(MockTransport::new(200, "[]"));
        let client = private_client(transport.clone());

        let result = client
            .user_transactions("btcusd", &UserTransactionsParams::default())
            .await
            .unwrap();

        assert_eq!(result, serde_json::json!([]));
        let request = transport.last_request().unwrap();
        assert_eq!(request.url.path(), "/api/v2/user_transactions/btcusd/");
        assert_eq!(request.params["offset"], "0");
        assert_eq!(request.params["limit"], "100");
        assert_eq!(request.params["sort"], "desc");
    }

    #[tokio::test]
    async fn test_user_transactions_ascending() {
        let transport = Arc::new(MockTransport::new(200, "[]"));
        let client = private_client(transport.clone());
        let params = UserTransactionsParams {
            offset: 10,
            limit: 5,
            sort: SortOrder::Asc,
        };

        client.user_transactions("ethusd", &params).await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.params["offset"], "10");
        assert_eq!(request.params["sort"], "asc");
    }

    #[tokio::test]
    async fn test_order_status_is_v1() {
        let transport = Arc::new(MockTransport::json(&serde_json::json!({
            "status": "Finished", "transactions": []
        })));
        let client = private_client(transport.clone());

        let status = client.order_status(42).await.unwrap();

        assert_eq!(status["status"], "Finished");
        let request = transport.last_request().unwrap();
        assert_eq!(request.url.path(), "/api/order_status/");
        assert_eq!(request.params["id"], "42");
    }

    #[tokio::test]
    async fn test_open_orders_path() {
        let transport = Arc::new(MockTransport::new(200, "[]"));
        let client = private_client(transport.clone());

        client.open_orders("all").await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.url.path(), "/api/v2/open_orders/all/");
    }
}
