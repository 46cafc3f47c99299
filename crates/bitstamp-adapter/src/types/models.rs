/*
[INPUT]:  JSON bodies returned by Bitstamp public and deposit endpoints
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::TradeSide;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    #[serde(deserialize_with = "serde_helpers::string_or_number")]
    pub timestamp: String,
    pub open: Decimal,
    pub last: Decimal,
    pub low: Decimal,
    pub high: Decimal,
    pub volume: Decimal,
    pub ask: Decimal,
    pub bid: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vwap: Option<Decimal>,
}

/// A `[price, amount]` order book level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookLevel(pub Decimal, pub Decimal);

impl BookLevel {
    pub fn price(&self) -> Decimal {
        self.0
    }

    pub fn amount(&self) -> Decimal {
        self.1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBook {
    #[serde(deserialize_with = "serde_helpers::string_or_number")]
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub microtimestamp: Option<String>,
    pub bids: Vec<BookLevel>,
    pub asks: Vec<BookLevel>,
}

impl OrderBook {
    pub fn best_bid(&self) -> Option<&BookLevel> {
        self.bids.first()
    }

    pub fn best_ask(&self) -> Option<&BookLevel> {
        self.asks.first()
    }
}

/// Public trade from the transactions endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(deserialize_with = "serde_helpers::string_or_number")]
    pub date: String,
    #[serde(deserialize_with = "serde_helpers::string_or_number")]
    pub tid: String,
    pub price: Decimal,
    pub amount: Decimal,
    #[serde(rename = "type", deserialize_with = "serde_helpers::string_or_number")]
    pub kind: String,
}

impl Transaction {
    /// `0` is a buy, `1` a sell
    pub fn side(&self) -> Option<TradeSide> {
        match self.kind.as_str() {
            "0" => Some(TradeSide::Buy),
            "1" => Some(TradeSide::Sell),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingPairInfo {
    pub name: String,
    pub url_symbol: String,
    pub base_decimals: u32,
    pub counter_decimals: u32,
    pub minimum_order: String,
    pub trading: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instant_and_market_orders: Option<String>,
}

impl TradingPairInfo {
    pub fn is_enabled(&self) -> bool {
        self.trading.eq_ignore_ascii_case("enabled")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EurUsdRate {
    pub buy: Decimal,
    pub sell: Decimal,
}

/// Deposit address, either a bare string (legacy endpoints) or an object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DepositAddress {
    Plain(String),
    Detailed {
        address: String,
        #[serde(
            default,
            deserialize_with = "serde_helpers::opt_string_or_number",
            skip_serializing_if = "Option::is_none"
        )]
        destination_tag: Option<String>,
    },
}

impl DepositAddress {
    pub fn address(&self) -> &str {
        match self {
            DepositAddress::Plain(address) => address,
            DepositAddress::Detailed { address, .. } => address,
        }
    }

    pub fn destination_tag(&self) -> Option<&str> {
        match self {
            DepositAddress::Plain(_) => None,
            DepositAddress::Detailed {
                destination_tag, ..
            } => destination_tag.as_deref(),
        }
    }
}

mod serde_helpers {
    use serde::{Deserialize, Deserializer, de::Error};
    use serde_json::Value;

    /// Bitstamp sends identifiers and timestamps as strings on some endpoints
    /// and as integers on others.
    pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(D::Error::custom(format!(
                "expected string or number, got {other}"
            ))),
        }
    }

    pub fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s)),
            Value::Number(n) => Ok(Some(n.to_string())),
            other => Err(D::Error::custom(format!(
                "expected string or number, got {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_ticker_from_strings() {
        let ticker: Ticker = serde_json::from_str(
            r#"{
                "timestamp": "1700000000",
                "open": "36500.00",
                "last": "37000.10",
                "low": "36000",
                "high": "37500",
                "volume": "1234.5",
                "ask": "37001",
                "bid": "36999",
                "vwap": "36800"
            }"#,
        )
        .unwrap();

        assert_eq!(ticker.timestamp, "1700000000");
        assert_eq!(ticker.last, dec!(37000.10));
        assert_eq!(ticker.vwap, Some(dec!(36800)));
    }

    #[test]
    fn test_transaction_numeric_fields() {
        let trade: Transaction = serde_json::from_str(
            r#"{"date": 1700000000, "tid": 42, "price": "100.5", "amount": "0.1", "type": 1}"#,
        )
        .unwrap();

        assert_eq!(trade.tid, "42");
        assert_eq!(trade.side(), Some(TradeSide::Sell));
    }

    #[test]
    fn test_order_book_levels() {
        let book: OrderBook = serde_json::from_str(
            r#"{"timestamp": "1", "bids": [["99.5", "1.0"]], "asks": [["100.5", "2.0"]]}"#,
        )
        .unwrap();

        assert_eq!(book.best_bid().map(BookLevel::price), Some(dec!(99.5)));
        assert_eq!(book.best_ask().map(BookLevel::amount), Some(dec!(2.0)));
        assert!(book.microtimestamp.is_none());
    }

    #[test]
    fn test_deposit_address_shapes() {
        let plain: DepositAddress = serde_json::from_str(r#""1BitcoinAddress""#).unwrap();
        assert_eq!(plain.address(), "1BitcoinAddress");
        assert_eq!(plain.destination_tag(), None);

        let body = r#"{"address": "rXrpAddress", "destination_tag": 89250}"#;
        let detailed: DepositAddress = serde_json::from_str(body).unwrap();
        assert_eq!(detailed.address(), "rXrpAddress");
        assert_eq!(detailed.destination_tag(), Some("89250"));
    }
}
