/*
[INPUT]:  Caller arguments for private endpoints
[OUTPUT]: Typed request parameter structs and their form encoding
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When an endpoint gains or renames a parameter
*/

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use serde_json::Value;

use super::descriptor::Params;
use super::enums::{BankWithdrawalType, SortOrder};
use crate::http::{BitstampError, Result};

/// Default look-back for withdrawal requests, in seconds
pub const DEFAULT_WITHDRAWAL_TIMEDELTA: u64 = 50_000_000;

/// Flatten a parameter struct into wire parameters.
///
/// `None` fields are skipped; nested values are rejected since the exchange
/// only accepts flat form fields.
pub fn to_form_params<T: Serialize>(params: &T) -> Result<Params> {
    let fields = match serde_json::to_value(params)? {
        Value::Object(fields) => fields,
        Value::Null => return Ok(Params::new()),
        other => {
            return Err(BitstampError::Config(format!(
                "request parameters must serialize to a map, got {other}"
            )));
        }
    };

    let mut out = Params::new();
    for (key, value) in fields {
        let rendered = match value {
            Value::Null => continue,
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Array(_) | Value::Object(_) => {
                return Err(BitstampError::Config(format!(
                    "request parameter '{key}' must be a scalar"
                )));
            }
        };
        out.insert(key, rendered);
    }
    Ok(out)
}

/// Map empty strings to `None` so they never reach the wire
fn non_empty(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    (!value.is_empty()).then_some(value)
}

fn serialize_capitalized_bool<S: Serializer>(
    value: &bool,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(if *value { "True" } else { "False" })
}

fn serialize_bool_as_int<S: Serializer>(
    value: &bool,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_u8(u8::from(*value))
}

/// Endpoints without parameters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NoParams {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserTransactionsParams {
    pub offset: u32,
    pub limit: u32,
    pub sort: SortOrder,
}

impl Default for UserTransactionsParams {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 100,
            sort: SortOrder::Desc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderIdParams {
    pub id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LimitOrderParams {
    pub amount: Decimal,
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_price: Option<Decimal>,
    #[serde(serialize_with = "serialize_capitalized_bool")]
    pub daily_order: bool,
}

impl LimitOrderParams {
    /// Day order without a limit price
    pub fn new(amount: Decimal, price: Decimal) -> Self {
        Self {
            amount,
            price,
            limit_price: None,
            daily_order: true,
        }
    }

    #[must_use]
    pub fn with_limit_price(mut self, limit_price: Decimal) -> Self {
        self.limit_price = Some(limit_price);
        self
    }

    #[must_use]
    pub fn with_daily_order(mut self, daily_order: bool) -> Self {
        self.daily_order = daily_order;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketOrderParams {
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WithdrawalRequestsParams {
    pub timedelta: u64,
}

impl Default for WithdrawalRequestsParams {
    fn default() -> Self {
        Self {
            timedelta: DEFAULT_WITHDRAWAL_TIMEDELTA,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BitcoinWithdrawalParams {
    pub amount: Decimal,
    pub address: String,
    #[serde(serialize_with = "serialize_bool_as_int")]
    pub instant: bool,
}

impl BitcoinWithdrawalParams {
    /// Instant withdrawal to `address`
    pub fn new(amount: Decimal, address: impl Into<String>) -> Self {
        Self {
            amount,
            address: address.into(),
            instant: true,
        }
    }

    #[must_use]
    pub fn with_instant(mut self, instant: bool) -> Self {
        self.instant = instant;
        self
    }
}

/// Plain crypto withdrawal (litecoin, ether, bitcoin cash)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CryptoWithdrawalParams {
    pub amount: Decimal,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RippleWithdrawalParams {
    pub amount: Decimal,
    pub address: String,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct XrpWithdrawalParams {
    pub amount: Decimal,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_tag: Option<String>,
}

impl XrpWithdrawalParams {
    pub fn new(
        amount: Decimal,
        address: impl Into<String>,
        destination_tag: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            address: address.into(),
            destination_tag: non_empty(destination_tag),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferToMainParams {
    pub amount: Decimal,
    pub currency: String,
    #[serde(rename = "subAccount", skip_serializing_if = "Option::is_none")]
    pub sub_account: Option<String>,
}

impl TransferToMainParams {
    pub fn new(
        amount: Decimal,
        currency: impl Into<String>,
        sub_account: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            currency: currency.into(),
            sub_account: non_empty(sub_account),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferFromMainParams {
    pub amount: Decimal,
    pub currency: String,
    #[serde(rename = "subAccount")]
    pub sub_account: String,
}

/// SEPA or international bank withdrawal
///
/// Only the beneficiary fields are mandatory. Bank details, the withdrawal
/// currency and the comment are sent only when set to a non-empty value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BankWithdrawalParams {
    pub amount: Decimal,
    pub account_currency: String,
    pub name: String,
    pub iban: String,
    pub bic: String,
    pub address: String,
    pub postal_code: String,
    pub city: String,
    pub country: String,
    #[serde(rename = "type")]
    pub kind: BankWithdrawalType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Beneficiary of a bank withdrawal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Beneficiary {
    pub name: String,
    pub iban: String,
    pub bic: String,
    pub address: String,
    pub postal_code: String,
    pub city: String,
    pub country: String,
}

impl BankWithdrawalParams {
    pub fn new(
        amount: Decimal,
        account_currency: impl Into<String>,
        beneficiary: Beneficiary,
        kind: BankWithdrawalType,
    ) -> Self {
        Self {
            amount,
            account_currency: account_currency.into(),
            name: beneficiary.name,
            iban: beneficiary.iban,
            bic: beneficiary.bic,
            address: beneficiary.address,
            postal_code: beneficiary.postal_code,
            city: beneficiary.city,
            country: beneficiary.country,
            kind,
            bank_name: None,
            bank_address: None,
            bank_postal_code: None,
            bank_city: None,
            bank_country: None,
            currency: None,
            comment: None,
        }
    }

    #[must_use]
    pub fn with_bank_name(mut self, value: impl Into<String>) -> Self {
        self.bank_name = non_empty(value);
        self
    }

    #[must_use]
    pub fn with_bank_address(mut self, value: impl Into<String>) -> Self {
        self.bank_address = non_empty(value);
        self
    }

    #[must_use]
    pub fn with_bank_postal_code(mut self, value: impl Into<String>) -> Self {
        self.bank_postal_code = non_empty(value);
        self
    }

    #[must_use]
    pub fn with_bank_city(mut self, value: impl Into<String>) -> Self {
        self.bank_city = non_empty(value);
        self
    }

    #[must_use]
    pub fn with_bank_country(mut self, value: impl Into<String>) -> Self {
        self.bank_country = non_empty(value);
        self
    }

    #[must_use]
    pub fn with_currency(mut self, value: impl Into<String>) -> Self {
        self.currency = non_empty(value);
        self
    }

    #[must_use]
    pub fn with_comment(mut self, value: impl Into<String>) -> Self {
        self.comment = non_empty(value);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WithdrawalIdParams {
    pub withdrawal_id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewLiquidationAddressParams {
    pub liquidation_currency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LiquidationAddressInfoParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl LiquidationAddressInfoParams {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: non_empty(address),
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn beneficiary() -> Beneficiary {
        Beneficiary {
            name: "Jane Doe".to_string(),
            iban: "SI56192001234567892".to_string(),
            bic: "LJBASI2X".to_string(),
            address: "Main street 1".to_string(),
            postal_code: "1000".to_string(),
            city: "Ljubljana".to_string(),
            country: "SI".to_string(),
        }
    }

    #[test]
    fn test_bank_withdrawal_skips_unset_optionals() {
        let params = BankWithdrawalParams::new(
            dec!(100),
            "EUR",
            beneficiary(),
            BankWithdrawalType::Sepa,
        );
        let form = to_form_params(&params).unwrap();

        assert!(!form.contains_key("bank_name"));
        assert!(!form.contains_key("comment"));
        assert_eq!(form.get("type").map(String::as_str), Some("sepa"));
        assert_eq!(form.get("amount").map(String::as_str), Some("100"));
        assert_eq!(form.len(), 10);
    }

    #[test]
    fn test_bank_withdrawal_includes_supplied_optionals() {
        let params = BankWithdrawalParams::new(
            dec!(100),
            "EUR",
            beneficiary(),
            BankWithdrawalType::Sepa,
        )
        .with_bank_name("NLB")
        .with_comment("");
        let form = to_form_params(&params).unwrap();

        assert_eq!(form.get("bank_name").map(String::as_str), Some("NLB"));
        assert!(!form.contains_key("comment"));
    }

    #[test]
    fn test_limit_order_wire_format() {
        let params = LimitOrderParams::new(dec!(0.5), dec!(30000.10));
        let form = to_form_params(&params).unwrap();

        assert_eq!(form.get("amount").map(String::as_str), Some("0.5"));
        assert_eq!(form.get("price").map(String::as_str), Some("30000.10"));
        assert_eq!(form.get("daily_order").map(String::as_str), Some("True"));
        assert!(!form.contains_key("limit_price"));

        let params = params.with_limit_price(dec!(31000)).with_daily_order(false);
        let form = to_form_params(&params).unwrap();
        assert_eq!(form.get("limit_price").map(String::as_str), Some("31000"));
        assert_eq!(form.get("daily_order").map(String::as_str), Some("False"));
    }

    #[test]
    fn test_bitcoin_withdrawal_instant_flag() {
        let params = BitcoinWithdrawalParams::new(dec!(0.01), "bc1qexample");
        let form = to_form_params(&params).unwrap();
        assert_eq!(form.get("instant").map(String::as_str), Some("1"));

        let form = to_form_params(&params.with_instant(false)).unwrap();
        assert_eq!(form.get("instant").map(String::as_str), Some("0"));
    }

    #[test]
    fn test_sub_account_wire_name() {
        let form = to_form_params(&TransferToMainParams::new(dec!(1), "BTC", "sub-1")).unwrap();
        assert_eq!(form.get("subAccount").map(String::as_str), Some("sub-1"));

        let form = to_form_params(&TransferToMainParams::new(dec!(1), "BTC", "")).unwrap();
        assert!(!form.contains_key("subAccount"));
    }

    #[test]
    fn test_defaults_and_empty_params() {
        let form = to_form_params(&UserTransactionsParams::default()).unwrap();
        assert_eq!(form.get("offset").map(String::as_str), Some("0"));
        assert_eq!(form.get("limit").map(String::as_str), Some("100"));
        assert_eq!(form.get("sort").map(String::as_str), Some("desc"));

        let form = to_form_params(&WithdrawalRequestsParams::default()).unwrap();
        assert_eq!(form.get("timedelta").map(String::as_str), Some("50000000"));

        assert!(to_form_params(&NoParams::default()).unwrap().is_empty());
    }

    #[test]
    fn test_nested_params_rejected() {
        #[derive(Serialize)]
        struct Nested {
            inner: Vec<u8>,
        }

        let err = to_form_params(&Nested { inner: vec![1] }).unwrap_err();
        assert!(err.is_config_error());
    }
}
