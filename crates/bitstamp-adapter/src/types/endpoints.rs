/*
[INPUT]:  Bitstamp REST endpoint catalogue
[OUTPUT]: Static endpoint table (path template, verb, version, parameters)
[POS]:    Data layer - single source of truth for the endpoint surface
[UPDATE]: When the exchange adds, moves or re-versions an endpoint
*/

use url::form_urlencoded::byte_serialize;

use super::descriptor::RequestDescriptor;
use super::enums::{Access, ApiVersion, HttpMethod};

use ApiVersion::{V1, V2};

/// One row of the endpoint table
///
/// `path` is a template: `{pair}` stands for the currency pair path segment
/// and `{time}` for the transactions look-back window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub name: &'static str,
    pub path: &'static str,
    pub method: HttpMethod,
    pub version: ApiVersion,
    pub access: Access,
    /// Parameters always sent with the request
    pub required: &'static [&'static str],
    /// Parameters sent only when the caller supplies a non-empty value
    pub optional: &'static [&'static str],
}

impl Endpoint {
    /// Substitute `{name}` placeholders in the path template
    ///
    /// Values are percent-encoded, so each one stays inside its own segment
    /// (`/`, `?` and `#` cannot change the target endpoint).
    pub fn render(&self, vars: &[(&str, &str)]) -> String {
        vars.iter()
            .fold(self.path.to_string(), |path, (name, value)| {
                let encoded: String = byte_serialize(value.as_bytes()).collect();
                path.replace(&format!("{{{name}}}"), &encoded)
            })
    }

    /// Start a descriptor for this endpoint with the rendered path
    pub fn descriptor(&self, vars: &[(&str, &str)]) -> RequestDescriptor {
        RequestDescriptor::new(self.method, self.render(vars)).with_version(self.version)
    }

    /// Whether `name` is a declared parameter of this endpoint
    pub fn accepts(&self, name: &str) -> bool {
        self.required.contains(&name) || self.optional.contains(&name)
    }

    pub fn is_private(&self) -> bool {
        self.access == Access::Private
    }
}

const fn public(name: &'static str, path: &'static str) -> Endpoint {
    Endpoint {
        name,
        path,
        method: HttpMethod::Get,
        version: ApiVersion::V2,
        access: Access::Public,
        required: &[],
        optional: &[],
    }
}

const fn private(
    name: &'static str,
    path: &'static str,
    version: ApiVersion,
    required: &'static [&'static str],
    optional: &'static [&'static str],
) -> Endpoint {
    Endpoint {
        name,
        path,
        method: HttpMethod::Post,
        version,
        access: Access::Private,
        required,
        optional,
    }
}

// Public market data

pub const TICKER: Endpoint = public("ticker", "/ticker/{pair}/");
pub const HOURLY_TICKER: Endpoint = public("hourly_ticker", "/ticker_hour/{pair}/");
pub const ORDER_BOOK: Endpoint = public("order_book", "/order_book/{pair}/");
pub const TRANSACTIONS: Endpoint = public("transactions", "/transactions/{pair}?&time={time}");
pub const PAIRS_INFO: Endpoint = public("pairs_info", "/trading-pairs-info/");
pub const EUR_USD: Endpoint = public("eur_usd", "/eur_usd/");

// Account

pub const ACCOUNT_BALANCE: Endpoint = private("account_balance", "/balance/{pair}/", V2, &[], &[]);
pub const USER_TRANSACTIONS: Endpoint = private(
    "user_transactions",
    "/user_transactions/{pair}/",
    V2,
    &["offset", "limit", "sort"],
    &[],
);
pub const OPEN_ORDERS: Endpoint = private("open_orders", "/open_orders/{pair}/", V2, &[], &[]);
pub const ORDER_STATUS: Endpoint = private("order_status", "/order_status/", V1, &["id"], &[]);

// Trading

pub const CANCEL_ORDER: Endpoint = private("cancel_order", "/cancel_order/", V2, &["id"], &[]);
pub const CANCEL_ALL_ORDERS: Endpoint =
    private("cancel_all_orders", "/cancel_all_orders/", V1, &[], &[]);
pub const BUY_LIMIT_ORDER: Endpoint = private(
    "buy_limit_order",
    "/buy/{pair}/",
    V2,
    &["amount", "price", "daily_order"],
    &["limit_price"],
);
pub const BUY_MARKET_ORDER: Endpoint =
    private("buy_market_order", "/buy/market/{pair}/", V2, &["amount"], &[]);
pub const SELL_LIMIT_ORDER: Endpoint = private(
    "sell_limit_order",
    "/sell/{pair}/",
    V2,
    &["amount", "price", "daily_order"],
    &["limit_price"],
);
pub const SELL_MARKET_ORDER: Endpoint =
    private("sell_market_order", "/sell/market/{pair}/", V2, &["amount"], &[]);

// Deposits and withdrawals

pub const WITHDRAWAL_REQUESTS: Endpoint =
    private("withdrawal_requests", "/withdrawal-requests/", V2, &["timedelta"], &[]);
pub const BITCOIN_WITHDRAWAL: Endpoint = private(
    "bitcoin_withdrawal",
    "/bitcoin_withdrawal/",
    V1,
    &["amount", "address", "instant"],
    &[],
);
pub const BITCOIN_DEPOSIT_ADDRESS: Endpoint =
    private("bitcoin_deposit_address", "/bitcoin_deposit_address/", V1, &[], &[]);
pub const UNCONFIRMED_BITCOIN_DEPOSITS: Endpoint =
    private("unconfirmed_bitcoin_deposits", "/unconfirmed_btc/", V1, &[], &[]);
pub const LITECOIN_WITHDRAWAL: Endpoint =
    private("litecoin_withdrawal", "/ltc_withdrawal/", V1, &["amount", "address"], &[]);
pub const LITECOIN_DEPOSIT_ADDRESS: Endpoint =
    private("litecoin_deposit_address", "/ltc_address/", V2, &[], &[]);
pub const ETH_WITHDRAWAL: Endpoint =
    private("eth_withdrawal", "/eth_withdrawal/", V1, &["amount", "address"], &[]);
pub const ETH_DEPOSIT_ADDRESS: Endpoint =
    private("eth_deposit_address", "/eth_address/", V2, &[], &[]);
pub const RIPPLE_WITHDRAWAL: Endpoint = private(
    "ripple_withdrawal",
    "/ripple_withdrawal/",
    V1,
    &["amount", "address", "currency"],
    &[],
);
pub const RIPPLE_DEPOSIT_ADDRESS: Endpoint =
    private("ripple_deposit_address", "/ripple_address/", V1, &[], &[]);
pub const BCH_WITHDRAWAL: Endpoint =
    private("bch_withdrawal", "/bch_withdrawal/", V1, &["amount", "address"], &[]);
pub const BCH_DEPOSIT_ADDRESS: Endpoint =
    private("bch_deposit_address", "/bch_address/", V2, &[], &[]);
pub const XRP_WITHDRAWAL: Endpoint = private(
    "xrp_withdrawal",
    "/xrp_withdrawal/",
    V2,
    &["amount", "address"],
    &["destination_tag"],
);
pub const XRP_DEPOSIT_ADDRESS: Endpoint =
    private("xrp_deposit_address", "/xrp_address/", V2, &[], &[]);

// Sub-account transfers

pub const TRANSFER_TO_MAIN: Endpoint = private(
    "transfer_to_main",
    "/transfer-to-main/",
    V1,
    &["amount", "currency"],
    &["subAccount"],
);
pub const TRANSFER_FROM_MAIN: Endpoint = private(
    "transfer_from_main",
    "/transfer-from-main/",
    V1,
    &["amount", "currency", "subAccount"],
    &[],
);

// Bank withdrawals

pub const OPEN_BANK_WITHDRAWAL: Endpoint = private(
    "open_bank_withdrawal",
    "/withdrawal/open/",
    V2,
    &[
        "amount",
        "account_currency",
        "name",
        "iban",
        "bic",
        "address",
        "postal_code",
        "city",
        "country",
        "type",
    ],
    &[
        "bank_name",
        "bank_address",
        "bank_postal_code",
        "bank_city",
        "bank_country",
        "currency",
        "comment",
    ],
);
pub const BANK_WITHDRAWAL_STATUS: Endpoint =
    private("bank_withdrawal_status", "/withdrawal/status/", V2, &["withdrawal_id"], &[]);
pub const CANCEL_BANK_WITHDRAWAL: Endpoint =
    private("cancel_bank_withdrawal", "/withdrawal/cancel/", V2, &["withdrawal_id"], &[]);

// Liquidation addresses

pub const NEW_LIQUIDATION_ADDRESS: Endpoint = private(
    "new_liquidation_address",
    "/liquidation_address/new/",
    V2,
    &["liquidation_currency"],
    &[],
);
pub const LIQUIDATION_ADDRESS_INFO: Endpoint = private(
    "liquidation_address_info",
    "/liquidation_address/info/",
    V2,
    &[],
    &["address"],
);

/// Every endpoint the adapter exposes
pub const ALL: &[Endpoint] = &[
    TICKER,
    HOURLY_TICKER,
    ORDER_BOOK,
    TRANSACTIONS,
    PAIRS_INFO,
    EUR_USD,
    ACCOUNT_BALANCE,
    USER_TRANSACTIONS,
    OPEN_ORDERS,
    ORDER_STATUS,
    CANCEL_ORDER,
    CANCEL_ALL_ORDERS,
    BUY_LIMIT_ORDER,
    BUY_MARKET_ORDER,
    SELL_LIMIT_ORDER,
    SELL_MARKET_ORDER,
    WITHDRAWAL_REQUESTS,
    BITCOIN_WITHDRAWAL,
    BITCOIN_DEPOSIT_ADDRESS,
    UNCONFIRMED_BITCOIN_DEPOSITS,
    LITECOIN_WITHDRAWAL,
    LITECOIN_DEPOSIT_ADDRESS,
    ETH_WITHDRAWAL,
    ETH_DEPOSIT_ADDRESS,
    RIPPLE_WITHDRAWAL,
    RIPPLE_DEPOSIT_ADDRESS,
    BCH_WITHDRAWAL,
    BCH_DEPOSIT_ADDRESS,
    XRP_WITHDRAWAL,
    XRP_DEPOSIT_ADDRESS,
    TRANSFER_TO_MAIN,
    TRANSFER_FROM_MAIN,
    OPEN_BANK_WITHDRAWAL,
    BANK_WITHDRAWAL_STATUS,
    CANCEL_BANK_WITHDRAWAL,
    NEW_LIQUIDATION_ADDRESS,
    LIQUIDATION_ADDRESS_INFO,
];

/// Find an endpoint by operation name
pub fn lookup(name: &str) -> Option<&'static Endpoint> {
    ALL.iter().find(|endpoint| endpoint.name == name)
}
