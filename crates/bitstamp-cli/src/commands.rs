/*
[INPUT]:  Parsed subcommand and CLI configuration
[OUTPUT]: JSON value describing the exchange response
[POS]:    Command layer - maps subcommands onto adapter calls
[UPDATE]: When exposing more endpoints on the command line
*/

use anyhow::{Context, Result};
use bitstamp_adapter::{
    LimitOrderParams, MarketOrderParams, SortOrder, TransactionWindow, UserTransactionsParams,
    WithdrawalRequestsParams,
};
use clap::{Subcommand, ValueEnum};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::config::CliConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WindowArg {
    Minute,
    Hour,
    Day,
}

impl From<WindowArg> for TransactionWindow {
    fn from(window: WindowArg) -> Self {
        match window {
            WindowArg::Minute => TransactionWindow::Minute,
            WindowArg::Hour => TransactionWindow::Hour,
            WindowArg::Day => TransactionWindow::Day,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DepositCurrency {
    Btc,
    Ltc,
    Eth,
    Ripple,
    Bch,
    Xrp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Side {
    Buy,
    Sell,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Last 24h (or last hour) ticker
    Ticker {
        pair: String,
        #[arg(long)]
        hourly: bool,
    },
    /// Full order book
    OrderBook { pair: String },
    /// Recent public trades
    Transactions {
        pair: String,
        #[arg(long, value_enum, default_value = "hour")]
        time: WindowArg,
    },
    /// Trading pair metadata
    PairsInfo,
    /// EUR/USD conversion rate
    EurUsd,
    /// Account balance for a pair
    Balance { pair: String },
    /// Open orders, `all` for every pair
    OpenOrders {
        #[arg(default_value = "all")]
        pair: String,
    },
    /// Account transaction history
    UserTransactions {
        pair: String,
        #[arg(long, default_value_t = 0)]
        offset: u32,
        #[arg(long, default_value_t = 100)]
        limit: u32,
        #[arg(long)]
        ascending: bool,
    },
    /// Status of a single order
    OrderStatus { id: u64 },
    /// Place a limit order
    LimitOrder {
        #[arg(value_enum)]
        side: Side,
        pair: String,
        amount: Decimal,
        price: Decimal,
        #[arg(long)]
        limit_price: Option<Decimal>,
        /// Keep the order open past the end of the day
        #[arg(long)]
        good_till_cancel: bool,
    },
    /// Place a market order
    MarketOrder {
        #[arg(value_enum)]
        side: Side,
        pair: String,
        amount: Decimal,
    },
    /// Cancel one order
    CancelOrder { id: u64 },
    /// Cancel every open order
    CancelAllOrders,
    /// Deposit address for a currency
    DepositAddress {
        #[arg(value_enum)]
        currency: DepositCurrency,
    },
    /// Recent withdrawal requests
    WithdrawalRequests {
        /// Look-back in seconds
        #[arg(long)]
        timedelta: Option<u64>,
    },
}

impl Command {
    pub fn is_private(&self) -> bool {
        !matches!(
            self,
            Command::Ticker { .. }
                | Command::OrderBook { .. }
                | Command::Transactions { .. }
                | Command::PairsInfo
                | Command::EurUsd
        )
    }

    /// Run the command and return the response as JSON
    pub async fn execute(&self, config: &CliConfig) -> Result<Value> {
        info!(command = ?self, private = self.is_private(), "executing command");
        if self.is_private() {
            self.execute_private(config).await
        } else {
            self.execute_public(config).await
        }
    }

    async fn execute_public(&self, config: &CliConfig) -> Result<Value> {
        let client = config.public_client()?;
        match self {
            Command::Ticker { pair, hourly: false } => to_json(client.ticker(pair).await?),
            Command::Ticker { pair, hourly: true } => to_json(client.hourly_ticker(pair).await?),
            Command::OrderBook { pair } => to_json(client.order_book(pair).await?),
            Command::Transactions { pair, time } => {
                to_json(client.transactions(pair, (*time).into()).await?)
            }
            Command::PairsInfo => to_json(client.pairs_info().await?),
            Command::EurUsd => to_json(client.eur_usd().await?),
            other => anyhow::bail!("{other:?} requires credentials"),
        }
    }

    async fn execute_private(&self, config: &CliConfig) -> Result<Value> {
        let client = config.private_client()?;
        let value = match self {
            Command::Balance { pair } => client.account_balance(pair).await?,
            Command::OpenOrders { pair } => client.open_orders(pair).await?,
            Command::UserTransactions {
                pair,
                offset,
                limit,
                ascending,
            } => {
                let params = UserTransactionsParams {
                    offset: *offset,
                    limit: *limit,
                    sort: if *ascending {
                        SortOrder::Asc
                    } else {
                        SortOrder::Desc
                    },
                };
                client.user_transactions(pair, &params).await?
            }
            Command::OrderStatus { id } => client.order_status(*id).await?,
            Command::LimitOrder {
                side,
                pair,
                amount,
                price,
                limit_price,
                good_till_cancel,
            } => {
                let mut order =
                    LimitOrderParams::new(*amount, *price).with_daily_order(!good_till_cancel);
                if let Some(limit_price) = limit_price {
                    order = order.with_limit_price(*limit_price);
                }
                match side {
                    Side::Buy => client.buy_limit_order(pair, &order).await?,
                    Side::Sell => client.sell_limit_order(pair, &order).await?,
                }
            }
            Command::MarketOrder { side, pair, amount } => {
                let order = MarketOrderParams { amount: *amount };
                match side {
                    Side::Buy => client.buy_market_order(pair, &order).await?,
                    Side::Sell => client.sell_market_order(pair, &order).await?,
                }
            }
            Command::CancelOrder { id } => client.cancel_order(*id).await?,
            Command::CancelAllOrders => client.cancel_all_orders().await?,
            Command::DepositAddress { currency } => {
                let address = match currency {
                    DepositCurrency::Btc => client.bitcoin_deposit_address().await?,
                    DepositCurrency::Ltc => client.litecoin_deposit_address().await?,
                    DepositCurrency::Eth => client.eth_deposit_address().await?,
                    DepositCurrency::Ripple => client.ripple_deposit_address().await?,
                    DepositCurrency::Bch => client.bch_deposit_address().await?,
                    DepositCurrency::Xrp => client.xrp_deposit_address().await?,
                };
                return to_json(address);
            }
            Command::WithdrawalRequests { timedelta } => {
                let params = timedelta
                    .map(|timedelta| WithdrawalRequestsParams { timedelta })
                    .unwrap_or_default();
                client.withdrawal_requests(&params).await?
            }
            other => anyhow::bail!("{other:?} is not a private command"),
        };
        Ok(value)
    }
}

fn to_json<T: Serialize>(value: T) -> Result<Value> {
    serde_json::to_value(value).context("encode response as JSON")
}
