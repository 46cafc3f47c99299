/*
[INPUT]:  Withdrawal, transfer and deposit-address parameters
[OUTPUT]: Deposit addresses and funding operation results
[POS]:    HTTP layer - private deposit, withdrawal and transfer endpoints
[UPDATE]: When adding currencies or changing withdrawal parameters
*/

use serde_json::Value;

use crate::http::{BitstampPrivateClient, Result};
use crate::types::endpoints::{
    BANK_WITHDRAWAL_STATUS, BCH_DEPOSIT_ADDRESS, BCH_WITHDRAWAL, BITCOIN_DEPOSIT_ADDRESS,
    BITCOIN_WITHDRAWAL, CANCEL_BANK_WITHDRAWAL, ETH_DEPOSIT_ADDRESS, ETH_WITHDRAWAL,
    LIQUIDATION_ADDRESS_INFO, LITECOIN_DEPOSIT_ADDRESS, LITECOIN_WITHDRAWAL,
    NEW_LIQUIDATION_ADDRESS, OPEN_BANK_WITHDRAWAL, RIPPLE_DEPOSIT_ADDRESS, RIPPLE_WITHDRAWAL,
    TRANSFER_FROM_MAIN, TRANSFER_TO_MAIN, UNCONFIRMED_BITCOIN_DEPOSITS, WITHDRAWAL_REQUESTS,
    XRP_DEPOSIT_ADDRESS, XRP_WITHDRAWAL,
};
use crate::types::{
    BankWithdrawalParams, BitcoinWithdrawalParams, CryptoWithdrawalParams, DepositAddress,
    LiquidationAddressInfoParams, NewLiquidationAddressParams, NoParams, RippleWithdrawalParams,
    TransferFromMainParams, TransferToMainParams, WithdrawalIdParams, WithdrawalRequestsParams,
    XrpWithdrawalParams,
};

impl BitstampPrivateClient {
    /// Withdrawal requests made within `timedelta` seconds
    ///
    /// POST /api/v2/withdrawal-requests/
    pub async fn withdrawal_requests(&self, params: &WithdrawalRequestsParams) -> Result<Value> {
        self.call(&WITHDRAWAL_REQUESTS, &[], params).await
    }

    /// POST /api/bitcoin_withdrawal/
    pub async fn bitcoin_withdrawal(&self, params: &BitcoinWithdrawalParams) -> Result<Value> {
        self.call(&BITCOIN_WITHDRAWAL, &[], params).await
    }

    /// POST /api/bitcoin_deposit_address/
    pub async fn bitcoin_deposit_address(&self) -> Result<DepositAddress> {
        self.call(&BITCOIN_DEPOSIT_ADDRESS, &[], &NoParams {}).await
    }

    /// Deposits to the account's bitcoin address that are not yet confirmed
    ///
    /// POST /api/unconfirmed_btc/
    pub async fn unconfirmed_bitcoin_deposits(&self) -> Result<Value> {
        self.call(&UNCONFIRMED_BITCOIN_DEPOSITS, &[], &NoParams {})
            .await
    }

    /// POST /api/ltc_withdrawal/
    pub async fn litecoin_withdrawal(&self, params: &CryptoWithdrawalParams) -> Result<Value> {
        self.call(&LITECOIN_WITHDRAWAL, &[], params).await
    }

    /// POST /api/v2/ltc_address/
    pub async fn litecoin_deposit_address(&self) -> Result<DepositAddress> {
        self.call(&LITECOIN_DEPOSIT_ADDRESS, &[], &NoParams {})
            .await
    }

    /// POST /api/eth_withdrawal/
    pub async fn eth_withdrawal(&self, params: &CryptoWithdrawalParams) -> Result<Value> {
        self.call(&ETH_WITHDRAWAL, &[], params).await
    }

    /// POST /api/v2/eth_address/
    pub async fn eth_deposit_address(&self) -> Result<DepositAddress> {
        self.call(&ETH_DEPOSIT_ADDRESS, &[], &NoParams {}).await
    }

    /// Withdraw an IOU currency over the Ripple network
    ///
    /// POST /api/ripple_withdrawal/
    pub async fn ripple_withdrawal(&self, params: &RippleWithdrawalParams) -> Result<Value> {
        self.call(&RIPPLE_WITHDRAWAL, &[], params).await
    }

    /// POST /api/ripple_address/
    pub async fn ripple_deposit_address(&self) -> Result<DepositAddress> {
        self.call(&RIPPLE_DEPOSIT_ADDRESS, &[], &NoParams {}).await
    }

    /// POST /api/bch_withdrawal/
    pub async fn bch_withdrawal(&self, params: &CryptoWithdrawalParams) -> Result<Value> {
        self.call(&BCH_WITHDRAWAL, &[], params).await
    }

    /// POST /api/v2/bch_address/
    pub async fn bch_deposit_address(&self) -> Result<DepositAddress> {
        self.call(&BCH_DEPOSIT_ADDRESS, &[], &NoParams {}).await
    }

    /// POST /api/v2/xrp_withdrawal/
    pub async fn xrp_withdrawal(&self, params: &XrpWithdrawalParams) -> Result<Value> {
        self.call(&XRP_WITHDRAWAL, &[], params).await
    }

    /// Address and destination tag for XRP deposits
    ///
    /// POST /api/v2/xrp_address/
    pub async fn xrp_deposit_address(&self) -> Result<DepositAddress> {
        self.call(&XRP_DEPOSIT_ADDRESS, &[], &NoParams {}).await
    }

    /// Move funds from a sub account to the main account
    ///
    /// POST /api/transfer-to-main/
    pub async fn transfer_to_main(&self, params: &TransferToMainParams) -> Result<Value> {
        self.call(&TRANSFER_TO_MAIN, &[], params).await
    }

    /// Move funds from the main account to a sub account
    ///
    /// POST /api/transfer-from-main/
    pub async fn transfer_from_main(&self, params: &TransferFromMainParams) -> Result<Value> {
        self.call(&TRANSFER_FROM_MAIN, &[], params).await
    }

    /// Open a SEPA or international bank withdrawal
    ///
    /// POST /api/v2/withdrawal/open/
    pub async fn open_bank_withdrawal(&self, params: &BankWithdrawalParams) -> Result<Value> {
        self.call(&OPEN_BANK_WITHDRAWAL, &[], params).await
    }

    /// POST /api/v2/withdrawal/status/
    pub async fn bank_withdrawal_status(&self, withdrawal_id: u64) -> Result<Value> {
        self.call(&BANK_WITHDRAWAL_STATUS, &[], &WithdrawalIdParams { withdrawal_id })
            .await
    }

    /// POST /api/v2/withdrawal/cancel/
    pub async fn cancel_bank_withdrawal(&self, withdrawal_id: u64) -> Result<Value> {
        self.call(&CANCEL_BANK_WITHDRAWAL, &[], &WithdrawalIdParams { withdrawal_id })
            .await
    }

    /// Create an address whose deposits are sold into `liquidation_currency`
    ///
    /// POST /api/v2/liquidation_address/new/
    pub async fn new_liquidation_address(&self, liquidation_currency: &str) -> Result<Value> {
        let params = NewLiquidationAddressParams {
            liquidation_currency: liquidation_currency.to_string(),
        };
        self.call(&NEW_LIQUIDATION_ADDRESS, &[], &params).await
    }

    /// Deposits to liquidation addresses; all addresses when none is given
    ///
    /// POST /api/v2/liquidation_address/info/
    pub async fn liquidation_address_info(
        &self,
        params: &LiquidationAddressInfoParams,
    ) -> Result<Value> {
        self.call(&LIQUIDATION_ADDRESS_INFO, &[], params).await
    }
}
