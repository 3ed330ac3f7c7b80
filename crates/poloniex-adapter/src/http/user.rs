/*
[INPUT]:  Currency pairs for account-scoped queries
[OUTPUT]: Account data (balances, open orders, own trades, fees)
[POS]:    HTTP layer - account endpoints (require signed requests)
[UPDATE]: When adding new account endpoints or changing query parameters
*/

use serde_json::Value;

use crate::http::{PoloniexClient, Result};
use crate::types::{Command, Params};

impl PoloniexClient {
    /// Available balance per currency
    ///
    /// POST /tradingApi command=returnBalances
    pub async fn my_balances(&self) -> Result<Value> {
        self.private_request(Params::new(Command::ReturnBalances))
            .await
    }

    /// Available, on-order and BTC-valued balance per currency
    ///
    /// POST /tradingApi command=returnCompleteBalances
    pub async fn my_complete_balances(&self) -> Result<Value> {
        self.private_request(Params::new(Command::ReturnCompleteBalances))
            .await
    }

    /// Balances split by account (exchange, margin, lending)
    ///
    /// POST /tradingApi command=returnAvailableAccountBalances
    pub async fn my_available_account_balances(&self) -> Result<Value> {
        self.private_request(Params::new(Command::ReturnAvailableAccountBalances))
            .await
    }

    /// Open orders for a pair, or `"all"`
    ///
    /// POST /tradingApi command=returnOpenOrders&currencyPair={pair}
    pub async fn my_open_orders(&self, currency_pair: &str) -> Result<Value> {
        let params = Params::new(Command::ReturnOpenOrders).with("currencyPair", currency_pair);
        self.private_request(params).await
    }

    /// The account's own trades for a pair, or `"all"`
    ///
    /// POST /tradingApi command=returnTradeHistory&currencyPair={pair}
    pub async fn my_trade_history(&self, currency_pair: &str) -> Result<Value> {
        let params =
            Params::new(Command::ReturnMyTradeHistory).with("currencyPair", currency_pair);
        self.private_request(params).await
    }

    /// Maker/taker fees and 30 day volume
    ///
    /// POST /tradingApi command=returnFeeInfo
    pub async fn get_fee_info(&self) -> Result<Value> {
        self.private_request(Params::new(Command::ReturnFeeInfo))
            .await
    }
}
