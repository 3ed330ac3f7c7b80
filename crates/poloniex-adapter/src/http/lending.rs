/*
[INPUT]:  Loan offer terms (currency, amount, duration, renewal, rate)
[OUTPUT]: Loan offer confirmations and lending state
[POS]:    HTTP layer - margin lending endpoints (require signed requests)
[UPDATE]: When adding new lending endpoints
*/

use serde_json::Value;

use crate::http::{PoloniexClient, Result};
use crate::types::{Command, ParamValue, Params};

impl PoloniexClient {
    /// Offer funds on the lending book
    ///
    /// POST /tradingApi command=createLoanOffer&currency&amount&duration&autoRenew&lendingRate
    pub async fn create_loan_offer(
        &self,
        currency: &str,
        amount: impl Into<ParamValue>,
        duration_days: u32,
        auto_renew: bool,
        lending_rate: impl Into<ParamValue>,
    ) -> Result<Value> {
        let params = Params::new(Command::CreateLoanOffer)
            .with("currency", currency)
            .with("amount", amount)
            .with("duration", duration_days)
            .with("autoRenew", u8::from(auto_renew))
            .with("lendingRate", lending_rate);
        self.private_request(params).await
    }

    /// POST /tradingApi command=cancelLoanOffer&orderNumber
    pub async fn cancel_loan_offer(&self, order_number: impl Into<ParamValue>) -> Result<Value> {
        let params = Params::new(Command::CancelLoanOffer).with("orderNumber", order_number);
        self.private_request(params).await
    }

    /// POST /tradingApi command=returnOpenLoanOffers
    pub async fn my_open_loan_offers(&self) -> Result<Value> {
        self.private_request(Params::new(Command::ReturnOpenLoanOffers))
            .await
    }

    /// POST /tradingApi command=returnActiveLoans
    pub async fn my_active_loans(&self) -> Result<Value> {
        self.private_request(Params::new(Command::ReturnActiveLoans))
            .await
    }
}
