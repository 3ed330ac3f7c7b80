/*
[INPUT]:  Order parameters (pair, rate, amount, order number) and withdrawal targets
[OUTPUT]: Exchange confirmations, passed through as JSON
[POS]:    HTTP layer - trading endpoints (require signed requests)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use serde_json::Value;

use crate::http::{PoloniexClient, Result};
use crate::types::{Command, ParamValue, Params};

impl PoloniexClient {
    /// Place a limit buy order
    ///
    /// POST /tradingApi command=buy&currencyPair&rate&amount
    pub async fn buy(
        &self,
        currency_pair: &str,
        rate: impl Into<ParamValue>,
        amount: impl Into<ParamValue>,
    ) -> Result<Value> {
        self.private_request(order_params(Command::Buy, currency_pair, rate, amount))
            .await
    }

    /// Place a limit sell order
    ///
    /// POST /tradingApi command=sell&currencyPair&rate&amount
    pub async fn sell(
        &self,
        currency_pair: &str,
        rate: impl Into<ParamValue>,
        amount: impl Into<ParamValue>,
    ) -> Result<Value> {
        self.private_request(order_params(Command::Sell, currency_pair, rate, amount))
            .await
    }

    /// Cancel an open order
    ///
    /// POST /tradingApi command=cancelOrder&orderNumber
    pub async fn cancel_order(&self, order_number: impl Into<ParamValue>) -> Result<Value> {
        let params = Params::new(Command::CancelOrder).with("orderNumber", order_number);
        self.private_request(params).await
    }

    /// Cancel an order and place a new one at `rate` in a single call
    ///
    /// POST /tradingApi command=moveOrder&orderNumber&rate&amount
    pub async fn move_order(
        &self,
        order_number: impl Into<ParamValue>,
        rate: impl Into<ParamValue>,
        amount: impl Into<ParamValue>,
    ) -> Result<Value> {
        let params = Params::new(Command::MoveOrder)
            .with("orderNumber", order_number)
            .with("rate", rate)
            .with("amount", amount);
        self.private_request(params).await
    }

    /// Withdraw funds to an external address
    ///
    /// POST /tradingApi command=withdraw&currency&amount&address
    pub async fn withdraw(
        &self,
        currency: &str,
        amount: impl Into<ParamValue>,
        address: &str,
    ) -> Result<Value> {
        let params = Params::new(Command::Withdraw)
            .with("currency", currency)
            .with("amount", amount)
            .with("address", address);
        self.private_request(params).await
    }
}

fn order_params(
    command: Command,
    currency_pair: &str,
    rate: impl Into<ParamValue>,
    amount: impl Into<ParamValue>,
) -> Params {
    Params::new(command)
        .with("currencyPair", currency_pair)
        .with("rate", rate)
        .with("amount", amount)
}

#[cfg(test)]
mod tests {
    use crate::http::testing::{TEST_KEY, expected_sign, private_client_for};
    use rust_decimal::Decimal;
    use serde_json::json;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mount_private(server: &MockServer, body: &str, reply: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path("/tradingApi"))
            .and(header("Key", TEST_KEY))
            .and(header("Sign", expected_sign(body).as_str()))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string(body))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_buy_signs_body_with_nonce() {
        let server = MockServer::start().await;
        let body = "amount=10&command=buy&currencyPair=BTC_ETH&nonce=1000&rate=0.05";
        let reply = json!({"orderNumber": 31226040, "resultingTrades": []});
        mount_private(&server, body, reply.clone()).await;

        let response = private_client_for(&server, 1000)
            .buy("BTC_ETH", "0.05", "10")
            .await
            .expect("buy failed");

        assert_eq!(response, reply);
    }

    #[tokio::test]
    async fn test_sell_with_decimal_arguments() {
        let server = MockServer::start().await;
        let body = "amount=2.5&command=sell&currencyPair=BTC_XMR&nonce=1&rate=0.0125";
        mount_private(&server, body, json!({"orderNumber": 1})).await;

        let rate: Decimal = "0.0125".parse().expect("rate");
        let amount: Decimal = "2.5".parse().expect("amount");
        private_client_for(&server, 1)
            .sell("BTC_XMR", rate, amount)
            .await
            .expect("sell failed");
    }

    #[tokio::test]
    async fn test_cancel_order() {
        let server = MockServer::start().await;
        let body = "command=cancelOrder&nonce=2&orderNumber=120466";
        mount_private(&server, body, json!({"success": 1})).await;

        let response = private_client_for(&server, 2)
            .cancel_order(120_466u64)
            .await
            .expect("cancel_order failed");

        assert_eq!(response, json!({"success": 1}));
    }

    #[tokio::test]
    async fn test_move_order() {
        let server = MockServer::start().await;
        let body = "amount=5&command=moveOrder&nonce=3&orderNumber=82630&rate=0.00015";
        mount_private(&server, body, json!({"success": 1, "orderNumber": "82631"})).await;

        private_client_for(&server, 3)
            .move_order("82630", "0.00015", 5u32)
            .await
            .expect("move_order failed");
    }

    #[tokio::test]
    async fn test_withdraw_encodes_address() {
        let server = MockServer::start().await;
        let body = "address=r9XyZ+tag%3D42&amount=20&command=withdraw&currency=XRP&nonce=4";
        mount_private(&server, body, json!({"response": "Withdrew 20 XRP."})).await;

        private_client_for(&server, 4)
            .withdraw("XRP", "20", "r9XyZ tag=42")
            .await
            .expect("withdraw failed");
    }

    #[tokio::test]
    async fn test_application_error_is_returned_as_payload() {
        let server = MockServer::start().await;
        let body = "amount=1000&command=buy&currencyPair=BTC_ETH&nonce=5&rate=1";
        let reply = json!({"error": "Not enough BTC."});
        mount_private(&server, body, reply.clone()).await;

        let response = private_client_for(&server, 5)
            .buy("BTC_ETH", 1u32, 1000u32)
            .await
            .expect("200 responses are never errors");

        assert_eq!(response, reply);
    }
}
