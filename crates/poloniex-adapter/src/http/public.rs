/*
[INPUT]:  Currency pairs and query ranges
[OUTPUT]: Market data (ticker, volume, currencies, order book, trades)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use serde_json::Value;

use crate::http::{PoloniexClient, Result};
use crate::types::{Command, Params};

impl PoloniexClient {
    /// Ticker snapshot for every market
    ///
    /// GET /public?command=returnTicker
    pub async fn get_ticker(&self) -> Result<Value> {
        self.public_request(Params::new(Command::ReturnTicker)).await
    }

    /// Rolling 24 hour volume per market
    ///
    /// GET /public?command=return24hVolume
    pub async fn get_24h_volume(&self) -> Result<Value> {
        self.public_request(Params::new(Command::Return24hVolume))
            .await
    }

    /// Currency list
    ///
    /// GET /public?command=returnCurrencies
    pub async fn get_currencies(&self) -> Result<Value> {
        self.public_request(Params::new(Command::ReturnCurrencies))
            .await
    }

    /// Order book for a pair
    ///
    /// GET /public?command=returnOrderBook&currencyPair={pair}&depth={depth}
    pub async fn get_order_book(&self, currency_pair: &str, depth: u32) -> Result<Value> {
        let params = Params::new(Command::ReturnOrderBook)
            .with("currencyPair", currency_pair)
            .with("depth", depth);
        self.public_request(params).await
    }

    /// Market trades for a pair between two unix timestamps (seconds)
    ///
    /// GET /public?command=returnTradeHistory&currencyPair={pair}&start={start}&end={end}
    pub async fn get_trade_history(
        &self,
        currency_pair: &str,
        start: u64,
        end: u64,
    ) -> Result<Value> {
        let params = Params::new(Command::ReturnTradeHistory)
            .with("currencyPair", currency_pair)
            .with("start", start)
            .with("end", end);
        self.public_request(params).await
    }
}
