/*
[INPUT]:  Exchange API command names
[OUTPUT]: Typed Rust enums with wire-name mapping
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API commands are added or renamed
*/

use std::fmt;

/// Which endpoint a command is served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Public,
    Private,
}

/// Every API verb the client knows how to issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    ReturnTicker,
    Return24hVolume,
    ReturnCurrencies,
    ReturnOrderBook,
    /// Public market trades. Shares its wire name with [`Command::ReturnMyTradeHistory`].
    ReturnTradeHistory,
    ReturnBalances,
    ReturnCompleteBalances,
    ReturnAvailableAccountBalances,
    ReturnOpenOrders,
    /// The account's own trades, sent to the private endpoint.
    ReturnMyTradeHistory,
    Buy,
    Sell,
    CancelOrder,
    MoveOrder,
    ReturnFeeInfo,
    Withdraw,
    CreateLoanOffer,
    CancelLoanOffer,
    ReturnOpenLoanOffers,
    ReturnActiveLoans,
}

impl Command {
    /// Value sent in the `command` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::ReturnTicker => "returnTicker",
            Command::Return24hVolume => "return24hVolume",
            Command::ReturnCurrencies => "returnCurrencies",
            Command::ReturnOrderBook => "returnOrderBook",
            Command::ReturnTradeHistory | Command::ReturnMyTradeHistory => "returnTradeHistory",
            Command::ReturnBalances => "returnBalances",
            Command::ReturnCompleteBalances => "returnCompleteBalances",
            Command::ReturnAvailableAccountBalances => "returnAvailableAccountBalances",
            Command::ReturnOpenOrders => "returnOpenOrders",
            Command::Buy => "buy",
            Command::Sell => "sell",
            Command::CancelOrder => "cancelOrder",
            Command::MoveOrder => "moveOrder",
            Command::ReturnFeeInfo => "returnFeeInfo",
            Command::Withdraw => "withdraw",
            Command::CreateLoanOffer => "createLoanOffer",
            Command::CancelLoanOffer => "cancelLoanOffer",
            Command::ReturnOpenLoanOffers => "returnOpenLoanOffers",
            Command::ReturnActiveLoans => "returnActiveLoans",
        }
    }

    /// Endpoint the command must be dispatched to.
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Command::ReturnTicker
            | Command::Return24hVolume
            | Command::ReturnCurrencies
            | Command::ReturnOrderBook
            | Command::ReturnTradeHistory => Endpoint::Public,
            _ => Endpoint::Private,
        }
    }

    pub fn is_private(&self) -> bool {
        self.endpoint() == Endpoint::Private
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
