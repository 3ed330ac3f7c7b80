/*
[INPUT]:  HTTP client configuration and API commands
[OUTPUT]: Decoded JSON responses from public and private endpoints
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod lending;
pub mod public;
pub mod trade;
pub mod user;

pub use error::{PoloniexError, Result};

pub use client::{ClientConfig, PoloniexClient, PRIVATE_API_URL, PUBLIC_API_URL, USER_AGENT};
