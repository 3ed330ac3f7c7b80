/*
[INPUT]:  API key/secret pair and outgoing private parameters
[OUTPUT]: Nonces and signed authentication headers
[POS]:    Auth layer - handles exchange API authentication
[UPDATE]: When auth flow or signature methods change
*/

pub mod credentials;
pub mod nonce;
pub mod signer;

pub use credentials::Credentials;
pub use nonce::{IncreasingNonce, NonceProvider};
pub use signer::{AuthHeaders, RequestSigner};
