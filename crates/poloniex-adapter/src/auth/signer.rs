/*
[INPUT]:  Credentials and the full parameter mapping (nonce included)
[OUTPUT]: `Key` / `Sign` header values (hex HMAC-SHA512)
[POS]:    Auth layer - request signing for private endpoints
[UPDATE]: When changing signing algorithm or header format
*/

use hmac::{Hmac, Mac};
use sha2::Sha512;

use super::Credentials;
use crate::http::{PoloniexError, Result};
use crate::types::Params;

type HmacSha512 = Hmac<Sha512>;

pub const KEY_HEADER: &str = "Key";
pub const SIGN_HEADER: &str = "Sign";

/// Header values attached to a private request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    pub key: String,
    pub sign: String,
}

/// Signs private request parameters with the account secret
#[derive(Debug, Clone, Default)]
pub struct RequestSigner {
    credentials: Credentials,
}

impl RequestSigner {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// Public key of the wrapped credentials.
    pub fn key(&self) -> &str {
        self.credentials.key()
    }

    /// Sign a parameter mapping.
    ///
    /// The signature is `hex(HMAC-SHA512(secret, params.canonical_string()))`.
    /// Fails with [`PoloniexError::Config`] when either credential is empty.
    pub fn sign(&self, params: &Params) -> Result<AuthHeaders> {
        if !self.credentials.is_complete() {
            return Err(PoloniexError::Config(
                "API key and secret required".to_string(),
            ));
        }

        let mut mac = HmacSha512::new_from_slice(self.credentials.secret().as_bytes())
            .map_err(|e| PoloniexError::Config(format!("invalid API secret: {e}")))?;
        mac.update(params.canonical_string().as_bytes());

        Ok(AuthHeaders {
            key: self.credentials.key().to_string(),
            sign: hex::encode(mac.finalize().into_bytes()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Command;

    fn signer() -> RequestSigner {
        RequestSigner::new(Credentials::new("test-key", "test-secret"))
    }

    #[test]
    fn test_sign_returns_key_verbatim() {
        let headers = signer()
            .sign(&Params::new(Command::ReturnBalances).with("nonce", 1u64))
            .unwrap();

        assert_eq!(headers.key, "test-key");
        assert_eq!(headers.sign.len(), 128);
        assert!(headers.sign.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_sign_covers_canonical_string() {
        let signer = RequestSigner::new(Credentials::new("k", "Jefe"));
        let mut mac = HmacSha512::new_from_slice(b"Jefe").unwrap();
        mac.update(b"a=1&b=2");
        let expected = hex::encode(mac.finalize().into_bytes());

        let params = Params::default().with("b", 2u32).with("a", 1u32);
        assert_eq!(signer.sign(&params).unwrap().sign, expected);
    }

    #[test]
    fn test_sign_is_order_independent() {
        let a = Params::default().with("b", 2u32).with("a", 1u32);
        let b = Params::default().with("a", 1u32).with("b", 2u32);

        assert_eq!(signer().sign(&a).unwrap(), signer().sign(&b).unwrap());
    }

    #[test]
    fn test_sign_is_deterministic_and_value_sensitive() {
        let base = Params::new(Command::Buy)
            .with("currencyPair", "BTC_ETH")
            .with("rate", "0.05")
            .with("amount", "10")
            .with("nonce", 42u64);

        let first = signer().sign(&base).unwrap();
        let again = signer().sign(&base).unwrap();
        assert_eq!(first, again);

        let bumped_nonce = base.clone().with("nonce", 43u64);
        assert_ne!(first.sign, signer().sign(&bumped_nonce).unwrap().sign);

        let other_rate = base.with("rate", "0.06");
        assert_ne!(first.sign, signer().sign(&other_rate).unwrap().sign);
    }

    #[test]
    fn test_sign_requires_key_and_secret() {
        let params = Params::new(Command::ReturnBalances);

        for credentials in [
            Credentials::new("", "secret"),
            Credentials::new("key", ""),
            Credentials::default(),
        ] {
            let err = RequestSigner::new(credentials).sign(&params).unwrap_err();
            assert!(matches!(err, PoloniexError::Config(_)));
        }
    }
}
