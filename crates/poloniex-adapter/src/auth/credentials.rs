/*
[INPUT]:  API key and secret supplied by the caller
[OUTPUT]: Credential holder that never exposes the secret
[POS]:    Auth layer - credential storage for one client instance
[UPDATE]: When credential sources change
*/

use std::fmt;

/// API key and secret for private endpoints.
///
/// Only the key is readable. The secret is reachable from the signer and
/// nowhere else, and `Debug` output redacts it.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    key: String,
    secret: String,
}

impl Credentials {
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }

    /// Public API key, sent verbatim in the `Key` header.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether both halves are present.
    pub fn is_complete(&self) -> bool {
        !self.key.is_empty() && !self.secret.is_empty()
    }

    pub(crate) fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .finish()
    }
}
