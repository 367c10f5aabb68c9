//! Shared-secret administrator gate.

use crate::request::ports::AdminGate;
use std::fmt;

/// Grants access when the presented secret equals a configured value.
///
/// The comparison is a plain string equality. There is no hashing, rate
/// limiting or lockout.
#[derive(Clone)]
pub struct StaticSecretGate {
    secret: String,
}

impl StaticSecretGate {
    /// Creates a gate for the given shared secret.
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl AdminGate for StaticSecretGate {
    fn admit(&self, secret: &str) -> bool {
        !self.secret.is_empty() && secret == self.secret
    }
}

impl fmt::Debug for StaticSecretGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticSecretGate")
            .field("secret", &"<redacted>")
            .finish()
    }
}
