//! Administrator access check.

use crate::request::ports::AdminGate;
use std::sync::Arc;
use tracing::{info, warn};

/// Outcome of presenting a secret to the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessDecision {
    /// The secret was accepted.
    Granted,
    /// The secret was rejected.
    Denied,
}

impl AccessDecision {
    /// Returns `true` when access was granted.
    #[must_use]
    pub const fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }

    /// Returns the notice shown after the attempt.
    #[must_use]
    pub const fn notice(self) -> &'static str {
        match self {
            Self::Granted => "Welcome to the admin panel",
            Self::Denied => "Invalid password",
        }
    }
}

/// Runs login attempts through an injected [`AdminGate`].
pub struct AdminAccess<G>
where
    G: AdminGate,
{
    gate: Arc<G>,
}

impl<G> Clone for AdminAccess<G>
where
    G: AdminGate,
{
    fn clone(&self) -> Self {
        Self {
            gate: Arc::clone(&self.gate),
        }
    }
}

impl<G> AdminAccess<G>
where
    G: AdminGate,
{
    /// Creates an access check over the given gate.
    #[must_use]
    pub const fn new(gate: Arc<G>) -> Self {
        Self { gate }
    }

    /// Presents `secret` to the gate.
    #[must_use]
    pub fn login(&self, secret: &str) -> AccessDecision {
        if self.gate.admit(secret) {
            info!("administrator access granted");
            AccessDecision::Granted
        } else {
            warn!("administrator access denied");
            AccessDecision::Denied
        }
    }
}
