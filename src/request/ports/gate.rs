//! Administrator access gate.

/// Decides whether a presented secret grants administrator access.
///
/// The gate has exactly two outcomes and issues no session or token, so it
/// can be replaced by a real credential check without touching the queue.
pub trait AdminGate: Send + Sync {
    /// Returns `true` when `secret` grants access.
    fn admit(&self, secret: &str) -> bool;
}

impl<F> AdminGate for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn admit(&self, secret: &str) -> bool {
        self(secret)
    }
}
