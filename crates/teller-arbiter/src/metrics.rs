//! Cumulative operation counters for the arbiter.
//!
//! [`OpMetrics`] is the arbiter's observability surface: a plain
//! struct of counters covering every grant and every denial reason,
//! accumulated over the process lifetime. Consumers (the operator
//! shell, tests) read it from [`Arbiter::metrics`](crate::Arbiter::metrics).

use teller_core::Denial;

/// Grant and denial counters, cumulative since construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OpMetrics {
    /// Requests committed.
    pub requests_granted: u64,
    /// Releases committed.
    pub releases_granted: u64,
    /// Safety scans run (one per request that passed the cheap checks).
    pub safety_checks: u64,
    /// Operations denied: customer index out of range.
    pub denied_invalid_customer: u64,
    /// Operations denied: wrong-length resource vector.
    pub denied_invalid_argument: u64,
    /// Requests denied: over the customer's remaining claim.
    pub denied_claim_exceeded: u64,
    /// Requests denied: more units than currently available.
    pub denied_unavailable: u64,
    /// Requests denied: the hypothetical state was unsafe.
    pub denied_unsafe: u64,
    /// Releases denied: more units than currently held.
    pub denied_over_release: u64,
}

impl OpMetrics {
    /// Bump the counter matching a denial reason.
    pub(crate) fn record_denial(&mut self, denial: &Denial) {
        match denial {
            Denial::InvalidCustomer { .. } => self.denied_invalid_customer += 1,
            Denial::InvalidArgument { .. } => self.denied_invalid_argument += 1,
            Denial::ClaimExceeded { .. } => self.denied_claim_exceeded += 1,
            Denial::InsufficientAvailable { .. } => self.denied_unavailable += 1,
            Denial::UnsafeState => self.denied_unsafe += 1,
            Denial::OverRelease { .. } => self.denied_over_release += 1,
        }
    }

    /// Total operations denied, across all reasons.
    pub fn total_denied(&self) -> u64 {
        self.denied_invalid_customer
            + self.denied_invalid_argument
            + self.denied_claim_exceeded
            + self.denied_unavailable
            + self.denied_unsafe
            + self.denied_over_release
    }
}
