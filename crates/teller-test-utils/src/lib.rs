//! Shared fixtures for Teller development.
//!
//! Provides the canonical 5-customer × 4-resource-type textbook
//! instance used across integration tests and benches, both as a raw
//! config and as pre-built arbiters.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use teller_arbiter::{Arbiter, ArbiterConfig};
use teller_core::CustomerId;

/// The canonical 5×4 dining instance.
///
/// After the two warm-up grants in [`textbook_arbiter`], the state is
/// the classic exercise snapshot: Available `[1, 5, 2, 0]`, customer
/// 1 holding `[0, 1, 0, 0]` against a maximum claim of `[1, 7, 5, 0]`
/// (so Need `[1, 6, 5, 0]`). From there, requesting `[1, 0, 2, 0]`
/// for customer 1 is grantable and yields Available `[0, 5, 0, 0]`.
pub mod textbook {
    use super::*;

    pub const CUSTOMERS: usize = 5;
    pub const RESOURCES: usize = 4;

    /// Total units per resource type before anything is allocated.
    pub const CAPACITIES: [u32; RESOURCES] = [2, 8, 5, 1];

    /// Maximum-claim rows, one per customer.
    pub const CLAIMS: [[u32; RESOURCES]; CUSTOMERS] = [
        [0, 3, 2, 0],
        [1, 7, 5, 0],
        [1, 3, 3, 1],
        [1, 1, 0, 1],
        [0, 2, 1, 1],
    ];

    pub fn config() -> ArbiterConfig {
        ArbiterConfig {
            customers: CUSTOMERS,
            resources: RESOURCES,
            capacities: CAPACITIES.to_vec(),
            claims: CLAIMS.iter().map(|row| row.to_vec()).collect(),
        }
    }

    /// A fresh arbiter: nothing allocated, Available at capacity.
    pub fn fresh_arbiter() -> Arbiter {
        Arbiter::new(config()).expect("textbook config is valid")
    }

    /// The arbiter advanced to the classic exercise snapshot via two
    /// granted requests, so the state is reachable by construction.
    pub fn textbook_arbiter() -> Arbiter {
        let mut arbiter = fresh_arbiter();
        arbiter
            .request(CustomerId(2), &[1, 2, 3, 1])
            .expect("warm-up grant for customer 2");
        arbiter
            .request(CustomerId(1), &[0, 1, 0, 0])
            .expect("warm-up grant for customer 1");
        arbiter
    }
}
