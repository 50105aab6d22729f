//! Teller: deadlock-avoiding resource allocation with the Banker's
//! Algorithm.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Teller sub-crates. For most users, adding `teller` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use teller::prelude::*;
//!
//! // Two customers sharing 3 + 2 units of two resource types.
//! let config = ArbiterConfig {
//!     customers: 2,
//!     resources: 2,
//!     capacities: vec![3, 2],
//!     claims: vec![vec![2, 1], vec![1, 2]],
//! };
//! let mut arbiter = Arbiter::new(config).unwrap();
//!
//! // Granted: the resulting state still lets everyone finish.
//! arbiter.request(CustomerId(0), &[1, 1]).unwrap();
//!
//! // Denied: customer 1 only ever declared a claim of 1 on type 0.
//! let denied = arbiter.request(CustomerId(1), &[2, 0]);
//! assert!(matches!(denied, Err(Denial::ClaimExceeded { .. })));
//!
//! // Denials never mutate; the grant above is still the whole story.
//! assert_eq!(arbiter.snapshot().available.as_slice(), &[2, 1]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types: IDs, matrices, the denial taxonomy (`teller-core`).
pub use teller_core as types;

/// The arbiter, its configuration, the safety checker, and operation
/// metrics (`teller-arbiter`).
pub use teller_arbiter as arbiter;

/// The most commonly used items, re-exported flat.
pub mod prelude {
    pub use teller_arbiter::{Arbiter, ArbiterConfig, ConfigError, OpMetrics, StateView};
    pub use teller_core::{ClaimMatrix, CustomerId, Denial, ResourceId, ResourceVec};
}
