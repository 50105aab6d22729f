//! The Teller resource arbiter: deadlock avoidance via the Banker's
//! Algorithm.
//!
//! A fixed population of customers requests and releases units of a
//! fixed set of resource types. The [`Arbiter`] grants a request only
//! if the resulting state is *safe* — some order exists in which every
//! customer can still acquire its full remaining need and finish. An
//! unsafe, unavailable, or over-claim request is denied with a typed
//! reason and leaves the state untouched.
//!
//! # Example
//!
//! ```
//! use teller_arbiter::{Arbiter, ArbiterConfig};
//! use teller_core::CustomerId;
//!
//! let config = ArbiterConfig {
//!     customers: 2,
//!     resources: 2,
//!     capacities: vec![3, 2],
//!     claims: vec![vec![2, 1], vec![1, 2]],
//! };
//! let mut arbiter = Arbiter::new(config).unwrap();
//! arbiter.request(CustomerId(0), &[1, 1]).unwrap();
//! assert_eq!(arbiter.snapshot().available.as_slice(), &[2, 1]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arbiter;
pub mod config;
pub mod metrics;
pub mod safety;

pub use arbiter::{Arbiter, StateView};
pub use config::{ArbiterConfig, ConfigError};
pub use metrics::OpMetrics;
pub use safety::is_safe;
