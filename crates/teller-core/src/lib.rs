//! Core types for the Teller resource arbiter.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary shared by the rest of the workspace:
//! customer and resource-type indices, per-resource vectors and
//! customer-by-resource matrices, and the denial taxonomy returned by
//! rejected operations.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod matrix;

pub use error::Denial;
pub use id::{CustomerId, ResourceId};
pub use matrix::{ClaimMatrix, ResourceVec};
