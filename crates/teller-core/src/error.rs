//! The denial taxonomy for rejected arbiter operations.
//!
//! Every variant is a local, recoverable rejection: the arbiter's state
//! is untouched after any denial, and the caller may simply try a
//! different operation. There is no fatal error here — malformed
//! startup configuration is rejected by the arbiter's constructor with
//! its own error type before any of these can occur.

use std::error::Error;
use std::fmt;

use crate::id::{CustomerId, ResourceId};

/// Reason a request or release was denied.
///
/// Payloads identify the offending customer or resource column so a
/// presentation layer can render precise messages without string
/// matching. Variants are checked in a fixed order by the transition
/// handlers; the first violated precondition wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Denial {
    /// The customer index is outside `[0, C)`.
    InvalidCustomer {
        /// The out-of-range ID as supplied.
        customer: CustomerId,
        /// The fixed customer population C.
        customers: usize,
    },
    /// The request or release vector has the wrong number of entries.
    InvalidArgument {
        /// The fixed resource-type count R.
        expected: usize,
        /// The length actually supplied.
        got: usize,
    },
    /// A requested count exceeds the customer's remaining declared need.
    ClaimExceeded {
        /// The requesting customer.
        customer: CustomerId,
        /// First resource type whose count exceeds the remaining need.
        resource: ResourceId,
        /// Units requested of that type.
        requested: u32,
        /// Units the customer may still claim of that type.
        remaining: u32,
    },
    /// A requested count exceeds the units currently available.
    InsufficientAvailable {
        /// First resource type with too few free units.
        resource: ResourceId,
        /// Units requested of that type.
        requested: u32,
        /// Units currently unallocated of that type.
        available: u32,
    },
    /// Granting the request would leave no completion order covering
    /// every customer.
    UnsafeState,
    /// A release count exceeds the customer's current allocation.
    OverRelease {
        /// The releasing customer.
        customer: CustomerId,
        /// First resource type released beyond its held count.
        resource: ResourceId,
        /// Units the customer tried to release of that type.
        released: u32,
        /// Units the customer actually holds of that type.
        held: u32,
    },
}

impl fmt::Display for Denial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCustomer {
                customer,
                customers,
            } => {
                write!(f, "customer {customer} out of range (population {customers})")
            }
            Self::InvalidArgument { expected, got } => {
                write!(f, "expected {expected} resource counts, got {got}")
            }
            Self::ClaimExceeded {
                customer,
                resource,
                requested,
                remaining,
            } => write!(
                f,
                "customer {customer} exceeds its maximum claim on resource {resource} \
                 ({requested} requested, {remaining} claimable)"
            ),
            Self::InsufficientAvailable {
                resource,
                requested,
                available,
            } => write!(
                f,
                "resource {resource} not available ({requested} requested, {available} free)"
            ),
            Self::UnsafeState => write!(f, "granting the request would lead to an unsafe state"),
            Self::OverRelease {
                customer,
                resource,
                released,
                held,
            } => write!(
                f,
                "customer {customer} cannot release more of resource {resource} than it holds \
                 ({released} released, {held} held)"
            ),
        }
    }
}

impl Error for Denial {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denials_render_offending_indices() {
        let d = Denial::ClaimExceeded {
            customer: CustomerId(1),
            resource: ResourceId(2),
            requested: 9,
            remaining: 4,
        };
        let msg = d.to_string();
        assert!(msg.contains("customer 1"));
        assert!(msg.contains("resource 2"));
        assert!(msg.contains("9 requested"));
    }

    #[test]
    fn unsafe_state_mentions_safety() {
        assert!(Denial::UnsafeState.to_string().contains("unsafe state"));
    }
}
