//! Strongly-typed customer and resource-type indices.

use std::fmt;

/// Identifies a customer (a logical process competing for resources).
///
/// Customers are fixed at arbiter construction and indexed densely:
/// `CustomerId(n)` is the n-th row of the claim matrices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CustomerId(pub u32);

impl CustomerId {
    /// The row index this ID addresses.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for CustomerId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a resource type (a column of the claim matrices).
///
/// Resource types are fixed at arbiter construction; `ResourceId(n)`
/// corresponds to the n-th startup capacity argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId(pub u32);

impl ResourceId {
    /// The column index this ID addresses.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ResourceId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
