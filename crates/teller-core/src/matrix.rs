//! Per-resource vectors and the customer-by-resource [`ClaimMatrix`].

use smallvec::SmallVec;

use crate::id::CustomerId;

/// One unit count per resource type.
///
/// Inline for up to four resource types (the classic arbiter shape is
/// 5 customers × 4 resource types), spilling to the heap beyond that.
pub type ResourceVec = SmallVec<[u32; 4]>;

/// An owned C×R matrix of unit counts, one row per customer.
///
/// Backed by a single flat block indexed `customer * R + resource`.
/// The matrix is constructed once by the arbiter and its dimensions
/// never change; rows are only reached through checked accessors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimMatrix {
    cells: Vec<u32>,
    customers: usize,
    resources: usize,
}

impl ClaimMatrix {
    /// Create a C×R matrix with every cell zero.
    pub fn zeroed(customers: usize, resources: usize) -> Self {
        Self {
            cells: vec![0; customers * resources],
            customers,
            resources,
        }
    }

    /// Number of rows (customers).
    pub fn customers(&self) -> usize {
        self.customers
    }

    /// Number of columns (resource types).
    pub fn resources(&self) -> usize {
        self.resources
    }

    /// The row for `customer`, one count per resource type.
    ///
    /// # Panics
    ///
    /// Panics if `customer` is out of range. Callers validate IDs
    /// before touching the matrices; an out-of-range row here is an
    /// internal invariant violation, not a recoverable denial.
    pub fn row(&self, customer: CustomerId) -> &[u32] {
        let i = customer.index();
        assert!(i < self.customers, "customer {i} out of range");
        &self.cells[i * self.resources..(i + 1) * self.resources]
    }

    /// Mutable access to the row for `customer`.
    ///
    /// # Panics
    ///
    /// Panics if `customer` is out of range, as with [`row`](Self::row).
    pub fn row_mut(&mut self, customer: CustomerId) -> &mut [u32] {
        let i = customer.index();
        assert!(i < self.customers, "customer {i} out of range");
        &mut self.cells[i * self.resources..(i + 1) * self.resources]
    }

    /// Iterate over all rows in increasing customer order.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks_exact(self.resources)
    }

    /// Sum of one column across all customers.
    ///
    /// Used by conservation checks: `available[j] + column_sum(j)` must
    /// equal the startup capacity of resource type `j` at all times.
    pub fn column_sum(&self, resource: usize) -> u64 {
        self.rows().map(|row| u64::from(row[resource])).sum()
    }
}
