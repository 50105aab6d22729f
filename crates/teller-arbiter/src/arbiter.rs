//! The arbiter state container and its request/release transitions.
//!
//! [`Arbiter`] owns the four classic Banker's structures — Available,
//! Maximum, Allocation, Need — and is the only thing that mutates
//! them. Every transition is check-then-commit: preconditions are
//! evaluated against the live state, the safety verdict against a
//! hypothetical copy, and only a fully validated request writes
//! anything back. A denial of any kind is a strict no-op.
//!
//! # Ownership model
//!
//! `Arbiter` is [`Send`] but deliberately offers no interior
//! mutability: all transitions take `&mut self`, so read-check-commit
//! is indivisible by construction. An embedding that shares the
//! arbiter across threads must wrap the whole value in one mutex —
//! the safety check reads a full snapshot that must not move
//! underneath it.

use teller_core::{ClaimMatrix, CustomerId, Denial, ResourceId, ResourceVec};

use crate::config::{ArbiterConfig, ConfigError};
use crate::metrics::OpMetrics;
use crate::safety::is_safe;

// ── StateView ──────────────────────────────────────────────────────

/// A values-only dump of the arbiter's state for rendering.
///
/// Owned copies, detached from the arbiter; the presentation layer
/// decides formatting. Also convenient in tests as a whole-state
/// equality witness: two views compare equal iff the underlying
/// states are identical.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateView {
    /// Units of each resource type currently unallocated.
    pub available: ResourceVec,
    /// Declared maximum claims, per customer per resource type.
    pub maximum: ClaimMatrix,
    /// Currently held units, per customer per resource type.
    pub allocation: ClaimMatrix,
    /// Remaining needs (`maximum - allocation`).
    pub need: ClaimMatrix,
}

// ── Arbiter ────────────────────────────────────────────────────────

/// Central arbiter for deadlock-avoiding resource allocation.
///
/// Constructed once from an [`ArbiterConfig`]; the customer population
/// and resource-type count are fixed thereafter. Maximum is write-once
/// at construction, Allocation starts all-zero, Need starts equal to
/// Maximum, and Available starts at the configured capacities.
pub struct Arbiter {
    resources: usize,
    available: ResourceVec,
    maximum: ClaimMatrix,
    allocation: ClaimMatrix,
    need: ClaimMatrix,
    metrics: OpMetrics,
}

impl Arbiter {
    /// Construct an arbiter from a validated configuration.
    ///
    /// Claim rows beyond those supplied default to all-zero: a
    /// customer with no row never holds anything. This mirrors the
    /// short-input tolerance of the claim loader and is deliberate
    /// behavior, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration is malformed
    /// (wrong capacity arity, ragged or excess claim rows, zero
    /// dimensions). No arbiter exists in that case.
    pub fn new(config: ArbiterConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let ArbiterConfig {
            customers,
            resources,
            capacities,
            claims,
        } = config;

        let mut maximum = ClaimMatrix::zeroed(customers, resources);
        for (i, claim) in claims.iter().enumerate() {
            maximum.row_mut(CustomerId(i as u32)).copy_from_slice(claim);
        }
        let need = maximum.clone();

        Ok(Self {
            resources,
            available: capacities.into_iter().collect(),
            maximum,
            allocation: ClaimMatrix::zeroed(customers, resources),
            need,
            metrics: OpMetrics::default(),
        })
    }

    /// Customer population C.
    pub fn customers(&self) -> usize {
        self.maximum.customers()
    }

    /// Resource-type count R.
    pub fn resources(&self) -> usize {
        self.resources
    }

    /// Units of each resource type currently unallocated.
    pub fn available(&self) -> &[u32] {
        &self.available
    }

    /// Cumulative grant/denial counters.
    pub fn metrics(&self) -> &OpMetrics {
        &self.metrics
    }

    /// Run the safety check against the *committed* state.
    ///
    /// Every granted request leaves the arbiter safe, so this returns
    /// `true` for any state reached through granted operations. It can
    /// be `false` only for a freshly constructed arbiter whose claims
    /// already exceed what the capacities could ever satisfy — the
    /// unsafe initial boundary, from which every request is denied.
    pub fn in_safe_state(&self) -> bool {
        is_safe(&self.allocation, &self.need, &self.available)
    }

    /// Dump the full state for rendering.
    pub fn snapshot(&self) -> StateView {
        StateView {
            available: self.available.clone(),
            maximum: self.maximum.clone(),
            allocation: self.allocation.clone(),
            need: self.need.clone(),
        }
    }

    /// Request `amounts` units (one count per resource type) for a
    /// customer.
    ///
    /// Preconditions are checked in a fixed order, each with its own
    /// denial reason: valid customer index, correct vector arity,
    /// within the remaining claim, within the available units, and
    /// finally the safety check on the hypothetical post-grant state.
    /// The first violation wins and nothing is mutated.
    ///
    /// # Errors
    ///
    /// [`Denial::InvalidCustomer`], [`Denial::InvalidArgument`],
    /// [`Denial::ClaimExceeded`], [`Denial::InsufficientAvailable`],
    /// or [`Denial::UnsafeState`]. State is unchanged on any of them.
    pub fn request(&mut self, customer: CustomerId, amounts: &[u32]) -> Result<(), Denial> {
        if let Err(d) = self.validate_shape(customer, amounts) {
            return Err(self.deny(d));
        }

        if let Some((j, requested, remaining)) = first_excess(amounts, self.need.row(customer)) {
            return Err(self.deny(Denial::ClaimExceeded {
                customer,
                resource: ResourceId(j as u32),
                requested,
                remaining,
            }));
        }

        if let Some((j, requested, available)) = first_excess(amounts, &self.available) {
            return Err(self.deny(Denial::InsufficientAvailable {
                resource: ResourceId(j as u32),
                requested,
                available,
            }));
        }

        // Tentatively grant on copies, then ask the safety checker.
        self.metrics.safety_checks += 1;
        let mut hyp_allocation = self.allocation.clone();
        let mut hyp_need = self.need.clone();
        let mut hyp_available = self.available.clone();
        for (j, &units) in amounts.iter().enumerate() {
            hyp_allocation.row_mut(customer)[j] += units;
            hyp_need.row_mut(customer)[j] -= units;
            hyp_available[j] -= units;
        }

        if !is_safe(&hyp_allocation, &hyp_need, &hyp_available) {
            return Err(self.deny(Denial::UnsafeState));
        }

        self.allocation = hyp_allocation;
        self.need = hyp_need;
        self.available = hyp_available;
        self.metrics.requests_granted += 1;
        Ok(())
    }

    /// Return `amounts` units (one count per resource type) held by a
    /// customer to the available pool.
    ///
    /// A customer may release any component-wise subset of its current
    /// allocation. No safety check runs: a release only grows
    /// Available and shrinks the releaser's holdings, so it can never
    /// make a safe state unsafe.
    ///
    /// # Errors
    ///
    /// [`Denial::InvalidCustomer`], [`Denial::InvalidArgument`], or
    /// [`Denial::OverRelease`]. State is unchanged on any of them.
    pub fn release(&mut self, customer: CustomerId, amounts: &[u32]) -> Result<(), Denial> {
        if let Err(d) = self.validate_shape(customer, amounts) {
            return Err(self.deny(d));
        }

        if let Some((j, released, held)) = first_excess(amounts, self.allocation.row(customer)) {
            return Err(self.deny(Denial::OverRelease {
                customer,
                resource: ResourceId(j as u32),
                released,
                held,
            }));
        }

        let allocation = self.allocation.row_mut(customer);
        for (j, &units) in amounts.iter().enumerate() {
            allocation[j] -= units;
        }
        let need = self.need.row_mut(customer);
        for (j, &units) in amounts.iter().enumerate() {
            need[j] += units;
        }
        for (j, &units) in amounts.iter().enumerate() {
            self.available[j] += units;
        }
        self.metrics.releases_granted += 1;
        Ok(())
    }

    fn validate_shape(&self, customer: CustomerId, amounts: &[u32]) -> Result<(), Denial> {
        if customer.index() >= self.customers() {
            return Err(Denial::InvalidCustomer {
                customer,
                customers: self.customers(),
            });
        }
        if amounts.len() != self.resources {
            return Err(Denial::InvalidArgument {
                expected: self.resources,
                got: amounts.len(),
            });
        }
        Ok(())
    }

    fn deny(&mut self, denial: Denial) -> Denial {
        self.metrics.record_denial(&denial);
        denial
    }
}

/// First column where `amounts` exceeds `limit`, as
/// `(index, amount, limit)`.
fn first_excess(amounts: &[u32], limit: &[u32]) -> Option<(usize, u32, u32)> {
    amounts
        .iter()
        .zip(limit)
        .enumerate()
        .find_map(|(j, (&a, &l))| (a > l).then_some((j, a, l)))
}
