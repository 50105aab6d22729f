//! Arbiter configuration, validation, and construction-time errors.
//!
//! [`ArbiterConfig`] is the builder-input for constructing an
//! [`Arbiter`](crate::Arbiter). [`validate()`](ArbiterConfig::validate)
//! checks structural invariants at startup; a malformed configuration
//! prevents the arbiter from being constructed at all. Everything past
//! construction is a recoverable denial, never a config error.

use std::error::Error;
use std::fmt;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`ArbiterConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The customer population is zero.
    NoCustomers,
    /// The resource-type count is zero.
    NoResourceTypes,
    /// The customer population does not fit in a `u32` index.
    PopulationOverflow {
        /// The configured population.
        value: usize,
    },
    /// The startup capacity vector does not have one entry per
    /// resource type.
    CapacityArity {
        /// The configured resource-type count.
        expected: usize,
        /// The number of capacities actually supplied.
        got: usize,
    },
    /// More claim rows were supplied than there are customers.
    TooManyClaimRows {
        /// The number of rows supplied.
        rows: usize,
        /// The configured customer population.
        customers: usize,
    },
    /// A claim row does not have one entry per resource type.
    ClaimRowArity {
        /// The offending row index.
        row: usize,
        /// The configured resource-type count.
        expected: usize,
        /// The row length actually supplied.
        got: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCustomers => write!(f, "customer population is zero"),
            Self::NoResourceTypes => write!(f, "resource-type count is zero"),
            Self::PopulationOverflow { value } => {
                write!(f, "customer population {value} exceeds u32::MAX")
            }
            Self::CapacityArity { expected, got } => {
                write!(f, "expected {expected} startup capacities, got {got}")
            }
            Self::TooManyClaimRows { rows, customers } => {
                write!(f, "{rows} claim rows supplied for {customers} customers")
            }
            Self::ClaimRowArity { row, expected, got } => {
                write!(f, "claim row {row} has {got} entries, expected {expected}")
            }
        }
    }
}

impl Error for ConfigError {}

// ── ArbiterConfig ──────────────────────────────────────────────────

/// Complete configuration for constructing an arbiter.
///
/// Both dimensions are fixed for the life of the arbiter. The claim
/// matrix may be *shorter* than the population: customers without a
/// row get an all-zero maximum claim, modeling a customer that never
/// holds anything. Supplying more rows than customers, or a row of the
/// wrong width, is a hard error — the short-input leniency covers
/// missing data only, never malformed data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArbiterConfig {
    /// Customer population C.
    pub customers: usize,
    /// Resource-type count R.
    pub resources: usize,
    /// Startup unit counts, one per resource type. Becomes the initial
    /// Available vector; nothing is allocated yet.
    pub capacities: Vec<u32>,
    /// Maximum-claim rows, at most `customers` of them, each exactly
    /// `resources` wide.
    pub claims: Vec<Vec<u32>>,
}

impl ArbiterConfig {
    /// Check all structural invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant: zero dimensions,
    /// capacity/claim arity mismatches, or an oversized population.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.customers == 0 {
            return Err(ConfigError::NoCustomers);
        }
        if self.resources == 0 {
            return Err(ConfigError::NoResourceTypes);
        }
        if u32::try_from(self.customers).is_err() {
            return Err(ConfigError::PopulationOverflow {
                value: self.customers,
            });
        }
        if self.capacities.len() != self.resources {
            return Err(ConfigError::CapacityArity {
                expected: self.resources,
                got: self.capacities.len(),
            });
        }
        if self.claims.len() > self.customers {
            return Err(ConfigError::TooManyClaimRows {
                rows: self.claims.len(),
                customers: self.customers,
            });
        }
        for (row, claim) in self.claims.iter().enumerate() {
            if claim.len() != self.resources {
                return Err(ConfigError::ClaimRowArity {
                    row,
                    expected: self.resources,
                    got: claim.len(),
                });
            }
        }
        Ok(())
    }
}
