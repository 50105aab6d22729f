//! Property tests over random operation sequences.
//!
//! The guarantees exercised here:
//! - conservation: free + allocated units per resource type never
//!   drift from the startup capacity;
//! - the need identity: `allocation + need == maximum`, everywhere,
//!   always;
//! - a denial of any kind leaves the state bit-identical;
//! - every committed request leaves the arbiter in a safe state;
//! - releasing any component-wise subset of a customer's allocation
//!   always succeeds and never makes a safe state unsafe;
//! - the safety verdict is a pure, repeatable function of its inputs.

use proptest::prelude::*;
use teller_arbiter::{is_safe, Arbiter, ArbiterConfig};
use teller_core::{ClaimMatrix, CustomerId};

#[derive(Clone, Debug)]
enum Op {
    Request { customer: u32, amounts: Vec<u32> },
    Release { customer: u32, amounts: Vec<u32> },
}

/// Configs in the small-dimension regime; always structurally valid,
/// though the claims may exceed capacity (the unsafe initial boundary
/// is a legal starting point and must stay denial-only).
fn arb_config() -> impl Strategy<Value = ArbiterConfig> {
    (1usize..5, 1usize..5).prop_flat_map(|(customers, resources)| {
        (
            prop::collection::vec(0u32..12, resources),
            prop::collection::vec(prop::collection::vec(0u32..8, resources), 0..=customers),
        )
            .prop_map(move |(capacities, claims)| ArbiterConfig {
                customers,
                resources,
                capacities,
                claims,
            })
    })
}

/// Operations with deliberately unvalidated shapes: out-of-range
/// customers and wrong-arity vectors are part of the input space, so
/// the denial paths are exercised alongside the grants.
fn arb_op() -> impl Strategy<Value = Op> {
    (any::<bool>(), 0u32..6, prop::collection::vec(0u32..4, 0..5)).prop_map(
        |(is_request, customer, amounts)| {
            if is_request {
                Op::Request { customer, amounts }
            } else {
                Op::Release { customer, amounts }
            }
        },
    )
}

fn apply(arbiter: &mut Arbiter, op: &Op) -> Result<(), teller_core::Denial> {
    match op {
        Op::Request { customer, amounts } => arbiter.request(CustomerId(*customer), amounts),
        Op::Release { customer, amounts } => arbiter.release(CustomerId(*customer), amounts),
    }
}

proptest! {
    #[test]
    fn transitions_preserve_invariants(
        config in arb_config(),
        ops in prop::collection::vec(arb_op(), 0..40),
    ) {
        let totals: Vec<u64> = config.capacities.iter().map(|&c| u64::from(c)).collect();
        let mut arbiter = Arbiter::new(config.clone()).unwrap();

        for op in &ops {
            let before = arbiter.snapshot();
            let safe_before = arbiter.in_safe_state();
            let result = apply(&mut arbiter, op);
            let after = arbiter.snapshot();

            match result {
                // Denials are strict no-ops.
                Err(_) => prop_assert_eq!(&after, &before),
                // Committed requests are exactly the states the safety
                // checker approved; committed releases never spoil a
                // safe state.
                Ok(()) => match op {
                    Op::Request { .. } => prop_assert!(arbiter.in_safe_state()),
                    Op::Release { .. } => prop_assert!(!safe_before || arbiter.in_safe_state()),
                },
            }

            for j in 0..config.resources {
                prop_assert_eq!(
                    u64::from(after.available[j]) + after.allocation.column_sum(j),
                    totals[j]
                );
            }
            for i in 0..config.customers {
                let id = CustomerId(i as u32);
                for j in 0..config.resources {
                    prop_assert_eq!(
                        after.allocation.row(id)[j] + after.need.row(id)[j],
                        after.maximum.row(id)[j]
                    );
                }
            }
        }
    }

    #[test]
    fn any_subset_release_succeeds(
        config in arb_config(),
        ops in prop::collection::vec(arb_op(), 0..40),
    ) {
        let mut arbiter = Arbiter::new(config.clone()).unwrap();
        for op in &ops {
            let _ = apply(&mut arbiter, op);
        }

        // Walk everything back in two halves per customer; every step
        // is component-wise within the allocation and must be granted.
        for i in 0..config.customers {
            let id = CustomerId(i as u32);
            let held: Vec<u32> = arbiter.snapshot().allocation.row(id).to_vec();
            let half: Vec<u32> = held.iter().map(|&v| v / 2).collect();
            let rest: Vec<u32> = held.iter().zip(&half).map(|(&v, &h)| v - h).collect();
            prop_assert!(arbiter.release(id, &half).is_ok());
            prop_assert!(arbiter.release(id, &rest).is_ok());
        }

        // With every unit returned, the pool is back at capacity.
        prop_assert_eq!(arbiter.available(), config.capacities.as_slice());
    }

    #[test]
    fn safety_verdict_is_pure_and_repeatable(
        (allocation, need, available) in (1usize..5, 1usize..5).prop_flat_map(|(c, r)| {
            (
                prop::collection::vec(prop::collection::vec(0u32..10, r), c),
                prop::collection::vec(prop::collection::vec(0u32..10, r), c),
                prop::collection::vec(0u32..10, r),
            )
        }),
    ) {
        let build = |rows: &[Vec<u32>]| {
            let mut m = ClaimMatrix::zeroed(rows.len(), rows[0].len());
            for (i, row) in rows.iter().enumerate() {
                m.row_mut(CustomerId(i as u32)).copy_from_slice(row);
            }
            m
        };
        let alloc = build(&allocation);
        let need = build(&need);

        let alloc_before = alloc.clone();
        let need_before = need.clone();
        let first = is_safe(&alloc, &need, &available);
        let second = is_safe(&alloc, &need, &available);

        prop_assert_eq!(first, second);
        prop_assert_eq!(alloc, alloc_before);
        prop_assert_eq!(need, need_before);
    }
}
