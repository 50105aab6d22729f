//! The safety check: can every customer still finish?
//!
//! [`is_safe`] is the algorithmic heart of the arbiter. It operates on
//! a *hypothetical* snapshot — the allocation, need, and available
//! values as they would be if a pending request were granted — and
//! never touches live state. The request handler builds the snapshot,
//! asks this function, and commits or discards it wholesale.

use smallvec::SmallVec;
use teller_core::ClaimMatrix;

/// Classic Banker's safety check over a hypothetical snapshot.
///
/// Starting from `work = available`, repeatedly finds an unfinished
/// customer whose entire remaining need fits within `work`, marks it
/// finished, and folds its allocation back into `work` (the customer
/// is assumed to run to completion and release everything it holds).
/// The state is safe iff every customer can be finished this way.
///
/// Customers are scanned in increasing index order on every pass. The
/// scan order does not affect the verdict — any customer that can be
/// finished eventually will be — but a fixed order keeps traces
/// reproducible. Each pass either finishes at least one customer or
/// halts the loop, so the check always terminates.
///
/// `work` accumulates in `u64` so the verdict is well-defined even for
/// snapshots near the `u32` capacity ceiling.
pub fn is_safe(allocation: &ClaimMatrix, need: &ClaimMatrix, available: &[u32]) -> bool {
    let customers = allocation.customers();
    let mut work: SmallVec<[u64; 4]> = available.iter().map(|&v| u64::from(v)).collect();
    let mut finish = vec![false; customers];

    loop {
        let mut progressed = false;
        for (i, (need_row, alloc_row)) in need.rows().zip(allocation.rows()).enumerate() {
            if finish[i] {
                continue;
            }
            let can_finish = need_row
                .iter()
                .zip(work.iter())
                .all(|(&n, &w)| u64::from(n) <= w);
            if can_finish {
                for (w, &a) in work.iter_mut().zip(alloc_row) {
                    *w += u64::from(a);
                }
                finish[i] = true;
                progressed = true;
            }
        }
        if !progressed {
            break;
        }
    }

    finish.into_iter().all(|f| f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use teller_core::CustomerId;

    fn matrix(rows: &[&[u32]]) -> ClaimMatrix {
        let mut m = ClaimMatrix::zeroed(rows.len(), rows[0].len());
        for (i, row) in rows.iter().enumerate() {
            m.row_mut(CustomerId(i as u32)).copy_from_slice(row);
        }
        m
    }

    #[test]
    fn all_zero_needs_are_safe() {
        let alloc = matrix(&[&[1, 0], &[0, 1]]);
        let need = matrix(&[&[0, 0], &[0, 0]]);
        assert!(is_safe(&alloc, &need, &[0, 0]));
    }

    #[test]
    fn chained_completion_is_safe() {
        // Customer 0 can finish immediately; its released units then
        // cover customer 1's need.
        let alloc = matrix(&[&[2, 1], &[1, 1]]);
        let need = matrix(&[&[1, 0], &[2, 2]]);
        assert!(is_safe(&alloc, &need, &[1, 0]));
    }

    #[test]
    fn circular_wait_is_unsafe() {
        // Neither customer's need fits in work, and neither can free
        // units for the other.
        let alloc = matrix(&[&[1, 0], &[0, 1]]);
        let need = matrix(&[&[0, 1], &[1, 0]]);
        assert!(!is_safe(&alloc, &need, &[0, 0]));
    }

    #[test]
    fn need_beyond_total_capacity_is_unsafe() {
        // A customer whose need exceeds everything that could ever be
        // freed can never finish.
        let alloc = matrix(&[&[0, 0]]);
        let need = matrix(&[&[5, 0]]);
        assert!(!is_safe(&alloc, &need, &[4, 4]));
    }

    #[test]
    fn verdict_is_idempotent_and_inputs_untouched() {
        let alloc = matrix(&[&[2, 1], &[1, 1]]);
        let need = matrix(&[&[1, 0], &[2, 2]]);
        let available = [1u32, 0];

        let alloc_before = alloc.clone();
        let need_before = need.clone();
        let first = is_safe(&alloc, &need, &available);
        let second = is_safe(&alloc, &need, &available);
        assert_eq!(first, second);
        assert_eq!(alloc, alloc_before);
        assert_eq!(need, need_before);
    }

    #[test]
    fn large_counts_do_not_overflow_work() {
        let alloc = matrix(&[&[u32::MAX], &[u32::MAX]]);
        let need = matrix(&[&[0], &[0]]);
        assert!(is_safe(&alloc, &need, &[u32::MAX]));
    }
}
