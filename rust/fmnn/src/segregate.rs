//! In-place two-way partitioning.

use fmnn_value::AsInteger;

use crate::range_membership::RangeMembership;

/// Permutes `values` so that every element satisfying `predicate` precedes every
/// element that does not, and returns the length of the satisfying prefix.
///
/// On return, `predicate` holds for `values[..n]` and fails for `values[n..]`,
/// where `n` is the returned value. The relative order within either part is not
/// preserved.
///
/// Runs in linear time with constant extra space, using only swaps. The predicate
/// is called exactly `values.len()` times: once per step of the two-cursor loop
/// (which runs `len - 1` times) plus once for the element where the cursors meet.
/// It is never called for an empty slice.
pub fn segregate<T, P>(values: &mut [T], mut predicate: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    if values.is_empty() {
        return 0;
    }
    let mut i = 0;
    let mut j = values.len() - 1;
    // values[..i] satisfy the predicate, values[j + 1..] do not.
    while i < j {
        if predicate(&values[i]) {
            i += 1;
        } else {
            values.swap(i, j);
            j -= 1;
        }
    }
    debug_assert_eq!(i, j);
    i + usize::from(predicate(&values[i]))
}

/// Moves every candidate value (an integer in `[0, values.len())`) to the front
/// of `values` and returns the number of candidates.
///
/// The first missing non-negative integer of the returned prefix is the same as
/// that of the whole sequence, so a caller can run any strategy on the prefix
/// alone, knowing that it contains integers only.
pub fn segregate_candidates<T: AsInteger>(values: &mut [T]) -> usize {
    let window = RangeMembership::for_len(values.len());
    segregate(values, |value| window.contains(value))
}
