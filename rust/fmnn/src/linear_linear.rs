//! Presence table indexed by candidate value.

use fmnn_value::AsInteger;

use crate::range_membership::RangeMembership;

/// Returns the first missing non-negative integer using a presence table of
/// `len + 1` flags.
///
/// Does not modify `values`. Linear time and linear extra space.
pub fn first_missing_linear_linear<T: AsInteger>(values: &[T]) -> usize {
    first_missing_linear_linear_iter(values)
}

/// Same as [`first_missing_linear_linear`], for any sequence that can report its
/// length up front and be iterated once.
pub fn first_missing_linear_linear_iter<I>(values: I) -> usize
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
    I::Item: AsInteger,
{
    let values = values.into_iter();
    let len = values.len();
    let window = RangeMembership::for_len(len);

    // present[len] stays false: it stops the scan below when 0..len are all present.
    let mut present = vec![false; len + 1];
    for value in values {
        if let Some(k) = window.candidate_index(&value) {
            present[k] = true;
        }
    }
    debug_assert!(!present[len]);

    let mut answer = 0;
    while present[answer] {
        answer += 1;
    }
    log::trace!("first_missing_linear_linear: len={len}, answer={answer}");
    answer
}
