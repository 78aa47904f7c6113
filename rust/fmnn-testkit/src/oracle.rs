//! Expected answers computed directly from the definition.

use std::collections::HashSet;

use fmnn_value::AsInteger;

/// Smallest non-negative integer that is not an integer element of `values`.
///
/// The answer never exceeds `values.len()`, so only `[0, len]` is searched.
pub fn expected_first_missing<T: AsInteger>(values: &[T]) -> usize {
    let integers = integer_set(values);
    (0..=values.len())
        .find(|&k| !contains_index(&integers, k))
        .unwrap_or(values.len())
}

/// Checks that `answer` is the first missing non-negative integer of `values`:
/// `answer` itself is absent and every integer in `[0, answer)` is present.
pub fn is_first_missing<T: AsInteger>(values: &[T], answer: usize) -> bool {
    let integers = integer_set(values);
    answer <= values.len()
        && !contains_index(&integers, answer)
        && (0..answer).all(|k| contains_index(&integers, k))
}

fn integer_set<T: AsInteger>(values: &[T]) -> HashSet<i64> {
    values.iter().filter_map(AsInteger::as_integer).collect()
}

fn contains_index(integers: &HashSet<i64>, k: usize) -> bool {
    i64::try_from(k).is_ok_and(|k| integers.contains(&k))
}
