//! Repeated membership testing.

use std::{
    collections::{BTreeSet, HashSet},
    hash::BuildHasher,
};

use fmnn_value::AsInteger;

/// Integer membership test over a collection.
///
/// This is the only capability the naive strategy needs; it does not require
/// indexed access or a known length.
pub trait ContainsInteger {
    /// Returns `true` if some element of the collection is the integer `k`.
    fn contains_integer(&self, k: i64) -> bool;
}

impl<T: AsInteger> ContainsInteger for [T] {
    fn contains_integer(&self, k: i64) -> bool {
        self.iter().any(|value| value.as_integer() == Some(k))
    }
}

impl<T: AsInteger> ContainsInteger for Vec<T> {
    fn contains_integer(&self, k: i64) -> bool {
        self.as_slice().contains_integer(k)
    }
}

impl<T: AsInteger, const N: usize> ContainsInteger for [T; N] {
    fn contains_integer(&self, k: i64) -> bool {
        self.as_slice().contains_integer(k)
    }
}

impl<S: BuildHasher> ContainsInteger for HashSet<i64, S> {
    fn contains_integer(&self, k: i64) -> bool {
        self.contains(&k)
    }
}

impl ContainsInteger for BTreeSet<i64> {
    fn contains_integer(&self, k: i64) -> bool {
        self.contains(&k)
    }
}

/// Returns the first missing non-negative integer by probing `0, 1, 2, ...`
/// until a probe is absent.
///
/// Does not modify `values`. Each probe is a full membership test, so the time is
/// `O(len * answer)`: quadratic when `values` is a permutation of `0..len`.
pub fn first_missing_naive<C: ContainsInteger + ?Sized>(values: &C) -> usize {
    let mut k = 0usize;
    while values.contains_integer(k as i64) {
        k += 1;
    }
    log::trace!("first_missing_naive: answer={k}");
    k
}
