//! First missing non-negative integer (FMNN) of heterogeneous sequences.
//!
//! Given a finite sequence whose elements may or may not be integers, the FMNN is
//! the smallest `k >= 0` such that no element is the integer `k`. Elements that are
//! not integers (see [`AsInteger`]), negative integers and integers not smaller
//! than the sequence length never affect the answer, which always lies in
//! `[0, len]`.
//!
//! # Strategies
//!
//! | Function | Time | Extra space | Input |
//! |---|---|---|---|
//! | [`first_missing_naive`] | `O(n * answer)` | `O(1)` | read only, membership tests only |
//! | [`first_missing_sort`] | `O(n log n)` | sort's | permuted |
//! | [`first_missing_linear_linear`] | `O(n)` | `O(n)` | read only |
//! | [`first_missing_linear_const`] | `O(n)` | `O(1)` | permuted |
//!
//! The permuting strategies take `&mut [T]` and are documented as destructive;
//! callers that need the original order pass a copy, or use
//! [`StrategyKind::first_missing_preserving`].
//!
//! # Primitives
//!
//! - [`RangeMembership`] - constant-time membership in `range(start, stop, step)`
//! - [`segregate`] - in-place two-way partition by a predicate

pub mod linear_const;
pub mod linear_linear;
pub mod naive;
pub mod range_membership;
pub mod segregate;
pub mod sort;
pub mod strategy;

pub use fmnn_common::{Result, error::Error, error::ErrorKind};
pub use fmnn_value::{AsInteger, Value};

pub use linear_const::{PlacementStats, first_missing_linear_const, place_fixed_points};
pub use linear_linear::{first_missing_linear_linear, first_missing_linear_linear_iter};
pub use naive::{ContainsInteger, first_missing_naive};
pub use range_membership::RangeMembership;
pub use segregate::{segregate, segregate_candidates};
pub use sort::first_missing_sort;
pub use strategy::StrategyKind;

/// Returns the first missing non-negative integer of `values` without modifying them.
pub fn first_missing<T: AsInteger>(values: &[T]) -> usize {
    first_missing_linear_linear(values)
}
