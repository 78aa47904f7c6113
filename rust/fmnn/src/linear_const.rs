//! In-place placement by cycle chasing.
//!
//! Every candidate value `j` (an integer in `[0, len)`) has a home slot `j`. The
//! placement pass walks the slots in order and, for each slot `i`, repeatedly
//! swaps the value it holds into that value's home, until slot `i` holds a value
//! that has no home or whose home is already settled. Afterwards every candidate
//! value present in the sequence is at home, so the first slot that does not hold
//! its own index is the answer.
//!
//! Each swap creates a fixed point (`values[j] == j`) that no later swap touches,
//! because a swap only writes to slot `i`, which is not a fixed point, and to slot
//! `j`, which becomes one. The total number of swaps is therefore at most `len`,
//! and the whole pass runs in linear time with constant extra space.

use fmnn_value::AsInteger;

use crate::range_membership::RangeMembership;

/// Counters collected by [`place_fixed_points`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlacementStats {
    /// Number of swaps performed. Never exceeds the sequence length.
    pub swaps: usize,
    /// Number of slots `i` holding the integer `i` after placement.
    pub fixed_points: usize,
}

/// Outcome of one inspection of the value held by the current slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChaseStep {
    /// The value is not a candidate; nothing to place.
    OutOfRange,
    /// The value's home already holds it: either the current slot is home, or the
    /// value is a duplicate of a settled one.
    AlreadyPlaced,
    /// The value was swapped into its home; the current slot received the former
    /// occupant, which must be inspected next.
    Placed,
}

#[inline]
fn is_fixed_point<T: AsInteger>(values: &[T], index: usize) -> bool {
    values[index]
        .as_integer()
        .and_then(|x| usize::try_from(x).ok())
        == Some(index)
}

#[inline]
fn chase_step<T: AsInteger>(
    values: &mut [T],
    i: usize,
    window: &RangeMembership,
) -> ChaseStep {
    let Some(j) = window.candidate_index(&values[i]) else {
        return ChaseStep::OutOfRange;
    };
    if is_fixed_point(values, j) {
        return ChaseStep::AlreadyPlaced;
    }
    debug_assert!(!is_fixed_point(values, i));
    debug_assert_ne!(i, j);
    // values[i] == j, so the swap puts j at home and brings values[j] to slot i.
    values.swap(i, j);
    ChaseStep::Placed
}

/// Moves every candidate value of `values` into its home slot.
///
/// **Destructive**: `values` is left permuted. On return, for every candidate
/// value `j` present in the input, `values[j] == j`.
pub fn place_fixed_points<T: AsInteger>(values: &mut [T]) -> PlacementStats {
    let len = values.len();
    let window = RangeMembership::for_len(len);
    let mut swaps = 0;
    for i in 0..len {
        while chase_step(values, i, &window) == ChaseStep::Placed {
            swaps += 1;
        }
    }

    #[cfg(debug_assertions)]
    for value in values.iter() {
        if let Some(j) = window.candidate_index(value) {
            debug_assert!(is_fixed_point(values, j));
        }
    }

    let fixed_points = (0..len).filter(|&i| is_fixed_point(values, i)).count();
    debug_assert!(swaps <= fixed_points);
    PlacementStats {
        swaps,
        fixed_points,
    }
}

/// Returns the first missing non-negative integer in linear time and constant
/// extra space.
///
/// **Destructive**: `values` is left permuted (see [`place_fixed_points`]).
/// Callers that need the original order must pass a copy.
pub fn first_missing_linear_const<T: AsInteger>(values: &mut [T]) -> usize {
    let stats = place_fixed_points(values);
    let len = values.len();
    let answer = (0..len).find(|&i| !is_fixed_point(values, i)).unwrap_or(len);
    log::trace!(
        "first_missing_linear_const: len={len}, swaps={}, fixed_points={}, answer={answer}",
        stats.swaps,
        stats.fixed_points
    );
    answer
}

#[cfg(test)]
mod tests {
    use super::*;
    use fmnn_value::Value;

    #[test]
    fn test_linear_const_basic() {
        assert_eq!(first_missing_linear_const::<i32>(&mut []), 0);
        assert_eq!(first_missing_linear_const(&mut [0]), 1);
        assert_eq!(first_missing_linear_const(&mut [0, 1, 2, 3]), 4);
        assert_eq!(first_missing_linear_const(&mut [1, 3, 2, 0]), 4);
        assert_eq!(first_missing_linear_const(&mut [4, 1, 0, 5]), 2);
    }

    #[test]
    fn test_placement_of_a_single_cycle() {
        let mut values = [1, 2, 3, 0];
        let stats = place_fixed_points(&mut values);
        assert_eq!(values, [0, 1, 2, 3]);
        assert_eq!(
            stats,
            PlacementStats {
                swaps: 3,
                fixed_points: 4
            }
        );
    }

    #[test]
    fn test_placement_keeps_existing_fixed_points() {
        let mut values = [0, 0, 2, 2, 1];
        let stats = place_fixed_points(&mut values);
        assert_eq!(&values[..3], &[0, 1, 2]);
        assert_eq!(stats.fixed_points, 3);
        assert_eq!(stats.swaps, 1);
    }

    #[test]
    fn test_chase_steps() {
        let window = RangeMembership::for_len(3);
        let mut values = [2, 7, 0];
        assert_eq!(chase_step(&mut values, 0, &window), ChaseStep::Placed);
        assert_eq!(values, [0, 7, 2]);
        assert_eq!(chase_step(&mut values, 0, &window), ChaseStep::AlreadyPlaced);
        assert_eq!(chase_step(&mut values, 1, &window), ChaseStep::OutOfRange);
        assert_eq!(chase_step(&mut values, 2, &window), ChaseStep::AlreadyPlaced);
    }

    #[test]
    fn test_linear_const_heterogeneous() {
        let mut values: Vec<Value> = vec![
            Value::Integer(7),
            Value::Integer(5),
            Value::Integer(8),
            Value::Integer(0),
            Value::Integer(3),
            Value::Text("x".to_string()),
            Value::Integer(1),
            Value::Integer(15),
            Value::Integer(2),
            Value::Integer(5),
            Value::Integer(2),
            Value::Integer(0),
            Value::Integer(1),
            Value::Integer(5),
            Value::Text("y".to_string()),
        ];
        assert_eq!(first_missing_linear_const(&mut values), 4);
        for k in [0, 1, 2, 3, 5, 7, 8] {
            assert_eq!(values[k], Value::Integer(k as i64));
        }
    }

    #[test]
    fn test_is_fixed_point() {
        let values = [Value::Integer(-1), Value::Integer(1), Value::Float(2.0)];
        assert!(!is_fixed_point(&values, 0));
        assert!(is_fixed_point(&values, 1));
        assert!(!is_fixed_point(&values, 2));
        assert!(!is_fixed_point(&[i64::MIN, i64::MAX], 0));
    }

    #[test]
    fn test_swaps_bounded_by_len() {
        let mut values: Vec<i64> = (0..100).rev().collect();
        let stats = place_fixed_points(&mut values);
        assert!(stats.swaps <= values.len());
        assert_eq!(stats.fixed_points, 100);
        assert!(values.iter().enumerate().all(|(i, v)| *v == i as i64));
    }
}
