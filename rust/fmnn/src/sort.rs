//! Sorting by candidate key, then scanning.

use fmnn_value::AsInteger;

use crate::range_membership::RangeMembership;

/// Returns the first missing non-negative integer by sorting `values` on a
/// candidate key and scanning the sorted run from zero.
///
/// **Destructive**: `values` is left permuted. Callers that need the original
/// order must pass a copy.
///
/// Each element is keyed by its own value if it is a candidate (an integer in
/// `[0, len)`) and by the sentinel `len` otherwise. No answer can equal the
/// sentinel unless every slot holds a distinct candidate, in which case no
/// sentinel keys exist. Time and space are those of `sort_unstable_by_key`.
pub fn first_missing_sort<T: AsInteger>(values: &mut [T]) -> usize {
    let len = values.len();
    let window = RangeMembership::for_len(len);
    let key = |value: &T| window.candidate_index(value).unwrap_or(len);
    values.sort_unstable_by_key(key);

    let mut answer = 0;
    for k in values.iter().map(key) {
        if k > answer {
            break;
        }
        if k == answer {
            answer += 1;
        }
    }
    log::trace!("first_missing_sort: len={len}, answer={answer}");
    answer
}

#[cfg(test)]
mod tests {
    use super::*;
    use fmnn_value::Value;

    #[test]
    fn test_sort_basic() {
        assert_eq!(first_missing_sort::<i64>(&mut []), 0);
        assert_eq!(first_missing_sort(&mut [0]), 1);
        assert_eq!(first_missing_sort(&mut [0, 1, 2, 3]), 4);
        assert_eq!(first_missing_sort(&mut [1, 3, 2, 0]), 4);
        assert_eq!(first_missing_sort(&mut [4, 1, 0, 5]), 2);
    }

    #[test]
    fn test_sort_duplicates_and_sentinels() {
        let mut values = vec![
            0, 101, 1, 103, 0, 100, 101, 100, 2, 4, 0, 2, 1, 1, 103, 2, 0, 1,
        ];
        assert_eq!(first_missing_sort(&mut values), 3);
        // Candidates come first, in ascending order.
        assert_eq!(&values[..11], &[0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2]);
        assert_eq!(values[11], 4);
    }

    #[test]
    fn test_sort_permutes_input() {
        let mut values = vec![
            Value::Text("y".to_string()),
            Value::Integer(1),
            Value::Float(0.5),
            Value::Integer(0),
        ];
        assert_eq!(first_missing_sort(&mut values), 2);
        assert_eq!(&values[..2], &[Value::Integer(0), Value::Integer(1)]);
    }

    #[test]
    fn test_sort_all_non_candidates() {
        let mut values: Vec<i64> = vec![-1, 5, 9, i64::MAX];
        assert_eq!(first_missing_sort(&mut values), 0);
    }
}
