//! Data generation utilities for testing.
//!
//! All generators draw from a caller-supplied `fastrand::Rng`, so a fixed seed
//! reproduces the same sequence.

use fmnn_value::Value;

/// Relative weights of the element kinds produced by [`generate_values`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueMix {
    /// Integers in `[0, len)`, the only elements that can affect the answer.
    pub candidates: u32,
    /// Negative integers.
    pub negatives: u32,
    /// Integers at or beyond the sequence length, up to `i64::MAX`.
    pub large: u32,
    /// Floats, half of them integral (`2.0`).
    pub floats: u32,
    /// Text, half of it numeric (`"2"`).
    pub texts: u32,
    /// `Value::Other`.
    pub others: u32,
}

impl Default for ValueMix {
    fn default() -> Self {
        ValueMix {
            candidates: 12,
            negatives: 2,
            large: 2,
            floats: 2,
            texts: 1,
            others: 1,
        }
    }
}

impl ValueMix {
    /// Only candidate integers.
    pub fn candidates_only() -> Self {
        ValueMix {
            candidates: 1,
            negatives: 0,
            large: 0,
            floats: 0,
            texts: 0,
            others: 0,
        }
    }

    fn total(&self) -> u32 {
        self.candidates + self.negatives + self.large + self.floats + self.texts + self.others
    }
}

/// Generates `len` heterogeneous values with the given mix.
///
/// Candidate integers are drawn with replacement, so duplicates are common and the
/// answer is usually well below `len`.
pub fn generate_values(len: usize, mix: ValueMix, rng: &mut fastrand::Rng) -> Vec<Value> {
    assert_ne!(mix.total(), 0);
    let bound = i64::try_from(len).unwrap_or(i64::MAX);
    (0..len)
        .map(|_| {
            let mut pick = rng.u32(0..mix.total());
            if pick < mix.candidates {
                return Value::Integer(rng.i64(0..bound));
            }
            pick -= mix.candidates;
            if pick < mix.negatives {
                return Value::Integer(rng.i64(i64::MIN..0));
            }
            pick -= mix.negatives;
            if pick < mix.large {
                return Value::Integer(rng.i64(bound..=i64::MAX));
            }
            pick -= mix.large;
            if pick < mix.floats {
                return if rng.bool() {
                    Value::Float(rng.i64(0..=bound) as f64)
                } else {
                    Value::Float(rng.f64() * bound as f64)
                };
            }
            pick -= mix.floats;
            if pick < mix.texts {
                return if rng.bool() {
                    Value::Text(rng.i64(0..=bound).to_string())
                } else {
                    Value::Text((0..rng.usize(0..6)).map(|_| rng.lowercase()).collect())
                };
            }
            Value::Other
        })
        .collect()
}

/// Generates a random permutation of `0..len`, the worst case of the naive
/// strategy and the case where every slot becomes a fixed point.
pub fn generate_permutation(len: usize, rng: &mut fastrand::Rng) -> Vec<i64> {
    let mut values: Vec<i64> = (0..len as i64).collect();
    rng.shuffle(&mut values);
    values
}

/// Generates a permutation of `0..len` with `missing` removed and replaced by a
/// non-candidate, so the expected answer is `missing`.
pub fn generate_with_missing(len: usize, missing: usize, rng: &mut fastrand::Rng) -> Vec<Value> {
    assert!(missing < len);
    let mut values: Vec<Value> = (0..len as i64)
        .map(|i| {
            if i == missing as i64 {
                Value::Text(i.to_string())
            } else {
                Value::Integer(i)
            }
        })
        .collect();
    rng.shuffle(&mut values);
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_values_is_reproducible() {
        let a = generate_values(100, ValueMix::default(), &mut fastrand::Rng::with_seed(7));
        let b = generate_values(100, ValueMix::default(), &mut fastrand::Rng::with_seed(7));
        assert_eq!(a.len(), 100);
        assert_eq!(a, b);
    }

    #[test]
    fn test_candidates_only_mix() {
        let mut rng = fastrand::Rng::with_seed(11);
        let values = generate_values(50, ValueMix::candidates_only(), &mut rng);
        assert!(values
            .iter()
            .all(|v| matches!(v, Value::Integer(i) if (0..50).contains(i))));
    }

    #[test]
    fn test_empty_generation() {
        let mut rng = fastrand::Rng::with_seed(1);
        assert!(generate_values(0, ValueMix::default(), &mut rng).is_empty());
        assert!(generate_permutation(0, &mut rng).is_empty());
    }

    #[test]
    fn test_generate_permutation() {
        let mut rng = fastrand::Rng::with_seed(3);
        let mut values = generate_permutation(40, &mut rng);
        values.sort_unstable();
        assert_eq!(values, (0..40).collect::<Vec<i64>>());
    }

    #[test]
    fn test_generate_with_missing() {
        let mut rng = fastrand::Rng::with_seed(5);
        let values = generate_with_missing(10, 4, &mut rng);
        assert_eq!(values.len(), 10);
        assert!(!values.contains(&Value::Integer(4)));
        assert!(values.contains(&Value::Text("4".to_string())));
    }
}
