//! Constant-time membership test for stepped integer ranges.
//!
//! [`RangeMembership`] answers "is `x` an element of `range(start, stop, step)`?"
//! without materializing the range, so the cost does not depend on the magnitude
//! of `x` or of the bounds.

use std::fmt;

use fmnn_common::{Result, verify_arg};
use fmnn_value::AsInteger;

/// Membership predicate for the integers `start, start + step, start + 2 * step, ...`
/// lying strictly before `stop`.
///
/// For a positive `step` the members satisfy `start <= x < stop`; for a negative
/// `step` they satisfy `stop < x <= start`. In both cases `x - start` must be a
/// multiple of `step`.
///
/// Values that are not integers (as classified by [`AsInteger`]) are never members.
/// Classification failures are not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeMembership {
    start: i64,
    stop: i64,
    step: i64,
}

impl RangeMembership {
    /// Creates a membership predicate.
    ///
    /// When `stop` is `None`, the range is `[0, start)`: `start` is taken as the
    /// upper bound and the lower bound is zero.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `step` is zero.
    pub fn new(start: i64, stop: Option<i64>, step: i64) -> Result<RangeMembership> {
        verify_arg!(step, step != 0);
        let (start, stop) = match stop {
            Some(stop) => (start, stop),
            None => (0, start),
        };
        Ok(RangeMembership { start, stop, step })
    }

    /// The range `[0, stop)` with unit step.
    pub const fn up_to(stop: i64) -> RangeMembership {
        RangeMembership {
            start: 0,
            stop,
            step: 1,
        }
    }

    /// The range `[start, stop)` with unit step.
    pub const fn with_bounds(start: i64, stop: i64) -> RangeMembership {
        RangeMembership {
            start,
            stop,
            step: 1,
        }
    }

    /// The window of candidate values `[0, len)` for a sequence of length `len`.
    pub fn for_len(len: usize) -> RangeMembership {
        RangeMembership::up_to(i64::try_from(len).unwrap_or(i64::MAX))
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn stop(&self) -> i64 {
        self.stop
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    /// Returns `true` if `value` is an integer member of the range.
    #[inline]
    pub fn contains<T: AsInteger + ?Sized>(&self, value: &T) -> bool {
        value.as_integer().is_some_and(|x| self.contains_integer(x))
    }

    /// Returns `true` if the integer `x` is a member of the range.
    #[inline]
    pub fn contains_integer(&self, x: i64) -> bool {
        let within_bounds = if self.step > 0 {
            self.start <= x && x < self.stop
        } else {
            self.stop < x && x <= self.start
        };
        // Widened so that neither the difference nor `i64::MIN % -1` can overflow.
        within_bounds && (i128::from(x) - i128::from(self.start)) % i128::from(self.step) == 0
    }

    /// Returns the member as a slot index, if `value` is a non-negative member.
    ///
    /// For the `[0, n)` windows built by [`RangeMembership::for_len`], this is the
    /// home slot of a candidate value.
    #[inline]
    pub fn candidate_index<T: AsInteger + ?Sized>(&self, value: &T) -> Option<usize> {
        value
            .as_integer()
            .filter(|&x| self.contains_integer(x))
            .and_then(|x| usize::try_from(x).ok())
    }

    /// Number of members of the range.
    pub fn len(&self) -> u64 {
        let (span, step) = if self.step > 0 {
            (
                i128::from(self.stop) - i128::from(self.start),
                i128::from(self.step),
            )
        } else {
            (
                i128::from(self.start) - i128::from(self.stop),
                -i128::from(self.step),
            )
        };
        if span <= 0 {
            return 0;
        }
        u64::try_from((span + step - 1) / step).unwrap_or(u64::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for RangeMembership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "range({}, {}, {})", self.start, self.stop, self.step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fmnn_value::Value;

    fn in_range(x: i64, start: i64, stop: Option<i64>, step: i64) -> bool {
        RangeMembership::new(start, stop, step).unwrap().contains(&x)
    }

    #[test]
    fn test_single_bound_members() {
        for (x, stop) in [(5, 8), (0, 5), (3, 4)] {
            assert!(in_range(x, stop, None, 1), "{x} in [0, {stop})");
        }
        for (x, stop) in [(8, 5), (-1, 3), (4, 4), (-10, 0), (-2, -1)] {
            assert!(!in_range(x, stop, None, 1), "{x} not in [0, {stop})");
        }
    }

    #[test]
    fn test_two_bound_members() {
        for (x, start, stop) in [(3, 2, 8), (3, 3, 4), (1, -1, 2)] {
            assert!(in_range(x, start, Some(stop), 1));
        }
        for (x, start, stop) in [(0, 2, 8), (4, -3, 4), (8, 2, 5)] {
            assert!(!in_range(x, start, Some(stop), 1));
        }
    }

    #[test]
    fn test_stepped_members() {
        assert!(in_range(9, 1, Some(15), 4));
        assert!(in_range(0, 8, Some(-3), -2));
        assert!(!in_range(2, 1, Some(9), 2));
        assert!(!in_range(7, 2, Some(7), 2));
        assert!(!in_range(-6, 1, Some(-10), -3));
    }

    #[test]
    fn test_boundaries() {
        let up_to_8 = RangeMembership::new(8, None, 1).unwrap();
        assert!(!up_to_8.contains(&8));
        assert!(up_to_8.contains(&7));
        assert!(!RangeMembership::new(5, Some(8), 1).unwrap().contains(&4));
        assert!(RangeMembership::new(1, Some(15), 4).unwrap().contains(&9));
    }

    #[test]
    fn test_zero_step_is_invalid() {
        let err = RangeMembership::new(0, None, 0).unwrap_err();
        assert!(err.is_invalid_arg("step"));
        assert!(RangeMembership::new(3, Some(10), 0).is_err());
    }

    #[test]
    fn test_non_integers_are_never_members() {
        let range = RangeMembership::up_to(10);
        assert!(!range.contains(&3.0f64));
        assert!(!range.contains("3"));
        assert!(!range.contains(&Value::Float(3.0)));
        assert!(!range.contains(&Value::Text("3".to_string())));
        assert!(!range.contains(&Value::Other));
        assert!(range.contains(&Value::Integer(3)));
    }

    #[test]
    fn test_huge_magnitudes() {
        let range = RangeMembership::up_to(i64::MAX);
        assert!(range.contains(&(i64::MAX - 1)));
        assert!(!range.contains(&i64::MAX));
        assert!(!range.contains(&i64::MIN));

        let wide = RangeMembership::new(i64::MIN, Some(i64::MAX), 3).unwrap();
        assert!(wide.contains(&i64::MIN));
        assert!(wide.contains(&(i64::MIN + 3)));
        assert!(!wide.contains(&(i64::MIN + 1)));

        let reversed = RangeMembership::new(i64::MAX, Some(i64::MIN), i64::MIN).unwrap();
        assert!(reversed.contains(&i64::MAX));
        assert!(reversed.contains(&-1));
        assert!(!reversed.contains(&0));
    }

    #[test]
    fn test_candidate_index() {
        let window = RangeMembership::for_len(4);
        assert_eq!(window.candidate_index(&3u8), Some(3));
        assert_eq!(window.candidate_index(&4u8), None);
        assert_eq!(window.candidate_index(&-1i32), None);
        assert_eq!(window.candidate_index(&Value::Float(1.0)), None);
        assert_eq!(RangeMembership::for_len(0).candidate_index(&0), None);
    }

    #[test]
    fn test_len_matches_enumeration() {
        let cases = [
            (0, Some(10), 1),
            (1, Some(15), 4),
            (8, Some(-3), -2),
            (5, Some(5), 1),
            (5, Some(2), 1),
            (2, Some(5), -1),
            (-7, Some(7), 3),
        ];
        for (start, stop, step) in cases {
            let range = RangeMembership::new(start, stop, step).unwrap();
            let expected = (-20i64..20).filter(|x| range.contains(x)).count() as u64;
            assert_eq!(range.len(), expected, "{range}");
            assert_eq!(range.is_empty(), expected == 0);
        }
        assert_eq!(
            RangeMembership::with_bounds(i64::MIN, i64::MAX).len(),
            u64::MAX
        );
    }

    #[test]
    fn test_accessors_and_display() {
        let range = RangeMembership::new(7, None, 1).unwrap();
        assert_eq!((range.start(), range.stop(), range.step()), (0, 7, 1));
        assert_eq!(range, RangeMembership::up_to(7));
        assert_eq!(range.to_string(), "range(0, 7, 1)");
        assert_eq!(
            RangeMembership::with_bounds(-2, 3).to_string(),
            "range(-2, 3, 1)"
        );
    }
}
