use std::{fmt, str::FromStr};

use fmnn_common::error::Error;
use fmnn_value::AsInteger;

use crate::{
    linear_const::first_missing_linear_const, linear_linear::first_missing_linear_linear,
    naive::first_missing_naive, sort::first_missing_sort,
};

/// The interchangeable algorithms computing the first missing non-negative integer.
///
/// All strategies return the same answer for the same input; they differ in time
/// and space complexity and in whether they permute their input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// Probes `0, 1, 2, ...` with membership tests. Quadratic, constant space.
    Naive,
    /// Sorts by candidate key and scans. `O(n log n)`, permutes the input.
    Sort,
    /// Presence table of `n + 1` flags. Linear time and space.
    LinearLinear,
    /// In-place cycle chasing. Linear time, constant space, permutes the input.
    LinearConst,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::Naive,
        StrategyKind::Sort,
        StrategyKind::LinearLinear,
        StrategyKind::LinearConst,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            StrategyKind::Naive => "naive",
            StrategyKind::Sort => "sort",
            StrategyKind::LinearLinear => "linear-linear",
            StrategyKind::LinearConst => "linear-const",
        }
    }

    /// Returns `true` if the strategy leaves its input permuted.
    pub const fn is_destructive(&self) -> bool {
        matches!(self, StrategyKind::Sort | StrategyKind::LinearConst)
    }

    /// Runs the strategy on `values`.
    ///
    /// Destructive strategies permute `values`; the others only read it.
    pub fn first_missing<T: AsInteger>(self, values: &mut [T]) -> usize {
        match self {
            StrategyKind::Naive => first_missing_naive(&*values),
            StrategyKind::Sort => first_missing_sort(values),
            StrategyKind::LinearLinear => first_missing_linear_linear(values),
            StrategyKind::LinearConst => first_missing_linear_const(values),
        }
    }

    /// Runs the strategy without modifying `values`, copying them first if the
    /// strategy is destructive.
    pub fn first_missing_preserving<T: AsInteger + Clone>(self, values: &[T]) -> usize {
        match self {
            StrategyKind::Naive => first_missing_naive(values),
            StrategyKind::LinearLinear => first_missing_linear_linear(values),
            StrategyKind::Sort | StrategyKind::LinearConst => {
                let mut copy = values.to_vec();
                self.first_missing(&mut copy)
            }
        }
    }
}

impl TryFrom<&str> for StrategyKind {
    type Error = Error;

    fn try_from(name: &str) -> Result<Self, Error> {
        match name {
            "naive" => Ok(StrategyKind::Naive),
            "sort" => Ok(StrategyKind::Sort),
            "linear-linear" => Ok(StrategyKind::LinearLinear),
            "linear-const" => Ok(StrategyKind::LinearConst),
            _ => Err(Error::invalid_arg(
                "name",
                format!("Unrecognized strategy: {name}"),
            )),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        StrategyKind::try_from(s)
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
