//! Heterogeneous element values and the integer classification capability.
//!
//! The FMNN algorithms accept sequences whose elements may or may not be integers.
//! Rather than probing arbitrary values at runtime, elements are classified through
//! the [`AsInteger`] trait: an element is an integer exactly when `as_integer()`
//! returns `Some`. The closed [`Value`] enum is the representation used where
//! external, untyped input (JSON, command-line arguments) enters the system.
//!
//! # Key Types
//!
//! - [`Value`] - Tagged element value: an exact integer or something else
//! - [`AsInteger`] - Capability trait implemented by `Value` and the primitive types

use std::fmt;

#[cfg(feature = "json")]
mod json;

#[cfg(feature = "json")]
pub use json::{values_from_json_array, values_to_json_array};

/// Classifies an element as an exact integer.
///
/// Implementations return `Some` only for values whose type is an integer type.
/// Integer-valued floats (`3.0`), numeric text (`"3"`) and booleans are not
/// integers. Integers that do not fit in `i64` return `None`: they can never be
/// a candidate for any sequence that fits in memory.
pub trait AsInteger {
    fn as_integer(&self) -> Option<i64>;
}

impl<T: AsInteger + ?Sized> AsInteger for &T {
    #[inline]
    fn as_integer(&self) -> Option<i64> {
        (**self).as_integer()
    }
}

impl<T: AsInteger + ?Sized> AsInteger for Box<T> {
    #[inline]
    fn as_integer(&self) -> Option<i64> {
        (**self).as_integer()
    }
}

macro_rules! impl_as_integer_lossless {
    ($($t:ty),*) => {
        $(
            impl AsInteger for $t {
                #[inline]
                fn as_integer(&self) -> Option<i64> {
                    Some(i64::from(*self))
                }
            }
        )*
    };
}

macro_rules! impl_as_integer_checked {
    ($($t:ty),*) => {
        $(
            impl AsInteger for $t {
                #[inline]
                fn as_integer(&self) -> Option<i64> {
                    i64::try_from(*self).ok()
                }
            }
        )*
    };
}

macro_rules! impl_as_integer_never {
    ($($t:ty),*) => {
        $(
            impl AsInteger for $t {
                #[inline]
                fn as_integer(&self) -> Option<i64> {
                    None
                }
            }
        )*
    };
}

impl_as_integer_lossless!(i8, i16, i32, i64, u8, u16, u32);
impl_as_integer_checked!(isize, usize, u64, i128, u128);
impl_as_integer_never!(f32, f64, bool, char, str, String);

impl<T: AsInteger> AsInteger for Option<T> {
    #[inline]
    fn as_integer(&self) -> Option<i64> {
        self.as_ref().and_then(AsInteger::as_integer)
    }
}

/// A single element of a heterogeneous sequence.
///
/// `Integer` is the only variant that can take part in an FMNN computation;
/// every other variant is silently ignored by the algorithms.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// An exact integer.
    Integer(i64),
    /// A floating point number, including integral ones such as `2.0`.
    Float(f64),
    /// A text value, including numeric-looking text such as `"2"`.
    Text(String),
    /// Anything else: booleans, nulls, nested structures, integers beyond `i64`.
    #[default]
    Other,
}

impl Value {
    /// Returns `true` if the value is an exact integer.
    pub fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    /// Short name of the variant, used in diagnostics.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Other => "other",
        }
    }
}

impl AsInteger for Value {
    #[inline]
    fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            Value::Float(_) | Value::Text(_) | Value::Other => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Text(s) => write!(f, "{s:?}"),
            Value::Other => f.write_str("<other>"),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}
