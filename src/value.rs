//! Value coercions that drive transforms.
//!
//! Transforms are generic over the value they receive. Each builder asks for
//! the one view it needs:
//!
//! | Trait     | Used by              | Meaning                              |
//! |-----------|----------------------|--------------------------------------|
//! | `Truthy`  | `Toggle`             | on/off                               |
//! | `Numeric` | `Cardinality`, `Range` | a number, if the value has one     |
//! | `MapKey`  | `DirectMap`          | the lookup key (string coercion)     |
//!
//! `Value` is the dynamic value used by the config layer and the CLI.

use serde::Serialize;
use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Coercion traits
// =============================================================================

/// Truthiness of a value.
///
/// `false`, zero, `NaN`, empty text and missing values are falsy.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

/// Numeric view of a value.
pub trait Numeric {
    /// The number this value stands for, or `None` if it has none.
    fn to_number(&self) -> Option<f64>;
}

/// Lookup key of a value in a `DirectMap`.
pub trait MapKey {
    fn map_key(&self) -> Cow<'_, str>;
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Numeric for bool {
    #[inline]
    fn to_number(&self) -> Option<f64> {
        Some(if *self { 1.0 } else { 0.0 })
    }
}

impl MapKey for bool {
    #[inline]
    fn map_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(if *self { "true" } else { "false" })
    }
}

macro_rules! impl_integer {
    ($($ty:ty),*) => {$(
        impl Truthy for $ty {
            #[inline]
            fn is_truthy(&self) -> bool {
                *self != 0
            }
        }

        impl Numeric for $ty {
            #[inline]
            #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
            fn to_number(&self) -> Option<f64> {
                Some(*self as f64)
            }
        }

        impl MapKey for $ty {
            #[inline]
            fn map_key(&self) -> Cow<'_, str> {
                Cow::Owned(self.to_string())
            }
        }
    )*};
}

impl_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_float {
    ($($ty:ty),*) => {$(
        impl Truthy for $ty {
            #[inline]
            fn is_truthy(&self) -> bool {
                *self != 0.0 && !self.is_nan()
            }
        }

        impl Numeric for $ty {
            #[inline]
            fn to_number(&self) -> Option<f64> {
                Some(f64::from(*self))
            }
        }

        impl MapKey for $ty {
            #[inline]
            fn map_key(&self) -> Cow<'_, str> {
                Cow::Owned(self.to_string())
            }
        }
    )*};
}

impl_float!(f32, f64);

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Numeric for str {
    fn to_number(&self) -> Option<f64> {
        let trimmed = self.trim();
        if trimmed.is_empty() {
            return Some(0.0);
        }
        trimmed.parse().ok()
    }
}

impl MapKey for str {
    #[inline]
    fn map_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.as_str().is_truthy()
    }
}

impl Numeric for String {
    #[inline]
    fn to_number(&self) -> Option<f64> {
        self.as_str().to_number()
    }
}

impl MapKey for String {
    #[inline]
    fn map_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Numeric + ?Sized> Numeric for &T {
    #[inline]
    fn to_number(&self) -> Option<f64> {
        (**self).to_number()
    }
}

impl<T: MapKey + ?Sized> MapKey for &T {
    #[inline]
    fn map_key(&self) -> Cow<'_, str> {
        (**self).map_key()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Numeric> Numeric for Option<T> {
    #[inline]
    fn to_number(&self) -> Option<f64> {
        self.as_ref().and_then(Numeric::to_number)
    }
}

impl<T: MapKey> MapKey for Option<T> {
    fn map_key(&self) -> Cow<'_, str> {
        match self {
            Some(value) => value.map_key(),
            None => Cow::Borrowed("undefined"),
        }
    }
}

// =============================================================================
// Value
// =============================================================================

/// A dynamically typed value.
///
/// Parsed from command-line text with [`FromStr`]:
/// `true`/`false` become booleans, `null` becomes [`Value::Null`], anything
/// that parses as a float becomes a number, everything else is text.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => n.is_truthy(),
            Self::Text(s) => s.is_truthy(),
        }
    }
}

impl Numeric for Value {
    fn to_number(&self) -> Option<f64> {
        match self {
            Self::Null => None,
            Self::Bool(b) => b.to_number(),
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.to_number(),
        }
    }
}

impl MapKey for Value {
    fn map_key(&self) -> Cow<'_, str> {
        match self {
            Self::Null => Cow::Borrowed("null"),
            Self::Bool(b) => b.map_key(),
            Self::Number(n) => n.map_key(),
            Self::Text(s) => Cow::Borrowed(s),
        }
    }
}

impl FromStr for Value {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "null" => Self::Null,
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            _ => match s.trim().parse::<f64>() {
                Ok(n) if !s.trim().is_empty() => Self::Number(n),
                _ => Self::Text(s.to_owned()),
            },
        })
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.map_key())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

// =============================================================================
// Tests
// =============================================================================
