//! Count buckets.
//!
//! Two bucketing styles share one transform:
//!
//! - **Indexed**: `prefix + suffixes[i]` with `i = min(N - 1, max(0, floor(n)))`,
//!   so the last suffix collects every count past the end.
//! - **Plural**: fixed `-zero`, `-one`, `-many` buckets picked by
//!   `n < 1`, `n == 1`, otherwise many.

use super::Transform;
use crate::tokens::TokenSet;
use crate::value::Numeric;

/// Suffixes used by [`cardinality`]: exactly zero, exactly one, more.
pub const DEFAULT_SUFFIXES: [&str; 3] = ["-0", "-1", "-n"];

/// Suffixes used by [`Cardinality::plural`].
pub const PLURAL_SUFFIXES: [&str; 3] = ["-zero", "-one", "-many"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bucketing {
    Indexed,
    Plural,
}

/// Adds exactly one bucket class for a count, removing the others.
#[derive(Debug, Clone)]
pub struct Cardinality {
    buckets: Vec<TokenSet>,
    all: TokenSet,
    bucketing: Bucketing,
}

impl Cardinality {
    /// Indexed buckets with [`DEFAULT_SUFFIXES`].
    pub fn new(prefix: &str) -> Self {
        Self::with_suffixes(prefix, DEFAULT_SUFFIXES)
    }

    /// Indexed buckets with caller-provided suffixes, in bucket order.
    pub fn with_suffixes<I, S>(prefix: &str, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build(prefix, suffixes, Bucketing::Indexed)
    }

    /// Fixed zero/one/many buckets with [`PLURAL_SUFFIXES`].
    pub fn plural(prefix: &str) -> Self {
        Self::build(prefix, PLURAL_SUFFIXES, Bucketing::Plural)
    }

    fn build<I, S>(prefix: &str, suffixes: I, bucketing: Bucketing) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let classes: Vec<String> = suffixes
            .into_iter()
            .map(|suffix| format!("{prefix}{}", suffix.as_ref()))
            .collect();

        Self {
            all: TokenSet::from_tokens(&classes),
            buckets: classes.iter().map(|class| TokenSet::new(class)).collect(),
            bucketing,
        }
    }

    /// Every bucket class, in bucket order.
    #[inline]
    pub fn classes(&self) -> &TokenSet {
        &self.all
    }

    /// Bucket index for the count `n`, if any bucket applies.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn bucket(&self, n: f64) -> Option<usize> {
        let last = self.buckets.len().checked_sub(1)?;
        if n.is_nan() {
            return None;
        }

        let index = match self.bucketing {
            Bucketing::Indexed => n.max(0.0).floor().min(last as f64) as usize,
            Bucketing::Plural if n < 1.0 => 0,
            Bucketing::Plural if n == 1.0 => 1,
            Bucketing::Plural => 2,
        };
        Some(index.min(last))
    }
}

impl<V: Numeric> Transform<V> for Cardinality {
    fn apply(&self, value: V, class_name: &str) -> (V, String) {
        let cleared = self.all.remove_from(class_name);
        let bucket = value
            .to_number()
            .and_then(|n| self.bucket(n))
            .map(|index| &self.buckets[index]);

        let updated = match bucket {
            Some(tokens) => tokens.add_to(&cleared).into_owned(),
            None => cleared.into_owned(),
        };
        (value, updated)
    }
}

/// Build a [`Cardinality`] with the default `-0`, `-1`, `-n` suffixes.
///
/// # Example
/// ```
/// use csst::{Transform, cardinality};
///
/// let items = cardinality("item");
/// assert_eq!(items.apply(5, "list item-1").1, "list item-n");
/// ```
#[inline]
pub fn cardinality(prefix: &str) -> Cardinality {
    Cardinality::new(prefix)
}
