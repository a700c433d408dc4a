//! Threshold ranges.

use super::Transform;
use crate::tokens::TokenSet;
use crate::value::Numeric;

/// Picks the class of the highest declared threshold a number reaches.
///
/// Thresholds are scanned from the last declared to the first and the first
/// one `<=` the value wins, so declaration order matters and need not be
/// sorted. When no threshold is reached the class string is left as is.
#[derive(Debug, Clone)]
pub struct Range {
    bounds: Vec<(TokenSet, f64)>,
    all: TokenSet,
}

impl Range {
    /// Build from `(token, threshold)` pairs in declaration order.
    pub fn new<C, T, I>(entries: I) -> Self
    where
        C: AsRef<str>,
        T: Into<f64>,
        I: IntoIterator<Item = (C, T)>,
    {
        let bounds: Vec<(TokenSet, f64)> = entries
            .into_iter()
            .map(|(class, min)| (TokenSet::new(class.as_ref()), min.into()))
            .collect();
        let all = TokenSet::from_tokens(bounds.iter().map(|(tokens, _)| tokens.as_str()));

        Self { bounds, all }
    }

    /// Every class this range may add.
    #[inline]
    pub fn classes(&self) -> &TokenSet {
        &self.all
    }

    /// The bucket selected for `n`, if a threshold is reached.
    pub fn select(&self, n: f64) -> Option<&TokenSet> {
        self.bounds
            .iter()
            .rev()
            .find(|(_, min)| *min <= n)
            .map(|(tokens, _)| tokens)
    }
}

impl<V: Numeric> Transform<V> for Range {
    fn apply(&self, value: V, class_name: &str) -> (V, String) {
        let Some(tokens) = value.to_number().and_then(|n| self.select(n)) else {
            return (value, class_name.to_owned());
        };

        let updated = tokens.add_to(&self.all.remove_from(class_name)).into_owned();
        (value, updated)
    }
}

/// Build a [`Range`] from `(token, threshold)` pairs.
///
/// # Example
/// ```
/// use csst::{Transform, range};
///
/// let size = range([("low", 0), ("mid", 10), ("high", 20)]);
/// assert_eq!(size.apply(15, "box low").1, "box mid");
/// assert_eq!(size.apply(-5, "box low").1, "box low");
/// ```
#[inline]
pub fn range<C, T, I>(entries: I) -> Range
where
    C: AsRef<str>,
    T: Into<f64>,
    I: IntoIterator<Item = (C, T)>,
{
    Range::new(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes() -> Range {
        range([("low", 0), ("mid", 10), ("high", 20)])
    }

    #[test]
    fn test_selects_highest_reached_threshold() {
        let size = sizes();
        assert_eq!(size.apply(15, "").1, "mid");
        assert_eq!(size.apply(25, "mid").1, "high");
        assert_eq!(size.apply(10, "high").1, "mid");
        assert_eq!(size.apply(0, "x").1, "x low");
    }

    #[test]
    fn test_no_threshold_leaves_string_unchanged() {
        let size = sizes();
        let (value, s) = size.apply(-5, " mid  x");
        assert_eq!(value, -5);
        assert_eq!(s, " mid  x");
    }

    #[test]
    fn test_declaration_order_decides_ties() {
        // Later declarations win even when their threshold is lower
        let size = range([("big", 10.0), ("small", 0.0)]);
        assert_eq!(size.apply(50.0, "").1, "small");

        let same = range([("first", 5), ("second", 5)]);
        assert_eq!(same.apply(5, "first").1, "second");
    }

    #[test]
    fn test_non_numeric_value_unchanged() {
        assert_eq!(sizes().apply("huge", "mid").1, "mid");
        assert_eq!(sizes().apply("12", "").1, "mid");
    }

    #[test]
    fn test_select() {
        let size = sizes();
        assert_eq!(size.select(19.9).map(TokenSet::as_str), Some("mid"));
        assert!(size.select(-0.1).is_none());
    }
}
