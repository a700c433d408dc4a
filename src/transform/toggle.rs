//! Truthiness toggle.

use super::Transform;
use crate::tokens::TokenSet;
use crate::value::Truthy;

/// Adds its tokens for truthy values and removes them otherwise.
#[derive(Debug, Clone)]
pub struct Toggle {
    tokens: TokenSet,
}

impl Toggle {
    pub fn new(name: &str) -> Self {
        Self {
            tokens: TokenSet::new(name),
        }
    }

    #[inline]
    pub fn classes(&self) -> &TokenSet {
        &self.tokens
    }
}

impl<V: Truthy> Transform<V> for Toggle {
    fn apply(&self, value: V, class_name: &str) -> (V, String) {
        let updated = if value.is_truthy() {
            self.tokens.add_to(class_name)
        } else {
            self.tokens.remove_from(class_name)
        };
        (value, updated.into_owned())
    }
}

/// Build a [`Toggle`] for the class `name`.
#[inline]
pub fn toggle(name: &str) -> Toggle {
    Toggle::new(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_on_off() {
        let open = toggle("is-open");
        let (_, s) = open.apply(true, "menu");
        assert_eq!(s, "menu is-open");
        let (_, s) = open.apply(false, &s);
        assert_eq!(s, "menu");
    }

    #[test]
    fn test_toggle_is_idempotent() {
        let open = toggle("is-open");
        assert_eq!(open.apply(true, "menu is-open").1, "menu is-open");
        assert_eq!(open.apply(false, "menu").1, "menu");
    }

    #[test]
    fn test_toggle_on_padded_class() {
        assert_eq!(toggle("b").apply(true, " a").1, "a b");
        assert_eq!(toggle("b").apply(true, "a  ").1, "a b");
    }

    #[test]
    fn test_toggle_uses_truthiness() {
        let active = toggle("active");
        assert_eq!(active.apply(0, "").1, "");
        assert_eq!(active.apply(3, "").1, "active");
        assert_eq!(active.apply("", "active").1, "");
        assert_eq!(active.apply(Some("x"), "").1, "active");
    }

    #[test]
    fn test_toggle_passes_value_through() {
        assert_eq!(toggle("a").apply(42u8, "").0, 42);
    }
}
