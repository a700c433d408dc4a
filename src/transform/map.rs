//! Direct value to token mapping.

use super::Transform;
use crate::tokens::TokenSet;
use crate::value::MapKey;
use rustc_hash::FxHashMap;

/// Maps each value to its own token.
///
/// Every call clears all mapped tokens before adding the current one, so at
/// most one of them is ever present. Values without an entry only clear.
#[derive(Debug, Clone)]
pub struct DirectMap {
    tokens: FxHashMap<String, TokenSet>,
    all: TokenSet,
}

impl DirectMap {
    /// Build from `(value, token)` pairs.
    ///
    /// Values are keyed by their [`MapKey`] view, so `1`, `1.0` and `"1"`
    /// share an entry. A later pair for the same key wins.
    pub fn new<K, C, I>(entries: I) -> Self
    where
        K: MapKey,
        C: AsRef<str>,
        I: IntoIterator<Item = (K, C)>,
    {
        let entries: Vec<(String, String)> = entries
            .into_iter()
            .map(|(key, class)| (key.map_key().into_owned(), class.as_ref().to_owned()))
            .collect();

        let all = TokenSet::from_tokens(entries.iter().map(|(_, class)| class));
        let tokens = entries
            .iter()
            .map(|(key, class)| (key.clone(), TokenSet::new(class)))
            .collect();

        Self { tokens, all }
    }

    /// Build from `(token, value)` pairs, the pivoted form of [`DirectMap::new`].
    pub fn from_classes<C, K, I>(entries: I) -> Self
    where
        C: AsRef<str>,
        K: MapKey,
        I: IntoIterator<Item = (C, K)>,
    {
        Self::new(entries.into_iter().map(|(class, key)| (key, class)))
    }

    /// Every token this map may add.
    #[inline]
    pub fn classes(&self) -> &TokenSet {
        &self.all
    }

    /// The tokens mapped to `value`, if any.
    pub fn lookup<V: MapKey + ?Sized>(&self, value: &V) -> Option<&TokenSet> {
        self.tokens.get(value.map_key().as_ref())
    }
}

impl<V: MapKey> Transform<V> for DirectMap {
    fn apply(&self, value: V, class_name: &str) -> (V, String) {
        let cleared = self.all.remove_from(class_name);
        let updated = match self.lookup(&value) {
            Some(tokens) => tokens.add_to(&cleared).into_owned(),
            None => cleared.into_owned(),
        };
        (value, updated)
    }
}

/// Build a [`DirectMap`] from `(value, token)` pairs.
///
/// # Example
/// ```
/// use csst::{Transform, direct_map};
///
/// let status = direct_map([("active", "is-active"), ("idle", "is-idle")]);
/// assert_eq!(status.apply("idle", "card is-active").1, "card is-idle");
/// ```
#[inline]
pub fn direct_map<K, C, I>(entries: I) -> DirectMap
where
    K: MapKey,
    C: AsRef<str>,
    I: IntoIterator<Item = (K, C)>,
{
    DirectMap::new(entries)
}

// =============================================================================
// Tests
// =============================================================================
