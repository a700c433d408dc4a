//! Class token algebra.
//!
//! Whitespace-safe add/remove of space-delimited class tokens within a
//! class-attribute string:
//! - `add_tokens()` - append tokens, dropping earlier copies first
//! - `remove_tokens()` - remove whole tokens in a single pass
//! - `TokenSet` - a parsed token spec with its removal pattern compiled once
//!
//! Tokens are matched as whole words, where `-` and `_` do not count as word
//! boundaries: removing `btn` never touches `btn-primary`.
//!
//! Tokens are spliced into a regular expression as-is. Characters with regex
//! meaning (`.`, `(`, `+`, ...) are NOT escaped; callers that use such class
//! names get pattern semantics, and specs that fail to compile remove nothing.

use crate::debug;
use fancy_regex::Regex;
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

// =============================================================================
// Errors
// =============================================================================

/// Token spec parsing errors.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("class tokens `{tokens}` do not form a valid pattern")]
    InvalidPattern {
        tokens: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },
}

// =============================================================================
// TokenSet
// =============================================================================

/// A parsed set of class tokens.
///
/// Holds the tokens in declaration order, their single-space rendering, and
/// the one-pass removal pattern. Build once, apply many times.
#[derive(Clone)]
pub struct TokenSet {
    tokens: Vec<String>,
    joined: String,
    pattern: Option<Regex>,
}

impl TokenSet {
    /// Parse a whitespace-separated token spec.
    ///
    /// Lenient: a spec whose pattern fails to compile yields a set that
    /// still adds its tokens but removes nothing.
    pub fn new(spec: &str) -> Self {
        match Self::try_new(spec) {
            Ok(set) => set,
            Err(err) => {
                debug!("tokens"; "{}, removal disabled", err);
                let tokens = split(spec);
                Self {
                    joined: tokens.join(" "),
                    tokens,
                    pattern: None,
                }
            }
        }
    }

    /// Parse a token spec, failing if its removal pattern does not compile.
    pub fn try_new(spec: &str) -> Result<Self, TokenError> {
        let tokens = split(spec);
        let pattern = if tokens.is_empty() {
            None
        } else {
            let source = format!(r"(\s+|^)({})(\b(?![\-_])|$)", tokens.join("|"));
            let rx = Regex::new(&source).map_err(|err| TokenError::InvalidPattern {
                tokens: spec.to_owned(),
                source: Box::new(err),
            })?;
            Some(rx)
        };

        Ok(Self {
            joined: tokens.join(" "),
            tokens,
            pattern,
        })
    }

    /// Build a set from already-split tokens, dropping repeats.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let owned: Vec<S> = tokens.into_iter().collect();
        let mut unique: Vec<&str> = Vec::new();
        for token in owned.iter().flat_map(|s| s.as_ref().split_whitespace()) {
            if !unique.contains(&token) {
                unique.push(token);
            }
        }
        Self::new(&unique.join(" "))
    }

    /// Tokens in declaration order.
    #[inline]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens joined by single spaces.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.joined
    }

    /// Check whether any token of this set occurs in `target`.
    pub fn contains_in(&self, target: &str) -> bool {
        self.pattern
            .as_ref()
            .is_some_and(|rx| rx.is_match(target).unwrap_or(false))
    }

    /// Remove every whole-token occurrence of this set from `target`.
    ///
    /// Returns `target` borrowed when nothing matched.
    pub fn remove_from<'a>(&self, target: &'a str) -> Cow<'a, str> {
        let Some(rx) = &self.pattern else {
            return Cow::Borrowed(target);
        };

        match rx.try_replacen(target, 0, "") {
            // Matches at position 0 leave the following separator behind
            Ok(Cow::Owned(mut stripped)) => {
                let leading = stripped.len() - stripped.trim_start().len();
                stripped.drain(..leading);
                Cow::Owned(stripped)
            }
            Ok(Cow::Borrowed(_)) => Cow::Borrowed(target),
            Err(err) => {
                debug!("tokens"; "removing `{}` failed: {}", self.joined, err);
                Cow::Borrowed(target)
            }
        }
    }

    /// Append this set to `target`, removing earlier copies first.
    ///
    /// The remaining tokens are re-joined by single spaces, so the result
    /// never carries leading, trailing or doubled whitespace.
    pub fn add_to<'a>(&self, target: &'a str) -> Cow<'a, str> {
        if self.is_empty() {
            return Cow::Borrowed(target);
        }

        let cleared = self.remove_from(target);
        let mut updated = String::with_capacity(cleared.len() + self.joined.len() + 1);
        for token in cleared.split_whitespace() {
            updated.push_str(token);
            updated.push(' ');
        }
        updated.push_str(&self.joined);
        Cow::Owned(updated)
    }
}

impl fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSet")
            .field("tokens", &self.tokens)
            .field("removable", &self.pattern.is_some())
            .finish()
    }
}

impl PartialEq for TokenSet {
    fn eq(&self, other: &Self) -> bool {
        self.tokens == other.tokens
    }
}

impl fmt::Display for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined)
    }
}

#[inline]
fn split(spec: &str) -> Vec<String> {
    spec.split_whitespace().map(str::to_owned).collect()
}

// =============================================================================
// Free functions
// =============================================================================

/// Add `tokens` to the class string `target`.
///
/// Tokens already present are moved to the end rather than duplicated.
///
/// # Example
/// ```
/// use csst::add_tokens;
///
/// assert_eq!(add_tokens("b", "a b c"), "a c b");
/// assert_eq!(add_tokens("", "a b"), "a b");
/// ```
#[inline]
pub fn add_tokens<'a>(tokens: &str, target: &'a str) -> Cow<'a, str> {
    if tokens.trim().is_empty() {
        return Cow::Borrowed(target);
    }
    TokenSet::new(tokens).add_to(target)
}

/// Remove `tokens` from the class string `target`.
///
/// # Example
/// ```
/// use csst::remove_tokens;
///
/// assert_eq!(remove_tokens("btn", "btn-primary btn"), "btn-primary");
/// assert_eq!(remove_tokens("a", "a b"), "b");
/// ```
#[inline]
pub fn remove_tokens<'a>(tokens: &str, target: &'a str) -> Cow<'a, str> {
    if tokens.trim().is_empty() {
        return Cow::Borrowed(target);
    }
    TokenSet::new(tokens).remove_from(target)
}

// =============================================================================
// Tests
// =============================================================================
