//! Value to class transforms.
//!
//! A transform maps a `(value, class string)` pair to a new pair. The value
//! passes through untouched; the class string gets the transform's tokens
//! added or removed.
//!
//! # Builders
//!
//! - `direct_map`: one token per value, at most one present at a time
//! - `toggle`: a single token switched by truthiness
//! - `cardinality`: zero/one/many style buckets for counts
//! - `range`: the highest declared threshold reached by a number
//! - `custom`: a function computing the tokens to add and remove
//!
//! Any `Fn(V, &str) -> (V, String)` closure is a transform too, and
//! transforms compose left to right with [`Pipeline`](crate::Pipeline).
//!
//! Every builder parses its tokens once, at construction.

mod cardinality;
mod custom;
mod map;
mod range;
mod toggle;

pub use cardinality::{Cardinality, DEFAULT_SUFFIXES, PLURAL_SUFFIXES, cardinality};
pub use custom::{Custom, custom};
pub use map::{DirectMap, direct_map};
pub use range::{Range, range};
pub use toggle::{Toggle, toggle};

/// A class assignment rule.
pub trait Transform<V> {
    /// Compute the next `(value, class string)` pair from `class_name`.
    fn apply(&self, value: V, class_name: &str) -> (V, String);
}

impl<V, F> Transform<V> for F
where
    F: Fn(V, &str) -> (V, String),
{
    #[inline]
    fn apply(&self, value: V, class_name: &str) -> (V, String) {
        self(value, class_name)
    }
}

// =============================================================================
// Tests
// =============================================================================
