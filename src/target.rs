//! Mutable class targets.
//!
//! The only place a transform touches shared state: read the target's class
//! string once, run the transform, write the result back once.
//!
//! - `run()` - returns the transform's value and the target
//! - `with_value()` - returns the target
//! - `with_node()` - returns the value
//! - `lift()` - turns a transform into a reusable updater

use crate::debug;
use crate::transform::Transform;
use std::borrow::Cow;

/// Anything exposing a readable and writable class string.
pub trait ClassTarget {
    fn class_name(&self) -> Cow<'_, str>;
    fn set_class_name(&mut self, class_name: String);
}

impl ClassTarget for String {
    #[inline]
    fn class_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }

    #[inline]
    fn set_class_name(&mut self, class_name: String) {
        *self = class_name;
    }
}

/// An in-memory element carrying only a class attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    class_name: String,
}

impl Element {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.class_name
    }
}

impl ClassTarget for Element {
    #[inline]
    fn class_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.class_name)
    }

    #[inline]
    fn set_class_name(&mut self, class_name: String) {
        self.class_name = class_name;
    }
}

// =============================================================================
// Adapter
// =============================================================================

/// Apply `transform` to `target`'s class string, writing the result back.
pub fn run<'t, V, T, C>(transform: &T, value: V, target: &'t mut C) -> (V, &'t mut C)
where
    T: Transform<V> + ?Sized,
    C: ClassTarget + ?Sized,
{
    let (value, updated) = {
        let current = target.class_name();
        let (value, updated) = transform.apply(value, &current);
        debug!("apply"; "`{}` -> `{}`", current, updated);
        (value, updated)
    };
    target.set_class_name(updated);
    (value, target)
}

/// Like [`run`], returning only the target.
#[inline]
pub fn with_value<'t, V, T, C>(transform: &T, value: V, target: &'t mut C) -> &'t mut C
where
    T: Transform<V> + ?Sized,
    C: ClassTarget + ?Sized,
{
    run(transform, value, target).1
}

/// Like [`run`], returning only the transform's value.
#[inline]
pub fn with_node<V, T, C>(transform: &T, target: &mut C, value: V) -> V
where
    T: Transform<V> + ?Sized,
    C: ClassTarget + ?Sized,
{
    run(transform, value, target).0
}

/// Turn `transform` into an updater for any target.
///
/// # Example
/// ```
/// use csst::{Element, lift, toggle};
///
/// let update = lift(toggle("checked"));
/// let mut node = Element::new("box");
/// update(true, &mut node);
/// assert_eq!(node.as_str(), "box checked");
/// ```
pub fn lift<V, T, C>(transform: T) -> impl Fn(V, &mut C) -> V
where
    T: Transform<V>,
    C: ClassTarget + ?Sized,
{
    move |value: V, target: &mut C| with_node(&transform, target, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{cardinality, toggle};

    /// Counts reads and writes to check the adapter touches the target once each.
    #[derive(Default)]
    struct Probe {
        class_name: String,
        reads: std::cell::Cell<usize>,
        writes: usize,
    }

    impl ClassTarget for Probe {
        fn class_name(&self) -> Cow<'_, str> {
            self.reads.set(self.reads.get() + 1);
            Cow::Borrowed(&self.class_name)
        }

        fn set_class_name(&mut self, class_name: String) {
            self.writes += 1;
            self.class_name = class_name;
        }
    }

    #[test]
    fn test_run_writes_back_and_returns_both() {
        let mut node = Element::new("card");
        let (value, target) = run(&toggle("open"), true, &mut node);
        assert!(value);
        assert_eq!(target.as_str(), "card open");
        assert_eq!(node, Element::new("card open"));
    }

    #[test]
    fn test_projections() {
        let items = cardinality("item");
        let mut node = Element::default();

        let target = with_value(&items, 1, &mut node);
        assert_eq!(target.as_str(), "item-1");

        let value = with_node(&items, &mut node, 4);
        assert_eq!(value, 4);
        assert_eq!(node.as_str(), "item-n");
    }

    #[test]
    fn test_single_read_and_write() {
        let mut probe = Probe::default();
        run(&toggle("x"), true, &mut probe);
        assert_eq!(probe.reads.get(), 1);
        assert_eq!(probe.writes, 1);
        assert_eq!(probe.class_name, "x");
    }

    #[test]
    fn test_string_target() {
        let mut class_name = String::from("a b");
        with_value(&toggle("b"), false, &mut class_name);
        assert_eq!(class_name, "a");
    }

    #[test]
    fn test_lift_reuses_transform() {
        let update = lift(toggle("checked"));
        let mut node = Element::new("box");
        assert!(update(true, &mut node));
        assert!(!update(false, &mut node));
        assert_eq!(node.as_str(), "box");
    }
}
