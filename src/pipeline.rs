//! Transform composition.
//!
//! A [`Pipeline`] threads the `(value, class string)` pair through its
//! stages in the order they were added:
//!
//! ```text
//! (v0, s0) -> stage 1 -> (v1, s1) -> stage 2 -> (v2, s2) -> ...
//! ```
//!
//! Each stage sees the previous stage's value and class string, and the last
//! stage's pair is the result. An empty pipeline is the identity.

use crate::transform::Transform;
use std::fmt;

/// An ordered sequence of transforms, applied left to right.
pub struct Pipeline<V> {
    stages: Vec<Box<dyn Transform<V>>>,
}

impl<V> Pipeline<V> {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Append a stage.
    #[must_use]
    pub fn pipe<T>(mut self, stage: T) -> Self
    where
        T: Transform<V> + 'static,
    {
        self.stages.push(Box::new(stage));
        self
    }

    /// Append a stage only when `condition` holds.
    #[must_use]
    pub fn pipe_if<T>(self, condition: bool, stage: T) -> Self
    where
        T: Transform<V> + 'static,
    {
        if condition { self.pipe(stage) } else { self }
    }

    /// Append an already boxed stage.
    pub fn push(&mut self, stage: Box<dyn Transform<V>>) {
        self.stages.push(stage);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl<V> Default for Pipeline<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Transform<V> for Pipeline<V> {
    fn apply(&self, value: V, class_name: &str) -> (V, String) {
        let Some((first, rest)) = self.stages.split_first() else {
            return (value, class_name.to_owned());
        };

        rest.iter()
            .fold(first.apply(value, class_name), |(value, class_name), stage| {
                stage.apply(value, &class_name)
            })
    }
}

impl<V> FromIterator<Box<dyn Transform<V>>> for Pipeline<V> {
    fn from_iter<I: IntoIterator<Item = Box<dyn Transform<V>>>>(iter: I) -> Self {
        Self {
            stages: iter.into_iter().collect(),
        }
    }
}

impl<V> fmt::Debug for Pipeline<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stages.len())
            .finish()
    }
}

/// Compose boxed transforms into a [`Pipeline`], first stage first.
pub fn compose<V, I>(stages: I) -> Pipeline<V>
where
    I: IntoIterator<Item = Box<dyn Transform<V>>>,
{
    stages.into_iter().collect()
}

/// Compose transforms into a [`Pipeline`], first stage first.
///
/// # Example
/// ```
/// use csst::{Transform, compose, toggle, cardinality};
///
/// let items = compose![toggle("has-items"), cardinality("items")];
/// assert_eq!(items.apply(2, "list").1, "list has-items items-n");
/// ```
#[macro_export]
macro_rules! compose {
    ($($stage:expr),* $(,)?) => {
        $crate::Pipeline::new()$(.pipe($stage))*
    };
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{cardinality, custom, direct_map, range, toggle};

    #[test]
    fn test_empty_pipeline_is_identity() {
        let pipeline = Pipeline::<bool>::new();
        assert!(pipeline.is_empty());
        assert_eq!(pipeline.apply(true, " a  b"), (true, " a  b".to_string()));
    }

    #[test]
    fn test_compose_equals_sequential_application() {
        let first = toggle("on");
        let second = cardinality("n");
        let pipeline = compose![toggle("on"), cardinality("n")];

        for (value, start) in [(0, "x"), (1, "x on n-0"), (5, "")] {
            let (v1, s1) = first.apply(value, start);
            let expected = second.apply(v1, &s1);
            assert_eq!(pipeline.apply(value, start), expected);
        }
    }

    #[test]
    fn test_stages_run_left_to_right() {
        // The second stage undoes the first only if it runs last
        let pipeline = Pipeline::new()
            .pipe(custom(|_: &()| ("a", "")))
            .pipe(custom(|_: &()| ("", "a")));
        assert_eq!(pipeline.apply((), "x").1, "x");
    }

    #[test]
    fn test_value_threads_through_stages() {
        let double = |n: i32, class_name: &str| (n * 2, class_name.to_owned());
        let pipeline = compose![double, range([("small", 0), ("big", 10)])];
        assert_eq!(pipeline.apply(6, ""), (12, "big".to_string()));
    }

    #[test]
    fn test_compose_boxed() {
        let pipeline = compose(vec![
            Box::new(direct_map([("a", "x")])) as Box<dyn Transform<&str>>,
            Box::new(toggle("set")),
        ]);
        assert_eq!(pipeline.len(), 2);
        assert_eq!(pipeline.apply("a", "").1, "x set");
        assert_eq!(pipeline.apply("", "x set").1, "");
    }

    #[test]
    fn test_pipe_if() {
        let pipeline = Pipeline::new()
            .pipe(toggle("a"))
            .pipe_if(false, toggle("b"));
        assert_eq!(pipeline.len(), 1);
        assert_eq!(pipeline.apply(true, "").1, "a");
    }
}
