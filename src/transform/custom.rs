//! Function-computed tokens.

use super::Transform;
use crate::tokens::{add_tokens, remove_tokens};
use std::fmt;
use std::marker::PhantomData;

/// Asks a function which tokens to add and which to remove.
///
/// The function returns `(add, remove)`. Removal runs first, so a token in
/// both lists ends up present.
pub struct Custom<F, A, R> {
    f: F,
    _tokens: PhantomData<fn() -> (A, R)>,
}

impl<F, A, R> Custom<F, A, R> {
    pub const fn new(f: F) -> Self {
        Self {
            f,
            _tokens: PhantomData,
        }
    }
}

impl<V, F, A, R> Transform<V> for Custom<F, A, R>
where
    F: Fn(&V) -> (A, R),
    A: AsRef<str>,
    R: AsRef<str>,
{
    fn apply(&self, value: V, class_name: &str) -> (V, String) {
        let (add, remove) = (self.f)(&value);
        let cleared = remove_tokens(remove.as_ref(), class_name);
        let updated = add_tokens(add.as_ref(), &cleared).into_owned();
        (value, updated)
    }
}

impl<F: Clone, A, R> Clone for Custom<F, A, R> {
    fn clone(&self) -> Self {
        Self::new(self.f.clone())
    }
}

impl<F, A, R> fmt::Debug for Custom<F, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Custom").finish_non_exhaustive()
    }
}

/// Build a [`Custom`] transform from `f(value) -> (add, remove)`.
///
/// # Example
/// ```
/// use csst::{Transform, custom};
///
/// let parity = custom(|n: &i32| if n % 2 == 0 { ("even", "odd") } else { ("odd", "even") });
/// assert_eq!(parity.apply(3, "row even").1, "row odd");
/// ```
#[inline]
pub const fn custom<F, A, R>(f: F) -> Custom<F, A, R> {
    Custom::new(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_then_adds() {
        let t = custom(|_: &()| ("b", "a b"));
        assert_eq!(t.apply((), "a b c").1, "c b");
    }

    #[test]
    fn test_empty_lists_are_noops() {
        let t = custom(|_: &()| ("", ""));
        assert_eq!(t.apply((), " a  b").1, " a  b");
    }

    #[test]
    fn test_owned_token_lists() {
        let level = custom(|n: &u32| (format!("level-{n}"), String::from("level-1 level-2 level-3")));
        let (_, s) = level.apply(2, "meter level-1");
        assert_eq!(s, "meter level-2");
        let (value, s) = level.apply(3, &s);
        assert_eq!(value, 3);
        assert_eq!(s, "meter level-3");
    }
}
