//! Small function combinators.

/// Swap the arguments of a two-argument function.
///
/// # Example
/// ```
/// use csst::flip;
///
/// let below = flip(|limit: i32, n: i32| n < limit);
/// assert!(below(3, 10));
/// ```
#[inline]
pub fn flip<A, B, R>(f: impl Fn(A, B) -> R) -> impl Fn(B, A) -> R {
    move |b, a| f(a, b)
}
