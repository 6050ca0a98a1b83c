//! Unfolds: building a recursive structure up from a seed value, one layer at a time.
use crate::frame::{expand_and_collapse, try_expand_and_collapse, ListFrame};
use crate::Recursive;

/// The result of a single [`apo`] step: either emit a value and keep unfolding from a new
/// seed, or emit a final value and stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<Elem, Seed> {
    Continue(Elem, Seed),
    Halt(Elem),
}

/// Unfold a structure from the seed pair `(seed, acc)`.
///
/// `step` is applied to the current seed, producing an element and the next seed. If
/// `finished` holds for that next seed, the element is wrapped onto `acc` and unfolding
/// stops; otherwise the element is wrapped onto whatever the rest of the unfold produces.
/// Elements therefore appear in the order they were generated, and `step` always runs at
/// least once.
///
/// No attempt is made to detect a `finished` that never holds: such an unfold does not return.
/// Each element costs one [`Recursive::wrap`], which is quadratic overall when unfolding into
/// a `Vec` and constant per element for `VecDeque`.
///
/// ```rust
/// use recursion_schemes::ana;
///
/// let squares = ana((1, Vec::new()), |x| *x > 5, |x| (x * x, x + 1));
/// assert_eq!(squares, vec![1, 4, 9, 16, 25]);
/// ```
pub fn ana<T: Recursive, S>(
    (seed, acc): (S, T),
    mut finished: impl FnMut(&S) -> bool,
    mut step: impl FnMut(S) -> (T::Elem, S),
) -> T {
    expand_and_collapse(
        Some(seed),
        |seed| match seed {
            Some(seed) => {
                let (elem, next) = step(seed);
                if finished(&next) {
                    ListFrame::Cons(elem, None)
                } else {
                    ListFrame::Cons(elem, Some(next))
                }
            }
            None => ListFrame::Nil,
        },
        acc,
        |elem, rest: T| rest.wrap(elem),
    )
}

/// Bind `finished` and `step`, returning a reusable unfold over seed pairs
pub fn ana_fn<T, S, P, F>(finished: P, step: F) -> impl Fn((S, T)) -> T
where
    T: Recursive,
    P: Fn(&S) -> bool,
    F: Fn(S) -> (T::Elem, S),
{
    move |seed| ana(seed, &finished, &step)
}

/// Like [`ana`], with a fallible step. The first error stops the unfold.
pub fn try_ana<T: Recursive, S, E>(
    (seed, acc): (S, T),
    mut finished: impl FnMut(&S) -> bool,
    mut step: impl FnMut(S) -> Result<(T::Elem, S), E>,
) -> Result<T, E> {
    try_expand_and_collapse(
        Some(seed),
        |seed| match seed {
            Some(seed) => {
                let (elem, next) = step(seed)?;
                if finished(&next) {
                    Ok(ListFrame::Cons(elem, None))
                } else {
                    Ok(ListFrame::Cons(elem, Some(next)))
                }
            }
            None => Ok(ListFrame::Nil),
        },
        acc,
        |elem, rest: T| Ok(rest.wrap(elem)),
    )
}

/// Unfold a structure from the seed pair `(seed, acc)`, with `step` deciding by itself
/// when to stop. [`Step::Continue`] wraps its element onto the rest of the unfold, and
/// [`Step::Halt`] wraps its final element onto `acc`.
///
/// ```rust
/// use recursion_schemes::{apo, Step};
///
/// let countdown = apo((3, Vec::new()), |n| {
///     if n == 1 {
///         Step::Halt(n)
///     } else {
///         Step::Continue(n, n - 1)
///     }
/// });
/// assert_eq!(countdown, vec![3, 2, 1]);
/// ```
pub fn apo<T: Recursive, S>((seed, acc): (S, T), mut step: impl FnMut(S) -> Step<T::Elem, S>) -> T {
    expand_and_collapse(
        Some(seed),
        |seed| match seed {
            Some(seed) => match step(seed) {
                Step::Continue(elem, next) => ListFrame::Cons(elem, Some(next)),
                Step::Halt(elem) => ListFrame::Cons(elem, None),
            },
            None => ListFrame::Nil,
        },
        acc,
        |elem, rest: T| rest.wrap(elem),
    )
}

/// Bind `step`, returning a reusable [`apo`] over seed pairs
pub fn apo_fn<T, S, F>(step: F) -> impl Fn((S, T)) -> T
where
    T: Recursive,
    F: Fn(S) -> Step<T::Elem, S>,
{
    move |seed| apo(seed, &step)
}

/// Like [`apo`], with a fallible step. The first error stops the unfold.
pub fn try_apo<T: Recursive, S, E>(
    (seed, acc): (S, T),
    mut step: impl FnMut(S) -> Result<Step<T::Elem, S>, E>,
) -> Result<T, E> {
    try_expand_and_collapse(
        Some(seed),
        |seed| match seed {
            Some(seed) => Ok(match step(seed)? {
                Step::Continue(elem, next) => ListFrame::Cons(elem, Some(next)),
                Step::Halt(elem) => ListFrame::Cons(elem, None),
            }),
            None => Ok(ListFrame::Nil),
        },
        acc,
        |elem, rest: T| Ok(rest.wrap(elem)),
    )
}
