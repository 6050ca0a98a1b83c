//! Folds: consuming a recursive structure into a single value, one layer at a time.
use crate::frame::{expand_and_collapse, try_expand_and_collapse, ListFrame};
use crate::Recursive;

/// Collapse `data` into a single value. The base case yields `acc`, and every other layer
/// combines its element with the already-collapsed remainder, making this a right fold:
/// `combine(e0, combine(e1, ... combine(en, acc)))`.
///
/// Each layer costs one [`Recursive::unwrap`]; for `Vec` that shifts the remainder, making
/// the whole fold quadratic. Prefer `VecDeque` for long inputs.
///
/// ```rust
/// use recursion_schemes::cata;
///
/// assert_eq!(cata(vec![3, 5, 2, 9], 0, |x, acc| x + acc), 19);
/// // factorial, via the counter instance for unsigned integers
/// assert_eq!(cata(5u64, 1, |n, acc| n * acc), 120);
/// ```
pub fn cata<T: Recursive, Out>(
    data: T,
    acc: Out,
    combine: impl FnMut(T::Elem, Out) -> Out,
) -> Out {
    expand_and_collapse(data, Recursive::into_frame, acc, combine)
}

/// Bind `acc` and `combine`, returning a reusable fold. Each call starts from a fresh clone of `acc`.
///
/// ```rust
/// use recursion_schemes::cata_fn;
///
/// let sum = cata_fn::<Vec<i32>, _, _>(0, |x, acc| x + acc);
/// assert_eq!(sum(vec![1, 2, 3]), 6);
/// assert_eq!(sum(vec![10]), 10);
/// ```
pub fn cata_fn<T, Out, F>(acc: Out, combine: F) -> impl Fn(T) -> Out
where
    T: Recursive,
    Out: Clone,
    F: Fn(T::Elem, Out) -> Out,
{
    move |data| cata(data, acc.clone(), &combine)
}

/// Like [`cata`], with a fallible combining step. The first error stops the fold.
pub fn try_cata<T: Recursive, Out, E>(
    data: T,
    acc: Out,
    combine: impl FnMut(T::Elem, Out) -> Result<Out, E>,
) -> Result<Out, E> {
    try_expand_and_collapse(data, |layer| Ok(layer.into_frame()), acc, combine)
}

/// Collapse `data` into a single value like [`cata`], except that `combine` also receives
/// the remainder that was split off alongside each element, before it is itself collapsed.
///
/// ```rust
/// use recursion_schemes::para;
///
/// let suffixes = para(vec![1, 2, 3], Vec::new(), |_x, rest: Vec<i32>, mut acc| {
///     acc.insert(0, rest);
///     acc
/// });
/// assert_eq!(suffixes, vec![vec![2, 3], vec![3], vec![]]);
/// ```
pub fn para<T: Recursive + Clone, Out>(
    data: T,
    acc: Out,
    mut combine: impl FnMut(T::Elem, T, Out) -> Out,
) -> Out {
    expand_and_collapse(
        data,
        with_remainder,
        acc,
        |(elem, rest), out| combine(elem, rest, out),
    )
}

/// Bind `acc` and `combine`, returning a reusable [`para`]
pub fn para_fn<T, Out, F>(acc: Out, combine: F) -> impl Fn(T) -> Out
where
    T: Recursive + Clone,
    Out: Clone,
    F: Fn(T::Elem, T, Out) -> Out,
{
    move |data| para(data, acc.clone(), &combine)
}

/// Like [`para`], with a fallible combining step. The first error stops the fold.
pub fn try_para<T: Recursive + Clone, Out, E>(
    data: T,
    acc: Out,
    mut combine: impl FnMut(T::Elem, T, Out) -> Result<Out, E>,
) -> Result<Out, E> {
    try_expand_and_collapse(
        data,
        |layer| Ok(with_remainder(layer)),
        acc,
        |(elem, rest), out| combine(elem, rest, out),
    )
}

// keeps a copy of each remainder next to its element for para's combining step
#[inline(always)]
fn with_remainder<T: Recursive + Clone>(layer: T) -> ListFrame<(T::Elem, T), T> {
    match layer.into_frame() {
        ListFrame::Cons(elem, rest) => ListFrame::Cons((elem, rest.clone()), rest),
        ListFrame::Nil => ListFrame::Nil,
    }
}
