//! The capability every type must provide to be folded or unfolded by this crate,
//! along with the engines that consume and produce such types.
use crate::frame::ListFrame;

pub mod collapse;
pub mod expand;
mod instances;

/// A type that can be decomposed one layer at a time into an element and a remainder,
/// and composed back up one element at a time.
///
/// For example, a sequence decomposes into its head and its tail, and a natural number `n`
/// decomposes into `n` itself and its predecessor.
///
/// # Laws
///
/// Implementations must uphold the following, which the engines in this crate rely on
/// to terminate and to preserve element order:
///
/// - `x.is_base()` is true exactly when `x.unwrap()` returns `None`
/// - `s.wrap(e).unwrap() == Some((e, s))` for any remainder `s` and element `e`
/// - `x.empty().is_base()` is true for any `x`
///
/// # Implementing this trait
///
/// ```rust
/// use recursion_schemes::{cata, Recursive};
///
/// #[derive(Debug, Clone, PartialEq)]
/// enum Stack {
///     Push(u8, Box<Stack>),
///     Bottom,
/// }
///
/// impl Recursive for Stack {
///     type Elem = u8;
///
///     fn is_base(&self) -> bool {
///         matches!(self, Stack::Bottom)
///     }
///
///     fn unwrap(self) -> Option<(u8, Self)> {
///         match self {
///             Stack::Push(x, rest) => Some((x, *rest)),
///             Stack::Bottom => None,
///         }
///     }
///
///     fn wrap(self, elem: u8) -> Self {
///         Stack::Push(elem, Box::new(self))
///     }
///
///     fn empty(&self) -> Self {
///         Stack::Bottom
///     }
/// }
///
/// let stack = Stack::Bottom.wrap(3).wrap(2).wrap(1);
/// let digits = cata(stack, String::new(), |x, acc| format!("{}{}", x, acc));
/// assert_eq!(digits, "123");
/// ```
pub trait Recursive: Sized {
    /// The value peeled off by a single decomposition step
    type Elem;

    /// True exactly at the terminal form of this structure
    fn is_base(&self) -> bool;

    /// Split off the current element, returning it along with the remaining structure.
    /// Returns `None` at the base case.
    fn unwrap(self) -> Option<(Self::Elem, Self)>;

    /// Compose `elem` onto `self` such that unwrapping the result yields `(elem, self)`
    fn wrap(self, elem: Self::Elem) -> Self;

    /// The canonical base value for this type
    fn empty(&self) -> Self;

    /// View a single layer of this structure as a frame
    #[inline(always)]
    fn into_frame(self) -> ListFrame<Self::Elem, Self> {
        if self.is_base() {
            return ListFrame::Nil;
        }
        match self.unwrap() {
            Some((elem, rest)) => ListFrame::Cons(elem, rest),
            None => ListFrame::Nil,
        }
    }
}

/// Method syntax for the folds in [`collapse`]
pub trait RecursiveExt: Recursive {
    /// See [`collapse::cata`]
    fn cata<Out>(self, acc: Out, combine: impl FnMut(Self::Elem, Out) -> Out) -> Out {
        collapse::cata(self, acc, combine)
    }

    /// See [`collapse::para`]
    fn para<Out>(self, acc: Out, combine: impl FnMut(Self::Elem, Self, Out) -> Out) -> Out
    where
        Self: Clone,
    {
        collapse::para(self, acc, combine)
    }

    /// See [`collapse::try_cata`]
    fn try_cata<Out, E>(
        self,
        acc: Out,
        combine: impl FnMut(Self::Elem, Out) -> Result<Out, E>,
    ) -> Result<Out, E> {
        collapse::try_cata(self, acc, combine)
    }
}

impl<X: Recursive> RecursiveExt for X {}
