/// A single layer of a list-shaped recursive structure: either the base case, or one
/// element plus whatever stands in for the rest of the structure.
///
/// `Next` is the remainder when decomposing a value, a seed when unfolding one, and
/// an already-collapsed result when folding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFrame<Elem, Next> {
    Cons(Elem, Next),
    Nil,
}

impl<Elem, Next> ListFrame<Elem, Next> {
    /// Apply some function `f` to the remainder of a `Cons` frame
    #[inline(always)]
    pub fn map_next<B>(self, f: impl FnOnce(Next) -> B) -> ListFrame<Elem, B> {
        match self {
            ListFrame::Cons(elem, next) => ListFrame::Cons(elem, f(next)),
            ListFrame::Nil => ListFrame::Nil,
        }
    }
}

/// This function generates a stack machine for list frames, expanding some seed value
/// `Seed` into frames via a function `Seed -> ListFrame<Elem, Seed>` and collapsing the
/// emitted elements onto `base` via a function `(Elem, Out) -> Out`.
///
/// Elements are collapsed innermost first, so the result is the same as the right-nested
/// `collapse(e0, collapse(e1, ... collapse(en, base)))`.
///
/// This function is stack safe (it does not use the call stack), but it
/// does use an internal stack data structure holding one element per expanded layer
pub fn expand_and_collapse<Seed, Elem, Out>(
    seed: Seed,
    mut expand_frame: impl FnMut(Seed) -> ListFrame<Elem, Seed>,
    base: Out,
    mut collapse_frame: impl FnMut(Elem, Out) -> Out,
) -> Out {
    let mut elems = Vec::new();
    let mut seed = seed;

    while let ListFrame::Cons(elem, next) = expand_frame(seed) {
        elems.push(elem);
        seed = next;
    }

    tracing::trace!(layers = elems.len(), "expanded frames");

    let mut out = base;
    while let Some(elem) = elems.pop() {
        out = collapse_frame(elem, out);
    }
    out
}

/// This function generates a fallible stack machine for list frames, expanding some seed
/// value `Seed` into frames via a function `Seed -> Result<ListFrame<Elem, Seed>, E>`
/// and collapsing the emitted elements onto `base` via a function `(Elem, Out) -> Result<Out, E>`.
///
/// The first error returned by either function short-circuits the traversal
pub fn try_expand_and_collapse<Seed, Elem, Out, E>(
    seed: Seed,
    mut expand_frame: impl FnMut(Seed) -> Result<ListFrame<Elem, Seed>, E>,
    base: Out,
    mut collapse_frame: impl FnMut(Elem, Out) -> Result<Out, E>,
) -> Result<Out, E> {
    let mut elems = Vec::new();
    let mut seed = seed;

    while let ListFrame::Cons(elem, next) = expand_frame(seed)? {
        elems.push(elem);
        seed = next;
    }

    tracing::trace!(layers = elems.len(), "expanded frames");

    let mut out = base;
    while let Some(elem) = elems.pop() {
        out = collapse_frame(elem, out)?;
    }
    Ok(out)
}
