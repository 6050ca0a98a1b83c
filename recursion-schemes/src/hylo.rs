//! Unfolds immediately consumed by folds.
use crate::{ana, cata, Recursive};

/// Unfold from the seed pair `(seed, acc)` as [`crate::ana`] would, and collapse the result
/// as [`crate::cata`] would with `base` and `combine`.
///
/// The result is always `cata(ana((seed, acc), finished, step), base, combine)`, for every
/// instance including counters, whose `wrap` does not keep generated elements apart. Both
/// passes run on an explicit stack, and `step` has run to completion before `combine` is
/// first called.
///
/// ```rust
/// use recursion_schemes::hylo;
///
/// let sum_of_squares = hylo(
///     (1, Vec::new()),
///     |x| *x > 5,
///     |x| (x * x, x + 1),
///     0,
///     |x, acc| x + acc,
/// );
/// assert_eq!(sum_of_squares, 55);
///
/// // unfolding 1 and 2 into the counter 0 yields 3, which then folds as 3 + 2 + 1
/// assert_eq!(hylo((1u32, 0u32), |x| *x > 2, |x| (x, x + 1), 0, |x, acc| x + acc), 6);
/// ```
pub fn hylo<T: Recursive, S, Out>(
    seed: (S, T),
    finished: impl FnMut(&S) -> bool,
    step: impl FnMut(S) -> (T::Elem, S),
    base: Out,
    combine: impl FnMut(T::Elem, Out) -> Out,
) -> Out {
    cata(ana(seed, finished, step), base, combine)
}

/// Chain an unfold into a fold, for example one built via [`crate::ana_fn`] into one
/// built via [`crate::cata_fn`].
///
/// ```rust
/// use recursion_schemes::{ana_fn, cata_fn, hylo_fn};
///
/// let squares = ana_fn::<Vec<u32>, u32, _, _>(|x| *x > 5, |x| (x * x, x + 1));
/// let sum = cata_fn::<Vec<u32>, _, _>(0, |x, acc| x + acc);
/// let sum_of_squares = hylo_fn(squares, sum);
///
/// assert_eq!(sum_of_squares((1, Vec::new())), 55);
/// assert_eq!(sum_of_squares((3, vec![1000])), 9 + 16 + 25 + 1000);
/// ```
pub fn hylo_fn<In, Mid, Out>(
    ana: impl Fn(In) -> Mid,
    cata: impl Fn(Mid) -> Out,
) -> impl Fn(In) -> Out {
    move |seed| cata(ana(seed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ana_fn, cata_fn};
    use std::cell::Cell;

    #[test]
    fn sum_of_squares() {
        let out = hylo((1, Vec::new()), |x| *x > 5, |x| (x * x, x + 1), 0, |x, acc| x + acc);
        assert_eq!(out, 55);
    }

    #[test]
    fn matches_unfold_then_fold() {
        let finished = |x: &i64| *x > 7;
        let step = |x: i64| (x * 3 - 1, x + 1);
        let combine = |x: i64, acc: String| format!("{},{}", x, acc);

        for acc in [vec![], vec![-1], vec![10, 20, 30]] {
            let direct = hylo((2, acc.clone()), finished, step, String::new(), combine);
            let unfused = cata(ana((2, acc), finished, step), String::new(), combine);
            assert_eq!(direct, unfused);
        }
    }

    #[test]
    fn counter_accumulator_matches_unfold_then_fold() {
        let collect = |x: u32, mut acc: Vec<u32>| {
            acc.insert(0, x);
            acc
        };
        // unfolding 1 and 2 into the counter 2 sums to 5, which decomposes into 5, 4, 3, 2, 1
        let out = hylo((1u32, 2u32), |x| *x > 2, |x| (x, x + 1), Vec::new(), collect);
        assert_eq!(out, vec![5, 4, 3, 2, 1]);
        assert_eq!(
            out,
            cata(ana((1u32, 2u32), |x| *x > 2, |x| (x, x + 1)), Vec::new(), collect)
        );

        let sum = hylo((1u32, 0u32), |x| *x > 2, |x| (x, x + 1), 0, |x, acc| x + acc);
        assert_eq!(sum, cata(ana((1u32, 0u32), |x| *x > 2, |x| (x, x + 1)), 0, |x, acc| x + acc));
        assert_eq!(sum, 6);
    }

    #[test]
    fn unfold_completes_before_fold_begins() {
        let steps = Cell::new(0);
        let out = hylo(
            (0u32, Vec::new()),
            |x| *x == 4,
            |x| {
                steps.set(steps.get() + 1);
                (x, x + 1)
            },
            Vec::new(),
            |x, mut acc: Vec<(u32, u32)>| {
                acc.push((x, steps.get()));
                acc
            },
        );
        assert_eq!(out, vec![(3, 4), (2, 4), (1, 4), (0, 4)]);
    }

    #[test]
    fn composed_matches_direct() {
        let unfold = ana_fn::<Vec<u64>, u64, _, _>(|x| *x > 5, |x| (x * x, x + 1));
        let fold = cata_fn::<Vec<u64>, _, _>(0, |x, acc| x + acc);
        let composed = hylo_fn(unfold, fold);

        assert_eq!(composed((1, Vec::new())), 55);
        assert_eq!(
            composed((1, Vec::new())),
            hylo((1, Vec::new()), |x: &u64| *x > 5, |x| (x * x, x + 1), 0, |x, acc| x + acc)
        );
    }
}
