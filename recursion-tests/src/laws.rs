//! Properties every engine and built-in instance must satisfy, checked against plain iterator code.
use proptest::prelude::*;
use recursion_schemes::{
    ana, ana_fn, apo, cata, cata_fn, hylo, hylo_fn, para, registry::AnyValue, Recursive,
    Registry, Step,
};
use std::collections::VecDeque;

// zips two slices, halting as soon as either runs out. Both must start out non-empty.
fn zip_step<'a, A: Clone, B: Clone>(
    (xs, ys): (&'a [A], &'a [B]),
) -> Step<(A, B), (&'a [A], &'a [B])> {
    match (xs, ys) {
        ([x, xs @ ..], [y, ys @ ..]) if !xs.is_empty() && !ys.is_empty() => {
            Step::Continue((x.clone(), y.clone()), (xs, ys))
        }
        ([x, ..], [y, ..]) => Step::Halt((x.clone(), y.clone())),
        _ => panic!("zip_step called with an exhausted input"),
    }
}

#[test]
fn zip_halts_on_shorter_input() {
    crate::init_tracing();
    let zipped = apo(((&[1, 2, 3, 4][..], &["a", "b", "c"][..]), Vec::new()), zip_step);
    assert_eq!(zipped, vec![(1, "a"), (2, "b"), (3, "c")]);
}

proptest! {
    #[test]
    fn sequence_laws(xs in proptest::collection::vec(any::<i16>(), 0..32), x in any::<i16>()) {
        prop_assert_eq!(xs.is_base(), xs.clone().unwrap().is_none());
        prop_assert_eq!(xs.clone().wrap(x).unwrap(), Some((x, xs.clone())));

        let deque: VecDeque<i16> = xs.iter().copied().collect();
        prop_assert_eq!(deque.is_base(), deque.clone().unwrap().is_none());
        prop_assert_eq!(deque.clone().wrap(x).unwrap(), Some((x, deque)));
    }

    #[test]
    fn text_laws(s in ".{0,16}", c in any::<char>()) {
        prop_assert_eq!(s.is_base(), s.clone().unwrap().is_none());
        prop_assert_eq!(s.clone().wrap(c).unwrap(), Some((c, s)));
    }

    #[test]
    fn counter_base_law(n in 0u64..1_000) {
        prop_assert_eq!(n.is_base(), n.unwrap().is_none());
        prop_assert!(n.empty().is_base());
        if let Some((elem, pred)) = n.unwrap() {
            prop_assert_eq!(elem, n);
            prop_assert_eq!(pred + 1, n);
        }
    }

    #[test]
    fn cata_is_rfold(xs in proptest::collection::vec(any::<i32>(), 0..256)) {
        let expected = xs.iter().rfold(String::new(), |acc, x| format!("{};{}", x, acc));
        prop_assert_eq!(cata(xs, String::new(), |x, acc| format!("{};{}", x, acc)), expected);
    }

    #[test]
    fn counter_cata_is_product_of_range(n in 0u64..20) {
        prop_assert_eq!(cata(n, 1u64, |x, acc| x * acc), (1..=n).product::<u64>());
    }

    #[test]
    fn para_sees_every_suffix(xs in proptest::collection::vec(any::<u8>(), 0..32)) {
        let suffixes = para(xs.clone(), Vec::new(), |_, rest: Vec<u8>, mut acc: Vec<Vec<u8>>| {
            acc.insert(0, rest);
            acc
        });
        let expected: Vec<Vec<u8>> = (1..=xs.len()).map(|i| xs[i..].to_vec()).collect();
        prop_assert_eq!(suffixes, expected);
    }

    #[test]
    fn ana_emits_in_generation_order(start in 0u32..100, len in 1u32..100, tail in proptest::collection::vec(any::<u32>(), 0..8)) {
        let end = start + len;
        let xs = ana((start, tail.clone()), |x| *x >= end, |x| (x, x + 1));
        let expected: Vec<u32> = (start..end).chain(tail).collect();
        prop_assert_eq!(xs, expected);
    }

    #[test]
    fn apo_zip_matches_iterator_zip(
        xs in proptest::collection::vec(any::<i8>(), 1..32),
        ys in proptest::collection::vec(any::<bool>(), 1..32),
    ) {
        let zipped = apo(((&xs[..], &ys[..]), Vec::new()), zip_step);
        let expected: Vec<(i8, bool)> = xs.iter().copied().zip(ys.iter().copied()).collect();
        prop_assert_eq!(zipped, expected);
    }

    #[test]
    fn hylo_forms_agree(start in 0u64..50, len in 1u64..50, acc in proptest::collection::vec(0u64..1000, 0..8)) {
        let end = start + len;
        let finished = move |x: &u64| *x >= end;
        let step = |x: u64| (x * x, x + 1);
        let combine = |x: u64, acc: u64| x.wrapping_add(acc.wrapping_mul(2));

        let direct = hylo((start, acc.clone()), finished, step, 0, combine);
        let unfused = cata(ana((start, acc.clone()), finished, step), 0, combine);
        let composed = hylo_fn(ana_fn::<Vec<u64>, _, _, _>(finished, step), cata_fn::<Vec<u64>, _, _>(0, combine));

        prop_assert_eq!(direct, unfused);
        prop_assert_eq!(direct, composed((start, acc)));
    }

    #[test]
    fn hylo_over_counter_is_cata_after_ana(start in 1u64..50, len in 1u64..50, acc in 0u64..1000) {
        let end = start + len;
        let finished = move |x: &u64| *x >= end;
        let step = |x: u64| (x, x + 1);
        let combine = |x: u64, acc: u64| x.wrapping_add(acc.wrapping_mul(3));

        prop_assert_eq!(
            hylo((start, acc), finished, step, 0, combine),
            cata(ana((start, acc), finished, step), 0, combine)
        );
    }

    #[test]
    fn deterministic(xs in proptest::collection::vec(any::<i64>(), 0..64)) {
        let fold = cata_fn::<Vec<i64>, _, _>(Vec::new(), |x, mut acc: Vec<i64>| {
            acc.push(x.wrapping_mul(31));
            acc
        });
        prop_assert_eq!(fold(xs.clone()), fold(xs));
    }

    #[test]
    fn registry_matches_typed_engines(xs in proptest::collection::vec(any::<i64>(), 0..64)) {
        let registry = Registry::with_builtins();
        let erased = registry
            .cata(Box::new(xs.clone()), 0i64, |x: AnyValue, acc| {
                acc.wrapping_add(*x.downcast::<i64>().expect("i64 element"))
            })
            .expect("Vec<i64> is registered");
        prop_assert_eq!(erased, cata(xs, 0i64, |x, acc| acc.wrapping_add(x)));
    }
}
