use proptest::prelude::*;
use recursion_schemes::{cata, Recursive};

/// simple naive cons list, a user-defined type with its own capability instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsList<T> {
    Cons(T, Box<ConsList<T>>),
    Nil,
}

impl<T> Recursive for ConsList<T> {
    type Elem = T;

    #[inline(always)]
    fn is_base(&self) -> bool {
        matches!(self, ConsList::Nil)
    }

    #[inline(always)]
    fn unwrap(self) -> Option<(T, Self)> {
        match self {
            ConsList::Cons(head, tail) => Some((head, *tail)),
            ConsList::Nil => None,
        }
    }

    #[inline(always)]
    fn wrap(self, elem: T) -> Self {
        ConsList::Cons(elem, Box::new(self))
    }

    fn empty(&self) -> Self {
        ConsList::Nil
    }
}

impl<T> ConsList<T> {
    pub fn from_vec(xs: Vec<T>) -> Self {
        cata(xs, ConsList::Nil, |x, acc: ConsList<T>| acc.wrap(x))
    }

    pub fn into_vec(self) -> Vec<T> {
        cata(self, Vec::new(), |x, acc: Vec<T>| acc.wrap(x))
    }
}

/// right fold written with plain recursion, the reference the engines are checked against
pub fn naive_foldr<T: Clone, A>(list: &ConsList<T>, acc: A, f: &impl Fn(T, A) -> A) -> A {
    match list {
        ConsList::Cons(head, tail) => f(head.clone(), naive_foldr(tail, acc, f)),
        ConsList::Nil => acc,
    }
}

pub fn arb_list() -> impl Strategy<Value = ConsList<i32>> {
    proptest::collection::vec(any::<i32>(), 0..64).prop_map(ConsList::from_vec)
}
