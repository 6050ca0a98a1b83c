use std::collections::VecDeque;

use crate::Recursive;

/// Vectors decompose into their first element and the rest.
///
/// Splitting off or prepending the head shifts every remaining element, so a full
/// [`crate::cata`], [`crate::para`] or [`crate::ana`] over a `Vec` of length `n` costs
/// O(n²). [`VecDeque`] has the same semantics with O(1) layers and suits long sequences.
impl<T> Recursive for Vec<T> {
    type Elem = T;

    #[inline(always)]
    fn is_base(&self) -> bool {
        self.is_empty()
    }

    #[inline(always)]
    fn unwrap(mut self) -> Option<(T, Self)> {
        if self.is_empty() {
            return None;
        }
        let head = self.remove(0);
        Some((head, self))
    }

    #[inline(always)]
    fn wrap(mut self, elem: T) -> Self {
        self.insert(0, elem);
        self
    }

    fn empty(&self) -> Self {
        Vec::new()
    }
}

impl<T> Recursive for VecDeque<T> {
    type Elem = T;

    #[inline(always)]
    fn is_base(&self) -> bool {
        self.is_empty()
    }

    #[inline(always)]
    fn unwrap(mut self) -> Option<(T, Self)> {
        let head = self.pop_front()?;
        Some((head, self))
    }

    #[inline(always)]
    fn wrap(mut self, elem: T) -> Self {
        self.push_front(elem);
        self
    }

    fn empty(&self) -> Self {
        VecDeque::new()
    }
}

/// Strings decompose into their first `char` and the rest of the text
impl Recursive for String {
    type Elem = char;

    #[inline(always)]
    fn is_base(&self) -> bool {
        self.is_empty()
    }

    fn unwrap(mut self) -> Option<(char, Self)> {
        let head = self.chars().next()?;
        self.replace_range(..head.len_utf8(), "");
        Some((head, self))
    }

    fn wrap(mut self, elem: char) -> Self {
        self.insert(0, elem);
        self
    }

    fn empty(&self) -> Self {
        String::new()
    }
}

/// Natural-number counters: `n` decomposes into `n` and its predecessor, and `wrap` adds
/// the element to the counter. Counters are bounded, so `wrap` saturates at the type's
/// `MAX` instead of overflowing.
macro_rules! counter_instance {
    ($($t:ty),*) => {
        $(
            impl Recursive for $t {
                type Elem = $t;

                #[inline(always)]
                fn is_base(&self) -> bool {
                    *self == 0
                }

                #[inline(always)]
                fn unwrap(self) -> Option<($t, Self)> {
                    self.checked_sub(1).map(|pred| (self, pred))
                }

                #[inline(always)]
                fn wrap(self, elem: $t) -> Self {
                    elem.saturating_add(self)
                }

                fn empty(&self) -> Self {
                    0
                }
            }
        )*
    };
}

counter_instance!(u8, u16, u32, u64, u128, usize);
