//! Dispatch on type-erased values, keyed by the concrete type hiding behind each value.
//!
//! The typed engines resolve [`Recursive`] instances at compile time. A [`Registry`] covers
//! the case where values only arrive as `Box<dyn Any>`: capability instances are registered
//! up front, after which the registry is read-only and can be shared freely between threads.
use std::any::{type_name, Any, TypeId};
use std::collections::{HashMap, VecDeque};
use std::marker::PhantomData;

use crate::error::{Error, Result};
use crate::frame::{try_expand_and_collapse, ListFrame};
use crate::{Recursive, Step};

/// A type-erased value, either a whole structure or a single element of one
pub type AnyValue = Box<dyn Any>;

// object-safe view of a `Recursive` instance over erased values
trait Instance: Send + Sync {
    fn type_name(&self) -> &'static str;
    fn is_base(&self, data: &dyn Any) -> Result<bool>;
    fn into_frame(&self, data: AnyValue) -> Result<ListFrame<AnyValue, AnyValue>>;
    fn wrap(&self, data: AnyValue, elem: AnyValue) -> Result<AnyValue>;
    fn empty(&self, data: &dyn Any) -> Result<AnyValue>;
}

struct Erased<T>(PhantomData<fn() -> T>);

fn downcast<X: 'static>(value: AnyValue) -> Result<X> {
    value
        .downcast::<X>()
        .map(|x| *x)
        .map_err(|_| Error::TypeMismatch {
            expected: type_name::<X>(),
        })
}

fn downcast_ref<X: 'static>(value: &dyn Any) -> Result<&X> {
    value.downcast_ref::<X>().ok_or(Error::TypeMismatch {
        expected: type_name::<X>(),
    })
}

impl<T> Instance for Erased<T>
where
    T: Recursive + 'static,
    T::Elem: 'static,
{
    fn type_name(&self) -> &'static str {
        type_name::<T>()
    }

    fn is_base(&self, data: &dyn Any) -> Result<bool> {
        Ok(downcast_ref::<T>(data)?.is_base())
    }

    fn into_frame(&self, data: AnyValue) -> Result<ListFrame<AnyValue, AnyValue>> {
        Ok(match downcast::<T>(data)?.into_frame() {
            ListFrame::Cons(elem, rest) => ListFrame::Cons(Box::new(elem), Box::new(rest)),
            ListFrame::Nil => ListFrame::Nil,
        })
    }

    fn wrap(&self, data: AnyValue, elem: AnyValue) -> Result<AnyValue> {
        let data = downcast::<T>(data)?;
        let elem = downcast::<T::Elem>(elem)?;
        Ok(Box::new(data.wrap(elem)))
    }

    fn empty(&self, data: &dyn Any) -> Result<AnyValue> {
        Ok(Box::new(downcast_ref::<T>(data)?.empty()))
    }
}

/// Capability instances for type-erased values, looked up by the `TypeId` of each value.
///
/// ```rust
/// use recursion_schemes::registry::{AnyValue, Registry};
///
/// let registry = Registry::new().register::<Vec<i64>>();
///
/// let sum = registry
///     .cata(Box::new(vec![3i64, 5, 2, 9]), 0, |x: AnyValue, acc| {
///         acc + *x.downcast::<i64>().unwrap()
///     })
///     .unwrap();
/// assert_eq!(sum, 19);
///
/// assert!(registry.cata(Box::new("unregistered"), 0, |_, acc| acc).is_err());
/// ```
#[derive(Default)]
pub struct Registry {
    instances: HashMap<TypeId, Box<dyn Instance>>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set()
            .entries(self.instances.values().map(|i| i.type_name()))
            .finish()
    }
}

impl Registry {
    /// A registry with no instances
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in sequence, text, and counter instances for common
    /// element types: `Vec` and `VecDeque` of `i64`, `u64`, `String`, plus `String`,
    /// `u32`, `u64`, and `usize`
    pub fn with_builtins() -> Self {
        Self::new()
            .register::<Vec<i64>>()
            .register::<Vec<u64>>()
            .register::<Vec<String>>()
            .register::<VecDeque<i64>>()
            .register::<VecDeque<u64>>()
            .register::<VecDeque<String>>()
            .register::<String>()
            .register::<u32>()
            .register::<u64>()
            .register::<usize>()
    }

    /// Register the [`Recursive`] instance of `T`, replacing any earlier registration for it
    pub fn register<T>(mut self) -> Self
    where
        T: Recursive + 'static,
        T::Elem: 'static,
    {
        tracing::debug!(type_name = type_name::<T>(), "registered capability instance");
        self.instances
            .insert(TypeId::of::<T>(), Box::new(Erased::<T>(PhantomData)));
        self
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.instances.contains_key(&TypeId::of::<T>())
    }

    fn lookup(&self, data: &dyn Any) -> Result<&dyn Instance> {
        let type_id = data.type_id();
        match self.instances.get(&type_id) {
            Some(instance) => Ok(instance.as_ref()),
            None => {
                tracing::debug!(?type_id, "no capability instance registered");
                Err(Error::UnsupportedType(type_id))
            }
        }
    }

    pub fn is_base(&self, data: &dyn Any) -> Result<bool> {
        self.lookup(data)?.is_base(data)
    }

    /// Split off the current element of `data`, or `None` at the base case
    pub fn unwrap(&self, data: AnyValue) -> Result<Option<(AnyValue, AnyValue)>> {
        Ok(match self.lookup(data.as_ref())?.into_frame(data)? {
            ListFrame::Cons(elem, rest) => Some((elem, rest)),
            ListFrame::Nil => None,
        })
    }

    /// Fails with [`Error::TypeMismatch`] if `elem` is not an element of `data`'s type
    pub fn wrap(&self, data: AnyValue, elem: AnyValue) -> Result<AnyValue> {
        self.lookup(data.as_ref())?.wrap(data, elem)
    }

    pub fn empty(&self, data: &dyn Any) -> Result<AnyValue> {
        self.lookup(data)?.empty(data)
    }

    /// Type-erased [`crate::cata`]
    pub fn cata<Out>(
        &self,
        data: AnyValue,
        acc: Out,
        mut combine: impl FnMut(AnyValue, Out) -> Out,
    ) -> Result<Out> {
        let instance = self.lookup(data.as_ref())?;
        try_expand_and_collapse(
            data,
            |layer| instance.into_frame(layer),
            acc,
            |elem, out| Ok(combine(elem, out)),
        )
    }

    /// Type-erased [`crate::ana`]. Emitted elements must match the element type of `acc`.
    pub fn ana<S>(
        &self,
        (seed, acc): (S, AnyValue),
        mut finished: impl FnMut(&S) -> bool,
        mut step: impl FnMut(S) -> (AnyValue, S),
    ) -> Result<AnyValue> {
        let instance = self.lookup(acc.as_ref())?;
        try_expand_and_collapse(
            Some(seed),
            |seed| {
                Ok(match seed {
                    Some(seed) => {
                        let (elem, next) = step(seed);
                        if finished(&next) {
                            ListFrame::Cons(elem, None)
                        } else {
                            ListFrame::Cons(elem, Some(next))
                        }
                    }
                    None => ListFrame::Nil,
                })
            },
            acc,
            |elem, rest| instance.wrap(rest, elem),
        )
    }

    /// Type-erased [`crate::apo`]. Each step must return a boxed `Step<AnyValue, S>`,
    /// anything else fails with [`Error::MalformedStep`].
    pub fn apo<S: 'static>(
        &self,
        (seed, acc): (S, AnyValue),
        mut step: impl FnMut(S) -> AnyValue,
    ) -> Result<AnyValue> {
        let instance = self.lookup(acc.as_ref())?;
        try_expand_and_collapse(
            Some(seed),
            |seed| match seed {
                Some(seed) => match step(seed).downcast::<Step<AnyValue, S>>() {
                    Ok(step) => Ok(match *step {
                        Step::Continue(elem, next) => ListFrame::Cons(elem, Some(next)),
                        Step::Halt(elem) => ListFrame::Cons(elem, None),
                    }),
                    Err(_) => Err(Error::MalformedStep),
                },
                None => Ok(ListFrame::Nil),
            },
            acc,
            |elem, rest| instance.wrap(rest, elem),
        )
    }

    /// Type-erased [`crate::hylo`]: the erased [`Registry::ana`] collapsed by the erased
    /// [`Registry::cata`]. Errors from either pass are returned unchanged.
    pub fn hylo<S, Out>(
        &self,
        seed: (S, AnyValue),
        finished: impl FnMut(&S) -> bool,
        step: impl FnMut(S) -> (AnyValue, S),
        base: Out,
        combine: impl FnMut(AnyValue, Out) -> Out,
    ) -> Result<Out> {
        let unfolded = self.ana(seed, finished, step)?;
        self.cata(unfolded, base, combine)
    }
}
