use std::any::TypeId;

/// Failures raised when dispatching on type-erased values through a [`crate::Registry`]
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("no capability instance registered for {0:?}")]
    UnsupportedType(TypeId),
    #[error("apo step returned something other than a Step")]
    MalformedStep,
    #[error("expected a value of type {expected}")]
    TypeMismatch { expected: &'static str },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
