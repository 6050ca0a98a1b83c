//! Folds and unfolds over recursively structured values, without writing the recursion yourself.
//!
//! Any type implementing [`Recursive`] (sequences, strings, and unsigned counters out of the box)
//! can be consumed by the folds [`cata`] and [`para`], produced by the unfolds [`ana`] and [`apo`],
//! or produced and then consumed by [`hylo`].
//!
//! Every engine runs on an explicit stack instead of the call stack, so input depth is bounded
//! by available memory rather than by thread stack size.
//!
//! ```rust
//! use recursion_schemes::{ana, cata, hylo};
//!
//! let squares: Vec<u64> = ana((1, Vec::new()), |x| *x > 5, |x| (x * x, x + 1));
//! assert_eq!(squares, vec![1, 4, 9, 16, 25]);
//!
//! let total = cata(squares, 0, |x, acc| x + acc);
//! assert_eq!(total, hylo((1u64, Vec::new()), |x| *x > 5, |x| (x * x, x + 1), 0, |x, acc| x + acc));
//! ```
mod error;
pub mod frame;
mod hylo;
mod recursive;
#[cfg(feature = "registry")]
pub mod registry;

pub use error::{Error, Result};
pub use hylo::{hylo, hylo_fn};
pub use recursive::collapse::{cata, cata_fn, para, para_fn, try_cata, try_para};
pub use recursive::expand::{ana, ana_fn, apo, apo_fn, try_ana, try_apo, Step};
pub use recursive::{Recursive, RecursiveExt};
#[cfg(feature = "registry")]
pub use registry::Registry;
