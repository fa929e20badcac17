//! Error types for liturgia-rs.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum.  Preconditions and postconditions are
//! checked with the [`ensure!`](crate::ensure) and
//! [`ensure_post!`](crate::ensure_post) macros defined here.

use thiserror::Error;

/// The top-level error type used throughout liturgia-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Postcondition violated.  Always an implementation defect.
    #[error("postcondition not satisfied: {0}")]
    Postcondition(String),

    /// Date-related error (construction or arithmetic out of range).
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument, e.g. an unknown configuration option name.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout liturgia-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use lit_core::{ensure, errors::Error};
/// fn positive(x: i32) -> lit_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Postcondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use lit_core::{ensure_post, errors::Error};
/// fn double(x: i32) -> lit_core::errors::Result<i32> {
///     let result = x * 2;
///     ensure_post!(result % 2 == 0, "result must be even, got {result}");
///     Ok(result)
/// }
/// assert!(double(3).is_ok());
/// ```
#[macro_export]
macro_rules! ensure_post {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Postcondition(
                format!($($msg)*)
            ));
        }
    };
}
