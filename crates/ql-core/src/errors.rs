//! The workspace error type (translates the exception hierarchy rooted in
//! `ql/errors.hpp`).
//!
//! Pricing distinguishes three failures: an engine built with an inconsistent
//! configuration, a call made with bad inputs, and a model that is not yet
//! usable. Each has its own variant so callers can match on it.

use thiserror::Error;

/// Every fallible operation in the workspace returns this error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A result was requested that nothing produced.
    #[error("{0}")]
    Runtime(String),

    /// A precondition checked with [`ensure!`](crate::ensure) failed.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// A date outside the supported range or with invalid fields.
    #[error("date error: {0}")]
    Date(String),

    /// Bad inputs for one pricing call. Other calls are unaffected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Rejected at construction; no object is created.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A model the engine reads is not ready, e.g. never fitted to a curve.
    #[error("model error: {0}")]
    UpstreamModel(String),
}

/// `Result` defaulting to [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return [`Error::Precondition`] with a formatted message unless `$cond`
/// holds (`QL_REQUIRE`).
///
/// ```
/// use ql_core::ensure;
/// fn positive(x: f64) -> ql_core::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(format!($($msg)*)));
        }
    };
}
