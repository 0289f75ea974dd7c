//! Tag values and the factories that produce them.
//!
//! A tag is a one-shot wrapper naming which side of a [`Result`] its payload
//! belongs to. Tags have no behaviour of their own beyond being consumed by
//! the carrier's constructors.
//!
//! [`Result`]: crate::Result

use serde::{Deserialize, Serialize};
use std::fmt;

/// Empty marker for a side that carries no data.
///
/// Hashes to a constant and renders as the empty string.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Void;

impl fmt::Display for Void {
    fn fmt(&self, _formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

impl From<()> for Void {
    fn from((): ()) -> Self {
        Self
    }
}

/// Tag selecting the success alternative.
#[derive(Debug)]
#[must_use = "a tag does nothing until it is turned into a result"]
pub struct Success<T>(T);

impl<T> Success<T> {
    /// Consume the tag and return its payload.
    pub fn into_inner(self) -> T {
        self.0
    }
}

/// Tag selecting the failure alternative.
#[derive(Debug)]
#[must_use = "a tag does nothing until it is turned into a result"]
pub struct Failure<E>(E);

impl<E> Failure<E> {
    /// Consume the tag and return its payload.
    pub fn into_inner(self) -> E {
        self.0
    }
}

/// Tag `value` as a success payload.
///
/// ```
/// use linear_result::{Result, ok};
///
/// let result: Result<i32, String> = ok(10).into();
/// assert!(result.is_ok());
/// ```
pub const fn ok<T>(value: T) -> Success<T> {
    Success(value)
}

/// Tag `value` as a failure payload.
pub const fn err<E>(value: E) -> Failure<E> {
    Failure(value)
}

/// Success tag for a side that carries no data.
///
/// ```
/// use linear_result::{Result, Void, ok_void};
///
/// let result: Result<Void, i32> = ok_void().into();
/// assert!(result.is_ok());
/// ```
pub const fn ok_void() -> Success<Void> {
    Success(Void)
}

/// Failure tag for a side that carries no data.
pub const fn err_void() -> Failure<Void> {
    Failure(Void)
}
