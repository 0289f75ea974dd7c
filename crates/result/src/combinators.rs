//! Combinators for chaining fallible computations.
//!
//! Every combinator consumes the carrier. To observe or edit a payload in
//! place, call it on [`Result::as_ref`] or [`Result::as_mut`] instead. The
//! side that is not handled is moved into the new carrier without invoking
//! the callback.

use crate::result::Result;
use crate::tag::{err, ok};

impl<T, E> Result<T, E> {
    /// Run `op` on the success payload and return its result unchanged.
    ///
    /// A failure is forwarded into the carrier type `op` would have produced.
    ///
    /// ```
    /// use linear_result::{Result, ok};
    ///
    /// let parsed: Result<&str, String> = ok("21").into();
    /// let doubled = parsed
    ///     .and_then(|text| text.parse::<i32>().map_err(|error| error.to_string()).into())
    ///     .and_then(|value| ok(value * 2).into());
    /// assert_eq!(doubled.ok_or(0), 42);
    /// ```
    pub fn and_then<U, F>(self, op: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self.into_std() {
            Ok(value) => op(value),
            Err(error) => err(error).into(),
        }
    }

    /// Run `op` on the failure payload and return its result unchanged.
    ///
    /// A success is forwarded into the carrier type `op` would have produced.
    pub fn or_else<G, F>(self, op: F) -> Result<T, G>
    where
        F: FnOnce(E) -> Result<T, G>,
    {
        match self.into_std() {
            Ok(value) => ok(value).into(),
            Err(error) => op(error),
        }
    }

    /// Replace the success payload with `op(payload)`.
    ///
    /// The discriminant never changes; a failure is forwarded untouched.
    ///
    /// ```
    /// use linear_result::{Result, ok};
    ///
    /// let result: Result<i32, ()> = ok(4).into();
    /// assert_eq!(result.transform(|value| value * 2).ok_or(0), 8);
    /// ```
    pub fn transform<U, F>(self, op: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self.into_std() {
            Ok(value) => ok(op(value)).into(),
            Err(error) => err(error).into(),
        }
    }

    /// Replace the failure payload with `op(payload)`.
    pub fn transform_err<G, F>(self, op: F) -> Result<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self.into_std() {
            Ok(value) => ok(value).into(),
            Err(error) => err(op(error)).into(),
        }
    }
}
