//! The result carrier: storage, construction, state queries and accessors.

use crate::errors::{AccessViolation, Side, violated};
use crate::tag::{Failure, Success, err, ok};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::result::Result as StdResult;

/// Success-or-failure carrier.
///
/// Exactly one alternative is live for the whole lifetime of a value. A
/// carrier is only ever built from a tag ([`ok`], [`err`], [`ok_void`],
/// [`err_void`]) and is never cloned; every derived result is a new value
/// produced by a combinator.
///
/// [`ok_void`]: crate::ok_void
/// [`err_void`]: crate::err_void
///
/// # Example
///
/// ```
/// use linear_result::{Result, ok};
///
/// let result: Result<i32, i32> = ok(10).into();
/// assert!(result.is_ok());
/// assert_eq!(*result.ok(), 10);
/// ```
#[derive(PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
#[must_use = "this `Result` may be a failure, which should be handled"]
pub struct Result<T, E> {
    repr: Repr<T, E>,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Repr<T, E> {
    Ok(T),
    Err(E),
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

impl<T, E> Result<T, E> {
    /// Build a success carrier, converting the tagged payload into `T`.
    ///
    /// ```
    /// use linear_result::{Result, ok};
    ///
    /// let result: Result<String, ()> = Result::from_success(ok("converted"));
    /// assert_eq!(result.ok(), "converted");
    /// ```
    pub fn from_success<U>(tag: Success<U>) -> Self
    where
        U: Into<T>,
    {
        Self {
            repr: Repr::Ok(tag.into_inner().into()),
        }
    }

    /// Build a failure carrier, converting the tagged payload into `E`.
    pub fn from_failure<F>(tag: Failure<F>) -> Self
    where
        F: Into<E>,
    {
        Self {
            repr: Repr::Err(tag.into_inner().into()),
        }
    }
}

impl<T, E> From<Success<T>> for Result<T, E> {
    fn from(tag: Success<T>) -> Self {
        Self::from_success(tag)
    }
}

impl<T, E> From<Failure<E>> for Result<T, E> {
    fn from(tag: Failure<E>) -> Self {
        Self::from_failure(tag)
    }
}

// =============================================================================
// STATE QUERIES
// =============================================================================

impl<T, E> Result<T, E> {
    /// Returns true when the success alternative is live.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self.repr, Repr::Ok(_))
    }

    /// Returns true when the failure alternative is live.
    #[must_use]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// The live side.
    #[must_use]
    pub const fn side(&self) -> Side {
        if self.is_ok() { Side::Ok } else { Side::Err }
    }
}

impl<T, E> From<&Result<T, E>> for bool {
    fn from(result: &Result<T, E>) -> Self {
        result.is_ok()
    }
}

// =============================================================================
// ACCESSORS
// =============================================================================

impl<T, E> Result<T, E> {
    /// Borrow the success payload.
    ///
    /// # Panics
    ///
    /// Panics with an [`AccessViolation`] if the failure alternative is live.
    #[track_caller]
    pub fn ok(&self) -> &T {
        match &self.repr {
            Repr::Ok(value) => value,
            Repr::Err(_) => violated(Side::Ok),
        }
    }

    /// Mutably borrow the success payload.
    ///
    /// # Panics
    ///
    /// Panics with an [`AccessViolation`] if the failure alternative is live.
    #[track_caller]
    pub fn ok_mut(&mut self) -> &mut T {
        match &mut self.repr {
            Repr::Ok(value) => value,
            Repr::Err(_) => violated(Side::Ok),
        }
    }

    /// Consume the carrier and return the success payload.
    ///
    /// # Panics
    ///
    /// Panics with an [`AccessViolation`] if the failure alternative is live.
    #[track_caller]
    pub fn into_ok(self) -> T {
        match self.repr {
            Repr::Ok(value) => value,
            Repr::Err(_) => violated(Side::Ok),
        }
    }

    /// Borrow the failure payload.
    ///
    /// # Panics
    ///
    /// Panics with an [`AccessViolation`] if the success alternative is live.
    #[track_caller]
    pub fn err(&self) -> &E {
        match &self.repr {
            Repr::Err(error) => error,
            Repr::Ok(_) => violated(Side::Err),
        }
    }

    /// Mutably borrow the failure payload.
    ///
    /// # Panics
    ///
    /// Panics with an [`AccessViolation`] if the success alternative is live.
    #[track_caller]
    pub fn err_mut(&mut self) -> &mut E {
        match &mut self.repr {
            Repr::Err(error) => error,
            Repr::Ok(_) => violated(Side::Err),
        }
    }

    /// Consume the carrier and return the failure payload.
    ///
    /// # Panics
    ///
    /// Panics with an [`AccessViolation`] if the success alternative is live.
    #[track_caller]
    pub fn into_err(self) -> E {
        match self.repr {
            Repr::Err(error) => error,
            Repr::Ok(_) => violated(Side::Err),
        }
    }

    /// Borrow the success payload, reporting a wrong-side request.
    pub const fn try_ok(&self) -> StdResult<&T, AccessViolation> {
        match &self.repr {
            Repr::Ok(value) => Ok(value),
            Repr::Err(_) => Err(AccessViolation::new(Side::Ok)),
        }
    }

    /// Mutably borrow the success payload, reporting a wrong-side request.
    pub const fn try_ok_mut(&mut self) -> StdResult<&mut T, AccessViolation> {
        match &mut self.repr {
            Repr::Ok(value) => Ok(value),
            Repr::Err(_) => Err(AccessViolation::new(Side::Ok)),
        }
    }

    /// Consume the carrier and return the success payload, reporting a
    /// wrong-side request. The failure payload is dropped in that case.
    pub fn try_into_ok(self) -> StdResult<T, AccessViolation> {
        match self.repr {
            Repr::Ok(value) => Ok(value),
            Repr::Err(_) => Err(AccessViolation::new(Side::Ok)),
        }
    }

    /// Borrow the failure payload, reporting a wrong-side request.
    pub const fn try_err(&self) -> StdResult<&E, AccessViolation> {
        match &self.repr {
            Repr::Err(error) => Ok(error),
            Repr::Ok(_) => Err(AccessViolation::new(Side::Err)),
        }
    }

    /// Mutably borrow the failure payload, reporting a wrong-side request.
    pub const fn try_err_mut(&mut self) -> StdResult<&mut E, AccessViolation> {
        match &mut self.repr {
            Repr::Err(error) => Ok(error),
            Repr::Ok(_) => Err(AccessViolation::new(Side::Err)),
        }
    }

    /// Consume the carrier and return the failure payload, reporting a
    /// wrong-side request. The success payload is dropped in that case.
    pub fn try_into_err(self) -> StdResult<E, AccessViolation> {
        match self.repr {
            Repr::Err(error) => Ok(error),
            Repr::Ok(_) => Err(AccessViolation::new(Side::Err)),
        }
    }

    /// Return the success payload, or `default` converted into `T`.
    ///
    /// ```
    /// use linear_result::{Result, err};
    ///
    /// let result: Result<i32, i32> = err(20).into();
    /// assert_eq!(result.ok_or(10), 10);
    /// ```
    pub fn ok_or<U>(self, default: U) -> T
    where
        U: Into<T>,
    {
        match self.repr {
            Repr::Ok(value) => value,
            Repr::Err(_) => default.into(),
        }
    }

    /// Return the failure payload, or `default` converted into `E`.
    pub fn err_or<F>(self, default: F) -> E
    where
        F: Into<E>,
    {
        match self.repr {
            Repr::Err(error) => error,
            Repr::Ok(_) => default.into(),
        }
    }

    /// Clone the success payload out of a borrowed carrier, or convert
    /// `default` into `T`.
    pub fn cloned_ok_or<U>(&self, default: U) -> T
    where
        T: Clone,
        U: Into<T>,
    {
        match &self.repr {
            Repr::Ok(value) => value.clone(),
            Repr::Err(_) => default.into(),
        }
    }

    /// Clone the failure payload out of a borrowed carrier, or convert
    /// `default` into `E`.
    pub fn cloned_err_or<F>(&self, default: F) -> E
    where
        E: Clone,
        F: Into<E>,
    {
        match &self.repr {
            Repr::Err(error) => error.clone(),
            Repr::Ok(_) => default.into(),
        }
    }
}

// =============================================================================
// VIEWS + INTEROP
// =============================================================================

impl<T, E> Result<T, E> {
    /// View the live payload by shared reference.
    ///
    /// Combinators called on the view observe the payload without consuming
    /// the original carrier.
    pub const fn as_ref(&self) -> Result<&T, &E> {
        match &self.repr {
            Repr::Ok(value) => Result {
                repr: Repr::Ok(value),
            },
            Repr::Err(error) => Result {
                repr: Repr::Err(error),
            },
        }
    }

    /// View the live payload by mutable reference.
    pub fn as_mut(&mut self) -> Result<&mut T, &mut E> {
        match &mut self.repr {
            Repr::Ok(value) => ok(value).into(),
            Repr::Err(error) => err(error).into(),
        }
    }

    /// Convert into the standard library result.
    pub fn into_std(self) -> StdResult<T, E> {
        match self.repr {
            Repr::Ok(value) => Ok(value),
            Repr::Err(error) => Err(error),
        }
    }

    /// Borrow as a standard library result.
    pub(crate) const fn as_std(&self) -> StdResult<&T, &E> {
        match &self.repr {
            Repr::Ok(value) => Ok(value),
            Repr::Err(error) => Err(error),
        }
    }
}

impl<T, E> From<StdResult<T, E>> for Result<T, E> {
    fn from(result: StdResult<T, E>) -> Self {
        match result {
            Ok(value) => ok(value).into(),
            Err(error) => err(error).into(),
        }
    }
}

impl<T, E> From<Result<T, E>> for StdResult<T, E> {
    fn from(result: Result<T, E>) -> Self {
        result.into_std()
    }
}

/// Extension helpers for moving standard results into the carrier.
pub trait StdResultExt<T, E> {
    /// Re-tag the live payload into a [`Result`].
    fn into_carrier(self) -> Result<T, E>;
}

impl<T, E> StdResultExt<T, E> for StdResult<T, E> {
    fn into_carrier(self) -> Result<T, E> {
        Result::from(self)
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Result<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.repr.fmt(formatter)
    }
}
