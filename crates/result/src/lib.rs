//! # linear-result
//!
//! A success-or-failure carrier with an explicit tagged construction protocol
//! and a small combinator algebra.
//!
//! - [`ok`] / [`err`] (and [`ok_void`] / [`err_void`] for sides without data)
//!   produce tag values
//! - [`Result`] is built from a tag and never cloned
//! - `and_then`, `or_else`, `transform` and `ok_or` / `err_or` compose
//!   fallible steps
//! - `Hash`, `Display` and serde delegate to the live payload
//!
//! ## Design Principles
//!
//! 1. **Single live payload** - the discriminant and the payload cannot disagree
//! 2. **Zero-cost abstractions** - the carrier is a plain two-variant enum
//! 3. **Contract violations are loud** - wrong-side access panics with an
//!    [`AccessViolation`]; the `try_*` accessors report it instead
//!
//! ```
//! use linear_result::{Result, Void, err_void, ok};
//!
//! let result: Result<i32, Void> = err_void().into();
//! let recovered = result.or_else(|Void| -> Result<i32, Void> { ok(10).into() });
//! assert_eq!(recovered.ok_or(0), 10);
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod combinators;
pub mod errors;
mod formatting;
mod hashing;
pub mod result;
pub mod tag;

pub use errors::{AccessViolation, Side};
pub use result::{Result, StdResultExt};
pub use tag::{Failure, Success, Void, err, err_void, ok, ok_void};

/// Returns the crate version.
#[must_use]
pub const fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_version_is_set() {
        assert!(!crate_version().is_empty());
    }

    #[test]
    fn public_surface_is_reexported() {
        let result: Result<i32, Void> = ok(1).into();
        let chained = result
            .transform(|value| value + 1)
            .and_then(|value| ok(value * 10).into());

        assert_eq!(chained.to_string(), "ok{20}");
        assert_eq!(chained.side(), Side::Ok);
    }
}
