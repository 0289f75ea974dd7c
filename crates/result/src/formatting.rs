//! `Display` integration: `ok{<payload>}` or `err{<payload>}`.
//!
//! Format specifiers applied to the carrier are ignored; the payload is
//! always rendered with its default specifier.

use crate::result::Result;
use std::fmt;

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Result<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_std() {
            Ok(value) => write!(formatter, "ok{{{value}}}"),
            Err(error) => write!(formatter, "err{{{error}}}"),
        }
    }
}
