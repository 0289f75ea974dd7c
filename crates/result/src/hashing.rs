//! `Hash` integration: a carrier hashes exactly like its live payload.

use crate::result::Result;
use std::hash::{Hash, Hasher};

impl<T: Hash, E: Hash> Hash for Result<T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.as_std() {
            Ok(value) => value.hash(state),
            Err(error) => error.hash(state),
        }
    }
}
