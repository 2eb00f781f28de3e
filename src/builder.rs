//! Builder pattern utilities
//!
//! Marker types for builders that check at compile time that required
//! parameters were supplied before `build` becomes available.

use std::marker::PhantomData;

/// A required builder field that has not been supplied yet.
pub struct Unset<T> {
    _marker: PhantomData<T>,
}

impl<T> Default for Unset<T> {
    fn default() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Unset<T> {
    pub fn new() -> Self {
        Self::default()
    }
}

/// A required builder field holding its value.
#[derive(Debug, Clone)]
pub struct Set<T> {
    value: T,
}

impl<T> Set<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }

    pub fn as_ref_inner(&self) -> &T {
        &self.value
    }
}
