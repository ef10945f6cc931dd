//! OPTIONAL combinator: absent values pass.

use crate::foundation::{Validate, ValidationError};

/// Accepts `None`, validating only values that are present.
///
/// # Examples
///
/// ```rust
/// use quark_validator::prelude::*;
///
/// let validator = greater_than(4).optional();
/// assert!(validator.validate(&None).is_ok());
/// assert!(validator.validate(&Some(5)).is_ok());
/// assert!(validator.validate(&Some(4)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optional<V> {
    inner: V,
}

impl<V> Optional<V> {
    /// Creates a new `Optional` combinator.
    pub const fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Optional<V>
where
    V: Validate,
    V::Input: Sized,
{
    type Input = Option<V::Input>;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match input {
            Some(value) => self.inner.validate(value),
            None => Ok(()),
        }
    }
}

/// Creates an [`Optional`] combinator.
pub fn optional<V>(inner: V) -> Optional<V>
where
    V: Validate,
    V::Input: Sized,
{
    Optional::new(inner)
}
