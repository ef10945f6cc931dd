//! NOT combinator: logical negation of a validator.

use crate::foundation::{Validate, ValidationError};

/// Inverts a validator: succeeds when the inner validator fails.
///
/// The default failure message is generic; attach a domain-specific one
/// with [`with_message`](crate::foundation::ValidateExt::with_message).
///
/// # Examples
///
/// ```rust
/// use quark_validator::prelude::*;
///
/// let validator = matches("^admin").unwrap().not();
/// assert!(validator.validate("ada").is_ok());
/// assert!(validator.validate("admin-ada").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    inner: V,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    pub const fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: Validate> Validate for Not<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(ValidationError::new("not", "must not match the negated rule")),
            Err(_) => Ok(()),
        }
    }
}

/// Creates a [`Not`] combinator.
pub fn not<V: Validate>(inner: V) -> Not<V> {
    Not::new(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::not_empty;

    #[test]
    fn inverts_the_inner_validator() {
        let must_be_empty = not(not_empty());
        assert!(must_be_empty.validate("").is_ok());
        assert!(must_be_empty.validate("x").is_err());
    }

    #[test]
    fn custom_message_replaces_the_generic_one() {
        let validator = not(not_empty()).with_message("must be blank");
        let err = validator.validate("x").unwrap_err();
        assert_eq!(err.message, "must be blank");
    }
}
