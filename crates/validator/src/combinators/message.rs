//! Message override combinator.

use crate::foundation::{Validate, ValidationError};

/// Replaces the failure message of the wrapped validator, keeping its
/// error code and parameters.
///
/// Lets rule authors customize the client-facing text without writing a
/// new validator.
///
/// # Examples
///
/// ```rust
/// use quark_validator::prelude::*;
///
/// let validator = min_length(10).with_message("must be a full sentence");
/// let err = validator.validate("short").unwrap_err();
/// assert_eq!(err.code, "min_length");
/// assert_eq!(err.message, "must be a full sentence");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithMessage<V> {
    inner: V,
    message: &'static str,
}

impl<V> WithMessage<V> {
    /// Creates a new `WithMessage` combinator.
    pub const fn new(inner: V, message: &'static str) -> Self {
        Self { inner, message }
    }
}

impl<V: Validate> Validate for WithMessage<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner
            .validate(input)
            .map_err(|err| err.with_message(self.message))
    }
}

/// Creates a [`WithMessage`] combinator.
pub fn with_message<V: Validate>(inner: V, message: &'static str) -> WithMessage<V> {
    WithMessage::new(inner, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::is_true;

    #[test]
    fn params_survive_the_override() {
        let validator = with_message(crate::validators::greater_than(4), "too small");
        let err = validator.validate(&3).unwrap_err();
        assert_eq!(err.message, "too small");
        assert_eq!(err.param("bound"), Some("4"));
    }

    #[test]
    fn success_is_untouched() {
        let validator = with_message(is_true(), "check the box");
        assert!(validator.validate(&true).is_ok());
    }
}
