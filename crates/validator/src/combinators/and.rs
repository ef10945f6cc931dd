//! AND combinator: logical conjunction of validators.

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical AND.
///
/// Both validators must pass; the error of the first failing validator is
/// returned and the second is not consulted.
///
/// # Examples
///
/// ```rust
/// use quark_validator::prelude::*;
///
/// let validator = min_length(5).and(max_length(10));
/// assert!(validator.validate("hello").is_ok());
/// assert!(validator.validate("hi").is_err());
/// assert!(validator.validate("verylongstring").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    left: L,
    right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub const fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Extracts the two validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)
    }
}

/// Creates an [`And`] combinator.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{max_length, min_length};

    #[test]
    fn passes_when_both_pass() {
        let validator = and(min_length(2), max_length(5));
        assert!(validator.validate("ada").is_ok());
    }

    #[test]
    fn reports_the_first_failure() {
        let validator = and(min_length(5), max_length(3));
        let err = validator.validate("ab").unwrap_err();
        assert_eq!(err.code, "min_length");
    }

    #[test]
    fn short_circuits_on_the_left() {
        let validator = and(min_length(5), max_length(3));
        // "toolong" passes min_length, fails max_length.
        let err = validator.validate("toolong").unwrap_err();
        assert_eq!(err.code, "max_length");
    }
}
