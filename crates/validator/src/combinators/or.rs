//! OR combinator: logical disjunction of validators.

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical OR.
///
/// At least one validator must pass; short-circuits on the first success.
/// When both fail, the error carries the two underlying failures as nested
/// errors.
///
/// # Examples
///
/// ```rust
/// use quark_validator::prelude::*;
///
/// let validator = max_length(2).or(min_length(10));
/// assert!(validator.validate("ab").is_ok());
/// assert!(validator.validate("longenough").is_ok());
/// assert!(validator.validate("middle").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    left: L,
    right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub const fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Extracts the two validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let left_err = match self.left.validate(input) {
            Ok(()) => return Ok(()),
            Err(err) => err,
        };
        match self.right.validate(input) {
            Ok(()) => Ok(()),
            Err(right_err) => Err(ValidationError::new(
                "or",
                "must satisfy at least one alternative",
            )
            .with_nested(vec![left_err, right_err])),
        }
    }
}

/// Creates an [`Or`] combinator.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}
