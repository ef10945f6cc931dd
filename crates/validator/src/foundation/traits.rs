//! Core traits of the validation system.

use super::error::ValidationError;

// ============================================================================
// VALIDATE
// ============================================================================

/// The trait every validator implements.
///
/// Validators are generic over their input type; `Input` may be unsized
/// (`str`) so a single validator instance serves borrowed subjects.
///
/// # Examples
///
/// ```rust
/// use quark_validator::foundation::{Validate, ValidationError};
///
/// struct MinLength {
///     min: usize,
/// }
///
/// impl Validate for MinLength {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.chars().count() >= self.min {
///             Ok(())
///         } else {
///             Err(ValidationError::min_length(self.min, input.chars().count()))
///         }
///     }
/// }
///
/// let validator = MinLength { min: 3 };
/// assert!(validator.validate("ada").is_ok());
/// assert!(validator.validate("al").is_err());
/// ```
pub trait Validate {
    /// The type being validated. `?Sized` to allow `str`.
    type Input: ?Sized;

    /// Validates the input, returning the first rule failure.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

// ============================================================================
// COMBINATOR EXTENSIONS
// ============================================================================

/// Fluent combinators, implemented for every validator.
///
/// ```rust
/// use quark_validator::prelude::*;
///
/// let username = min_length(3).and(max_length(20));
/// assert!(username.validate("ada").is_ok());
/// assert!(username.validate("al").is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Both validators must pass; short-circuits on the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// At least one validator must pass; short-circuits on success.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Inverts the validator.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    /// Runs the validator only when the predicate holds.
    fn when<C>(self, condition: C) -> When<Self, C>
    where
        C: Fn(&Self::Input) -> bool,
    {
        When::new(self, condition)
    }

    /// Accepts `None`, validating only present values.
    fn optional(self) -> Optional<Self>
    where
        Self::Input: Sized,
    {
        Optional::new(self)
    }

    /// Replaces the failure message, keeping the error code and params.
    fn with_message(self, message: &'static str) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::and::And;
pub use crate::combinators::message::WithMessage;
pub use crate::combinators::not::Not;
pub use crate::combinators::optional::Optional;
pub use crate::combinators::or::Or;
pub use crate::combinators::when::When;

// ============================================================================
// TESTS
// ============================================================================
