//! WHEN combinator: conditional validation.

use crate::foundation::{Validate, ValidationError};

/// Runs a validator only when a predicate on the input holds.
///
/// When the predicate returns `false`, validation is skipped and succeeds.
///
/// # Examples
///
/// ```rust
/// use quark_validator::prelude::*;
///
/// let validator = min_length(10).when(|s: &str| s.starts_with("long"));
/// assert!(validator.validate("longenough").is_ok());
/// assert!(validator.validate("short").is_ok()); // predicate false, skipped
/// assert!(validator.validate("long").is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct When<V, C> {
    inner: V,
    condition: C,
}

impl<V, C> When<V, C> {
    /// Creates a new `When` combinator.
    pub const fn new(inner: V, condition: C) -> Self {
        Self { inner, condition }
    }
}

impl<V, C> Validate for When<V, C>
where
    V: Validate,
    C: Fn(&V::Input) -> bool,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if (self.condition)(input) {
            self.inner.validate(input)
        } else {
            Ok(())
        }
    }
}

/// Creates a [`When`] combinator.
pub fn when<V, C>(inner: V, condition: C) -> When<V, C>
where
    V: Validate,
    C: Fn(&V::Input) -> bool,
{
    When::new(inner, condition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::greater_than;

    #[test]
    fn skips_when_the_predicate_is_false() {
        let validator = when(greater_than(10), |n: &i32| *n >= 0);
        assert!(validator.validate(&-5).is_ok()); // negative: skipped
        assert!(validator.validate(&20).is_ok());
        assert!(validator.validate(&5).is_err());
    }
}
