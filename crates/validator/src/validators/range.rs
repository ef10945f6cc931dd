//! Numeric comparison validators.
//!
//! Generic over any ordered, displayable `Copy` type; in this workspace
//! the wrapped kind is `i32`, but the validators do not care.

use std::fmt::Display;

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a value is at least a minimum (inclusive).
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Min<T: PartialOrd + Display + Copy> { min: T } for T;
    rule(self, input) { *input >= self.min }
    error(self, input) {
        ValidationError::new("min", format!("must be at least '{}'", self.min))
            .with_param("min", self.min.to_string())
            .with_param("actual", input.to_string())
    }
    fn min(value: T);
}

crate::validator! {
    /// Validates that a value does not exceed a maximum (inclusive).
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Max<T: PartialOrd + Display + Copy> { max: T } for T;
    rule(self, input) { *input <= self.max }
    error(self, input) {
        ValidationError::new("max", format!("must be at most '{}'", self.max))
            .with_param("max", self.max.to_string())
            .with_param("actual", input.to_string())
    }
    fn max(value: T);
}

crate::validator! {
    /// Validates that a value is within an inclusive range.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub InRange<T: PartialOrd + Display + Copy> { min: T, max: T } for T;
    rule(self, input) { *input >= self.min && *input <= self.max }
    error(self, input) { ValidationError::out_of_range(self.min, self.max, *input) }
    fn in_range(min: T, max: T);
}

crate::validator! {
    /// Validates that a value is strictly greater than a bound.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quark_validator::prelude::*;
    ///
    /// let validator = greater_than(4);
    /// assert!(validator.validate(&5).is_ok());
    /// assert!(validator.validate(&4).is_err()); // not strictly greater
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub GreaterThan<T: PartialOrd + Display + Copy> { bound: T } for T;
    rule(self, input) { *input > self.bound }
    error(self, input) {
        ValidationError::new("greater_than", format!("must be greater than '{}'", self.bound))
            .with_param("bound", self.bound.to_string())
            .with_param("actual", input.to_string())
    }
    fn greater_than(bound: T);
}

crate::validator! {
    /// Validates that a value is strictly less than a bound.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub LessThan<T: PartialOrd + Display + Copy> { bound: T } for T;
    rule(self, input) { *input < self.bound }
    error(self, input) {
        ValidationError::new("less_than", format!("must be less than '{}'", self.bound))
            .with_param("bound", self.bound.to_string())
            .with_param("actual", input.to_string())
    }
    fn less_than(bound: T);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::foundation::Validate;

    use super::*;

    #[rstest]
    #[case(5, true)]
    #[case(6, true)]
    #[case(4, false)]
    #[case(-1, false)]
    fn greater_than_is_strict(#[case] input: i32, #[case] valid: bool) {
        assert_eq!(greater_than(4).validate(&input).is_ok(), valid);
    }

    #[test]
    fn greater_than_failure_quotes_the_bound() {
        let err = greater_than(4).validate(&4).unwrap_err();
        assert_eq!(err.code, "greater_than");
        assert!(err.message.contains("greater than '4'"));
        assert_eq!(err.param("actual"), Some("4"));
    }

    #[rstest]
    #[case(0, true)]
    #[case(10, true)]
    #[case(-1, false)]
    #[case(11, false)]
    fn in_range_is_inclusive(#[case] input: i32, #[case] valid: bool) {
        assert_eq!(in_range(0, 10).validate(&input).is_ok(), valid);
    }

    #[test]
    fn min_and_max_are_inclusive() {
        assert!(min(5).validate(&5).is_ok());
        assert!(min(5).validate(&4).is_err());
        assert!(max(5).validate(&5).is_ok());
        assert!(max(5).validate(&6).is_err());
    }

    #[test]
    fn less_than_is_strict() {
        assert!(less_than(10).validate(&9).is_ok());
        assert!(less_than(10).validate(&10).is_err());
    }
}
