//! Pattern validators backed by compiled regular expressions.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// MATCHES
// ============================================================================

/// Validates that a string matches a regular expression.
///
/// The pattern compiles once at construction; construction fails on an
/// invalid pattern (a programming error at rule-definition time, surfaced
/// eagerly rather than at validation time).
///
/// # Examples
///
/// ```rust
/// use quark_validator::prelude::*;
///
/// let validator = matches(r"^\d{3}-\d{4}$").unwrap();
/// assert!(validator.validate("555-0199").is_ok());
/// assert!(validator.validate("nope").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Matches {
    pattern: Regex,
}

impl Matches {
    /// Compiles the pattern.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// The source text of the pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Validate for Matches {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if self.pattern.is_match(input) {
            Ok(())
        } else {
            Err(ValidationError::new(
                "matches",
                format!("must match the pattern '{}'", self.pattern),
            )
            .with_param("pattern", self.pattern.to_string()))
        }
    }
}

/// Creates a [`Matches`] validator.
pub fn matches(pattern: &str) -> Result<Matches, regex::Error> {
    Matches::new(pattern)
}

// ============================================================================
// EMAIL
// ============================================================================

// Deliberately permissive: one `@` with non-empty, space-free sides. Full
// RFC 5322 parsing is out of scope for an input-shape rule.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+$").unwrap_or_else(|_| unreachable!("static pattern compiles"))
});

crate::validator! {
    /// Validates that a string is shaped like an e-mail address.
    pub Email for str;
    rule(input) { EMAIL_PATTERN.is_match(input) }
    error(input) { ValidationError::new("email", "must be a valid e-mail address") }
    fn email();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn matches_rejects_invalid_patterns_eagerly() {
        assert!(matches("(unclosed").is_err());
    }

    #[test]
    fn matches_validates_against_the_pattern() {
        let validator = matches("^[a-z]+$").unwrap();
        assert!(validator.validate("abc").is_ok());
        let err = validator.validate("ABC").unwrap_err();
        assert!(err.message.contains("^[a-z]+$"));
    }

    #[rstest]
    #[case("a@b.com", true)]
    #[case("first.last@example.co.uk", true)]
    #[case("no-at-sign", false)]
    #[case("two@@signs", false)]
    #[case("spaces in@local.part", false)]
    #[case("", false)]
    fn email_checks_the_basic_shape(#[case] input: &str, #[case] valid: bool) {
        assert_eq!(email().validate(input).is_ok(), valid);
    }
}
