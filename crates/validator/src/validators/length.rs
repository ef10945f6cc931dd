//! String length validators.
//!
//! Length is measured in Unicode scalar values (chars) by default; the
//! `bytes` constructors switch to byte counting for hot paths over known
//! ASCII input.

use crate::foundation::ValidationError;

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// Count bytes (fastest, ASCII-only correct).
    Bytes,
    /// Count Unicode scalar values (correct for all text).
    #[default]
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// NOT EMPTY
// ============================================================================

crate::validator! {
    /// Validates that a string is not empty.
    pub NotEmpty for str;
    rule(input) { !input.is_empty() }
    error(input) { ValidationError::not_empty() }
    fn not_empty();
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has at least a minimum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize, mode: LengthMode } for str;
    rule(self, input) { self.mode.measure(input) >= self.min }
    error(self, input) { ValidationError::min_length(self.min, self.mode.measure(input)) }
    new(min: usize) { Self { min, mode: LengthMode::Chars } }
    fn min_length(min: usize);
}

impl MinLength {
    /// Creates a minimum length validator that counts bytes.
    #[must_use]
    pub fn bytes(min: usize) -> Self {
        Self {
            min,
            mode: LengthMode::Bytes,
        }
    }
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string does not exceed a maximum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize, mode: LengthMode } for str;
    rule(self, input) { self.mode.measure(input) <= self.max }
    error(self, input) { ValidationError::max_length(self.max, self.mode.measure(input)) }
    new(max: usize) { Self { max, mode: LengthMode::Chars } }
    fn max_length(max: usize);
}

impl MaxLength {
    /// Creates a maximum length validator that counts bytes.
    #[must_use]
    pub fn bytes(max: usize) -> Self {
        Self {
            max,
            mode: LengthMode::Bytes,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::foundation::Validate;

    use super::*;

    #[test]
    fn not_empty_accepts_whitespace() {
        assert!(not_empty().validate("hello").is_ok());
        assert!(not_empty().validate(" ").is_ok());
        assert!(not_empty().validate("").is_err());
    }

    #[test]
    fn min_length_boundary() {
        let validator = min_length(5);
        assert!(validator.validate("abcde").is_ok());
        assert!(validator.validate("abcdef").is_ok());
        assert!(validator.validate("abcd").is_err());
    }

    #[test]
    fn min_length_failure_names_both_lengths() {
        let err = min_length(5).validate("abcd").unwrap_err();
        assert!(err.message.contains('5'));
        assert!(err.message.contains('4'));
        assert_eq!(err.param("min"), Some("5"));
        assert_eq!(err.param("actual"), Some("4"));
    }

    #[test]
    fn max_length_boundary() {
        let validator = max_length(5);
        assert!(validator.validate("abcde").is_ok());
        assert!(validator.validate("abcdef").is_err());
    }

    #[test]
    fn default_mode_counts_chars_not_bytes() {
        // "héllo" is 5 chars, 6 bytes.
        assert!(min_length(5).validate("h\u{e9}llo").is_ok());
        assert!(MinLength::bytes(6).validate("h\u{e9}llo").is_ok());
        assert!(MinLength::bytes(7).validate("h\u{e9}llo").is_err());
    }

    #[test]
    fn composition_with_and() {
        use crate::foundation::ValidateExt;

        let validator = min_length(5).and(max_length(10));
        assert!(validator.validate("hello").is_ok());
        assert!(validator.validate("hi").is_err());
        assert!(validator.validate("muchtoolongtext").is_err());
    }
}
