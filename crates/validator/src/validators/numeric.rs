//! Integer validators beyond ordering.

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that an integer is not zero.
    ///
    /// Zero is the integer "empty" value; pairing `non_zero()` with a range
    /// rule mirrors the common not-empty-and-bounded rule set.
    pub NonZero for i32;
    rule(input) { *input != 0 }
    error(input) { ValidationError::new("non_zero", "must not be zero") }
    fn non_zero();
}
