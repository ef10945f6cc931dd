//! UUID validators.

use quark_core::Uuid;

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a UUID is not the all-zero (nil) UUID.
    ///
    /// The nil UUID is the identifier "empty" value; freshly defaulted or
    /// forgotten identifiers fail this rule.
    pub NotNil for Uuid;
    rule(input) { !input.is_nil() }
    error(input) { ValidationError::new("not_nil", "must not be empty") }
    fn not_nil();
}
