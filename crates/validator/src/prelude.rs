//! Prelude: one import for rule authoring and registry wiring.
//!
//! ```rust
//! use quark_validator::prelude::*;
//!
//! let username = min_length(3).and(max_length(20));
//! assert!(username.validate("ada").is_ok());
//! ```

pub use crate::foundation::{Validate, ValidateExt, ValidationError, ValidationErrors};

#[allow(clippy::wildcard_imports, ambiguous_glob_reexports)]
pub use crate::validators::*;

pub use crate::combinators::{
    And, Not, Optional, Or, When, WithMessage, and, not, optional, or, when, with_message,
};

pub use crate::registry::{
    Checked, RegistryBuilder, Rules, ValidatedPrimitive, ValidatorRegistry, Violation, Violations,
};
