//! Foundation of the validation system: the [`Validate`] trait and the
//! structured error types.
//!
//! Validators are plain values implementing [`Validate`]; they compose
//! through [`ValidateExt`] and report failures as [`ValidationError`]s.
//! The registry (see [`crate::registry`]) turns those failures into the
//! normalized `(subject, message)` form clients see.

pub mod error;
pub mod traits;

pub use error::{ValidationError, ValidationErrors};
pub use traits::{Validate, ValidateExt};
