//! Built-in validators, one module per family.
//!
//! Each validator is a plain value created through its factory function
//! (`not_empty()`, `greater_than(4)`, …) and composes through
//! [`ValidateExt`](crate::foundation::ValidateExt) or a
//! [`Rules`](crate::registry::Rules) list.

pub mod boolean;
pub mod guid;
pub mod length;
pub mod numeric;
pub mod pattern;
pub mod range;

pub use boolean::{IsFalse, IsTrue, is_false, is_true};
pub use guid::{NotNil, not_nil};
pub use length::{LengthMode, MaxLength, MinLength, NotEmpty, max_length, min_length, not_empty};
pub use numeric::{NonZero, non_zero};
pub use pattern::{Email, Matches, email, matches};
pub use range::{GreaterThan, InRange, LessThan, Max, Min, greater_than, in_range, less_than, max, min};
