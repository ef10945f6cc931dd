//! Validator combinators.
//!
//! Each combinator lives in its own module and composes through
//! [`ValidateExt`](crate::foundation::ValidateExt):
//!
//! - [`And`] — both must pass (short-circuits)
//! - [`Or`] — at least one must pass
//! - [`Not`] — inversion
//! - [`When`] — conditional validation
//! - [`Optional`] — absent values pass
//! - [`WithMessage`] — client-facing message override

pub mod and;
pub mod message;
pub mod not;
pub mod optional;
pub mod or;
pub mod when;

pub use and::{And, and};
pub use message::{WithMessage, with_message};
pub use not::{Not, not};
pub use optional::{Optional, optional};
pub use or::{Or, or};
pub use when::{When, when};
