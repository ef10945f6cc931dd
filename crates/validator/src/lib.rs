//! # quark-validator
//!
//! The validation gateway for quark primitive wrappers: rules are plain,
//! composable values; construction is gated behind a process-wide registry
//! built once at startup; failures come back as an ordered, normalized
//! `(subject, message)` list instead of an exception.
//!
//! ## Quick start
//!
//! ```rust
//! use quark_validator::prelude::*;
//!
//! quark_core::define_string!(EmailDomain => Email);
//! quark_core::define_int!(CountDomain => Count);
//!
//! let registry = ValidatorRegistry::builder()
//!     .register::<Email>(Rules::new().must(not_empty()).must(min_length(5)).must(email()))
//!     .register::<Count>(Rules::new().must(non_zero()).must(greater_than(4)))
//!     .build();
//!
//! let count: Count = registry.create(5).unwrap();
//! assert_eq!(count.get(), 5);
//!
//! let failure = registry.create::<Count>(4).unwrap_err();
//! assert_eq!(failure.as_slice()[0].to_string(), "This value must be greater than '4'.");
//! ```
//!
//! ## Layering
//!
//! Only [`registry::ValidatorRegistry::create`] runs rules. The serde
//! adapter in `quark-core` and the binders in `quark-axum` construct
//! without validating; [`registry::ValidatorRegistry::check`] revalidates
//! such instances when a deployment opts in (`quark-axum`'s `Validated`
//! extractor does exactly that).

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod registry;
pub mod validators;
