//! # quark-core
//!
//! Strongly-typed wrappers around raw scalars, so that domain concepts
//! (an e-mail address, a person identifier) are distinct types at compile
//! time instead of interchangeable `String`s and `Uuid`s.
//!
//! ## Quick start
//!
//! ```rust
//! quark_core::define_string! {
//!     /// A customer-facing e-mail address.
//!     pub EmailDomain => Email
//! }
//! quark_core::define_guid!(pub PersonIdDomain => PersonId);
//!
//! # use quark_core::WrapsScalar;
//! # let email = Email::from_raw("ada@lovelace.example".into());
//! // Wrappers read like their scalar…
//! assert!(email.contains('@'));
//! assert_eq!(serde_json::to_string(&email).unwrap(), "\"ada@lovelace.example\"");
//! ```
//!
//! ## Contract
//!
//! Every wrapper type satisfies one uniform contract ([`Primitive`]):
//! a single immutable value, equality/ordering/hashing delegated to the
//! value (including *across* wrapper types of the same kind — see the
//! [`Primitive`] docs), canonical string conversion, and a
//! lossless wrapper → raw conversion. The four supported kinds are fixed
//! by the sealed [`Scalar`] trait.
//!
//! Construction is gated: this crate exposes no public constructor. The
//! validation layer (`quark-validator`) is the blessed factory; the serde
//! impls in this crate and the binders in `quark-axum` use the same
//! [`WrapsScalar::from_raw`] trusted hook and leave domain validation to
//! their callers.

mod define;
mod facade;
mod primitive;
mod scalar;
mod serde;

pub use primitive::{Domain, Primitive, WrapsScalar};
pub use scalar::{Scalar, ScalarKind, ScalarParseError};

// The UUID scalar kind is part of the public contract; re-exported so
// downstream crates and the `define_guid!` expansion share one version.
pub use uuid::Uuid;
