//! # quark-axum
//!
//! axum input binding and request validation for quark primitive wrappers.
//!
//! ## Binding
//!
//! Wrappers bind from heterogeneous sources, one source per parameter:
//!
//! | source              | extractor                       |
//! |---------------------|---------------------------------|
//! | route segment       | `Path<P>` (serde adapter)       |
//! | JSON body           | `Json<P>` (serde adapter)       |
//! | UTF-8 text body     | [`BodyText<P>`]                 |
//! | named header        | [`NamedHeader<P>`]              |
//! | route/query/form    | [`Provider<P>`]                 |
//!
//! Unparsable text yields a per-parameter HTTP 400 ([`BindRejection`]);
//! an absent optional source leaves the parameter unbound.
//!
//! ## Validation
//!
//! Binding never runs domain rules. Wrap any of the extractors in
//! [`Validated`] and install the registry with [`registry_layer`] to get
//! the standard validation pass: HTTP 400 with every violated rule's
//! `(subject, message)` pair.
//!
//! ```rust,no_run
//! use axum::{Json, Router, extract::Path, routing::get};
//! use quark_axum::{Validated, registry_layer};
//! use quark_validator::prelude::*;
//!
//! quark_core::define_int!(CountDomain => Count);
//!
//! async fn echo(Validated(Path(count)): Validated<Path<Count>>) -> Json<Count> {
//!     Json(count)
//! }
//!
//! let registry = ValidatorRegistry::builder()
//!     .register::<Count>(Rules::new().must(greater_than(4)))
//!     .build();
//!
//! let app: Router = Router::new()
//!     .route("/counts/{count}", get(echo))
//!     .layer(registry_layer(registry));
//! ```

pub mod extract;
pub mod rejection;
pub mod validate;

pub use extract::{BodyText, NamedHeader, Provider};
pub use rejection::{BindRejection, MissingRegistry, ValidationRejection};
pub use validate::{BoundPrimitive, Validated, registry_layer};
