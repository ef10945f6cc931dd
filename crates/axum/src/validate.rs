//! The request-validation hook.
//!
//! Binding and domain validation are separate passes: the extractors in
//! [`crate::extract`] (and `Path<P>`/`Json<P>` via serde) only bind, and
//! [`Validated<E>`] layers rule evaluation on top of any of them. The
//! registry is threaded through the router explicitly as an
//! `Extension<Arc<ValidatorRegistry>>` — see [`registry_layer`].

use std::sync::Arc;

use axum::Extension;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use quark_core::WrapsScalar;
use quark_validator::registry::{RegistrySlot, ValidatorRegistry};

use crate::extract::{BodyText, NamedHeader, Provider};
use crate::rejection::{MissingRegistry, ValidationRejection};

// ============================================================================
// REGISTRY LAYER
// ============================================================================

/// Wraps a built registry into the router layer [`Validated`] resolves it
/// from.
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/counts/{count}", get(handler))
///     .layer(registry_layer(registry));
/// ```
#[must_use]
pub fn registry_layer(registry: ValidatorRegistry) -> Extension<Arc<ValidatorRegistry>> {
    Extension(Arc::new(registry))
}

// ============================================================================
// BOUND PRIMITIVE
// ============================================================================

/// Access to the primitive a binding extractor produced.
///
/// `None` means the parameter stayed unbound (an absent optional source);
/// there is nothing to validate then.
pub trait BoundPrimitive {
    /// The wrapper type the extractor binds.
    type Primitive: WrapsScalar;

    /// The bound instance, if any.
    fn primitive(&self) -> Option<&Self::Primitive>;
}

impl<P: WrapsScalar> BoundPrimitive for Path<P> {
    type Primitive = P;

    fn primitive(&self) -> Option<&P> {
        Some(&self.0)
    }
}

impl<P: WrapsScalar> BoundPrimitive for axum::Json<P> {
    type Primitive = P;

    fn primitive(&self) -> Option<&P> {
        Some(&self.0)
    }
}

impl<P: WrapsScalar> BoundPrimitive for BodyText<P> {
    type Primitive = P;

    fn primitive(&self) -> Option<&P> {
        Some(&self.0)
    }
}

impl<P: WrapsScalar> BoundPrimitive for NamedHeader<P> {
    type Primitive = P;

    fn primitive(&self) -> Option<&P> {
        self.0.as_ref()
    }
}

impl<P: WrapsScalar> BoundPrimitive for Provider<P> {
    type Primitive = P;

    fn primitive(&self) -> Option<&P> {
        self.0.as_ref()
    }
}

// ============================================================================
// VALIDATED
// ============================================================================

/// Runs the registered rules against the value another extractor bound.
///
/// On violation the request ends with HTTP 400 carrying every violated
/// rule's `(subject, message)` pair; the handler never sees the invalid
/// instance. A missing registry layer is a wiring bug and produces a 500.
///
/// ```rust,ignore
/// async fn handler(Validated(Path(count)): Validated<Path<Count>>) -> Json<Count> {
///     Json(count)
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validated<E>(pub E);

impl<E> Validated<E> {
    /// Unwraps the inner extractor.
    pub fn into_inner(self) -> E {
        self.0
    }
}

fn check_bound<E>(registry: &ValidatorRegistry, inner: &E) -> Result<(), Response>
where
    E: BoundPrimitive,
    <E::Primitive as WrapsScalar>::Raw: RegistrySlot,
{
    let Some(primitive) = inner.primitive() else {
        return Ok(());
    };
    match registry.check(primitive) {
        Ok(()) => Ok(()),
        Err(violations) => Err(ValidationRejection::new(
            <E::Primitive as WrapsScalar>::name(),
            violations,
        )
        .into_response()),
    }
}

impl<S, E> FromRequestParts<S> for Validated<E>
where
    S: Send + Sync,
    E: FromRequestParts<S> + BoundPrimitive,
    <E::Primitive as WrapsScalar>::Raw: RegistrySlot,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let registry = parts
            .extensions
            .get::<Arc<ValidatorRegistry>>()
            .cloned()
            .ok_or_else(|| MissingRegistry.into_response())?;

        let inner = E::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        check_bound(&registry, &inner)?;
        Ok(Self(inner))
    }
}

impl<S, E> FromRequest<S> for Validated<E>
where
    S: Send + Sync,
    E: FromRequest<S> + BoundPrimitive,
    <E::Primitive as WrapsScalar>::Raw: RegistrySlot,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let registry = req
            .extensions()
            .get::<Arc<ValidatorRegistry>>()
            .cloned()
            .ok_or_else(|| MissingRegistry.into_response())?;

        let inner = E::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        check_bound(&registry, &inner)?;
        Ok(Self(inner))
    }
}
