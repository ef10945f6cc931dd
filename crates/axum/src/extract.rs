//! Binding extractors: one per binding source.
//!
//! Exactly one source is consulted per binding attempt:
//!
//! - [`BodyText<P>`] — the whole request body as UTF-8 text;
//! - [`NamedHeader<P>`] — the first value of the header named after the
//!   wrapper type;
//! - [`Provider<P>`] — route segment, query string, then form field,
//!   whichever resolves first for the wrapper's name.
//!
//! Route and JSON-body binding need no dedicated extractor: the serde
//! adapter in `quark-core` makes `Path<P>` and `Json<P>` work directly.
//!
//! An absent header or provider value leaves the parameter unbound
//! (`None`) — absence is legitimate, only unparsable text rejects. None
//! of these run domain validation; wrap an extractor in
//! [`Validated`](crate::Validated) to opt in.

use std::collections::HashMap;

use axum::extract::{Form, FromRequest, FromRequestParts, Query, RawPathParams, Request};
use axum::http::request::Parts;
use quark_core::{Scalar, WrapsScalar};

use crate::rejection::BindRejection;

/// Upper bound when buffering a text body.
const MAX_TEXT_BODY: usize = 1024 * 1024;

fn parse_primitive<P: WrapsScalar>(text: &str) -> Result<P, BindRejection> {
    P::Raw::parse_text(text)
        .map(P::from_raw)
        .map_err(|source| BindRejection::Unparsable {
            name: P::name(),
            source,
        })
}

// ============================================================================
// BODY TEXT
// ============================================================================

/// Binds a wrapper from the whole request body read as UTF-8 text.
///
/// This is the plain-text body source — distinct from JSON body content,
/// which goes through `Json<P>`. An endpoint picks one of the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyText<P>(pub P);

impl<S, P> FromRequest<S> for BodyText<P>
where
    S: Send + Sync,
    P: WrapsScalar,
{
    type Rejection = BindRejection;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let bytes = axum::body::to_bytes(req.into_body(), MAX_TEXT_BODY)
            .await
            .map_err(|_| BindRejection::BodyRead { name: P::name() })?;
        let text =
            std::str::from_utf8(&bytes).map_err(|_| BindRejection::BodyNotUtf8 { name: P::name() })?;
        parse_primitive(text).map(Self)
    }
}

// ============================================================================
// NAMED HEADER
// ============================================================================

/// Binds a wrapper from the first value of the header named after the
/// wrapper type (matched case-insensitively).
///
/// Rust has no parameter-name reflection, so the wrapper's declared name
/// stands in for the parameter name the header is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedHeader<P>(pub Option<P>);

impl<S, P> FromRequestParts<S> for NamedHeader<P>
where
    S: Send + Sync,
    P: WrapsScalar,
{
    type Rejection = BindRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let name = P::name().to_ascii_lowercase();
        let Some(value) = parts.headers.get(name.as_str()) else {
            return Ok(Self(None));
        };
        let text = value
            .to_str()
            .map_err(|_| BindRejection::InvalidHeader { name: P::name() })?;
        parse_primitive(text).map(|primitive| Self(Some(primitive)))
    }
}

// ============================================================================
// PROVIDER
// ============================================================================

/// Binds a wrapper from the ambient value providers: route segments,
/// then the query string, then form fields — the first location carrying
/// the wrapper's name wins.
///
/// Names match case-insensitively, so `Count` binds `/{count}`,
/// `?count=…` and a `count=…` form field alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Provider<P>(pub Option<P>);

impl<S, P> FromRequest<S> for Provider<P>
where
    S: Send + Sync,
    P: WrapsScalar,
{
    type Rejection = BindRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();

        if let Ok(params) = RawPathParams::from_request_parts(&mut parts, state).await {
            let hit = params
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(P::name()))
                .map(|(_, value)| value.to_string());
            if let Some(text) = hit {
                return parse_primitive(&text).map(|primitive| Self(Some(primitive)));
            }
        }

        if let Ok(Query(map)) = Query::<HashMap<String, String>>::try_from_uri(&parts.uri) {
            if let Some(text) = lookup(&map, P::name()) {
                return parse_primitive(text).map(|primitive| Self(Some(primitive)));
            }
        }

        let req = Request::from_parts(parts, body);
        if let Ok(Form(map)) = Form::<HashMap<String, String>>::from_request(req, state).await {
            if let Some(text) = lookup(&map, P::name()) {
                return parse_primitive(text).map(|primitive| Self(Some(primitive)));
            }
        }

        Ok(Self(None))
    }
}

fn lookup<'a>(map: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    map.iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

// ============================================================================
// TESTS
// ============================================================================
