//! Rejection types for binding and validation failures.
//!
//! Three distinct failure channels, per the error taxonomy:
//!
//! - [`BindRejection`] — structural: the raw text could not convert into
//!   the wrapper's scalar kind (HTTP 400, per parameter, never a panic);
//! - [`ValidationRejection`] — domain: the bound value violated its rule
//!   set (HTTP 400 with the complete violation list);
//! - [`MissingRegistry`] — a programming error in router wiring (HTTP 500,
//!   reported loudly).

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use quark_core::ScalarParseError;
use quark_validator::registry::Violations;

// ============================================================================
// BIND REJECTION
// ============================================================================

/// A structural bind failure for one parameter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindRejection {
    /// The source text did not parse as the wrapper's scalar kind.
    #[error("parameter `{name}`: {source}")]
    Unparsable {
        /// The wrapper type's declared name.
        name: &'static str,
        /// The underlying parse failure.
        #[source]
        source: ScalarParseError,
    },

    /// A header value carried non-textual bytes.
    #[error("parameter `{name}`: header value is not valid text")]
    InvalidHeader {
        /// The wrapper type's declared name.
        name: &'static str,
    },

    /// The request body was not valid UTF-8.
    #[error("parameter `{name}`: request body is not valid UTF-8")]
    BodyNotUtf8 {
        /// The wrapper type's declared name.
        name: &'static str,
    },

    /// The request body could not be read.
    #[error("parameter `{name}`: failed to read request body")]
    BodyRead {
        /// The wrapper type's declared name.
        name: &'static str,
    },
}

impl IntoResponse for BindRejection {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "bind rejected");
        (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

// ============================================================================
// VALIDATION REJECTION
// ============================================================================

/// A domain validation failure for one bound parameter.
///
/// The JSON body carries the structured `(subject, message)` pairs plus
/// the rendered sentences (`This value must be greater than '4'.`), so
/// clients get every violated rule, not just the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRejection {
    parameter: &'static str,
    violations: Violations,
}

impl ValidationRejection {
    /// Wraps the violations reported for `parameter`.
    #[must_use]
    pub const fn new(parameter: &'static str, violations: Violations) -> Self {
        Self {
            parameter,
            violations,
        }
    }

    /// The offending parameter's wrapper type name.
    #[must_use]
    pub const fn parameter(&self) -> &'static str {
        self.parameter
    }

    /// The normalized violation list.
    #[must_use]
    pub const fn violations(&self) -> &Violations {
        &self.violations
    }
}

impl IntoResponse for ValidationRejection {
    fn into_response(self) -> Response {
        tracing::debug!(
            parameter = self.parameter,
            violations = self.violations.len(),
            "validation rejected"
        );

        let detail: Vec<String> = self.violations.iter().map(ToString::to_string).collect();
        (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "parameter": self.parameter,
                "errors": self.violations,
                "detail": detail,
            })),
        )
            .into_response()
    }
}

// ============================================================================
// MISSING REGISTRY
// ============================================================================

/// The validator registry extension is absent from the router.
///
/// This is a wiring bug, not a client error: it fails fast with a 500
/// instead of silently skipping validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error(
    "validator registry is not installed; add `registry_layer(...)` (an \
     `Extension<Arc<ValidatorRegistry>>`) to the router"
)]
pub struct MissingRegistry;

impl IntoResponse for MissingRegistry {
    fn into_response(self) -> Response {
        tracing::error!("validated extractor used without a registry layer");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

// ============================================================================
// TESTS
// ============================================================================
