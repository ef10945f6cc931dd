//! The four scalar kinds a primitive wrapper may carry.
//!
//! The [`Scalar`] trait is sealed: `bool`, `i32`, [`Uuid`] and [`String`]
//! are the only kinds, and every adapter in the workspace (validation,
//! serde, input binding) is written against this closed set. Each kind
//! provides its culture-invariant textual parser and its borrowed
//! validation subject ([`Scalar::Checked`]).

use std::fmt;

use uuid::Uuid;

mod sealed {
    pub trait Sealed {}

    impl Sealed for bool {}
    impl Sealed for i32 {}
    impl Sealed for uuid::Uuid {}
    impl Sealed for String {}
}

// ============================================================================
// SCALAR KIND
// ============================================================================

/// Discriminant for the four supported scalar kinds.
///
/// Used in diagnostics and parse errors; the type system already fixes the
/// kind of every wrapper at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// `bool`
    Bool,
    /// `i32`
    Int,
    /// [`Uuid`]
    Guid,
    /// [`String`]
    Text,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "boolean",
            Self::Int => "integer",
            Self::Guid => "UUID",
            Self::Text => "text",
        };
        f.write_str(name)
    }
}

// ============================================================================
// PARSE ERRORS
// ============================================================================

/// Failure to convert raw text into a scalar.
///
/// This is a *structural* error: it belongs to the binding/decoding
/// boundary, never to domain validation. The text kind never fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScalarParseError {
    /// The text is not `true` or `false` (case-insensitive).
    #[error("`{0}` is not a valid boolean (expected `true` or `false`)")]
    InvalidBool(String),

    /// The text is not a decimal 32-bit integer.
    #[error("`{0}` is not a valid 32-bit integer")]
    InvalidInt(String),

    /// The text is not a UUID literal.
    #[error("`{0}` is not a valid UUID")]
    InvalidGuid(String),
}

impl ScalarParseError {
    /// The scalar kind the text failed to parse as.
    #[must_use]
    pub const fn kind(&self) -> ScalarKind {
        match self {
            Self::InvalidBool(_) => ScalarKind::Bool,
            Self::InvalidInt(_) => ScalarKind::Int,
            Self::InvalidGuid(_) => ScalarKind::Guid,
        }
    }
}

// ============================================================================
// SCALAR TRAIT
// ============================================================================

/// A scalar kind a wrapper may carry. Sealed to the four supported kinds.
///
/// `Checked` is the borrowed form validators receive: `str` for `String`,
/// the kind itself for the `Copy` kinds. Keeping the subject borrowed lets
/// a single validator instance serve any number of construction attempts.
pub trait Scalar: sealed::Sealed + Clone + PartialEq + fmt::Display + Sized + 'static {
    /// Borrowed validation subject for this kind.
    type Checked: ?Sized;

    /// Discriminant for diagnostics.
    const KIND: ScalarKind;

    /// Borrows the validation subject from the owned scalar.
    fn as_checked(&self) -> &Self::Checked;

    /// Parses invariant-culture text, as produced by route segments, query
    /// strings, form fields and header values.
    fn parse_text(text: &str) -> Result<Self, ScalarParseError>;
}

impl Scalar for bool {
    type Checked = bool;

    const KIND: ScalarKind = ScalarKind::Bool;

    fn as_checked(&self) -> &bool {
        self
    }

    fn parse_text(text: &str) -> Result<Self, ScalarParseError> {
        let trimmed = text.trim();
        if trimmed.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if trimmed.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(ScalarParseError::InvalidBool(text.to_owned()))
        }
    }
}

impl Scalar for i32 {
    type Checked = i32;

    const KIND: ScalarKind = ScalarKind::Int;

    fn as_checked(&self) -> &i32 {
        self
    }

    fn parse_text(text: &str) -> Result<Self, ScalarParseError> {
        text.trim()
            .parse()
            .map_err(|_| ScalarParseError::InvalidInt(text.to_owned()))
    }
}

impl Scalar for Uuid {
    type Checked = Uuid;

    const KIND: ScalarKind = ScalarKind::Guid;

    fn as_checked(&self) -> &Uuid {
        self
    }

    fn parse_text(text: &str) -> Result<Self, ScalarParseError> {
        Uuid::parse_str(text.trim()).map_err(|_| ScalarParseError::InvalidGuid(text.to_owned()))
    }
}

impl Scalar for String {
    type Checked = str;

    const KIND: ScalarKind = ScalarKind::Text;

    fn as_checked(&self) -> &str {
        self
    }

    fn parse_text(text: &str) -> Result<Self, ScalarParseError> {
        Ok(text.to_owned())
    }
}

// ============================================================================
// TESTS
// ============================================================================
