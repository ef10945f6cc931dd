//! Error types for validation failures.
//!
//! All string fields use `Cow<'static, str>` so the common case — static
//! error codes and messages — allocates nothing.
//!
//! Messages are written *subject-less* and lowercase ("must be greater
//! than '4'"): the validation subject is always a wrapper's single scalar,
//! so the registry layer supplies the subject ("this value", or an
//! explicit field name) when it normalizes failures for presentation.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error with an error code, parameters and
/// optional nested children.
///
/// # Examples
///
/// ```rust
/// use quark_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("greater_than", "must be greater than '4'")
///     .with_param("bound", "4")
///     .with_param("actual", "3");
/// assert_eq!(error.param("bound"), Some("4"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling, e.g. `"min_length"`.
    pub code: Cow<'static, str>,

    /// Human-readable message, subject-less (see module docs).
    pub message: Cow<'static, str>,

    /// Explicit subject, when a rule targets a named field. `None` means
    /// the generic subject ("this value") applies.
    pub field: Option<Cow<'static, str>>,

    /// Ordered message parameters, e.g. `[("min", "5"), ("actual", "4")]`.
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,

    /// Nested failures, used by aggregating combinators.
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates a new validation error from a code and a message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
            nested: Vec::new(),
        }
    }

    /// Sets an explicit subject for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a message parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Replaces the nested failures.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested(mut self, errors: Vec<ValidationError>) -> Self {
        self.nested = errors;
        self
    }

    /// Replaces the message, keeping the code and parameters.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Flattens this error and its nested children, depth-first.
    #[must_use]
    pub fn flatten(&self) -> Vec<&ValidationError> {
        let mut result = vec![self];
        for nested in &self.nested {
            result.extend(nested.flatten());
        }
        result
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.nested.is_empty() {
            write!(f, " ({} nested)", self.nested.len())?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// A "must not be empty" error.
    #[must_use]
    pub fn not_empty() -> Self {
        Self::new("not_empty", "must not be empty")
    }

    /// A "min_length" error mentioning both the bound and the actual length.
    #[must_use]
    pub fn min_length(min: usize, actual: usize) -> Self {
        Self::new(
            "min_length",
            format!("must be at least {min} characters, but has {actual}"),
        )
        .with_param("min", min.to_string())
        .with_param("actual", actual.to_string())
    }

    /// A "max_length" error mentioning both the bound and the actual length.
    #[must_use]
    pub fn max_length(max: usize, actual: usize) -> Self {
        Self::new(
            "max_length",
            format!("must be at most {max} characters, but has {actual}"),
        )
        .with_param("max", max.to_string())
        .with_param("actual", actual.to_string())
    }

    /// An "out_of_range" error.
    pub fn out_of_range<T: fmt::Display>(min: T, max: T, actual: T) -> Self {
        Self::new(
            "out_of_range",
            format!("must be between '{min}' and '{max}'"),
        )
        .with_param("min", min.to_string())
        .with_param("max", max.to_string())
        .with_param("actual", actual.to_string())
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// An ordered collection of validation errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Appends an error.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Whether any error was recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Number of recorded errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Borrows the recorded errors in order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Unwraps into the recorded errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TESTS
// ============================================================================
