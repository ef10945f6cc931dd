//! The validator registry: the blessed factory for primitive wrappers.
//!
//! A [`ValidatorRegistry`] is built once at process startup through
//! [`RegistryBuilder`], associates at most one [`Rules`] list with each
//! wrapper type, and is read-only afterwards — safe to share behind an
//! `Arc` and read concurrently without locking.
//!
//! Construction protocol ([`ValidatorRegistry::create`]):
//!
//! 1. build the candidate wrapper through the trusted
//!    [`WrapsScalar::from_raw`] hook;
//! 2. run the registered rules against the value *as read back through the
//!    wrapper's accessor*;
//! 3. on success return the candidate; on failure discard it — an invalid
//!    instance is never observable — and return the normalized
//!    [`Violations`].
//!
//! A wrapper type with no registered rules is trivially valid.
//!
//! Failures are values, not panics and not `unwrap`ed exceptions: every
//! violated rule is reported, in rule order, as a `(subject, message)`
//! pair. A rule that names no explicit field gets the generic subject
//! `this value` rather than leaking an internal property name.

use std::any::TypeId;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use quark_core::{Scalar, Uuid, WrapsScalar};
use serde::Serialize;

use crate::foundation::{Validate, ValidationError, ValidationErrors};

/// The borrowed validation subject of a wrapper type (`str` for text
/// wrappers, the scalar itself for the `Copy` kinds).
pub type Checked<P> = <<P as WrapsScalar>::Raw as Scalar>::Checked;

// ============================================================================
// RULES
// ============================================================================

/// An ordered, non-short-circuiting rule list for one wrapper type.
///
/// Unlike [`and`](crate::foundation::ValidateExt::and), every rule runs on
/// every attempt so the caller sees the complete list of violations, not
/// just the first.
///
/// # Examples
///
/// ```rust
/// use quark_validator::prelude::*;
///
/// let rules: Rules<i32> = Rules::new().must(non_zero()).must(greater_than(4));
/// ```
pub struct Rules<I: ?Sized + 'static> {
    rules: Vec<Box<dyn Validate<Input = I> + Send + Sync>>,
}

impl<I: ?Sized + 'static> Rules<I> {
    /// Creates an empty rule list.
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule. Rules run in insertion order.
    #[must_use = "builder methods must be chained or built"]
    pub fn must<V>(mut self, rule: V) -> Self
    where
        V: Validate<Input = I> + Send + Sync + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }

    /// Number of rules in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the list has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs every rule, collecting failures in rule order.
    fn check(&self, input: &I) -> ValidationErrors {
        self.rules
            .iter()
            .filter_map(|rule| rule.validate(input).err())
            .collect()
    }
}

impl<I: ?Sized + 'static> Default for Rules<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: ?Sized> fmt::Debug for Rules<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rules").field("len", &self.rules.len()).finish()
    }
}

// ============================================================================
// VIOLATIONS
// ============================================================================

/// Subject substituted when a rule names no explicit field.
pub const GENERIC_SUBJECT: &str = "this value";

/// One normalized `(subject, message)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// What the message is about; `this value` unless the rule set an
    /// explicit field.
    pub subject: Cow<'static, str>,

    /// The violated rule's error code.
    pub code: Cow<'static, str>,

    /// The subject-less message, e.g. `must be greater than '4'`.
    pub message: Cow<'static, str>,
}

impl Violation {
    fn from_error(error: &ValidationError) -> Self {
        Self {
            subject: error
                .field
                .clone()
                .unwrap_or(Cow::Borrowed(GENERIC_SUBJECT)),
            code: error.code.clone(),
            message: error.message.clone(),
        }
    }
}

impl fmt::Display for Violation {
    /// Renders the client-facing sentence, capitalizing the subject:
    /// `This value must be greater than '4'.`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut chars = self.subject.chars();
        match chars.next() {
            Some(first) => write!(f, "{}{}", first.to_uppercase(), chars.as_str())?,
            None => f.write_str("This value")?,
        }
        write!(f, " {}.", self.message)
    }
}

/// The ordered violation list a failed construction returns.
///
/// This is the value-level `Failure` arm of the construction protocol; it
/// is never thrown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Violations(Vec<Violation>);

impl Violations {
    fn from_errors(errors: &[ValidationError]) -> Self {
        let mut violations = Vec::with_capacity(errors.len());
        for error in errors {
            for flattened in error.flatten() {
                violations.push(Violation::from_error(flattened));
            }
        }
        Self(violations)
    }

    /// The violations in rule order.
    #[must_use]
    pub fn as_slice(&self) -> &[Violation] {
        &self.0
    }

    /// Iterates the violations in rule order.
    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.0.iter()
    }

    /// Number of violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty (never true for a returned failure).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "validation failed with {} violation(s):", self.0.len())?;
        for (i, violation) in self.0.iter().enumerate() {
            writeln!(f, "  {}. {violation}", i + 1)?;
        }
        Ok(())
    }
}

impl std::error::Error for Violations {}

// ============================================================================
// KIND SLOTS
// ============================================================================

#[doc(hidden)]
pub type RuleTable<I> = HashMap<TypeId, Rules<I>>;

/// Maps a scalar kind to its typed slot inside the registry.
///
/// Implemented for the four scalar kinds only; the typed slots are what
/// lets the registry stay free of `Any` downcasts.
pub trait RegistrySlot: Scalar {
    #[doc(hidden)]
    fn slot(registry: &ValidatorRegistry) -> &RuleTable<Self::Checked>;
    #[doc(hidden)]
    fn slot_mut(registry: &mut ValidatorRegistry) -> &mut RuleTable<Self::Checked>;
}

macro_rules! registry_slot {
    ($($raw:ty => $field:ident),+ $(,)?) => {
        $(
            impl RegistrySlot for $raw {
                fn slot(registry: &ValidatorRegistry) -> &RuleTable<Self::Checked> {
                    &registry.$field
                }

                fn slot_mut(registry: &mut ValidatorRegistry) -> &mut RuleTable<Self::Checked> {
                    &mut registry.$field
                }
            }
        )+
    };
}

registry_slot! {
    bool => bools,
    i32 => ints,
    Uuid => guids,
    String => texts,
}

// ============================================================================
// REGISTRY
// ============================================================================

/// Process-wide validator registry. Built once, read-only afterwards.
///
/// Thread the registry explicitly (typically behind an `Arc`) through the
/// layers that construct wrappers; it holds no interior mutability and no
/// global state.
#[derive(Default)]
pub struct ValidatorRegistry {
    bools: RuleTable<bool>,
    ints: RuleTable<i32>,
    guids: RuleTable<Uuid>,
    texts: RuleTable<str>,
}

impl ValidatorRegistry {
    /// Starts a registry build.
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder {
            registry: Self::default(),
            filter: None,
        }
    }

    /// Validated construction: the only public way to obtain a wrapper
    /// from a raw value.
    ///
    /// Returns the wrapper when every registered rule passes (or when no
    /// rules are registered), otherwise the complete [`Violations`] list.
    pub fn create<P>(&self, raw: P::Raw) -> Result<P, Violations>
    where
        P: WrapsScalar,
        P::Raw: RegistrySlot,
    {
        let candidate = P::from_raw(raw);
        self.check(&candidate)?;
        Ok(candidate)
    }

    /// Validates an already-constructed wrapper (the request-validation
    /// hook for instances produced by deserialization or binding).
    pub fn check<P>(&self, primitive: &P) -> Result<(), Violations>
    where
        P: WrapsScalar,
        P::Raw: RegistrySlot,
    {
        let Some(rules) = P::Raw::slot(self).get(&TypeId::of::<P>()) else {
            return Ok(());
        };

        // The rules see the value as read back through the wrapper's
        // accessor, not the raw input.
        let failures = rules.check(primitive.value().as_checked());
        if failures.is_empty() {
            Ok(())
        } else {
            Err(Violations::from_errors(failures.errors()))
        }
    }

    /// Whether rules are registered for the wrapper type.
    #[must_use]
    pub fn has_rules_for<P>(&self) -> bool
    where
        P: WrapsScalar,
        P::Raw: RegistrySlot,
    {
        P::Raw::slot(self).contains_key(&TypeId::of::<P>())
    }

    /// Number of wrapper types with registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bools.len() + self.ints.len() + self.guids.len() + self.texts.len()
    }

    /// Whether no wrapper type has registered rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// Debug stays readable without exposing rule internals.
impl fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorRegistry")
            .field("bools", &self.bools.len())
            .field("ints", &self.ints.len())
            .field("guids", &self.guids.len())
            .field("texts", &self.texts.len())
            .finish()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builds a [`ValidatorRegistry`] at startup.
///
/// `with_filter` scopes which wrapper types actually register — the
/// analogue of filtering a discovery scan by predicate.
pub struct RegistryBuilder {
    registry: ValidatorRegistry,
    filter: Option<Box<dyn Fn(&'static str) -> bool + Send + Sync>>,
}

impl RegistryBuilder {
    /// Restricts subsequent registrations to wrapper names accepted by the
    /// predicate.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&'static str) -> bool + Send + Sync + 'static,
    {
        self.filter = Some(Box::new(filter));
        self
    }

    /// Attaches a rule list to a wrapper type (1:1; a second registration
    /// for the same type replaces the first).
    #[must_use = "builder methods must be chained or built"]
    pub fn register<P>(mut self, rules: Rules<Checked<P>>) -> Self
    where
        P: WrapsScalar,
        P::Raw: RegistrySlot,
    {
        if let Some(filter) = &self.filter {
            if !filter(P::name()) {
                tracing::debug!(primitive = P::name(), "validator skipped by filter");
                return self;
            }
        }

        tracing::debug!(
            primitive = P::name(),
            rules = rules.len(),
            "validator registered"
        );
        P::Raw::slot_mut(&mut self.registry).insert(TypeId::of::<P>(), rules);
        self
    }

    /// Registers a self-describing wrapper type (see [`ValidatedPrimitive`]).
    #[must_use = "builder methods must be chained or built"]
    pub fn install<P>(self) -> Self
    where
        P: ValidatedPrimitive,
        P::Raw: RegistrySlot,
    {
        self.register::<P>(P::rules())
    }

    /// Finishes the build; the registry is immutable from here on.
    #[must_use]
    pub fn build(self) -> ValidatorRegistry {
        self.registry
    }
}

impl fmt::Debug for RegistryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field("registry", &self.registry)
            .field("filtered", &self.filter.is_some())
            .finish()
    }
}

// ============================================================================
// SELF-DESCRIBING PRIMITIVES
// ============================================================================

/// A wrapper type that declares its own rule list.
///
/// Implementing this trait makes the type discoverable by
/// [`RegistryBuilder::install`] and the [`install_primitives!`] macro:
///
/// ```rust
/// use quark_validator::prelude::*;
///
/// quark_core::define_int!(CountDomain => Count);
///
/// impl ValidatedPrimitive for Count {
///     fn rules() -> Rules<i32> {
///         Rules::new().must(non_zero()).must(greater_than(4))
///     }
/// }
///
/// let registry = quark_validator::install_primitives!(ValidatorRegistry::builder(), Count).build();
/// assert!(registry.create::<Count>(5).is_ok());
/// assert!(registry.create::<Count>(4).is_err());
/// ```
pub trait ValidatedPrimitive: WrapsScalar
where
    Self::Raw: RegistrySlot,
{
    /// The rule list to register for this wrapper type.
    fn rules() -> Rules<Checked<Self>>;
}

/// Registers a batch of [`ValidatedPrimitive`] types on a builder.
///
/// The analogue of scanning a set of modules for validator definitions:
/// the listed types are this deployment's validator set, and the builder's
/// filter still applies to each.
#[macro_export]
macro_rules! install_primitives {
    ($builder:expr, $($primitive:ty),+ $(,)?) => {{
        let builder = $builder;
        $(let builder = builder.install::<$primitive>();)+
        builder
    }};
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quark_core::Uuid;

    use crate::foundation::{Validate, ValidationError};
    use crate::validators::{greater_than, min_length, non_zero, not_empty, not_nil};

    use super::*;

    quark_core::define_string!(EmailDomain => Email);
    quark_core::define_string!(NicknameDomain => Nickname);
    quark_core::define_int!(CountDomain => Count);
    quark_core::define_guid!(PersonIdDomain => PersonId);

    fn registry() -> ValidatorRegistry {
        ValidatorRegistry::builder()
            .register::<Email>(Rules::new().must(not_empty()).must(min_length(5)))
            .register::<Count>(Rules::new().must(non_zero()).must(greater_than(4)))
            .register::<PersonId>(Rules::new().must(not_nil()))
            .build()
    }

    #[test]
    fn create_accepts_values_the_rules_accept() {
        let email: Email = registry().create("abcde".to_owned()).unwrap();
        assert_eq!(email.value(), "abcde");
    }

    #[test]
    fn create_rejects_values_the_rules_reject() {
        let violations = registry().create::<Email>("abcd".to_owned()).unwrap_err();
        assert_eq!(violations.len(), 1);
        let violation = &violations.as_slice()[0];
        assert!(violation.message.contains('5'));
        assert!(violation.message.contains('4'));
    }

    #[test]
    fn unregistered_types_are_trivially_valid() {
        let nickname: Nickname = registry().create(String::new()).unwrap();
        assert!(nickname.is_empty());
    }

    #[test]
    fn every_violated_rule_is_reported_in_order() {
        let violations = registry().create::<Count>(0).unwrap_err();
        let codes: Vec<_> = violations.iter().map(|v| v.code.as_ref()).collect();
        assert_eq!(codes, ["non_zero", "greater_than"]);
    }

    #[test]
    fn greater_than_scenario() {
        let registry = registry();
        assert!(registry.create::<Count>(5).is_ok());

        let violations = registry.create::<Count>(4).unwrap_err();
        assert_eq!(violations.len(), 1);
        let violation = &violations.as_slice()[0];
        assert_eq!(violation.subject, GENERIC_SUBJECT);
        assert!(violation.message.contains("greater than '4'"));
        assert_eq!(violation.to_string(), "This value must be greater than '4'.");
    }

    #[test]
    fn nil_guid_scenario() {
        let registry = registry();
        assert!(registry.create::<PersonId>(Uuid::new_v4()).is_ok());

        let violations = registry.create::<PersonId>(Uuid::nil()).unwrap_err();
        assert_eq!(
            violations.as_slice()[0].to_string(),
            "This value must not be empty."
        );
    }

    #[test]
    fn explicit_field_names_survive_normalization() {
        struct NamedRule;

        impl Validate for NamedRule {
            type Input = str;

            fn validate(&self, _input: &str) -> Result<(), ValidationError> {
                Err(ValidationError::not_empty().with_field("nickname"))
            }
        }

        let registry = ValidatorRegistry::builder()
            .register::<Nickname>(Rules::new().must(NamedRule))
            .build();

        let violations = registry.create::<Nickname>("x".to_owned()).unwrap_err();
        let violation = &violations.as_slice()[0];
        assert_eq!(violation.subject, "nickname");
        assert_eq!(violation.to_string(), "Nickname must not be empty.");
    }

    #[test]
    fn check_validates_already_bound_instances() {
        let registry = registry();
        let bound = Count::from_raw(3);
        assert!(registry.check(&bound).is_err());

        let bound = Count::from_raw(7);
        assert!(registry.check(&bound).is_ok());
    }

    #[test]
    fn filter_scopes_registration() {
        let registry = ValidatorRegistry::builder()
            .with_filter(|name| name != "Email")
            .register::<Email>(Rules::new().must(min_length(5)))
            .register::<Count>(Rules::new().must(greater_than(4)))
            .build();

        assert!(!registry.has_rules_for::<Email>());
        assert!(registry.has_rules_for::<Count>());
        assert!(registry.create::<Email>("x".to_owned()).is_ok());
    }

    #[test]
    fn same_kind_wrappers_do_not_share_rules() {
        let registry = ValidatorRegistry::builder()
            .register::<Email>(Rules::new().must(min_length(5)))
            .build();

        assert!(registry.create::<Email>("abcd".to_owned()).is_err());
        assert!(registry.create::<Nickname>("abcd".to_owned()).is_ok());
    }

    #[test]
    fn install_uses_the_declared_rules() {
        impl ValidatedPrimitive for Count {
            fn rules() -> Rules<i32> {
                Rules::new().must(non_zero()).must(greater_than(4))
            }
        }

        let registry = crate::install_primitives!(ValidatorRegistry::builder(), Count).build();
        assert_eq!(registry.len(), 1);
        assert!(registry.create::<Count>(5).is_ok());
        assert!(registry.create::<Count>(4).is_err());
    }

    #[test]
    fn violations_serialize_as_subject_message_pairs() {
        let violations = registry().create::<Count>(4).unwrap_err();
        let json = serde_json::to_value(&violations).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "subject": "this value",
                "code": "greater_than",
                "message": "must be greater than '4'",
            }])
        );
    }

    #[test]
    fn registry_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ValidatorRegistry>();
    }
}
