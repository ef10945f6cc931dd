//! The generic primitive wrapper and its value-semantics contract.
//!
//! [`Primitive<D, T>`] owns exactly one scalar of kind `T`, tagged by a
//! zero-sized domain marker `D`. Two wrappers of *different* domains
//! carrying equal values compare equal and hash equal — this cross-domain
//! structural equality is a stated API guarantee, not an accident: the
//! domain marker exists to keep raw scalars from being interchanged at
//! compile time, while equality, ordering and hashing always delegate to
//! the wrapped value. Collection deduplication across wrapper types relies
//! on it.
//!
//! Construction is restricted: there is no public constructor. Instances
//! are produced by the validation registry, by deserialization, or by the
//! input binders — all of which go through the [`WrapsScalar::from_raw`]
//! trusted hook.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::scalar::Scalar;

// ============================================================================
// DOMAIN MARKER
// ============================================================================

/// A domain marker naming one wrapper type.
///
/// Implemented by the zero-sized markers the `define_*!` macros declare;
/// `NAME` feeds `Debug` output, binder parameter names and diagnostics.
pub trait Domain {
    /// The wrapper type's name, e.g. `"Email"`.
    const NAME: &'static str;
}

// ============================================================================
// PRIMITIVE
// ============================================================================

/// A strongly-typed wrapper around a single immutable scalar.
///
/// The wrapped value is set once at construction and never mutated; every
/// operation on the wrapper is computed from it. See the module docs for
/// the equality contract.
pub struct Primitive<D, T> {
    value: T,
    _domain: PhantomData<fn() -> D>,
}

impl<D, T> Primitive<D, T> {
    /// Crate-internal constructor. External construction goes through
    /// [`WrapsScalar::from_raw`].
    pub(crate) const fn new(value: T) -> Self {
        Self {
            value,
            _domain: PhantomData,
        }
    }

    /// Read-only access to the wrapped scalar.
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Unwraps into the raw scalar.
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<D, T: Clone> Clone for Primitive<D, T> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<D, T: Copy> Copy for Primitive<D, T> {}

// ── equality: structural across domains, and against the bare scalar ───────

impl<A, B, T: PartialEq> PartialEq<Primitive<B, T>> for Primitive<A, T> {
    fn eq(&self, other: &Primitive<B, T>) -> bool {
        self.value == other.value
    }
}

impl<D, T: Eq> Eq for Primitive<D, T> {}

impl<D, T: PartialEq> PartialEq<T> for Primitive<D, T> {
    fn eq(&self, other: &T) -> bool {
        self.value == *other
    }
}

// ── ordering: total within a kind, symmetric across domains ────────────────

impl<A, B, T: PartialOrd> PartialOrd<Primitive<B, T>> for Primitive<A, T> {
    fn partial_cmp(&self, other: &Primitive<B, T>) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<D, T: Ord> Ord for Primitive<D, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<D, T: PartialOrd> PartialOrd<T> for Primitive<D, T> {
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        self.value.partial_cmp(other)
    }
}

// ── hashing: delegates to the value, keeping equal-implies-equal-hash ──────

impl<D, T: Hash> Hash for Primitive<D, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

// ── string forms ───────────────────────────────────────────────────────────

impl<D, T: fmt::Display> fmt::Display for Primitive<D, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<D: Domain, T: fmt::Debug> fmt::Debug for Primitive<D, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(D::NAME).field(&self.value).finish()
    }
}

// ============================================================================
// CAPABILITY INTERFACE
// ============================================================================

/// Capability interface every wrapper type satisfies.
///
/// The validation registry, the serde adapter and the input binders are
/// written generically against this trait instead of inspecting concrete
/// types.
///
/// `from_raw` is the unchecked-construction hook those trusted layers use.
/// Calling it anywhere else bypasses domain validation; application code
/// should obtain instances from the validation registry's `create`.
pub trait WrapsScalar: Sized + 'static {
    /// The wrapped scalar kind.
    type Raw: Scalar;

    /// Read-only access to the wrapped scalar.
    fn value(&self) -> &Self::Raw;

    /// The wrapper type's declared name.
    fn name() -> &'static str;

    /// Builds an instance directly from a raw scalar, without validation.
    fn from_raw(raw: Self::Raw) -> Self;
}

impl<D, T> WrapsScalar for Primitive<D, T>
where
    D: Domain + 'static,
    T: Scalar,
{
    type Raw = T;

    fn value(&self) -> &T {
        &self.value
    }

    fn name() -> &'static str {
        D::NAME
    }

    fn from_raw(raw: T) -> Self {
        Self::new(raw)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::hash::{BuildHasher, RandomState};

    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    use super::*;

    enum PersonIdDomain {}
    enum OrderIdDomain {}
    enum NicknameDomain {}

    impl Domain for PersonIdDomain {
        const NAME: &'static str = "PersonId";
    }
    impl Domain for OrderIdDomain {
        const NAME: &'static str = "OrderId";
    }
    impl Domain for NicknameDomain {
        const NAME: &'static str = "Nickname";
    }

    type PersonId = Primitive<PersonIdDomain, Uuid>;
    type OrderId = Primitive<OrderIdDomain, Uuid>;
    type Nickname = Primitive<NicknameDomain, String>;

    #[test]
    fn equal_values_compare_equal_across_domains() {
        let raw = Uuid::new_v4();
        let person = PersonId::from_raw(raw);
        let order = OrderId::from_raw(raw);
        assert!(person == order);
        assert!(order == person);
    }

    #[test]
    fn distinct_values_compare_unequal_across_domains() {
        let person = PersonId::from_raw(Uuid::new_v4());
        let order = OrderId::from_raw(Uuid::new_v4());
        assert!(person != order);
    }

    #[test]
    fn wrapper_equals_bare_scalar() {
        let raw = Uuid::new_v4();
        let person = PersonId::from_raw(raw);
        assert!(person == raw);
    }

    #[test]
    fn equal_values_hash_identically_across_domains() {
        let raw = Uuid::new_v4();
        let person = PersonId::from_raw(raw);
        let order = OrderId::from_raw(raw);

        let hasher = RandomState::new();
        assert_eq!(hasher.hash_one(person), hasher.hash_one(order));
        assert_eq!(hasher.hash_one(person), hasher.hash_one(raw));
    }

    #[test]
    fn hash_set_lookup_works() {
        let id = PersonId::from_raw(Uuid::new_v4());
        let mut set = HashSet::new();
        set.insert(id);
        assert!(set.contains(&id));
    }

    #[test]
    fn ordering_is_total_and_symmetric() {
        let low = Primitive::<PersonIdDomain, i32>::from_raw(1);
        let high = Primitive::<OrderIdDomain, i32>::from_raw(2);

        assert!(low < high);
        assert!(high > low);
        assert!(low < 2);
        assert!(high > 1);
        assert_eq!(
            Primitive::<PersonIdDomain, i32>::from_raw(1).cmp(&low),
            Ordering::Equal
        );
    }

    #[test]
    fn display_delegates_to_the_scalar() {
        let nick = Nickname::from_raw("ada".to_owned());
        assert_eq!(nick.to_string(), "ada");

        let id = PersonId::from_raw(Uuid::nil());
        assert_eq!(id.to_string(), "00000000-0000-0000-0000-000000000000");
    }

    #[test]
    fn debug_names_the_domain() {
        let nick = Nickname::from_raw("ada".to_owned());
        assert_eq!(format!("{nick:?}"), "Nickname(\"ada\")");
    }

    #[test]
    fn value_and_into_value_expose_the_scalar() {
        let nick = Nickname::from_raw("ada".to_owned());
        assert_eq!(nick.value(), "ada");
        assert_eq!(nick.into_value(), "ada");
    }

    #[test]
    fn copy_kinds_stay_usable_after_copy() {
        let a = PersonId::from_raw(Uuid::new_v4());
        let b = a;
        assert_eq!(a, b);
    }

    #[test]
    fn wraps_scalar_reports_the_declared_name() {
        assert_eq!(PersonId::name(), "PersonId");
        assert_eq!(Nickname::name(), "Nickname");
    }
}
