//! Kind-specific facades over [`Primitive`].
//!
//! Every operation here is a pure pass-through to the wrapped scalar: the
//! facades never mutate the value and never construct a new wrapper. The
//! text kind gets the whole `str` surface through `Deref`; the other kinds
//! get their conventional accessors and formatting adapters.

use std::fmt;
use std::ops::Deref;

use uuid::Uuid;
use uuid::fmt::{Braced, Hyphenated, Simple, Urn};

use crate::primitive::Primitive;

// ============================================================================
// BOOL
// ============================================================================

impl<D> Primitive<D, bool> {
    /// The wrapped boolean.
    #[must_use]
    pub const fn get(&self) -> bool {
        *self.value()
    }
}

// ============================================================================
// INT
// ============================================================================

impl<D> Primitive<D, i32> {
    /// The wrapped integer.
    #[must_use]
    pub const fn get(&self) -> i32 {
        *self.value()
    }
}

impl<D> fmt::Binary for Primitive<D, i32> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(self.value(), f)
    }
}

impl<D> fmt::Octal for Primitive<D, i32> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Octal::fmt(self.value(), f)
    }
}

impl<D> fmt::LowerHex for Primitive<D, i32> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self.value(), f)
    }
}

impl<D> fmt::UpperHex for Primitive<D, i32> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self.value(), f)
    }
}

// ============================================================================
// GUID
// ============================================================================

impl<D> Primitive<D, Uuid> {
    /// The wrapped UUID.
    #[must_use]
    pub const fn get(&self) -> Uuid {
        *self.value()
    }

    /// Whether the wrapped UUID is the all-zero (nil) UUID.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        self.value().is_nil()
    }

    /// Borrows the 16 raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 16] {
        self.value().as_bytes()
    }

    /// Unwraps into the 16 raw bytes.
    #[must_use]
    pub fn into_bytes(self) -> [u8; 16] {
        self.into_value().into_bytes()
    }

    /// Canonical hyphenated lowercase form (the wire form).
    #[must_use]
    pub const fn hyphenated(&self) -> Hyphenated {
        self.get().hyphenated()
    }

    /// Format adapter without hyphens.
    #[must_use]
    pub const fn simple(&self) -> Simple {
        self.get().simple()
    }

    /// Format adapter wrapped in braces.
    #[must_use]
    pub const fn braced(&self) -> Braced {
        self.get().braced()
    }

    /// Format adapter as a URN.
    #[must_use]
    pub const fn urn(&self) -> Urn {
        self.get().urn()
    }
}

// ============================================================================
// TEXT
// ============================================================================

impl<D> Primitive<D, String> {
    /// Borrows the wrapped text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.value()
    }

    /// Length in bytes, as for [`str::len`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.value().len()
    }

    /// Whether the wrapped text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value().is_empty()
    }
}

impl<D> Deref for Primitive<D, String> {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl<D> AsRef<str> for Primitive<D, String> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<D> PartialEq<str> for Primitive<D, String> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<D> PartialEq<&str> for Primitive<D, String> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<D> PartialEq<Primitive<D, String>> for str {
    fn eq(&self, other: &Primitive<D, String>) -> bool {
        self == other.as_str()
    }
}

impl<D> PartialEq<Primitive<D, String>> for &str {
    fn eq(&self, other: &Primitive<D, String>) -> bool {
        *self == other.as_str()
    }
}

// ============================================================================
// WRAPPER → RAW CONVERSIONS
// ============================================================================

// One-directional by design: the raw → wrapper direction always goes
// through validated construction or a trusted adapter.

impl<D> From<Primitive<D, bool>> for bool {
    fn from(primitive: Primitive<D, bool>) -> Self {
        primitive.into_value()
    }
}

impl<D> From<Primitive<D, i32>> for i32 {
    fn from(primitive: Primitive<D, i32>) -> Self {
        primitive.into_value()
    }
}

impl<D> From<Primitive<D, Uuid>> for Uuid {
    fn from(primitive: Primitive<D, Uuid>) -> Self {
        primitive.into_value()
    }
}

impl<D> From<Primitive<D, String>> for String {
    fn from(primitive: Primitive<D, String>) -> Self {
        primitive.into_value()
    }
}

// ── scalar-side comparison symmetry ────────────────────────────────────────

macro_rules! symmetric_cmp {
    ($($raw:ty),+ $(,)?) => {
        $(
            impl<D> PartialEq<Primitive<D, $raw>> for $raw {
                fn eq(&self, other: &Primitive<D, $raw>) -> bool {
                    self == other.value()
                }
            }

            impl<D> PartialOrd<Primitive<D, $raw>> for $raw {
                fn partial_cmp(&self, other: &Primitive<D, $raw>) -> Option<std::cmp::Ordering> {
                    self.partial_cmp(other.value())
                }
            }
        )+
    };
}

symmetric_cmp!(bool, i32, Uuid, String);

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::primitive::{Domain, WrapsScalar};

    enum FlagDomain {}
    enum CountDomain {}
    enum IdDomain {}
    enum LabelDomain {}

    impl Domain for FlagDomain {
        const NAME: &'static str = "Flag";
    }
    impl Domain for CountDomain {
        const NAME: &'static str = "Count";
    }
    impl Domain for IdDomain {
        const NAME: &'static str = "Id";
    }
    impl Domain for LabelDomain {
        const NAME: &'static str = "Label";
    }

    type Flag = Primitive<FlagDomain, bool>;
    type Count = Primitive<CountDomain, i32>;
    type Id = Primitive<IdDomain, Uuid>;
    type Label = Primitive<LabelDomain, String>;

    #[test]
    fn bool_facade_formats_and_unwraps() {
        let flag = Flag::from_raw(true);
        assert!(flag.get());
        assert_eq!(flag.to_string(), "true");
        assert!(bool::from(flag));
        assert!(true == flag);
    }

    #[test]
    fn int_facade_supports_numeric_formatting() {
        let count = Count::from_raw(255);
        assert_eq!(format!("{count}"), "255");
        assert_eq!(format!("{count:x}"), "ff");
        assert_eq!(format!("{count:X}"), "FF");
        assert_eq!(format!("{count:o}"), "377");
        assert_eq!(format!("{count:b}"), "11111111");
        assert_eq!(i32::from(count), 255);
        assert!(200 < count);
    }

    #[test]
    fn guid_facade_exposes_format_adapters() {
        let raw = Uuid::parse_str("a8d9289a-22a4-4297-8c43-cc42b8637e2c").unwrap();
        let id = Id::from_raw(raw);

        assert!(!id.is_nil());
        assert_eq!(id.as_bytes(), raw.as_bytes());
        assert_eq!(
            id.hyphenated().to_string(),
            "a8d9289a-22a4-4297-8c43-cc42b8637e2c"
        );
        assert_eq!(id.simple().to_string(), "a8d9289a22a442978c43cc42b8637e2c");
        assert_eq!(
            id.braced().to_string(),
            "{a8d9289a-22a4-4297-8c43-cc42b8637e2c}"
        );
        assert_eq!(
            id.urn().to_string(),
            "urn:uuid:a8d9289a-22a4-4297-8c43-cc42b8637e2c"
        );
        assert_eq!(id.into_bytes(), raw.into_bytes());
    }

    #[test]
    fn nil_guid_reports_nil() {
        assert!(Id::from_raw(Uuid::nil()).is_nil());
    }

    #[test]
    fn text_facade_derefs_to_str() {
        let label = Label::from_raw("  Hello, World  ".to_owned());

        // The full `str` surface comes through `Deref`.
        assert_eq!(label.trim(), "Hello, World");
        assert!(label.contains("World"));
        assert_eq!(label.to_uppercase(), "  HELLO, WORLD  ");
        assert_eq!(label.split(',').count(), 2);
        assert_eq!(&label[2..7], "Hello");

        assert_eq!(label.len(), 16);
        assert!(!label.is_empty());
        assert_eq!(label.as_ref(), "  Hello, World  ");
    }

    #[test]
    fn text_facade_compares_against_str() {
        let label = Label::from_raw("ada".to_owned());
        assert!(label == "ada");
        assert!("ada" == label);
        assert!(label == *"ada");
        assert_eq!(String::from(label), "ada");
    }

    #[test]
    fn facades_never_touch_the_wrapped_value() {
        let label = Label::from_raw("MiXeD".to_owned());
        let _ = label.to_lowercase();
        let _ = label.trim();
        assert_eq!(label.as_str(), "MiXeD");
    }
}
