//! Serialization adapter: wrappers travel as their bare scalar.
//!
//! `Email("a@b.com")` serializes to the JSON string `"a@b.com"`, a UUID
//! wrapper to its canonical hyphenated lowercase string, an integer wrapper
//! to a JSON number, a boolean wrapper to `true`/`false`. No wrapper
//! metadata ever reaches the wire, and because these are ordinary trait
//! impls, a surrounding `#[derive(Serialize, Deserialize)]` record picks
//! them up per-field with no extra glue.
//!
//! Deserialization decodes the scalar and constructs the wrapper directly —
//! it does NOT run domain validation. Wire decoding and domain validation
//! are separate concerns: a wrong-kind token fails through the serializer's
//! own error channel, and callers that need domain guarantees on decoded
//! values re-check them against the validation registry.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::primitive::Primitive;
use crate::scalar::Scalar;

impl<D, T: Serialize> Serialize for Primitive<D, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

impl<'de, D, T> Deserialize<'de> for Primitive<D, T>
where
    T: Scalar + Deserialize<'de>,
{
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        T::deserialize(deserializer).map(Primitive::new)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use serde::{Deserialize, Serialize};

    use crate::{Uuid, WrapsScalar};

    crate::define_bool!(ActiveDomain => Active);
    crate::define_int!(CountDomain => Count);
    crate::define_guid!(PersonIdDomain => PersonId);
    crate::define_string!(EmailDomain => Email);

    #[test]
    fn bool_wrapper_serializes_as_bare_boolean() {
        let active = Active::from_raw(true);
        assert_eq!(serde_json::to_string(&active).unwrap(), "true");
    }

    #[test]
    fn int_wrapper_serializes_as_bare_number() {
        let count = Count::from_raw(1234);
        assert_eq!(serde_json::to_string(&count).unwrap(), "1234");
    }

    #[test]
    fn guid_wrapper_serializes_as_canonical_quoted_string() {
        let raw = Uuid::parse_str("A8D9289A-22A4-4297-8C43-CC42B8637E2C").unwrap();
        let id = PersonId::from_raw(raw);
        assert_eq!(
            serde_json::to_string(&id).unwrap(),
            "\"a8d9289a-22a4-4297-8c43-cc42b8637e2c\""
        );
    }

    #[test]
    fn string_wrapper_serializes_as_bare_string() {
        let email = Email::from_raw("a@b.com".to_owned());
        assert_eq!(serde_json::to_string(&email).unwrap(), "\"a@b.com\"");
    }

    #[test]
    fn deserialization_constructs_without_validation() {
        // Structurally valid JSON always decodes; domain rules are a
        // separate layer.
        let email: Email = serde_json::from_str("\"\"").unwrap();
        assert!(email.is_empty());
    }

    #[test]
    fn wrong_json_kind_fails_through_serde() {
        assert!(serde_json::from_str::<Email>("{}").is_err());
        assert!(serde_json::from_str::<Count>("\"5\"").is_err());
        assert!(serde_json::from_str::<Active>("1").is_err());
        assert!(serde_json::from_str::<PersonId>("\"nope\"").is_err());
    }

    #[test]
    fn wrappers_compose_as_record_fields() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Signup {
            email: Email,
            invites: Count,
            active: Active,
        }

        let signup = Signup {
            email: Email::from_raw("a@b.com".to_owned()),
            invites: Count::from_raw(3),
            active: Active::from_raw(false),
        };

        let json = serde_json::to_string(&signup).unwrap();
        assert_eq!(json, r#"{"email":"a@b.com","invites":3,"active":false}"#);

        let back: Signup = serde_json::from_str(&json).unwrap();
        assert_eq!(back, signup);
    }

    proptest! {
        #[test]
        fn int_round_trip(raw in any::<i32>()) {
            let count = Count::from_raw(raw);
            let json = serde_json::to_string(&count).unwrap();
            prop_assert_eq!(&json, &raw.to_string());
            let back: Count = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(back, count);
        }

        #[test]
        fn text_round_trip(raw in ".*") {
            let email = Email::from_raw(raw.clone());
            let json = serde_json::to_string(&email).unwrap();
            prop_assert_eq!(&json, &serde_json::to_string(&raw).unwrap());
            let back: Email = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(back.as_str(), raw.as_str());
        }

        #[test]
        fn guid_round_trip(bytes in any::<[u8; 16]>()) {
            let id = PersonId::from_raw(Uuid::from_bytes(bytes));
            let json = serde_json::to_string(&id).unwrap();
            let back: PersonId = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(back, id);
        }
    }
}
