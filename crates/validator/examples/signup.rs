//! Validated construction of signup-style domain values.
//!
//! Run with: `cargo run --example signup`

use quark_core::Uuid;
use quark_validator::prelude::*;

quark_core::define_string! {
    /// A customer-facing e-mail address.
    pub EmailDomain => Email
}

quark_core::define_string! {
    /// A national insurance number, at least ten characters.
    pub SocialInsuranceNumberDomain => SocialInsuranceNumber
}

quark_core::define_guid! {
    /// Identifies a person record.
    pub PersonIdDomain => PersonId
}

quark_core::define_bool! {
    /// Consent checkbox; must be ticked.
    pub DoItFlagDomain => DoItFlag
}

impl ValidatedPrimitive for Email {
    fn rules() -> Rules<str> {
        Rules::new().must(not_empty()).must(email())
    }
}

impl ValidatedPrimitive for SocialInsuranceNumber {
    fn rules() -> Rules<str> {
        Rules::new().must(not_empty()).must(min_length(10))
    }
}

impl ValidatedPrimitive for PersonId {
    fn rules() -> Rules<Uuid> {
        Rules::new().must(not_nil())
    }
}

impl ValidatedPrimitive for DoItFlag {
    fn rules() -> Rules<bool> {
        Rules::new().must(is_true().with_message("must be ticked"))
    }
}

fn main() {
    let registry = quark_validator::install_primitives!(
        ValidatorRegistry::builder(),
        Email,
        SocialInsuranceNumber,
        PersonId,
        DoItFlag,
    )
    .build();

    match registry.create::<Email>("ada@lovelace.example".to_owned()) {
        Ok(address) => println!("accepted: {address}"),
        Err(violations) => println!("{violations}"),
    }

    // Two rules fail at once; both are reported.
    match registry.create::<SocialInsuranceNumber>(String::new()) {
        Ok(sin) => println!("accepted: {sin}"),
        Err(violations) => print!("{violations}"),
    }

    match registry.create::<PersonId>(Uuid::nil()) {
        Ok(id) => println!("accepted: {id}"),
        Err(violations) => print!("{violations}"),
    }

    match registry.create::<DoItFlag>(false) {
        Ok(flag) => println!("accepted: {flag}"),
        Err(violations) => print!("{violations}"),
    }
}
