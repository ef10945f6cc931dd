//! Declaration macros for wrapper types.
//!
//! Each macro declares the zero-sized domain marker, wires it to
//! [`Domain`](crate::Domain), and aliases the wrapper type:
//!
//! ```rust
//! quark_core::define_string! {
//!     /// A customer-facing e-mail address.
//!     pub EmailDomain => Email
//! }
//! quark_core::define_guid!(PersonIdDomain => PersonId);
//!
//! let email = <Email as quark_core::WrapsScalar>::from_raw("a@b.com".into());
//! assert_eq!(email.as_str(), "a@b.com");
//! ```
//!
//! The macros never emit a public constructor: obtaining instances stays
//! with the validation registry and the trusted adapters.

/// Declares a wrapper type over `bool`.
#[macro_export]
macro_rules! define_bool {
    ($(#[$meta:meta])* $vis:vis $domain:ident => $name:ident $(;)?) => {
        #[doc = concat!("Domain marker for [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, Copy)]
        $vis enum $domain {}

        impl $crate::Domain for $domain {
            const NAME: &'static str = stringify!($name);
        }

        $(#[$meta])*
        $vis type $name = $crate::Primitive<$domain, bool>;
    };
}

/// Declares a wrapper type over `i32`.
#[macro_export]
macro_rules! define_int {
    ($(#[$meta:meta])* $vis:vis $domain:ident => $name:ident $(;)?) => {
        #[doc = concat!("Domain marker for [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, Copy)]
        $vis enum $domain {}

        impl $crate::Domain for $domain {
            const NAME: &'static str = stringify!($name);
        }

        $(#[$meta])*
        $vis type $name = $crate::Primitive<$domain, i32>;
    };
}

/// Declares a wrapper type over [`Uuid`](crate::Uuid).
#[macro_export]
macro_rules! define_guid {
    ($(#[$meta:meta])* $vis:vis $domain:ident => $name:ident $(;)?) => {
        #[doc = concat!("Domain marker for [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, Copy)]
        $vis enum $domain {}

        impl $crate::Domain for $domain {
            const NAME: &'static str = stringify!($name);
        }

        $(#[$meta])*
        $vis type $name = $crate::Primitive<$domain, $crate::Uuid>;
    };
}

/// Declares a wrapper type over [`String`].
#[macro_export]
macro_rules! define_string {
    ($(#[$meta:meta])* $vis:vis $domain:ident => $name:ident $(;)?) => {
        #[doc = concat!("Domain marker for [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, Copy)]
        $vis enum $domain {}

        impl $crate::Domain for $domain {
            const NAME: &'static str = stringify!($name);
        }

        $(#[$meta])*
        $vis type $name = $crate::Primitive<$domain, ::std::string::String>;
    };
}
