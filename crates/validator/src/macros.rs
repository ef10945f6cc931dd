//! The [`validator!`] macro: a complete validator with minimal boilerplate.
//!
//! ```rust
//! use quark_validator::validator;
//! use quark_validator::foundation::{Validate, ValidationError};
//!
//! // Unit validator (no fields)
//! validator! {
//!     pub NotBlank for str;
//!     rule(input) { !input.trim().is_empty() }
//!     error(input) { ValidationError::new("not_blank", "must not be blank") }
//!     fn not_blank();
//! }
//!
//! assert!(not_blank().validate("x").is_ok());
//! assert!(NotBlank.validate("  ").is_err());
//! ```

/// Creates a complete validator: struct definition,
/// [`Validate`](crate::foundation::Validate) implementation, constructor,
/// and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied; add extra derives via
/// `#[derive(...)]` on the declaration.
///
/// # Variants
///
/// **Unit validator** (zero-sized):
/// ```rust,ignore
/// validator! {
///     pub IsTrue for bool;
///     rule(input) { *input }
///     error(input) { ValidationError::new("is_true", "must be true") }
///     fn is_true();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// validator! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub MaxLength { max: usize } for str;
///     rule(self, input) { input.len() <= self.max }
///     error(self, input) { ValidationError::max_length(self.max, input.len()) }
///     fn max_length(max: usize);
/// }
/// ```
///
/// **Custom constructor** (overrides the auto `new`), and **generic**
/// validators with simple identifier bounds are supported the same way;
/// see the built-in validators for call sites.
#[macro_export]
macro_rules! validator {
    // ── Unit validator + factory fn ──────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name for $input;
            rule($inp) $rule
            error($einp) $err
        }

        #[doc = concat!("Creates an [`", stringify!($name), "`] validator.")]
        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Unit validator, no factory ───────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Struct with fields + custom new + factory fn ─────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
            new($($narg: $naty),*) $new_body
        }

        #[doc = concat!("Creates a [`", stringify!($name), "`] validator.")]
        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + custom new, no factory ──────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Struct with fields + auto new + factory fn ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
        }

        #[doc = concat!("Creates a [`", stringify!($name), "`] validator.")]
        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + auto new, no factory ────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Generic struct + auto new + factory fn ───────────────────────────
    //
    // A single type parameter with one or more simple identifier bounds.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name<$gen: $first_bound $(+ $rest_bound)*>
                { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
        }

        #[doc = concat!("Creates a [`", stringify!($name), "`] validator.")]
        #[must_use]
        $vis fn $factory<$gen: $first_bound $(+ $rest_bound)*>($($farg: $faty),*) -> $name<$gen> {
            $name::new($($farg),*)
        }
    };

    // ── Generic struct + auto new, no factory ────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name<$gen> {
            $(pub $field: $fty,)+
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $name<$gen> {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $crate::foundation::Validate for $name<$gen> {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::foundation::{Validate, ValidationError};

    validator! {
        /// Test unit validator.
        TestNotEmpty for str;
        rule(input) { !input.is_empty() }
        error(input) { ValidationError::not_empty() }
        fn test_not_empty();
    }

    validator! {
        #[derive(Copy, PartialEq, Eq, Hash)]
        TestMinLen { min: usize } for str;
        rule(self, input) { input.len() >= self.min }
        error(self, input) { ValidationError::min_length(self.min, input.len()) }
        fn test_min_len(min: usize);
    }

    use std::fmt::Display;

    validator! {
        #[derive(Copy, PartialEq, Eq, Hash)]
        TestMin<T: PartialOrd + Display + Copy> { min: T } for T;
        rule(self, input) { *input >= self.min }
        error(self, input) {
            ValidationError::new("min", format!("must be at least '{}'", self.min))
        }
        fn test_min(value: T);
    }

    validator! {
        #[derive(Copy, PartialEq, Eq, Hash)]
        TestRange { lo: usize, hi: usize } for usize;
        rule(self, input) { *input >= self.lo && *input <= self.hi }
        error(self, input) {
            ValidationError::new("range", format!("must be within {}..{}", self.lo, self.hi))
        }
        new(lo: usize, hi: usize) { Self { lo, hi } }
        fn test_range(lo: usize, hi: usize);
    }

    #[test]
    fn unit_validator_and_factory() {
        assert!(TestNotEmpty.validate("hello").is_ok());
        assert!(test_not_empty().validate("").is_err());
    }

    #[test]
    fn struct_validator_auto_new() {
        let v = TestMinLen::new(5);
        assert!(v.validate("hello").is_ok());
        assert!(v.validate("hi").is_err());
        assert!(test_min_len(5).validate("hi").is_err());
    }

    #[test]
    fn generic_validator() {
        let v = test_min(5_i32);
        assert!(v.validate(&5).is_ok());
        assert!(v.validate(&4).is_err());
    }

    #[test]
    fn custom_new_body_is_respected() {
        let v = test_range(3, 7);
        assert_eq!(v.lo, 3);
        assert_eq!(v.hi, 7);
        assert!(v.validate(&5).is_ok());
        assert!(v.validate(&8).is_err());
    }

    #[test]
    fn error_content_comes_from_the_error_block() {
        let err = TestMinLen { min: 5 }.validate("hi").unwrap_err();
        assert_eq!(err.code, "min_length");
        assert!(err.message.contains('5'));
        assert!(err.message.contains('2'));
    }
}
