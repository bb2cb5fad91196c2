//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Option<_>` directly.
//! This module provides two complementary encodings:
//!
//! - [`TypeConstructor`]: the value-level view. A concrete applied type such as
//!   `Option<i32>` knows its argument (`Inner`) and how to re-apply its
//!   constructor to another argument (`WithType<B>`).
//! - Brands ([`Kind1`], [`Kind2`]): uninhabited marker types standing in for
//!   a partially applied constructor. `OptionK::Of<A>` *is* `Option<A>`.
//!   Every capability trait in this crate (`Functor`, `Profunctor`, ...) is
//!   implemented on a brand, which is what lets a single generic signature be
//!   instantiated by many unrelated concrete constructors.
//!
//! [`Kinded`] connects the two: it names the brand of a concrete type and
//! converts between the concrete type and the brand application. Because the
//! brand's `Of<..>` normalizes to the concrete type, the conversion is the
//! identity on values and a mismatch is a type error, never a runtime fault.
//!
//! # Example
//!
//! ```rust
//! use lambars_optics::typeclass::{Kind1, Kinded, OptionK};
//!
//! fn through_brand<K: Kind1>(value: K::Of<i32>) -> K::Of<i32> {
//!     value
//! }
//!
//! let value = through_brand::<OptionK>(Some(42).upcast());
//! assert_eq!(Option::downcast(value), Some(42));
//! ```

use std::convert::Infallible;
use std::marker::PhantomData;

/// A trait representing a type constructor applied to a single argument.
///
/// # Laws
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` should be
///    equivalent to `F` (up to type equality).
///
/// # Example
///
/// ```rust
/// use lambars_optics::typeclass::TypeConstructor;
///
/// fn example<T: TypeConstructor<Inner = i32>>() {}
///
/// example::<Option<i32>>();
/// ```
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `Option<i32>`, this would be `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For example, for `Option<i32>`, `WithType<String>` would be `Option<String>`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

/// A brand for a type constructor of one argument.
///
/// Brands are never instantiated; they only appear in type position.
pub trait Kind1 {
    /// The constructor applied to `A`.
    type Of<A>;
}

/// A brand for a type constructor of two arguments.
pub trait Kind2 {
    /// The constructor applied to `A` and `B`.
    type Of<A, B>;
}

/// Links a concrete applied type to the brand of its constructor.
///
/// `upcast` and `downcast` are the reinterpretation between "an `F` applied to
/// `X`" as seen by generic code and the concrete type. Both are the identity;
/// the associated type bound guarantees at compile time that the two views
/// denote the same type.
pub trait Kinded: TypeConstructor + Sized {
    /// The brand whose application to `Inner` is `Self`.
    type Brand: Kind1<Of<Self::Inner> = Self>;

    /// Views this value as an application of its brand.
    #[inline]
    fn upcast(self) -> <Self::Brand as Kind1>::Of<Self::Inner> {
        self
    }

    /// Recovers the concrete type from an application of its brand.
    #[inline]
    fn downcast(value: <Self::Brand as Kind1>::Of<Self::Inner>) -> Self {
        value
    }
}

// =============================================================================
// Standard Library Brands
// =============================================================================

/// Brand for [`Option`].
#[derive(Debug)]
pub enum OptionK {}

/// Brand for [`Result`] with a fixed error type `E`.
#[derive(Debug)]
pub struct ResultK<E>(Infallible, PhantomData<E>);

/// Brand for [`Vec`].
#[derive(Debug)]
pub enum VecK {}

impl Kind1 for OptionK {
    type Of<A> = Option<A>;
}

impl<E> Kind1 for ResultK<E> {
    type Of<A> = Result<A, E>;
}

impl Kind1 for VecK {
    type Of<A> = Vec<A>;
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}

impl<A> Kinded for Option<A> {
    type Brand = OptionK;
}

impl<T, E> Kinded for Result<T, E> {
    type Brand = ResultK<E>;
}

impl<T> Kinded for Vec<T> {
    type Brand = VecK;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // TypeConstructor
    // =========================================================================

    #[test]
    fn option_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Option<i32>>();
    }

    #[test]
    fn option_with_type_produces_correct_type() {
        fn transform<T: TypeConstructor>(_value: T) -> T::WithType<String>
        where
            T::WithType<String>: Default,
        {
            Default::default()
        }

        let result: Option<String> = transform(Some(42));
        assert_eq!(result, None);
    }

    #[test]
    fn result_with_type_preserves_error_type() {
        fn assert_result_with_type<T, E, B>()
        where
            Result<T, E>: TypeConstructor<Inner = T, WithType<B> = Result<B, E>>,
        {
        }

        assert_result_with_type::<i32, String, bool>();
        assert_result_with_type::<Vec<u8>, std::io::Error, String>();
    }

    #[test]
    fn chained_with_type_transformations() {
        type Step1 = <Option<i32> as TypeConstructor>::WithType<String>;
        type Step2 = <Step1 as TypeConstructor>::WithType<bool>;

        fn assert_is_option_bool<T: TypeConstructor<Inner = bool>>() {}
        assert_is_option_bool::<Step2>();
    }

    // =========================================================================
    // Brands
    // =========================================================================

    #[test]
    fn brand_application_normalizes_to_concrete_type() {
        let value: <OptionK as Kind1>::Of<i32> = Some(1);
        let result: <ResultK<String> as Kind1>::Of<i32> = Ok(2);
        let vector: <VecK as Kind1>::Of<char> = vec!['a'];

        assert_eq!(value, Some(1));
        assert_eq!(result, Ok(2));
        assert_eq!(vector, vec!['a']);
    }

    #[rstest]
    #[case(Some(42))]
    #[case(None)]
    fn option_upcast_downcast_is_identity(#[case] original: Option<i32>) {
        let through_brand = original.upcast();
        assert_eq!(Option::downcast(through_brand), original);
    }

    #[rstest]
    #[case(Ok(1))]
    #[case(Err("boom".to_string()))]
    fn result_upcast_downcast_is_identity(#[case] original: Result<i32, String>) {
        let through_brand = original.clone().upcast();
        assert_eq!(Result::downcast(through_brand), original);
    }

    #[test]
    fn generic_code_over_brand_accepts_upcast_value() {
        fn first_or<K, A>(value: K::Of<A>, extract: impl Fn(K::Of<A>) -> Option<A>, fallback: A) -> A
        where
            K: Kind1,
        {
            extract(value).unwrap_or(fallback)
        }

        let result = first_or::<VecK, i32>(
            vec![3, 4].upcast(),
            |vector| vector.into_iter().next(),
            0,
        );
        assert_eq!(result, 3);
    }
}
