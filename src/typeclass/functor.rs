//! Functor type class - mapping over the argument of a type constructor.
//!
//! `Functor` is implemented on a brand (see [`Kind1`]) rather than on a
//! concrete type, so that optics can be written once for "any functor `F`"
//! and later run against `Identity`, `Const`, or any other instance.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! F::fmap(fa, |x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! F::fmap(F::fmap(fa, f), g) == F::fmap(fa, |x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambars_optics::typeclass::{Functor, OptionK};
//!
//! let transformed: Option<String> = OptionK::fmap(Some(5), |n: i32| n.to_string());
//! assert_eq!(transformed, Some("5".to_string()));
//!
//! let none_value: Option<i32> = None;
//! assert_eq!(OptionK::fmap(none_value, |n: i32| n + 1), None);
//! ```

use super::higher::{Kind1, OptionK, ResultK, VecK};
use super::identity::{Identity, IdentityK};

/// A type class for brands whose applications can have a function mapped
/// over their contents.
///
/// The mapping function is `Fn` rather than `FnOnce`: some instances (the
/// right-hand side of a function profunctor, `Exchange`) store it and call it
/// every time the resulting value is used.
pub trait Functor: Kind1 {
    /// Applies a function to the value(s) inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_optics::typeclass::{Functor, Identity, IdentityK};
    ///
    /// let doubled = IdentityK::fmap(Identity::new(21), |n: i32| n * 2);
    /// assert_eq!(doubled, Identity::new(42));
    /// ```
    fn fmap<A, B, G>(fa: Self::Of<A>, function: G) -> Self::Of<B>
    where
        A: 'static,
        B: 'static,
        G: Fn(A) -> B + 'static;

    /// Replaces the value(s) inside the functor with a constant value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_optics::typeclass::{Functor, OptionK};
    ///
    /// assert_eq!(OptionK::replace(Some(5), "replaced"), Some("replaced"));
    /// assert_eq!(OptionK::replace(None::<i32>, "replaced"), None);
    /// ```
    #[inline]
    fn replace<A, B>(fa: Self::Of<A>, value: B) -> Self::Of<B>
    where
        A: 'static,
        B: Clone + 'static,
    {
        Self::fmap(fa, move |_| value.clone())
    }
}

/// A functor that can lift a plain value.
///
/// This is the `pure` half of an applicative, and all a prism needs: when the
/// match fails the untouched whole is lifted into the functor directly.
///
/// # Laws
///
/// ```text
/// F::fmap(F::pure(a), f) == F::pure(f(a))
/// ```
pub trait Pointed: Functor {
    /// Lifts a value into the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_optics::typeclass::{Pointed, OptionK};
    ///
    /// assert_eq!(OptionK::pure(3), Some(3));
    /// ```
    fn pure<A: 'static>(value: A) -> Self::Of<A>;
}

// =============================================================================
// Identity Implementation
// =============================================================================

impl Functor for IdentityK {
    #[inline]
    fn fmap<A, B, G>(fa: Identity<A>, function: G) -> Identity<B>
    where
        A: 'static,
        B: 'static,
        G: Fn(A) -> B + 'static,
    {
        Identity(function(fa.0))
    }
}

impl Pointed for IdentityK {
    #[inline]
    fn pure<A: 'static>(value: A) -> Identity<A> {
        Identity(value)
    }
}

// =============================================================================
// Option Implementation
// =============================================================================

impl Functor for OptionK {
    #[inline]
    fn fmap<A, B, G>(fa: Option<A>, function: G) -> Option<B>
    where
        A: 'static,
        B: 'static,
        G: Fn(A) -> B + 'static,
    {
        fa.map(function)
    }
}

impl Pointed for OptionK {
    #[inline]
    fn pure<A: 'static>(value: A) -> Option<A> {
        Some(value)
    }
}

// =============================================================================
// Result Implementation
// =============================================================================

impl<E> Functor for ResultK<E> {
    #[inline]
    fn fmap<A, B, G>(fa: Result<A, E>, function: G) -> Result<B, E>
    where
        A: 'static,
        B: 'static,
        G: Fn(A) -> B + 'static,
    {
        fa.map(function)
    }
}

impl<E> Pointed for ResultK<E> {
    #[inline]
    fn pure<A: 'static>(value: A) -> Result<A, E> {
        Ok(value)
    }
}

// =============================================================================
// Vec Implementation
// =============================================================================

impl Functor for VecK {
    fn fmap<A, B, G>(fa: Vec<A>, function: G) -> Vec<B>
    where
        A: 'static,
        B: 'static,
        G: Fn(A) -> B + 'static,
    {
        fa.into_iter().map(function).collect()
    }
}

impl Pointed for VecK {
    #[inline]
    fn pure<A: 'static>(value: A) -> Vec<A> {
        vec![value]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(5), Some(10))]
    #[case(None, None)]
    fn option_fmap_doubles(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(OptionK::fmap(input, |n| n * 2), expected);
    }

    #[rstest]
    fn result_fmap_keeps_error() {
        let failed: Result<i32, String> = Err("boom".to_string());
        assert_eq!(ResultK::fmap(failed, |n| n + 1), Err("boom".to_string()));
        assert_eq!(ResultK::<String>::fmap(Ok(1), |n: i32| n + 1), Ok(2));
    }

    #[rstest]
    fn vec_fmap_maps_every_element() {
        assert_eq!(VecK::fmap(vec![1, 2, 3], |n: i32| n * 10), vec![10, 20, 30]);
    }

    #[rstest]
    fn identity_fmap_applies_function() {
        let result = IdentityK::fmap(Identity::new("abc".to_string()), |s: String| s.len());
        assert_eq!(result, Identity::new(3));
    }

    #[rstest]
    fn replace_keeps_structure() {
        assert_eq!(VecK::replace(vec![1, 2], 'x'), vec!['x', 'x']);
        assert_eq!(IdentityK::replace(Identity::new(1), "y"), Identity::new("y"));
    }

    #[rstest]
    fn pure_then_fmap_equals_pure_of_applied() {
        let by_fmap = OptionK::fmap(OptionK::pure(4), |n: i32| n * n);
        assert_eq!(by_fmap, OptionK::pure(16));

        let by_fmap = VecK::fmap(VecK::pure(4), |n: i32| n + 1);
        assert_eq!(by_fmap, VecK::pure(5));

        let by_fmap = ResultK::<()>::fmap(ResultK::pure(4), |n: i32| n - 1);
        assert_eq!(by_fmap, ResultK::<()>::pure(3));
    }
}
