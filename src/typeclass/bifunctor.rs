//! Bifunctor type class - mapping over two type parameters.
//!
//! A `Bifunctor` is a generalization of [`Functor`](super::Functor) for
//! brands of two arguments. While `Functor` transforms `F<A>` to `F<B>`,
//! `Bifunctor` transforms `F<A, B>` to `F<C, D>`.
//!
//! # Laws
//!
//! All `Bifunctor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! P::bimap(pab, |x| x, |y| y) == pab
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! P::bimap(pab, |x| f2(f1(x)), |y| g2(g1(y))) == P::bimap(P::bimap(pab, f1, g1), f2, g2)
//! ```
//!
//! ## first/second Consistency Law
//!
//! ```text
//! P::bimap(pab, f, g) == P::second(P::first(pab, f), g) == P::first(P::second(pab, g), f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambars_optics::control::Either;
//! use lambars_optics::typeclass::{Bifunctor, EitherK};
//!
//! let left: Either<i32, String> = Either::Left(42);
//! let mapped = EitherK::bimap(left, |x| x * 2, |s: String| s.len());
//! assert_eq!(mapped, Either::Left(84));
//!
//! let right: Either<i32, String> = Either::Right("hello".to_string());
//! let mapped = EitherK::bimap(right, |x: i32| x * 2, |s| s.len());
//! assert_eq!(mapped, Either::Right(5));
//! ```
//!
//! # Type Parameter Order for Result
//!
//! [`ResultBiK`] applies as `Of<E, T> = Result<T, E>`:
//! - `first`: transforms the error type (E) - equivalent to `map_err`
//! - `second`: transforms the success type (T) - equivalent to `map`
//!
//! This keeps `second` in agreement with `Functor::fmap` on `ResultK<E>`.

use super::higher::Kind2;
use crate::control::Either;

/// A type class for brands of two arguments that can have functions mapped
/// over both.
///
/// Unlike the one-argument capability traits, the functions here are
/// `FnOnce` and need not be `'static`: every instance applies them
/// immediately to the value it holds.
pub trait Bifunctor: Kind2 {
    /// Applies two functions to both type parameters simultaneously.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_optics::typeclass::{Bifunctor, PairK};
    ///
    /// let tuple = (42, "hello".to_string());
    /// let result = PairK::bimap(tuple, |x| x * 2, |s| s.len());
    /// assert_eq!(result, (84, 5));
    /// ```
    fn bimap<A, B, C, D, F, G>(
        fab: Self::Of<A, B>,
        first_function: F,
        second_function: G,
    ) -> Self::Of<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Applies a function to the first type parameter only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_optics::control::Either;
    /// use lambars_optics::typeclass::{Bifunctor, EitherK};
    ///
    /// let either: Either<i32, String> = Either::Left(42);
    /// let result = EitherK::first(either, |x| x.to_string());
    /// assert_eq!(result, Either::Left("42".to_string()));
    /// ```
    #[inline]
    fn first<A, B, C, F>(fab: Self::Of<A, B>, function: F) -> Self::Of<C, B>
    where
        F: FnOnce(A) -> C,
    {
        Self::bimap(fab, function, |b| b)
    }

    /// Applies a function to the second type parameter only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_optics::typeclass::{Bifunctor, ResultBiK};
    ///
    /// let result: Result<i32, String> = Err("boom".to_string());
    /// let mapped = ResultBiK::second(result, |n| n + 1);
    /// assert_eq!(mapped, Err("boom".to_string()));
    /// ```
    #[inline]
    fn second<A, B, D, G>(fab: Self::Of<A, B>, function: G) -> Self::Of<A, D>
    where
        G: FnOnce(B) -> D,
    {
        Self::bimap(fab, |a| a, function)
    }
}

// =============================================================================
// Brands
// =============================================================================

/// Brand for [`Either`].
#[derive(Debug)]
pub enum EitherK {}

/// Brand for the pair `(A, B)`.
#[derive(Debug)]
pub enum PairK {}

/// Brand for [`Result`] with the error type first: `Of<E, T> = Result<T, E>`.
#[derive(Debug)]
pub enum ResultBiK {}

impl Kind2 for EitherK {
    type Of<A, B> = Either<A, B>;
}

impl Kind2 for PairK {
    type Of<A, B> = (A, B);
}

impl Kind2 for ResultBiK {
    type Of<A, B> = Result<B, A>;
}

// =============================================================================
// Instances
// =============================================================================

impl Bifunctor for EitherK {
    #[inline]
    fn bimap<A, B, C, D, F, G>(fab: Either<A, B>, first_function: F, second_function: G) -> Either<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D,
    {
        match fab {
            Either::Left(left) => Either::Left(first_function(left)),
            Either::Right(right) => Either::Right(second_function(right)),
        }
    }
}

impl Bifunctor for ResultBiK {
    #[inline]
    fn bimap<A, B, C, D, F, G>(fab: Result<B, A>, first_function: F, second_function: G) -> Result<D, C>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D,
    {
        match fab {
            Ok(value) => Ok(second_function(value)),
            Err(error) => Err(first_function(error)),
        }
    }

    #[inline]
    fn first<A, B, C, F>(fab: Result<B, A>, function: F) -> Result<B, C>
    where
        F: FnOnce(A) -> C,
    {
        fab.map_err(function)
    }

    #[inline]
    fn second<A, B, D, G>(fab: Result<B, A>, function: G) -> Result<D, A>
    where
        G: FnOnce(B) -> D,
    {
        fab.map(function)
    }
}

impl Bifunctor for PairK {
    #[inline]
    fn bimap<A, B, C, D, F, G>(fab: (A, B), first_function: F, second_function: G) -> (C, D)
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D,
    {
        (first_function(fab.0), second_function(fab.1))
    }
}
