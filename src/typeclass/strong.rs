//! Strong and choice profunctors.
//!
//! [`Cartesian`] profunctors can carry extra context alongside their input
//! through a product (this is what a lens needs to remember the whole while
//! it works on the part). [`Cocartesian`] profunctors can let a value that is
//! not theirs pass by untouched through a sum (this is what a prism needs for
//! the "no match" branch).
//!
//! # Laws
//!
//! ```text
//! P::dimap_right(P::strengthen::<C>(pab), |(_, b)| b)
//!     == P::dimap_left(pab, |(_, a)| a)
//!
//! P::costrengthen::<Z>(pab) applied to Left(z) produces Left(z)
//! ```

use super::profunctor::Profunctor;
use crate::control::Either;

/// A profunctor that can thread a context value through a product.
///
/// # Examples
///
/// ```rust
/// use lambars_optics::typeclass::{Cartesian, Func, FunctionK};
///
/// let increment = Func::new(|n: i32| n + 1);
/// let strengthened = FunctionK::strengthen::<i32, i32, &str>(increment);
/// assert_eq!(strengthened.call(("kept", 1)), ("kept", 2));
/// ```
pub trait Cartesian: Profunctor {
    /// Lifts `P<A, B>` to `P<(C, A), (C, B)>`, passing the `C` through.
    fn strengthen<A, B, C>(pab: Self::Of<A, B>) -> Self::Of<(C, A), (C, B)>
    where
        A: 'static,
        B: 'static,
        C: 'static;

    /// Lifts `P<A, B>` to `P<A, (A, B)>`, pairing each output with its input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_optics::typeclass::{Cartesian, Func, FunctionK};
    ///
    /// let square = Func::new(|n: i32| n * n);
    /// assert_eq!(FunctionK::carry(square).call(4), (4, 16));
    /// ```
    #[inline]
    fn carry<A, B>(pab: Self::Of<A, B>) -> Self::Of<A, (A, B)>
    where
        A: Clone + 'static,
        B: 'static,
    {
        Self::dimap_left(Self::strengthen::<A, B, A>(pab), |a: A| (a.clone(), a))
    }
}

/// A profunctor that can let an alternative pass through a sum.
///
/// `costrengthen` is the right-biased choice operation: the profunctor acts
/// on `Right` and a `Left` is forwarded unchanged.
///
/// # Examples
///
/// ```rust
/// use lambars_optics::control::Either;
/// use lambars_optics::typeclass::{Cocartesian, Func, FunctionK};
///
/// let double = Func::new(|n: i32| n * 2);
/// let chosen = FunctionK::costrengthen::<i32, i32, String>(double);
/// assert_eq!(chosen.call(Either::Right(4)), Either::Right(8));
/// assert_eq!(
///     chosen.call(Either::Left("skip".to_string())),
///     Either::Left("skip".to_string())
/// );
/// ```
pub trait Cocartesian: Profunctor {
    /// Lifts `P<A, B>` to `P<Either<Z, A>, Either<Z, B>>`.
    fn costrengthen<A, B, Z>(pab: Self::Of<A, B>) -> Self::Of<Either<Z, A>, Either<Z, B>>
    where
        A: 'static,
        B: 'static,
        Z: 'static;
}
