//! Profunctor type class - contravariant on the left, covariant on the right.
//!
//! A profunctor `P<A, B>` consumes `A` and produces `B`. The canonical
//! example is a plain function; [`Tagged`](super::Tagged) (produces a `B`
//! while ignoring its input) and [`Exchange`](super::Exchange) (a pair of
//! functions `S -> A`, `B -> T`) are the other witnesses this crate needs.
//!
//! Optics are profunctor-polymorphic: an optic turns a `P<A, F<B>>` into a
//! `P<S, F<T>>` for every profunctor brand `P` with the right capabilities.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! P::dimap(pab, |x| x, |y| y) == pab
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! P::dimap(pab, |z| f1(f2(z)), |b| g2(g1(b)))
//!     == P::dimap(P::dimap(pab, f1, g1), f2, g2)
//! ```
//!
//! ## Side Consistency Law
//!
//! ```text
//! P::dimap(pab, f, g) == P::dimap_right(P::dimap_left(pab, f), g)
//! ```
//!
//! `dimap_right` must also agree with `Functor::fmap` on the profunctor's
//! right-hand brand wherever that functor exists.
//!
//! # Examples
//!
//! ```rust
//! use lambars_optics::typeclass::{Func, FunctionK, Profunctor};
//!
//! let length: Func<String, usize> = Func::new(|s: String| s.len());
//! let adapted = FunctionK::dimap(length, |n: u32| "x".repeat(n as usize), |len| len * 10);
//! assert_eq!(adapted.call(3), 30);
//! ```

use std::convert::identity;

use super::higher::Kind2;

/// A type class for two-argument brands that map their input contravariantly
/// and their output covariantly.
pub trait Profunctor: Kind2 {
    /// Pre-composes `left` on the input and post-composes `right` on the
    /// output.
    fn dimap<A, B, Z, C, L, R>(pab: Self::Of<A, B>, left: L, right: R) -> Self::Of<Z, C>
    where
        A: 'static,
        B: 'static,
        Z: 'static,
        C: 'static,
        L: Fn(Z) -> A + 'static,
        R: Fn(B) -> C + 'static;

    /// Maps the input side only.
    #[inline]
    fn dimap_left<A, B, Z, L>(pab: Self::Of<A, B>, left: L) -> Self::Of<Z, B>
    where
        A: 'static,
        B: 'static,
        Z: 'static,
        L: Fn(Z) -> A + 'static,
    {
        Self::dimap(pab, left, identity)
    }

    /// Maps the output side only.
    #[inline]
    fn dimap_right<A, B, C, R>(pab: Self::Of<A, B>, right: R) -> Self::Of<A, C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        R: Fn(B) -> C + 'static,
    {
        Self::dimap(pab, identity, right)
    }
}
