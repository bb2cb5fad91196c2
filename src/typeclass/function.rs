//! Shared function values - the function profunctor.
//!
//! [`Func`] is a reference-counted `Fn(A) -> B`. It is the workhorse witness:
//! running an optic at `FunctionK` composes the optic's plumbing around an
//! ordinary function, which is how `view`, `set`, `over` and `preview` work.
//!
//! Brands:
//!
//! - [`FunctionK`]: both arguments (`Profunctor`, `Cartesian`, `Cocartesian`)
//! - [`FunctionFrom<A>`]: fixed input, varying output (`Functor`)
//! - [`FunctionTo<B>`]: fixed output, varying input (`Contravariant`)

use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use super::contravariant::Contravariant;
use super::functor::Functor;
use super::higher::{Kind1, Kind2, Kinded, TypeConstructor};
use super::profunctor::Profunctor;
use super::strong::{Cartesian, Cocartesian};
use crate::control::Either;

/// A cheaply clonable function from `A` to `B`.
///
/// # Examples
///
/// ```rust
/// use lambars_optics::typeclass::Func;
///
/// let greet = Func::new(|name: &'static str| format!("hello {name}"));
/// let shared = greet.clone();
/// assert_eq!(shared.call("world"), "hello world");
/// ```
pub struct Func<A, B>(Rc<dyn Fn(A) -> B>);

impl<A, B> Func<A, B> {
    /// Wraps a closure.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(A) -> B + 'static,
    {
        Self(Rc::new(function))
    }

    /// Applies the function.
    #[inline]
    pub fn call(&self, argument: A) -> B {
        (self.0)(argument)
    }

    /// Returns the shared closure.
    #[must_use]
    pub fn into_rc(self) -> Rc<dyn Fn(A) -> B> {
        self.0
    }
}

impl<A> Func<A, A> {
    /// The identity function.
    #[must_use]
    pub fn identity() -> Self
    where
        A: 'static,
    {
        Self::new(std::convert::identity)
    }
}

impl<A, B> Clone for Func<A, B> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<A, B> fmt::Debug for Func<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Func").finish_non_exhaustive()
    }
}

// =============================================================================
// Brands
// =============================================================================

/// Brand for [`Func`] as a two-argument constructor.
#[derive(Debug)]
pub enum FunctionK {}

/// Brand for `Func<A, _>`: functions out of a fixed input type.
#[derive(Debug)]
pub struct FunctionFrom<A>(Infallible, PhantomData<A>);

/// Brand for `Func<_, B>`: functions into a fixed output type.
#[derive(Debug)]
pub struct FunctionTo<B>(Infallible, PhantomData<B>);

impl Kind2 for FunctionK {
    type Of<A, B> = Func<A, B>;
}

impl<A> Kind1 for FunctionFrom<A> {
    type Of<B> = Func<A, B>;
}

impl<B> Kind1 for FunctionTo<B> {
    type Of<A> = Func<A, B>;
}

impl<A, B> TypeConstructor for Func<A, B> {
    type Inner = B;
    type WithType<C> = Func<A, C>;
}

impl<A, B> Kinded for Func<A, B> {
    type Brand = FunctionFrom<A>;
}

// =============================================================================
// Instances
// =============================================================================

impl Profunctor for FunctionK {
    fn dimap<A, B, Z, C, L, R>(pab: Func<A, B>, left: L, right: R) -> Func<Z, C>
    where
        A: 'static,
        B: 'static,
        Z: 'static,
        C: 'static,
        L: Fn(Z) -> A + 'static,
        R: Fn(B) -> C + 'static,
    {
        Func::new(move |z| right(pab.call(left(z))))
    }
}

impl Cartesian for FunctionK {
    fn strengthen<A, B, C>(pab: Func<A, B>) -> Func<(C, A), (C, B)>
    where
        A: 'static,
        B: 'static,
        C: 'static,
    {
        Func::new(move |(context, a)| (context, pab.call(a)))
    }
}

impl Cocartesian for FunctionK {
    fn costrengthen<A, B, Z>(pab: Func<A, B>) -> Func<Either<Z, A>, Either<Z, B>>
    where
        A: 'static,
        B: 'static,
        Z: 'static,
    {
        Func::new(move |input| match input {
            Either::Left(passed) => Either::Left(passed),
            Either::Right(a) => Either::Right(pab.call(a)),
        })
    }
}

impl<X: 'static> Functor for FunctionFrom<X> {
    fn fmap<A, B, G>(fa: Func<X, A>, function: G) -> Func<X, B>
    where
        A: 'static,
        B: 'static,
        G: Fn(A) -> B + 'static,
    {
        Func::new(move |x| function(fa.call(x)))
    }
}

impl<Y: 'static> Contravariant for FunctionTo<Y> {
    fn contramap<A, Z, G>(fa: Func<A, Y>, function: G) -> Func<Z, Y>
    where
        A: 'static,
        Z: 'static,
        G: Fn(Z) -> A + 'static,
    {
        Func::new(move |z| fa.call(function(z)))
    }
}
