//! The exchange profunctor - a pair of functions recovered from an iso.
//!
//! `Exchange<A, B, S, T>` stores `S -> A` and `B -> T`. Running an iso at
//! `ExchangeK<A, B>` starting from `(identity, identity)` hands back the
//! iso's own two directions, which is how [`un_iso`](crate::optics::un_iso)
//! takes an optic apart.

use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use super::contravariant::Contravariant;
use super::functor::Functor;
use super::higher::{Kind1, Kind2, Kinded, TypeConstructor};
use super::profunctor::Profunctor;

/// A forward function `S -> A` paired with a backward function `B -> T`.
///
/// # Examples
///
/// ```rust
/// use lambars_optics::typeclass::{Exchange, ExchangeK, Profunctor};
///
/// let exchange: Exchange<i32, i32, i32, i32> = Exchange::new(|n| n, |n| n);
/// let adapted = ExchangeK::dimap(exchange, |s: String| s.len() as i32, |n: i32| n.to_string());
/// let (forward, backward) = adapted.into_parts();
/// assert_eq!(forward("four".to_string()), 4);
/// assert_eq!(backward(9), "9");
/// ```
pub struct Exchange<A, B, S, T> {
    forward: Rc<dyn Fn(S) -> A>,
    backward: Rc<dyn Fn(B) -> T>,
}

impl<A, B, S, T> Exchange<A, B, S, T> {
    /// Pairs two functions.
    pub fn new<F, G>(forward: F, backward: G) -> Self
    where
        F: Fn(S) -> A + 'static,
        G: Fn(B) -> T + 'static,
    {
        Self {
            forward: Rc::new(forward),
            backward: Rc::new(backward),
        }
    }

    /// Runs the forward direction.
    #[inline]
    pub fn forward(&self, source: S) -> A {
        (self.forward)(source)
    }

    /// Runs the backward direction.
    #[inline]
    pub fn backward(&self, replacement: B) -> T {
        (self.backward)(replacement)
    }

    /// Splits the exchange into its two functions.
    #[allow(clippy::type_complexity)]
    #[must_use]
    pub fn into_parts(self) -> (Rc<dyn Fn(S) -> A>, Rc<dyn Fn(B) -> T>) {
        (self.forward, self.backward)
    }
}

impl<A, B, S, T> Clone for Exchange<A, B, S, T> {
    fn clone(&self) -> Self {
        Self {
            forward: Rc::clone(&self.forward),
            backward: Rc::clone(&self.backward),
        }
    }
}

impl<A, B, S, T> fmt::Debug for Exchange<A, B, S, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Exchange").finish_non_exhaustive()
    }
}

// =============================================================================
// Brands
// =============================================================================

/// Brand for `Exchange<A, B, _, _>`.
#[derive(Debug)]
pub struct ExchangeK<A, B>(Infallible, PhantomData<(A, B)>);

/// Brand for `Exchange<A, B, S, _>`: varies the backward output.
#[derive(Debug)]
pub struct ExchangeRight<A, B, S>(Infallible, PhantomData<(A, B, S)>);

/// Brand for `Exchange<A, B, _, T>`: varies the forward input.
#[derive(Debug)]
pub struct ExchangeLeft<A, B, T>(Infallible, PhantomData<(A, B, T)>);

impl<A, B> Kind2 for ExchangeK<A, B> {
    type Of<S, T> = Exchange<A, B, S, T>;
}

impl<A, B, S> Kind1 for ExchangeRight<A, B, S> {
    type Of<T> = Exchange<A, B, S, T>;
}

impl<A, B, T> Kind1 for ExchangeLeft<A, B, T> {
    type Of<S> = Exchange<A, B, S, T>;
}

impl<A, B, S, T> TypeConstructor for Exchange<A, B, S, T> {
    type Inner = T;
    type WithType<C> = Exchange<A, B, S, C>;
}

impl<A, B, S, T> Kinded for Exchange<A, B, S, T> {
    type Brand = ExchangeRight<A, B, S>;
}

// =============================================================================
// Instances
// =============================================================================

impl<A: 'static, B: 'static> Profunctor for ExchangeK<A, B> {
    fn dimap<S, T, Z, C, L, R>(pab: Exchange<A, B, S, T>, left: L, right: R) -> Exchange<A, B, Z, C>
    where
        S: 'static,
        T: 'static,
        Z: 'static,
        C: 'static,
        L: Fn(Z) -> S + 'static,
        R: Fn(T) -> C + 'static,
    {
        let (forward, backward) = pab.into_parts();
        Exchange::new(move |z| forward(left(z)), move |b| right(backward(b)))
    }
}

impl<A: 'static, B: 'static, S: 'static> Functor for ExchangeRight<A, B, S> {
    fn fmap<T, C, G>(fa: Exchange<A, B, S, T>, function: G) -> Exchange<A, B, S, C>
    where
        T: 'static,
        C: 'static,
        G: Fn(T) -> C + 'static,
    {
        let (forward, backward) = fa.into_parts();
        Exchange {
            forward,
            backward: Rc::new(move |b: B| function(backward(b))),
        }
    }
}

impl<A: 'static, B: 'static, T: 'static> Contravariant for ExchangeLeft<A, B, T> {
    fn contramap<S, Z, G>(fa: Exchange<A, B, S, T>, function: G) -> Exchange<A, B, Z, T>
    where
        S: 'static,
        Z: 'static,
        G: Fn(Z) -> S + 'static,
    {
        let (forward, backward) = fa.into_parts();
        Exchange {
            forward: Rc::new(move |z: Z| forward(function(z))),
            backward,
        }
    }
}
