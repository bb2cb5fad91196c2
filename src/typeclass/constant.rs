//! The constant functor.
//!
//! `Const<R, A>` holds an `R` and pretends to hold an `A`. Mapping over it
//! does nothing, so running a lens at `ConstK<A>` smuggles the focus out
//! untouched: that is `view`. When `R` is a [`Monoid`] the functor is also
//! [`Pointed`], which lets `preview` run prisms and report "no match" as
//! `R::empty()`.

use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;

use super::contravariant::Contravariant;
use super::functor::{Functor, Pointed};
use super::higher::{Kind1, Kinded, TypeConstructor};
use super::monoid::Monoid;

/// A value of type `R` carried through a functor position of type `A`.
///
/// # Examples
///
/// ```rust
/// use lambars_optics::typeclass::{Const, ConstK, Functor};
///
/// let constant: Const<&str, i32> = Const::new("kept");
/// let mapped = ConstK::fmap(constant, |n: i32| n * 1000);
/// assert_eq!(mapped.into_value(), "kept");
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Const<R, A> {
    value: R,
    #[cfg_attr(feature = "serde", serde(skip))]
    phantom: PhantomData<fn() -> A>,
}

impl<R, A> Const<R, A> {
    /// Wraps a value.
    #[inline]
    pub const fn new(value: R) -> Self {
        Self {
            value,
            phantom: PhantomData,
        }
    }

    /// Returns the carried value.
    #[inline]
    pub fn into_value(self) -> R {
        self.value
    }

    /// Borrows the carried value.
    #[inline]
    pub const fn value(&self) -> &R {
        &self.value
    }

    /// Changes the phantom type.
    #[inline]
    pub fn retag<B>(self) -> Const<R, B> {
        Const::new(self.value)
    }
}

impl<R: Clone, A> Clone for Const<R, A> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<R: Copy, A> Copy for Const<R, A> {}

impl<R: PartialEq, A> PartialEq for Const<R, A> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<R: Eq, A> Eq for Const<R, A> {}

impl<R: fmt::Debug, A> fmt::Debug for Const<R, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Const").field(&self.value).finish()
    }
}

/// Brand for `Const<R, _>`.
#[derive(Debug)]
pub struct ConstK<R>(Infallible, PhantomData<R>);

impl<R> Kind1 for ConstK<R> {
    type Of<A> = Const<R, A>;
}

impl<R, A> TypeConstructor for Const<R, A> {
    type Inner = A;
    type WithType<B> = Const<R, B>;
}

impl<R, A> Kinded for Const<R, A> {
    type Brand = ConstK<R>;
}

impl<R> Functor for ConstK<R> {
    #[inline]
    fn fmap<A, B, G>(fa: Const<R, A>, _function: G) -> Const<R, B>
    where
        A: 'static,
        B: 'static,
        G: Fn(A) -> B + 'static,
    {
        fa.retag()
    }
}

impl<R> Contravariant for ConstK<R> {
    #[inline]
    fn contramap<A, Z, G>(fa: Const<R, A>, _function: G) -> Const<R, Z>
    where
        A: 'static,
        Z: 'static,
        G: Fn(Z) -> A + 'static,
    {
        fa.retag()
    }
}

impl<R: Monoid> Pointed for ConstK<R> {
    #[inline]
    fn pure<A: 'static>(_value: A) -> Const<R, A> {
        Const::new(R::empty())
    }
}
