//! The tagged profunctor - a value labelled with a phantom input type.
//!
//! `Tagged<A, B>` holds a `B` and ignores its input entirely. Running a prism
//! or an iso at `TaggedK` therefore pushes a replacement value *backwards*
//! through the optic, which is exactly `review`.

use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;

use super::functor::Functor;
use super::higher::{Kind1, Kind2, Kinded, TypeConstructor};
use super::profunctor::Profunctor;
use super::strong::Cocartesian;
use crate::control::Either;

/// A `B` tagged with an input type `A` that is never used.
///
/// # Examples
///
/// ```rust
/// use lambars_optics::typeclass::{Profunctor, Tagged, TaggedK};
///
/// let tagged: Tagged<String, i32> = Tagged::new(20);
/// let mapped = TaggedK::dimap(tagged, |n: u8| n.to_string(), |n| n + 1);
/// assert_eq!(mapped.into_value(), 21);
/// ```
pub struct Tagged<A, B> {
    value: B,
    input: PhantomData<fn(A)>,
}

impl<A, B> Tagged<A, B> {
    /// Tags a value.
    #[inline]
    pub const fn new(value: B) -> Self {
        Self {
            value,
            input: PhantomData,
        }
    }

    /// Returns the tagged value.
    #[inline]
    pub fn into_value(self) -> B {
        self.value
    }

    /// Borrows the tagged value.
    #[inline]
    pub const fn value(&self) -> &B {
        &self.value
    }

    /// Changes the phantom input type.
    #[inline]
    pub fn retag<Z>(self) -> Tagged<Z, B> {
        Tagged::new(self.value)
    }
}

impl<A, B: Clone> Clone for Tagged<A, B> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<A, B: PartialEq> PartialEq for Tagged<A, B> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<A, B: Eq> Eq for Tagged<A, B> {}

impl<A, B: fmt::Debug> fmt::Debug for Tagged<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Tagged").field(&self.value).finish()
    }
}

/// Brand for [`Tagged`] as a two-argument constructor.
#[derive(Debug)]
pub enum TaggedK {}

/// Brand for `Tagged<A, _>`.
#[derive(Debug)]
pub struct TaggedFrom<A>(Infallible, PhantomData<A>);

impl Kind2 for TaggedK {
    type Of<A, B> = Tagged<A, B>;
}

impl<A> Kind1 for TaggedFrom<A> {
    type Of<B> = Tagged<A, B>;
}

impl<A, B> TypeConstructor for Tagged<A, B> {
    type Inner = B;
    type WithType<C> = Tagged<A, C>;
}

impl<A, B> Kinded for Tagged<A, B> {
    type Brand = TaggedFrom<A>;
}

impl Profunctor for TaggedK {
    #[inline]
    fn dimap<A, B, Z, C, L, R>(pab: Tagged<A, B>, _left: L, right: R) -> Tagged<Z, C>
    where
        A: 'static,
        B: 'static,
        Z: 'static,
        C: 'static,
        L: Fn(Z) -> A + 'static,
        R: Fn(B) -> C + 'static,
    {
        Tagged::new(right(pab.value))
    }
}

impl Cocartesian for TaggedK {
    #[inline]
    fn costrengthen<A, B, Z>(pab: Tagged<A, B>) -> Tagged<Either<Z, A>, Either<Z, B>>
    where
        A: 'static,
        B: 'static,
        Z: 'static,
    {
        Tagged::new(Either::Right(pab.value))
    }
}

impl<X> Functor for TaggedFrom<X> {
    #[inline]
    fn fmap<A, B, G>(fa: Tagged<X, A>, function: G) -> Tagged<X, B>
    where
        A: 'static,
        B: 'static,
        G: Fn(A) -> B + 'static,
    {
        Tagged::new(function(fa.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn dimap_ignores_left_function() {
        let tagged: Tagged<i32, &str> = Tagged::new("v");
        let mapped: Tagged<String, usize> =
            TaggedK::dimap(tagged, |_: String| unreachable!(), str::len);
        assert_eq!(mapped, Tagged::new(1));
    }

    #[rstest]
    fn costrengthen_is_right() {
        let tagged: Tagged<u8, u8> = Tagged::new(7);
        let chosen = TaggedK::costrengthen::<u8, u8, String>(tagged);
        assert_eq!(chosen.into_value(), Either::Right(7));
    }

    #[rstest]
    fn dimap_right_agrees_with_fmap() {
        let tagged: Tagged<(), i32> = Tagged::new(4);
        let by_dimap = TaggedK::dimap_right(tagged.clone(), |n: i32| n * n);
        let by_fmap = TaggedFrom::fmap(tagged, |n: i32| n * n);
        assert_eq!(by_dimap, by_fmap);
    }

    #[rstest]
    fn retag_keeps_value() {
        let tagged: Tagged<u8, char> = Tagged::new('z');
        let retagged: Tagged<String, char> = tagged.retag();
        assert_eq!(retagged.value(), &'z');
        assert_eq!(format!("{retagged:?}"), "Tagged('z')");
    }
}
