//! Iso - a lossless conversion between two representations.
//!
//! An `Iso<S, T, A, B>` is a pair `forward: S -> A`, `backward: B -> T`. It
//! is the most capable optic: it needs nothing from the profunctor beyond
//! `dimap`, so it works with every operation, and it can be turned around
//! with [`Iso::mirror`].
//!
//! # Laws
//!
//! ```text
//! view(mirror(i), view(i, s)) == s
//! view(i, view(mirror(i), a)) == a
//! ```
//!
//! # Example
//!
//! ```
//! use lambars_optics::iso;
//! use lambars_optics::optics::{review, view};
//!
//! let string_chars = iso!(
//!     |s: String| s.chars().collect::<Vec<_>>(),
//!     |chars: Vec<char>| chars.into_iter().collect::<String>()
//! );
//!
//! assert_eq!(view(&string_chars, "hi".to_string()), vec!['h', 'i']);
//! assert_eq!(review(&string_chars, vec!['o', 'k']), "ok");
//! assert_eq!(view(&string_chars.mirror(), vec!['y', 'o']), "yo");
//! ```

use std::convert::identity;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use super::lens::Lens;
use super::optic::{Optic, OpticTypes};
use super::prism::Prism;
use crate::control::Either;
use crate::typeclass::{Exchange, ExchangeK, Functor, Identity, IdentityK, Profunctor};

/// An invertible optic.
pub struct Iso<S, T, A, B> {
    forward: Arc<dyn Fn(S) -> A + Send + Sync>,
    backward: Arc<dyn Fn(B) -> T + Send + Sync>,
}

/// An iso that does not change any types.
pub type SimpleIso<S, A> = Iso<S, S, A, A>;

impl<S, T, A, B> Iso<S, T, A, B> {
    /// Creates an iso from its two directions.
    pub fn new<G, H>(forward: G, backward: H) -> Self
    where
        G: Fn(S) -> A + Send + Sync + 'static,
        H: Fn(B) -> T + Send + Sync + 'static,
    {
        Self {
            forward: Arc::new(forward),
            backward: Arc::new(backward),
        }
    }

    /// Runs the forward direction.
    #[inline]
    pub fn get(&self, source: S) -> A {
        (self.forward)(source)
    }

    /// Runs the backward direction.
    #[inline]
    pub fn reverse_get(&self, replacement: B) -> T {
        (self.backward)(replacement)
    }

    /// Swaps the two directions.
    ///
    /// The mirrored iso shares the very same function objects, so mirroring
    /// twice gives back an iso indistinguishable from the original.
    ///
    /// # Example
    ///
    /// ```
    /// use lambars_optics::optics::Iso;
    ///
    /// let celsius = Iso::new(|c: f64| c * 1.8 + 32.0, |f: f64| (f - 32.0) / 1.8);
    /// let fahrenheit = celsius.mirror();
    /// assert!((fahrenheit.get(212.0) - 100.0).abs() < 1e-9);
    /// assert!(fahrenheit.mirror().shares_functions_with(&celsius));
    /// ```
    #[must_use]
    pub fn mirror(&self) -> Iso<B, A, T, S> {
        Iso {
            forward: Arc::clone(&self.backward),
            backward: Arc::clone(&self.forward),
        }
    }

    /// Returns `true` if both isos hold the same function objects.
    #[must_use]
    pub fn shares_functions_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.forward, &other.forward) && Arc::ptr_eq(&self.backward, &other.backward)
    }

    /// Forgets invertibility, keeping a lens.
    ///
    /// The resulting setter ignores the old whole entirely.
    #[must_use]
    pub fn to_lens(&self) -> Lens<S, T, A, B>
    where
        S: Clone + 'static,
        T: 'static,
        A: 'static,
        B: 'static,
    {
        let forward = Arc::clone(&self.forward);
        let backward = Arc::clone(&self.backward);
        Lens::new(
            move |source: &S| forward(source.clone()),
            move |_: S, value: B| backward(value),
        )
    }

    /// Forgets invertibility, keeping a prism that always matches.
    #[must_use]
    pub fn to_prism(&self) -> Prism<S, T, A, B>
    where
        S: 'static,
        T: 'static,
        A: 'static,
        B: 'static,
    {
        let forward = Arc::clone(&self.forward);
        let backward = Arc::clone(&self.backward);
        Prism::new(
            move |source: S| Either::Right(forward(source)),
            move |value: B| backward(value),
        )
    }
}

impl<S: 'static, T: 'static, A: 'static, B: 'static> Iso<S, T, A, B> {
    /// Recovers the two directions by running the iso against
    /// [`Exchange`]. See [`un_iso`].
    #[allow(clippy::type_complexity)]
    #[must_use]
    pub fn un_iso(&self) -> (Rc<dyn Fn(S) -> A>, Rc<dyn Fn(B) -> T>) {
        un_iso(self)
    }
}

impl<S, A> Iso<S, S, A, A> {
    /// Creates an iso that does not change any types.
    pub fn simple<G, H>(forward: G, backward: H) -> Self
    where
        G: Fn(S) -> A + Send + Sync + 'static,
        H: Fn(A) -> S + Send + Sync + 'static,
    {
        Self::new(forward, backward)
    }
}

/// Creates an iso from its two directions.
pub fn iso<S, T, A, B, G, H>(forward: G, backward: H) -> Iso<S, T, A, B>
where
    G: Fn(S) -> A + Send + Sync + 'static,
    H: Fn(B) -> T + Send + Sync + 'static,
{
    Iso::new(forward, backward)
}

/// Takes any optic usable with [`Exchange`] apart into its two directions.
///
/// The optic is applied to the exchange of `identity` and `Identity::new`,
/// and the functor wrapper is then peeled off the backward side.
///
/// # Example
///
/// ```
/// use lambars_optics::optics::{un_iso, OpticTypes, standard_optics::swap};
///
/// let twice = swap::<i32, char, i32, char>().and_then(swap::<char, i32, char, i32>());
/// let (forward, backward) = un_iso(&twice);
/// assert_eq!(forward((1, 'a')), (1, 'a'));
/// assert_eq!(backward((2, 'b')), (2, 'b'));
/// ```
///
/// A lens is not invertible, so it cannot be taken apart:
///
/// ```compile_fail
/// use lambars_optics::optics::{un_iso, standard_optics::first};
///
/// let _ = un_iso(&first::<i32, i32, char>());
/// ```
#[allow(clippy::type_complexity)]
pub fn un_iso<O, S, T, A, B>(optic: &O) -> (Rc<dyn Fn(S) -> A>, Rc<dyn Fn(B) -> T>)
where
    O: Optic<ExchangeK<A, B>, IdentityK>
        + OpticTypes<Source = S, Updated = T, Focus = A, Replacement = B>,
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
{
    let exchange = optic.apply(Exchange::new(identity, Identity::new));
    ExchangeK::dimap_right(exchange, Identity::into_inner).into_parts()
}

impl<S, T, A, B> Clone for Iso<S, T, A, B> {
    fn clone(&self) -> Self {
        Self {
            forward: Arc::clone(&self.forward),
            backward: Arc::clone(&self.backward),
        }
    }
}

impl<S, T, A, B> fmt::Debug for Iso<S, T, A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Iso").finish_non_exhaustive()
    }
}

impl<S: 'static, T: 'static, A: 'static, B: 'static> OpticTypes for Iso<S, T, A, B> {
    type Source = S;
    type Updated = T;
    type Focus = A;
    type Replacement = B;
}

impl<P, F, S, T, A, B> Optic<P, F> for Iso<S, T, A, B>
where
    P: Profunctor,
    F: Functor,
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
    F::Of<B>: 'static,
    F::Of<T>: 'static,
{
    fn apply(&self, pafb: P::Of<A, F::Of<B>>) -> P::Of<S, F::Of<T>> {
        let forward = Arc::clone(&self.forward);
        let backward = Arc::clone(&self.backward);
        P::dimap(
            pafb,
            move |source: S| forward(source),
            move |replacement: F::Of<B>| {
                let backward = Arc::clone(&backward);
                F::fmap(replacement, move |value: B| backward(value))
            },
        )
    }
}

/// Creates an iso from its two directions.
///
/// # Syntax
///
/// ```text
/// iso!(forward_function, backward_function)
/// ```
///
/// # Example
///
/// ```
/// use lambars_optics::iso;
/// use lambars_optics::optics::view;
///
/// let swap = iso!(
///     |(a, b): (i32, String)| (b, a),
///     |(b, a): (String, i32)| (a, b)
/// );
///
/// let tuple = (42, "hello".to_string());
/// assert_eq!(view(&swap, tuple), ("hello".to_string(), 42));
/// ```
#[macro_export]
macro_rules! iso {
    ($forward:expr, $backward:expr) => {
        $crate::optics::Iso::new($forward, $backward)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::{over, preview, review, set, view};
    use rstest::rstest;

    fn negation() -> SimpleIso<i64, i64> {
        Iso::simple(|n: i64| -n, |n: i64| -n)
    }

    #[rstest]
    fn get_and_reverse_get_run_stored_functions() {
        let chars = Iso::simple(
            |s: String| s.chars().collect::<Vec<_>>(),
            |chars: Vec<char>| chars.into_iter().collect::<String>(),
        );
        assert_eq!(chars.get("ab".to_string()), vec!['a', 'b']);
        assert_eq!(chars.reverse_get(vec!['c']), "c");
    }

    #[rstest]
    fn mirror_twice_shares_functions() {
        let original = negation();
        assert!(original.mirror().mirror().shares_functions_with(&original));
        assert!(!negation().shares_functions_with(&original));
    }

    #[rstest]
    #[case(5)]
    #[case(-3)]
    fn iso_supports_every_operation(#[case] value: i64) {
        let iso = negation();
        assert_eq!(view(&iso, value), -value);
        assert_eq!(review(&iso, value), -value);
        assert_eq!(preview(&iso, value), Some(-value));
        assert_eq!(set(&iso, value, 0), -value);
        assert_eq!(over(&iso, |n| n + 1, value), value - 1);
    }

    #[rstest]
    fn un_iso_recovers_directions() {
        let (forward, backward) = iso(|n: u8| u32::from(n) * 2, |n: u32| n.to_string()).un_iso();
        assert_eq!(forward(21), 42);
        assert_eq!(backward(7), "7");
    }

    #[rstest]
    fn to_lens_setter_ignores_old_whole() {
        let lens = negation().to_lens();
        assert_eq!(lens.get(&4), -4);
        assert_eq!(lens.set(100, 4), -4);
    }

    #[rstest]
    fn to_prism_always_matches() {
        let prism = negation().to_prism();
        assert_eq!(prism.preview(8), Some(-8));
        assert_eq!(prism.review(8), -8);
    }

    fn read_through_conversions<S, A>(iso: &SimpleIso<S, A>, source: S) -> (A, Option<A>)
    where
        S: Clone + 'static,
        A: 'static,
    {
        (view(&iso.to_lens(), source.clone()), preview(&iso.to_prism(), source))
    }

    #[rstest]
    fn conversions_work_from_generic_code() {
        assert_eq!(read_through_conversions(&negation(), 6), (-6, Some(-6)));
        let length = Iso::simple(|s: String| s.len(), |n: usize| "x".repeat(n));
        assert_eq!(read_through_conversions(&length, "abc".to_string()), (3, Some(3)));
    }

    #[rstest]
    fn iso_macro_builds_iso() {
        let wrap = iso!(|n: i32| vec![n], |v: Vec<i32>| v.into_iter().sum::<i32>());
        assert_eq!(view(&wrap, 3), vec![3]);
        assert_eq!(review(&wrap, vec![1, 2]), 3);
    }
}
