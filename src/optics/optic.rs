//! The profunctor optic abstraction.
//!
//! An optic with source `S`, updated source `T`, focus `A` and replacement
//! `B` is a function
//!
//! ```text
//! P<A, F<B>>  ->  P<S, F<T>>
//! ```
//!
//! that works uniformly for every profunctor `P` and functor `F` meeting its
//! capability requirement. Rust has no rank-2 types, so the "for every"
//! is expressed by implementing [`Optic<P, F>`] for every admissible pair of
//! brands: a lens implements it for all `P: Cartesian, F: Functor`, a prism
//! for all `P: Cocartesian, F: Pointed`, an iso for all `P: Profunctor,
//! F: Functor`. An operation picks one concrete pair and the compiler checks
//! the optic supports it.
//!
//! [`OpticTypes`] carries the four types once, so composition and the
//! operations name them through associated types instead of repeating six
//! generic parameters at every use.

use std::convert::identity;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::typeclass::{Func, Functor, Profunctor};

/// The four types an optic relates.
///
/// # Examples
///
/// ```rust
/// use lambars_optics::optics::{Lens, OpticTypes};
///
/// fn focus_of<O: OpticTypes<Focus = i32>>(_optic: &O) {}
///
/// let first = Lens::simple(|pair: &(i32, char)| pair.0, |pair, value| (value, pair.1));
/// focus_of(&first);
/// ```
pub trait OpticTypes {
    /// The whole being inspected.
    type Source: 'static;
    /// The whole produced by an update.
    type Updated: 'static;
    /// The part being focused on.
    type Focus: 'static;
    /// The part written back by an update.
    type Replacement: 'static;

    /// Composes left to right: `self` focuses first, then `other` focuses
    /// further inside `self`'s focus.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_optics::optics::{OpticTypes, over, standard_optics::first};
    ///
    /// let first_of_first = first::<(i32, i32), (i32, i32), char>()
    ///     .and_then(first::<i32, i32, i32>());
    /// let updated = over(&first_of_first, |n| n + 1, ((1, 2), 'c'));
    /// assert_eq!(updated, ((2, 2), 'c'));
    /// ```
    fn and_then<O>(self, other: O) -> AndThen<Self, O>
    where
        Self: Sized,
        O: OpticTypes<Source = Self::Focus, Updated = Self::Replacement>,
    {
        AndThen::new(self, other)
    }

    /// Composes right to left: `outer` focuses first, then `self`.
    ///
    /// `inner.compose(outer)` is `outer.and_then(inner)`.
    fn compose<O>(self, outer: O) -> AndThen<O, Self>
    where
        Self: Sized,
        O: OpticTypes<Focus = Self::Source, Replacement = Self::Updated>,
    {
        AndThen::new(outer, self)
    }

    /// Pre-composes a function on the source side.
    fn map_source<R, G>(self, function: G) -> MapSource<Self, R>
    where
        Self: Sized,
        R: 'static,
        G: Fn(R) -> Self::Source + Send + Sync + 'static,
    {
        MapSource {
            optic: self,
            function: Arc::new(function),
        }
    }

    /// Post-composes a function on the updated side.
    fn map_updated<U, G>(self, function: G) -> MapUpdated<Self, U>
    where
        Self: Sized,
        U: 'static,
        G: Fn(Self::Updated) -> U + Send + Sync + 'static,
    {
        MapUpdated {
            optic: self,
            function: Arc::new(function),
        }
    }

    /// Post-composes a function on the focus.
    fn map_focus<C, G>(self, function: G) -> MapFocus<Self, C>
    where
        Self: Sized,
        C: 'static,
        G: Fn(Self::Focus) -> C + Send + Sync + 'static,
    {
        MapFocus {
            optic: self,
            function: Arc::new(function),
        }
    }

    /// Pre-composes a function on the replacement.
    fn map_replacement<Z, G>(self, function: G) -> MapReplacement<Self, Z>
    where
        Self: Sized,
        Z: 'static,
        G: Fn(Z) -> Self::Replacement + Send + Sync + 'static,
    {
        MapReplacement {
            optic: self,
            function: Arc::new(function),
        }
    }
}

/// An optic usable with the profunctor brand `P` and the functor brand `F`.
pub trait Optic<P: Profunctor, F: Functor>: OpticTypes {
    /// Lifts a transformation of the focus into a transformation of the
    /// whole.
    fn apply(
        &self,
        pafb: P::Of<Self::Focus, F::Of<Self::Replacement>>,
    ) -> P::Of<Self::Source, F::Of<Self::Updated>>;

    /// Fixes `P` and `F`, turning the optic into a plain function value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_optics::optics::{Optic, standard_optics::swap};
    /// use lambars_optics::typeclass::{Func, FunctionK, Identity, IdentityK};
    ///
    /// let run = Optic::<FunctionK, IdentityK>::monomorphize(swap::<i32, char, i32, char>());
    /// let lifted = run.call(Func::new(|(c, n): (char, i32)| Identity::new((c, n * 2))));
    /// assert_eq!(lifted.call((4, 'x')), Identity::new((8, 'x')));
    /// ```
    #[allow(clippy::type_complexity)]
    fn monomorphize(
        self,
    ) -> Func<P::Of<Self::Focus, F::Of<Self::Replacement>>, P::Of<Self::Source, F::Of<Self::Updated>>>
    where
        Self: Sized + 'static,
    {
        Func::new(move |pafb| self.apply(pafb))
    }
}

// =============================================================================
// Composition
// =============================================================================

/// Two optics applied one after the other.
///
/// `AndThen` supports a `(P, F)` pair exactly when both constituents do, so
/// composing a lens with a prism yields something that can be previewed and
/// updated but not viewed.
#[derive(Debug, Clone)]
pub struct AndThen<O1, O2> {
    first: O1,
    second: O2,
}

impl<O1, O2> AndThen<O1, O2> {
    /// Composes `first` (outer) with `second` (inner).
    pub const fn new(first: O1, second: O2) -> Self {
        Self { first, second }
    }

    /// Returns the two constituents.
    pub fn into_parts(self) -> (O1, O2) {
        (self.first, self.second)
    }
}

impl<O1, O2> OpticTypes for AndThen<O1, O2>
where
    O1: OpticTypes,
    O2: OpticTypes<Source = <O1 as OpticTypes>::Focus, Updated = <O1 as OpticTypes>::Replacement>,
{
    type Source = O1::Source;
    type Updated = O1::Updated;
    type Focus = O2::Focus;
    type Replacement = O2::Replacement;
}

impl<P, F, O1, O2> Optic<P, F> for AndThen<O1, O2>
where
    P: Profunctor,
    F: Functor,
    O1: Optic<P, F>,
    O2: Optic<P, F>
        + OpticTypes<Source = <O1 as OpticTypes>::Focus, Updated = <O1 as OpticTypes>::Replacement>,
{
    fn apply(
        &self,
        pafb: P::Of<Self::Focus, F::Of<Self::Replacement>>,
    ) -> P::Of<Self::Source, F::Of<Self::Updated>> {
        self.first.apply(self.second.apply(pafb))
    }
}

// =============================================================================
// Identity
// =============================================================================

/// The optic that focuses on the whole value; the unit of composition.
pub struct IdentityOptic<A, B> {
    phantom: PhantomData<fn(A) -> B>,
}

impl<A, B> IdentityOptic<A, B> {
    /// Creates the identity optic.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phantom: PhantomData,
        }
    }
}

impl<A, B> Default for IdentityOptic<A, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, B> Clone for IdentityOptic<A, B> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<A, B> fmt::Debug for IdentityOptic<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("IdentityOptic")
    }
}

impl<A: 'static, B: 'static> OpticTypes for IdentityOptic<A, B> {
    type Source = A;
    type Updated = B;
    type Focus = A;
    type Replacement = B;
}

impl<P, F, A, B> Optic<P, F> for IdentityOptic<A, B>
where
    P: Profunctor,
    F: Functor,
    A: 'static,
    B: 'static,
    F::Of<B>: 'static,
{
    fn apply(&self, pafb: P::Of<A, F::Of<B>>) -> P::Of<A, F::Of<B>> {
        P::dimap(pafb, identity, identity)
    }
}

// =============================================================================
// Monomorphic optics
// =============================================================================

/// An optic built from a single function for one fixed `(P, F)` pair.
///
/// # Examples
///
/// ```rust
/// use lambars_optics::optics::{optic, over, FnOptic};
/// use lambars_optics::typeclass::{Func, FunctionK, Functor, Identity, IdentityK};
///
/// // Focus on the length of a string; writing a length pads with '.'.
/// let length: FnOptic<FunctionK, IdentityK, String, String, usize, usize> =
///     optic(|pafb: Func<usize, Identity<usize>>| {
///         Func::new(move |s: String| {
///             IdentityK::fmap(pafb.call(s.len()), move |n: usize| format!("{s:.<n$}"))
///         })
///     });
/// assert_eq!(over(&length, |n| n + 2, "ab".to_string()), "ab..");
/// ```
pub struct FnOptic<P: Profunctor, F: Functor, S, T, A, B> {
    #[allow(clippy::type_complexity)]
    function: Arc<dyn Fn(P::Of<A, F::Of<B>>) -> P::Of<S, F::Of<T>> + Send + Sync>,
}

impl<P: Profunctor, F: Functor, S, T, A, B> FnOptic<P, F, S, T, A, B> {
    /// Wraps a function from `P<A, F<B>>` to `P<S, F<T>>`.
    pub fn new<G>(function: G) -> Self
    where
        G: Fn(P::Of<A, F::Of<B>>) -> P::Of<S, F::Of<T>> + Send + Sync + 'static,
    {
        Self {
            function: Arc::new(function),
        }
    }
}

/// Wraps a function from `P<A, F<B>>` to `P<S, F<T>>` as an optic.
pub fn optic<P, F, S, T, A, B, G>(function: G) -> FnOptic<P, F, S, T, A, B>
where
    P: Profunctor,
    F: Functor,
    G: Fn(P::Of<A, F::Of<B>>) -> P::Of<S, F::Of<T>> + Send + Sync + 'static,
{
    FnOptic::new(function)
}

impl<P: Profunctor, F: Functor, S, T, A, B> Clone for FnOptic<P, F, S, T, A, B> {
    fn clone(&self) -> Self {
        Self {
            function: Arc::clone(&self.function),
        }
    }
}

impl<P: Profunctor, F: Functor, S, T, A, B> fmt::Debug for FnOptic<P, F, S, T, A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("FnOptic").finish_non_exhaustive()
    }
}

impl<P, F, S, T, A, B> OpticTypes for FnOptic<P, F, S, T, A, B>
where
    P: Profunctor,
    F: Functor,
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
{
    type Source = S;
    type Updated = T;
    type Focus = A;
    type Replacement = B;
}

impl<P, F, S, T, A, B> Optic<P, F> for FnOptic<P, F, S, T, A, B>
where
    P: Profunctor,
    F: Functor,
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
{
    fn apply(&self, pafb: P::Of<A, F::Of<B>>) -> P::Of<S, F::Of<T>> {
        (self.function)(pafb)
    }
}

// =============================================================================
// Remapping adapters
// =============================================================================

/// An optic whose source is reached through a function `R -> S`.
pub struct MapSource<O: OpticTypes, R> {
    optic: O,
    function: Arc<dyn Fn(R) -> O::Source + Send + Sync>,
}

/// An optic whose updated whole is passed through a function `T -> U`.
pub struct MapUpdated<O: OpticTypes, U> {
    optic: O,
    function: Arc<dyn Fn(O::Updated) -> U + Send + Sync>,
}

/// An optic whose focus is passed through a function `A -> C`.
pub struct MapFocus<O: OpticTypes, C> {
    optic: O,
    function: Arc<dyn Fn(O::Focus) -> C + Send + Sync>,
}

/// An optic whose replacement is produced by a function `Z -> B`.
pub struct MapReplacement<O: OpticTypes, Z> {
    optic: O,
    function: Arc<dyn Fn(Z) -> O::Replacement + Send + Sync>,
}

macro_rules! remap_common_impls {
    ($name:ident, $extra:ident) => {
        impl<O: OpticTypes + Clone, $extra> Clone for $name<O, $extra> {
            fn clone(&self) -> Self {
                Self {
                    optic: self.optic.clone(),
                    function: Arc::clone(&self.function),
                }
            }
        }

        impl<O: OpticTypes + fmt::Debug, $extra> fmt::Debug for $name<O, $extra> {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter
                    .debug_struct(stringify!($name))
                    .field("optic", &self.optic)
                    .finish_non_exhaustive()
            }
        }
    };
}

remap_common_impls!(MapSource, R);
remap_common_impls!(MapUpdated, U);
remap_common_impls!(MapFocus, C);
remap_common_impls!(MapReplacement, Z);

impl<O: OpticTypes, R: 'static> OpticTypes for MapSource<O, R> {
    type Source = R;
    type Updated = O::Updated;
    type Focus = O::Focus;
    type Replacement = O::Replacement;
}

impl<P, F, O, R> Optic<P, F> for MapSource<O, R>
where
    P: Profunctor,
    F: Functor,
    O: Optic<P, F>,
    R: 'static,
    F::Of<O::Updated>: 'static,
{
    fn apply(
        &self,
        pafb: P::Of<Self::Focus, F::Of<Self::Replacement>>,
    ) -> P::Of<R, F::Of<Self::Updated>> {
        let function = Arc::clone(&self.function);
        P::dimap_left(self.optic.apply(pafb), move |r: R| function(r))
    }
}

impl<O: OpticTypes, U: 'static> OpticTypes for MapUpdated<O, U> {
    type Source = O::Source;
    type Updated = U;
    type Focus = O::Focus;
    type Replacement = O::Replacement;
}

impl<P, F, O, U> Optic<P, F> for MapUpdated<O, U>
where
    P: Profunctor,
    F: Functor,
    O: Optic<P, F>,
    U: 'static,
    F::Of<O::Updated>: 'static,
    F::Of<U>: 'static,
{
    fn apply(
        &self,
        pafb: P::Of<Self::Focus, F::Of<Self::Replacement>>,
    ) -> P::Of<Self::Source, F::Of<U>> {
        let function = Arc::clone(&self.function);
        P::dimap_right(self.optic.apply(pafb), move |ft: F::Of<O::Updated>| {
            let function = Arc::clone(&function);
            F::fmap(ft, move |t| function(t))
        })
    }
}

impl<O: OpticTypes, C: 'static> OpticTypes for MapFocus<O, C> {
    type Source = O::Source;
    type Updated = O::Updated;
    type Focus = C;
    type Replacement = O::Replacement;
}

impl<P, F, O, C> Optic<P, F> for MapFocus<O, C>
where
    P: Profunctor,
    F: Functor,
    O: Optic<P, F>,
    C: 'static,
    F::Of<O::Replacement>: 'static,
{
    fn apply(
        &self,
        pcfb: P::Of<C, F::Of<Self::Replacement>>,
    ) -> P::Of<Self::Source, F::Of<Self::Updated>> {
        let function = Arc::clone(&self.function);
        self.optic
            .apply(P::dimap_left(pcfb, move |a: O::Focus| function(a)))
    }
}

impl<O: OpticTypes, Z: 'static> OpticTypes for MapReplacement<O, Z> {
    type Source = O::Source;
    type Updated = O::Updated;
    type Focus = O::Focus;
    type Replacement = Z;
}

impl<P, F, O, Z> Optic<P, F> for MapReplacement<O, Z>
where
    P: Profunctor,
    F: Functor,
    O: Optic<P, F>,
    Z: 'static,
    F::Of<Z>: 'static,
    F::Of<O::Replacement>: 'static,
{
    fn apply(
        &self,
        pafz: P::Of<Self::Focus, F::Of<Z>>,
    ) -> P::Of<Self::Source, F::Of<Self::Updated>> {
        let function = Arc::clone(&self.function);
        self.optic.apply(P::dimap_right(pafz, move |fz: F::Of<Z>| {
            let function = Arc::clone(&function);
            F::fmap(fz, move |z| function(z))
        }))
    }
}
