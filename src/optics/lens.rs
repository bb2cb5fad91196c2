//! Lens - a total focus on one part of a product.
//!
//! A `Lens<S, T, A, B>` is built from a getter `&S -> A` and a setter
//! `(S, B) -> T`. As an optic it only needs a [`Cartesian`] profunctor (to
//! carry the whole alongside the part) and a [`Functor`] (to rebuild the
//! whole around whatever the part became), so it can be run with every
//! operation except `review`.
//!
//! # Laws
//!
//! For a lawful lens `l`:
//!
//! ## `GetPut` Law
//!
//! ```text
//! set(l, view(l, s), s) == s
//! ```
//!
//! ## `PutGet` Law
//!
//! ```text
//! view(l, set(l, b, s)) == b
//! ```
//!
//! ## `PutPut` Law
//!
//! ```text
//! set(l, b2, set(l, b1, s)) == set(l, b2, s)
//! ```
//!
//! # Example
//!
//! ```
//! use lambars_optics::lens;
//! use lambars_optics::optics::{over, set, view};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, age: u32 }
//!
//! let name = lens!(Person, name);
//! let alice = Person { name: "Alice".to_string(), age: 30 };
//!
//! assert_eq!(view(&name, alice.clone()), "Alice");
//! let bob = set(&name, "Bob".to_string(), alice.clone());
//! assert_eq!(bob, Person { name: "Bob".to_string(), age: 30 });
//! assert_eq!(over(&name, |n| n.to_uppercase(), alice).name, "ALICE");
//! ```

use std::fmt;
use std::sync::Arc;

use super::operations::{set, view};
use super::optic::{Optic, OpticTypes};
use crate::typeclass::{Cartesian, ConstK, FunctionK, Functor, IdentityK};

/// A total optic made of a getter and a setter.
///
/// Cloning a lens is cheap: both functions are shared.
pub struct Lens<S, T, A, B> {
    getter: Arc<dyn Fn(&S) -> A + Send + Sync>,
    setter: Arc<dyn Fn(S, B) -> T + Send + Sync>,
}

/// A lens that does not change any types.
pub type SimpleLens<S, A> = Lens<S, S, A, A>;

impl<S, T, A, B> Lens<S, T, A, B> {
    /// Creates a lens from a getter and a setter.
    ///
    /// # Example
    ///
    /// ```
    /// use lambars_optics::optics::Lens;
    ///
    /// // A type-changing lens on the first component.
    /// let first = Lens::new(
    ///     |pair: &(i32, char)| pair.0,
    ///     |pair: (i32, char), text: String| (text, pair.1),
    /// );
    /// assert_eq!(first.set((1, 'x'), "one".to_string()), ("one".to_string(), 'x'));
    /// ```
    pub fn new<G, H>(getter: G, setter: H) -> Self
    where
        G: Fn(&S) -> A + Send + Sync + 'static,
        H: Fn(S, B) -> T + Send + Sync + 'static,
    {
        Self {
            getter: Arc::new(getter),
            setter: Arc::new(setter),
        }
    }

    /// Reads the focus.
    #[inline]
    pub fn get(&self, source: &S) -> A {
        (self.getter)(source)
    }

    /// Replaces the focus.
    #[inline]
    pub fn set(&self, source: S, value: B) -> T {
        (self.setter)(source, value)
    }

    /// Replaces the focus with a function of its current value.
    pub fn over<F>(&self, source: S, function: F) -> T
    where
        F: FnOnce(A) -> B,
    {
        let focus = self.get(&source);
        self.set(source, function(focus))
    }
}

impl<S, A> Lens<S, S, A, A> {
    /// Creates a lens that does not change any types.
    pub fn simple<G, H>(getter: G, setter: H) -> Self
    where
        G: Fn(&S) -> A + Send + Sync + 'static,
        H: Fn(S, A) -> S + Send + Sync + 'static,
    {
        Self::new(getter, setter)
    }
}

impl<S, T, A, B> Lens<S, T, A, B>
where
    S: Clone + 'static,
    T: 'static,
    A: 'static,
    B: Clone + 'static,
{
    /// Reifies any optic that supports both `view` and `set` as a lens.
    ///
    /// # Example
    ///
    /// ```
    /// use lambars_optics::optics::{Lens, OpticTypes, standard_optics::{first, second}};
    ///
    /// let composed = first::<(u8, u8), (u8, u8), ()>().and_then(second::<u8, u8, u8>());
    /// let lens = Lens::from_optic(composed);
    /// assert_eq!(lens.get(&((1, 2), ())), 2);
    /// assert_eq!(lens.set(((1, 2), ()), 9), ((1, 9), ()));
    /// ```
    pub fn from_optic<O>(optic: O) -> Self
    where
        O: Optic<FunctionK, ConstK<A>>
            + Optic<FunctionK, IdentityK>
            + OpticTypes<Source = S, Updated = T, Focus = A, Replacement = B>
            + Send
            + Sync
            + 'static,
    {
        let shared = Arc::new(optic);
        let for_setter = Arc::clone(&shared);
        Self::new(
            move |source: &S| view(&*shared, source.clone()),
            move |source: S, value: B| set(&*for_setter, value, source),
        )
    }
}

/// Creates a lens from a getter and a setter.
pub fn lens<S, T, A, B, G, H>(getter: G, setter: H) -> Lens<S, T, A, B>
where
    G: Fn(&S) -> A + Send + Sync + 'static,
    H: Fn(S, B) -> T + Send + Sync + 'static,
{
    Lens::new(getter, setter)
}

impl<S, T, A, B> Clone for Lens<S, T, A, B> {
    fn clone(&self) -> Self {
        Self {
            getter: Arc::clone(&self.getter),
            setter: Arc::clone(&self.setter),
        }
    }
}

impl<S, T, A, B> fmt::Debug for Lens<S, T, A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Lens").finish_non_exhaustive()
    }
}

impl<S: 'static, T: 'static, A: 'static, B: 'static> OpticTypes for Lens<S, T, A, B> {
    type Source = S;
    type Updated = T;
    type Focus = A;
    type Replacement = B;
}

impl<P, F, S, T, A, B> Optic<P, F> for Lens<S, T, A, B>
where
    P: Cartesian,
    F: Functor,
    S: Clone + 'static,
    T: 'static,
    A: 'static,
    B: 'static,
    F::Of<B>: 'static,
    F::Of<T>: 'static,
{
    fn apply(&self, pafb: P::Of<A, F::Of<B>>) -> P::Of<S, F::Of<T>> {
        let getter = Arc::clone(&self.getter);
        let setter = Arc::clone(&self.setter);
        P::dimap(
            P::strengthen::<A, F::Of<B>, S>(pafb),
            move |source: S| {
                let focus = getter(&source);
                (source, focus)
            },
            move |(source, replacement): (S, F::Of<B>)| {
                let setter = Arc::clone(&setter);
                F::fmap(replacement, move |value: B| setter(source.clone(), value))
            },
        )
    }
}

/// Creates a lens for a struct field.
///
/// The field type must be `Clone`, because the getter hands out an owned
/// copy of the focus.
///
/// # Syntax
///
/// ```text
/// lens!(StructType, field_name)
/// ```
///
/// # Example
///
/// ```
/// use lambars_optics::lens;
/// use lambars_optics::optics::{over, view};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = lens!(Point, x);
/// let point = Point { x: 10, y: 20 };
///
/// assert_eq!(view(&x_lens, point.clone()), 10);
/// assert_eq!(over(&x_lens, |x| x * 2, point), Point { x: 20, y: 20 });
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::Lens::simple(
            |source: &$struct_type| ::std::clone::Clone::clone(&source.$field),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::Lens::simple(
            |source: &$struct_type<$($generic),+>| ::std::clone::Clone::clone(&source.$field),
            |mut source: $struct_type<$($generic),+>, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::Lens::simple(
            |source: &$struct_type| ::std::clone::Clone::clone(&source.$field),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
}
