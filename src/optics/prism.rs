//! Prism - a partial focus on one alternative of a sum.
//!
//! A `Prism<S, T, A, B>` is built from a matcher `S -> Either<T, A>` and a
//! builder `B -> T`. The matcher answers `Right(focus)` when the alternative
//! is present and `Left(whole)` (already in the updated type) when it is not.
//! As an optic it needs a [`Cocartesian`] profunctor to let the `Left` case
//! through, and a [`Pointed`] functor to lift it back into the result.
//!
//! # Laws
//!
//! ```text
//! preview(p, review(p, b)) == Some(b)
//! preview(p, s) == Some(a)  implies  preview(p, review(p, a)) == Some(a)
//! ```
//!
//! A prism need not be surjective, so `review(p, a)` may differ from the
//! `s` it was previewed from.
//!
//! # Example
//!
//! ```
//! use lambars_optics::prism;
//! use lambars_optics::optics::{over, preview, review};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Shape {
//!     Circle(f64),
//!     Square(f64),
//! }
//!
//! let circle = prism!(Shape, Circle);
//!
//! assert_eq!(preview(&circle, Shape::Circle(5.0)), Some(5.0));
//! assert_eq!(preview(&circle, Shape::Square(3.0)), None);
//! assert_eq!(review(&circle, 1.0), Shape::Circle(1.0));
//! assert_eq!(over(&circle, |r| r * 2.0, Shape::Square(3.0)), Shape::Square(3.0));
//! ```
//!
//! A prism cannot be viewed, since the focus may be missing:
//!
//! ```compile_fail
//! use lambars_optics::optics::{view, standard_optics::some};
//!
//! let _: i32 = view(&some::<i32, i32>(), Some(1));
//! ```

use std::fmt;
use std::sync::Arc;

use super::optic::{Optic, OpticTypes};
use crate::control::Either;
use crate::typeclass::{Cocartesian, Pointed};

/// A partial optic made of a matcher and a builder.
pub struct Prism<S, T, A, B> {
    matcher: Arc<dyn Fn(S) -> Either<T, A> + Send + Sync>,
    builder: Arc<dyn Fn(B) -> T + Send + Sync>,
}

/// A prism that does not change any types.
pub type SimplePrism<S, A> = Prism<S, S, A, A>;

impl<S, T, A, B> Prism<S, T, A, B> {
    /// Creates a prism from a matcher and a builder.
    ///
    /// # Example
    ///
    /// ```
    /// use lambars_optics::control::Either;
    /// use lambars_optics::optics::{Prism, preview, review};
    ///
    /// let even = Prism::new(
    ///     |n: u32| if n % 2 == 0 { Either::Right(n / 2) } else { Either::Left(n) },
    ///     |half: u32| half * 2,
    /// );
    /// assert_eq!(preview(&even, 10), Some(5));
    /// assert_eq!(preview(&even, 7), None);
    /// assert_eq!(review(&even, 4), 8);
    /// ```
    pub fn new<G, H>(matcher: G, builder: H) -> Self
    where
        G: Fn(S) -> Either<T, A> + Send + Sync + 'static,
        H: Fn(B) -> T + Send + Sync + 'static,
    {
        Self {
            matcher: Arc::new(matcher),
            builder: Arc::new(builder),
        }
    }

    /// Runs the matcher.
    #[inline]
    pub fn matching(&self, source: S) -> Either<T, A> {
        (self.matcher)(source)
    }

    /// Returns the focus if the alternative is present.
    #[inline]
    pub fn preview(&self, source: S) -> Option<A> {
        self.matching(source).right()
    }

    /// Builds a whole from a replacement.
    #[inline]
    pub fn review(&self, value: B) -> T {
        (self.builder)(value)
    }
}

impl<S: 'static, A: 'static> Prism<S, S, A, A> {
    /// Creates a prism from a partial projection and a builder.
    ///
    /// When `partial` returns `None` the source is handed back unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use lambars_optics::optics::{Prism, preview, set};
    ///
    /// let digit = Prism::simple(|c: &char| c.to_digit(10), |d: u32| char::from_digit(d, 10).unwrap_or('?'));
    /// assert_eq!(preview(&digit, '7'), Some(7));
    /// assert_eq!(set(&digit, 3, 'x'), 'x');
    /// assert_eq!(set(&digit, 3, '9'), '3');
    /// ```
    pub fn simple<G, H>(partial: G, builder: H) -> Self
    where
        G: Fn(&S) -> Option<A> + Send + Sync + 'static,
        H: Fn(A) -> S + Send + Sync + 'static,
    {
        Self::new(
            move |source: S| match partial(&source) {
                Some(focus) => Either::Right(focus),
                None => Either::Left(source),
            },
            builder,
        )
    }
}

/// Creates a prism from a matcher and a builder.
pub fn prism<S, T, A, B, G, H>(matcher: G, builder: H) -> Prism<S, T, A, B>
where
    G: Fn(S) -> Either<T, A> + Send + Sync + 'static,
    H: Fn(B) -> T + Send + Sync + 'static,
{
    Prism::new(matcher, builder)
}

impl<S, T, A, B> Clone for Prism<S, T, A, B> {
    fn clone(&self) -> Self {
        Self {
            matcher: Arc::clone(&self.matcher),
            builder: Arc::clone(&self.builder),
        }
    }
}

impl<S, T, A, B> fmt::Debug for Prism<S, T, A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Prism").finish_non_exhaustive()
    }
}

impl<S: 'static, T: 'static, A: 'static, B: 'static> OpticTypes for Prism<S, T, A, B> {
    type Source = S;
    type Updated = T;
    type Focus = A;
    type Replacement = B;
}

impl<P, F, S, T, A, B> Optic<P, F> for Prism<S, T, A, B>
where
    P: Cocartesian,
    F: Pointed,
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
    F::Of<B>: 'static,
    F::Of<T>: 'static,
{
    fn apply(&self, pafb: P::Of<A, F::Of<B>>) -> P::Of<S, F::Of<T>> {
        let matcher = Arc::clone(&self.matcher);
        let builder = Arc::clone(&self.builder);
        P::dimap(
            P::costrengthen::<A, F::Of<B>, T>(pafb),
            move |source: S| matcher(source),
            move |outcome: Either<T, F::Of<B>>| match outcome {
                Either::Left(unmatched) => F::pure(unmatched),
                Either::Right(replacement) => {
                    let builder = Arc::clone(&builder);
                    F::fmap(replacement, move |value: B| builder(value))
                }
            },
        )
    }
}

/// Creates a prism for a single-field enum variant.
///
/// # Syntax
///
/// ```text
/// prism!(EnumType, VariantName)
/// prism!(module::EnumType<Args>, VariantName)
/// ```
///
/// # Example
///
/// ```
/// use lambars_optics::prism;
/// use lambars_optics::optics::{preview, review};
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Tree<T> {
///     Leaf(T),
///     Node(Vec<Tree<T>>),
/// }
///
/// let leaf = prism!(Tree<i32>, Leaf);
/// assert_eq!(preview(&leaf, Tree::Leaf(3)), Some(3));
/// assert_eq!(preview(&leaf, Tree::Node(vec![])), None);
/// assert_eq!(review(&leaf, 8), Tree::Leaf(8));
/// ```
#[macro_export]
macro_rules! prism {
    ($enum_type:ident, $variant:ident) => {
        $crate::optics::Prism::<$enum_type, $enum_type, _, _>::new(
            |source: $enum_type| match source {
                $enum_type::$variant(value) => $crate::control::Either::Right(value),
                #[allow(unreachable_patterns)]
                other => $crate::control::Either::Left(other),
            },
            $enum_type::$variant,
        )
    };
    ($enum_type:ident < $($generic:tt),+ >, $variant:ident) => {
        $crate::optics::Prism::<$enum_type<$($generic),+>, $enum_type<$($generic),+>, _, _>::new(
            |source: $enum_type<$($generic),+>| match source {
                $enum_type::$variant(value) => $crate::control::Either::Right(value),
                #[allow(unreachable_patterns)]
                other => $crate::control::Either::Left(other),
            },
            $enum_type::$variant,
        )
    };
    ($($segment:ident)::+ $(< $($generic:tt),+ >)?, $variant:ident) => {
        $crate::optics::Prism::<
            $($segment)::+ $(<$($generic),+>)?,
            $($segment)::+ $(<$($generic),+>)?,
            _,
            _,
        >::new(
            |source: $($segment)::+ $(<$($generic),+>)?| match source {
                $($segment)::+::$variant(value) => $crate::control::Either::Right(value),
                #[allow(unreachable_patterns)]
                other => $crate::control::Either::Left(other),
            },
            $($segment)::+::$variant,
        )
    };
}
