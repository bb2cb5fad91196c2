//! Contravariant type class - mapping over an input position.
//!
//! Where a [`Functor`](super::Functor) transforms what a structure *produces*,
//! a `Contravariant` transforms what it *consumes*: given `F<A>` and a
//! function `Z -> A`, it yields `F<Z>` by pre-composing.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! F::contramap(fa, |x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! F::contramap(F::contramap(fa, f), g) == F::contramap(fa, |x| f(g(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambars_optics::typeclass::{Contravariant, Func, FunctionTo};
//!
//! let length: Func<String, usize> = Func::new(|s: String| s.len());
//! let length_of_number = FunctionTo::contramap(length, |n: i32| n.to_string());
//! assert_eq!(length_of_number.call(12345), 5);
//! ```

use super::higher::Kind1;

/// A type class for brands that are contravariant in their argument.
pub trait Contravariant: Kind1 {
    /// Pre-composes a function onto the consumed position.
    fn contramap<A, Z, G>(fa: Self::Of<A>, function: G) -> Self::Of<Z>
    where
        A: 'static,
        Z: 'static,
        G: Fn(Z) -> A + 'static;
}
