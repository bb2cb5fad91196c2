//! Type class traits and the witnesses optics run against.
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT). This
//! module uses Generic Associated Types to emulate them through *brands*:
//! uninhabited marker types whose `Of<..>` associated type applies a type
//! constructor. Every capability trait below is implemented on a brand.
//!
//! - [`TypeConstructor`], [`Kind1`], [`Kind2`], [`Kinded`]
//!
//! ## Capabilities
//!
//! - [`Functor`], [`Pointed`]: mapping the output of a one-argument brand,
//!   and lifting a plain value into it
//! - [`Contravariant`]: mapping the input of a one-argument brand
//! - [`Bifunctor`]: mapping both sides of a two-argument brand
//! - [`Profunctor`]: input contravariantly, output covariantly
//! - [`Cartesian`], [`Cocartesian`]: profunctors that thread products and
//!   sums
//!
//! ## Witnesses
//!
//! - [`Identity`] ([`IdentityK`]) and [`Const`] ([`ConstK`]): the functors
//!   used by `over`/`set` and by `view`/`preview`
//! - [`Func`] ([`FunctionK`]), [`Tagged`] ([`TaggedK`]) and [`Exchange`]
//!   ([`ExchangeK`]): the profunctors used by every operation, by `review`,
//!   and by `un_iso`
//!
//! ## Algebraic Structures
//!
//! - [`Semigroup`], [`Monoid`] and the wrapper [`First`]
//!
//! # Examples
//!
//! ```rust
//! use lambars_optics::typeclass::{Cartesian, Func, FunctionK, Profunctor};
//!
//! let length = Func::new(|s: String| s.len());
//! let annotated = FunctionK::dimap(
//!     FunctionK::strengthen::<String, usize, &str>(length),
//!     |s: &'static str| (s, s.to_uppercase()),
//!     |(original, len)| format!("{original}:{len}"),
//! );
//! assert_eq!(annotated.call("abc"), "abc:3");
//! ```

mod bifunctor;
mod constant;
mod contravariant;
mod exchange;
mod function;
mod functor;
mod higher;
mod identity;
mod monoid;
mod profunctor;
mod semigroup;
mod strong;
mod tagged;
mod wrappers;

pub use bifunctor::{Bifunctor, EitherK, PairK, ResultBiK};
pub use constant::{Const, ConstK};
pub use contravariant::Contravariant;
pub use exchange::{Exchange, ExchangeK, ExchangeLeft, ExchangeRight};
pub use function::{Func, FunctionFrom, FunctionK, FunctionTo};
pub use functor::{Functor, Pointed};
pub use higher::{Kind1, Kind2, Kinded, OptionK, ResultK, TypeConstructor, VecK};
pub use identity::{Identity, IdentityK};
pub use monoid::Monoid;
pub use profunctor::Profunctor;
pub use semigroup::Semigroup;
pub use strong::{Cartesian, Cocartesian};
pub use tagged::{Tagged, TaggedFrom, TaggedK};
pub use wrappers::First;
