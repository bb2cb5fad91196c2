//! The operations that run an optic.
//!
//! Each operation picks one profunctor and one functor, builds the matching
//! witness around the caller's value or function, and hands it to
//! [`Optic::apply`]:
//!
//! | operation | profunctor    | functor              |
//! |-----------|---------------|----------------------|
//! | `view`    | [`FunctionK`] | [`ConstK<A>`]        |
//! | `preview` | [`FunctionK`] | `ConstK<First<A>>`   |
//! | `set`     | [`FunctionK`] | [`IdentityK`]        |
//! | `over`    | [`FunctionK`] | [`IdentityK`]        |
//! | `review`  | [`TaggedK`]   | [`IdentityK`]        |
//!
//! An optic that does not implement [`Optic`] for the required pair is
//! rejected at compile time. Reviewing through a lens, for instance:
//!
//! ```compile_fail
//! use lambars_optics::optics::{review, standard_optics::first};
//!
//! let _: (i32, char) = review(&first::<i32, i32, char>(), 1);
//! ```

use super::optic::{Optic, OpticTypes};
use crate::typeclass::{
    Const, ConstK, First, Func, FunctionK, Identity, IdentityK, Tagged, TaggedK,
};

/// Reads the focus of an optic that always has one.
///
/// # Examples
///
/// ```rust
/// use lambars_optics::optics::{view, standard_optics::second};
///
/// assert_eq!(view(&second::<char, char, i32>(), (1, 'b')), 'b');
/// ```
pub fn view<O, S, A: 'static>(optic: &O, source: S) -> A
where
    O: Optic<FunctionK, ConstK<A>> + OpticTypes<Source = S, Focus = A>,
{
    optic.apply(Func::new(Const::new)).call(source).into_value()
}

/// Reads the focus if there is one.
///
/// Works with every optic that can be viewed as well as with prisms and
/// compositions involving them.
///
/// # Examples
///
/// ```rust
/// use lambars_optics::optics::{preview, standard_optics::ok};
///
/// assert_eq!(preview(&ok::<i32, i32, String>(), Ok(3)), Some(3));
/// assert_eq!(preview(&ok::<i32, i32, String>(), Err("e".to_string())), None);
/// ```
pub fn preview<O, S, A: 'static>(optic: &O, source: S) -> Option<A>
where
    O: Optic<FunctionK, ConstK<First<A>>> + OpticTypes<Source = S, Focus = A>,
{
    optic
        .apply(Func::new(|focus| Const::new(First::new(focus))))
        .call(source)
        .into_value()
        .into_inner()
}

/// Replaces the focus with a function of its current value.
///
/// # Examples
///
/// ```rust
/// use lambars_optics::optics::{over, standard_optics::first};
///
/// let lengths = over(&first::<String, usize, bool>(), |text| text.len(), ("four".to_string(), true));
/// assert_eq!(lengths, (4, true));
/// ```
pub fn over<O, S, T, A, B, G>(optic: &O, function: G, source: S) -> T
where
    O: Optic<FunctionK, IdentityK>
        + OpticTypes<Source = S, Updated = T, Focus = A, Replacement = B>,
    G: Fn(A) -> B + 'static,
{
    optic
        .apply(Func::new(move |focus| Identity::new(function(focus))))
        .call(source)
        .into_inner()
}

/// Replaces the focus with a fixed value.
///
/// # Examples
///
/// ```rust
/// use lambars_optics::optics::{set, standard_optics::some};
///
/// assert_eq!(set(&some::<i32, &str>(), "x", Some(1)), Some("x"));
/// assert_eq!(set(&some::<i32, &str>(), "x", None), None);
/// ```
pub fn set<O, S, T, A, B>(optic: &O, value: B, source: S) -> T
where
    O: Optic<FunctionK, IdentityK>
        + OpticTypes<Source = S, Updated = T, Focus = A, Replacement = B>,
    B: Clone + 'static,
{
    over(optic, move |_| value.clone(), source)
}

/// Builds a whole from a replacement, running the optic backwards.
///
/// # Examples
///
/// ```rust
/// use lambars_optics::optics::{review, standard_optics::err};
///
/// let built: Result<u8, &str> = review(&err::<&str, &str, u8>(), "failed");
/// assert_eq!(built, Err("failed"));
/// ```
pub fn review<O, T, B>(optic: &O, value: B) -> T
where
    O: Optic<TaggedK, IdentityK> + OpticTypes<Updated = T, Replacement = B>,
{
    optic
        .apply(Tagged::new(Identity::new(value)))
        .into_value()
        .into_inner()
}
