//! Standard optics that are commonly used.
//!
//! Every optic here is polymorphic: it may change the type of its focus, and
//! the type of the whole changes with it.

use super::{Iso, Lens, Prism};
use crate::control::Either;

/// The identity iso: the focus is the whole value.
///
/// # Example
///
/// ```
/// use lambars_optics::optics::{view, review, standard_optics::identity};
///
/// assert_eq!(view(&identity::<i32, i32>(), 42), 42);
/// assert_eq!(review(&identity::<i32, &str>(), "back"), "back");
/// ```
#[must_use]
pub fn identity<A: 'static, B: 'static>() -> Iso<A, B, A, B> {
    Iso::new(|value: A| value, |value: B| value)
}

/// An iso that swaps the elements of a pair.
///
/// # Example
///
/// ```
/// use lambars_optics::optics::{view, standard_optics::swap};
///
/// let swapped = view(&swap::<i32, String, i32, String>(), (42, "hello".to_string()));
/// assert_eq!(swapped, ("hello".to_string(), 42));
/// ```
#[must_use]
pub fn swap<A, B, C, D>() -> Iso<(A, B), (C, D), (B, A), (D, C)>
where
    A: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
{
    Iso::new(|(a, b): (A, B)| (b, a), |(d, c): (D, C)| (c, d))
}

/// A lens on the first element of a pair.
///
/// # Example
///
/// ```
/// use lambars_optics::optics::{set, view, standard_optics::first};
///
/// assert_eq!(view(&first::<i32, i32, char>(), (1, 'a')), 1);
/// assert_eq!(set(&first::<i32, bool, char>(), true, (1, 'a')), (true, 'a'));
/// ```
#[must_use]
pub fn first<A, B, C>() -> Lens<(A, C), (B, C), A, B>
where
    A: Clone + 'static,
    B: 'static,
    C: 'static,
{
    Lens::new(
        |pair: &(A, C)| pair.0.clone(),
        |(_, context): (A, C), value: B| (value, context),
    )
}

/// A lens on the second element of a pair.
///
/// # Example
///
/// ```
/// use lambars_optics::optics::{over, standard_optics::second};
///
/// assert_eq!(over(&second::<i32, i32, char>(), |n| n + 1, ('a', 1)), ('a', 2));
/// ```
#[must_use]
pub fn second<A, B, C>() -> Lens<(C, A), (C, B), A, B>
where
    A: Clone + 'static,
    B: 'static,
    C: 'static,
{
    Lens::new(
        |pair: &(C, A)| pair.1.clone(),
        |(context, _): (C, A), value: B| (context, value),
    )
}

/// A prism on the value inside `Some`.
///
/// # Example
///
/// ```
/// use lambars_optics::optics::{over, preview, standard_optics::some};
///
/// assert_eq!(preview(&some::<i32, i32>(), Some(5)), Some(5));
/// assert_eq!(over(&some::<i32, String>(), |n| n.to_string(), None), None);
/// ```
#[must_use]
pub fn some<A: 'static, B: 'static>() -> Prism<Option<A>, Option<B>, A, B> {
    Prism::new(
        |option: Option<A>| match option {
            Some(value) => Either::Right(value),
            None => Either::Left(None),
        },
        Some,
    )
}

/// A prism on the success value of a `Result`.
#[must_use]
pub fn ok<A, B, E>() -> Prism<Result<A, E>, Result<B, E>, A, B>
where
    A: 'static,
    B: 'static,
    E: 'static,
{
    Prism::new(
        |result: Result<A, E>| match result {
            Ok(value) => Either::Right(value),
            Err(error) => Either::Left(Err(error)),
        },
        Ok,
    )
}

/// A prism on the error value of a `Result`.
#[must_use]
pub fn err<E, F, A>() -> Prism<Result<A, E>, Result<A, F>, E, F>
where
    E: 'static,
    F: 'static,
    A: 'static,
{
    Prism::new(
        |result: Result<A, E>| match result {
            Ok(value) => Either::Left(Ok(value)),
            Err(error) => Either::Right(error),
        },
        Err,
    )
}

/// A prism on the left side of an [`Either`].
#[must_use]
pub fn left<A, B, C>() -> Prism<Either<A, C>, Either<B, C>, A, B>
where
    A: 'static,
    B: 'static,
    C: 'static,
{
    Prism::new(
        |either: Either<A, C>| match either {
            Either::Left(value) => Either::Right(value),
            Either::Right(other) => Either::Left(Either::Right(other)),
        },
        Either::Left,
    )
}

/// A prism on the right side of an [`Either`].
#[must_use]
pub fn right<A, B, C>() -> Prism<Either<C, A>, Either<C, B>, A, B>
where
    A: 'static,
    B: 'static,
    C: 'static,
{
    Prism::new(
        |either: Either<C, A>| match either {
            Either::Left(other) => Either::Left(Either::Left(other)),
            Either::Right(value) => Either::Right(value),
        },
        Either::Right,
    )
}

static_assertions::assert_impl_all!(Iso<(i32, String), (i32, String), (String, i32), (String, i32)>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Lens<(String, u8), (String, u8), String, String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Prism<Option<Vec<u8>>, Option<Vec<u8>>, Vec<u8>, Vec<u8>>: Send, Sync, Clone);
