//! Newtype wrapper selecting a particular `Semigroup`/`Monoid` instance.
//!
//! An `Option` can be combined in more than one lawful way. [`First`] keeps
//! the leftmost present value (identity: `First(None)`), which matters for
//! the accumulating functor [`Const`](super::Const): `preview` runs an optic
//! with `Const<First<A>, _>` so that the first focus found wins and "nothing
//! found" is the identity.

// =============================================================================
// First Wrapper
// =============================================================================

/// A newtype wrapper whose combination keeps the first present value.
///
/// # Examples
///
/// ```rust
/// use lambars_optics::typeclass::{First, Monoid, Semigroup};
///
/// assert_eq!(First(Some(1)).combine(First(Some(2))), First(Some(1)));
/// assert_eq!(First::empty().combine(First(Some(2))), First(Some(2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct First<A>(pub Option<A>);

impl<A> First<A> {
    /// Creates a `First` holding a present value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(Some(value))
    }

    /// Consumes the `First` and returns the wrapped option.
    #[inline]
    pub fn into_inner(self) -> Option<A> {
        self.0
    }
}

impl<A> Default for First<A> {
    fn default() -> Self {
        Self(None)
    }
}

impl<A> From<Option<A>> for First<A> {
    fn from(value: Option<A>) -> Self {
        Self(value)
    }
}
