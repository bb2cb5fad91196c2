//! # lambars-optics
//!
//! Profunctor optics for Rust: composable, first-class accessors for
//! immutable data, built on an emulation of higher-kinded types.
//!
//! ## Overview
//!
//! - **Type Classes**: Functor, Contravariant, Bifunctor, Profunctor,
//!   Cartesian/Cocartesian, Semigroup/Monoid, over GAT-based brands
//! - **Control Structures**: [`Either`](control::Either), the sum type optics
//!   thread their "no match" case through
//! - **Optics**: Lens, Prism, Iso, their composition, and the `view`,
//!   `preview`, `set`, `over`, `review` operations
//!
//! ## Feature Flags
//!
//! - `control`: `Either`
//! - `typeclass`: type class traits, brands and witnesses
//! - `optics`: optics and their operations
//! - `serde`: `Serialize`/`Deserialize` for the plain data types
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use lambars_optics::prelude::*;
//!
//! let pair = (3, "three");
//! let doubled = over(&standard_optics::first::<i32, i32, &str>(), |n| n * 2, pair);
//! assert_eq!(doubled, (6, "three"));
//! assert_eq!(preview(&standard_optics::some::<i32, i32>(), None), None);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use lambars_optics::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "optics")]
    pub use crate::optics::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "optics")]
pub mod optics;
