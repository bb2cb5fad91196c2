//! Profunctor optics for immutable data manipulation.
//!
//! An optic is a composable, first-class accessor into a data structure. In
//! the profunctor encoding every optic is one function
//!
//! ```text
//! P<A, F<B>>  ->  P<S, F<T>>
//! ```
//!
//! and what an optic can do is decided by which profunctors `P` and functors
//! `F` it accepts (see [`Optic`]).
//!
//! # Optics Hierarchy
//!
//! ```text
//! Iso <: Lens
//! Iso <: Prism
//! Lens . Prism  (previewable and updatable, not viewable nor reviewable)
//! ```
//!
//! # Available Optics
//!
//! - [`Lens`]: focus on one part of a product (view, set, over)
//! - [`Prism`]: focus on one alternative of a sum (preview, review, over)
//! - [`Iso`]: lossless conversion (every operation, plus [`un_iso`])
//! - [`FnOptic`]: a hand-written optic for a single `(P, F)` pair
//! - [`standard_optics`]: ready-made optics for tuples, `Option`, `Result`
//!   and [`Either`](crate::control::Either)
//!
//! # Example
//!
//! ```
//! use lambars_optics::lens;
//! use lambars_optics::optics::{OpticTypes, over, preview, set};
//! use lambars_optics::optics::standard_optics::some;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String, city: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, address: Option<Address> }
//!
//! let street = lens!(Person, address)
//!     .and_then(some::<Address, Address>())
//!     .and_then(lens!(Address, street));
//!
//! let alice = Person {
//!     name: "Alice".to_string(),
//!     address: Some(Address { street: "Main St".to_string(), city: "Tokyo".to_string() }),
//! };
//!
//! assert_eq!(preview(&street, alice.clone()), Some("Main St".to_string()));
//! let moved = set(&street, "Oak Ave".to_string(), alice);
//! assert_eq!(moved.address.map(|a| a.street), Some("Oak Ave".to_string()));
//!
//! let homeless = Person { name: "Bob".to_string(), address: None };
//! assert_eq!(over(&street, |s| s.to_uppercase(), homeless.clone()), homeless);
//! ```

mod iso;
mod lens;
mod operations;
mod optic;
mod prism;
pub mod standard_optics;

pub use iso::{Iso, SimpleIso, iso, un_iso};
pub use lens::{Lens, SimpleLens, lens};
pub use operations::{over, preview, review, set, view};
pub use optic::{
    AndThen, FnOptic, IdentityOptic, MapFocus, MapReplacement, MapSource, MapUpdated, Optic,
    OpticTypes, optic,
};
pub use prism::{Prism, SimplePrism, prism};
