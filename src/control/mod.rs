//! Control structures for functional programming.
//!
//! - [`Either`]: a value that can be one of two types, the sum that prisms
//!   match into and that cocartesian profunctors thread through.
//!
//! # Examples
//!
//! ```rust
//! use lambars_optics::control::Either;
//!
//! let parsed: Either<String, i32> = "42"
//!     .parse::<i32>()
//!     .map_err(|error| error.to_string())
//!     .into();
//! assert_eq!(parsed, Either::Right(42));
//! ```

mod either;

pub use either::Either;
