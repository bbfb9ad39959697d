//! # message-passing
//!
//! Objects as functions of their messages, in the style of SICP.
//!
//! ## Overview
//!
//! The crate builds the same idea three ways:
//!
//! - **Complex numbers**: an immutable pair that answers `real_part`,
//!   `imag_part` and `angle` through a single dispatcher
//! - **Dispatching account**: a mutable balance whose dispatcher hands back
//!   the bound operation, to be applied in a second step
//! - **Lookup-table account**: the same balance with its operations exposed
//!   as named members, no dispatcher in between
//!
//! Name-based dispatch is checked at the boundary: an unknown name is a
//! [`MessageError`](error::MessageError) for the dispatchers, and `None`
//! for the lookup table. Typed enums ([`ComplexOp`](complex::ComplexOp),
//! [`Request`](account::Request)) give the same operations with exhaustive
//! matching instead.
//!
//! ## Feature Flags
//!
//! - `complex`: The complex-number object
//! - `account`: Both account styles
//! - `serde`: `Serialize`/`Deserialize` for every object and message
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use message_passing::prelude::*;
//!
//! let z = ComplexNumber::new(3.0, 4.0);
//! assert_eq!(z.dispatch("realPart"), Ok(3.0));
//!
//! let mut account = MessageAccount::new(100);
//! account.dispatch("deposit")?.call(&[23])?;
//! assert_eq!(account.dispatch("balance")?.call(&[])?, 123);
//! # Ok::<(), MessageError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use message_passing::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{MessageError, MessageResult};

    #[cfg(feature = "complex")]
    pub use crate::complex::*;

    #[cfg(feature = "account")]
    pub use crate::account::*;
}

pub mod error;

#[cfg(feature = "complex")]
pub mod complex;

#[cfg(feature = "account")]
pub mod account;

#[cfg(all(feature = "complex", feature = "account"))]
pub mod config;

#[cfg(all(feature = "complex", feature = "account"))]
pub mod walkthrough;
