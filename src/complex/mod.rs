//! Complex numbers represented as a function of their messages.
//!
//! A [`ComplexNumber`] never exposes its components as fields. Callers ask
//! for them by sending a message, either a name (`"real_part"`) checked at
//! the boundary or a [`ComplexOp`] checked by the compiler.
//!
//! # Examples
//!
//! ```rust
//! use message_passing::complex::{ComplexNumber, ComplexOp};
//!
//! let z = ComplexNumber::new(3.0, 4.0);
//!
//! assert_eq!(z.dispatch("real_part"), Ok(3.0));
//! assert_eq!(z.query(ComplexOp::ImagPart), 4.0);
//! assert!((z.angle() - 0.927_295_218).abs() < 1e-9);
//!
//! let error = z.dispatch("scale").unwrap_err();
//! assert!(error.to_string().contains("scale"));
//! ```

mod number;
mod operation;

pub use number::ComplexNumber;
pub use operation::ComplexOp;
