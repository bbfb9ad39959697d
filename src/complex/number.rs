//! The immutable complex-number object.

use super::ComplexOp;
use crate::error::MessageResult;

/// An immutable pair `(x, y)` that answers queries through a dispatcher.
///
/// The components are private. A value is created once and never mutated;
/// copies are independent.
///
/// # Examples
///
/// ```rust
/// use message_passing::complex::ComplexNumber;
///
/// let z = ComplexNumber::new(0.0, 2.0);
/// assert_eq!(z.dispatch("imagPart"), Ok(2.0));
/// assert_eq!(z.dispatch("angle"), Ok(std::f64::consts::FRAC_PI_2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComplexNumber {
    real: f64,
    imag: f64,
}

static_assertions::assert_impl_all!(ComplexNumber: Copy, Send, Sync);

impl ComplexNumber {
    /// Creates a complex number from its real and imaginary parts.
    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    /// Sends a message by name.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::UnknownOperation`](crate::error::MessageError::UnknownOperation)
    /// carrying `name` when it is not one of `real_part`, `imag_part` or
    /// `angle`, or one of their aliases `realPart`, `imagPart` and
    /// `magnitude`.
    pub fn dispatch(&self, name: &str) -> MessageResult<f64> {
        tracing::trace!(op = name, "dispatching complex query");
        let op = name.parse::<ComplexOp>().inspect_err(|_| {
            tracing::debug!(op = name, "rejecting unknown complex query");
        })?;
        Ok(self.query(op))
    }

    /// Answers a typed query. Never fails.
    #[must_use]
    pub fn query(&self, op: ComplexOp) -> f64 {
        match op {
            ComplexOp::RealPart => self.real,
            ComplexOp::ImagPart => self.imag,
            ComplexOp::Angle => self.imag.atan2(self.real),
        }
    }

    /// The first component.
    #[must_use]
    pub const fn real_part(&self) -> f64 {
        self.real
    }

    /// The second component.
    #[must_use]
    pub const fn imag_part(&self) -> f64 {
        self.imag
    }

    /// Angle of `(x, y)` from the positive x-axis, in radians.
    ///
    /// Uses the two-argument arctangent with the second component first,
    /// so the result lies in `(-π, π]`.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.query(ComplexOp::Angle)
    }
}

impl From<(f64, f64)> for ComplexNumber {
    fn from((real, imag): (f64, f64)) -> Self {
        Self::new(real, imag)
    }
}
