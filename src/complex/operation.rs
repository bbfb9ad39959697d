//! The closed set of queries a complex number answers.

use std::fmt;
use std::str::FromStr;

use crate::error::MessageError;

/// A query understood by [`ComplexNumber`](super::ComplexNumber).
///
/// Parsing from a string accepts the snake-case name and the spellings used
/// in message-passing examples: `realPart`, `imagPart`, and `magnitude`,
/// the name those examples give to the `atan2` query.
///
/// # Examples
///
/// ```rust
/// use message_passing::complex::ComplexOp;
///
/// assert_eq!("imagPart".parse(), Ok(ComplexOp::ImagPart));
/// assert_eq!(ComplexOp::Angle.name(), "angle");
/// assert_eq!("magnitude".parse(), Ok(ComplexOp::Angle));
/// assert!("scale".parse::<ComplexOp>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ComplexOp {
    /// The first component, `x`.
    RealPart,
    /// The second component, `y`.
    ImagPart,
    /// The angle of `(x, y)` from the positive x-axis, `atan2(y, x)`.
    Angle,
}

impl ComplexOp {
    /// Every supported query, in declaration order.
    pub const ALL: [Self; 3] = [Self::RealPart, Self::ImagPart, Self::Angle];

    /// Returns the canonical message name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::RealPart => "real_part",
            Self::ImagPart => "imag_part",
            Self::Angle => "angle",
        }
    }
}

impl fmt::Display for ComplexOp {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl FromStr for ComplexOp {
    type Err = MessageError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "real_part" | "realPart" => Ok(Self::RealPart),
            "imag_part" | "imagPart" => Ok(Self::ImagPart),
            "angle" | "magnitude" => Ok(Self::Angle),
            other => Err(MessageError::UnknownOperation(other.to_string())),
        }
    }
}
