//! Messages understood by the dispatching account.

use std::fmt;
use std::str::FromStr;

use crate::error::MessageError;

/// A message sent to a [`MessageAccount`](super::MessageAccount).
///
/// # Examples
///
/// ```rust
/// use message_passing::account::Request;
///
/// assert_eq!("withdraw".parse(), Ok(Request::Withdraw));
/// assert_eq!(Request::Deposit.arity(), 1);
/// assert!("current".parse::<Request>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Request {
    /// Obtain the balance reader.
    Balance,
    /// Obtain the deposit operation.
    Deposit,
    /// Obtain the withdraw operation.
    Withdraw,
}

impl Request {
    /// Every supported message, in declaration order.
    pub const ALL: [Self; 3] = [Self::Balance, Self::Deposit, Self::Withdraw];

    /// Returns the message name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Balance => "balance",
            Self::Deposit => "deposit",
            Self::Withdraw => "withdraw",
        }
    }

    /// Number of arguments the bound operation takes.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Balance => 0,
            Self::Deposit | Self::Withdraw => 1,
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl FromStr for Request {
    type Err = MessageError;

    fn from_str(message: &str) -> Result<Self, Self::Err> {
        match message {
            "balance" => Ok(Self::Balance),
            "deposit" => Ok(Self::Deposit),
            "withdraw" => Ok(Self::Withdraw),
            other => Err(MessageError::UnknownRequest(other.to_string())),
        }
    }
}
