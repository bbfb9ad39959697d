//! The owned balance cell shared by both account styles.

use super::Amount;
use crate::error::{MessageError, MessageResult};

/// A single mutable balance.
///
/// Owned exclusively by one account. Reads take `&self`, and deposits and
/// withdrawals take `&mut self` and return the new balance.
///
/// # Examples
///
/// ```rust
/// use message_passing::account::Balance;
/// use message_passing::error::MessageError;
///
/// let mut balance = Balance::new(10);
/// assert_eq!(balance.withdraw(50), Ok(-40));
/// assert_eq!(balance.deposit(40), Ok(0));
/// assert_eq!(balance.current(), 0);
///
/// let mut full = Balance::new(i64::MAX);
/// assert_eq!(full.deposit(1), Err(MessageError::Overflow { name: "deposit" }));
/// assert_eq!(full.current(), i64::MAX);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Balance<T> {
    amount: T,
}

impl<T: Amount> Balance<T> {
    /// Creates a balance holding `initial`.
    #[must_use]
    pub const fn new(initial: T) -> Self {
        Self { amount: initial }
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn current(&self) -> T {
        self.amount
    }

    /// Adds `amount` and returns the new balance.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::Overflow`] if the sum does not fit in `T`.
    /// The balance is left unchanged.
    pub fn deposit(&mut self, amount: T) -> MessageResult<T> {
        let updated = T::checked_add(self.amount, amount)
            .ok_or_else(|| self.overflow("deposit", amount))?;
        self.amount = updated;
        tracing::trace!(%amount, balance = %self.amount, "deposit");
        Ok(self.amount)
    }

    /// Subtracts `amount` and returns the new balance.
    ///
    /// There is no overdraft check: the balance may go below zero.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::Overflow`] if the difference does not fit in
    /// `T`. The balance is left unchanged.
    pub fn withdraw(&mut self, amount: T) -> MessageResult<T> {
        let updated = T::checked_sub(self.amount, amount)
            .ok_or_else(|| self.overflow("withdraw", amount))?;
        self.amount = updated;
        tracing::trace!(%amount, balance = %self.amount, "withdraw");
        if self.amount < T::default() {
            tracing::debug!(balance = %self.amount, "balance is below zero");
        }
        Ok(self.amount)
    }

    fn overflow(&self, name: &'static str, amount: T) -> MessageError {
        tracing::debug!(%amount, balance = %self.amount, operation = name, "balance overflow");
        MessageError::Overflow { name }
    }
}
