//! The message-passing account.
//!
//! The account is a function of its messages: [`MessageAccount::dispatch`]
//! takes a message and hands back the operation bound to this account, not
//! its result. Applying arguments is a separate step:
//!
//! ```rust
//! use message_passing::account::MessageAccount;
//!
//! let mut account = MessageAccount::new(100);
//! account.dispatch("deposit")?.call(&[23])?;
//! assert_eq!(account.dispatch("balance")?.call(&[])?, 123);
//! # Ok::<(), message_passing::error::MessageError>(())
//! ```

use super::{Amount, Balance, Request};
use crate::error::{MessageError, MessageResult};

/// A mutable account reached only through its dispatcher.
///
/// # Examples
///
/// ```rust
/// use message_passing::account::{MessageAccount, Request};
///
/// let mut account = MessageAccount::new(10);
/// assert_eq!(account.send(Request::Withdraw).call(&[50]), Ok(-40));
///
/// let error = account.dispatch("transfer").unwrap_err();
/// assert_eq!(error.to_string(), "Unknown request: transfer");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageAccount<T> {
    balance: Balance<T>,
}

impl<T: Amount> MessageAccount<T> {
    /// Opens an account holding `initial`.
    #[must_use]
    pub const fn new(initial: T) -> Self {
        Self {
            balance: Balance::new(initial),
        }
    }

    /// Looks up the operation named by `message`.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::UnknownRequest`] carrying `message` when it is
    /// not `balance`, `deposit` or `withdraw`.
    pub fn dispatch(&mut self, message: &str) -> MessageResult<Method<'_, T>> {
        tracing::trace!(request = message, "dispatching account request");
        let request = message.parse::<Request>().inspect_err(|_| {
            tracing::debug!(request = message, "rejecting unknown account request");
        })?;
        Ok(self.send(request))
    }

    /// Binds a typed request to this account. Never fails.
    pub fn send(&mut self, request: Request) -> Method<'_, T> {
        Method {
            balance: &mut self.balance,
            request,
        }
    }
}

/// An account operation bound to its account, waiting for arguments.
///
/// A `Method` may be called any number of times while it is alive; every
/// call acts on the same account.
#[derive(Debug)]
pub struct Method<'a, T> {
    balance: &'a mut Balance<T>,
    request: Request,
}

impl<T: Amount> Method<'_, T> {
    /// The request this method was dispatched from.
    #[must_use]
    pub const fn request(&self) -> Request {
        self.request
    }

    /// Applies the operation to `arguments` and returns the resulting
    /// balance.
    ///
    /// The balance reader takes no arguments; deposit and withdraw take one
    /// amount each.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::Arity`] when the number of arguments does not
    /// match [`Request::arity`], and [`MessageError::Overflow`] when the
    /// result does not fit in `T`. Either way the balance is left untouched.
    pub fn call(&mut self, arguments: &[T]) -> MessageResult<T> {
        match (self.request, arguments) {
            (Request::Balance, []) => Ok(self.balance.current()),
            (Request::Deposit, [amount]) => self.balance.deposit(*amount),
            (Request::Withdraw, [amount]) => self.balance.withdraw(*amount),
            (request, arguments) => Err(MessageError::Arity {
                name: request.name(),
                expected: request.arity(),
                found: arguments.len(),
            }),
        }
    }
}
