//! Mutable bank accounts in two message-passing styles.
//!
//! Both styles wrap the same [`Balance`] cell and share its arithmetic:
//!
//! - [`MessageAccount`]: a dispatcher. Sending a message returns the bound
//!   operation itself ([`Method`]), which the caller applies in a second step.
//!   An unknown message is an error.
//! - [`TableAccount`]: a lookup table. Operations are members of the object,
//!   either called directly or fetched by name with
//!   [`TableAccount::member`]. An unknown member is simply absent (`None`).
//!
//! Neither style enforces an overdraft limit; a withdrawal may drive the
//! balance negative.
//!
//! # Examples
//!
//! ## Dispatcher
//!
//! ```rust
//! use message_passing::account::MessageAccount;
//!
//! let mut account = MessageAccount::new(100);
//! let mut deposit = account.dispatch("deposit").unwrap();
//! assert_eq!(deposit.call(&[23]), Ok(123));
//! assert_eq!(account.dispatch("balance").unwrap().call(&[]), Ok(123));
//! ```
//!
//! ## Lookup table
//!
//! ```rust
//! use message_passing::account::TableAccount;
//!
//! let mut account = TableAccount::new(100);
//! account.deposit(50).unwrap();
//! assert_eq!(account.current(), 150);
//! assert!(account.member("balance").is_none());
//! ```

mod amount;
mod balance;
mod dispatch;
mod request;
mod table;

pub use amount::Amount;
pub use balance::Balance;
pub use dispatch::{MessageAccount, Method};
pub use request::Request;
pub use table::{BoundMember, Member, TableAccount};
