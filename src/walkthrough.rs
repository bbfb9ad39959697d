//! A runnable tour of the three message-passing objects.
//!
//! Each step mirrors a usage note for the objects: query a complex number
//! by message, send `deposit` then `balance` to the dispatching account,
//! and call the same members directly on the lookup-table account.
//!
//! # Examples
//!
//! ```rust
//! use message_passing::config::DemoConfig;
//! use message_passing::walkthrough;
//!
//! let report = walkthrough::run(&DemoConfig::default())?;
//! assert_eq!(report.dispatched.after_deposit, 123);
//! assert_eq!(report.dispatched, report.table);
//! # Ok::<(), message_passing::walkthrough::WalkthroughError>(())
//! ```

use thiserror::Error;

use crate::account::{BoundMember, MessageAccount, TableAccount};
use crate::complex::ComplexNumber;
use crate::config::DemoConfig;
use crate::error::{MessageError, MessageResult};

/// Answers observed from the complex-number object.
#[derive(Clone, Debug, PartialEq)]
pub struct ComplexReport {
    /// Reply to `real_part`.
    pub real_part: f64,
    /// Reply to `imag_part`.
    pub imag_part: f64,
    /// Reply to `angle`.
    pub angle: f64,
    /// Error returned for the unsupported `scale` message.
    pub rejected: MessageError,
}

/// Balances observed from one account after each step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccountReport {
    /// Balance returned by the deposit.
    pub after_deposit: i64,
    /// Balance read back after the deposit.
    pub balance: i64,
    /// Balance returned by the withdrawal.
    pub after_withdrawal: i64,
}

/// Everything the walkthrough observed.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    /// The complex-number step.
    pub complex: ComplexReport,
    /// The dispatching account.
    pub dispatched: AccountReport,
    /// The lookup-table account.
    pub table: AccountReport,
    /// Error returned by the dispatching account for an unknown message.
    pub unknown_request: MessageError,
    /// Whether the lookup-table account has a `balance` member. Always
    /// `false`: the table names its reader `current`.
    pub table_has_balance_member: bool,
}

/// Errors that stop the walkthrough.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalkthroughError {
    /// A step that should succeed was rejected.
    #[error(transparent)]
    Message(#[from] MessageError),

    /// A message that should be rejected was accepted.
    #[error("expected {0} to be rejected, but it was accepted")]
    UnexpectedAcceptance(&'static str),

    /// The lookup-table account is missing a member the walkthrough needs.
    #[error("lookup-table account has no {0} member")]
    MissingMember(&'static str),
}

/// Runs every step of the walkthrough.
///
/// # Errors
///
/// Returns [`WalkthroughError::Message`] when a step that should succeed
/// fails, [`WalkthroughError::UnexpectedAcceptance`] when a bad message is
/// accepted, and [`WalkthroughError::MissingMember`] when a table member is
/// absent.
pub fn run(config: &DemoConfig) -> Result<Report, WalkthroughError> {
    let complex = complex_step(config)?;
    let (dispatched, unknown_request) = dispatch_step(config)?;
    let (table, table_has_balance_member) = table_step(config)?;

    Ok(Report {
        complex,
        dispatched,
        table,
        unknown_request,
        table_has_balance_member,
    })
}

fn complex_step(config: &DemoConfig) -> Result<ComplexReport, WalkthroughError> {
    let z = ComplexNumber::new(config.real_part, config.imag_part);

    let report = ComplexReport {
        real_part: z.dispatch("real_part")?,
        imag_part: z.dispatch("imag_part")?,
        angle: z.dispatch("angle")?,
        rejected: expect_rejection("scale", z.dispatch("scale"))?,
    };
    tracing::info!(
        real_part = report.real_part,
        imag_part = report.imag_part,
        angle = report.angle,
        "complex number answered"
    );
    Ok(report)
}

fn dispatch_step(config: &DemoConfig) -> Result<(AccountReport, MessageError), WalkthroughError> {
    let mut account = MessageAccount::new(config.initial_balance);

    let report = AccountReport {
        after_deposit: account.dispatch("deposit")?.call(&[config.deposit])?,
        balance: account.dispatch("balance")?.call(&[])?,
        after_withdrawal: account.dispatch("withdraw")?.call(&[config.withdrawal])?,
    };
    let rejected = expect_rejection("current", account.dispatch("current").map(|_| ()))?;
    tracing::info!(?report, "dispatching account answered");
    Ok((report, rejected))
}

fn table_step(config: &DemoConfig) -> Result<(AccountReport, bool), WalkthroughError> {
    let mut account = TableAccount::new(config.initial_balance);

    let after_deposit = account.deposit(config.deposit)?;
    let balance = account.current();
    let after_withdrawal = require_member(&mut account, "withdraw")?.call(&[config.withdrawal])?;
    let report = AccountReport {
        after_deposit,
        balance,
        after_withdrawal,
    };
    let has_balance = account.member("balance").is_some();
    tracing::info!(?report, has_balance, "lookup-table account answered");
    Ok((report, has_balance))
}

/// Fetches a table member the walkthrough cannot do without.
fn require_member<'a>(
    account: &'a mut TableAccount<i64>,
    name: &'static str,
) -> Result<BoundMember<'a, i64>, WalkthroughError> {
    account
        .member(name)
        .ok_or(WalkthroughError::MissingMember(name))
}

/// Turns an expected failure into a value, and an unexpected success into
/// an error.
fn expect_rejection<V>(
    name: &'static str,
    outcome: MessageResult<V>,
) -> Result<MessageError, WalkthroughError> {
    match outcome {
        Err(error) => {
            tracing::info!(%error, "message rejected as expected");
            Ok(error)
        }
        Ok(_) => Err(WalkthroughError::UnexpectedAcceptance(name)),
    }
}
