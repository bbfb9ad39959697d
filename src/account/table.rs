//! The lookup-table account.
//!
//! There is no dispatch step here. The operations are the members of the
//! object: `current`, `deposit` and `withdraw`. Calling a member that does
//! not exist is a compile error for the inherent methods, and `None` for a
//! lookup by name. No domain error is raised either way.

use std::fmt;

use super::{Amount, Balance};
use crate::error::{MessageError, MessageResult};

/// A callable entry in the account's member table.
///
/// Members are plain function pointers over [`Balance`]. They hold no
/// state and can be copied freely.
pub enum Member<T> {
    /// A member that only reads the balance.
    Reader(fn(&Balance<T>) -> T),
    /// A member that takes one amount and updates the balance.
    Mutator(fn(&mut Balance<T>, T) -> MessageResult<T>),
}

impl<T> Member<T> {
    /// Number of arguments the member takes.
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            Self::Reader(_) => 0,
            Self::Mutator(_) => 1,
        }
    }
}

impl<T> Clone for Member<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Member<T> {}

impl<T> fmt::Debug for Member<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reader(_) => formatter.write_str("Member::Reader"),
            Self::Mutator(_) => formatter.write_str("Member::Mutator"),
        }
    }
}

/// A mutable account whose operations are looked up by member name.
///
/// # Examples
///
/// ```rust
/// use message_passing::account::TableAccount;
///
/// let mut account = TableAccount::new(100);
/// assert_eq!(account.deposit(50), Ok(150));
/// assert_eq!(account.withdraw(30), Ok(120));
///
/// let mut withdraw = account.member("withdraw").unwrap();
/// assert_eq!(withdraw.call(&[20]), Ok(100));
/// assert!(account.member("transfer").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableAccount<T> {
    balance: Balance<T>,
}

impl<T: Amount> TableAccount<T> {
    /// Opens an account holding `initial`.
    #[must_use]
    pub const fn new(initial: T) -> Self {
        Self {
            balance: Balance::new(initial),
        }
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn current(&self) -> T {
        self.balance.current()
    }

    /// Adds `amount` and returns the new balance.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::Overflow`] if the sum does not fit in `T`.
    pub fn deposit(&mut self, amount: T) -> MessageResult<T> {
        self.balance.deposit(amount)
    }

    /// Subtracts `amount` and returns the new balance. No overdraft check.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::Overflow`] if the difference does not fit in
    /// `T`.
    pub fn withdraw(&mut self, amount: T) -> MessageResult<T> {
        self.balance.withdraw(amount)
    }

    /// The member table, keyed by name.
    fn table() -> [(&'static str, Member<T>); 3] {
        [
            ("current", Member::Reader(Balance::current)),
            ("deposit", Member::Mutator(Balance::deposit)),
            ("withdraw", Member::Mutator(Balance::withdraw)),
        ]
    }

    /// Names of every member, in table order.
    pub fn members(&self) -> impl Iterator<Item = &'static str> {
        Self::table().into_iter().map(|(name, _)| name)
    }

    /// Looks up a member by name without binding it to an account.
    ///
    /// Returns `None` when the table has no such entry.
    #[must_use]
    pub fn lookup(name: &str) -> Option<Member<T>> {
        Self::table()
            .into_iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, member)| member)
    }

    /// Fetches the member called `name`, bound to this account.
    ///
    /// Returns `None` when the account has no such member.
    pub fn member(&mut self, name: &str) -> Option<BoundMember<'_, T>> {
        let Some((entry, member)) = Self::table().into_iter().find(|(entry, _)| *entry == name)
        else {
            tracing::debug!(member = name, "no such account member");
            return None;
        };
        Some(BoundMember {
            balance: &mut self.balance,
            name: entry,
            member,
        })
    }
}

/// A table member bound to its account.
#[derive(Debug)]
pub struct BoundMember<'a, T> {
    balance: &'a mut Balance<T>,
    name: &'static str,
    member: Member<T>,
}

impl<T: Amount> BoundMember<'_, T> {
    /// The member's name in the table.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Applies the member to `arguments` and returns the resulting balance.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::Arity`] when the number of arguments does not
    /// match [`Member::arity`], and [`MessageError::Overflow`] when the
    /// result does not fit in `T`. Either way the balance is left untouched.
    pub fn call(&mut self, arguments: &[T]) -> MessageResult<T> {
        match (self.member, arguments) {
            (Member::Reader(read), []) => Ok(read(&*self.balance)),
            (Member::Mutator(update), [amount]) => update(&mut *self.balance, *amount),
            (member, arguments) => Err(MessageError::Arity {
                name: self.name,
                expected: member.arity(),
                found: arguments.len(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_direct_members() {
        let mut account = TableAccount::new(100);
        assert_eq!(account.deposit(50), Ok(150));
        assert_eq!(account.current(), 150);
        assert_eq!(account.withdraw(30), Ok(120));
        assert_eq!(account.current(), 120);
    }

    #[rstest]
    fn test_current_is_usable_in_const_context() {
        const OPENING: TableAccount<i64> = TableAccount::new(42);
        const CURRENT: i64 = OPENING.current();
        assert_eq!(CURRENT, 42);
    }

    #[rstest]
    fn test_members_lists_table_order() {
        let account = TableAccount::new(0);
        let names: Vec<_> = account.members().collect();
        assert_eq!(names, vec!["current", "deposit", "withdraw"]);
    }

    #[rstest]
    #[case("current", 0)]
    #[case("deposit", 1)]
    #[case("withdraw", 1)]
    fn test_lookup_known_member(#[case] name: &str, #[case] arity: usize) {
        let member = TableAccount::<i64>::lookup(name).unwrap();
        assert_eq!(member.arity(), arity);
    }

    #[rstest]
    #[case("balance")]
    #[case("transfer")]
    #[case("")]
    fn test_absent_member_is_none(#[case] name: &str) {
        let mut account = TableAccount::new(100);
        assert!(TableAccount::<i64>::lookup(name).is_none());
        assert!(account.member(name).is_none());
        assert_eq!(account.current(), 100);
    }

    #[rstest]
    fn test_bound_member_acts_on_account() {
        let mut account = TableAccount::new(100);
        let mut deposit = account.member("deposit").unwrap();
        assert_eq!(deposit.name(), "deposit");
        assert_eq!(deposit.call(&[5]), Ok(105));
        assert_eq!(deposit.call(&[5]), Ok(110));
        assert_eq!(account.member("current").unwrap().call(&[]), Ok(110));
    }

    #[rstest]
    fn test_bound_member_wrong_arity() {
        let mut account = TableAccount::new(100);
        assert_eq!(
            account.member("withdraw").unwrap().call(&[]),
            Err(MessageError::Arity {
                name: "withdraw",
                expected: 1,
                found: 0,
            })
        );
        assert_eq!(account.current(), 100);
    }

    #[rstest]
    fn test_overflow_through_direct_and_named_members() {
        let mut account = TableAccount::new(i64::MIN);
        assert_eq!(
            account.withdraw(1),
            Err(MessageError::Overflow { name: "withdraw" })
        );
        assert_eq!(account.deposit(i64::MAX), Ok(-1));
        assert_eq!(account.deposit(1), Ok(0));
        assert_eq!(account.deposit(i64::MAX), Ok(i64::MAX));
        assert_eq!(
            account.member("deposit").unwrap().call(&[1]),
            Err(MessageError::Overflow { name: "deposit" })
        );
        assert_eq!(account.current(), i64::MAX);
    }

    #[rstest]
    fn test_member_debug_hides_pointer() {
        let member = TableAccount::<i64>::lookup("current").unwrap();
        assert_eq!(format!("{member:?}"), "Member::Reader");
    }
}
