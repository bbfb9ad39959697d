//! Numeric bound for account balances.

use std::fmt::{Debug, Display};

/// A numeric type an account can hold.
///
/// Integer amounts use checked arithmetic, so a deposit or withdrawal past
/// the type's range is reported instead of wrapping or panicking. Float
/// amounts follow IEEE arithmetic and always succeed. `Default` supplies
/// zero and `PartialOrd` lets the account notice a negative balance.
///
/// Implemented for every primitive integer and float type.
///
/// # Examples
///
/// ```rust
/// use message_passing::account::Amount;
///
/// assert_eq!(Amount::checked_add(i64::MAX, 1), None);
/// assert_eq!(Amount::checked_sub(5_i64, 7), Some(-2));
/// assert_eq!(Amount::checked_add(f64::MAX, f64::MAX), Some(f64::INFINITY));
/// ```
pub trait Amount: Copy + Default + PartialOrd + Debug + Display {
    /// Returns `self + other`, or `None` if the sum is not representable.
    fn checked_add(self, other: Self) -> Option<Self>;

    /// Returns `self - other`, or `None` if the difference is not
    /// representable.
    fn checked_sub(self, other: Self) -> Option<Self>;
}

macro_rules! impl_amount_for_integer {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Amount for $integer {
                fn checked_add(self, other: Self) -> Option<Self> {
                    <$integer>::checked_add(self, other)
                }

                fn checked_sub(self, other: Self) -> Option<Self> {
                    <$integer>::checked_sub(self, other)
                }
            }
        )*
    };
}

macro_rules! impl_amount_for_float {
    ($($float:ty),* $(,)?) => {
        $(
            impl Amount for $float {
                fn checked_add(self, other: Self) -> Option<Self> {
                    Some(self + other)
                }

                fn checked_sub(self, other: Self) -> Option<Self> {
                    Some(self - other)
                }
            }
        )*
    };
}

impl_amount_for_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_amount_for_float!(f32, f64);
