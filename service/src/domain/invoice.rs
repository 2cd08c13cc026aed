//! [`Invoice`] definitions.

use std::{str::FromStr, sync::LazyLock};

use common::{unit, DateOf, Money};
use derive_more::{AsRef, Display};
use regex::Regex;

use super::SupplierOrder;
#[cfg(doc)]
use super::Supplier;

/// Invoice issued by a [`Supplier`] for a [`SupplierOrder`].
#[derive(Clone, Debug)]
pub struct Invoice {
    /// [`Date`] when this [`Invoice`] was issued.
    ///
    /// [`Date`]: common::Date
    pub issued_on: IssueDate,

    /// Amount of [`Money`] this [`Invoice`] bills.
    pub amount: Money,

    /// [`BankAccount`] this [`Invoice`] is to be paid to.
    pub bank_account: BankAccount,

    /// [`SupplierOrder`] this [`Invoice`] bills.
    pub order: SupplierOrder,
}

/// Bank account number an [`Invoice`] is paid to.
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct BankAccount(String);

impl BankAccount {
    /// Creates a new [`BankAccount`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `account` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(account: impl Into<String>) -> Self {
        Self(account.into())
    }

    /// Creates a new [`BankAccount`] if the given `account` is valid.
    #[must_use]
    pub fn new(account: impl Into<String>) -> Option<Self> {
        let account = account.into();
        Self::check(&account).then_some(Self(account))
    }

    /// Checks whether the given `account` is a valid [`BankAccount`] (IBAN
    /// shape).
    fn check(account: impl AsRef<str>) -> bool {
        /// Regular expression checking [`BankAccount`] format.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[A-Z]{2}[0-9]{2}[0-9A-Z]{10,30}$")
                .expect("valid regex")
        });

        REGEX.is_match(account.as_ref())
    }
}

impl FromStr for BankAccount {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `BankAccount`")
    }
}

/// [`Date`] when an [`Invoice`] was issued.
///
/// [`Date`]: common::Date
pub type IssueDate = DateOf<(Invoice, unit::Issue)>;
