use std::fmt;

use rust_decimal::{Decimal, prelude::Zero};
use thiserror::Error;

use crate::{
    client::{Client, ClientId},
    history::History,
    transaction::TransactionKind,
};

pub type AccountNumber = u32;

pub const BRANCH_CODE: &str = "0001";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("Operation failed: the amount {amount} is invalid")]
    InvalidAmount { amount: Decimal },
    #[error("Operation failed: insufficient funds, balance is {balance}")]
    InsufficientFunds { amount: Decimal, balance: Decimal },
    #[error("Operation failed: the withdrawal amount {amount} exceeds the limit of {limit}")]
    OverdraftLimitExceeded { amount: Decimal, limit: Decimal },
    #[error("Operation failed: maximum number of withdrawals ({max}) exceeded")]
    WithdrawalCountExceeded { max: usize },
}

/// Limits applied to withdrawals from a checking account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckingRules {
    /// Largest amount allowed for a single withdrawal.
    pub overdraft_limit: Decimal,
    /// Successful withdrawals allowed over the account lifetime.
    pub max_withdrawals: usize,
}

impl Default for CheckingRules {
    fn default() -> Self {
        Self {
            overdraft_limit: Decimal::from(500),
            max_withdrawals: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Checking(CheckingRules),
}

#[derive(Debug, Clone)]
pub struct Account {
    number: AccountNumber,
    balance: Decimal,
    holder: ClientId,
    history: History,
    kind: AccountKind,
}

impl Account {
    pub fn checking(number: AccountNumber, holder: ClientId, rules: CheckingRules) -> Self {
        Self {
            number,
            balance: Decimal::zero(),
            holder,
            history: History::default(),
            kind: AccountKind::Checking(rules),
        }
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn branch(&self) -> &'static str {
        BRANCH_CODE
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn holder(&self) -> ClientId {
        self.holder
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn rules(&self) -> &CheckingRules {
        match &self.kind {
            AccountKind::Checking(rules) => rules,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    /// Successful withdrawals so far, as recorded in the history.
    pub fn withdrawal_count(&self) -> usize {
        self.history.count(TransactionKind::Withdrawal)
    }

    /// Takes `amount` out of the balance.
    ///
    /// Checks run in a fixed order and the first failing one is reported:
    /// limit, withdrawal count, funds, then amount sign.
    /// History is not touched here, see [`crate::transaction::Transaction::apply`].
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountError> {
        let result = self.check_withdrawal(amount);
        match &result {
            Ok(()) => {
                self.balance -= amount;
                tracing::info!(account = self.number, %amount, "withdrawal completed");
            }
            Err(err) => tracing::warn!(account = self.number, %amount, "{err}"),
        }
        result
    }

    fn check_withdrawal(&self, amount: Decimal) -> Result<(), AccountError> {
        let rules = self.rules();
        if amount > rules.overdraft_limit {
            return Err(AccountError::OverdraftLimitExceeded {
                amount,
                limit: rules.overdraft_limit,
            });
        }
        if self.withdrawal_count() >= rules.max_withdrawals {
            return Err(AccountError::WithdrawalCountExceeded {
                max: rules.max_withdrawals,
            });
        }
        if amount > self.balance {
            return Err(AccountError::InsufficientFunds {
                amount,
                balance: self.balance,
            });
        }
        if amount <= Decimal::zero() {
            return Err(AccountError::InvalidAmount { amount });
        }
        Ok(())
    }

    /// A positive amount that would overflow the balance is an invalid amount.
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        let new_balance = (amount > Decimal::zero())
            .then(|| self.balance.checked_add(amount))
            .flatten();
        let Some(new_balance) = new_balance else {
            let err = AccountError::InvalidAmount { amount };
            tracing::warn!(account = self.number, %amount, "{err}");
            return Err(err);
        };
        self.balance = new_balance;
        tracing::info!(account = self.number, %amount, "deposit completed");
        Ok(())
    }

    /// Account only stores the holder id, so the name comes from `holder`.
    /// Returns `None` when `holder` is not the client owning this account.
    pub fn display_with<'a>(&'a self, holder: &'a Client) -> Option<AccountDisplay<'a>> {
        (holder.id() == self.holder).then_some(AccountDisplay {
            account: self,
            holder,
        })
    }
}

pub struct AccountDisplay<'a> {
    account: &'a Account,
    holder: &'a Client,
}

impl fmt::Display for AccountDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Branch:\t{}", self.account.branch())?;
        writeln!(f, "Account:\t{}", self.account.number())?;
        write!(f, "Holder:\t{}", self.holder.display_name())
    }
}
