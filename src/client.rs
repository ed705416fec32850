use chrono::NaiveDate;
use thiserror::Error;

use crate::{
    account::{Account, AccountError, AccountNumber, CheckingRules},
    transaction::Transaction,
};

pub type ClientId = u16;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClientError {
    #[error("Client {client} has no account {account}")]
    UnknownAccount {
        client: ClientId,
        account: AccountNumber,
    },
    #[error(transparent)]
    AccountErr(#[from] AccountError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndividualProfile {
    pub name: String,
    pub birth_date: NaiveDate,
    pub national_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientProfile {
    Individual(IndividualProfile),
}

#[derive(Debug, Clone)]
pub struct Client {
    id: ClientId,
    address: String,
    accounts: Vec<Account>,
    profile: ClientProfile,
}

impl Client {
    pub fn individual(id: ClientId, address: impl Into<String>, profile: IndividualProfile) -> Self {
        Self {
            id,
            address: address.into(),
            accounts: Vec::new(),
            profile: ClientProfile::Individual(profile),
        }
    }

    pub fn id(&self) -> ClientId {
        self.id
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn profile(&self) -> &ClientProfile {
        &self.profile
    }

    pub fn display_name(&self) -> &str {
        match &self.profile {
            ClientProfile::Individual(profile) => &profile.name,
        }
    }

    pub fn add_account(&mut self, account: Account) {
        self.accounts.push(account);
    }

    pub fn open_checking_account(
        &mut self,
        number: AccountNumber,
        rules: CheckingRules,
    ) -> &mut Account {
        tracing::debug!(client = self.id, account = number, "opening checking account");
        self.accounts.push(Account::checking(number, self.id, rules));
        let idx = self.accounts.len() - 1;
        &mut self.accounts[idx]
    }

    /// Owned account with this number, opened with `rules` if there is none yet.
    pub fn account_or_open(&mut self, number: AccountNumber, rules: CheckingRules) -> &mut Account {
        let idx = match self.accounts.iter().position(|acc| acc.number() == number) {
            Some(idx) => idx,
            None => {
                self.open_checking_account(number, rules);
                self.accounts.len() - 1
            }
        };
        &mut self.accounts[idx]
    }

    /// First owned account with this number.
    pub fn account(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.iter().find(|acc| acc.number() == number)
    }

    pub fn account_mut(&mut self, number: AccountNumber) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|acc| acc.number() == number)
    }

    /// Delegates to [`Transaction::apply`]. The account does not have to
    /// belong to this client.
    pub fn perform_transaction(
        &self,
        account: &mut Account,
        transaction: &Transaction,
    ) -> Result<(), AccountError> {
        transaction.apply(account)
    }

    pub fn perform_on_account(
        &mut self,
        number: AccountNumber,
        transaction: &Transaction,
    ) -> Result<(), ClientError> {
        let client = self.id;
        let account = self
            .account_mut(number)
            .ok_or(ClientError::UnknownAccount {
                client,
                account: number,
            })?;
        Ok(transaction.apply(account)?)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::{Decimal, prelude::Zero};

    use super::*;

    fn client(id: ClientId, name: &str) -> Client {
        Client::individual(
            id,
            "Av. Brasil, 200 - Centro - Campinas/SP",
            IndividualProfile {
                name: name.to_string(),
                birth_date: NaiveDate::from_ymd_opt(1985, 11, 23).unwrap(),
                national_id: format!("0000000000{id}"),
            },
        )
    }

    #[test]
    fn individual_client_accessors() {
        let c = client(5, "João Lima");
        assert_eq!(c.id(), 5);
        assert_eq!(c.display_name(), "João Lima");
        assert_eq!(c.address(), "Av. Brasil, 200 - Centro - Campinas/SP");
        let ClientProfile::Individual(profile) = c.profile();
        assert_eq!(profile.national_id, "00000000005");
        assert!(c.accounts().is_empty());
    }

    #[test]
    fn add_account_appends_without_dedup() {
        let mut c = client(1, "Ana");
        c.add_account(Account::checking(1, 1, CheckingRules::default()));
        c.add_account(Account::checking(1, 1, CheckingRules::default()));
        c.open_checking_account(2, CheckingRules::default());

        let numbers: Vec<_> = c.accounts().iter().map(Account::number).collect();
        assert_eq!(numbers, vec![1, 1, 2]);
        assert_eq!(c.account(2).unwrap().holder(), 1);
    }

    #[test]
    fn account_or_open_reuses_existing() {
        let mut c = client(4, "Davi");
        let rules = CheckingRules {
            overdraft_limit: Decimal::from(10),
            max_withdrawals: 1,
        };
        c.account_or_open(1, rules)
            .deposit(Decimal::from(5))
            .unwrap();
        let acc = c.account_or_open(1, CheckingRules::default());
        assert_eq!(acc.balance(), Decimal::from(5));
        assert_eq!(acc.rules(), &rules);

        c.account_or_open(2, CheckingRules::default());
        assert_eq!(c.accounts().len(), 2);
        assert_eq!(c.account(2).unwrap().holder(), 4);
    }

    #[test]
    fn perform_transaction_on_foreign_account() {
        let ana = client(1, "Ana");
        let mut bruno = client(2, "Bruno");
        bruno.open_checking_account(9, CheckingRules::default());

        let acc = bruno.account_mut(9).unwrap();
        ana.perform_transaction(acc, &Transaction::deposit(Decimal::from(50)))
            .unwrap();
        let err = ana
            .perform_transaction(acc, &Transaction::withdrawal(Decimal::zero()))
            .unwrap_err();
        assert!(matches!(err, AccountError::InvalidAmount { .. }));

        let acc = bruno.account(9).unwrap();
        assert_eq!(acc.balance(), Decimal::from(50));
        assert_eq!(acc.history().len(), 1);
    }

    #[test]
    fn perform_on_owned_account() {
        let mut c = client(3, "Carla");
        c.open_checking_account(1, CheckingRules::default());

        c.perform_on_account(1, &Transaction::deposit(Decimal::from(20)))
            .unwrap();
        let err = c
            .perform_on_account(1, &Transaction::withdrawal(Decimal::from(30)))
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::AccountErr(AccountError::InsufficientFunds { .. })
        ));

        let err = c
            .perform_on_account(2, &Transaction::deposit(Decimal::from(20)))
            .unwrap_err();
        assert_eq!(
            err,
            ClientError::UnknownAccount {
                client: 3,
                account: 2
            }
        );
        assert_eq!(err.to_string(), "Client 3 has no account 2");
        assert_eq!(c.account(1).unwrap().balance(), Decimal::from(20));
    }
}
