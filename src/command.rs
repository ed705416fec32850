use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    account::AccountNumber,
    client::ClientId,
    transaction::{Transaction, TransactionKind},
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Amount is required for {kind:?}")]
    AmountRequired { kind: TransactionKind },
    #[error("Client {client} is not registered")]
    UnknownClient { client: ClientId },
    #[error("Client {client} is already registered")]
    DuplicateClient { client: ClientId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionCommand {
    pub client: ClientId,
    pub account: AccountNumber,
    pub transaction: Transaction,
}

impl TransactionCommand {
    /// Amount sign is left to the account rules, only presence is checked.
    pub fn parse_command(
        client: ClientId,
        account: AccountNumber,
        kind: TransactionKind,
        amount: Option<Decimal>,
    ) -> Result<Self, CommandError> {
        let Some(amount) = amount else {
            return Err(CommandError::AmountRequired { kind });
        };
        Ok(Self {
            client,
            account,
            transaction: Transaction::new(kind, amount),
        })
    }
}
