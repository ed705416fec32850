use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    account::{AccountError, AccountNumber},
    client::{Client, ClientId},
    command::CommandError,
    transaction::TransactionKind,
};

pub mod in_memory_processor;

#[derive(Debug, Error)]
pub enum TransactionProcessError {
    #[error(transparent)]
    CommandErr(#[from] CommandError),
    #[error(transparent)]
    AccountErr(#[from] AccountError),
}

pub trait TransactionProcessor {
    fn register_client(&mut self, client: Client) -> Result<(), TransactionProcessError>;

    fn process_transaction(
        &mut self,
        client_id: ClientId,
        account: AccountNumber,
        amount: Option<Decimal>,
        kind: TransactionKind,
    ) -> Result<(), TransactionProcessError>;
}
