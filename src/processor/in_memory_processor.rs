use std::collections::{BTreeMap, btree_map::Entry};

use rust_decimal::Decimal;

use crate::{
    account::{AccountNumber, CheckingRules},
    client::{Client, ClientId},
    command::{CommandError, TransactionCommand},
    transaction::TransactionKind,
};

use super::{TransactionProcessError, TransactionProcessor};

/// Keeps every client in memory, ordered by id.
/// Accounts are opened with `rules` the first time they are referenced.
#[derive(Debug, Default)]
pub struct InMemoryTransactionProcessor {
    pub rules: CheckingRules,
    pub clients: BTreeMap<ClientId, Client>,
}

impl InMemoryTransactionProcessor {
    pub fn new(rules: CheckingRules) -> Self {
        Self {
            rules,
            clients: BTreeMap::new(),
        }
    }
}

impl TransactionProcessor for InMemoryTransactionProcessor {
    fn register_client(&mut self, client: Client) -> Result<(), TransactionProcessError> {
        match self.clients.entry(client.id()) {
            Entry::Occupied(entry) => Err(CommandError::DuplicateClient {
                client: *entry.key(),
            }
            .into()),
            Entry::Vacant(entry) => {
                tracing::debug!(client = client.id(), "client registered");
                entry.insert(client);
                Ok(())
            }
        }
    }

    fn process_transaction(
        &mut self,
        client_id: ClientId,
        account: AccountNumber,
        amount: Option<Decimal>,
        kind: TransactionKind,
    ) -> Result<(), TransactionProcessError> {
        let cmd = TransactionCommand::parse_command(client_id, account, kind, amount)?;
        let client = self
            .clients
            .get_mut(&cmd.client)
            .ok_or(CommandError::UnknownClient { client: cmd.client })?;
        let account = client.account_or_open(cmd.account, self.rules);
        cmd.transaction.apply(account)?;
        Ok(())
    }
}
