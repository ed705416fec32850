//! Batch driver around [`crate::processor`]: registers clients, replays
//! operations and prints a per-account summary, all as CSV.

use std::io::{Read, Write};

use crate::processor::{
    TransactionProcessError, TransactionProcessor,
    in_memory_processor::InMemoryTransactionProcessor,
};
use crate::account::CheckingRules;
use anyhow::{Context, Result};
use csv_parser::{ClientRecord, CsvParser, Operation};
use csv_printer::{AccountSummary, print_rows};
pub mod csv_parser;
pub mod csv_printer;

pub struct Service<'w, C, R, W: 'w> {
    pub clients: C,
    pub input: R,
    pub output: &'w mut W,
    pub rules: CheckingRules,
    pub error_printer: Box<dyn FnMut(u64, TransactionProcessError)>,
}

impl<'w, C, R, W> Service<'w, C, R, W>
where
    C: Read,
    R: Read,
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let mut processor = InMemoryTransactionProcessor::new(self.rules);

        for (line, row) in CsvParser::<_, ClientRecord>::new(self.clients) {
            let row = row.with_context(|| format!("Invalid client record at line {line}"))?;
            if let Err(err) = processor.register_client(row.into()) {
                (self.error_printer)(line, err);
            }
        }

        for (line, row) in CsvParser::<_, Operation>::new(self.input) {
            let row = row.with_context(|| format!("Invalid operation at line {line}"))?;
            if let Err(err) =
                processor.process_transaction(row.client, row.account, row.amount, row.kind)
            {
                (self.error_printer)(line, err);
            }
        }

        print_rows(
            self.output,
            processor.clients.values().flat_map(|client| {
                client.accounts().iter().map(move |acc| AccountSummary {
                    client: client.id(),
                    holder: client.display_name(),
                    branch: acc.branch(),
                    account: acc.number(),
                    balance: acc.balance(),
                    withdrawals: acc.withdrawal_count(),
                    entries: acc.history().len(),
                })
            }),
        )
    }
}
