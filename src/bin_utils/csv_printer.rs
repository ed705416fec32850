use std::io::Write;

use crate::{account::AccountNumber, client::ClientId};
use anyhow::Context;
use csv::Writer;
use rust_decimal::Decimal;
use serde::Serialize;

/// One output row per account.
#[derive(Debug, Serialize)]
pub struct AccountSummary<'a> {
    pub client: ClientId,
    pub holder: &'a str,
    pub branch: &'a str,
    pub account: AccountNumber,
    pub balance: Decimal,
    pub withdrawals: usize,
    pub entries: usize,
}

/// Writes `rows` as CSV, header taken from the first row's field names.
pub fn print_rows<W, T>(output: &mut W, rows: impl IntoIterator<Item = T>) -> anyhow::Result<()>
where
    W: Write,
    T: Serialize,
{
    let mut writer = Writer::from_writer(output);
    for (idx, row) in rows.into_iter().enumerate() {
        writer
            .serialize(row)
            .with_context(|| format!("Failed to write row {idx} to CSV"))?;
    }
    writer.flush().context("Failed to flush CSV writer")?;
    Ok(())
}
