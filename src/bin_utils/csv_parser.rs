use std::io::Read;

use crate::{
    account::AccountNumber,
    client::{Client, ClientId, IndividualProfile},
    transaction::TransactionKind,
};
use chrono::NaiveDate;
use csv::{DeserializeRecordsIntoIter, Trim};
use rust_decimal::Decimal;
use serde::{Deserialize, de::DeserializeOwned};

#[derive(Debug, Deserialize)]
pub struct Operation {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub client: ClientId,
    pub account: AccountNumber,
    pub amount: Option<Decimal>,
}

#[derive(Debug, Deserialize)]
pub struct ClientRecord {
    pub client: ClientId,
    pub name: String,
    pub birth_date: NaiveDate,
    pub national_id: String,
    pub address: String,
}

impl From<ClientRecord> for Client {
    fn from(record: ClientRecord) -> Self {
        Client::individual(
            record.client,
            record.address,
            IndividualProfile {
                name: record.name,
                birth_date: record.birth_date,
                national_id: record.national_id,
            },
        )
    }
}

/// Parses CSV rows, yielding each one with the line it started on.
pub struct CsvParser<R, T> {
    iter: DeserializeRecordsIntoIter<R, T>,
}

impl<R, T> CsvParser<R, T>
where
    R: Read,
    T: DeserializeOwned,
{
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);

        Self {
            iter: reader.into_deserialize(),
        }
    }
}

impl<R, T> Iterator for CsvParser<R, T>
where
    R: Read,
    T: DeserializeOwned,
{
    type Item = (u64, csv::Result<T>);

    fn next(&mut self) -> Option<Self::Item> {
        let curr_line = self.iter.reader().position().line();
        self.iter.next().map(|row| (curr_line, row))
    }
}
