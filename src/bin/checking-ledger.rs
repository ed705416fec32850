use std::fs::File;

use anyhow::{Context, Result};
use checking_ledger::{
    account::CheckingRules, bin_utils::Service, processor::TransactionProcessError,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut args = std::env::args().skip(1);
    let clients_file = args
        .next()
        .context("Expected the clients file name as the first argument")?;
    let operations_file = args
        .next()
        .context("Expected the operations file name as the second argument")?;
    let clients = File::open(&clients_file)
        .with_context(|| format!("Failed to open `{clients_file}`"))?;
    let operations = File::open(&operations_file)
        .with_context(|| format!("Failed to open `{operations_file}`"))?;

    let service = Service {
        clients,
        input: operations,
        output: &mut std::io::stdout(),
        rules: CheckingRules::default(),
        error_printer: Box::new(|line: u64, err: TransactionProcessError| match err {
            TransactionProcessError::AccountErr(err) => {
                // rejected operations are regular outcomes, keep them at info level
                tracing::info!(line, "{err}")
            }
            err => eprintln!("Error at line {line}: {err}"),
        }),
    };
    service.run()
}
