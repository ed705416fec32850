/// Account balance rules: withdrawal limits, withdrawal count and funds checks.
pub mod account;

/// Append-only record of the transactions applied to an account.
pub mod history;

/// Withdrawals and deposits, and how they are applied to an [`account`].
pub mod transaction;

/// Clients and the accounts they own.
pub mod client;

/// Parsing of raw operation rows into transactions ready to be applied.
pub mod command;

/// Transaction processor interface, plus "in memory" implementation.
/// Coordinates client registration, account opening and transaction processing.
pub mod processor;

/// CSV batch driver, kept in the library so the integration tests can use it.
pub mod bin_utils;
