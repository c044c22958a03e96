/// Customer identities and the registry handing out their ids.
pub mod customer;

/// Debit and credit accounts: balance rules and the floor each kind may not cross.
/// Balance is modified using events, which are created by handling deposits and withdrawals
pub mod account;

/// Immutable audit records of every attempted money movement.
pub mod transaction;

/// Aggregated figures over accounts and transactions.
pub mod report;

/// Numbering parameters of a ledger instance.
pub mod config;

/// Ledger interface, plus "in memory" implementation.
/// Resolves accounts, enforces cross-account rules and records every attempt.
pub mod ledger;

/// Commands the outside world sends to the ledger, parsed from loosely typed input.
pub mod command;

/// Ideally, this module should exist in its own crate, as a way to
/// drive the ledger from scripts. It lives here so integration tests can use it.
pub mod bin_utils;
