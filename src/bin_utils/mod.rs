//! This module could be a separate crate on its own, to bootstrap [`bank_ledger`](crate) within
//! a binary, but for simplicity purposes it is included directly in the library.

use std::{
    io::{Read, Write},
    str::FromStr,
};

use crate::{
    command::{CommandError, CommandOutcome},
    config::LedgerConfig,
    customer::CustomerId,
    ledger::{Ledger, LedgerError, in_memory_ledger::InMemoryLedger},
};
use anyhow::{Context, Result};
use csv_parser::{CsvScriptParser, ScriptRow};
use csv_printer::{AccountRow, CustomerRow, ReportRow, TransactionRow, print_rows};
use thiserror::Error;
use tracing::debug;

pub mod csv_parser;
pub mod csv_printer;
pub mod logging;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    CommandErr(#[from] CommandError),
    #[error(transparent)]
    LedgerErr(#[from] LedgerError),
}

/// What gets printed once the whole script has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// All accounts, or only those owned by one customer.
    Accounts(Option<CustomerId>),
    Customers,
    Transactions,
    Report,
}

impl FromStr for View {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "accounts" => Ok(View::Accounts(None)),
            "customers" => Ok(View::Customers),
            "transactions" => Ok(View::Transactions),
            "report" => Ok(View::Report),
            other => anyhow::bail!(
                "Unknown view `{other}`, expected one of: accounts, customers, transactions, report"
            ),
        }
    }
}

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub config: LedgerConfig,
    pub view: View,
    pub error_printer: Box<dyn FnMut(u64, ServiceError)>,
}

fn apply_row<L: Ledger>(ledger: &mut L, row: ScriptRow) -> Result<CommandOutcome, ServiceError> {
    let command = row.into_command()?;
    Ok(command.execute(ledger)?)
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let parser = CsvScriptParser::new(self.input);

        let mut ledger = InMemoryLedger::new(self.config);

        for (line, row) in parser {
            let row = row.with_context(|| format!("Malformed command at line {line}"))?;
            match apply_row(&mut ledger, row) {
                Ok(outcome) => debug!(line, ?outcome, "command applied"),
                Err(err) => (self.error_printer)(line, err),
            }
        }

        match self.view {
            View::Accounts(None) => {
                print_rows(self.output, ledger.accounts().iter().map(AccountRow::from))
            }
            View::Accounts(Some(customer)) => print_rows(
                self.output,
                ledger.accounts_of(customer)?.into_iter().map(AccountRow::from),
            ),
            View::Customers => {
                print_rows(self.output, ledger.customers().iter().map(CustomerRow::from))
            }
            View::Transactions => print_rows(
                self.output,
                ledger.transactions().iter().map(TransactionRow::from),
            ),
            View::Report => print_rows(self.output, std::iter::once(ReportRow::from(ledger.report()))),
        }
    }
}
