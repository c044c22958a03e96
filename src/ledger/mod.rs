use std::fmt;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    account::{Account, AccountError, AccountKind, AccountNumber},
    customer::{Customer, CustomerError, CustomerId},
    report::Report,
    transaction::Transaction,
};

pub mod in_memory_ledger;

/// Which side of an operation a missing account was referenced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountRole {
    Account,
    Sender,
    Receiver,
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountRole::Account => f.write_str("Account"),
            AccountRole::Sender => f.write_str("Sender account"),
            AccountRole::Receiver => f.write_str("Receiver account"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error(transparent)]
    CustomerErr(#[from] CustomerError),
    #[error(transparent)]
    AccountErr(#[from] AccountError),
    #[error("Customer with ID {id} not found")]
    CustomerNotFound { id: CustomerId },
    #[error("{role} {number} not found")]
    AccountNotFound {
        role: AccountRole,
        number: AccountNumber,
    },
    #[error("Cannot transfer from account {number} to itself")]
    SameAccount { number: AccountNumber },
    #[error("No account numbers left to allocate")]
    AccountNumbersExhausted,
}

/// Coarse classification of [`LedgerError`], stable for callers that branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    CustomerNotFound,
    AccountNotFound,
    InvalidAmount,
    InsufficientFunds,
    SameAccount,
    /// An id or account number counter ran out.
    Exhausted,
}

impl LedgerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::CustomerErr(CustomerError::BlankName) => ErrorKind::InvalidInput,
            LedgerError::CustomerErr(CustomerError::IdsExhausted)
            | LedgerError::AccountNumbersExhausted => ErrorKind::Exhausted,
            LedgerError::AccountErr(AccountError::NonPositiveCreditLimit { .. }) => {
                ErrorKind::InvalidInput
            }
            LedgerError::AccountErr(
                AccountError::InvalidAmount { .. } | AccountError::AmountOverflow { .. },
            ) => ErrorKind::InvalidAmount,
            LedgerError::AccountErr(AccountError::InsufficientFunds { .. }) => {
                ErrorKind::InsufficientFunds
            }
            LedgerError::CustomerNotFound { .. } => ErrorKind::CustomerNotFound,
            LedgerError::AccountNotFound { .. } => ErrorKind::AccountNotFound,
            LedgerError::SameAccount { .. } => ErrorKind::SameAccount,
        }
    }
}

/// Successful money movement together with the resulting balances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Receipt {
    Deposited {
        balance: Decimal,
    },
    Withdrawn {
        balance: Decimal,
    },
    Transferred {
        from_balance: Decimal,
        to_balance: Decimal,
    },
}

impl Receipt {
    pub fn message(&self) -> &'static str {
        match self {
            Receipt::Deposited { .. } => "Deposit completed",
            Receipt::Withdrawn { .. } => "Withdrawal completed",
            Receipt::Transferred { .. } => "Transfer completed",
        }
    }
}

/// Command interface of the bank.
///
/// Every deposit, withdrawal and transfer attempt is appended to the transaction log,
/// whatever its outcome. Lookups and reports never touch the log.
pub trait Ledger {
    fn create_customer(&mut self, full_name: &str) -> Result<&Customer, LedgerError>;

    fn open_account(
        &mut self,
        owner: CustomerId,
        kind: AccountKind,
    ) -> Result<&Account, LedgerError>;

    fn open_debit_account(&mut self, owner: CustomerId) -> Result<&Account, LedgerError> {
        self.open_account(owner, AccountKind::Debit)
    }

    fn open_credit_account(
        &mut self,
        owner: CustomerId,
        credit_limit: Decimal,
    ) -> Result<&Account, LedgerError> {
        self.open_account(owner, AccountKind::Credit { credit_limit })
    }

    fn find_customer(&self, id: CustomerId) -> Option<&Customer>;

    fn find_account(&self, number: &str) -> Option<&Account>;

    fn deposit(&mut self, number: &str, amount: Decimal) -> Result<Receipt, LedgerError>;

    fn withdraw(&mut self, number: &str, amount: Decimal) -> Result<Receipt, LedgerError>;

    fn transfer(&mut self, from: &str, to: &str, amount: Decimal) -> Result<Receipt, LedgerError>;

    /// Accounts owned by `customer` in opening order. Empty when the customer has none.
    fn accounts_of(&self, customer: CustomerId) -> Result<Vec<&Account>, LedgerError>;

    fn customers(&self) -> &[Customer];

    fn accounts(&self) -> &[Account];

    fn transactions(&self) -> &[Transaction];

    fn report(&self) -> Report;
}
