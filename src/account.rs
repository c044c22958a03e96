use rust_decimal::{Decimal, prelude::Zero};
use thiserror::Error;

use crate::customer::CustomerId;

pub type AccountNumber = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Debit,
    Credit { credit_limit: Decimal },
}

impl AccountKind {
    /// Credit limits must be strictly positive.
    pub fn validate(&self) -> Result<(), AccountError> {
        match *self {
            AccountKind::Credit { credit_limit } if credit_limit <= Decimal::zero() => {
                Err(AccountError::NonPositiveCreditLimit {
                    limit: credit_limit,
                })
            }
            _ => Ok(()),
        }
    }

    /// Lowest balance an account of this kind may reach.
    pub fn floor(&self) -> Decimal {
        match self {
            AccountKind::Debit => Decimal::zero(),
            AccountKind::Credit { credit_limit } => -*credit_limit,
        }
    }

    pub fn credit_limit(&self) -> Option<Decimal> {
        match self {
            AccountKind::Debit => None,
            AccountKind::Credit { credit_limit } => Some(*credit_limit),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AccountKind::Debit => "debit",
            AccountKind::Credit { .. } => "credit",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum AccountEventKind {
    Deposited,
    Withdrawn,
}

#[derive(Debug)]
pub struct AccountEvent {
    amount: Decimal,
    /// Balance once the event is applied, computed with overflow checks by the handler.
    balance: Decimal,
    kind: AccountEventKind,
}

impl AccountEvent {
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn kind(&self) -> &AccountEventKind {
        &self.kind
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("Amount must be greater than zero, got {amount}")]
    InvalidAmount { amount: Decimal },
    #[error("Insufficient funds: requested {amount}, available {available}")]
    InsufficientFunds { amount: Decimal, available: Decimal },
    #[error("Amount {amount} would overflow balance {balance}")]
    AmountOverflow { amount: Decimal, balance: Decimal },
    #[error("Credit limit must be greater than zero, got {limit}")]
    NonPositiveCreditLimit { limit: Decimal },
}

pub fn ensure_positive(amount: Decimal) -> Result<(), AccountError> {
    if amount > Decimal::zero() {
        Ok(())
    } else {
        Err(AccountError::InvalidAmount { amount })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    number: AccountNumber,
    owner: CustomerId,
    kind: AccountKind,
    balance: Decimal,
}

impl Account {
    pub(crate) fn open(number: AccountNumber, owner: CustomerId, kind: AccountKind) -> Self {
        Self {
            number,
            owner,
            kind,
            balance: Decimal::zero(),
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn owner(&self) -> CustomerId {
        self.owner
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn floor(&self) -> Decimal {
        self.kind.floor()
    }

    /// How much can still be withdrawn before hitting the floor.
    pub fn available(&self) -> Decimal {
        self.balance
            .checked_sub(self.floor())
            .unwrap_or(Decimal::MAX)
    }

    pub fn describe(&self) -> String {
        match self.kind {
            AccountKind::Debit => "Debit".to_string(),
            AccountKind::Credit { credit_limit } => format!("Credit (limit: {credit_limit})"),
        }
    }

    pub(crate) fn apply(&mut self, event: &AccountEvent) {
        self.balance = event.balance;
    }

    pub(crate) fn handle_deposit(&self, amount: Decimal) -> Result<AccountEvent, AccountError> {
        ensure_positive(amount)?;
        let balance = self
            .balance
            .checked_add(amount)
            .ok_or(AccountError::AmountOverflow {
                amount,
                balance: self.balance,
            })?;
        Ok(AccountEvent {
            amount,
            balance,
            kind: AccountEventKind::Deposited,
        })
    }

    pub(crate) fn handle_withdraw(&self, amount: Decimal) -> Result<AccountEvent, AccountError> {
        ensure_positive(amount)?;
        // an underflowing result is necessarily below any floor
        match self.balance.checked_sub(amount) {
            Some(balance) if balance >= self.floor() => Ok(AccountEvent {
                amount,
                balance,
                kind: AccountEventKind::Withdrawn,
            }),
            _ => Err(AccountError::InsufficientFunds {
                amount,
                available: self.available(),
            }),
        }
    }

    pub(crate) fn deposit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        let evt = self.handle_deposit(amount)?;
        self.apply(&evt);
        Ok(())
    }

    pub(crate) fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountError> {
        let evt = self.handle_withdraw(amount)?;
        self.apply(&evt);
        Ok(())
    }

    /// Both sides are validated before either event is applied, so a failure leaves
    /// both balances untouched. Same-account transfers are rejected by the ledger, not here.
    pub(crate) fn transfer(&mut self, to: &mut Account, amount: Decimal) -> Result<(), AccountError> {
        let withdrawn = self.handle_withdraw(amount)?;
        let deposited = to.handle_deposit(amount)?;
        self.apply(&withdrawn);
        to.apply(&deposited);
        Ok(())
    }
}
