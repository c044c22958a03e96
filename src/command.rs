use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    account::AccountNumber,
    customer::CustomerId,
    ledger::{Ledger, LedgerError, Receipt},
};

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CommandKind {
    Customer,
    Debit,
    Credit,
    Deposit,
    Withdraw,
    Transfer,
}

/// Raw, possibly incomplete arguments of a single command.
#[derive(Debug, Clone, Default)]
pub struct CommandArgs {
    pub customer: Option<CustomerId>,
    pub name: Option<String>,
    pub account: Option<AccountNumber>,
    pub to: Option<AccountNumber>,
    pub amount: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerCommand {
    CreateCustomer {
        full_name: String,
    },
    OpenDebit {
        owner: CustomerId,
    },
    OpenCredit {
        owner: CustomerId,
        credit_limit: Decimal,
    },
    Deposit {
        account: AccountNumber,
        amount: Decimal,
    },
    Withdraw {
        account: AccountNumber,
        amount: Decimal,
    },
    Transfer {
        from: AccountNumber,
        to: AccountNumber,
        amount: Decimal,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Field `{field}` is required for {kind:?}")]
    MissingField {
        kind: CommandKind,
        field: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    CustomerCreated(CustomerId),
    AccountOpened(AccountNumber),
    Moved(Receipt),
}

fn require<T>(value: Option<T>, kind: CommandKind, field: &'static str) -> Result<T, CommandError> {
    value.ok_or(CommandError::MissingField { kind, field })
}

impl LedgerCommand {
    /// Only checks that the fields a command needs are present. Values themselves
    /// (blank names, non-positive amounts) are judged by the ledger, so rejections
    /// still end up in its transaction log.
    pub fn parse_command(kind: CommandKind, args: CommandArgs) -> Result<Self, CommandError> {
        let CommandArgs {
            customer,
            name,
            account,
            to,
            amount,
        } = args;
        match kind {
            CommandKind::Customer => Ok(Self::CreateCustomer {
                full_name: name.unwrap_or_default(),
            }),
            CommandKind::Debit => Ok(Self::OpenDebit {
                owner: require(customer, kind, "customer")?,
            }),
            CommandKind::Credit => Ok(Self::OpenCredit {
                owner: require(customer, kind, "customer")?,
                credit_limit: require(amount, kind, "amount")?,
            }),
            CommandKind::Deposit => Ok(Self::Deposit {
                account: require(account, kind, "account")?,
                amount: require(amount, kind, "amount")?,
            }),
            CommandKind::Withdraw => Ok(Self::Withdraw {
                account: require(account, kind, "account")?,
                amount: require(amount, kind, "amount")?,
            }),
            CommandKind::Transfer => Ok(Self::Transfer {
                from: require(account, kind, "account")?,
                to: require(to, kind, "to")?,
                amount: require(amount, kind, "amount")?,
            }),
        }
    }

    pub fn execute<L>(&self, ledger: &mut L) -> Result<CommandOutcome, LedgerError>
    where
        L: Ledger,
    {
        match self {
            LedgerCommand::CreateCustomer { full_name } => ledger
                .create_customer(full_name)
                .map(|customer| CommandOutcome::CustomerCreated(customer.id())),
            LedgerCommand::OpenDebit { owner } => ledger
                .open_debit_account(*owner)
                .map(|acc| CommandOutcome::AccountOpened(acc.number().to_string())),
            LedgerCommand::OpenCredit {
                owner,
                credit_limit,
            } => ledger
                .open_credit_account(*owner, *credit_limit)
                .map(|acc| CommandOutcome::AccountOpened(acc.number().to_string())),
            LedgerCommand::Deposit { account, amount } => ledger
                .deposit(account, *amount)
                .map(CommandOutcome::Moved),
            LedgerCommand::Withdraw { account, amount } => ledger
                .withdraw(account, *amount)
                .map(CommandOutcome::Moved),
            LedgerCommand::Transfer { from, to, amount } => ledger
                .transfer(from, to, *amount)
                .map(CommandOutcome::Moved),
        }
    }
}
