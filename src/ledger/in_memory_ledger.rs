use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::{
    account::{Account, AccountKind, AccountNumber, ensure_positive},
    config::LedgerConfig,
    customer::{Customer, CustomerId, CustomerRegistry},
    report::Report,
    transaction::{Transaction, TransactionKind, TransactionLog},
};

use super::{AccountRole, Ledger, LedgerError, Receipt};

#[derive(Debug)]
pub struct InMemoryLedger {
    account_prefix: String,
    /// `None` once the last representable number has been handed out.
    next_account_number: Option<u32>,
    customers: CustomerRegistry,
    accounts: Vec<Account>,
    transactions: TransactionLog,
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new(LedgerConfig::default())
    }
}

impl InMemoryLedger {
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            account_prefix: config.account_prefix,
            next_account_number: Some(config.first_account_number),
            customers: CustomerRegistry::new(config.first_customer_id),
            accounts: Vec::new(),
            transactions: TransactionLog::default(),
        }
    }

    fn allocate_account_number(&mut self) -> Result<AccountNumber, LedgerError> {
        let next = self
            .next_account_number
            .ok_or(LedgerError::AccountNumbersExhausted)?;
        self.next_account_number = next.checked_add(1);
        Ok(format!("{}{}", self.account_prefix, next))
    }

    fn resolve(&self, number: &str, role: AccountRole) -> Result<usize, LedgerError> {
        self.accounts
            .iter()
            .position(|acc| acc.number() == number)
            .ok_or_else(|| LedgerError::AccountNotFound {
                role,
                number: number.to_string(),
            })
    }

    fn try_deposit(&mut self, number: &str, amount: Decimal) -> Result<Receipt, LedgerError> {
        let idx = self.resolve(number, AccountRole::Account)?;
        ensure_positive(amount)?;
        let acc = &mut self.accounts[idx];
        acc.deposit(amount)?;
        Ok(Receipt::Deposited {
            balance: acc.balance(),
        })
    }

    fn try_withdraw(&mut self, number: &str, amount: Decimal) -> Result<Receipt, LedgerError> {
        let idx = self.resolve(number, AccountRole::Account)?;
        ensure_positive(amount)?;
        let acc = &mut self.accounts[idx];
        acc.withdraw(amount)?;
        Ok(Receipt::Withdrawn {
            balance: acc.balance(),
        })
    }

    fn try_transfer(
        &mut self,
        from: &str,
        to: &str,
        amount: Decimal,
    ) -> Result<Receipt, LedgerError> {
        let from_idx = self.resolve(from, AccountRole::Sender)?;
        let to_idx = self.resolve(to, AccountRole::Receiver)?;
        ensure_positive(amount)?;
        if from == to {
            return Err(LedgerError::SameAccount {
                number: from.to_string(),
            });
        }
        let (sender, receiver) = pair_mut(&mut self.accounts, from_idx, to_idx);
        sender.transfer(receiver, amount)?;
        Ok(Receipt::Transferred {
            from_balance: sender.balance(),
            to_balance: receiver.balance(),
        })
    }

    fn record(
        &mut self,
        kind: TransactionKind,
        amount: Decimal,
        from: Option<&str>,
        to: Option<&str>,
        outcome: &Result<Receipt, LedgerError>,
    ) {
        let (success, message) = match outcome {
            Ok(receipt) => {
                info!(?kind, %amount, ?from, ?to, ?receipt, "operation succeeded");
                (true, receipt.message().to_string())
            }
            Err(err) => {
                debug!(?kind, %amount, ?from, ?to, error_kind = ?err.kind(), "operation rejected: {err}");
                (false, err.to_string())
            }
        };
        self.transactions.append(Transaction::record(
            kind,
            amount,
            from.map(ToOwned::to_owned),
            to.map(ToOwned::to_owned),
            success,
            message,
        ));
    }
}

/// Two distinct mutable elements of one slice.
fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(a, b, "indices must differ");
    if a < b {
        let (left, right) = items.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = items.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}

impl Ledger for InMemoryLedger {
    fn create_customer(&mut self, full_name: &str) -> Result<&Customer, LedgerError> {
        let customer = self
            .customers
            .create(full_name)
            .inspect_err(|err| debug!("customer rejected: {err}"))?;
        info!(id = customer.id(), name = customer.full_name(), "customer created");
        Ok(customer)
    }

    fn open_account(
        &mut self,
        owner: CustomerId,
        kind: AccountKind,
    ) -> Result<&Account, LedgerError> {
        if self.customers.find(owner).is_none() {
            debug!(owner, "account rejected: unknown customer");
            return Err(LedgerError::CustomerNotFound { id: owner });
        }
        kind.validate()
            .inspect_err(|err| debug!(owner, "account rejected: {err}"))?;

        let number = self
            .allocate_account_number()
            .inspect_err(|err| debug!(owner, "account rejected: {err}"))?;
        info!(%number, owner, kind = kind.name(), "account opened");
        self.accounts.push(Account::open(number, owner, kind));
        Ok(&self.accounts[self.accounts.len() - 1])
    }

    fn find_customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.find(id)
    }

    fn find_account(&self, number: &str) -> Option<&Account> {
        self.accounts.iter().find(|acc| acc.number() == number)
    }

    fn deposit(&mut self, number: &str, amount: Decimal) -> Result<Receipt, LedgerError> {
        let outcome = self.try_deposit(number, amount);
        self.record(TransactionKind::Deposit, amount, None, Some(number), &outcome);
        outcome
    }

    fn withdraw(&mut self, number: &str, amount: Decimal) -> Result<Receipt, LedgerError> {
        let outcome = self.try_withdraw(number, amount);
        self.record(TransactionKind::Withdraw, amount, Some(number), None, &outcome);
        outcome
    }

    fn transfer(&mut self, from: &str, to: &str, amount: Decimal) -> Result<Receipt, LedgerError> {
        let outcome = self.try_transfer(from, to, amount);
        self.record(
            TransactionKind::Transfer,
            amount,
            Some(from),
            Some(to),
            &outcome,
        );
        outcome
    }

    fn accounts_of(&self, customer: CustomerId) -> Result<Vec<&Account>, LedgerError> {
        if self.customers.find(customer).is_none() {
            return Err(LedgerError::CustomerNotFound { id: customer });
        }
        Ok(self
            .accounts
            .iter()
            .filter(|acc| acc.owner() == customer)
            .collect())
    }

    fn customers(&self) -> &[Customer] {
        self.customers.as_slice()
    }

    fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    fn transactions(&self) -> &[Transaction] {
        self.transactions.as_slice()
    }

    fn report(&self) -> Report {
        Report::compute(
            self.customers.len(),
            &self.accounts,
            self.transactions.as_slice(),
        )
    }
}
