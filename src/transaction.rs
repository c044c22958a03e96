use chrono::{DateTime, Local};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::account::AccountNumber;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdraw,
    Transfer,
}

/// Audit record of one attempted money movement, successful or not.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    kind: TransactionKind,
    amount: Decimal,
    from: Option<AccountNumber>,
    to: Option<AccountNumber>,
    timestamp: DateTime<Local>,
    success: bool,
    message: String,
}

impl Transaction {
    pub(crate) fn record(
        kind: TransactionKind,
        amount: Decimal,
        from: Option<AccountNumber>,
        to: Option<AccountNumber>,
        success: bool,
        message: String,
    ) -> Self {
        Self {
            kind,
            amount,
            from,
            to,
            timestamp: Local::now(),
            success,
            message,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// The amount as requested, which may be non-positive for rejected records.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn from(&self) -> Option<&str> {
        self.from.as_deref()
    }

    pub fn to(&self) -> Option<&str> {
        self.to.as_deref()
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Append-only. Records are never mutated or removed once pushed.
#[derive(Debug, Default)]
pub struct TransactionLog {
    records: Vec<Transaction>,
}

impl TransactionLog {
    pub(crate) fn append(&mut self, transaction: Transaction) {
        self.records.push(transaction);
    }

    pub fn as_slice(&self) -> &[Transaction] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn append_keeps_call_order() {
        let mut log = TransactionLog::default();
        assert!(log.is_empty());
        log.append(Transaction::record(
            TransactionKind::Deposit,
            dec!(10),
            None,
            Some("ACC1001".to_string()),
            true,
            "Deposit completed".to_string(),
        ));
        log.append(Transaction::record(
            TransactionKind::Withdraw,
            dec!(-1),
            Some("ACC1001".to_string()),
            None,
            false,
            "Amount must be greater than zero, got -1".to_string(),
        ));
        assert_eq!(log.len(), 2);

        let [deposit, withdraw] = log.as_slice() else {
            panic!("expected two records");
        };
        assert_eq!(deposit.kind(), TransactionKind::Deposit);
        assert_eq!(deposit.from(), None);
        assert_eq!(deposit.to(), Some("ACC1001"));
        assert!(deposit.success());
        assert_eq!(withdraw.kind(), TransactionKind::Withdraw);
        assert_eq!(withdraw.amount(), dec!(-1));
        assert!(!withdraw.success());
        assert!(deposit.timestamp() <= withdraw.timestamp());
    }
}
