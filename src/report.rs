use rust_decimal::Decimal;

use crate::{
    account::{Account, AccountKind},
    transaction::Transaction,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KindSummary {
    pub count: usize,
    pub balance: Decimal,
}

impl KindSummary {
    fn add(&mut self, balance: Decimal) {
        self.count += 1;
        self.balance = self.balance.saturating_add(balance);
    }
}

/// Ledger-wide summary. Always derived from the current collections, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Report {
    pub debit: KindSummary,
    pub credit: KindSummary,
    pub successful_ops: usize,
    pub failed_ops: usize,
    pub customers: usize,
}

impl Report {
    pub fn compute<'a>(
        customers: usize,
        accounts: impl IntoIterator<Item = &'a Account>,
        transactions: impl IntoIterator<Item = &'a Transaction>,
    ) -> Self {
        let mut report = Report {
            customers,
            ..Default::default()
        };
        for acc in accounts {
            match acc.kind() {
                AccountKind::Debit => report.debit.add(acc.balance()),
                AccountKind::Credit { .. } => report.credit.add(acc.balance()),
            }
        }
        for tx in transactions {
            if tx.success() {
                report.successful_ops += 1;
            } else {
                report.failed_ops += 1;
            }
        }
        report
    }

    pub fn total_accounts(&self) -> usize {
        self.debit.count + self.credit.count
    }

    pub fn total_balance(&self) -> Decimal {
        self.debit.balance.saturating_add(self.credit.balance)
    }

    pub fn total_ops(&self) -> usize {
        self.successful_ops + self.failed_ops
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::transaction::TransactionKind;

    fn tx(success: bool) -> Transaction {
        Transaction::record(
            TransactionKind::Deposit,
            dec!(1),
            None,
            Some("ACC1001".to_string()),
            success,
            String::new(),
        )
    }

    #[test]
    fn empty_report() {
        let accounts: [&Account; 0] = [];
        let txs: [&Transaction; 0] = [];
        let report = Report::compute(0, accounts, txs);
        assert_eq!(report, Report::default());
        assert_eq!(report.total_accounts(), 0);
        assert_eq!(report.total_balance(), Decimal::ZERO);
        assert_eq!(report.total_ops(), 0);
    }

    #[test]
    fn aggregates_per_kind_and_outcome() {
        let mut d1 = Account::open("ACC1001".to_string(), 1, AccountKind::Debit);
        let mut d2 = Account::open("ACC1002".to_string(), 1, AccountKind::Debit);
        let mut c1 = Account::open(
            "ACC1003".to_string(),
            2,
            AccountKind::Credit {
                credit_limit: dec!(1000),
            },
        );
        d1.deposit(dec!(500)).unwrap();
        d2.deposit(dec!(20.5)).unwrap();
        c1.withdraw(dec!(300)).unwrap();

        let txs = [tx(true), tx(true), tx(false), tx(true), tx(false)];
        let report = Report::compute(2, [&d1, &d2, &c1], &txs);

        assert_eq!(report.debit.count, 2);
        assert_eq!(report.debit.balance, dec!(520.5));
        assert_eq!(report.credit.count, 1);
        assert_eq!(report.credit.balance, dec!(-300));
        assert_eq!(report.total_accounts(), 3);
        assert_eq!(report.total_balance(), dec!(220.5));
        assert_eq!(report.successful_ops, 3);
        assert_eq!(report.failed_ops, 2);
        assert_eq!(report.total_ops(), 5);
        assert_eq!(report.customers, 2);
    }

    #[test]
    fn sums_saturate_instead_of_overflowing() {
        let mut d1 = Account::open("ACC1001".to_string(), 1, AccountKind::Debit);
        let mut d2 = Account::open("ACC1002".to_string(), 1, AccountKind::Debit);
        d1.deposit(Decimal::MAX).unwrap();
        d2.deposit(Decimal::MAX).unwrap();
        let txs: [&Transaction; 0] = [];

        let report = Report::compute(1, [&d1, &d2], txs);
        assert_eq!(report.debit.count, 2);
        assert_eq!(report.debit.balance, Decimal::MAX);
        assert_eq!(report.total_balance(), Decimal::MAX);
    }
}
