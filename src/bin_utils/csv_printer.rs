use std::io::Write;

use csv::Writer;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    account::Account,
    customer::{Customer, CustomerId},
    report::Report,
    transaction::{Transaction, TransactionKind},
};

const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

#[derive(Debug, Serialize)]
pub struct AccountRow<'a> {
    pub number: &'a str,
    pub owner: CustomerId,
    pub kind: String,
    pub balance: Decimal,
}

impl<'a> From<&'a Account> for AccountRow<'a> {
    fn from(acc: &'a Account) -> Self {
        Self {
            number: acc.number(),
            owner: acc.owner(),
            kind: acc.describe(),
            balance: acc.balance(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CustomerRow<'a> {
    pub id: CustomerId,
    pub full_name: &'a str,
}

impl<'a> From<&'a Customer> for CustomerRow<'a> {
    fn from(customer: &'a Customer) -> Self {
        Self {
            id: customer.id(),
            full_name: customer.full_name(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TransactionRow<'a> {
    pub timestamp: String,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub from: Option<&'a str>,
    pub to: Option<&'a str>,
    pub success: bool,
    pub message: &'a str,
}

impl<'a> From<&'a Transaction> for TransactionRow<'a> {
    fn from(tx: &'a Transaction) -> Self {
        Self {
            timestamp: tx.timestamp().format(TIMESTAMP_FORMAT).to_string(),
            kind: tx.kind(),
            amount: tx.amount(),
            from: tx.from(),
            to: tx.to(),
            success: tx.success(),
            message: tx.message(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReportRow {
    pub debit_accounts: usize,
    pub debit_balance: Decimal,
    pub credit_accounts: usize,
    pub credit_balance: Decimal,
    pub total_accounts: usize,
    pub total_balance: Decimal,
    pub successful_ops: usize,
    pub failed_ops: usize,
    pub total_ops: usize,
    pub customers: usize,
}

impl From<Report> for ReportRow {
    fn from(report: Report) -> Self {
        Self {
            debit_accounts: report.debit.count,
            debit_balance: report.debit.balance,
            credit_accounts: report.credit.count,
            credit_balance: report.credit.balance,
            total_accounts: report.total_accounts(),
            total_balance: report.total_balance(),
            successful_ops: report.successful_ops,
            failed_ops: report.failed_ops,
            total_ops: report.total_ops(),
            customers: report.customers,
        }
    }
}

pub fn print_rows<W, T>(output: &mut W, rows: impl Iterator<Item = T>) -> anyhow::Result<()>
where
    W: Write,
    T: Serialize,
{
    let mut writer = Writer::from_writer(output);
    for row in rows {
        if let Err(err) = writer.serialize(row) {
            anyhow::bail!("Failed to write to CSV: {err}")
        }
    }
    // Ensure all data is flushed to the output
    if let Err(err) = writer.flush() {
        anyhow::bail!("Failed to flush CSV writer: {err}")
    }
    Ok(())
}
