use crate::customer::CustomerId;

/// Numbering parameters of a single ledger instance.
///
/// Every [`InMemoryLedger`](crate::ledger::in_memory_ledger::InMemoryLedger) owns
/// its own counters, seeded from this config, so independent ledgers never share ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Id given to the first registered customer.
    pub first_customer_id: CustomerId,
    /// Numeric part of the first opened account.
    pub first_account_number: u32,
    /// Prepended to every generated account number.
    pub account_prefix: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            first_customer_id: 1,
            first_account_number: 1001,
            account_prefix: "ACC".to_string(),
        }
    }
}
