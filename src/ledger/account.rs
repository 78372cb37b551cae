use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::transaction::{Transaction, TransactionKind};
use crate::timefmt;

/// Mapping from account number to account record, as persisted on disk.
pub type Accounts = BTreeMap<String, Account>;

/// A named, balanced record with an append-only transaction history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub account_number: String,
    pub name: String,
    pub age: u8,
    pub phone: String,
    pub balance: f64,
    #[serde(with = "timefmt::stamp")]
    pub created_date: NaiveDateTime,
    pub created_by: String,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl Account {
    /// Opens an account with its mandatory initial deposit on record.
    /// Validation happens upstream in [`super::AccountService`].
    pub(crate) fn open(account_number: String, details: NewAccount, created_by: &str) -> Self {
        let NewAccount {
            name,
            age,
            phone,
            initial_deposit,
        } = details;
        let mut account = Self {
            account_number,
            name,
            age,
            phone,
            balance: initial_deposit,
            created_date: timefmt::now(),
            created_by: created_by.to_string(),
            transactions: Vec::new(),
        };
        account.record(TransactionKind::InitialDeposit, initial_deposit);
        account
    }

    /// Appends a transaction reflecting the current balance. Callers
    /// adjust `balance` first; the entry snapshots the result.
    pub(crate) fn record(&mut self, kind: TransactionKind, amount: f64) {
        self.transactions
            .push(Transaction::new(kind, amount, self.balance));
    }

    pub fn last_transaction(&self) -> Option<&Transaction> {
        self.transactions.last()
    }
}

/// Holder details collected at the boundary before an account exists.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub age: u8,
    pub phone: String,
    pub initial_deposit: f64,
}
