use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::timefmt;

/// Immutable record of a single balance-affecting event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    /// Account balance after this transaction was applied.
    pub balance: f64,
    #[serde(with = "timefmt::stamp")]
    pub date: NaiveDateTime,
}

impl Transaction {
    pub fn new(kind: TransactionKind, amount: f64, balance: f64) -> Self {
        Self {
            kind,
            amount,
            balance,
            date: timefmt::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    #[serde(rename = "Initial Deposit")]
    InitialDeposit,
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::InitialDeposit => "Initial Deposit",
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdrawal => "Withdrawal",
        }
    }
}
