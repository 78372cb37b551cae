//! Bank ledger domain models, operations, and persistence.

pub mod account;
pub mod service;
pub mod store;
pub mod transaction;

pub use account::{Account, Accounts, NewAccount};
pub use service::{AccountService, MIN_INITIAL_DEPOSIT};
pub use store::LedgerStore;
pub use transaction::{Transaction, TransactionKind};
