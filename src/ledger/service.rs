use tracing::debug;

use super::account::{Account, Accounts, NewAccount};
use super::transaction::TransactionKind;
use crate::errors::{CoreError, CoreResult};

/// Smallest amount accepted when opening an account.
pub const MIN_INITIAL_DEPOSIT: f64 = 100.0;

const ACCOUNT_PREFIX: &str = "ACC";

/// Balance-affecting operations over the account mapping.
///
/// Mutations are in-memory only; persisting the mapping afterwards is the
/// caller's separate, explicit step. A failed operation leaves the mapping
/// untouched.
pub struct AccountService;

impl AccountService {
    /// Validates the holder details, assigns the next account number, and
    /// inserts the account with its initial-deposit transaction.
    pub fn create_account(
        accounts: &mut Accounts,
        details: NewAccount,
        created_by: &str,
    ) -> CoreResult<String> {
        Self::validate_details(&details)?;
        let number = Self::next_account_number(accounts);
        let account = Account::open(number.clone(), details, created_by);
        accounts.insert(number.clone(), account);
        debug!(account = %number, "account created");
        Ok(number)
    }

    pub fn deposit<'a>(
        accounts: &'a mut Accounts,
        number: &str,
        amount: f64,
    ) -> CoreResult<&'a Account> {
        Self::validate_amount(amount)?;
        let account = Self::lookup_mut(accounts, number)?;
        account.balance += amount;
        account.record(TransactionKind::Deposit, amount);
        debug!(account = %number, amount, balance = account.balance, "deposit applied");
        Ok(account)
    }

    pub fn withdraw<'a>(
        accounts: &'a mut Accounts,
        number: &str,
        amount: f64,
    ) -> CoreResult<&'a Account> {
        Self::validate_amount(amount)?;
        let account = Self::lookup_mut(accounts, number)?;
        if amount > account.balance {
            return Err(CoreError::InsufficientFunds {
                requested: amount,
                available: account.balance,
            });
        }
        account.balance -= amount;
        account.record(TransactionKind::Withdrawal, amount);
        debug!(account = %number, amount, balance = account.balance, "withdrawal applied");
        Ok(account)
    }

    pub fn account<'a>(accounts: &'a Accounts, number: &str) -> CoreResult<&'a Account> {
        accounts
            .get(number)
            .ok_or_else(|| CoreError::AccountNotFound(number.to_string()))
    }

    /// Next sequential identifier: one past the highest numeric suffix
    /// among existing `ACC`-prefixed keys, or `ACC001` for an empty map.
    pub fn next_account_number(accounts: &Accounts) -> String {
        let max = accounts
            .keys()
            .filter_map(|key| key.strip_prefix(ACCOUNT_PREFIX))
            .filter_map(|suffix| suffix.parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        format!("{}{:03}", ACCOUNT_PREFIX, max + 1)
    }

    fn lookup_mut<'a>(accounts: &'a mut Accounts, number: &str) -> CoreResult<&'a mut Account> {
        accounts
            .get_mut(number)
            .ok_or_else(|| CoreError::AccountNotFound(number.to_string()))
    }

    fn validate_amount(amount: f64) -> CoreResult<()> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(CoreError::Validation(
                "Amount must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    fn validate_details(details: &NewAccount) -> CoreResult<()> {
        if details.name.trim().is_empty() {
            return Err(CoreError::Validation(
                "Account holder name must not be empty".into(),
            ));
        }
        if !(18..=100).contains(&details.age) {
            return Err(CoreError::Validation(
                "Age must be between 18 and 100".into(),
            ));
        }
        if details.phone.trim().len() < 10 {
            return Err(CoreError::Validation(
                "Phone number must have at least 10 digits".into(),
            ));
        }
        Self::validate_amount(details.initial_deposit)?;
        if details.initial_deposit < MIN_INITIAL_DEPOSIT {
            return Err(CoreError::Validation(format!(
                "Minimum initial deposit is {:.0}",
                MIN_INITIAL_DEPOSIT
            )));
        }
        Ok(())
    }
}
