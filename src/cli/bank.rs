//! Menu flow for the bank ledger tool.

use super::{another_operation, farewell, output, prompt::Prompter};
use crate::config::Profile;
use crate::errors::CoreResult;
use crate::ledger::{AccountService, LedgerStore, NewAccount, MIN_INITIAL_DEPOSIT};
use crate::timefmt;

const TOOL_NAME: &str = "Bank Transaction Management System";
const HISTORY_TAIL: usize = 5;

const MENU: [&str; 7] = [
    "Create New Account",
    "Deposit Money",
    "Withdraw Money",
    "Check Balance",
    "View Account Details",
    "View All Accounts",
    "Exit",
];

pub fn run(store: &LedgerStore, profile: &Profile, prompter: &Prompter) -> CoreResult<()> {
    println!("{}", profile.header("BANK TRANSACTION MANAGEMENT SYSTEM"));
    output::info("Welcome to the Bank Transaction Management System!");
    output::info("This system helps you manage bank accounts and transactions.");

    loop {
        let Some(choice) = prompter.menu("Bank Management Options", &MENU)? else {
            break;
        };
        match choice {
            0 => create_account(store, profile, prompter)?,
            1 => deposit(store, prompter)?,
            2 => withdraw(store, prompter)?,
            3 => check_balance(store, prompter)?,
            4 => view_details(store, prompter)?,
            5 => view_all(store),
            _ => break,
        }
        if !another_operation(prompter)? {
            break;
        }
    }
    farewell(profile, TOOL_NAME);
    Ok(())
}

fn create_account(store: &LedgerStore, profile: &Profile, prompter: &Prompter) -> CoreResult<()> {
    output::section("CREATE NEW ACCOUNT");
    let mut accounts = store.load();

    let Some(name) = prompter.nonempty_text("Enter account holder name")? else {
        return Ok(());
    };
    let Some(age) = prompter.integer_in_range("Enter age", 18, 100)? else {
        return Ok(());
    };
    let phone = loop {
        let Some(candidate) = prompter.nonempty_text("Enter phone number")? else {
            return Ok(());
        };
        if candidate.len() >= 10 {
            break candidate;
        }
        output::warning("Phone number must have at least 10 digits.");
    };
    output::info(format!(
        "Initial deposit (minimum ${:.0}):",
        MIN_INITIAL_DEPOSIT
    ));
    let initial_deposit = loop {
        let Some(amount) = prompter.positive_amount("Enter amount")? else {
            return Ok(());
        };
        if amount >= MIN_INITIAL_DEPOSIT {
            break amount;
        }
        output::warning(format!(
            "Minimum initial deposit is ${:.0}.",
            MIN_INITIAL_DEPOSIT
        ));
    };

    let details = NewAccount {
        name: name.clone(),
        age: age as u8,
        phone,
        initial_deposit,
    };
    match AccountService::create_account(&mut accounts, details, &profile.name) {
        Ok(number) => {
            if persist(store, &accounts) {
                output::success("Account created successfully!");
                output::separator();
                output::info(format!("Account Number: {}", number));
                output::info(format!("Account Holder: {}", name));
                output::info(format!("Initial Balance: ${:.2}", initial_deposit));
                output::info(format!("Created by: {}", profile.name));
                output::separator();
            }
        }
        Err(err) => output::error(err),
    }
    Ok(())
}

fn deposit(store: &LedgerStore, prompter: &Prompter) -> CoreResult<()> {
    output::section("DEPOSIT MONEY");
    let mut accounts = store.load();
    if accounts.is_empty() {
        output::info("No accounts found! Please create an account first.");
        return Ok(());
    }

    let Some(number) = account_number(prompter)? else {
        return Ok(());
    };
    let Some(amount) = prompter.positive_amount("Enter amount")? else {
        return Ok(());
    };

    let balance = match AccountService::deposit(&mut accounts, &number, amount) {
        Ok(account) => account.balance,
        Err(err) => {
            output::error(err);
            return Ok(());
        }
    };
    if persist(store, &accounts) {
        output::success("Deposit successful!");
        output::separator();
        output::info(format!("Account Number: {}", number));
        output::info(format!("Deposited Amount: ${:.2}", amount));
        output::info(format!("New Balance: ${:.2}", balance));
        output::separator();
    }
    Ok(())
}

fn withdraw(store: &LedgerStore, prompter: &Prompter) -> CoreResult<()> {
    output::section("WITHDRAW MONEY");
    let mut accounts = store.load();
    if accounts.is_empty() {
        output::info("No accounts found! Please create an account first.");
        return Ok(());
    }

    let Some(number) = account_number(prompter)? else {
        return Ok(());
    };
    // Show the balance before asking for the amount. Single-process usage
    // is assumed; the service re-checks funds at mutation time anyway.
    let current = match AccountService::account(&accounts, &number) {
        Ok(account) => account.balance,
        Err(err) => {
            output::error(err);
            return Ok(());
        }
    };
    output::info(format!("Current Balance: ${:.2}", current));

    let Some(amount) = prompter.positive_amount("Enter amount")? else {
        return Ok(());
    };
    let balance = match AccountService::withdraw(&mut accounts, &number, amount) {
        Ok(account) => account.balance,
        Err(err) => {
            output::error(err);
            return Ok(());
        }
    };
    if persist(store, &accounts) {
        output::success("Withdrawal successful!");
        output::separator();
        output::info(format!("Account Number: {}", number));
        output::info(format!("Withdrawn Amount: ${:.2}", amount));
        output::info(format!("Remaining Balance: ${:.2}", balance));
        output::separator();
    }
    Ok(())
}

fn check_balance(store: &LedgerStore, prompter: &Prompter) -> CoreResult<()> {
    output::section("CHECK BALANCE");
    let accounts = store.load();
    if accounts.is_empty() {
        output::info("No accounts found! Please create an account first.");
        return Ok(());
    }

    let Some(number) = account_number(prompter)? else {
        return Ok(());
    };
    match AccountService::account(&accounts, &number) {
        Ok(account) => {
            output::section("BALANCE INQUIRY");
            output::info(format!("Account Number: {}", account.account_number));
            output::info(format!("Account Holder: {}", account.name));
            output::info(format!("Current Balance: ${:.2}", account.balance));
            output::separator();
        }
        Err(err) => output::error(err),
    }
    Ok(())
}

fn view_details(store: &LedgerStore, prompter: &Prompter) -> CoreResult<()> {
    output::section("ACCOUNT DETAILS");
    let accounts = store.load();
    if accounts.is_empty() {
        output::info("No accounts found! Please create an account first.");
        return Ok(());
    }

    let Some(number) = account_number(prompter)? else {
        return Ok(());
    };
    let account = match AccountService::account(&accounts, &number) {
        Ok(account) => account,
        Err(err) => {
            output::error(err);
            return Ok(());
        }
    };

    output::section("COMPLETE ACCOUNT INFORMATION");
    output::info(format!("Account Number: {}", account.account_number));
    output::info(format!("Account Holder: {}", account.name));
    output::info(format!("Age: {}", account.age));
    output::info(format!("Phone: {}", account.phone));
    output::info(format!("Current Balance: ${:.2}", account.balance));
    output::info(format!(
        "Account Created: {}",
        timefmt::format_stamp(&account.created_date)
    ));
    output::info(format!("Created by: {}", account.created_by));

    output::section("TRANSACTION HISTORY");
    let total = account.transactions.len();
    let start = total.saturating_sub(HISTORY_TAIL);
    for (position, txn) in account.transactions[start..].iter().enumerate() {
        output::info(format!(
            "{}. {}: ${:.2}",
            position + 1,
            txn.kind.label(),
            txn.amount
        ));
        output::info(format!(
            "   Balance: ${:.2} | Date: {}",
            txn.balance,
            timefmt::format_stamp(&txn.date)
        ));
    }
    if total > HISTORY_TAIL {
        output::info(format!("... and {} more transactions", total - HISTORY_TAIL));
    }
    output::separator();
    Ok(())
}

fn view_all(store: &LedgerStore) {
    output::section("ALL ACCOUNTS SUMMARY");
    let accounts = store.load();
    if accounts.is_empty() {
        output::info("No accounts found! Please create an account first.");
        return;
    }

    output::info(format!(
        "{:<12} {:<20} {:<15} {:<15}",
        "Account No.", "Name", "Balance", "Created"
    ));
    output::separator();
    let mut total_balance = 0.0;
    for (number, account) in &accounts {
        total_balance += account.balance;
        let name: String = account.name.chars().take(19).collect();
        let created = timefmt::format_stamp(&account.created_date);
        let created_day = created.split_whitespace().next().unwrap_or(&created);
        output::info(format!(
            "{:<12} {:<20} ${:<14.2} {:<15}",
            number, name, account.balance, created_day
        ));
    }
    output::separator();
    output::info(format!("Total Accounts: {}", accounts.len()));
    output::info(format!("Total Bank Balance: ${:.2}", total_balance));
}

fn account_number(prompter: &Prompter) -> CoreResult<Option<String>> {
    Ok(prompter
        .nonempty_text("Enter account number")?
        .map(|raw| raw.to_uppercase()))
}

fn persist(store: &LedgerStore, accounts: &crate::ledger::Accounts) -> bool {
    match store.save(accounts) {
        Ok(()) => true,
        Err(err) => {
            output::error(format!("Error saving data: {}", err));
            false
        }
    }
}
