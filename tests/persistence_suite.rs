use std::fs;

use campus_core::{
    errors::CoreError,
    ledger::{AccountService, LedgerStore, NewAccount},
    tasks::{TaskService, TaskStore},
};
use tempfile::tempdir;

fn holder(name: &str, initial_deposit: f64) -> NewAccount {
    NewAccount {
        name: name.into(),
        age: 30,
        phone: "0123456789".into(),
        initial_deposit,
    }
}

#[test]
fn ledger_read_modify_write_cycle_keeps_invariants() {
    let temp = tempdir().unwrap();
    let store = LedgerStore::new(temp.path().join("accounts.json"));

    // Create with the minimum initial deposit.
    let mut accounts = store.load();
    let number =
        AccountService::create_account(&mut accounts, holder("Sam Carter", 100.0), "suite")
            .expect("create account");
    assert_eq!(number, "ACC001");
    store.save(&accounts).expect("save after create");

    // Deposit 50 in a fresh cycle.
    let mut accounts = store.load();
    AccountService::deposit(&mut accounts, &number, 50.0).expect("deposit");
    store.save(&accounts).expect("save after deposit");

    // Overdraw attempt mutates nothing; the failed cycle saves nothing.
    let mut accounts = store.load();
    let err = AccountService::withdraw(&mut accounts, &number, 200.0)
        .expect_err("overdraw must fail");
    assert!(matches!(err, CoreError::InsufficientFunds { .. }));

    let accounts = store.load();
    assert_eq!(accounts[&number].balance, 150.0);
    assert_eq!(accounts[&number].transactions.len(), 2);

    // Withdraw the full balance.
    let mut accounts = store.load();
    AccountService::withdraw(&mut accounts, &number, 150.0).expect("withdraw");
    store.save(&accounts).expect("save after withdraw");

    let accounts = store.load();
    let account = &accounts[&number];
    assert_eq!(account.balance, 0.0);
    assert_eq!(account.transactions.len(), 3);
    assert_eq!(account.last_transaction().map(|txn| txn.balance), Some(0.0));
}

#[test]
fn identifiers_stay_sequential_across_reloads() {
    let temp = tempdir().unwrap();
    let store = LedgerStore::new(temp.path().join("accounts.json"));

    for expected in ["ACC001", "ACC002", "ACC003"] {
        let mut accounts = store.load();
        let number =
            AccountService::create_account(&mut accounts, holder(expected, 100.0), "suite")
                .expect("create account");
        assert_eq!(number, expected);
        store.save(&accounts).expect("save");
    }
}

#[test]
fn round_trip_law_holds_for_a_populated_mapping() {
    let temp = tempdir().unwrap();
    let store = LedgerStore::new(temp.path().join("accounts.json"));

    let mut accounts = store.load();
    for (name, deposit) in [("One", 100.0), ("Two", 2500.5), ("Three", 100.25)] {
        AccountService::create_account(&mut accounts, holder(name, deposit), "suite")
            .expect("create account");
    }
    let first = AccountService::next_account_number(&accounts);
    assert_eq!(first, "ACC004");

    store.save(&accounts).expect("save");
    assert_eq!(store.load(), accounts);
}

#[test]
fn corrupted_or_missing_storage_degrades_to_empty() {
    let temp = tempdir().unwrap();

    let ledger = LedgerStore::new(temp.path().join("accounts.json"));
    assert!(ledger.load().is_empty());
    fs::write(ledger.path(), "][ definitely not json").unwrap();
    assert!(ledger.load().is_empty());

    let tasks = TaskStore::new(temp.path().join("tasks.txt"));
    assert!(tasks.load().is_empty());
}

#[test]
fn failed_atomic_save_preserves_previous_document() {
    let temp = tempdir().unwrap();
    let store = LedgerStore::new(temp.path().join("accounts.json"));

    let mut accounts = store.load();
    AccountService::create_account(&mut accounts, holder("Keeper", 100.0), "suite")
        .expect("create account");
    store.save(&accounts).expect("initial save");
    let original = fs::read_to_string(store.path()).expect("read original");

    // A directory squatting on the temp path forces the write to fail.
    fs::create_dir_all(temp.path().join("accounts.json.tmp")).unwrap();
    AccountService::deposit(&mut accounts, "ACC001", 25.0).expect("deposit");
    assert!(store.save(&accounts).is_err(), "save must report the failure");

    let current = fs::read_to_string(store.path()).expect("read after failure");
    assert_eq!(current, original, "failed save must not corrupt the document");
}

#[test]
fn task_list_survives_a_full_session() {
    let temp = tempdir().unwrap();
    let store = TaskStore::new(temp.path().join("tasks.txt"));

    let mut tasks = store.load();
    TaskService::add(&mut tasks, "collect samples | label them").expect("add");
    TaskService::add(&mut tasks, "write up results").expect("add");
    store.save(&tasks).expect("save");

    let mut tasks = store.load();
    TaskService::complete(&mut tasks, 1).expect("complete");
    store.save(&tasks).expect("save");

    let mut tasks = store.load();
    assert_eq!(tasks.len(), 2);
    assert!(tasks[0].is_completed());
    assert_eq!(tasks[0].description, "collect samples | label them");

    TaskService::remove(&mut tasks, 2).expect("remove");
    store.save(&tasks).expect("save");
    assert_eq!(store.load().len(), 1);
}
