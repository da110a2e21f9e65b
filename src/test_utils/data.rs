use std::sync::{Arc, Mutex};

use tempfile::TempDir;

use crate::{
    store::{StoreState, TransactionStore},
    transaction::{Transaction, TransactionType},
};

/// A salary on 2024-01-05 (ID "1") and groceries on 2024-01-10 (ID "2").
pub(crate) fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: "1".to_owned(),
            date: "2024-01-05".to_owned(),
            description: "Salary".to_owned(),
            amount: 100.0,
            type_: TransactionType::Income,
        },
        Transaction {
            id: "2".to_owned(),
            date: "2024-01-10".to_owned(),
            description: "Groceries".to_owned(),
            amount: 40.0,
            type_: TransactionType::Expense,
        },
    ]
}

/// Handler state backed by `data.json` in `dir`.
pub(crate) fn store_state(dir: &TempDir) -> StoreState {
    StoreState {
        store: Arc::new(Mutex::new(TransactionStore::new(
            dir.path().join("data.json"),
        ))),
    }
}
