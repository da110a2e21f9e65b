//! Persists the transaction collection as a single JSON document on disk.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, MutexGuard},
};

use axum::extract::FromRef;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::{AppState, Error, transaction::Transaction};

/// Reads and writes the full list of transactions at `path`.
///
/// Every save overwrites the whole file. There is no caching, so each
/// request reads the file again.
#[derive(Debug, Clone)]
pub struct TransactionStore {
    path: PathBuf,
}

impl TransactionStore {
    /// A store backed by the JSON file at `path`. The file is not touched
    /// until the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every stored transaction in file order.
    ///
    /// A missing file is treated as an empty collection.
    ///
    /// # Errors
    /// Returns an:
    /// - [Error::CorruptStore] if the file is not a JSON array of transactions,
    /// - [Error::Io] if the file exists but cannot be read.
    pub fn load(&self) -> Result<Vec<Transaction>, Error> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                tracing::debug!(
                    "No store file at {}, starting with no transactions",
                    self.path.display()
                );
                return Ok(Vec::new());
            }
            Err(error) => return Err(error.into()),
        };

        serde_json::from_str(&text).map_err(|error| {
            tracing::error!("Could not parse {}: {error}", self.path.display());
            Error::CorruptStore(error.to_string())
        })
    }

    /// Replace the file contents with `transactions`, indented with four spaces.
    ///
    /// # Errors
    /// Returns an [Error::Io] if the file cannot be written.
    pub fn save(&self, transactions: &[Transaction]) -> Result<(), Error> {
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        transactions
            .serialize(&mut serializer)
            .map_err(|error| Error::Io(error.to_string()))?;

        fs::write(&self.path, buffer).inspect_err(|error| {
            tracing::error!("Could not write {}: {error}", self.path.display())
        })?;

        Ok(())
    }
}

/// The store shared between request handlers.
///
/// Handlers hold the lock for the whole load, modify and save cycle so that
/// concurrent writes cannot lose updates.
pub type SharedStore = Arc<Mutex<TransactionStore>>;

/// Acquire the store lock, mapping a poisoned lock to [Error::StoreLock].
pub fn lock_store(store: &SharedStore) -> Result<MutexGuard<'_, TransactionStore>, Error> {
    store.lock().map_err(|error| {
        tracing::error!("Could not acquire the store lock: {error}");
        Error::StoreLock
    })
}

/// The state needed by handlers that read or write transactions.
#[derive(Debug, Clone)]
pub struct StoreState {
    pub store: SharedStore,
}

impl FromRef<AppState> for StoreState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use crate::{
        Error,
        store::TransactionStore,
        transaction::{Transaction, TransactionType},
    };

    fn store_in(dir: &TempDir) -> TransactionStore {
        TransactionStore::new(dir.path().join("data.json"))
    }

    fn transaction(id: &str, description: &str) -> Transaction {
        Transaction {
            id: id.to_owned(),
            date: "2024-01-05".to_owned(),
            description: description.to_owned(),
            amount: 12.5,
            type_: TransactionType::Expense,
        }
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();

        let transactions = store_in(&dir).load().unwrap();

        assert!(transactions.is_empty());
    }

    #[test]
    fn save_then_load_preserves_order() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let want = vec![
            transaction("b", "Second \"quoted\""),
            transaction("a", "First, with comma"),
        ];

        store.save(&want).unwrap();
        let got = store.load().unwrap();

        assert_eq!(got, want);
    }

    #[test]
    fn saves_with_four_space_indent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(&[transaction("a", "Coffee")]).unwrap();
        let text = fs::read_to_string(store.path()).unwrap();

        assert!(
            text.starts_with("[\n    {\n        \"id\": \"a\","),
            "unexpected file layout:\n{text}"
        );
        assert!(text.contains("\"type\": \"Expense\""));
    }

    #[test]
    fn save_empty_writes_empty_array() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(&[]).unwrap();

        assert_eq!(fs::read_to_string(store.path()).unwrap(), "[]");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn invalid_json_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{not json").unwrap();

        let result = store.load();

        assert!(matches!(result, Err(Error::CorruptStore(_))));
    }

    #[test]
    fn unknown_type_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            r#"[{"id":"a","date":"2024-01-05","description":"","amount":1,"type":"Transfer"}]"#,
        )
        .unwrap();

        let result = store.load();

        assert!(matches!(result, Err(Error::CorruptStore(_))));
    }

    #[test]
    fn unwritable_path_is_io_error() {
        let dir = TempDir::new().unwrap();
        let store = TransactionStore::new(dir.path().join("missing_dir").join("data.json"));

        let result = store.save(&[transaction("a", "Coffee")]);

        assert!(matches!(result, Err(Error::Io(_))));
    }
}
