//! JSON-file storage adapters
//!
//! Both stores live in the data directory: one shared `credentials.json`
//! plus one `budget_data_<username>.json` per user. Every write goes through
//! a temp file in the same directory followed by an atomic rename, so a
//! reader never observes a truncated file.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::Serialize;

use crate::domain::result::{Error, Result};
use crate::domain::{Ledger, LedgerLoad, LedgerProvenance};
use crate::ports::{CredentialStore, LedgerStore};

const CREDENTIALS_FILE: &str = "credentials.json";
const LEDGER_PREFIX: &str = "budget_data_";

/// Serialize a value as pretty JSON and atomically replace `path` with it
fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| Error::validation(format!("no parent directory: {}", path.display())))?;
    let content = serde_json::to_string_pretty(value)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| Error::Io(e.error))?;
    Ok(())
}

/// Credential store backed by one shared JSON object file
pub struct JsonCredentialStore {
    path: PathBuf,
    lock_path: PathBuf,
}

impl JsonCredentialStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(CREDENTIALS_FILE),
            lock_path: data_dir.join(format!("{}.lock", CREDENTIALS_FILE)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full username -> hash map
    ///
    /// A missing file is an empty store. A file that exists but does not
    /// parse is a hard error: treating the shared credential file as empty
    /// would let a re-registration silently wipe every account.
    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|_| Error::corrupt(self.path.display().to_string()))
    }
}

impl CredentialStore for JsonCredentialStore {
    fn get(&self, username: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.get(username).cloned())
    }

    fn insert(&self, username: &str, password_hash: &str) -> Result<bool> {
        // Exclusive advisory lock around the read-modify-write. The lock
        // lives in a sidecar file because the store itself is replaced by
        // rename on every write.
        let lock = File::create(&self.lock_path)?;
        FileExt::lock_exclusive(&lock)?;

        let result = (|| {
            let mut credentials = self.read_all()?;
            if credentials.contains_key(username) {
                return Ok(false);
            }
            credentials.insert(username.to_string(), password_hash.to_string());
            write_json_atomic(&self.path, &credentials)?;
            Ok(true)
        })();

        let _ = FileExt::unlock(&lock);
        result
    }
}

/// Ledger store backed by one JSON file per username
pub struct JsonLedgerStore {
    data_dir: PathBuf,
}

impl JsonLedgerStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
        }
    }

    /// Ledger file for a username, e.g. `budget_data_alice.json`
    pub fn path_for(&self, username: &str) -> PathBuf {
        self.data_dir.join(format!("{}{}.json", LEDGER_PREFIX, username))
    }
}

impl LedgerStore for JsonLedgerStore {
    fn load(&self, username: &str) -> Result<LedgerLoad> {
        let path = self.path_for(username);
        if !path.exists() {
            return Ok(LedgerLoad {
                ledger: Ledger::default(),
                provenance: LedgerProvenance::Fresh,
            });
        }

        let content = fs::read_to_string(&path)?;
        match serde_json::from_str::<Ledger>(&content) {
            Ok(mut ledger) => {
                ledger.adopt_ids();
                Ok(LedgerLoad {
                    ledger,
                    provenance: LedgerProvenance::Existing,
                })
            }
            Err(_) => Ok(LedgerLoad {
                ledger: Ledger::default(),
                provenance: LedgerProvenance::Corrupted,
            }),
        }
    }

    fn save(&self, username: &str, ledger: &Ledger) -> Result<()> {
        write_json_atomic(&self.path_for(username), ledger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use tempfile::tempdir;

    #[test]
    fn test_credentials_missing_file_is_empty_store() {
        let dir = tempdir().unwrap();
        let store = JsonCredentialStore::new(dir.path());
        assert_eq!(store.get("alice").unwrap(), None);
    }

    #[test]
    fn test_credentials_insert_and_get() {
        let dir = tempdir().unwrap();
        let store = JsonCredentialStore::new(dir.path());

        assert!(store.insert("alice", "hash-1").unwrap());
        assert_eq!(store.get("alice").unwrap(), Some("hash-1".to_string()));
        assert_eq!(store.get("bob").unwrap(), None);
    }

    #[test]
    fn test_credentials_duplicate_insert_leaves_store_unchanged() {
        let dir = tempdir().unwrap();
        let store = JsonCredentialStore::new(dir.path());

        assert!(store.insert("alice", "hash-1").unwrap());
        assert!(!store.insert("alice", "hash-2").unwrap());
        assert_eq!(store.get("alice").unwrap(), Some("hash-1".to_string()));
    }

    #[test]
    fn test_credentials_corrupt_file_fails_fast() {
        let dir = tempdir().unwrap();
        let store = JsonCredentialStore::new(dir.path());
        fs::write(store.path(), "{not json").unwrap();

        assert!(matches!(store.get("alice"), Err(Error::Corrupt(_))));
        assert!(matches!(store.insert("bob", "h"), Err(Error::Corrupt(_))));
    }

    #[test]
    fn test_ledger_missing_file_is_fresh() {
        let dir = tempdir().unwrap();
        let store = JsonLedgerStore::new(dir.path());

        let loaded = store.load("alice").unwrap();
        assert_eq!(loaded.provenance, LedgerProvenance::Fresh);
        assert_eq!(loaded.ledger, Ledger::default());
    }

    #[test]
    fn test_ledger_round_trip() {
        let dir = tempdir().unwrap();
        let store = JsonLedgerStore::new(dir.path());

        let mut ledger = Ledger::default();
        ledger.set_budget(Decimal::new(5000, 0)).unwrap();
        ledger.add("Groceries", Decimal::new(1200, 0)).unwrap();
        ledger.add("Rent", Decimal::new(2000, 0)).unwrap();

        store.save("alice", &ledger).unwrap();
        let loaded = store.load("alice").unwrap();

        assert_eq!(loaded.provenance, LedgerProvenance::Existing);
        assert_eq!(loaded.ledger, ledger);
    }

    #[test]
    fn test_ledger_corrupt_file_yields_default_with_provenance() {
        let dir = tempdir().unwrap();
        let store = JsonLedgerStore::new(dir.path());
        fs::write(store.path_for("alice"), "{\"initial_budget\": ").unwrap();

        let loaded = store.load("alice").unwrap();
        assert_eq!(loaded.provenance, LedgerProvenance::Corrupted);
        assert_eq!(loaded.ledger, Ledger::default());
    }

    #[test]
    fn test_ledger_legacy_format_without_ids() {
        let dir = tempdir().unwrap();
        let store = JsonLedgerStore::new(dir.path());
        fs::write(
            store.path_for("alice"),
            r#"{"initial_budget": 5000, "expenses": [
                {"description": "Groceries", "amount": 1200},
                {"description": "Rent", "amount": 2000}
            ]}"#,
        )
        .unwrap();

        let loaded = store.load("alice").unwrap();
        assert_eq!(loaded.provenance, LedgerProvenance::Existing);
        let ids: Vec<u64> = loaded.ledger.expenses.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(loaded.ledger.total_spent(), Decimal::new(3200, 0));
    }

    #[test]
    fn test_ledger_files_are_per_user() {
        let dir = tempdir().unwrap();
        let store = JsonLedgerStore::new(dir.path());

        let mut alice = Ledger::default();
        alice.add("Coffee", Decimal::ONE).unwrap();
        store.save("alice", &alice).unwrap();

        let bob = store.load("bob").unwrap();
        assert_eq!(bob.provenance, LedgerProvenance::Fresh);
        assert!(bob.ledger.expenses.is_empty());
    }
}
