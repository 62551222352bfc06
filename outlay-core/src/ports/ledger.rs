//! Ledger store port

use crate::domain::result::Result;
use crate::domain::{Ledger, LedgerLoad};

/// Per-user ledger storage abstraction
pub trait LedgerStore: Send + Sync {
    /// Load the ledger for a username
    ///
    /// A missing or unparseable file is not an error: the returned
    /// provenance says whether the ledger came from disk, is brand new, or
    /// replaced a corrupted file. Errors are reserved for real I/O failures.
    fn load(&self, username: &str) -> Result<LedgerLoad>;

    /// Overwrite the ledger for a username with the full current state
    fn save(&self, username: &str, ledger: &Ledger) -> Result<()>;
}
