//! Port definitions - the storage seams
//!
//! These traits isolate the services from how credentials and ledgers are
//! actually persisted. The JSON-file adapters are the only production
//! implementations.

pub mod credential;
pub mod ledger;

pub use credential::CredentialStore;
pub use ledger::LedgerStore;
