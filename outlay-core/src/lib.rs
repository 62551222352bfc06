//! Outlay Core - Business logic for personal budget tracking
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core business entities (Ledger, Expense) and error types
//! - **ports**: Trait definitions for storage (CredentialStore, LedgerStore)
//! - **services**: Business logic orchestration (auth, sessions, logging)
//! - **adapters**: Concrete JSON-file storage implementations

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use adapters::{JsonCredentialStore, JsonLedgerStore};
use config::Config;
use services::{AuthService, SessionService};

// Re-export commonly used types at crate root
pub use domain::result::Error;
pub use domain::{Expense, Ledger, LedgerLoad, LedgerProvenance};
pub use services::{Session, Summary};

/// Main context for Outlay operations
///
/// This is the primary entry point for all business logic. It holds the
/// configuration, both JSON stores, and the services built on top of them.
pub struct OutlayContext {
    pub config: Config,
    pub credentials: Arc<JsonCredentialStore>,
    pub ledgers: Arc<JsonLedgerStore>,
    pub auth_service: AuthService,
    pub session_service: SessionService,
}

impl OutlayContext {
    /// Create a new Outlay context rooted at the given data directory
    pub fn new(outlay_dir: &Path) -> Result<Self> {
        let config = Config::load(outlay_dir)?;

        let credentials = Arc::new(JsonCredentialStore::new(outlay_dir));
        let ledgers = Arc::new(JsonLedgerStore::new(outlay_dir));

        // Arc<Json...Store> coerces to Arc<dyn ...Store> at the call sites
        let auth_service = AuthService::new(credentials.clone());
        let session_service = SessionService::new(credentials.clone(), ledgers.clone());

        Ok(Self {
            config,
            credentials,
            ledgers,
            auth_service,
            session_service,
        })
    }
}
