//! Credential store port

use crate::domain::result::Result;

/// Username to password-hash storage abstraction
pub trait CredentialStore: Send + Sync {
    /// Look up the stored password hash for a username
    fn get(&self, username: &str) -> Result<Option<String>>;

    /// Insert a new credential record
    ///
    /// Returns false, leaving the store unchanged, when the username is
    /// already registered. Implementations must make the read-modify-write
    /// safe against a concurrent registration of the same name.
    fn insert(&self, username: &str, password_hash: &str) -> Result<bool>;
}
