//! Authentication service - registration and password verification
//!
//! Passwords are stored as salted argon2id hashes in PHC string format,
//! never as plaintext.

use std::sync::Arc;

use argon2::password_hash::{
    rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
};
use argon2::Argon2;
use regex::Regex;

use crate::domain::result::{Error, Result};
use crate::ports::CredentialStore;

/// Usernames become file-name components, so the accepted alphabet is tight
const USERNAME_PATTERN: &str = r"^[A-Za-z0-9_.-]{1,32}$";

/// Authentication service for registration and login checks
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
}

impl AuthService {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// Register a new user
    ///
    /// Fails with `DuplicateUsername` when the name is taken; the store is
    /// left unchanged in that case.
    pub fn register(&self, username: &str, password: &str) -> Result<()> {
        let pattern = Regex::new(USERNAME_PATTERN).unwrap();
        if !pattern.is_match(username) {
            return Err(Error::validation(
                "username must be 1-32 characters of letters, digits, '_', '.' or '-'",
            ));
        }
        if password.is_empty() {
            return Err(Error::validation("password must not be empty"));
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| Error::PasswordHash(e.to_string()))?
            .to_string();

        if !self.store.insert(username, &hash)? {
            return Err(Error::DuplicateUsername(username.to_string()));
        }
        Ok(())
    }

    /// Check a username/password pair against the store
    ///
    /// Unknown usernames and wrong passwords both come back as false; only
    /// storage or hash-parsing problems are errors.
    pub fn verify(&self, username: &str, password: &str) -> Result<bool> {
        let Some(stored) = self.store.get(username)? else {
            return Ok(false);
        };
        let parsed =
            PasswordHash::new(&stored).map_err(|e| Error::PasswordHash(e.to_string()))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}
