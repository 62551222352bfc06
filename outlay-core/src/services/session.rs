//! Session service - explicit login/logout lifecycle around the ledger
//!
//! The current user and their in-memory expense list travel in a `Session`
//! value: constructed by `login`, threaded through each operation, and
//! consumed by `logout`. Every mutating operation persists the full ledger
//! before returning, so nothing survives only in memory.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::result::{Error, Result};
use crate::domain::{Expense, Ledger, LedgerProvenance};
use crate::ports::{CredentialStore, LedgerStore};
use crate::services::AuthService;

/// A logged-in user and their ledger
#[derive(Debug)]
pub struct Session {
    /// Correlates log events belonging to one login
    pub id: Uuid,
    pub username: String,
    pub ledger: Ledger,
    /// How the ledger was materialized at login
    pub provenance: LedgerProvenance,
}

/// Service owning the login/logout lifecycle and ledger mutations
pub struct SessionService {
    auth: AuthService,
    ledgers: Arc<dyn LedgerStore>,
}

impl SessionService {
    pub fn new(credentials: Arc<dyn CredentialStore>, ledgers: Arc<dyn LedgerStore>) -> Self {
        Self {
            auth: AuthService::new(credentials),
            ledgers,
        }
    }

    /// Authenticate and open a session
    ///
    /// A first login finds no ledger file and starts from an empty ledger;
    /// the provenance tells the caller whether that emptiness is `Fresh` or
    /// stands in for a `Corrupted` file worth warning about.
    pub fn login(&self, username: &str, password: &str) -> Result<Session> {
        if !self.auth.verify(username, password)? {
            return Err(Error::InvalidCredentials);
        }
        let loaded = self.ledgers.load(username)?;
        Ok(Session {
            id: Uuid::new_v4(),
            username: username.to_string(),
            ledger: loaded.ledger,
            provenance: loaded.provenance,
        })
    }

    /// Persist the final state and tear the session down
    pub fn logout(&self, session: Session) -> Result<()> {
        self.ledgers.save(&session.username, &session.ledger)
    }

    /// Set the budget figure and persist
    pub fn set_budget(&self, session: &mut Session, amount: Decimal) -> Result<()> {
        session.ledger.set_budget(amount)?;
        self.ledgers.save(&session.username, &session.ledger)
    }

    /// Append an expense, persist, and return the assigned id
    pub fn add_expense(
        &self,
        session: &mut Session,
        description: &str,
        amount: Decimal,
    ) -> Result<u64> {
        let id = session.ledger.add(description, amount)?;
        self.ledgers.save(&session.username, &session.ledger)?;
        Ok(id)
    }

    /// Replace an expense in place and persist
    pub fn edit_expense(
        &self,
        session: &mut Session,
        id: u64,
        description: &str,
        amount: Decimal,
    ) -> Result<()> {
        session.ledger.edit(id, description, amount)?;
        self.ledgers.save(&session.username, &session.ledger)
    }

    /// Remove an expense, persist, and return the removed entry
    pub fn remove_expense(&self, session: &mut Session, id: u64) -> Result<Expense> {
        let removed = session.ledger.remove(id)?;
        self.ledgers.save(&session.username, &session.ledger)?;
        Ok(removed)
    }

    /// Aggregate figures for display
    pub fn summary(&self, session: &Session) -> Summary {
        Summary {
            username: session.username.clone(),
            initial_budget: session.ledger.initial_budget,
            total_spent: session.ledger.total_spent(),
            balance: session.ledger.balance(),
            expense_count: session.ledger.expenses.len(),
        }
    }
}

/// Aggregate ledger figures for the presentation layer
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub username: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub initial_budget: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_spent: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    pub expense_count: usize,
}
