//! Expense entry domain model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::result::{Error, Result};

/// A single expense line item within a ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Stable identifier, assigned once at creation and never reused.
    /// Files written before ids existed deserialize to 0 and are assigned
    /// fresh ids on load.
    #[serde(default)]
    pub id: u64,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

impl Expense {
    pub fn new(id: u64, description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
        }
    }

    /// Check that a description/amount pair is acceptable
    ///
    /// Descriptions must be non-empty after trimming; amounts must be
    /// strictly positive.
    pub fn validate(description: &str, amount: Decimal) -> Result<()> {
        if description.trim().is_empty() {
            return Err(Error::validation("description must not be empty"));
        }
        if amount <= Decimal::ZERO {
            return Err(Error::validation("amount must be positive"));
        }
        Ok(())
    }
}
