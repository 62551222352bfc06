//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! with validation logic - no I/O or external dependencies.

mod expense;
mod ledger;
pub mod result;

pub use expense::Expense;
pub use ledger::{Ledger, LedgerLoad, LedgerProvenance};
