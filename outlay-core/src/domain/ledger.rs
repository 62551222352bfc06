//! Budget ledger domain model
//!
//! A ledger is one user's budget figure plus their expenses in insertion
//! order. Expenses are addressed by a stable id rather than by position, so
//! removing an entry never shifts the address of another.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::expense::Expense;
use crate::domain::result::{Error, Result};

/// One user's budget figure and expense list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default, with = "rust_decimal::serde::float")]
    pub initial_budget: Decimal,
    /// Next id to hand out; ids are monotonic and never reused
    #[serde(default = "first_expense_id")]
    pub next_expense_id: u64,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

fn first_expense_id() -> u64 {
    1
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            initial_budget: Decimal::ZERO,
            next_expense_id: first_expense_id(),
            expenses: Vec::new(),
        }
    }
}

impl Ledger {
    /// Set the budget figure
    ///
    /// Budgets must not be negative; zero is fine (the state of a fresh user).
    pub fn set_budget(&mut self, amount: Decimal) -> Result<()> {
        if amount < Decimal::ZERO {
            return Err(Error::validation("budget must not be negative"));
        }
        self.initial_budget = amount;
        Ok(())
    }

    /// Append a new expense and return its assigned id
    pub fn add(&mut self, description: &str, amount: Decimal) -> Result<u64> {
        Expense::validate(description, amount)?;
        let id = self.next_expense_id;
        self.next_expense_id += 1;
        self.expenses.push(Expense::new(id, description.trim(), amount));
        Ok(id)
    }

    /// Replace the expense with the given id in place
    pub fn edit(&mut self, id: u64, description: &str, amount: Decimal) -> Result<()> {
        Expense::validate(description, amount)?;
        let expense = self
            .expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| Error::not_found(format!("expense {}", id)))?;
        expense.description = description.trim().to_string();
        expense.amount = amount;
        Ok(())
    }

    /// Remove the expense with the given id, preserving the order of the rest
    pub fn remove(&mut self, id: u64) -> Result<Expense> {
        let position = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| Error::not_found(format!("expense {}", id)))?;
        Ok(self.expenses.remove(position))
    }

    /// Look up an expense by id
    pub fn get(&self, id: u64) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Sum of all expense amounts
    pub fn total_spent(&self) -> Decimal {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Budget minus total spent; negative means overspent
    pub fn balance(&self) -> Decimal {
        self.initial_budget - self.total_spent()
    }

    /// Assign ids to entries that have none
    ///
    /// Ledger files written by earlier versions carry no ids; their entries
    /// deserialize with id 0. This hands those entries fresh ids in order and
    /// advances the counter past every id in use.
    pub fn adopt_ids(&mut self) {
        let mut next = self.next_expense_id.max(first_expense_id());
        for expense in &self.expenses {
            if expense.id >= next {
                next = expense.id + 1;
            }
        }
        for expense in &mut self.expenses {
            if expense.id == 0 {
                expense.id = next;
                next += 1;
            }
        }
        self.next_expense_id = next;
    }
}

/// How a ledger was materialized by a load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerProvenance {
    /// Read from an existing, well-formed file
    Existing,
    /// No file on disk; this is a brand-new ledger
    Fresh,
    /// A file existed but could not be parsed; this ledger replaces it
    Corrupted,
}

/// A loaded ledger together with where it came from
///
/// The net behavior of a failed read is still an empty ledger, but callers
/// can tell a corrupted store from a first login and warn the user.
#[derive(Debug, Clone)]
pub struct LedgerLoad {
    pub ledger: Ledger,
    pub provenance: LedgerProvenance,
}
