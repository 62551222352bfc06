//! Integration tests for outlay-core services
//!
//! These tests verify the data-integrity contract end to end against real
//! JSON files in temp directories: registration, login, ledger mutations,
//! persistence, and the corrupted-file behaviors.

use std::fs;

use rust_decimal::Decimal;
use tempfile::TempDir;

use outlay_core::domain::result::Error;
use outlay_core::{LedgerProvenance, OutlayContext};

// ============================================================================
// Test Helpers
// ============================================================================

/// Create a context rooted at a fresh temp directory
fn create_context(dir: &TempDir) -> OutlayContext {
    OutlayContext::new(dir.path()).expect("Failed to create context")
}

fn dec(value: i64) -> Decimal {
    Decimal::new(value, 0)
}

// ============================================================================
// Registration and Login
// ============================================================================

#[test]
fn test_register_login_roundtrip() {
    let dir = TempDir::new().unwrap();
    let ctx = create_context(&dir);

    ctx.auth_service.register("alice", "p1").unwrap();
    assert!(ctx.auth_service.verify("alice", "p1").unwrap());

    let session = ctx.session_service.login("alice", "p1").unwrap();
    assert_eq!(session.username, "alice");
    assert_eq!(session.provenance, LedgerProvenance::Fresh);
}

#[test]
fn test_duplicate_registration_retains_original_password() {
    let dir = TempDir::new().unwrap();
    let ctx = create_context(&dir);

    ctx.auth_service.register("alice", "p1").unwrap();
    let err = ctx.auth_service.register("alice", "p2").unwrap_err();
    assert!(matches!(err, Error::DuplicateUsername(_)));

    // Original password still works, the rejected one does not
    assert!(ctx.auth_service.verify("alice", "p1").unwrap());
    assert!(!ctx.auth_service.verify("alice", "p2").unwrap());
}

#[test]
fn test_login_with_wrong_credentials_fails() {
    let dir = TempDir::new().unwrap();
    let ctx = create_context(&dir);

    ctx.auth_service.register("bob", "secret").unwrap();

    assert!(matches!(
        ctx.session_service.login("bob", "nope"),
        Err(Error::InvalidCredentials)
    ));
    assert!(matches!(
        ctx.session_service.login("carol", "secret"),
        Err(Error::InvalidCredentials)
    ));
}

// ============================================================================
// Ledger Scenario
// ============================================================================

/// The full tracked-budget scenario: register, set a budget, add, edit,
/// remove, checking the derived figures at each step.
#[test]
fn test_full_budget_scenario() {
    let dir = TempDir::new().unwrap();
    let ctx = create_context(&dir);

    ctx.auth_service.register("bob", "secret").unwrap();
    let mut session = ctx.session_service.login("bob", "secret").unwrap();

    ctx.session_service.set_budget(&mut session, dec(5000)).unwrap();
    let groceries = ctx
        .session_service
        .add_expense(&mut session, "Groceries", dec(1200))
        .unwrap();
    let rent = ctx
        .session_service
        .add_expense(&mut session, "Rent", dec(2000))
        .unwrap();

    let summary = ctx.session_service.summary(&session);
    assert_eq!(summary.total_spent, dec(3200));
    assert_eq!(summary.balance, dec(1800));

    ctx.session_service
        .edit_expense(&mut session, groceries, "Groceries", dec(1500))
        .unwrap();
    let summary = ctx.session_service.summary(&session);
    assert_eq!(summary.total_spent, dec(3500));
    assert_eq!(summary.balance, dec(1500));

    let removed = ctx.session_service.remove_expense(&mut session, rent).unwrap();
    assert_eq!(removed.description, "Rent");

    let summary = ctx.session_service.summary(&session);
    assert_eq!(summary.expense_count, 1);
    assert_eq!(summary.total_spent, dec(1500));
    assert_eq!(session.ledger.expenses[0].description, "Groceries");

    ctx.session_service.logout(session).unwrap();

    // A brand-new context sees the same state from disk
    let ctx2 = create_context(&dir);
    let session = ctx2.session_service.login("bob", "secret").unwrap();
    assert_eq!(session.provenance, LedgerProvenance::Existing);
    assert_eq!(session.ledger.initial_budget, dec(5000));
    assert_eq!(session.ledger.total_spent(), dec(1500));
}

#[test]
fn test_add_then_reload_last_entry_matches() {
    let dir = TempDir::new().unwrap();
    let ctx = create_context(&dir);

    ctx.auth_service.register("bob", "secret").unwrap();
    let mut session = ctx.session_service.login("bob", "secret").unwrap();
    ctx.session_service
        .add_expense(&mut session, "Coffee", dec(4))
        .unwrap();
    ctx.session_service
        .add_expense(&mut session, "Books", dec(35))
        .unwrap();
    drop(session);

    let session = ctx.session_service.login("bob", "secret").unwrap();
    let last = session.ledger.expenses.last().unwrap();
    assert_eq!(last.description, "Books");
    assert_eq!(last.amount, dec(35));
}

#[test]
fn test_overspending_yields_negative_balance() {
    let dir = TempDir::new().unwrap();
    let ctx = create_context(&dir);

    ctx.auth_service.register("bob", "secret").unwrap();
    let mut session = ctx.session_service.login("bob", "secret").unwrap();
    ctx.session_service.set_budget(&mut session, dec(100)).unwrap();
    ctx.session_service
        .add_expense(&mut session, "Rent", dec(2000))
        .unwrap();

    let summary = ctx.session_service.summary(&session);
    assert_eq!(summary.balance, dec(-1900));
}

// ============================================================================
// Storage Failure Behaviors
// ============================================================================

#[test]
fn test_corrupted_ledger_is_flagged_not_fatal() {
    let dir = TempDir::new().unwrap();
    let ctx = create_context(&dir);

    ctx.auth_service.register("bob", "secret").unwrap();
    fs::write(ctx.ledgers.path_for("bob"), "not json at all").unwrap();

    let session = ctx.session_service.login("bob", "secret").unwrap();
    assert_eq!(session.provenance, LedgerProvenance::Corrupted);
    assert!(session.ledger.expenses.is_empty());
    assert_eq!(session.ledger.initial_budget, Decimal::ZERO);
}

#[test]
fn test_corrupted_credentials_fail_fast() {
    let dir = TempDir::new().unwrap();
    let ctx = create_context(&dir);

    ctx.auth_service.register("alice", "p1").unwrap();
    fs::write(ctx.credentials.path(), "]]]").unwrap();

    assert!(matches!(
        ctx.auth_service.verify("alice", "p1"),
        Err(Error::Corrupt(_))
    ));
    assert!(matches!(
        ctx.auth_service.register("bob", "p2"),
        Err(Error::Corrupt(_))
    ));
}

#[test]
fn test_ledger_file_from_original_format_is_adopted() {
    let dir = TempDir::new().unwrap();
    let ctx = create_context(&dir);

    ctx.auth_service.register("bob", "secret").unwrap();
    // A file as written by the pre-id implementation
    fs::write(
        ctx.ledgers.path_for("bob"),
        r#"{"initial_budget": 5000, "expenses": [
            {"description": "Groceries", "amount": 1200},
            {"description": "Rent", "amount": 2000}
        ]}"#,
    )
    .unwrap();

    let mut session = ctx.session_service.login("bob", "secret").unwrap();
    assert_eq!(session.provenance, LedgerProvenance::Existing);
    assert_eq!(session.ledger.total_spent(), dec(3200));

    // Adopted ids are addressable like any other
    let first = session.ledger.expenses[0].id;
    ctx.session_service
        .edit_expense(&mut session, first, "Groceries", dec(1500))
        .unwrap();
    assert_eq!(session.ledger.total_spent(), dec(3500));
}

#[test]
fn test_users_have_disjoint_ledgers() {
    let dir = TempDir::new().unwrap();
    let ctx = create_context(&dir);

    ctx.auth_service.register("alice", "a").unwrap();
    ctx.auth_service.register("bob", "b").unwrap();

    let mut alice = ctx.session_service.login("alice", "a").unwrap();
    ctx.session_service
        .add_expense(&mut alice, "Coffee", dec(4))
        .unwrap();

    let bob = ctx.session_service.login("bob", "b").unwrap();
    assert_eq!(bob.provenance, LedgerProvenance::Fresh);
    assert!(bob.ledger.expenses.is_empty());
}
