//! Edit command - replace an expense by id

use anyhow::Result;
use colored::Colorize;
use outlay_core::services::LogEvent;
use rust_decimal::Decimal;

use super::{get_context, get_logger, log_event, open_session, AuthArgs};
use crate::output;

pub fn run(id: u64, description: &str, amount: Decimal, auth: &AuthArgs) -> Result<()> {
    let logger = get_logger();
    let ctx = get_context()?;

    let mut session = open_session(&ctx, auth)?;

    if session.ledger.get(id).is_none() {
        eprintln!("{}", format!("Expense {} not found", id).red());
        eprintln!("{}", "Run `ol list` to see expense ids".dimmed());
        std::process::exit(1);
    }

    ctx.session_service
        .edit_expense(&mut session, id, description, amount)?;
    log_event(
        &logger,
        LogEvent::new("expense_edited")
            .with_command("edit")
            .with_session(session.id.to_string()),
    );

    println!(
        "{} Expense {} is now {} {}",
        "✓".green(),
        id,
        description,
        output::money(&ctx.config.currency, amount)
    );

    ctx.session_service.logout(session)?;
    Ok(())
}
