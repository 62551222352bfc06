//! Add command - append an expense

use anyhow::Result;
use colored::Colorize;
use outlay_core::services::LogEvent;
use rust_decimal::Decimal;

use super::{get_context, get_logger, log_event, open_session, AuthArgs};
use crate::output;

pub fn run(description: &str, amount: Decimal, auth: &AuthArgs, json: bool) -> Result<()> {
    let logger = get_logger();
    let ctx = get_context()?;

    let mut session = open_session(&ctx, auth)?;
    let id = ctx
        .session_service
        .add_expense(&mut session, description, amount)?;
    log_event(
        &logger,
        LogEvent::new("expense_added")
            .with_command("add")
            .with_session(session.id.to_string()),
    );

    if json {
        let expense = session.ledger.get(id).cloned();
        println!("{}", serde_json::to_string_pretty(&expense)?);
    } else {
        println!(
            "{} Added expense {} ({} {})",
            "✓".green(),
            id,
            description,
            output::money(&ctx.config.currency, amount)
        );
    }

    ctx.session_service.logout(session)?;
    Ok(())
}
