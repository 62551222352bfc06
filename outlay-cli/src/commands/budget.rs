//! Budget command - set the budget figure

use anyhow::Result;
use colored::Colorize;
use outlay_core::services::LogEvent;
use rust_decimal::Decimal;

use super::{get_context, get_logger, log_event, open_session, AuthArgs};
use crate::output;

pub fn run(amount: Decimal, auth: &AuthArgs) -> Result<()> {
    let logger = get_logger();
    let ctx = get_context()?;

    let mut session = open_session(&ctx, auth)?;
    ctx.session_service.set_budget(&mut session, amount)?;
    log_event(
        &logger,
        LogEvent::new("budget_set")
            .with_command("budget")
            .with_session(session.id.to_string()),
    );

    println!(
        "{} Budget set to {}",
        "✓".green(),
        output::money(&ctx.config.currency, session.ledger.initial_budget)
    );

    ctx.session_service.logout(session)?;
    Ok(())
}
