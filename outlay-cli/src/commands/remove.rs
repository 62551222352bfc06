//! Remove command - delete an expense by id

use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;
use outlay_core::services::LogEvent;

use super::{get_context, get_logger, log_event, open_session, AuthArgs};
use crate::output;

pub fn run(id: u64, force: bool, auth: &AuthArgs) -> Result<()> {
    let logger = get_logger();
    let ctx = get_context()?;

    let mut session = open_session(&ctx, auth)?;

    let Some(expense) = session.ledger.get(id) else {
        eprintln!("{}", format!("Expense {} not found", id).red());
        eprintln!("{}", "Run `ol list` to see expense ids".dimmed());
        std::process::exit(1);
    };

    // Confirm removal unless --force
    if !force {
        println!(
            "\n{}",
            format!(
                "This will remove expense {} ({} {}).",
                id,
                expense.description,
                output::money(&ctx.config.currency, expense.amount)
            )
            .yellow()
        );

        if !Confirm::new()
            .with_prompt("Are you sure?")
            .default(false)
            .interact()?
        {
            println!("{}\n", "Cancelled".dimmed());
            return Ok(());
        }
    }

    let removed = ctx.session_service.remove_expense(&mut session, id)?;
    log_event(
        &logger,
        LogEvent::new("expense_removed")
            .with_command("remove")
            .with_session(session.id.to_string()),
    );

    println!("\n{} Expense '{}' removed\n", "✓".green(), removed.description);

    ctx.session_service.logout(session)?;
    Ok(())
}
