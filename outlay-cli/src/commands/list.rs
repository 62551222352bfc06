//! List command - show all expenses

use anyhow::Result;

use super::{get_context, open_session, AuthArgs};
use crate::output;

pub fn run(auth: &AuthArgs, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let session = open_session(&ctx, auth)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&session.ledger.expenses)?);
        return Ok(());
    }

    if session.ledger.expenses.is_empty() {
        output::info("No expenses added yet");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Id", "Description", "Amount"]);
    for expense in &session.ledger.expenses {
        table.add_row(vec![
            expense.id.to_string(),
            expense.description.clone(),
            output::money(&ctx.config.currency, expense.amount),
        ]);
    }

    println!("{}", table);
    Ok(())
}
