//! Summary command - budget, spent, and remaining figures

use anyhow::Result;
use colored::Colorize;
use rust_decimal::Decimal;

use super::{get_context, open_session, AuthArgs};
use crate::output;

pub fn run(auth: &AuthArgs, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let session = open_session(&ctx, auth)?;
    let summary = ctx.session_service.summary(&session);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{}", format!("Budget Summary for {}", summary.username).bold());
    println!();

    let currency = &ctx.config.currency;
    let mut table = output::create_table();
    table.add_row(vec!["Budget", &output::money(currency, summary.initial_budget)]);
    table.add_row(vec!["Spent", &output::money(currency, summary.total_spent)]);
    table.add_row(vec!["Remaining", &output::money(currency, summary.balance)]);
    table.add_row(vec!["Expenses", &summary.expense_count.to_string()]);

    println!("{}", table);

    if summary.balance < Decimal::ZERO {
        println!();
        output::warning(&format!(
            "Overspent by {}",
            output::money(currency, -summary.balance)
        ));
    }

    Ok(())
}
