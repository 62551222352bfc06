//! Config command - manage settings

use anyhow::Result;
use clap::Subcommand;

use super::{get_context, get_outlay_dir};
use crate::output;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Set the default username for commands that omit --username
    User {
        /// Username to store in settings.json
        username: String,
    },
    /// Set the currency symbol used in output
    Currency {
        /// Symbol to prefix amounts with, e.g. "$" or "₹"
        symbol: String,
    },
    /// Show current settings
    Show,
}

pub fn run(command: ConfigCommands) -> Result<()> {
    let mut ctx = get_context()?;

    match command {
        ConfigCommands::User { username } => {
            ctx.config.default_username = Some(username.clone());
            ctx.config.save(&get_outlay_dir())?;
            output::success(&format!("Default username set to '{}'", username));
        }
        ConfigCommands::Currency { symbol } => {
            ctx.config.currency = symbol.clone();
            ctx.config.save(&get_outlay_dir())?;
            output::success(&format!("Currency symbol set to '{}'", symbol));
        }
        ConfigCommands::Show => {
            println!("currency: {}", ctx.config.currency);
            match &ctx.config.default_username {
                Some(username) => println!("defaultUsername: {}", username),
                None => println!("defaultUsername: (not set)"),
            }
        }
    }

    Ok(())
}
