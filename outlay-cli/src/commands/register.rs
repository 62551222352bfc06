//! Register command - create a new user

use anyhow::{bail, Result};
use colored::Colorize;
use dialoguer::{Input, Password};
use outlay_core::services::LogEvent;

use super::{get_context, get_logger, log_event};

pub fn run(username: Option<String>, password: Option<String>) -> Result<()> {
    let logger = get_logger();
    let ctx = get_context()?;

    let interactive = atty::is(atty::Stream::Stdin);

    let username = match username {
        Some(u) => u,
        None if interactive => Input::new().with_prompt("Username").interact_text()?,
        None => bail!("No username given and stdin is not a terminal"),
    };

    let password = match password {
        Some(p) => p,
        None if interactive => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()?,
        None => bail!("No password given and stdin is not a terminal; set OUTLAY_PASSWORD"),
    };

    match ctx.auth_service.register(&username, &password) {
        Ok(()) => {
            log_event(
                &logger,
                LogEvent::new("user_registered").with_command("register"),
            );
            println!("{} User '{}' registered", "✓".green(), username);
            Ok(())
        }
        Err(e) => {
            log_event(
                &logger,
                LogEvent::new("register_failed")
                    .with_command("register")
                    .with_error(e.to_string()),
            );
            Err(e.into())
        }
    }
}
