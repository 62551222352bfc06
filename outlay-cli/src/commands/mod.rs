//! CLI command implementations

pub mod add;
pub mod budget;
pub mod config;
pub mod edit;
pub mod list;
pub mod register;
pub mod remove;
pub mod summary;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;

use outlay_core::services::{EntryPoint, LogEvent, LoggingService, Session};
use outlay_core::{LedgerProvenance, OutlayContext};

/// Shared authentication arguments
#[derive(Args)]
pub struct AuthArgs {
    /// Username (falls back to the settings defaultUsername)
    #[arg(short, long, env = "OUTLAY_USER")]
    pub username: Option<String>,
    /// Password (prompted when omitted)
    #[arg(short, long, env = "OUTLAY_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

impl AuthArgs {
    /// Resolve the username: flag/env first, then settings
    pub fn resolve_username(&self, ctx: &OutlayContext) -> Result<String> {
        if let Some(username) = &self.username {
            return Ok(username.clone());
        }
        if let Some(username) = &ctx.config.default_username {
            return Ok(username.clone());
        }
        bail!("No username given; pass --username, set OUTLAY_USER, or run `ol config user <NAME>`");
    }

    /// Resolve the password: flag/env first, then an interactive prompt
    pub fn resolve_password(&self) -> Result<String> {
        if let Some(password) = &self.password {
            return Ok(password.clone());
        }
        if !atty::is(atty::Stream::Stdin) {
            bail!("No password given and stdin is not a terminal; pass --password or set OUTLAY_PASSWORD");
        }
        Ok(dialoguer::Password::new()
            .with_prompt("Password")
            .interact()?)
    }
}

/// Get the outlay directory from environment or default
pub fn get_outlay_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("OUTLAY_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".outlay")
    }
}

/// Get or create outlay context
pub fn get_context() -> Result<OutlayContext> {
    let outlay_dir = get_outlay_dir();

    std::fs::create_dir_all(&outlay_dir)
        .with_context(|| format!("Failed to create outlay directory: {:?}", outlay_dir))?;

    OutlayContext::new(&outlay_dir).context("Failed to initialize outlay context")
}

/// Get the logging service for CLI operations
///
/// Returns None if logging fails to initialize (shouldn't block operations)
pub fn get_logger() -> Option<LoggingService> {
    let outlay_dir = get_outlay_dir();
    std::fs::create_dir_all(&outlay_dir).ok()?;
    LoggingService::new(&outlay_dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION")).ok()
}

/// Log an event, ignoring any errors (logging should never break the app)
pub fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}

/// Open a session for the resolved user
///
/// Warns when the ledger file was unreadable and got replaced with an empty
/// one, instead of letting that pass as a fresh account.
pub fn open_session(ctx: &OutlayContext, auth: &AuthArgs) -> Result<Session> {
    let username = auth.resolve_username(ctx)?;
    let password = auth.resolve_password()?;
    let session = ctx.session_service.login(&username, &password)?;

    if session.provenance == LedgerProvenance::Corrupted {
        eprintln!(
            "{}",
            "Warning: the ledger file could not be parsed; starting from an empty ledger".yellow()
        );
    }

    Ok(session)
}
