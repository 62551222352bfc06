//! Outlay CLI - Budget tracking in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

mod commands;
mod output;

use commands::{add, budget, config, edit, list, register, remove, summary, AuthArgs};

/// Outlay - budget tracking in your terminal
#[derive(Parser)]
#[command(name = "ol", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new user
    Register {
        /// Username to register (prompted when omitted)
        username: Option<String>,
        /// Password (prompted when omitted)
        #[arg(short, long, env = "OUTLAY_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Set the budget figure
    Budget {
        /// New budget amount (must not be negative)
        amount: Decimal,
        #[command(flatten)]
        auth: AuthArgs,
    },

    /// Add an expense
    Add {
        /// What the money went to
        description: String,
        /// Amount spent (must be positive)
        amount: Decimal,
        #[command(flatten)]
        auth: AuthArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replace an expense by id
    Edit {
        /// Expense id (see `ol list`)
        id: u64,
        /// New description
        description: String,
        /// New amount (must be positive)
        amount: Decimal,
        #[command(flatten)]
        auth: AuthArgs,
    },

    /// Remove an expense by id
    Remove {
        /// Expense id (see `ol list`)
        id: u64,
        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
        #[command(flatten)]
        auth: AuthArgs,
    },

    /// List expenses
    List {
        #[command(flatten)]
        auth: AuthArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show budget, spent, and remaining figures
    Summary {
        #[command(flatten)]
        auth: AuthArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: config::ConfigCommands,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Register { username, password } => register::run(username, password),
        Commands::Budget { amount, auth } => budget::run(amount, &auth),
        Commands::Add {
            description,
            amount,
            auth,
            json,
        } => add::run(&description, amount, &auth, json),
        Commands::Edit {
            id,
            description,
            amount,
            auth,
        } => edit::run(id, &description, amount, &auth),
        Commands::Remove { id, force, auth } => remove::run(id, force, &auth),
        Commands::List { auth, json } => list::run(&auth, json),
        Commands::Summary { auth, json } => summary::run(&auth, json),
        Commands::Config { command } => config::run(command),
    }
}
