use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use pocketplan::cli;

#[derive(Parser)]
#[command(
    name = "pocketplan",
    version,
    about = "Deterministic personal-finance planning from a ledger snapshot",
    long_about = "pocketplan computes daily spending budgets, goal progress, \
                  income forecasts and spending analytics from a read-only \
                  JSON snapshot of a user's finances. Amounts in the snapshot \
                  are integer cents; the multiplier is integer hundredths."
)]
struct Cli {
    /// Path to the ledger snapshot JSON file
    #[arg(long, env = "POCKETPLAN_SNAPSHOT", global = true, default_value = "snapshot.json")]
    snapshot: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the recommended daily budget and income forecast
    Budget {
        /// As-of date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Use the legacy month-scoped planner instead
        #[arg(long)]
        month_scope: bool,
    },

    /// Show progress for every goal
    Goals {
        /// As-of date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Show the extra income needed per day to fund all active goals
    Forecast {
        /// As-of date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Analyze spending over a date range
    Spending {
        /// Start date (YYYY-MM-DD)
        #[arg(short, long)]
        start: String,

        /// End date (YYYY-MM-DD)
        #[arg(short, long)]
        end: String,
    },

    /// Monthly report with a per-day breakdown
    Monthly {
        /// Year (e.g. 2025)
        #[arg(short, long)]
        year: i32,

        /// Month (1-12)
        #[arg(short, long)]
        month: u32,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    match args.command {
        Commands::Budget { date, month_scope } => {
            cli::handle_budget(&args.snapshot, date.as_deref(), month_scope)?
        }
        Commands::Goals { date } => cli::handle_goals(&args.snapshot, date.as_deref())?,
        Commands::Forecast { date } => cli::handle_forecast(&args.snapshot, date.as_deref())?,
        Commands::Spending { start, end } => {
            cli::handle_spending(&args.snapshot, &start, &end)?
        }
        Commands::Monthly { year, month } => {
            cli::handle_monthly(&args.snapshot, year, month)?
        }
    }

    Ok(())
}
