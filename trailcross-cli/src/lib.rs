//! Command-line interface for the Trailcross crossing planner.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod error;
mod plan;

pub use error::CliError;

use plan::{PlanArgs, run_plan};

pub(crate) const ARG_PLAN_STRICT: &str = "strict";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Run the Trailcross CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration layering,
/// resolution, or writing the result fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    init_logging();
    match cli.command {
        Command::Plan(args) => run_plan(args),
    }
}

// Library crates log through `log`; the subscriber's bridge picks those up.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    // A subscriber already installed by the host keeps receiving records.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Debug, Parser)]
#[command(
    name = "trailcross",
    about = "Plan how a group of hikers crosses a series of narrow bridges",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute the total crossing time for the built-in roster.
    Plan(PlanArgs),
}

#[cfg(test)]
mod tests;
