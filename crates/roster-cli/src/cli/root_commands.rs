use clap::{Args, Subcommand};

use crate::cli::subcommands::{AlumniCommands, FellowCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Current fellows.
    Fellows {
        #[command(subcommand)]
        action: FellowCommands,
    },
    /// Program alumni.
    Alumni {
        #[command(subcommand)]
        action: AlumniCommands,
    },
    /// Cohort breakdown, top organizations and activity trends.
    Analytics(AnalyticsArgs),
}

#[derive(Clone, Debug, Args)]
pub struct AnalyticsArgs {
    /// Months covered by the check-in and engagement trends
    #[arg(long, default_value_t = 6)]
    pub months: u32,
    /// Organizations shown in the top-organizations table
    #[arg(long, default_value_t = 8)]
    pub top: usize,
}
