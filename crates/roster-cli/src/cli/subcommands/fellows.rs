use clap::Subcommand;

/// Current fellow commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FellowCommands {
    /// List fellows.
    List {
        /// Case-insensitive substring of name or office
        #[arg(long)]
        search: Option<String>,
        /// on-track, flagged or ending-soon
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        cohort: Option<String>,
        #[arg(long)]
        chamber: Option<String>,
        #[arg(long)]
        party: Option<String>,
        #[arg(long)]
        fellow_type: Option<String>,
        /// Sort key, e.g. status-priority, name-az, cohort-newest
        #[arg(long, default_value = "status-priority")]
        sort: String,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a fellow by ID with linked check-ins and status reports.
    Get { id: String },
    /// Aggregate counts over all fellows.
    Stats,
    /// Log a check-in and bump the fellow's last check-in date.
    CheckIn {
        id: String,
        /// Defaults to today
        #[arg(long)]
        date: Option<String>,
        #[arg(long = "type")]
        check_in_type: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        staff: Option<String>,
    },
    /// Record a monthly status report as submitted (or not).
    Report {
        id: String,
        /// Reporting month, e.g. "Jan 2026"
        #[arg(long)]
        month: String,
        /// Mark the month as not submitted instead
        #[arg(long)]
        missing: bool,
    },
}
