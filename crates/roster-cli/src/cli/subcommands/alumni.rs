use clap::Subcommand;

/// Alumni commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AlumniCommands {
    /// List alumni.
    List {
        /// Case-insensitive substring of name or office served
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        cohort: Option<String>,
        #[arg(long)]
        fellow_type: Option<String>,
        #[arg(long)]
        chamber: Option<String>,
        #[arg(long)]
        party: Option<String>,
        #[arg(long)]
        sector: Option<String>,
        /// Sort key, e.g. cohort-newest, name-az, last-engaged-oldest-first
        #[arg(long, default_value = "cohort-newest")]
        sort: String,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get an alumnus by ID.
    Get { id: String },
    /// Aggregate counts over all alumni.
    Stats,
}
