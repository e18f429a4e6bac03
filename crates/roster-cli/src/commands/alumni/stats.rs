use roster_airtable::RecordSource;
use roster_query::stats::AlumniStats;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let alumni = ctx.load("alumni", || ctx.source.alumni()).await?;
    output(&AlumniStats::compute(&alumni), flags.format)
}
