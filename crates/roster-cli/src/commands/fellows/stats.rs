use roster_airtable::RecordSource;
use roster_query::stats::FellowStats;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let fellows = ctx.load("fellows", || ctx.source.fellows()).await?;
    let stats = FellowStats::compute(&fellows, ctx.today, ctx.engine.thresholds());
    output(&stats, flags.format)
}
