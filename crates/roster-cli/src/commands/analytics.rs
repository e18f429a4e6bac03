use roster_airtable::RecordSource;
use roster_query::analytics::AnalyticsReport;

use crate::cli::root_commands::AnalyticsArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, render_rows};

/// Handle `roster analytics`.
pub async fn handle(
    args: &AnalyticsArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let fellows = ctx.load("fellows", || ctx.source.fellows()).await?;
    let alumni = ctx.load("alumni", || ctx.source.alumni()).await?;

    let report = AnalyticsReport::compute(&fellows, &alumni, ctx.today, args.months, args.top);

    if flags.format == OutputFormat::Table {
        println!("{}", render_sections(&report));
        return Ok(());
    }
    output(&report, flags.format)
}

fn render_sections(report: &AnalyticsReport) -> String {
    [
        ("Cohorts", render_rows(&report.cohorts)),
        ("Top organizations", render_rows(&report.top_organizations)),
        ("Fellow check-ins", render_rows(&report.check_in_trend)),
        ("Alumni engagement", render_rows(&report.engagement_trend)),
    ]
    .into_iter()
    .map(|(title, table)| format!("{title}\n{table}"))
    .collect::<Vec<_>>()
    .join("\n\n")
}
