use roster_core::dates::format_day;
use roster_core::entities::StatusReport;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_month_flag;
use crate::context::AppContext;
use crate::output::output;

/// Mark `month` submitted (or not) for fellow `id`, creating the report row
/// when the month has none yet.
pub async fn run(
    id: &str,
    month: &str,
    submitted: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = ctx.source.writable()?;
    let month = parse_month_flag(month)?;
    let reports = ctx
        .load("status reports", || client.fetch_status_reports(id))
        .await?;

    let today = format_day(ctx.today);
    let date_submitted = submitted.then_some(today.as_str());

    let report = match find_month(&reports, &month) {
        Some(existing) => {
            client
                .update_status_report(&existing.id, submitted, date_submitted)
                .await?
        }
        None => {
            let report = StatusReport {
                id: String::new(),
                fellow_ids: vec![id.to_string()],
                month: Some(month.clone()),
                submitted,
                date_submitted: date_submitted.map(str::to_string),
                notes: None,
            };
            client.add_status_report(&report).await?
        }
    };
    tracing::info!(fellow = id, %month, submitted, "status report recorded");

    output(&report, flags.format)
}

fn find_month<'a>(reports: &'a [StatusReport], month: &str) -> Option<&'a StatusReport> {
    reports
        .iter()
        .find(|report| report.month.as_deref() == Some(month))
}
