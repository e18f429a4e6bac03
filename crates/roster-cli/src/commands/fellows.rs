mod check_in;
mod get;
mod list;
mod report;
mod stats;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FellowCommands;
use crate::context::AppContext;

/// Handle `roster fellows`.
pub async fn handle(
    action: &FellowCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        FellowCommands::List {
            search,
            status,
            cohort,
            chamber,
            party,
            fellow_type,
            sort,
            limit,
        } => {
            let selection = list::Selection {
                search: search.as_deref(),
                status: status.as_deref(),
                cohort: cohort.as_deref(),
                chamber: chamber.as_deref(),
                party: party.as_deref(),
                fellow_type: fellow_type.as_deref(),
            };
            list::run(&selection, sort, *limit, ctx, flags).await
        }
        FellowCommands::Get { id } => get::run(id, ctx, flags).await,
        FellowCommands::Stats => stats::run(ctx, flags).await,
        FellowCommands::CheckIn {
            id,
            date,
            check_in_type,
            notes,
            staff,
        } => {
            let entry = check_in::Entry {
                date: date.as_deref(),
                check_in_type: check_in_type.as_deref(),
                notes: notes.as_deref(),
                staff: staff.as_deref(),
            };
            check_in::run(id, &entry, ctx, flags).await
        }
        FellowCommands::Report { id, month, missing } => {
            report::run(id, month, !missing, ctx, flags).await
        }
    }
}
