mod get;
mod list;
mod stats;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AlumniCommands;
use crate::context::AppContext;

/// Handle `roster alumni`.
pub async fn handle(
    action: &AlumniCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AlumniCommands::List {
            search,
            cohort,
            fellow_type,
            chamber,
            party,
            sector,
            sort,
            limit,
        } => {
            let selection = list::Selection {
                search: search.as_deref(),
                cohort: cohort.as_deref(),
                fellow_type: fellow_type.as_deref(),
                chamber: chamber.as_deref(),
                party: party.as_deref(),
                sector: sector.as_deref(),
            };
            list::run(&selection, sort, *limit, ctx, flags).await
        }
        AlumniCommands::Get { id } => get::run(id, ctx, flags).await,
        AlumniCommands::Stats => stats::run(ctx, flags).await,
    }
}
