use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Fellows { action } => commands::fellows::handle(&action, ctx, flags).await,
        Commands::Alumni { action } => commands::alumni::handle(&action, ctx, flags).await,
        Commands::Analytics(args) => commands::analytics::handle(&args, ctx, flags).await,
    }
}
