use anyhow::bail;
use roster_airtable::RecordSource;
use roster_core::person::find_by_id;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let fellows = ctx.load("fellows", || ctx.source.fellows()).await?;
    if find_by_id(&fellows, id).is_none() {
        bail!("fellow '{id}' not found");
    }

    let check_ins = ctx.load("check-ins", || ctx.source.check_ins(id)).await?;
    let reports = ctx
        .load("status reports", || ctx.source.status_reports(id))
        .await?;

    let Some(detail) = ctx
        .engine
        .fellow_detail(&fellows, id, &check_ins, &reports, ctx.today)
    else {
        bail!("fellow '{id}' not found");
    };
    output(&detail, flags.format)
}
