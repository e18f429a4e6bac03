use anyhow::bail;
use roster_airtable::RecordSource;
use roster_core::person::find_by_id;
use roster_query::derive::AlumnusView;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let alumni = ctx.load("alumni", || ctx.source.alumni()).await?;
    let Some(alumnus) = find_by_id(&alumni, id) else {
        bail!("alumnus '{id}' not found");
    };
    output(&AlumnusView::new(alumnus.clone(), ctx.today), flags.format)
}
