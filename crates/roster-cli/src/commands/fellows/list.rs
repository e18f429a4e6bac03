use roster_airtable::RecordSource;
use roster_query::RosterQuery;
use roster_query::filters::RosterFilter;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::commands::shared::parse::parse_sort;
use crate::context::AppContext;
use crate::output::output_with_rows;

/// Filter flags of `roster fellows list`. `None` and `All` both mean
/// "no constraint".
#[derive(Debug, Default)]
pub struct Selection<'a> {
    pub search: Option<&'a str>,
    pub status: Option<&'a str>,
    pub cohort: Option<&'a str>,
    pub chamber: Option<&'a str>,
    pub party: Option<&'a str>,
    pub fellow_type: Option<&'a str>,
}

impl Selection<'_> {
    #[must_use]
    pub fn filter(&self) -> RosterFilter {
        let mut filter = RosterFilter::new();
        if let Some(search) = self.search {
            filter = filter.with_search(search);
        }
        if let Some(status) = self.status {
            filter = filter.with_status(status);
        }
        if let Some(cohort) = self.cohort {
            filter = filter.with_cohort(cohort);
        }
        if let Some(chamber) = self.chamber {
            filter = filter.with_chamber(chamber);
        }
        if let Some(party) = self.party {
            filter = filter.with_party(party);
        }
        if let Some(fellow_type) = self.fellow_type {
            filter = filter.with_fellow_type(fellow_type);
        }
        filter
    }
}

pub async fn run(
    selection: &Selection<'_>,
    sort: &str,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(limit, flags.limit, ctx.default_limit());
    let fellows = ctx.load("fellows", || ctx.source.fellows()).await?;

    let query = RosterQuery::new(ctx.today)
        .with_filter(selection.filter())
        .with_sort(parse_sort(sort));
    let mut roster = ctx.engine.fellows(&fellows, &query);
    tracing::debug!(
        matched = roster.records.len(),
        total = roster.stats.total,
        sort = %query.sort,
        "fellows selected"
    );
    truncate(&mut roster.records, limit);

    output_with_rows(&roster, &roster.records, flags.format)
}
