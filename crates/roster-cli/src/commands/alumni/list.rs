use roster_airtable::RecordSource;
use roster_query::RosterQuery;
use roster_query::filters::RosterFilter;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::commands::shared::parse::parse_sort;
use crate::context::AppContext;
use crate::output::output_with_rows;

/// Filter flags of `roster alumni list`.
#[derive(Debug, Default)]
pub struct Selection<'a> {
    pub search: Option<&'a str>,
    pub cohort: Option<&'a str>,
    pub fellow_type: Option<&'a str>,
    pub chamber: Option<&'a str>,
    pub party: Option<&'a str>,
    pub sector: Option<&'a str>,
}

impl Selection<'_> {
    #[must_use]
    pub fn filter(&self) -> RosterFilter {
        let dimensions: [(Option<&str>, fn(RosterFilter, &str) -> RosterFilter); 6] = [
            (self.search, RosterFilter::with_search),
            (self.cohort, RosterFilter::with_cohort),
            (self.fellow_type, RosterFilter::with_fellow_type),
            (self.chamber, RosterFilter::with_chamber),
            (self.party, RosterFilter::with_party),
            (self.sector, RosterFilter::with_sector),
        ];
        dimensions
            .into_iter()
            .fold(RosterFilter::new(), |filter, (value, apply)| match value {
                Some(value) => apply(filter, value),
                None => filter,
            })
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
    let alumni = ctx.load("alumni", || ctx.source.alumni()).await?;

    let query = RosterQuery::new(ctx.today)
        .with_filter(selection.filter())
        .with_sort(parse_sort(sort));
    let mut roster = ctx.engine.alumni(&alumni, &query);
    tracing::debug!(
        matched = roster.records.len(),
        total = roster.stats.total,
        sort = %query.sort,
        "alumni selected"
    );
    truncate(&mut roster.records, limit);

    output_with_rows(&roster, &roster.records, flags.format)
}
