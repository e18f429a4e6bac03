use std::future::Future;

use anyhow::Context;
use chrono::NaiveDate;
use roster_airtable::{AirtableError, RecordSource};
use roster_config::RosterConfig;
use roster_query::RosterEngine;
use roster_query::derive::Thresholds;
use roster_query::reports::ReportSchedule;

use crate::cli::GlobalFlags;
use crate::context::{LoadState, Loader, Source};

/// Everything a command handler needs: config, the engine, the record source
/// and the day to evaluate dates against.
#[derive(Debug)]
pub struct AppContext {
    pub config: RosterConfig,
    pub engine: RosterEngine,
    pub source: Source,
    pub today: NaiveDate,
    retry: bool,
}

impl AppContext {
    /// Select the record source (`--source` wins over `[general] source`) and
    /// build the engine from `[thresholds]` and `[reports]`.
    pub fn init(
        config: RosterConfig,
        flags: &GlobalFlags,
        today: NaiveDate,
    ) -> anyhow::Result<Self> {
        let kind = flags.source.unwrap_or(config.general.source);
        let source = Source::from_config(kind, &config)
            .with_context(|| format!("failed to open the {kind} record source"))?;
        let engine = engine_from_config(&config);
        tracing::debug!(source = source.name(), %today, "roster context ready");
        Ok(Self {
            config,
            engine,
            source,
            today,
            retry: flags.retry,
        })
    }

    #[must_use]
    pub const fn default_limit(&self) -> u32 {
        self.config.general.default_limit
    }

    /// Run one fetch through a [`Loader`], retrying once on failure when
    /// `--retry` was passed.
    pub async fn load<T, F, Fut>(&self, what: &str, fetch: F) -> anyhow::Result<T>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, AirtableError>>,
    {
        let mut loader = Loader::new();
        loader.load(&fetch).await;
        if self.retry {
            loader.retry(&fetch).await;
        }
        if matches!(loader.state(), LoadState::Loaded(_)) {
            tracing::debug!(what, source = self.source.name(), "loaded");
        }
        loader
            .into_result()
            .with_context(|| format!("failed to load {what} from {}", self.source.name()))
    }
}

fn engine_from_config(config: &RosterConfig) -> RosterEngine {
    RosterEngine::new(
        Thresholds {
            check_in_days: config.thresholds.check_in_days,
            ending_soon_days: config.thresholds.ending_soon_days,
        },
        ReportSchedule {
            default_end_month: config.reports.default_end_month.clone(),
            senior_end_month: config.reports.senior_end_month.clone(),
        },
    )
}
