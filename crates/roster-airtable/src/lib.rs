//! # roster-airtable
//!
//! Record sources for the roster.
//!
//! - [`AirtableClient`] reads and writes the fellows, alumni, check-in and
//!   status-report tables of an Airtable base over its REST API (HTTPS,
//!   bearer token). List reads follow the `offset` cursor until every page
//!   has been fetched.
//! - [`SampleSource`] serves the bundled sample roster.
//!
//! Both implement [`RecordSource`], which is all the CLI needs to load a
//! roster.

pub mod alumni;
pub mod check_ins;
pub mod fellows;
pub mod fields;
pub mod source;
pub mod status_reports;

mod error;
mod http;

pub use error::AirtableError;
pub use source::{RecordSource, SampleSource};

use std::time::Duration;

use roster_config::AirtableConfig;
use serde_json::json;

use crate::fields::{Fields, Page, RawRecord};
use crate::http::{check_response, read_json};

// ── Tables ─────────────────────────────────────────────────────────

/// Table names within the base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tables {
    pub fellows: String,
    pub alumni: String,
    pub check_ins: String,
    pub status_reports: String,
}

impl From<&AirtableConfig> for Tables {
    fn from(config: &AirtableConfig) -> Self {
        Self {
            fellows: config.fellows_table.clone(),
            alumni: config.alumni_table.clone(),
            check_ins: config.checkins_table.clone(),
            status_reports: config.status_reports_table.clone(),
        }
    }
}

/// Server-side ordering for a list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListSort<'a> {
    pub field: &'a str,
    pub descending: bool,
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for one Airtable base.
#[derive(Debug, Clone)]
pub struct AirtableClient {
    http: reqwest::Client,
    base_url: String,
    base_id: String,
    api_key: String,
    tables: Tables,
}

impl AirtableClient {
    /// Build a client from the `[airtable]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`AirtableError::NotConfigured`] when the API key or base id
    /// is missing, and [`AirtableError::Http`] if the HTTP client cannot be
    /// built.
    pub fn new(config: &AirtableConfig) -> Result<Self, AirtableError> {
        if !config.is_configured() {
            return Err(AirtableError::NotConfigured(
                "set airtable.api_key and airtable.base_id (ROSTER_AIRTABLE__API_KEY, \
                 ROSTER_AIRTABLE__BASE_ID)"
                    .to_string(),
            ));
        }
        let http = reqwest::Client::builder()
            .user_agent(concat!("roster/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            base_id: config.base_id.clone(),
            api_key: config.api_key.clone(),
            tables: Tables::from(config),
        })
    }

    #[must_use]
    pub const fn tables(&self) -> &Tables {
        &self.tables
    }

    fn table_url(&self, table: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            urlencoding::encode(&self.base_id),
            urlencoding::encode(table)
        )
    }

    fn record_url(&self, table: &str, record_id: &str) -> String {
        format!("{}/{}", self.table_url(table), urlencoding::encode(record_id))
    }

    /// Fetch every row of `table`, following the `offset` cursor page by page.
    ///
    /// # Errors
    ///
    /// Returns [`AirtableError`] if any page request fails or a page cannot
    /// be parsed. Rows from earlier pages are discarded in that case.
    pub async fn list_records(
        &self,
        table: &str,
        sort: Option<ListSort<'_>>,
    ) -> Result<Vec<RawRecord>, AirtableError> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(sort) = sort {
            params.push(("sort[0][field]", sort.field.to_string()));
            let direction = if sort.descending { "desc" } else { "asc" };
            params.push(("sort[0][direction]", direction.to_string()));
        }

        let mut records = Vec::new();
        let mut offset: Option<String> = None;
        let mut page_number = 0_usize;
        loop {
            page_number += 1;
            let mut query = params.clone();
            if let Some(cursor) = offset.take() {
                query.push(("offset", cursor));
            }
            let url = with_query(&self.table_url(table), &query);
            tracing::debug!(table, page = page_number, "fetching airtable page");

            let resp = self.http.get(&url).bearer_auth(&self.api_key).send().await?;
            let page: Page = read_json(resp).await?;
            records.extend(page.records);

            match page.offset {
                Some(cursor) if !cursor.is_empty() => offset = Some(cursor),
                _ => break,
            }
        }
        tracing::debug!(table, rows = records.len(), pages = page_number, "airtable table loaded");
        Ok(records)
    }

    /// Create one row and return it as stored.
    ///
    /// # Errors
    ///
    /// Returns [`AirtableError`] if the request fails or is rejected.
    pub async fn create_record(
        &self,
        table: &str,
        fields: Fields,
    ) -> Result<RawRecord, AirtableError> {
        tracing::debug!(table, columns = fields.len(), "creating airtable row");
        let resp = self
            .http
            .post(self.table_url(table))
            .bearer_auth(&self.api_key)
            .json(&json!({ "fields": fields }))
            .send()
            .await?;
        read_json(resp).await
    }

    /// Patch the given columns of one row, leaving the others untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AirtableError`] if the request fails or is rejected.
    pub async fn update_record(
        &self,
        table: &str,
        record_id: &str,
        fields: Fields,
    ) -> Result<RawRecord, AirtableError> {
        tracing::debug!(table, record_id, columns = fields.len(), "updating airtable row");
        let resp = self
            .http
            .patch(self.record_url(table, record_id))
            .bearer_auth(&self.api_key)
            .json(&json!({ "fields": fields }))
            .send()
            .await?;
        read_json(resp).await
    }

    /// Delete one row.
    ///
    /// # Errors
    ///
    /// Returns [`AirtableError`] if the request fails or is rejected.
    pub async fn delete_record(&self, table: &str, record_id: &str) -> Result<(), AirtableError> {
        tracing::debug!(table, record_id, "deleting airtable row");
        let resp = self
            .http
            .delete(self.record_url(table, record_id))
            .bearer_auth(&self.api_key)
            .send()
            .await?;
        check_response(resp).await?;
        Ok(())
    }
}

fn with_query(url: &str, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return url.to_string();
    }
    let query: Vec<String> = params
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect();
    format!("{url}?{}", query.join("&"))
}
