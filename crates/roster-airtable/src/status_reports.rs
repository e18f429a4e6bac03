//! Status Reports table.

use roster_core::entities::StatusReport;
use serde_json::Value;

use crate::fields::{self, Fields, column};
use crate::{AirtableClient, AirtableError};

impl AirtableClient {
    /// Status reports that concern `fellow_id`, in table order. Month
    /// labels do not sort chronologically as text, so callers order them.
    ///
    /// # Errors
    ///
    /// Returns [`AirtableError`] if any page fails to load.
    pub async fn fetch_status_reports(
        &self,
        fellow_id: &str,
    ) -> Result<Vec<StatusReport>, AirtableError> {
        let rows = self
            .list_records(&self.tables().status_reports, None)
            .await?;
        Ok(rows
            .into_iter()
            .map(fields::status_report_from_record)
            .filter(|report| report.concerns(fellow_id))
            .collect())
    }

    /// # Errors
    ///
    /// Returns [`AirtableError`] if Airtable rejects the row.
    pub async fn add_status_report(
        &self,
        report: &StatusReport,
    ) -> Result<StatusReport, AirtableError> {
        let row = self
            .create_record(
                &self.tables().status_reports,
                fields::status_report_fields(report),
            )
            .await?;
        Ok(fields::status_report_from_record(row))
    }

    /// Mark a report submitted or not, optionally stamping the submission
    /// date.
    ///
    /// # Errors
    ///
    /// Returns [`AirtableError`] if Airtable rejects the update.
    pub async fn update_status_report(
        &self,
        record_id: &str,
        submitted: bool,
        date_submitted: Option<&str>,
    ) -> Result<StatusReport, AirtableError> {
        let mut columns = Fields::new();
        columns.insert(column::SUBMITTED.to_string(), Value::Bool(submitted));
        if let Some(date) = date_submitted.filter(|d| !d.trim().is_empty()) {
            columns.insert(column::DATE_SUBMITTED.to_string(), Value::String(date.to_string()));
        }
        let row = self
            .update_record(&self.tables().status_reports, record_id, columns)
            .await?;
        Ok(fields::status_report_from_record(row))
    }
}
