//! Fellows table.

use roster_core::entities::Fellow;
use serde_json::Value;

use crate::fields::{self, Fields, column};
use crate::{AirtableClient, AirtableError};

impl AirtableClient {
    /// Fetch every fellow.
    ///
    /// # Errors
    ///
    /// Returns [`AirtableError`] if any page fails to load.
    pub async fn fetch_fellows(&self) -> Result<Vec<Fellow>, AirtableError> {
        let rows = self.list_records(&self.tables().fellows, None).await?;
        Ok(rows.into_iter().map(fields::fellow_from_record).collect())
    }

    /// Create a fellow. The `id` of `fellow` is ignored; the stored record,
    /// with its new id, is returned.
    ///
    /// # Errors
    ///
    /// Returns [`AirtableError`] if Airtable rejects the row.
    pub async fn create_fellow(&self, fellow: &Fellow) -> Result<Fellow, AirtableError> {
        let mut columns = fields::fellow_fields(fellow);
        columns
            .entry(column::STATUS)
            .or_insert_with(|| Value::String("Active".to_string()));
        let row = self.create_record(&self.tables().fellows, columns).await?;
        Ok(fields::fellow_from_record(row))
    }

    /// Overwrite the non-empty columns of fellow `record_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AirtableError`] if Airtable rejects the update.
    pub async fn update_fellow(
        &self,
        record_id: &str,
        fellow: &Fellow,
    ) -> Result<Fellow, AirtableError> {
        let row = self
            .update_record(&self.tables().fellows, record_id, fields::fellow_fields(fellow))
            .await?;
        Ok(fields::fellow_from_record(row))
    }

    /// Set only the "Last Check-in" column of a fellow.
    ///
    /// # Errors
    ///
    /// Returns [`AirtableError`] if Airtable rejects the update.
    pub async fn update_fellow_check_in(
        &self,
        record_id: &str,
        date: &str,
    ) -> Result<Fellow, AirtableError> {
        let mut columns = Fields::new();
        columns.insert(column::LAST_CHECK_IN.to_string(), Value::String(date.to_string()));
        let row = self
            .update_record(&self.tables().fellows, record_id, columns)
            .await?;
        Ok(fields::fellow_from_record(row))
    }
}
