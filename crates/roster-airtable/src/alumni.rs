//! Alumni table.

use roster_core::entities::Alumnus;

use crate::fields;
use crate::{AirtableClient, AirtableError};

impl AirtableClient {
    /// Fetch every alumnus.
    ///
    /// # Errors
    ///
    /// Returns [`AirtableError`] if any page fails to load.
    pub async fn fetch_alumni(&self) -> Result<Vec<Alumnus>, AirtableError> {
        let rows = self.list_records(&self.tables().alumni, None).await?;
        Ok(rows.into_iter().map(fields::alumnus_from_record).collect())
    }

    /// # Errors
    ///
    /// Returns [`AirtableError`] if Airtable rejects the row.
    pub async fn create_alumnus(&self, alumnus: &Alumnus) -> Result<Alumnus, AirtableError> {
        let row = self
            .create_record(&self.tables().alumni, fields::alumnus_fields(alumnus))
            .await?;
        Ok(fields::alumnus_from_record(row))
    }

    /// # Errors
    ///
    /// Returns [`AirtableError`] if Airtable rejects the update.
    pub async fn update_alumnus(
        &self,
        record_id: &str,
        alumnus: &Alumnus,
    ) -> Result<Alumnus, AirtableError> {
        let row = self
            .update_record(&self.tables().alumni, record_id, fields::alumnus_fields(alumnus))
            .await?;
        Ok(fields::alumnus_from_record(row))
    }
}
