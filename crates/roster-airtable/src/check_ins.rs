//! Check-ins table.
//!
//! Each check-in links to one or more fellows through the "Fellow" column.

use roster_core::entities::CheckIn;

use crate::fields::{self, column};
use crate::{AirtableClient, AirtableError, ListSort};

impl AirtableClient {
    /// Check-ins that concern `fellow_id`, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`AirtableError`] if any page fails to load.
    pub async fn fetch_check_ins(&self, fellow_id: &str) -> Result<Vec<CheckIn>, AirtableError> {
        let sort = ListSort {
            field: column::DATE,
            descending: true,
        };
        let rows = self
            .list_records(&self.tables().check_ins, Some(sort))
            .await?;
        let mut check_ins: Vec<CheckIn> = rows
            .into_iter()
            .map(fields::check_in_from_record)
            .filter(|check_in| check_in.concerns(fellow_id))
            .collect();
        check_ins.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(check_ins)
    }

    /// Record a check-in. The `id` of `check_in` is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AirtableError`] if Airtable rejects the row.
    pub async fn add_check_in(&self, check_in: &CheckIn) -> Result<CheckIn, AirtableError> {
        let row = self
            .create_record(&self.tables().check_ins, fields::check_in_fields(check_in))
            .await?;
        Ok(fields::check_in_from_record(row))
    }

    /// # Errors
    ///
    /// Returns [`AirtableError`] if Airtable rejects the delete.
    pub async fn delete_check_in(&self, record_id: &str) -> Result<(), AirtableError> {
        self.delete_record(&self.tables().check_ins, record_id).await
    }
}
