//! The [`RecordSource`] seam between the CLI and wherever records live.

use std::future::Future;

use roster_core::entities::{Alumnus, CheckIn, Fellow, StatusReport};
use roster_core::sample;

use crate::{AirtableClient, AirtableError};

/// Somewhere a full roster can be loaded from.
///
/// Every method returns the whole collection; callers filter and sort with
/// the query engine.
pub trait RecordSource {
    /// Short name used in logs and error messages.
    fn name(&self) -> &'static str;

    fn fellows(&self) -> impl Future<Output = Result<Vec<Fellow>, AirtableError>> + Send;

    fn alumni(&self) -> impl Future<Output = Result<Vec<Alumnus>, AirtableError>> + Send;

    fn check_ins(
        &self,
        fellow_id: &str,
    ) -> impl Future<Output = Result<Vec<CheckIn>, AirtableError>> + Send;

    fn status_reports(
        &self,
        fellow_id: &str,
    ) -> impl Future<Output = Result<Vec<StatusReport>, AirtableError>> + Send;
}

/// The bundled sample roster. Has no check-ins or status reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleSource;

impl RecordSource for SampleSource {
    fn name(&self) -> &'static str {
        "sample"
    }

    async fn fellows(&self) -> Result<Vec<Fellow>, AirtableError> {
        Ok(sample::fellows())
    }

    async fn alumni(&self) -> Result<Vec<Alumnus>, AirtableError> {
        Ok(sample::alumni())
    }

    async fn check_ins(&self, _fellow_id: &str) -> Result<Vec<CheckIn>, AirtableError> {
        Ok(Vec::new())
    }

    async fn status_reports(&self, _fellow_id: &str) -> Result<Vec<StatusReport>, AirtableError> {
        Ok(Vec::new())
    }
}

impl RecordSource for AirtableClient {
    fn name(&self) -> &'static str {
        "airtable"
    }

    async fn fellows(&self) -> Result<Vec<Fellow>, AirtableError> {
        self.fetch_fellows().await
    }

    async fn alumni(&self) -> Result<Vec<Alumnus>, AirtableError> {
        self.fetch_alumni().await
    }

    async fn check_ins(&self, fellow_id: &str) -> Result<Vec<CheckIn>, AirtableError> {
        self.fetch_check_ins(fellow_id).await
    }

    async fn status_reports(&self, fellow_id: &str) -> Result<Vec<StatusReport>, AirtableError> {
        self.fetch_status_reports(fellow_id).await
    }
}
