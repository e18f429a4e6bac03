use anyhow::bail;
use roster_airtable::{AirtableClient, AirtableError, RecordSource, SampleSource};
use roster_config::{RosterConfig, SourceKind};
use roster_core::entities::{Alumnus, CheckIn, Fellow, StatusReport};

/// The record source selected for this run.
#[derive(Debug, Clone)]
pub enum Source {
    Sample(SampleSource),
    Airtable(AirtableClient),
}

impl Source {
    /// Build the source named by `kind`. Airtable requires credentials.
    pub fn from_config(kind: SourceKind, config: &RosterConfig) -> anyhow::Result<Self> {
        match kind {
            SourceKind::Sample => Ok(Self::Sample(SampleSource)),
            SourceKind::Airtable => {
                let airtable = config.require_airtable()?;
                Ok(Self::Airtable(AirtableClient::new(airtable)?))
            }
        }
    }

    /// The Airtable client, for commands that write.
    pub fn writable(&self) -> anyhow::Result<&AirtableClient> {
        match self {
            Self::Airtable(client) => Ok(client),
            Self::Sample(_) => {
                bail!("the sample source is read-only; pass --source airtable to write records")
            }
        }
    }
}

impl RecordSource for Source {
    fn name(&self) -> &'static str {
        match self {
            Self::Sample(source) => source.name(),
            Self::Airtable(client) => client.name(),
        }
    }

    async fn fellows(&self) -> Result<Vec<Fellow>, AirtableError> {
        match self {
            Self::Sample(source) => source.fellows().await,
            Self::Airtable(client) => client.fellows().await,
        }
    }

    async fn alumni(&self) -> Result<Vec<Alumnus>, AirtableError> {
        match self {
            Self::Sample(source) => source.alumni().await,
            Self::Airtable(client) => client.alumni().await,
        }
    }

    async fn check_ins(&self, fellow_id: &str) -> Result<Vec<CheckIn>, AirtableError> {
        match self {
            Self::Sample(source) => source.check_ins(fellow_id).await,
            Self::Airtable(client) => client.check_ins(fellow_id).await,
        }
    }

    async fn status_reports(&self, fellow_id: &str) -> Result<Vec<StatusReport>, AirtableError> {
        match self {
            Self::Sample(source) => source.status_reports(fellow_id).await,
            Self::Airtable(client) => client.status_reports(fellow_id).await,
        }
    }
}
