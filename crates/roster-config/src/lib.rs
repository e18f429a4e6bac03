//! Settings for the roster tools.
//!
//! Later layers override earlier ones:
//!
//! | layer | location |
//! |-------|----------|
//! | defaults | [`RosterConfig::default`] |
//! | user | `<config dir>/roster/config.toml` |
//! | project | `.roster/config.toml` in the working directory |
//! | environment | `ROSTER_<SECTION>__<KEY>`, e.g. `ROSTER_AIRTABLE__BASE_ID` |
//!
//! A single underscore after the section name does not nest, so
//! `ROSTER_AIRTABLE_BASE_ID` is ignored.
//!
//! ```no_run
//! let config = roster_config::RosterConfig::load_with_dotenv()?;
//! let limit = config.general.default_limit;
//! # let _ = limit;
//! # Ok::<(), roster_config::ConfigError>(())
//! ```

mod airtable;
mod error;
mod general;
mod reports;
mod thresholds;

pub use airtable::AirtableConfig;
pub use error::ConfigError;
pub use general::{GeneralConfig, SourceKind};
pub use reports::ReportsConfig;
pub use thresholds::ThresholdsConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix of every environment variable the loader reads.
pub const ENV_PREFIX: &str = "ROSTER_";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub airtable: AirtableConfig,
    #[serde(default)]
    pub thresholds: ThresholdsConfig,
    #[serde(default)]
    pub reports: ReportsConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl RosterConfig {
    /// Defaults, both TOML files, then the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value is out
    /// of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Like [`Self::load`], after copying a `.env` file (if any) into the
    /// environment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary provider chain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] on extraction failure and
    /// [`ConfigError::InvalidValue`] when validation fails.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// The provider chain [`Self::load`] extracts from.
    #[must_use]
    pub fn figment() -> Figment {
        let files = Self::global_config_path()
            .into_iter()
            .chain(std::iter::once(PathBuf::from(".roster/config.toml")))
            .filter(|path| path.exists());
        files
            .fold(
                Figment::from(Serialized::defaults(Self::default())),
                |figment, path| figment.merge(Toml::file(path)),
            )
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values no consumer can work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field: &str, reason: &str| {
            Err(ConfigError::InvalidValue {
                field: field.to_string(),
                reason: reason.to_string(),
            })
        };
        if self.thresholds.ending_soon_days == 0 {
            return invalid("thresholds.ending_soon_days", "must be at least 1");
        }
        if self.airtable.timeout_secs == 0 {
            return invalid("airtable.timeout_secs", "must be at least 1");
        }
        if self.general.default_limit == 0 {
            return invalid("general.default_limit", "must be at least 1");
        }
        if self.airtable.base_url.trim().is_empty() {
            return invalid("airtable.base_url", "must not be empty");
        }
        Ok(())
    }

    /// The Airtable section, if it carries credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when the API key or base id is
    /// missing.
    pub fn require_airtable(&self) -> Result<&AirtableConfig, ConfigError> {
        if self.airtable.is_configured() {
            Ok(&self.airtable)
        } else {
            Err(ConfigError::NotConfigured {
                section: "airtable".to_string(),
            })
        }
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("roster").join("config.toml"))
    }
}
