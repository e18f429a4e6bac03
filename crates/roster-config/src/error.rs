use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A provider could not be read, or a key has the wrong type.
    #[error("could not load roster settings: {0}")]
    Figment(#[from] figment::Error),

    /// The remote store was selected without its credentials.
    #[error(
        "'{section}' needs both api_key and base_id \
         (set [{section}] in config.toml or ROSTER_{env}__API_KEY / ROSTER_{env}__BASE_ID)",
        env = .section.to_uppercase()
    )]
    NotConfigured { section: String },

    /// Parsed fine but is out of range.
    #[error("bad setting {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}
