use std::path::PathBuf;

use kycheck_core::error::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config is not a JSON object")]
    NotAnObject,

    #[error("config_version {found} is newer than this build supports ({supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("invalid phrase list: {0}")]
    Invalid(#[from] CoreError),
}
