//! Errors raised while reading or writing `config.yml`.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `save` was called before `load` picked a file
    #[error("No configuration file selected; load one first")]
    NotLoaded,

    #[error("Cannot locate the home directory for the default configuration")]
    NoHomeDirectory,

    /// Directory creation, read or write failed
    #[error("Cannot access {path}: {source}")]
    Access {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed configuration in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Cannot encode configuration: {0}")]
    Encode(#[source] serde_yaml::Error),

    /// Log level is not one of off, error, warn, info, debug, trace
    #[error("Unknown log level '{0}'")]
    InvalidLogLevel(String),
}
