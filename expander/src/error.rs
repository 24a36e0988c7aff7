use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BinderError {
    #[error("arity {arity} exceeds the configured maximum of {max}")]
    ArityOutOfRange { arity: usize, max: usize },
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("malformed config: {0}")]
    ConfigSyntax(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
