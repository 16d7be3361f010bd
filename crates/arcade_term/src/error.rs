use mindarcade::error::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("could not determine the config directory")]
    NoConfigDir,

    #[error("failed to read {path:?}: {source}")]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path:?}: {source}")]
    Config { path: PathBuf, source: ConfigError },

    #[error(transparent)]
    Engine(#[from] ConfigError),

    #[error("bad arguments: {0}")]
    Usage(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
