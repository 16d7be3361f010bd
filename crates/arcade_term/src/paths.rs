//! Cross-platform application paths

use crate::error::AppError;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppPaths {
    config_dir: PathBuf,
}

impl AppPaths {
    pub fn new() -> Result<Self, AppError> {
        let base = dirs::config_dir().ok_or(AppError::NoConfigDir)?;
        Ok(Self {
            config_dir: base.join("mindarcade"),
        })
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }
}
