use std::path::{Path, PathBuf};

use bytes::Bytes;
use tracing::info;

use crate::error::{AppError, AppResult, ConfigError, TemplateError};

/// Loads `KEY=value` pairs from a `.env` file into the process environment.
/// Variables that are already set keep their value.
///
/// # Errors
///
/// Returns an error when the file cannot be read or parsed.
pub fn load_env_file(path: Option<&str>) -> AppResult<()> {
    let Some(path) = path else {
        info!("No .env file path provided, skipping .env loading.");
        return Ok(());
    };
    dotenvy::from_path(path).map_err(|err| {
        AppError::config(ConfigError::LoadEnvFile {
            path: PathBuf::from(path),
            source: err,
        })
    })?;
    info!("Loaded .env file from {}", path);
    Ok(())
}

pub(crate) fn read_template(path: &Path) -> AppResult<Bytes> {
    let content = std::fs::read(path).map_err(|err| {
        AppError::template(TemplateError::ReadTemplate {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    Ok(Bytes::from(content))
}
