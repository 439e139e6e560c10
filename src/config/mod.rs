//! Configuration resolution: `.env` loading, environment overrides and the
//! finalized [`LoadTestConfig`] handed to the dispatcher.
mod apply;
mod loader;
pub mod types;


use std::path::Path;

use tracing::{debug, warn};

use crate::args::{HttpMethod, TesterArgs};
use crate::error::{AppError, AppResult, ValidationError};
use crate::payload::{IdKind, IdSpec};

pub use apply::{apply_env_overrides, process_env};
pub use loader::load_env_file;
pub use types::{DEFAULT_REQUEST_TIMEOUT, LoadTestConfig};

/// Loads the optional `.env` file, applies environment overrides and resolves
/// the result into a [`LoadTestConfig`].
///
/// # Errors
///
/// Returns an error when the `.env` file or template cannot be read, or when
/// the resulting values are invalid.
pub fn load_config(mut args: TesterArgs) -> AppResult<LoadTestConfig> {
    load_env_file(args.env_path.as_deref())?;
    apply_env_overrides(&mut args, process_env)?;
    resolve_config(&args)
}

/// Validates arguments and reads the JSON template for POST runs.
///
/// # Errors
///
/// Returns an error when the URL is missing, the id length is out of range,
/// or the template file cannot be read.
pub fn resolve_config(args: &TesterArgs) -> AppResult<LoadTestConfig> {
    let url = args
        .url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .ok_or_else(|| AppError::validation(ValidationError::MissingUrl))?;

    let mut config = LoadTestConfig::new(url.to_owned(), args.requests, args.concurrency);
    config.method = args.verb;
    config.request_timeout = std::time::Duration::from_secs(args.timeout_secs.get());

    let json_path = args
        .json_path
        .as_deref()
        .filter(|path| !path.trim().is_empty());
    match (args.verb, json_path) {
        (HttpMethod::Post, Some(path)) => {
            config.template = Some(loader::read_template(Path::new(path))?);
            config.id = resolve_id_spec(&args.rand_id_type, args.rand_id_chrs)?;
        }
        (HttpMethod::Get, Some(path)) => {
            debug!("Ignoring JSON template {} for GET requests", path);
        }
        (HttpMethod::Post | HttpMethod::Get, None) => {}
    }

    Ok(config)
}

fn resolve_id_spec(name: &str, length: usize) -> AppResult<Option<IdSpec>> {
    let Some(kind) = IdKind::from_name(name) else {
        return Ok(None);
    };
    if kind == IdKind::Unknown {
        warn!("Unknown rand-id-type '{}', the JSON body gets a null id", name);
    }
    Ok(Some(IdSpec::new(kind, length)?))
}
