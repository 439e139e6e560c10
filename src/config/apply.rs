use std::str::FromStr;

use tracing::warn;

use crate::args::{HttpMethod, PositiveU64, PositiveUsize, TesterArgs};
use crate::error::{AppError, AppResult, ConfigError};

pub(crate) const ENV_URL: &str = "URL";
pub(crate) const ENV_REQUESTS: &str = "REQUESTS";
pub(crate) const ENV_CONCURRENCY: &str = "CONCURRENCY";
pub(crate) const ENV_VERB: &str = "VERB";
pub(crate) const ENV_JSONPATH: &str = "JSONPATH";
pub(crate) const ENV_RAND_ID_TYPE: &str = "RAND_ID_TYPE";
pub(crate) const ENV_RAND_ID_CHRS: &str = "RAND_ID_CHRS";

/// Reads a variable from the process environment.
#[must_use]
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Applies environment overrides to CLI arguments. A variable that is set
/// wins over the corresponding flag. Unparseable numbers are logged and the
/// flag value is kept.
///
/// # Errors
///
/// Returns an error when an override parses but is out of range (zero
/// requests or workers) or names an unsupported verb.
pub fn apply_env_overrides<F>(args: &mut TesterArgs, lookup: F) -> AppResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(ENV_URL) {
        args.url = Some(url);
    }

    if let Some(requests) = parse_env_number::<u64>(&lookup, ENV_REQUESTS) {
        args.requests = PositiveU64::try_from(requests)
            .map_err(|err| positive_field_error(ENV_REQUESTS, err))?;
    }

    if let Some(concurrency) = parse_env_number::<usize>(&lookup, ENV_CONCURRENCY) {
        args.concurrency = PositiveUsize::try_from(concurrency)
            .map_err(|err| positive_field_error(ENV_CONCURRENCY, err))?;
    }

    if let Some(verb) = lookup(ENV_VERB) {
        args.verb = HttpMethod::from_str(&verb)?;
    }

    if let Some(json_path) = lookup(ENV_JSONPATH) {
        args.json_path = Some(json_path).filter(|path| !path.trim().is_empty());
    }

    if let Some(id_type) = lookup(ENV_RAND_ID_TYPE) {
        args.rand_id_type = id_type;
    }

    if let Some(id_chrs) = parse_env_number::<usize>(&lookup, ENV_RAND_ID_CHRS) {
        args.rand_id_chrs = id_chrs;
    }

    Ok(())
}

fn parse_env_number<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("Invalid value for {} in environment: {}", key, err);
            None
        }
    }
}

fn positive_field_error(field: &str, source: crate::error::ValidationError) -> AppError {
    AppError::config(ConfigError::FieldMustBePositive {
        field: field.to_owned(),
        source,
    })
}
