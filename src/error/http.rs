use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to build request: {source}")]
    BuildRequestFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Network error: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },
}

impl HttpError {
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        match self {
            HttpError::Transport { source } => source.is_timeout(),
            HttpError::BuildClientFailed { .. } | HttpError::BuildRequestFailed { .. } => false,
        }
    }
}
