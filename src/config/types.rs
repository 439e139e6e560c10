use std::time::Duration;

use bytes::Bytes;

use crate::args::{HttpMethod, PositiveU64, PositiveUsize};
use crate::payload::IdSpec;

/// Per-request timeout applied when none is configured.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Finalized settings for one load test run.
#[derive(Debug, Clone)]
pub struct LoadTestConfig {
    pub url: String,
    pub total_requests: PositiveU64,
    pub concurrency: PositiveUsize,
    pub method: HttpMethod,
    /// Raw JSON template bytes; only consulted for POST.
    pub template: Option<Bytes>,
    /// Id injected into the template before the run starts.
    pub id: Option<IdSpec>,
    pub request_timeout: Duration,
}

impl LoadTestConfig {
    #[must_use]
    pub const fn new(url: String, total_requests: PositiveU64, concurrency: PositiveUsize) -> Self {
        Self {
            url,
            total_requests,
            concurrency,
            method: HttpMethod::Get,
            template: None,
            id: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}
