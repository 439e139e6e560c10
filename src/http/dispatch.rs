use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use reqwest::Client;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::{
    args::HttpMethod,
    config::LoadTestConfig,
    error::{AppError, AppResult, HttpError, ValidationError},
    metrics::{RequestOutcome, RunReport, setup_outcome_collector},
    payload::prepare_payload,
};

use super::plan::partition_requests;
use super::worker::{RequestSpec, WorkerContext, run_worker};

pub(crate) const DEFAULT_USER_AGENT: &str =
    concat!("restclient-loadtest/", env!("CARGO_PKG_VERSION"));

/// Upper bound on buffered outcomes; the collector drains concurrently, so
/// producers only wait if it falls this far behind.
pub(crate) const MAX_OUTCOME_BUFFER: usize = 1 << 16;

/// Runs a load test with an id generator seeded from OS entropy.
///
/// # Errors
///
/// Returns an error when the configuration is invalid, the request body
/// cannot be prepared, an HTTP client cannot be built, or a worker panics.
/// Individual request failures are counted, not returned.
pub async fn run_load_test(config: &LoadTestConfig) -> AppResult<RunReport> {
    ensure_url(config)?;
    let body = {
        let mut rng = StdRng::from_entropy();
        build_request_body(config, &mut rng)?
    };
    dispatch(config, body).await
}

/// Same as [`run_load_test`] but draws the injected id from `rng`.
///
/// # Errors
///
/// See [`run_load_test`].
pub async fn run_load_test_with_rng<R>(config: &LoadTestConfig, rng: &mut R) -> AppResult<RunReport>
where
    R: Rng + ?Sized,
{
    ensure_url(config)?;
    let body = build_request_body(config, rng)?;
    dispatch(config, body).await
}

/// Builds the single body shared by every request of a run. Only POST runs
/// carry a body; with an id spec the template gets a fresh `id` (`null` for an
/// unknown kind), otherwise it is sent verbatim.
///
/// # Errors
///
/// Returns an error when the template is not a JSON object.
pub fn build_request_body<R>(config: &LoadTestConfig, rng: &mut R) -> AppResult<Option<Bytes>>
where
    R: Rng + ?Sized,
{
    match (config.method, config.template.as_ref()) {
        (HttpMethod::Post, Some(template)) => match config.id.as_ref() {
            Some(id) => Ok(Some(Bytes::from(prepare_payload(template, id, rng)?))),
            None => Ok(Some(template.clone())),
        },
        (HttpMethod::Post, None) | (HttpMethod::Get, _) => Ok(None),
    }
}

fn ensure_url(config: &LoadTestConfig) -> AppResult<()> {
    if config.url.trim().is_empty() {
        return Err(AppError::validation(ValidationError::MissingUrl));
    }
    Ok(())
}

async fn dispatch(config: &LoadTestConfig, body: Option<Bytes>) -> AppResult<RunReport> {
    let total_requests = config.total_requests.get();
    let assignments: Vec<u64> = partition_requests(config.total_requests, config.concurrency)
        .into_iter()
        .filter(|assigned| *assigned > 0)
        .collect();
    let clients = assignments
        .iter()
        .map(|_| build_client(config.request_timeout))
        .collect::<AppResult<Vec<Client>>>()?;

    let spec = Arc::new(RequestSpec {
        method: config.method,
        url: config.url.clone(),
        body,
    });
    let (outcomes_tx, outcomes_rx) =
        mpsc::channel::<RequestOutcome>(outcome_buffer_size(total_requests));
    let collector = setup_outcome_collector(outcomes_rx);

    info!(
        "Sending {} {} requests to {} with {} workers",
        total_requests,
        config.method.as_str(),
        config.url,
        config.concurrency
    );

    let run_start = Instant::now();
    let mut workers = JoinSet::new();
    for (worker_id, (assigned, client)) in assignments.into_iter().zip(clients).enumerate() {
        workers.spawn(run_worker(WorkerContext {
            worker_id,
            assigned,
            client,
            spec: Arc::clone(&spec),
            outcomes_tx: outcomes_tx.clone(),
        }));
    }
    drop(outcomes_tx);

    while let Some(joined) = workers.join_next().await {
        joined?;
    }
    let elapsed = run_start.elapsed();
    let tally = collector.await?;
    debug!("Run finished in {:?}", elapsed);

    Ok(RunReport {
        elapsed,
        total_requests,
        tally,
    })
}

fn build_client(timeout: Duration) -> AppResult<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(DEFAULT_USER_AGENT)
        .build()
        .map_err(|err| AppError::http(HttpError::BuildClientFailed { source: err }))
}

pub(crate) fn outcome_buffer_size(total_requests: u64) -> usize {
    usize::try_from(total_requests)
        .unwrap_or(usize::MAX)
        .clamp(1, MAX_OUTCOME_BUFFER)
}
