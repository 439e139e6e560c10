use std::sync::Arc;

use bytes::Bytes;
use reqwest::{Client, Request, header::CONTENT_TYPE};
use tokio::sync::mpsc;
use tracing::{debug, error, warn};

use crate::{args::HttpMethod, error::HttpError, metrics::RequestOutcome};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Method, target and body shared read-only by every worker of a run.
#[derive(Debug)]
pub(super) struct RequestSpec {
    pub(super) method: HttpMethod,
    pub(super) url: String,
    pub(super) body: Option<Bytes>,
}

impl RequestSpec {
    fn build(&self, client: &Client) -> Result<Request, HttpError> {
        let mut request_builder = client.request(self.method.to_reqwest(), self.url.as_str());
        match self.method {
            HttpMethod::Post => {
                request_builder = request_builder.header(CONTENT_TYPE, JSON_CONTENT_TYPE);
                if let Some(body) = self.body.as_ref() {
                    request_builder = request_builder.body(body.clone());
                }
            }
            HttpMethod::Get => {}
        }
        request_builder
            .build()
            .map_err(|err| HttpError::BuildRequestFailed { source: err })
    }
}

pub(super) struct WorkerContext {
    pub(super) worker_id: usize,
    pub(super) assigned: u64,
    pub(super) client: Client,
    pub(super) spec: Arc<RequestSpec>,
    pub(super) outcomes_tx: mpsc::Sender<RequestOutcome>,
}

/// Sends the worker's share of requests back to back, reporting one outcome
/// per request. Failures are recorded and never retried.
pub(super) async fn run_worker(ctx: WorkerContext) {
    let WorkerContext {
        worker_id,
        assigned,
        client,
        spec,
        outcomes_tx,
    } = ctx;

    for _ in 0..assigned {
        let outcome = send_request(&client, &spec).await;
        if outcomes_tx.send(outcome).await.is_err() {
            warn!("Outcome collector closed, worker {} stopping early", worker_id);
            return;
        }
    }
    debug!("Worker {} finished {} requests", worker_id, assigned);
}

async fn send_request(client: &Client, spec: &RequestSpec) -> RequestOutcome {
    let request = match spec.build(client) {
        Ok(request) => request,
        Err(err) => {
            error!("{}", err);
            return RequestOutcome::NetworkError;
        }
    };

    match execute_request(client, request).await {
        Ok(status) => RequestOutcome::Status(status),
        Err(err) => {
            if err.is_timeout() {
                error!("Request timed out: {}", err);
            } else {
                error!("{}", err);
            }
            RequestOutcome::NetworkError
        }
    }
}

/// Executes `request` and returns its status. The response body is released
/// without being read.
pub(super) async fn execute_request(client: &Client, request: Request) -> Result<u16, HttpError> {
    let response = client
        .execute(request)
        .await
        .map_err(|err| HttpError::Transport { source: err })?;
    let status = response.status().as_u16();
    drop(response);
    Ok(status)
}
