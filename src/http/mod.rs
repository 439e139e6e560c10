//! Worker-pool dispatch: partitioning, per-worker clients and request
//! execution.
mod dispatch;
mod plan;
mod worker;

#[cfg(test)]
mod test_support;

pub use dispatch::{build_request_body, run_load_test, run_load_test_with_rng};
pub use plan::partition_requests;
