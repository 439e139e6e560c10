use tokio::{sync::mpsc, task::JoinHandle};
use tracing::debug;

use super::{RequestOutcome, ResultTally};

/// Spawns the single consumer of the outcome channel. The returned handle
/// resolves once every sender has been dropped and the channel is drained.
#[must_use]
pub fn setup_outcome_collector(mut outcomes_rx: mpsc::Receiver<RequestOutcome>) -> JoinHandle<ResultTally> {
    tokio::spawn(async move {
        let mut tally = ResultTally::default();
        while let Some(outcome) = outcomes_rx.recv().await {
            tally.record(outcome);
        }
        debug!(
            "Outcome channel closed after {} outcomes ({} network errors)",
            tally.total(),
            tally.network_errors
        );
        tally
    })
}
