use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;

/// Result of a single request: the response status, or a failure to build or
/// deliver the request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestOutcome {
    Status(u16),
    NetworkError,
}

/// Status-code histogram plus network-error counter for a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultTally {
    pub status_counts: BTreeMap<u16, u64>,
    pub network_errors: u64,
}

impl ResultTally {
    pub fn record(&mut self, outcome: RequestOutcome) {
        match outcome {
            RequestOutcome::Status(code) => {
                let count = self.status_counts.entry(code).or_insert(0);
                *count = count.saturating_add(1);
            }
            RequestOutcome::NetworkError => {
                self.network_errors = self.network_errors.saturating_add(1);
            }
        }
    }

    #[must_use]
    pub fn count(&self, status: u16) -> u64 {
        self.status_counts.get(&status).copied().unwrap_or(0)
    }

    /// Number of outcomes recorded so far.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.status_counts
            .values()
            .fold(self.network_errors, |acc, count| acc.saturating_add(*count))
    }
}

impl Extend<RequestOutcome> for ResultTally {
    fn extend<I>(&mut self, outcomes: I)
    where
        I: IntoIterator<Item = RequestOutcome>,
    {
        for outcome in outcomes {
            self.record(outcome);
        }
    }
}

impl FromIterator<RequestOutcome> for ResultTally {
    fn from_iter<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = RequestOutcome>,
    {
        let mut tally = ResultTally::default();
        tally.extend(outcomes);
        tally
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    #[serde(serialize_with = "serialize_duration_ms", rename = "elapsed_ms")]
    pub elapsed: Duration,
    pub total_requests: u64,
    #[serde(flatten)]
    pub tally: ResultTally,
}

fn serialize_duration_ms<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u64(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
}
