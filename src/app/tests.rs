use super::summary::{LineTone, SummaryLine, avg_rps_x100, summary_lines};
use crate::error::{AppError, AppResult};
use crate::metrics::{RequestOutcome, ResultTally, RunReport};
use std::time::Duration;

fn report(elapsed: Duration, outcomes: &[RequestOutcome]) -> RunReport {
    let tally: ResultTally = outcomes.iter().copied().collect();
    RunReport {
        elapsed,
        total_requests: tally.total(),
        tally,
    }
}

fn find<'lines>(lines: &'lines [SummaryLine], prefix: &str) -> Option<&'lines SummaryLine> {
    lines.iter().find(|line| line.text.trim_start().starts_with(prefix))
}

#[test]
fn throughput_uses_fixed_point_hundredths() -> AppResult<()> {
    let outcomes = vec![RequestOutcome::Status(200); 3];
    let report = report(Duration::from_secs(2), &outcomes);
    if avg_rps_x100(&report) != 150 {
        return Err(AppError::validation("Expected 1.50 requests per second"));
    }
    let instant = report_with_elapsed(Duration::ZERO)?;
    if avg_rps_x100(&instant) == 0 {
        return Err(AppError::validation("Zero elapsed time must not divide by zero"));
    }
    Ok(())
}

fn report_with_elapsed(elapsed: Duration) -> AppResult<RunReport> {
    Ok(report(elapsed, &[RequestOutcome::Status(200)]))
}

#[test]
fn summary_lists_success_failures_and_network_errors() -> AppResult<()> {
    let report = report(
        Duration::from_millis(1250),
        &[
            RequestOutcome::Status(200),
            RequestOutcome::Status(200),
            RequestOutcome::Status(302),
            RequestOutcome::Status(500),
            RequestOutcome::NetworkError,
        ],
    );
    let lines = summary_lines(&report);

    let expect = |prefix: &'static str, text: &str, tone: LineTone| -> AppResult<()> {
        let line = find(&lines, prefix).ok_or_else(|| AppError::validation(prefix))?;
        if line.text.trim_start() != text || line.tone != tone {
            return Err(AppError::validation(format!("Unexpected line: {:?}", line)));
        }
        Ok(())
    };

    expect("Total time", "Total time: 1.250s", LineTone::Plain)?;
    expect("Total requests", "Total requests: 5", LineTone::Plain)?;
    expect(
        "Successful requests",
        "Successful requests (HTTP 200): 2",
        LineTone::Info,
    )?;
    expect("Distribution", "Distribution of other HTTP status codes:", LineTone::Warning)?;
    expect("- HTTP 302", "- HTTP 302: 1", LineTone::Plain)?;
    expect("Failed requests", "Failed requests (HTTP 500): 1", LineTone::Failure)?;
    expect("Network errors", "Network errors: 1", LineTone::Failure)?;
    expect("Requests per second", "Requests per second: 4.00", LineTone::Highlight)?;
    Ok(())
}

#[test]
fn clean_run_omits_distribution_and_network_errors() -> AppResult<()> {
    let outcomes = vec![RequestOutcome::Status(200); 4];
    let lines = summary_lines(&report(Duration::from_secs(1), &outcomes));
    if find(&lines, "Distribution").is_some() || find(&lines, "Network errors").is_some() {
        return Err(AppError::validation(format!("Unexpected lines: {:?}", lines)));
    }
    if lines.first().map(|line| line.tone) != Some(LineTone::Title) {
        return Err(AppError::validation("Expected a title line first"));
    }
    Ok(())
}
