use std::io::IsTerminal;

use crossterm::style::{Color, Stylize};

use crate::{error::AppResult, metrics::RunReport};

/// Status counted as a successful request.
const SUCCESS_STATUS: u16 = 200;
/// Statuses at or above this are reported as failures.
const FAILURE_STATUS_MIN: u16 = 400;
const PERCENT_DIVISOR: u64 = 100;
const MICROS_PER_SEC_X100: u128 = 100_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineTone {
    Title,
    Plain,
    Info,
    Warning,
    Failure,
    Highlight,
}

impl LineTone {
    const fn color(self) -> Option<Color> {
        match self {
            LineTone::Title => Some(Color::Green),
            LineTone::Plain => None,
            LineTone::Info => Some(Color::Cyan),
            LineTone::Warning => Some(Color::Yellow),
            LineTone::Failure => Some(Color::Red),
            LineTone::Highlight => Some(Color::Magenta),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SummaryLine {
    pub(crate) tone: LineTone,
    pub(crate) text: String,
}

impl SummaryLine {
    fn new(tone: LineTone, text: String) -> Self {
        Self { tone, text }
    }
}

/// Requests per second, scaled by 100.
pub(crate) fn avg_rps_x100(report: &RunReport) -> u64 {
    let elapsed_us = report.elapsed.as_micros().max(1);
    let scaled = u128::from(report.total_requests)
        .saturating_mul(MICROS_PER_SEC_X100)
        .checked_div(elapsed_us)
        .unwrap_or(0);
    u64::try_from(scaled).unwrap_or(u64::MAX)
}

pub(crate) fn summary_lines(report: &RunReport) -> Vec<SummaryLine> {
    let tally = &report.tally;
    let mut lines = vec![
        SummaryLine::new(LineTone::Title, "===== Load Test Report =====".to_owned()),
        SummaryLine::new(
            LineTone::Plain,
            format!("Total time: {}", format_elapsed(report)),
        ),
        SummaryLine::new(
            LineTone::Plain,
            format!("Total requests: {}", report.total_requests),
        ),
        SummaryLine::new(
            LineTone::Info,
            format!(
                "Successful requests (HTTP {}): {}",
                SUCCESS_STATUS,
                tally.count(SUCCESS_STATUS)
            ),
        ),
    ];

    let mut others = tally
        .status_counts
        .iter()
        .filter(|(status, _)| **status != SUCCESS_STATUS)
        .peekable();
    if others.peek().is_some() {
        lines.push(SummaryLine::new(
            LineTone::Warning,
            "Distribution of other HTTP status codes:".to_owned(),
        ));
        for (status, count) in others {
            if *status >= FAILURE_STATUS_MIN {
                lines.push(SummaryLine::new(
                    LineTone::Failure,
                    format!("  Failed requests (HTTP {}): {}", status, count),
                ));
            } else {
                lines.push(SummaryLine::new(
                    LineTone::Plain,
                    format!("  - HTTP {}: {}", status, count),
                ));
            }
        }
    }

    if tally.network_errors > 0 {
        lines.push(SummaryLine::new(
            LineTone::Failure,
            format!("Network errors: {}", tally.network_errors),
        ));
    }

    let rps = avg_rps_x100(report);
    lines.push(SummaryLine::new(
        LineTone::Highlight,
        format!(
            "Requests per second: {}.{:02}",
            rps / PERCENT_DIVISOR,
            rps % PERCENT_DIVISOR
        ),
    ));
    lines
}

pub(crate) fn print_summary(report: &RunReport, no_color: bool) {
    let use_color = !no_color && std::io::stdout().is_terminal();
    for line in summary_lines(report) {
        match line.tone.color() {
            Some(color) if use_color => println!("{}", line.text.with(color)),
            Some(_) | None => println!("{}", line.text),
        }
    }
}

/// # Errors
///
/// Returns an error when the report cannot be serialized.
pub(crate) fn print_json_report(report: &RunReport) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

fn format_elapsed(report: &RunReport) -> String {
    let millis = report.elapsed.as_millis();
    format!("{}.{:03}s", millis / 1000, millis % 1000)
}
