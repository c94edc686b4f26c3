//! Single pass over a captured batch-job log.
//!
//! The log repeats one block per iteration:
//!
//! ```text
//! Loop spin: 3
//! gen_a:
//! average: 12345 cycles
//! median: 12000 cycles
//! indcpa_keypair:
//! average: ...
//! ```
//!
//! A label line moves the cursor; every `average:` line that follows is
//! credited to the cursor until the next label.

use crate::benchlog::operation::Operation;
use crate::error::Result;
use crate::input;
use regex::Regex;
use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{debug, info, trace, warn};

/// Cursor value before the first label line.
pub const NO_LABEL: &str = "none";

const ITERATION_MARKER: &str = "Loop spin:";
const AVERAGE_MARKER: &str = "average:";
const MEDIAN_MARKER: &str = "median:";

/// An `average:` line whose number could not be read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no number after `average:` (found {token:?})")]
pub struct InvalidAverage {
    pub token: String,
}

/// What a single log line means to the aggregator, by precedence.
#[derive(Debug, Clone, PartialEq)]
pub enum LineEvent<'a> {
    Iteration,
    Average(std::result::Result<f64, InvalidAverage>),
    Median,
    Label(&'a str),
    Other,
}

fn average_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"average:\s*([0-9]*(?:\.[0-9]*)?)").expect("average pattern is valid")
    })
}

/// Read the number following the first `average:` in `line`: the longest
/// run of digits holding at most one decimal point. Values out of `f64`
/// range are rejected.
pub fn parse_average(line: &str) -> std::result::Result<f64, InvalidAverage> {
    let token = average_regex()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map_or("", |m| m.as_str());
    token
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| InvalidAverage {
            token: token.to_string(),
        })
}

pub fn classify_line(line: &str) -> LineEvent<'_> {
    if line.contains(ITERATION_MARKER) {
        return LineEvent::Iteration;
    }
    if line.contains(AVERAGE_MARKER) {
        return LineEvent::Average(parse_average(line));
    }
    if line.contains(MEDIAN_MARKER) {
        return LineEvent::Median;
    }
    let trimmed = line.trim();
    if trimmed.ends_with(':') && !trimmed.contains("average") && !trimmed.contains("median") {
        return LineEvent::Label(trimmed);
    }
    LineEvent::Other
}

/// Accumulated state of the scan.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchLog {
    iterations: u64,
    cursor: String,
    sums: BTreeMap<String, f64>,
    samples: [Vec<f64>; 7],
    dropped: BTreeMap<String, usize>,
    malformed: usize,
}

impl Default for BenchLog {
    fn default() -> Self {
        Self::new()
    }
}

impl BenchLog {
    pub fn new() -> Self {
        Self {
            iterations: 0,
            cursor: NO_LABEL.to_string(),
            sums: Operation::ALL
                .iter()
                .map(|op| (op.label().to_string(), 0.0))
                .collect(),
            samples: Default::default(),
            dropped: BTreeMap::new(),
            malformed: 0,
        }
    }

    pub fn observe(&mut self, line: &str) {
        match classify_line(line) {
            LineEvent::Iteration => {
                self.iterations += 1;
                trace!(iteration = self.iterations, "loop spin");
            }
            LineEvent::Average(Ok(value)) => self.record(value),
            LineEvent::Average(Err(e)) => {
                self.malformed += 1;
                warn!("failed to parse number from line {:?}: {}", line, e);
            }
            LineEvent::Median | LineEvent::Other => {}
            LineEvent::Label(label) => {
                trace!(from = %self.cursor, to = label, "label");
                self.cursor = label.to_string();
            }
        }
    }

    fn record(&mut self, value: f64) {
        *self.sums.entry(self.cursor.clone()).or_insert(0.0) += value;

        match Operation::from_label(&self.cursor) {
            Some(op) => {
                debug!(operation = %op, value, "sample");
                self.samples[op.index()].push(value);
            }
            None => {
                let dropped = self.dropped.entry(self.cursor.clone()).or_insert(0);
                *dropped += 1;
                if *dropped == 1 {
                    warn!(
                        label = %self.cursor,
                        "average under unrecognized label is left out of the report"
                    );
                }
            }
        }
    }

    /// Number of `Loop spin:` markers seen.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Label the next `average:` line would be credited to.
    pub fn cursor(&self) -> &str {
        &self.cursor
    }

    /// Running sum credited to `label`, known operation or not.
    pub fn sum(&self, label: &str) -> f64 {
        self.sums.get(label).copied().unwrap_or(0.0)
    }

    pub fn operation_sum(&self, op: Operation) -> f64 {
        self.sum(op.label())
    }

    pub fn samples(&self, op: Operation) -> &[f64] {
        &self.samples[op.index()]
    }

    /// Averages credited to labels outside the seven operations.
    pub fn dropped(&self) -> &BTreeMap<String, usize> {
        &self.dropped
    }

    /// `average:` lines skipped because their number did not parse.
    pub fn malformed(&self) -> usize {
        self.malformed
    }
}

pub fn scan_bench_log<R: BufRead>(reader: R, path: &Path) -> Result<BenchLog> {
    let mut log = BenchLog::new();
    let lines = input::for_each_line(reader, path, |line| log.observe(line))?;
    info!(
        file = %path.display(),
        lines,
        iterations = log.iterations,
        malformed = log.malformed,
        "benchmark log scanned"
    );
    Ok(log)
}

pub fn analyze_log(path: &Path) -> Result<BenchLog> {
    scan_bench_log(input::open(path)?, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(lines: &[&str]) -> BenchLog {
        let mut log = BenchLog::new();
        for line in lines {
            log.observe(line);
        }
        log
    }

    #[test]
    fn average_number_extraction() {
        assert_eq!(parse_average("average: 12345 cycles"), Ok(12345.0));
        assert_eq!(parse_average("  average: 12.5 ms (stddev ...)"), Ok(12.5));
        assert_eq!(parse_average("average:7.5"), Ok(7.5));
        assert_eq!(parse_average("average: 1.2.3"), Ok(1.2));
        assert_eq!(parse_average("average: 42."), Ok(42.0));
        assert_eq!(
            parse_average("average: n/a"),
            Err(InvalidAverage {
                token: String::new()
            })
        );
        assert!(parse_average("average: .").is_err());
        assert!(parse_average("average:").is_err());
    }

    #[test]
    fn out_of_range_average_is_rejected() {
        let huge = "9".repeat(400);
        assert_eq!(
            parse_average(&format!("average: {huge} cycles")),
            Err(InvalidAverage { token: huge })
        );
    }

    #[test]
    fn classification_precedence() {
        assert_eq!(classify_line("Loop spin: 1 average: 3"), LineEvent::Iteration);
        assert_eq!(classify_line("average: 3 median: 2"), LineEvent::Average(Ok(3.0)));
        assert_eq!(classify_line("median: 9.9"), LineEvent::Median);
        assert_eq!(classify_line("  gen_a:  "), LineEvent::Label("gen_a:"));
        assert_eq!(classify_line("unrelated:"), LineEvent::Label("unrelated:"));
        assert_eq!(classify_line("the average value:"), LineEvent::Other);
        assert_eq!(classify_line("gen_a: done"), LineEvent::Other);
        assert_eq!(classify_line(""), LineEvent::Other);
    }

    #[test]
    fn cursor_follows_labels() {
        let log = feed(&[
            "gen_a:",
            "  average: 12.5 ms (stddev ...)",
            "Loop spin:",
            "gen_a:",
            "  average: 7.5 ms",
        ]);
        assert_eq!(log.iterations(), 1);
        assert_eq!(log.operation_sum(Operation::GenA), 20.0);
        assert_eq!(log.samples(Operation::GenA), &[12.5, 7.5]);
        assert_eq!(log.cursor(), "gen_a:");
    }

    #[test]
    fn median_is_ignored() {
        let mut log = feed(&["kyber_encaps:", "average: 2"]);
        let before = log.clone();
        log.observe("median: 9.9");
        log.observe("   median: 1");
        assert_eq!(log, before);
    }

    #[test]
    fn unknown_label_is_summed_but_not_sampled() {
        let log = feed(&[
            "average: 1.0",
            "unrelated:",
            "average: 4.0",
            "average: 6.0",
            "kyber_decaps:",
            "average: 3.0",
        ]);
        assert_eq!(log.sum(NO_LABEL), 1.0);
        assert_eq!(log.sum("unrelated:"), 10.0);
        assert_eq!(log.dropped().get("unrelated:"), Some(&2));
        assert_eq!(log.dropped().get(NO_LABEL), Some(&1));
        assert_eq!(log.samples(Operation::Decaps), &[3.0]);
        for op in Operation::ALL.into_iter().filter(|&op| op != Operation::Decaps) {
            assert!(log.samples(op).is_empty());
            assert_eq!(log.operation_sum(op), 0.0);
        }
    }

    #[test]
    fn malformed_average_is_skipped() {
        let log = feed(&["gen_a:", "average: bogus", "average: 5"]);
        assert_eq!(log.malformed(), 1);
        assert_eq!(log.samples(Operation::GenA), &[5.0]);
        assert_eq!(log.operation_sum(Operation::GenA), 5.0);
    }

    #[test]
    fn out_of_range_average_is_skipped() {
        let huge = format!("average: {}", "9".repeat(400));
        let log = feed(&["Loop spin: 1", "gen_a:", &huge]);
        assert_eq!(log.malformed(), 1);
        assert!(log.samples(Operation::GenA).is_empty());
        assert_eq!(log.operation_sum(Operation::GenA), 0.0);
    }

    #[test]
    fn label_lines_never_mention_average_or_median() {
        let log = feed(&["gen_a:", "median of runs:", "average: 2"]);
        // "median of runs:" contains "median" but not "median:"; still not a label
        assert_eq!(log.cursor(), "gen_a:");
        assert_eq!(log.samples(Operation::GenA), &[2.0]);
    }
}
