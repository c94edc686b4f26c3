//! Final statistics per operation.
//!
//! Two different denominators are in play: the reported average divides an
//! operation's sum by the number of `Loop spin:` iterations, while the
//! standard deviation is taken around the operation's own sample mean. They
//! agree only when every iteration emits exactly one `average:` line per
//! operation.

use crate::benchlog::collect::BenchLog;
use crate::benchlog::operation::Operation;
use crate::utils::format::{format_number, format_stat};
use tracing::warn;

/// `sum / n`, undefined for `n == 0`.
pub fn mean(sum: f64, n: usize) -> Option<f64> {
    if n == 0 { None } else { Some(sum / n as f64) }
}

/// Population standard deviation of `samples` around `sum / samples.len()`.
pub fn population_stddev(samples: &[f64], sum: f64) -> Option<f64> {
    let mean = mean(sum, samples.len())?;
    let variance = samples
        .iter()
        .map(|x| (x - mean) * (x - mean))
        .sum::<f64>()
        / samples.len() as f64;
    Some(variance.sqrt())
}

#[derive(Debug, Clone, PartialEq)]
pub struct OperationStats {
    pub operation: Operation,
    pub samples: usize,
    pub sum: f64,
    /// Sum over the global iteration count.
    pub avg: Option<f64>,
    /// Sum over this operation's sample count.
    pub sample_mean: Option<f64>,
    pub stddev: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BenchReport {
    pub iterations: u64,
    pub operations: Vec<OperationStats>,
}

impl BenchReport {
    pub fn from_log(log: &BenchLog) -> Self {
        let iterations = log.iterations();
        if iterations == 0 {
            warn!("no iterations recorded (no `Loop spin:` lines); averages are undefined");
        }

        let operations = Operation::ALL
            .into_iter()
            .map(|operation| {
                let samples = log.samples(operation);
                let sum = log.operation_sum(operation);
                let n = samples.len();

                if n == 0 {
                    warn!("no samples collected for operation {}", operation);
                } else if n as u64 != iterations {
                    warn!(
                        operation = %operation,
                        samples = n,
                        iterations,
                        "sample count differs from iteration count; avg and stddev use different means"
                    );
                }

                OperationStats {
                    operation,
                    samples: n,
                    sum,
                    avg: mean(sum, iterations as usize),
                    sample_mean: mean(sum, n),
                    stddev: population_stddev(samples, sum),
                }
            })
            .collect();

        Self {
            iterations,
            operations,
        }
    }

    /// The plain two-lines-per-operation report.
    pub fn report_lines(&self) -> Vec<String> {
        self.operations
            .iter()
            .flat_map(|stats| {
                [
                    format!("{} {}", stats.operation.avg_caption(), format_stat(stats.avg)),
                    format!(
                        "{} {}",
                        stats.operation.stddev_caption(),
                        format_stat(stats.stddev)
                    ),
                ]
            })
            .collect()
    }

    /// Content of the boxed summary: one block per operation and an
    /// iteration footer.
    pub fn summary_blocks(&self) -> (Vec<Vec<String>>, Vec<String>) {
        let blocks = self
            .operations
            .iter()
            .map(|stats| {
                vec![
                    format!(
                        "{}: {} samples",
                        stats.operation,
                        format_number(stats.samples)
                    ),
                    format!("  avg {}", format_stat(stats.avg)),
                    format!("  stddev {}", format_stat(stats.stddev)),
                ]
            })
            .collect();
        let summary = vec![format!(
            "Iterations: {}",
            format_number(self.iterations as usize)
        )];
        (blocks, summary)
    }
}
