//! Benchmark driver: runs both workloads for a fixed number of iterations
//! and accumulates one timing sample per workload per iteration.

use crate::harness::time_once;
use crate::workload::Workload;
use anyhow::Result;
use std::time::Duration;

/// Accumulated timing samples for one workload across a run.
#[derive(Debug, Clone)]
pub struct WorkloadStats {
    label: String,
    total: Duration,
    samples: Vec<Duration>,
}

impl WorkloadStats {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            total: Duration::ZERO,
            samples: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn add_sample(&mut self, sample: Duration) {
        self.total += sample;
        self.samples.push(sample);
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    pub fn samples(&self) -> &[Duration] {
        &self.samples
    }

    /// Running sum of all samples.
    pub fn total(&self) -> Duration {
        self.total
    }

    /// Arithmetic mean in whole nanoseconds, truncated.
    pub fn mean_ns(&self) -> u128 {
        if self.samples.is_empty() {
            return 0;
        }
        self.total.as_nanos() / self.samples.len() as u128
    }

    pub fn min_ns(&self) -> u128 {
        self.samples.iter().map(Duration::as_nanos).min().unwrap_or(0)
    }

    pub fn max_ns(&self) -> u128 {
        self.samples.iter().map(Duration::as_nanos).max().unwrap_or(0)
    }
}

/// Outcome of a full comparison run: one stats block per workload.
#[derive(Debug, Clone)]
pub struct ComparisonOutcome {
    pub first: WorkloadStats,
    pub second: WorkloadStats,
}

/// Run each workload `iterations` times through the timing harness.
///
/// Within every iteration `first` runs before `second`; the order is fixed
/// for the whole run and never interleaved or reordered. A failure from
/// either workload aborts the run immediately: no retry, no substituted
/// sample, no partial outcome.
pub fn run_comparison(
    iterations: u32,
    first: &mut dyn Workload,
    second: &mut dyn Workload,
) -> Result<ComparisonOutcome> {
    let mut first_stats = WorkloadStats::new(first.label());
    let mut second_stats = WorkloadStats::new(second.label());

    for _ in 0..iterations {
        first_stats.add_sample(time_once(|| first.run())?);
        second_stats.add_sample(time_once(|| second.run())?);
    }

    Ok(ComparisonOutcome {
        first: first_stats,
        second: second_stats,
    })
}
