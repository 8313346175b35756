// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Benchmark grid for complexity characterization.
//!
//! Every pattern size is run against every signal length on a generated
//! worst-case workload. Each run is timed and recorded as a [`BenchRecord`];
//! formatting and persistence are left to the caller.

pub mod analysis;
pub mod generate;

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::BenchConfig;
use crate::count::count_comparisons;
use crate::decide::decide;
use generate::Workload;

/// Requested lengths of patterns X and Y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(from = "(usize, usize)")]
pub struct PatternSize {
    pub x: usize,
    pub y: usize,
}

impl From<(usize, usize)> for PatternSize {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for PatternSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.x, self.y)
    }
}

impl FromStr for PatternSize {
    type Err = String;

    /// Parse `XxY`, e.g. `8x8`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("invalid pattern size: {s} (use XxY, e.g. 8x8)"))?;
        let parse = |part: &str| -> Result<usize, String> {
            match part.trim().parse::<usize>() {
                Ok(0) => Err(format!("invalid pattern size: {s} (lengths must be at least 1)")),
                Ok(n) => Ok(n),
                Err(_) => Err(format!("invalid pattern size: {s} (use XxY, e.g. 8x8)")),
            }
        };
        Ok(Self {
            x: parse(x)?,
            y: parse(y)?,
        })
    }
}

/// One timed decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchRecord {
    pub pattern_x_length: usize,
    pub pattern_y_length: usize,
    pub signal_length: usize,
    pub execution_time_ms: f64,
    pub result: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparisons: Option<u64>,
    pub pattern_x: String,
    pub pattern_y: String,
}

/// All records from one grid run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchReport {
    pub generated_at: DateTime<Utc>,
    pub results: Vec<BenchRecord>,
}

/// Grid to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub signal_lengths: Vec<usize>,
    pub pattern_sizes: Vec<PatternSize>,
    /// Also count comparisons (runs the counter separately from the timed call).
    pub count: bool,
}

impl From<&BenchConfig> for Grid {
    fn from(config: &BenchConfig) -> Self {
        Self {
            signal_lengths: config.signal_lengths.clone(),
            pattern_sizes: config.pattern_sizes.clone(),
            count: config.count,
        }
    }
}

impl Grid {
    /// Number of records a run produces.
    pub fn len(&self) -> usize {
        self.signal_lengths.len() * self.pattern_sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Run the whole grid.
pub fn run(grid: &Grid) -> BenchReport {
    run_with(grid, |_| {})
}

/// Run the whole grid, calling `on_record` as each record completes.
///
/// Runs are sequential so timings do not compete for cores.
pub fn run_with(grid: &Grid, mut on_record: impl FnMut(&BenchRecord)) -> BenchReport {
    let generated_at = Utc::now();
    let mut results = Vec::with_capacity(grid.len());

    for size in &grid.pattern_sizes {
        for &signal_length in &grid.signal_lengths {
            let workload = generate::worst_case(signal_length, *size);
            let record = measure(&workload, grid.count);
            tracing::debug!(
                pattern = %size,
                signal_length,
                ms = record.execution_time_ms,
                result = record.result,
                "bench record"
            );
            on_record(&record);
            results.push(record);
        }
    }

    BenchReport {
        generated_at,
        results,
    }
}

/// Time one decision on `workload`.
pub fn measure(workload: &Workload, count: bool) -> BenchRecord {
    let start = Instant::now();
    let result = decide(&workload.signal, &workload.pattern_x, &workload.pattern_y);
    let execution_time_ms = start.elapsed().as_secs_f64() * 1000.0;

    let comparisons = count.then(|| {
        count_comparisons(&workload.signal, &workload.pattern_x, &workload.pattern_y)
    });

    BenchRecord {
        pattern_x_length: workload.pattern_x.len(),
        pattern_y_length: workload.pattern_y.len(),
        signal_length: workload.signal.len(),
        execution_time_ms,
        result,
        comparisons,
        pattern_x: workload.pattern_x.clone(),
        pattern_y: workload.pattern_y.clone(),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
