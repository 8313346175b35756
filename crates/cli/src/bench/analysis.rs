// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Growth analysis over benchmark records.
//!
//! For a fixed pattern size, if time grows as `s^n` then
//! `n = ln(time ratio) / ln(signal ratio)` between two runs.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{BenchRecord, PatternSize};

/// Growth between two consecutive signal lengths at one pattern size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthStep {
    pub pattern_x_length: usize,
    pub pattern_y_length: usize,
    pub from_length: usize,
    pub to_length: usize,
    pub from_ms: f64,
    pub to_ms: f64,
    pub signal_ratio: f64,
    pub time_ratio: f64,
    /// Time ratio a quadratic algorithm would show.
    pub expected_ratio: f64,
    /// Observed exponent of signal length.
    pub exponent: f64,
}

/// Growth steps grouped by pattern size, each group sorted by signal length.
///
/// Pairs with a non-positive time or an unchanged length are skipped.
pub fn growth(records: &[BenchRecord]) -> Vec<GrowthStep> {
    let mut groups: BTreeMap<PatternSize, Vec<&BenchRecord>> = BTreeMap::new();
    for record in records {
        let size = PatternSize {
            x: record.pattern_x_length,
            y: record.pattern_y_length,
        };
        groups.entry(size).or_default().push(record);
    }

    let mut steps = Vec::new();
    for (size, mut group) in groups {
        group.sort_by_key(|r| r.signal_length);
        for pair in group.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            if from.signal_length == to.signal_length
                || from.execution_time_ms <= 0.0
                || to.execution_time_ms <= 0.0
            {
                continue;
            }
            let signal_ratio = to.signal_length as f64 / from.signal_length as f64;
            let time_ratio = to.execution_time_ms / from.execution_time_ms;
            steps.push(GrowthStep {
                pattern_x_length: size.x,
                pattern_y_length: size.y,
                from_length: from.signal_length,
                to_length: to.signal_length,
                from_ms: from.execution_time_ms,
                to_ms: to.execution_time_ms,
                signal_ratio,
                time_ratio,
                expected_ratio: signal_ratio * signal_ratio,
                exponent: time_ratio.ln() / signal_ratio.ln(),
            });
        }
    }
    steps
}

#[cfg(test)]
#[path = "analysis_tests.rs"]
mod tests;
