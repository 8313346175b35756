// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Comparison counter for performance characterization.

use serde::Serialize;

use crate::automaton::Stats;
use crate::decide::{Match, find_match_with};

/// Decision outcome together with the work it took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Analysis {
    #[serde(rename = "match")]
    pub matched: Option<Match>,
    #[serde(flatten)]
    pub stats: Stats,
}

impl Analysis {
    pub fn is_interleaving(&self) -> bool {
        self.matched.is_some()
    }
}

/// Run the decider with a counting probe.
///
/// Uses the same traversal as [`crate::decide`], so the outcome always agrees.
pub fn analyze(signal: &str, x: &str, y: &str) -> Analysis {
    let mut stats = Stats::default();
    let matched = find_match_with(signal, x, y, &mut stats);
    Analysis { matched, stats }
}

/// Number of symbol comparisons against either pattern.
///
/// Each state stepped costs two comparisons, one per pattern. Inputs that are
/// rejected before scanning report zero.
pub fn count_comparisons(signal: &str, x: &str, y: &str) -> u64 {
    analyze(signal, x, y).stats.comparisons
}

#[cfg(test)]
#[path = "count_tests.rs"]
mod tests;
