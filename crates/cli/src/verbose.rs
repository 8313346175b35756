// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verbose output logger for diagnostic information.
//!
//! Writes `[verbose]` prefixed lines to stderr. Enabled with `--verbose`
//! or `UNTANGLE_DEBUG=1`.

use crate::automaton::Stats;

/// Verbose output logger. Writes to stderr with a `[verbose]` prefix.
/// All output is conditional on verbose mode being enabled.
pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: enabled || debug_env(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Print a verbose line to stderr.
    pub fn log(&self, msg: &str) {
        if self.enabled {
            eprintln!("[verbose] {}", msg);
        }
    }

    /// Print a verbose section header.
    pub fn section(&self, title: &str) {
        if self.enabled {
            eprintln!("[verbose] === {} ===", title);
        }
    }

    /// Print scan statistics.
    pub fn stats(&self, stats: &Stats) {
        for line in stats_lines(stats) {
            self.log(&line);
        }
    }
}

/// Scan statistics as unprefixed diagnostic lines.
pub fn stats_lines(stats: &Stats) -> [String; 3] {
    [
        format!("offsets tried: {}", stats.offsets),
        format!("comparisons: {}", stats.comparisons),
        format!("peak frontier: {}", stats.peak_frontier),
    ]
}

fn debug_env() -> bool {
    std::env::var("UNTANGLE_DEBUG").is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

#[cfg(test)]
#[path = "verbose_tests.rs"]
mod tests;
