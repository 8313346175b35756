// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::Serialize;

/// Observer for the work done by the stepper and decider.
///
/// Every hook defaults to a no-op, and `()` implements the trait, so the
/// uninstrumented path carries no bookkeeping.
pub trait Probe {
    /// One symbol compared against one pattern's expected symbol.
    fn comparison(&mut self) {}

    /// A new start offset is about to be scanned.
    fn offset(&mut self, _offset: usize) {}

    /// A frontier of `_len` states was produced.
    fn frontier(&mut self, _len: usize) {}
}

impl Probe for () {}

/// Counting probe: comparisons, offsets tried, and the largest frontier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub comparisons: u64,
    pub offsets: usize,
    pub peak_frontier: usize,
}

impl Probe for Stats {
    fn comparison(&mut self) {
        self.comparisons += 1;
    }

    fn offset(&mut self, _offset: usize) {
        self.offsets += 1;
    }

    fn frontier(&mut self, len: usize) {
        self.peak_frontier = self.peak_frontier.max(len);
    }
}
