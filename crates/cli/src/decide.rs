// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Interleaving decider.
//!
//! Tries every admissible start offset in increasing order, feeding the signal
//! from that offset through the [`Stepper`] until the frontier dies or a state
//! accepts. Symbols before the start offset and after the accepting symbol are
//! ignored, so noise on either side of the matching region is tolerated.
//!
//! Worst case is O(|S|^2 * |X| * |Y|) time with O(|X| * |Y|) frontier space.

use rayon::prelude::*;
use serde::Serialize;

use crate::automaton::{Frontier, Probe, Stepper};
use crate::pattern::Pattern;

/// Region of the signal explained as an interleaving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Match {
    /// Byte offset where the region starts.
    pub start: usize,
    /// Byte offset just past the symbol that completed both patterns.
    pub end: usize,
}

impl Match {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Returns true if some region of `signal` is an interleaving of cyclic
/// repetitions of `x` and `y` in which both complete at least one cycle.
///
/// Invalid patterns and signals shorter than `|x| + |y|` yield false.
pub fn decide(signal: &str, x: &str, y: &str) -> bool {
    find_match(signal, x, y).is_some()
}

/// First accepting region, scanning start offsets in increasing order.
pub fn find_match(signal: &str, x: &str, y: &str) -> Option<Match> {
    find_match_with(signal, x, y, &mut ())
}

/// [`find_match`] reporting its work to `probe`.
pub fn find_match_with<P: Probe>(signal: &str, x: &str, y: &str, probe: &mut P) -> Option<Match> {
    let x = Pattern::parse(x)?;
    let y = Pattern::parse(y)?;
    let found = Untangler::new(&x, &y).find(signal.as_bytes(), probe);
    if let Some(m) = found {
        tracing::trace!(start = m.start, end = m.end, "accepting state reached");
    }
    found
}

/// [`find_match`] with start offsets scanned on the rayon pool.
///
/// Returns the same region as the sequential scan.
pub fn find_match_parallel(signal: &str, x: &str, y: &str) -> Option<Match> {
    let x = Pattern::parse(x)?;
    let y = Pattern::parse(y)?;
    let signal = signal.as_bytes();
    let last = signal.len().checked_sub(x.len() + y.len())?;

    (0..=last)
        .into_par_iter()
        .map_init(
            || Untangler::new(&x, &y),
            |untangler, start| {
                untangler
                    .scan_from(signal, start, &mut ())
                    .map(|end| Match { start, end })
            },
        )
        .find_first(Option::is_some)
        .flatten()
}

/// Reusable scanning state for one pair of patterns.
///
/// Holds two frontier buffers that are swapped after every symbol, so a whole
/// decision allocates only once.
#[derive(Debug)]
pub struct Untangler<'p> {
    stepper: Stepper<'p>,
    current: Frontier,
    next: Frontier,
}

impl<'p> Untangler<'p> {
    pub fn new(x: &'p Pattern, y: &'p Pattern) -> Self {
        Self {
            stepper: Stepper::new(x, y),
            current: Frontier::new(x, y),
            next: Frontier::new(x, y),
        }
    }

    /// Shortest signal that can hold one cycle of each pattern.
    pub fn min_len(&self) -> usize {
        self.stepper.x().len() + self.stepper.y().len()
    }

    /// Scan every admissible start offset of `signal`.
    pub fn find<P: Probe>(&mut self, signal: &[u8], probe: &mut P) -> Option<Match> {
        let last = signal.len().checked_sub(self.min_len())?;
        (0..=last).find_map(|start| {
            self.scan_from(signal, start, probe)
                .map(|end| Match { start, end })
        })
    }

    /// Scan from `start`, returning the end of the first accepting prefix.
    pub fn scan_from<P: Probe>(
        &mut self,
        signal: &[u8],
        start: usize,
        probe: &mut P,
    ) -> Option<usize> {
        probe.offset(start);
        self.current.reset();
        for (index, &symbol) in signal.iter().enumerate().skip(start) {
            self.stepper
                .step_into(&self.current, symbol, &mut self.next, probe);
            std::mem::swap(&mut self.current, &mut self.next);
            if self.current.is_empty() {
                return None;
            }
            if self.current.has_accepting() {
                return Some(index + 1);
            }
        }
        None
    }
}

#[cfg(test)]
#[path = "decide_tests.rs"]
mod tests;
