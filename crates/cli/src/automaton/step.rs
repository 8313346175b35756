// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::{Frontier, Probe, State};
use crate::pattern::Pattern;

/// Advances a frontier by one input symbol.
///
/// For each state, the symbol may be attributed to X, to Y, to both as two
/// separate successors, or to neither, in which case that hypothesis dies.
#[derive(Debug, Clone, Copy)]
pub struct Stepper<'p> {
    x: &'p Pattern,
    y: &'p Pattern,
}

impl<'p> Stepper<'p> {
    pub fn new(x: &'p Pattern, y: &'p Pattern) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> &'p Pattern {
        self.x
    }

    pub fn y(&self) -> &'p Pattern {
        self.y
    }

    /// Successor frontier of `frontier` after reading `symbol`.
    pub fn step(&self, frontier: &Frontier, symbol: u8) -> Frontier {
        let mut next = Frontier::new(self.x, self.y);
        self.step_into(frontier, symbol, &mut next, &mut ());
        next
    }

    /// Like [`Stepper::step`], but writes into a reusable `into` buffer.
    ///
    /// `into` is cleared first and must have been built for the same patterns.
    pub fn step_into<P: Probe>(
        &self,
        from: &Frontier,
        symbol: u8,
        into: &mut Frontier,
        probe: &mut P,
    ) {
        into.clear();
        for state in from.iter() {
            probe.comparison();
            if symbol == state.x.expected(self.x) {
                into.insert(State {
                    x: state.x.advance(self.x),
                    y: state.y,
                });
            }
            probe.comparison();
            if symbol == state.y.expected(self.y) {
                into.insert(State {
                    x: state.x,
                    y: state.y.advance(self.y),
                });
            }
        }
        probe.frontier(into.len());
    }
}

#[cfg(test)]
#[path = "step_tests.rs"]
mod tests;
