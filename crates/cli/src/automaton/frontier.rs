// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::State;
use crate::pattern::Pattern;

/// Deduplicated set of states reachable after one signal prefix.
///
/// Membership is tracked in a dense table with one slot per possible state
/// (`position` and `completed` for each cursor), so inserts are O(1) and the
/// table never exceeds `4 * |X| * |Y|` slots. Iteration follows insertion
/// order.
#[derive(Debug, Clone)]
pub struct Frontier {
    states: Vec<State>,
    seen: Vec<bool>,
    y_len: usize,
    accepting: bool,
}

impl Frontier {
    /// Empty frontier sized for patterns `x` and `y`.
    pub fn new(x: &Pattern, y: &Pattern) -> Self {
        Self {
            states: Vec::new(),
            seen: vec![false; 4 * x.len() * y.len()],
            y_len: y.len(),
            accepting: false,
        }
    }

    /// Frontier holding only [`State::INITIAL`].
    pub fn initial(x: &Pattern, y: &Pattern) -> Self {
        let mut frontier = Self::new(x, y);
        frontier.insert(State::INITIAL);
        frontier
    }

    /// Add `state`. Returns false if it was already present.
    pub fn insert(&mut self, state: State) -> bool {
        let index = slot(state, self.y_len);
        if self.seen[index] {
            return false;
        }
        self.seen[index] = true;
        self.accepting |= state.is_accepting();
        self.states.push(state);
        true
    }

    pub fn contains(&self, state: State) -> bool {
        self.seen[slot(state, self.y_len)]
    }

    /// Remove every state, keeping the allocation.
    pub fn clear(&mut self) {
        for state in self.states.drain(..) {
            self.seen[slot(state, self.y_len)] = false;
        }
        self.accepting = false;
    }

    /// Reset to the singleton initial frontier.
    pub fn reset(&mut self) {
        self.clear();
        self.insert(State::INITIAL);
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Whether any state satisfies the accepting condition.
    pub fn has_accepting(&self) -> bool {
        self.accepting
    }

    pub fn iter(&self) -> impl Iterator<Item = State> + '_ {
        self.states.iter().copied()
    }
}

/// Dense index of `state` in a table sized `4 * |X| * |Y|`.
fn slot(state: State, y_len: usize) -> usize {
    let x = state.x.position() * 2 + usize::from(state.x.is_completed());
    let y = state.y.position() * 2 + usize::from(state.y.is_completed());
    x * 2 * y_len + y
}

#[cfg(test)]
#[path = "frontier_tests.rs"]
mod tests;
