// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded log of past queries, owned by an interactive session.

use std::collections::VecDeque;
use std::fmt;

use serde::Serialize;

/// One answered query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    pub signal: String,
    pub pattern_x: String,
    pub pattern_y: String,
    pub result: bool,
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.result { "match" } else { "no match" };
        write!(
            f,
            "{}: s='{}', x='{}', y='{}'",
            mark, self.signal, self.pattern_x, self.pattern_y
        )
    }
}

/// The most recent queries, oldest dropped first once `capacity` is reached.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<Query>,
    capacity: usize,
}

impl History {
    /// History holding at most `capacity` entries (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn record(&mut self, query: Query) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(query);
    }

    /// Entries from most recent to oldest.
    pub fn recent(&self) -> impl Iterator<Item = &Query> {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
