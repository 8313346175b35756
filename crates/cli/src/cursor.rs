// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Read position within one cyclically repeating pattern.

use crate::pattern::Pattern;

/// How far into one repeating pattern a hypothesis has read.
///
/// `completed` flips to true the first time the position wraps back to 0 and
/// never flips back. Cursors are plain values: [`Cursor::advance`] returns a
/// new cursor and leaves the original untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cursor {
    position: usize,
    completed: bool,
}

impl Cursor {
    /// Position 0, no cycle completed.
    pub const START: Cursor = Cursor {
        position: 0,
        completed: false,
    };

    /// Index of the next expected symbol.
    pub fn position(self) -> usize {
        self.position
    }

    /// Whether the pattern has been walked through at least once.
    pub fn is_completed(self) -> bool {
        self.completed
    }

    /// The symbol this cursor expects next in `pattern`.
    pub fn expected(self, pattern: &Pattern) -> u8 {
        pattern.symbol(self.position)
    }

    /// Cursor after consuming the expected symbol of `pattern`.
    #[must_use]
    pub fn advance(self, pattern: &Pattern) -> Cursor {
        let position = (self.position + 1) % pattern.len();
        Cursor {
            position,
            completed: self.completed || position == 0,
        }
    }
}

#[cfg(test)]
#[path = "cursor_tests.rs"]
mod tests;
