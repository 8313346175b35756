// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::cursor::Cursor;

/// A pair of cursors, one into pattern X and one into pattern Y.
///
/// States compare by value, which is what lets the frontier merge branches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct State {
    pub x: Cursor,
    pub y: Cursor,
}

impl State {
    /// Both cursors at position 0 with no completed cycle.
    pub const INITIAL: State = State {
        x: Cursor::START,
        y: Cursor::START,
    };

    /// Both patterns have completed at least one full cycle.
    pub fn is_accepting(self) -> bool {
        self.x.is_completed() && self.y.is_completed()
    }
}
