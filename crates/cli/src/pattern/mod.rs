// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Binary patterns and the symbol validator.
//!
//! A pattern is a non-empty string over the two symbols `0` and `1`. Anything
//! else is not a pattern, and callers treat that as an ordinary negative result.

use std::fmt;

pub mod period;

pub use period::minimal_period;

/// The two symbols a pattern may contain.
pub const SYMBOLS: [u8; 2] = [b'0', b'1'];

/// Returns true if `s` is non-empty and contains only `0` and `1`.
pub fn is_binary(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| SYMBOLS.contains(&b))
}

/// A validated, immutable binary pattern.
///
/// Index arithmetic on a pattern is cyclic: callers wrap positions modulo
/// [`Pattern::len`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    symbols: Box<[u8]>,
}

impl Pattern {
    /// Validate `s` as a pattern. Returns `None` for empty or non-binary input.
    pub fn parse(s: &str) -> Option<Self> {
        if !is_binary(s) {
            return None;
        }
        Some(Self {
            symbols: s.as_bytes().into(),
        })
    }

    /// Number of symbols in one cycle. Never zero.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; patterns are non-empty by construction.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol at `position`, which must be less than [`Pattern::len`].
    pub fn symbol(&self, position: usize) -> u8 {
        self.symbols[position]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.symbols
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Validated patterns are ASCII.
        f.write_str(&String::from_utf8_lossy(&self.symbols))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
