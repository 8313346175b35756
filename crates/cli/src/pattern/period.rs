// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Minimal period of a string.

/// Smallest `p` that divides `s.len()` such that `s` is `s[..p]` repeated.
///
/// Returns `s.len()` when no shorter period exists, and 0 for an empty slice.
pub fn minimal_period(s: &[u8]) -> usize {
    let n = s.len();
    (1..=n / 2)
        .filter(|p| n % p == 0)
        .find(|&p| (p..n).all(|j| s[j] == s[j % p]))
        .unwrap_or(n)
}

#[cfg(test)]
#[path = "period_tests.rs"]
mod tests;
