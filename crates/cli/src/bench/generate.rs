// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Synthetic workloads.

use super::PatternSize;

/// Signal and patterns for one benchmark run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    pub signal: String,
    pub pattern_x: String,
    pub pattern_y: String,
}

/// Workload that keeps many hypotheses alive.
///
/// X alternates `0101...`; Y is X with its last bit flipped, so both share
/// every symbol but the last. The signal repeats X's shared prefix followed by
/// a bit that alternates between X's and Y's last bit. Y takes X's length; the
/// requested `size.y` is not used.
pub fn worst_case(signal_len: usize, size: PatternSize) -> Workload {
    if size.x == 0 {
        return Workload {
            signal: String::new(),
            pattern_x: String::new(),
            pattern_y: String::new(),
        };
    }

    let pattern_x: String = (0..size.x)
        .map(|i| if i % 2 == 0 { '0' } else { '1' })
        .collect();
    let prefix = &pattern_x[..size.x - 1];
    let x_last = if size.x % 2 == 1 { '0' } else { '1' };
    let y_last = flip(x_last);
    let pattern_y = format!("{prefix}{y_last}");

    let segments = signal_len / size.x + 1;
    let mut signal = String::with_capacity(segments * size.x);
    for i in 0..segments {
        signal.push_str(prefix);
        signal.push(if i % 2 == 0 { x_last } else { y_last });
    }
    signal.truncate(signal_len);

    Workload {
        signal,
        pattern_x,
        pattern_y,
    }
}

/// Deterministic interleaving of `x` and `y` of length `len`.
///
/// Position `i` takes the next symbol of X when `i` is even and not a multiple
/// of 3, and the next symbol of Y otherwise.
pub fn interleaved(x: &str, y: &str, len: usize) -> String {
    let (x, y) = (x.as_bytes(), y.as_bytes());
    if x.is_empty() || y.is_empty() {
        return String::new();
    }

    let (mut xi, mut yi) = (0, 0);
    (0..len)
        .map(|i| {
            let symbol = if i % 2 == 0 && i % 3 != 0 {
                xi += 1;
                x[(xi - 1) % x.len()]
            } else {
                yi += 1;
                y[(yi - 1) % y.len()]
            };
            char::from(symbol)
        })
        .collect()
}

fn flip(bit: char) -> char {
    if bit == '0' { '1' } else { '0' }
}

#[cfg(test)]
#[path = "generate_tests.rs"]
mod tests;
