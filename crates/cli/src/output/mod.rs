// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for decisions and benchmark reports.

pub mod json;
pub mod text;

use serde::Serialize;

use crate::decide::Match;

/// A decision ready to be shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub signal: String,
    pub pattern_x: String,
    pub pattern_y: String,
    pub result: bool,
    #[serde(rename = "match")]
    pub matched: Option<Match>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparisons: Option<u64>,
}

impl Decision {
    pub fn new(signal: &str, pattern_x: &str, pattern_y: &str, matched: Option<Match>) -> Self {
        Self {
            signal: signal.to_string(),
            pattern_x: pattern_x.to_string(),
            pattern_y: pattern_y.to_string(),
            result: matched.is_some(),
            matched,
            comparisons: None,
        }
    }

    pub fn with_comparisons(mut self, comparisons: u64) -> Self {
        self.comparisons = Some(comparisons);
        self
    }
}
