// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed).

use std::io::Write;

use serde::Serialize;

use super::Decision;
use crate::bench::BenchReport;
use crate::bench::analysis::GrowthStep;

/// Bench report with its growth analysis.
#[derive(Debug, Serialize)]
struct ReportOutput<'a> {
    #[serde(flatten)]
    report: &'a BenchReport,
    #[serde(skip_serializing_if = "no_growth")]
    growth: &'a [GrowthStep],
}

fn no_growth(growth: &&[GrowthStep]) -> bool {
    growth.is_empty()
}

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write one decision as a single-line object.
    pub fn write_decision(&mut self, decision: &Decision) -> std::io::Result<()> {
        let json = serde_json::to_string(decision).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }

    /// Write a bench report, pretty-printed.
    pub fn write_report(
        &mut self,
        report: &BenchReport,
        growth: &[GrowthStep],
    ) -> std::io::Result<()> {
        let output = ReportOutput { report, growth };
        let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
