// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! Decision format:
//! ```text
//! SUCCESS: '<signal>' IS an interweaving of patterns '<x>' and '<y>'
//!   region: <start>..<end>
//! FAILURE: '<signal>' is NOT an interweaving of patterns '<x>' and '<y>'
//! ```

use termcolor::{ColorChoice, StandardStream, WriteColor};

use super::Decision;
use crate::bench::BenchRecord;
use crate::bench::analysis::GrowthStep;
use crate::color::scheme;
use crate::history::History;

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    out: W,
}

impl TextFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice) -> Self {
        Self::new(StandardStream::stdout(color_choice))
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write one decision.
    pub fn write_decision(&mut self, decision: &Decision) -> std::io::Result<()> {
        if decision.result {
            self.out.set_color(&scheme::success())?;
            write!(self.out, "SUCCESS")?;
        } else {
            self.out.set_color(&scheme::failure())?;
            write!(self.out, "FAILURE")?;
        }
        self.out.reset()?;

        let verb = if decision.result { "IS" } else { "is NOT" };
        writeln!(
            self.out,
            ": '{}' {} an interweaving of patterns '{}' and '{}'",
            decision.signal, verb, decision.pattern_x, decision.pattern_y
        )?;

        if let Some(m) = decision.matched {
            writeln!(self.out, "  region: {}..{}", m.start, m.end)?;
        }
        if let Some(comparisons) = decision.comparisons {
            writeln!(self.out, "  comparisons: {}", comparisons)?;
        }
        Ok(())
    }

    /// Write the bench table header.
    pub fn write_bench_header(&mut self, with_comparisons: bool) -> std::io::Result<()> {
        self.out.set_color(&scheme::header())?;
        write!(
            self.out,
            "{:<15} | {:<10} | {:<10} | {:<12} | {:<8}",
            "Signal Length", "Pattern X", "Pattern Y", "Time (ms)", "Result"
        )?;
        if with_comparisons {
            write!(self.out, " | Comparisons")?;
        }
        self.out.reset()?;
        writeln!(self.out)?;
        let width = if with_comparisons { 79 } else { 65 };
        writeln!(self.out, "{}", "-".repeat(width))
    }

    /// Write one bench table row.
    pub fn write_bench_record(&mut self, record: &BenchRecord) -> std::io::Result<()> {
        write!(
            self.out,
            "{:<15} | {:<10} | {:<10} | {:<12.2} | {:<8}",
            record.signal_length,
            record.pattern_x_length,
            record.pattern_y_length,
            record.execution_time_ms,
            record.result
        )?;
        if let Some(comparisons) = record.comparisons {
            write!(self.out, " | {}", comparisons)?;
        }
        writeln!(self.out)
    }

    /// Write the growth analysis table.
    pub fn write_growth(&mut self, steps: &[GrowthStep]) -> std::io::Result<()> {
        if steps.is_empty() {
            return Ok(());
        }
        writeln!(self.out)?;
        self.out.set_color(&scheme::header())?;
        write!(
            self.out,
            "Pattern Size | Signal Growth | Time Growth | Expected Ratio | Observed Exponent"
        )?;
        self.out.reset()?;
        writeln!(self.out)?;
        writeln!(self.out, "{}", "-".repeat(75))?;
        for step in steps {
            writeln!(
                self.out,
                "{}x{} | {} → {} ({:.1}x) | {:.2}ms → {:.2}ms ({:.1}x) | {:.1}x | O(s^{:.2})",
                step.pattern_x_length,
                step.pattern_y_length,
                step.from_length,
                step.to_length,
                step.signal_ratio,
                step.from_ms,
                step.to_ms,
                step.time_ratio,
                step.expected_ratio,
                step.exponent
            )?;
        }
        Ok(())
    }

    /// Write past queries, most recent first.
    pub fn write_history(&mut self, history: &History) -> std::io::Result<()> {
        self.out.set_color(&scheme::header())?;
        write!(self.out, "History")?;
        self.out.reset()?;
        writeln!(self.out, " ({}/{}):", history.len(), history.capacity())?;
        for query in history.recent() {
            writeln!(self.out, "  {}", query)?;
        }
        Ok(())
    }

    /// Write a minimal period result.
    pub fn write_period(&mut self, value: &str, period: usize) -> std::io::Result<()> {
        self.out.set_color(&scheme::literal())?;
        write!(self.out, "{}", &value[..period])?;
        self.out.reset()?;
        writeln!(self.out, " (period {} of {})", period, value.len())
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
