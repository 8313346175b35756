// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bench command implementation.

use std::path::Path;

use untangle::bench::analysis::growth;
use untangle::bench::{self, BenchReport, Grid};
use untangle::cli::{BenchArgs, Cli, OutputFormat};
use untangle::color::resolve_color;
use untangle::error::{Error, ExitCode};
use untangle::output::json::JsonFormatter;
use untangle::output::text::TextFormatter;

use crate::settings;

/// Run the bench command.
pub fn run(cli: &Cli, args: &BenchArgs) -> anyhow::Result<ExitCode> {
    let config = settings::load_config(cli)?;

    // CLI flags override config
    let mut grid = Grid::from(&config.bench);
    if !args.signal_lengths.is_empty() {
        if args.signal_lengths.contains(&0) {
            return Err(
                Error::Argument("--signal-lengths: lengths must be at least 1".to_string()).into(),
            );
        }
        grid.signal_lengths = args.signal_lengths.clone();
    }
    if !args.pattern_sizes.is_empty() {
        grid.pattern_sizes = args.pattern_sizes.clone();
    }
    grid.count |= args.count;

    tracing::debug!(
        records = grid.len(),
        signal_lengths = ?grid.signal_lengths,
        count = grid.count,
        "running bench grid"
    );

    let report = match args.output {
        OutputFormat::Text => run_text(&grid)?,
        OutputFormat::Json => {
            let report = bench::run(&grid);
            let mut formatter = JsonFormatter::new(std::io::stdout().lock());
            formatter.write_report(&report, &growth(&report.results))?;
            report
        }
    };

    if let Some(path) = &args.save {
        save(path, &report)?;
        if args.output == OutputFormat::Text {
            println!("\nResults saved to {}", path.display());
        }
    }

    Ok(ExitCode::Success)
}

/// Stream table rows as records complete, then the growth table.
fn run_text(grid: &Grid) -> anyhow::Result<BenchReport> {
    let mut formatter = TextFormatter::stdout(resolve_color());
    formatter.write_bench_header(grid.count)?;
    formatter.flush()?;

    let mut write_error = None;
    let report = bench::run_with(grid, |record| {
        if write_error.is_some() {
            return;
        }
        if let Err(e) = formatter
            .write_bench_record(record)
            .and_then(|()| formatter.flush())
        {
            write_error = Some(e);
        }
    });
    if let Some(e) = write_error {
        return Err(e.into());
    }

    formatter.write_growth(&growth(&report.results))?;
    formatter.flush()?;
    Ok(report)
}

fn save(path: &Path, report: &BenchReport) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json + "\n").map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("saved bench report to {}", path.display());
    Ok(())
}
