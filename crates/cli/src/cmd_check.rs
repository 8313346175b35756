// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check command implementation.

use std::time::Instant;

use untangle::cli::{CheckArgs, OutputFormat};
use untangle::color::resolve_color;
use untangle::count::analyze;
use untangle::decide::{find_match, find_match_parallel};
use untangle::error::{Error, ExitCode};
use untangle::output::Decision;
use untangle::output::json::JsonFormatter;
use untangle::output::text::TextFormatter;
use untangle::pattern::is_binary;
use untangle::verbose::VerboseLogger;

/// Run the check command.
pub fn run(args: &CheckArgs) -> anyhow::Result<ExitCode> {
    if args.signal.is_empty() || args.pattern_x.is_empty() || args.pattern_y.is_empty() {
        return Err(Error::Argument("all fields must be filled out".to_string()).into());
    }

    let verbose = VerboseLogger::new(args.verbose);
    if verbose.is_enabled() {
        verbose.section("Query");
        verbose.log(&format!("signal length: {}", args.signal.len()));
        verbose.log(&format!(
            "pattern lengths: {} and {}",
            args.pattern_x.len(),
            args.pattern_y.len()
        ));
        for (name, value) in [
            ("signal", &args.signal),
            ("pattern x", &args.pattern_x),
            ("pattern y", &args.pattern_y),
        ] {
            if !is_binary(value) {
                verbose.log(&format!("{} is not binary, nothing can match", name));
            }
        }
    }

    let started = Instant::now();

    // The counting pass doubles as the decision unless the scan is parallel.
    let analysis = (args.count || verbose.is_enabled())
        .then(|| analyze(&args.signal, &args.pattern_x, &args.pattern_y));
    let matched = match (&analysis, args.parallel) {
        (_, true) => find_match_parallel(&args.signal, &args.pattern_x, &args.pattern_y),
        (Some(analysis), false) => analysis.matched,
        (None, false) => find_match(&args.signal, &args.pattern_x, &args.pattern_y),
    };

    let elapsed = started.elapsed();
    tracing::debug!(?matched, ?elapsed, parallel = args.parallel, "check finished");

    if let Some(analysis) = &analysis {
        verbose.section("Scan");
        verbose.stats(&analysis.stats);
        verbose.log(&format!("elapsed: {:.3}ms", elapsed.as_secs_f64() * 1000.0));
    }

    let mut decision = Decision::new(&args.signal, &args.pattern_x, &args.pattern_y, matched);
    if let (true, Some(analysis)) = (args.count, &analysis) {
        decision = decision.with_comparisons(analysis.stats.comparisons);
    }

    match args.output {
        OutputFormat::Text => {
            let mut formatter = TextFormatter::stdout(resolve_color());
            formatter.write_decision(&decision)?;
            formatter.flush()?;
        }
        OutputFormat::Json => {
            let mut formatter = JsonFormatter::new(std::io::stdout().lock());
            formatter.write_decision(&decision)?;
        }
    }

    Ok(if decision.result {
        ExitCode::Success
    } else {
        ExitCode::NoMatch
    })
}
