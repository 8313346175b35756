// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Session command implementation.
//!
//! Reads one query per line from stdin:
//! ```text
//! # comment
//! 100010101 101 0
//! history
//! ```

use std::io::BufRead;

use untangle::cli::{Cli, SessionArgs};
use untangle::color::resolve_color;
use untangle::decide::find_match;
use untangle::error::{Error, ExitCode};
use untangle::history::{History, Query};
use untangle::output::Decision;
use untangle::output::text::TextFormatter;

use crate::settings;

/// Run the session command.
pub fn run(cli: &Cli, args: &SessionArgs) -> anyhow::Result<ExitCode> {
    let config = settings::load_config(cli)?;
    let capacity = args.history.unwrap_or(config.session.history);
    if capacity == 0 {
        return Err(Error::Argument("--history must be at least 1".to_string()).into());
    }

    let mut history = History::new(capacity);
    let mut formatter = TextFormatter::stdout(resolve_color());

    for (index, line) in std::io::stdin().lock().lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line == "history" {
            formatter.write_history(&history)?;
        } else {
            match parse_query(line) {
                Ok([signal, pattern_x, pattern_y]) => {
                    let matched = find_match(signal, pattern_x, pattern_y);
                    let decision = Decision::new(signal, pattern_x, pattern_y, matched);
                    formatter.write_decision(&decision)?;
                    history.record(Query {
                        signal: decision.signal,
                        pattern_x: decision.pattern_x,
                        pattern_y: decision.pattern_y,
                        result: decision.result,
                    });
                }
                Err(message) => eprintln!("untangle: line {}: {}", index + 1, message),
            }
        }
        formatter.flush()?;
    }

    tracing::debug!(queries = history.len(), "session finished");
    Ok(ExitCode::Success)
}

fn parse_query(line: &str) -> Result<[&str; 3], String> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    match fields.as_slice() {
        &[signal, pattern_x, pattern_y] => Ok([signal, pattern_x, pattern_y]),
        fields if fields.len() < 3 => Err(
            "all fields must be filled out (expected: SIGNAL PATTERN_X PATTERN_Y)".to_string(),
        ),
        fields => Err(format!(
            "expected 3 fields (SIGNAL PATTERN_X PATTERN_Y), got {}",
            fields.len()
        )),
    }
}
