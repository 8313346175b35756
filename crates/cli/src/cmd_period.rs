// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Period command implementation.

use untangle::cli::PeriodArgs;
use untangle::color::resolve_color;
use untangle::error::{Error, ExitCode};
use untangle::output::text::TextFormatter;
use untangle::pattern::{is_binary, minimal_period};

/// Run the period command.
pub fn run(args: &PeriodArgs) -> anyhow::Result<ExitCode> {
    if !is_binary(&args.value) {
        return Err(Error::Argument(format!(
            "'{}' is not a non-empty string of 0s and 1s",
            args.value
        ))
        .into());
    }

    let period = minimal_period(args.value.as_bytes());
    tracing::debug!(period, len = args.value.len(), "minimal period");

    let mut formatter = TextFormatter::stdout(resolve_color());
    formatter.write_period(&args.value, period)?;
    formatter.flush()?;
    Ok(ExitCode::Success)
}
