// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config resolution shared by the commands that read untangle.toml.

use untangle::cli::Cli;
use untangle::config::Config;
use untangle::discovery;

/// Load the explicit or discovered config, or defaults when there is none.
pub fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let cwd = std::env::current_dir()?;
    let source = discovery::resolve_config(cli.config.as_deref(), &cwd)?;
    tracing::debug!("config: {}", source);
    Ok(source.load()?)
}
