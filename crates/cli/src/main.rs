// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Untangle CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use untangle::cli::{Cli, Command};
use untangle::error::ExitCode;

mod cmd_bench;
mod cmd_check;
mod cmd_period;
mod cmd_session;
mod settings;

fn init_logging() {
    let filter = EnvFilter::try_from_env("UNTANGLE_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("untangle: {}", e);
            match e.downcast_ref::<untangle::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Check(args)) => cmd_check::run(args),
        Some(Command::Session(args)) => cmd_session::run(&cli, args),
        Some(Command::Period(args)) => cmd_period::run(args),
        Some(Command::Bench(args)) => cmd_bench::run(&cli, args),
    }
}
