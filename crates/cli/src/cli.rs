// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::bench::PatternSize;

/// Detects whether a binary signal contains an interleaving of two cyclic patterns
#[derive(Parser)]
#[command(name = "untangle")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "UNTANGLE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Decide whether a signal is an interleaving of two patterns
    Check(CheckArgs),
    /// Answer queries read from stdin, keeping a short history
    Session(SessionArgs),
    /// Print the minimal period of a binary string
    Period(PeriodArgs),
    /// Time the decider over a grid of worst-case workloads
    Bench(BenchArgs),
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Signal string to analyze
    #[arg(short, long)]
    pub signal: String,

    /// First pattern to check for interweaving
    #[arg(short = 'x', long = "pattern-x", value_name = "PATTERN")]
    pub pattern_x: String,

    /// Second pattern to check for interweaving
    #[arg(short = 'y', long = "pattern-y", value_name = "PATTERN")]
    pub pattern_y: String,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Also report the number of symbol comparisons
    #[arg(long)]
    pub count: bool,

    /// Scan start offsets in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[derive(clap::Args)]
pub struct SessionArgs {
    /// Number of past queries to keep (default: 10, or session.history)
    #[arg(long, value_name = "N")]
    pub history: Option<usize>,
}

#[derive(clap::Args)]
pub struct PeriodArgs {
    /// Binary string to inspect
    #[arg(value_name = "VALUE")]
    pub value: String,
}

#[derive(clap::Args)]
pub struct BenchArgs {
    /// Signal lengths to run (comma-separated)
    #[arg(long, value_delimiter = ',', value_name = "N,..")]
    pub signal_lengths: Vec<usize>,

    /// Pattern sizes to run, as XxY (comma-separated)
    #[arg(long, value_delimiter = ',', value_name = "XxY,..")]
    pub pattern_sizes: Vec<PatternSize>,

    /// Also record comparison counts
    #[arg(long)]
    pub count: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Write the JSON report to a file
    #[arg(long, value_name = "PATH")]
    pub save: Option<PathBuf>,
}

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
