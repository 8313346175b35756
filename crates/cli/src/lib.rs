// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Detects whether a binary signal contains an interleaving of two cyclic
//! binary patterns in which both complete at least one full cycle.

pub mod automaton;
pub mod bench;
pub mod cli;
pub mod color;
pub mod config;
pub mod count;
pub mod cursor;
pub mod decide;
pub mod discovery;
pub mod error;
pub mod history;
pub mod output;
pub mod pattern;
pub mod verbose;

pub use automaton::{Frontier, Probe, State, Stats, Stepper};
pub use cli::{BenchArgs, CheckArgs, Cli, Command, OutputFormat, PeriodArgs, SessionArgs};
pub use count::{Analysis, analyze, count_comparisons};
pub use cursor::Cursor;
pub use decide::{Match, Untangler, decide, find_match, find_match_parallel};
pub use error::{Error, ExitCode, Result};
pub use pattern::{Pattern, is_binary, minimal_period};
