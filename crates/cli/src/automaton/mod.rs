// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Subset-construction automaton over pairs of cyclic cursors.
//!
//! A [`State`] is one hypothesis about how far each pattern has been read.
//! A [`Frontier`] is the deduplicated set of hypotheses alive after a prefix
//! of the signal, and the [`Stepper`] maps a frontier and one input symbol to
//! the next frontier. Merging equal states keeps the frontier bounded by
//! `4 * |X| * |Y|` instead of growing with every ambiguous symbol.

mod frontier;
mod probe;
mod state;
mod step;

pub use frontier::Frontier;
pub use probe::{Probe, Stats};
pub use state::State;
pub use step::Stepper;
