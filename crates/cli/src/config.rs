// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles untangle.toml parsing with version validation and unknown key warnings.

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;

use crate::bench::PatternSize;
use crate::error::{Error, Result};

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Full configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Benchmark grid configuration.
    #[serde(default)]
    pub bench: BenchConfig,

    /// Interactive session configuration.
    #[serde(default)]
    pub session: SessionConfig,
}

/// Benchmark grid: every pattern size is run against every signal length.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BenchConfig {
    /// Signal lengths (default: 1000, 5000, 10000, 20000, 50000).
    #[serde(default = "BenchConfig::default_signal_lengths")]
    pub signal_lengths: Vec<usize>,

    /// Pattern sizes as `[x, y]` pairs (default: 4x4, 8x8, 16x16, 32x32).
    #[serde(default = "BenchConfig::default_pattern_sizes")]
    pub pattern_sizes: Vec<PatternSize>,

    /// Also record comparison counts.
    #[serde(default)]
    pub count: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            signal_lengths: Self::default_signal_lengths(),
            pattern_sizes: Self::default_pattern_sizes(),
            count: false,
        }
    }
}

impl BenchConfig {
    fn default_signal_lengths() -> Vec<usize> {
        vec![1000, 5000, 10000, 20000, 50000]
    }

    fn default_pattern_sizes() -> Vec<PatternSize> {
        [4, 8, 16, 32]
            .into_iter()
            .map(|n| PatternSize { x: n, y: n })
            .collect()
    }
}

/// Session configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SessionConfig {
    /// Number of past queries kept in history (default: 10).
    #[serde(default = "SessionConfig::default_history")]
    pub history: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history: Self::default_history(),
        }
    }
}

impl SessionConfig {
    fn default_history() -> usize {
        10
    }
}

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "bench", "session"];

/// Known bench keys in the config.
const KNOWN_BENCH_KEYS: &[&str] = &["signal_lengths", "pattern_sizes", "count"];

/// Known session keys in the config.
const KNOWN_SESSION_KEYS: &[&str] = &["history"];

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_with_warnings(&content, path)
}

/// Parse config from string content.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let config_error = |message: String| Error::Config {
        message,
        path: Some(path.to_path_buf()),
    };

    // First check version
    let version_check: VersionOnly =
        toml::from_str(content).map_err(|e| config_error(e.to_string()))?;

    let version = version_check
        .version
        .ok_or_else(|| config_error("missing required field: version".to_string()))?;

    if version != SUPPORTED_VERSION {
        return Err(config_error(format!(
            "unsupported config version {} (supported: {})\n  Upgrade untangle to use this config.",
            version, SUPPORTED_VERSION
        )));
    }

    let config: Config = toml::from_str(content).map_err(|e| config_error(e.to_string()))?;
    validate(&config).map_err(config_error)?;
    Ok(config)
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let config = parse(content, path)?;
    for key in unknown_keys(content) {
        warn_unknown_key(path, &key);
    }
    Ok(config)
}

/// Dotted names of keys this version does not recognize.
pub fn unknown_keys(content: &str) -> BTreeSet<String> {
    let mut unknown = BTreeSet::new();
    let Ok(table) = content.parse::<toml::Table>() else {
        return unknown;
    };

    for (key, value) in &table {
        let known_children = match key.as_str() {
            "bench" => KNOWN_BENCH_KEYS,
            "session" => KNOWN_SESSION_KEYS,
            _ => {
                if !KNOWN_KEYS.contains(&key.as_str()) {
                    unknown.insert(key.clone());
                }
                continue;
            }
        };
        if let toml::Value::Table(section) = value {
            for child in section.keys() {
                if !known_children.contains(&child.as_str()) {
                    unknown.insert(format!("{}.{}", key, child));
                }
            }
        }
    }

    unknown
}

fn validate(config: &Config) -> std::result::Result<(), String> {
    if config.bench.signal_lengths.contains(&0) {
        return Err("bench.signal_lengths: lengths must be at least 1".to_string());
    }
    if let Some(size) = config
        .bench
        .pattern_sizes
        .iter()
        .find(|s| s.x == 0 || s.y == 0)
    {
        return Err(format!(
            "bench.pattern_sizes: {} has an empty pattern",
            size
        ));
    }
    if config.session.history == 0 {
        return Err("session.history: must keep at least 1 entry".to_string());
    }
    Ok(())
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "untangle: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
