// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Where the config comes from.
//!
//! An explicit `-C` path wins. Otherwise the nearest untangle.toml between the
//! working directory and the enclosing git root is used, and with neither the
//! built-in defaults apply.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::{self, Config};
use crate::error::{Error, Result};

/// Name of the config file searched for.
pub const CONFIG_FILE_NAME: &str = "untangle.toml";

/// Origin of the active configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given with `-C`/`--config` or `UNTANGLE_CONFIG`.
    Explicit(PathBuf),
    /// Found by walking up from the working directory.
    Discovered(PathBuf),
    /// No file; built-in defaults.
    Defaults,
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Explicit(path) | ConfigSource::Discovered(path) => Some(path),
            ConfigSource::Defaults => None,
        }
    }

    /// Read and validate the config, warning on unknown keys.
    pub fn load(&self) -> Result<Config> {
        match self.path() {
            Some(path) => config::load_with_warnings(path),
            None => Ok(Config::default()),
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Explicit(path) => write!(f, "{} (explicit)", path.display()),
            ConfigSource::Discovered(path) => write!(f, "{} (discovered)", path.display()),
            ConfigSource::Defaults => f.write_str("built-in defaults"),
        }
    }
}

/// Nearest untangle.toml in `start_dir` or its ancestors, not above the git root.
///
/// Directories named untangle.toml are skipped.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

/// Decide the config source. Relative explicit paths are taken from `cwd`.
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<ConfigSource> {
    let Some(path) = explicit else {
        return Ok(find_config(cwd).map_or(ConfigSource::Defaults, ConfigSource::Discovered));
    };

    let path = cwd.join(path);
    if path.is_file() {
        Ok(ConfigSource::Explicit(path))
    } else {
        Err(Error::Config {
            message: format!("config file not found: {}", path.display()),
            path: Some(path),
        })
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
