//! Test helpers for behavioral specifications.
//!
//! Provides high-level DSL for testing untangle CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::marker::PhantomData;
use std::path::Path;
use std::process::Command;

/// Trait for converting into a string predicate.
/// Allows passing `&str` (as contains) or any `Predicate<str>`.
pub trait IntoStrPredicate<P: Predicate<str>> {
    fn into_predicate(self) -> P;
}

impl IntoStrPredicate<predicates::str::ContainsPredicate> for &str {
    fn into_predicate(self) -> predicates::str::ContainsPredicate {
        predicates::str::contains(self)
    }
}

impl<P: Predicate<str>> IntoStrPredicate<P> for P {
    fn into_predicate(self) -> P {
        self
    }
}

/// Returns a Command configured to run the untangle binary
pub fn untangle_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("untangle"));
    cmd.env_remove("UNTANGLE_CONFIG")
        .env_remove("UNTANGLE_DEBUG")
        .env_remove("UNTANGLE_LOG");
    cmd
}

/// Create a check builder for one query
pub fn check(signal: &str, pattern_x: &str, pattern_y: &str) -> CheckBuilder<Text> {
    CheckBuilder::new(signal, pattern_x, pattern_y)
}

/// Create a session builder fed from `input`
pub fn session(input: &str) -> SessionBuilder {
    SessionBuilder {
        input: input.to_string(),
        dir: None,
        args: Vec::new(),
    }
}

/// Typestate markers for output mode
pub struct Text;
pub struct Json;

/// High-level check builder for fluent test assertions
pub struct CheckBuilder<Mode = Text> {
    args: Vec<String>,
    envs: Vec<(String, String)>,
    _mode: PhantomData<Mode>,
}

#[allow(dead_code)]
impl CheckBuilder<Text> {
    fn new(signal: &str, pattern_x: &str, pattern_y: &str) -> Self {
        Self {
            args: ["check", "-s", signal, "-x", pattern_x, "-y", pattern_y]
                .map(String::from)
                .to_vec(),
            envs: Vec::new(),
            _mode: PhantomData,
        }
    }

    pub fn json(mut self) -> CheckBuilder<Json> {
        self.args.extend(["-o".to_string(), "json".to_string()]);
        CheckBuilder {
            args: self.args,
            envs: self.envs,
            _mode: PhantomData,
        }
    }

    /// Expect an interleaving (exit 0)
    pub fn passes(self) -> RunAssert {
        run_exits(self.command(), 0)
    }

    /// Expect no interleaving (exit 1)
    pub fn fails(self) -> RunAssert {
        run_exits(self.command(), 1)
    }

    pub fn exits(self, code: i32) -> RunAssert {
        run_exits(self.command(), code)
    }
}

#[allow(dead_code)]
impl CheckBuilder<Json> {
    pub fn passes(self) -> serde_json::Value {
        parse_json(run_exits(self.command(), 0))
    }

    pub fn fails(self) -> serde_json::Value {
        parse_json(run_exits(self.command(), 1))
    }
}

#[allow(dead_code)]
impl<Mode> CheckBuilder<Mode> {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    fn command(self) -> Command {
        let mut cmd = untangle_cmd();
        cmd.args(&self.args);
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd
    }
}

/// Session builder: runs `untangle session` with the given stdin
pub struct SessionBuilder {
    input: String,
    dir: Option<std::path::PathBuf>,
    args: Vec<String>,
}

#[allow(dead_code)]
impl SessionBuilder {
    pub fn pwd(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.dir = Some(path.into());
        self
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    pub fn exits(self, code: i32) -> RunAssert {
        let mut cmd = untangle_cmd();
        cmd.arg("session").args(&self.args);
        if let Some(dir) = &self.dir {
            cmd.current_dir(dir);
        }
        let output = assert_cmd::Command::from_std(cmd)
            .write_stdin(self.input)
            .output()
            .expect("command should run");
        assert_exit(output, code)
    }

    pub fn runs(self) -> RunAssert {
        self.exits(0)
    }
}

pub fn run_exits(mut cmd: Command, code: i32) -> RunAssert {
    let output = cmd.output().expect("command should run");
    assert_exit(output, code)
}

fn assert_exit(output: std::process::Output, code: i32) -> RunAssert {
    assert_eq!(
        output.status.code(),
        Some(code),
        "expected exit code {}, got {:?}\nstdout: {}\nstderr: {}",
        code,
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    RunAssert { output }
}

fn parse_json(run: RunAssert) -> serde_json::Value {
    let stdout = run.stdout();
    serde_json::from_str(&stdout)
        .unwrap_or_else(|e| panic!("stdout should be JSON ({}):\n{}", e, stdout))
}

/// Result of a run for chaining assertions
pub struct RunAssert {
    output: std::process::Output,
}

#[allow(dead_code)]
impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Assert stdout equals expected
    pub fn stdout_eq(self, expected: &str) -> Self {
        assert_eq!(self.stdout(), expected);
        self
    }

    /// Assert stdout matches predicate.
    /// Prefer `stdout_eq` for strict matching.
    pub fn stdout_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = self.stdout();
        assert!(
            predicate.into_predicate().eval(&stdout),
            "stdout predicate failed:\n{}",
            stdout
        );
        self
    }

    /// Assert stdout does not match predicate.
    pub fn stdout_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = self.stdout();
        assert!(
            !predicate.into_predicate().eval(&stdout),
            "stdout should NOT match predicate:\n{}",
            stdout
        );
        self
    }

    /// Assert stderr matches predicate.
    pub fn stderr_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = self.stderr();
        assert!(
            predicate.into_predicate().eval(&stderr),
            "stderr predicate failed:\n{}",
            stderr
        );
        self
    }

    /// Assert stderr does not match predicate.
    pub fn stderr_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = self.stderr();
        assert!(
            !predicate.into_predicate().eval(&stderr),
            "stderr should NOT match predicate:\n{}",
            stderr
        );
        self
    }
}

// =============================================================================
// Project
// =============================================================================

/// Temporary directory that stops config discovery at its root.
///
/// `config()` adds the `version = 1` prefix.
pub struct Project {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl Project {
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write untangle.toml with `version = 1` followed by `body`
    pub fn config(&self, body: &str) {
        self.file("untangle.toml", &format!("version = 1\n{}", body));
    }

    /// Write a file relative to the project root
    pub fn file(&self, path: &str, content: &str) {
        let path = self.dir.path().join(path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }
}
