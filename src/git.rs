//! Git command runner for branch-sweep.
//!
//! Provides a safe wrapper around git commands with captured stdout/stderr
//! and structured error handling. The CLI gateway is the only caller.

use crate::error::{Result, SweepError};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Result of a git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    /// Create a new GitOutput from raw output bytes.
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    /// Returns stdout lines as a vector.
    pub fn lines(&self) -> Vec<&str> {
        if self.stdout.is_empty() {
            Vec::new()
        } else {
            self.stdout.lines().collect()
        }
    }

    /// The most useful diagnostic text: stderr if present, stdout otherwise.
    pub fn message(&self) -> &str {
        if self.stderr.is_empty() {
            &self.stdout
        } else {
            &self.stderr
        }
    }
}

/// Run a git command with the specified working directory.
///
/// # Arguments
///
/// * `cwd` - The working directory to run the command in
/// * `args` - The git command arguments (without "git" prefix)
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(SweepError::GatewayError)` - On non-zero exit code (mapped to exit code 3)
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let (code, git_output) = run_git_unchecked(cwd, args)?;

    if code == 0 {
        Ok(git_output)
    } else {
        Err(SweepError::GatewayError(format!(
            "git {} failed (exit code {}): {}",
            args.first().unwrap_or(&""),
            code,
            git_output.message()
        )))
    }
}

/// Run a git command and hand back its exit code instead of failing on non-zero.
///
/// Used for plumbing commands that answer yes/no through their exit status
/// (`merge-base --is-ancestor`, `symbolic-ref --quiet`). Only a failure to
/// spawn git at all is an error. A process killed by a signal reports `-1`.
pub fn run_git_unchecked<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<(i32, GitOutput)> {
    let cwd = cwd.as_ref();

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            SweepError::GatewayError(format!(
                "failed to execute git {}: {}",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    Ok((
        output.status.code().unwrap_or(-1),
        GitOutput::from_output(&output),
    ))
}

/// Get the repository root directory using `git rev-parse --show-toplevel`.
///
/// # Returns
///
/// * `Ok(PathBuf)` - The absolute path to the repository root
/// * `Err(SweepError::UserError)` - If not inside a git repository (exit code 1)
pub fn get_repo_root<P: AsRef<Path>>(cwd: P) -> Result<PathBuf> {
    let cwd = cwd.as_ref();

    let (code, output) = run_git_unchecked(cwd, &["rev-parse", "--show-toplevel"])
        .map_err(|e| SweepError::UserError(format!("{} (is git installed?)", e)))?;

    if code == 0 {
        return Ok(PathBuf::from(&output.stdout));
    }

    // "not a git repository" is a clean user error (exit 1), not a git error (exit 3)
    if output.stderr.contains("not a git repository") || output.stderr.contains("fatal:") {
        Err(SweepError::UserError(format!(
            "not inside a git repository: {}",
            cwd.display()
        )))
    } else {
        Err(SweepError::UserError(format!(
            "git command failed: {}",
            output.message()
        )))
    }
}
