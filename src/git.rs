//! Git command runner for langcheck.
//!
//! Provides a wrapper around git commands with captured stdout/stderr.
//! Every failure here is a resolution failure: the run cannot know which
//! files to check, so it stops with exit code 2.

use crate::error::{PolicyError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command, without trailing line breaks.
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout)
                .trim_end_matches(['\n', '\r'])
                .to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    /// Returns true if stdout is empty.
    pub fn is_empty(&self) -> bool {
        self.stdout.is_empty()
    }

    /// Returns non-blank stdout lines. Only line terminators are removed;
    /// paths may legitimately start or end with spaces.
    pub fn lines(&self) -> Vec<&str> {
        self.stdout
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .filter(|l| !l.is_empty())
            .collect()
    }
}

/// Run a git command with the specified working directory.
///
/// Paths are printed verbatim (`core.quotePath=false`) so names with
/// non-ASCII characters come back readable rather than octal-escaped.
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(PolicyError::ResolutionError)` - If git cannot be spawned or exits non-zero
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let cwd = cwd.as_ref();
    let subcommand = args.first().copied().unwrap_or("");

    let output = Command::new("git")
        .current_dir(cwd)
        .args(["-c", "core.quotePath=false"])
        .args(args)
        .output()
        .map_err(|e| {
            PolicyError::ResolutionError(format!(
                "failed to execute git {}: {} (is git installed?)",
                subcommand, e
            ))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if git_output.stderr.is_empty() {
            git_output.stdout.clone()
        } else {
            git_output.stderr.clone()
        };

        Err(PolicyError::ResolutionError(format!(
            "git {} failed (exit code {}): {}",
            subcommand, exit_code, error_msg
        )))
    }
}

/// Get the repository root directory using `git rev-parse --show-toplevel`.
pub fn repo_root<P: AsRef<Path>>(cwd: P) -> Result<PathBuf> {
    let output = run_git(cwd, &["rev-parse", "--show-toplevel"])?;
    Ok(PathBuf::from(&output.stdout))
}

/// List every tracked file, repository-relative.
pub fn list_tracked_files<P: AsRef<Path>>(cwd: P) -> Result<Vec<String>> {
    let output = run_git(cwd, &["ls-files", "--full-name"])?;
    Ok(output.lines().into_iter().map(String::from).collect())
}

/// List staged files whose status is Added, Copied, Modified or Renamed.
///
/// `git diff --cached --name-only` already reports repository-relative paths.
pub fn list_staged_files<P: AsRef<Path>>(cwd: P) -> Result<Vec<String>> {
    let output = run_git(
        cwd,
        &["diff", "--cached", "--name-only", "--diff-filter=ACMR"],
    )?;
    Ok(output.lines().into_iter().map(String::from).collect())
}
