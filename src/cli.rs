//! CLI argument parsing for langcheck.
//!
//! Uses clap derive macros for declarative argument definitions.

use crate::check::CheckOptions;
use crate::config::DEFAULT_CONFIG_FILE;
use crate::report::ReportFormat;
use crate::targets::TargetRequest;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Langcheck: language and locale policy checker.
///
/// Code and config files must not contain Cyrillic unless baselined in
/// language-policy.config.json. Markdown under docs/ must declare the
/// language implied by its directory in its front matter.
///
/// Exit codes: 0 ok, 1 policy errors, 2 file listing failed.
#[derive(Parser, Debug)]
#[command(name = "langcheck")]
#[command(author, version, about, long_about)]
pub struct Cli {
    /// Files to check. When given, staged-file discovery is skipped.
    pub paths: Vec<String>,

    /// Scan every tracked file instead of staged changes.
    ///
    /// Ignored when explicit paths are given.
    #[arg(long)]
    pub all: bool,

    /// Policy config file, relative to the current directory.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Report format.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Print debug diagnostics to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Build run options for an invocation from `cwd`.
    pub fn check_options(&self, cwd: &Path) -> CheckOptions {
        CheckOptions {
            request: TargetRequest {
                explicit_paths: self.paths.clone(),
                full_scan: self.all,
            },
            config_path: self.config.clone(),
            cwd: cwd.to_path_buf(),
        }
    }
}
