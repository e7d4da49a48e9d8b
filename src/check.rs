//! One full policy run: resolve targets, scan each file, collect findings.
//!
//! Only target resolution can abort the run. Unreadable files are skipped
//! and a broken config degrades to an empty baseline, so a single run
//! surfaces every violation at once.

use crate::classify::{FileCategory, classify};
use crate::config::{DEFAULT_CONFIG_FILE, PolicyConfig};
use crate::detect::{ForbiddenScriptDetector, LocaleConsistencyDetector, scanner_for};
use crate::error::Result;
use crate::report::Reporter;
use crate::targets::{ResolvedTargets, TargetFile, TargetRequest, resolve};
use std::path::PathBuf;

/// Inputs for a run.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub request: TargetRequest,
    /// Config file; relative paths are resolved against `cwd`.
    pub config_path: PathBuf,
    /// Invocation directory.
    pub cwd: PathBuf,
}

impl CheckOptions {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            request: TargetRequest::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_FILE),
            cwd: cwd.into(),
        }
    }
}

/// How a run ended.
#[derive(Debug)]
pub enum CheckOutcome {
    /// The resolved target set was empty; nothing was loaded or printed.
    NothingToCheck,
    /// Every target was scanned.
    Checked(Reporter),
}

impl CheckOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            CheckOutcome::NothingToCheck => crate::exit_codes::SUCCESS,
            CheckOutcome::Checked(reporter) => reporter.exit_code(),
        }
    }
}

/// Run the language policy check.
///
/// # Returns
///
/// * `Ok(CheckOutcome)` - The run completed; inspect the reporter for violations
/// * `Err(PolicyError::ResolutionError)` - The file set could not be determined
pub fn run(options: &CheckOptions) -> Result<CheckOutcome> {
    let targets = resolve(&options.request, &options.cwd)?;
    if targets.is_empty() {
        return Ok(CheckOutcome::NothingToCheck);
    }

    let config = load_config(options);
    Ok(CheckOutcome::Checked(scan(&targets, &config)))
}

fn load_config(options: &CheckOptions) -> PolicyConfig {
    let path = options.cwd.join(&options.config_path);
    let (config, problem) = PolicyConfig::load_or_default(&path);
    if let Some(err) = problem {
        eprintln!(
            "Warning: ignoring language policy config '{}': {}",
            options.config_path.display(),
            err
        );
    }
    config
}

/// Scan every resolved target and collect findings in input order.
pub fn scan(targets: &ResolvedTargets, config: &PolicyConfig) -> Reporter {
    let baseline = config.compiled_baseline();
    tracing::debug!(entries = baseline.len(), "baseline loaded");

    let forbidden = ForbiddenScriptDetector::new(&baseline);
    let locale = LocaleConsistencyDetector::with_scanner(scanner_for(config.front_matter_parser));
    let mut reporter = Reporter::new();

    for path in &targets.paths {
        let file = match TargetFile::load(&targets.root, path) {
            Ok(Some(file)) => file,
            Ok(None) => continue,
            Err(err) => {
                tracing::debug!(path = %path, error = %err, "skipping unreadable file");
                continue;
            }
        };
        reporter.mark_checked();

        match classify(&file.path) {
            FileCategory::CodeOrConfig => reporter.extend(forbidden.check(&file)),
            FileCategory::Documentation => reporter.extend(locale.check(&file)),
            FileCategory::Ignored => {}
        }
    }

    reporter
}
