//! Findings emitted by the detectors and consumed by the reporter.

use serde::Serialize;
use std::fmt;

/// What a finding is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    ForbiddenScript,
    LocaleMismatch,
    MissingFrontMatter,
    MissingLanguageTag,
    BaselineSuppressed,
}

/// Severity level of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Fails the run.
    Error,
    /// Printed, never fails the run.
    Warning,
    /// Baseline notices.
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warn"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A single policy observation about one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub kind: FindingKind,
    /// Repository-relative file path (forward slashes).
    pub path: String,
    pub message: String,
    pub severity: Severity,
    /// First offending line (1-based), when the finding has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl Finding {
    /// Forbidden script in a file outside the baseline.
    pub fn forbidden_script(path: &str, line: usize) -> Self {
        Self {
            kind: FindingKind::ForbiddenScript,
            path: path.to_string(),
            message: format!("forbidden script detected in {}", path),
            severity: Severity::Error,
            line: Some(line),
        }
    }

    /// Forbidden script in a baselined file.
    pub fn baseline_suppressed(path: &str, line: usize) -> Self {
        Self {
            kind: FindingKind::BaselineSuppressed,
            path: path.to_string(),
            message: format!(
                "{} contains forbidden script but is listed in the baseline",
                path
            ),
            severity: Severity::Info,
            line: Some(line),
        }
    }

    pub fn missing_front_matter(path: &str, expected: &str) -> Self {
        Self {
            kind: FindingKind::MissingFrontMatter,
            path: path.to_string(),
            message: format!(
                "missing front matter for {}; set \"language: {}\" in the metadata block",
                path, expected
            ),
            severity: Severity::Warning,
            line: None,
        }
    }

    pub fn missing_language_tag(path: &str, expected: &str) -> Self {
        Self {
            kind: FindingKind::MissingLanguageTag,
            path: path.to_string(),
            message: format!(
                "front matter of {} lacks 'language:' value for locale '{}'",
                path, expected
            ),
            severity: Severity::Warning,
            line: None,
        }
    }

    pub fn locale_mismatch(path: &str, declared: &str, expected: &str) -> Self {
        Self {
            kind: FindingKind::LocaleMismatch,
            path: path.to_string(),
            message: format!(
                "document {} declares language '{}' but lives inside '{}' content",
                path, declared, expected
            ),
            severity: Severity::Error,
            line: None,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(line) = self.line {
            write!(f, " (line {})", line)?;
        }
        Ok(())
    }
}
