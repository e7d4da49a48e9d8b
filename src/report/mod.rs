//! Reporter: accumulates findings for a whole run and decides the exit code.
//!
//! Findings are kept in the order they were recorded (input file order), so
//! each severity group renders in a stable order.

mod json;
mod text;

use crate::exit_codes;
use crate::findings::{Finding, FindingKind, Severity};
use std::collections::HashSet;

pub use json::render_json;
pub use text::render_text;

/// Output format for the rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Accumulated findings for one run.
#[derive(Debug, Clone, Default)]
pub struct Reporter {
    findings: Vec<Finding>,
    baselined: HashSet<String>,
    files_checked: usize,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one finding. A baseline notice for a path already noticed in
    /// this run is dropped.
    pub fn record(&mut self, finding: Finding) {
        if finding.kind == FindingKind::BaselineSuppressed
            && !self.baselined.insert(finding.path.clone())
        {
            return;
        }
        self.findings.push(finding);
    }

    pub fn extend<I: IntoIterator<Item = Finding>>(&mut self, findings: I) {
        for finding in findings {
            self.record(finding);
        }
    }

    /// Count a file as inspected.
    pub fn mark_checked(&mut self) {
        self.files_checked += 1;
    }

    pub fn files_checked(&self) -> usize {
        self.files_checked
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.severity == severity)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.with_severity(Severity::Warning)
    }

    pub fn notices(&self) -> impl Iterator<Item = &Finding> {
        self.with_severity(Severity::Info)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.with_severity(Severity::Error)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// 1 if any error was recorded, else 0.
    pub fn exit_code(&self) -> i32 {
        if self.has_errors() {
            exit_codes::POLICY_VIOLATION
        } else {
            exit_codes::SUCCESS
        }
    }

    pub fn render(&self, format: ReportFormat) -> String {
        match format {
            ReportFormat::Text => render_text(self),
            ReportFormat::Json => render_json(self),
        }
    }
}
