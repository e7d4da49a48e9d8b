//! Forbidden-script detection for code and config files.

use crate::classify::{FileCategory, classify};
use crate::config::Baseline;
use crate::findings::Finding;
use crate::targets::TargetFile;

/// An inclusive range of Unicode code points belonging to one script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptRange {
    pub name: &'static str,
    pub start: char,
    pub end: char,
}

/// The Cyrillic block, U+0400..=U+04FF.
pub const CYRILLIC: ScriptRange = ScriptRange {
    name: "Cyrillic",
    start: '\u{0400}',
    end: '\u{04FF}',
};

impl ScriptRange {
    pub fn contains(&self, c: char) -> bool {
        (self.start..=self.end).contains(&c)
    }

    /// 1-based line number of the first character in range, if any.
    pub fn first_match_line(&self, content: &str) -> Option<usize> {
        content
            .lines()
            .position(|line| line.chars().any(|c| self.contains(c)))
            .map(|idx| idx + 1)
    }
}

/// Checks code and config files against a forbidden script, honoring the
/// baseline.
#[derive(Debug)]
pub struct ForbiddenScriptDetector<'a> {
    script: ScriptRange,
    baseline: &'a Baseline,
}

impl<'a> ForbiddenScriptDetector<'a> {
    pub fn new(baseline: &'a Baseline) -> Self {
        Self::with_script(CYRILLIC, baseline)
    }

    pub fn with_script(script: ScriptRange, baseline: &'a Baseline) -> Self {
        Self { script, baseline }
    }

    /// Check one file.
    ///
    /// Emits at most one finding: an error when the file contains the
    /// forbidden script, or an info notice instead when the path is
    /// baselined. Files outside the code/config category yield nothing.
    pub fn check(&self, file: &TargetFile) -> Vec<Finding> {
        if classify(&file.path) != FileCategory::CodeOrConfig {
            return Vec::new();
        }

        let Some(line) = self.script.first_match_line(&file.text()) else {
            return Vec::new();
        };

        if self.baseline.contains(&file.path) {
            tracing::debug!(path = %file.path, script = self.script.name, line, "suppressed by baseline");
            vec![Finding::baseline_suppressed(&file.path, line)]
        } else {
            tracing::debug!(path = %file.path, script = self.script.name, line, "forbidden script found");
            vec![Finding::forbidden_script(&file.path, line)]
        }
    }
}
