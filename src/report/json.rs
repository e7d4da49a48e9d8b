//! JSON report rendering.

use super::Reporter;
use chrono::Utc;
use serde_json::json;

/// Render the report as a pretty-printed JSON object.
///
/// Findings are listed warnings first, then baseline notices, then errors,
/// matching the text report.
pub fn render_json(reporter: &Reporter) -> String {
    let findings: Vec<_> = reporter
        .warnings()
        .chain(reporter.notices())
        .chain(reporter.errors())
        .collect();

    let report = json!({
        "generated_at": Utc::now().to_rfc3339(),
        "files_checked": reporter.files_checked(),
        "errors": reporter.errors().count(),
        "warnings": reporter.warnings().count(),
        "exit_code": reporter.exit_code(),
        "findings": findings,
    });

    format!("{:#}\n", report)
}
