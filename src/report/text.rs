//! Plain-text report rendering.

use super::Reporter;
use crate::findings::Finding;

/// Render warnings, then baseline notices, then errors. Empty groups are
/// omitted; no findings renders as an empty string.
pub fn render_text(reporter: &Reporter) -> String {
    let mut out = String::new();

    push_section(&mut out, "Language check warnings:", reporter.warnings());
    push_section(&mut out, "Language policy baseline:", reporter.notices());
    push_section(&mut out, "Language check failed:", reporter.errors());

    out
}

fn push_section<'a>(out: &mut String, title: &str, findings: impl Iterator<Item = &'a Finding>) {
    let mut findings = findings.peekable();
    if findings.peek().is_none() {
        return;
    }

    out.push('\n');
    out.push_str(title);
    out.push('\n');
    for finding in findings {
        out.push_str(&format!("  [{}] {}\n", finding.severity, finding));
    }
}
