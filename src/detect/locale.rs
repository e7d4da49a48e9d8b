//! Locale consistency for documentation files.

use super::frontmatter::{FrontMatter, LanguageScanner, PatternScanner, extract_front_matter};
use crate::classify::{DOCS_ROOT, FileCategory, classify};
use crate::findings::Finding;
use crate::paths::normalize_path;
use crate::targets::TargetFile;

/// Locale subdirectories of the documentation root, checked in order.
const LOCALE_DIRS: &[(&str, &str)] = &[("docs/de/", "de"), ("docs/en/", "en")];

/// Locale assumed for documentation outside any locale subdirectory.
// The docs tree has a single home locale; unknown subdirectories fall back
// to it instead of being skipped.
const DEFAULT_DOCS_LOCALE: &str = "ru";

/// Expected locale for a path, or `None` outside the documentation tree.
pub fn locale_from_path(path: &str) -> Option<&'static str> {
    let normalized = normalize_path(path);

    for &(prefix, locale) in LOCALE_DIRS {
        if normalized.starts_with(prefix) {
            return Some(locale);
        }
    }

    if normalized.starts_with(DOCS_ROOT) {
        return Some(DEFAULT_DOCS_LOCALE);
    }

    None
}

/// Checks that documentation declares the language its directory implies.
pub struct LocaleConsistencyDetector {
    scanner: Box<dyn LanguageScanner>,
}

impl Default for LocaleConsistencyDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl LocaleConsistencyDetector {
    /// Detector using the line-oriented [`PatternScanner`].
    pub fn new() -> Self {
        Self::with_scanner(Box::new(PatternScanner))
    }

    pub fn with_scanner(scanner: Box<dyn LanguageScanner>) -> Self {
        Self { scanner }
    }

    /// Check one documentation file.
    ///
    /// Missing metadata is a warning; a declared language that disagrees
    /// with the directory is an error. At most one finding per file.
    pub fn check(&self, file: &TargetFile) -> Vec<Finding> {
        if classify(&file.path) != FileCategory::Documentation {
            return Vec::new();
        }
        let Some(expected) = locale_from_path(&file.path) else {
            return Vec::new();
        };

        let content = file.text();
        let FrontMatter::Block(block) = extract_front_matter(&content) else {
            return vec![Finding::missing_front_matter(&file.path, expected)];
        };

        match self.scanner.declared_language(block) {
            None => vec![Finding::missing_language_tag(&file.path, expected)],
            Some(declared) if declared != expected => {
                vec![Finding::locale_mismatch(&file.path, &declared, expected)]
            }
            Some(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::frontmatter::YamlScanner;
    use crate::findings::{FindingKind, Severity};

    fn file(path: &str, content: &str) -> TargetFile {
        TargetFile::new(path, content.as_bytes().to_vec())
    }

    fn doc(language_line: &str) -> String {
        format!("---\n{}\ntranslation_status: draft\n---\n\nHello\n", language_line)
    }

    #[test]
    fn locale_inference_priority() {
        assert_eq!(locale_from_path("docs/de/guide.md"), Some("de"));
        assert_eq!(locale_from_path("docs/en/guide.md"), Some("en"));
        assert_eq!(locale_from_path("docs/guide.md"), Some("ru"));
        assert_eq!(locale_from_path("docs/fr/guide.md"), Some("ru"));
        assert_eq!(locale_from_path("README.md"), None);
        assert_eq!(locale_from_path("src/docs/en/a.md"), None);
    }

    #[test]
    fn locale_inference_normalizes_separators() {
        assert_eq!(locale_from_path(r"docs\en\guide.md"), Some("en"));
        assert_eq!(locale_from_path("./docs/de/guide.md"), Some("de"));
    }

    #[test]
    fn matching_language_yields_nothing() {
        let detector = LocaleConsistencyDetector::new();
        assert!(detector.check(&file("docs/en/page.md", &doc("language: en"))).is_empty());
        assert!(detector.check(&file("docs/de/page.md", &doc("language: de"))).is_empty());
        assert!(detector.check(&file("docs/page.md", &doc("language: ru"))).is_empty());
    }

    #[test]
    fn mismatch_is_error_with_both_codes() {
        let detector = LocaleConsistencyDetector::new();
        let findings = detector.check(&file("docs/en/page.md", &doc("language: ru")));

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, FindingKind::LocaleMismatch);
        assert_eq!(findings[0].severity, Severity::Error);
        assert!(findings[0].message.contains("'ru'"));
        assert!(findings[0].message.contains("'en'"));
    }

    #[test]
    fn spelled_out_language_uses_first_two_letters() {
        let detector = LocaleConsistencyDetector::new();
        let findings = detector.check(&file("docs/en/page.md", &doc("language: russian")));
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, FindingKind::LocaleMismatch);

        assert!(detector.check(&file("docs/en/page.md", &doc("language: english"))).is_empty());
        assert!(detector.check(&file("docs/de/page.md", &doc("language: deutsch"))).is_empty());
    }

    #[test]
    fn declared_language_is_compared_lowercased() {
        let detector = LocaleConsistencyDetector::new();
        assert!(detector.check(&file("docs/en/page.md", &doc("language: EN"))).is_empty());
    }

    #[test]
    fn no_front_matter_is_warning() {
        let detector = LocaleConsistencyDetector::new();
        let findings = detector.check(&file("docs/en/page.md", "# Title\n\nBody\n"));

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, FindingKind::MissingFrontMatter);
        assert_eq!(findings[0].severity, Severity::Warning);
        assert!(findings[0].message.contains("language: en"));
    }

    #[test]
    fn unclosed_front_matter_is_warning() {
        let detector = LocaleConsistencyDetector::new();
        let findings = detector.check(&file("docs/page.md", "---\nlanguage: ru\n\nBody\n"));
        assert_eq!(findings[0].kind, FindingKind::MissingFrontMatter);
    }

    #[test]
    fn front_matter_without_language_is_warning() {
        let detector = LocaleConsistencyDetector::new();
        let findings = detector.check(&file("docs/de/page.md", "---\ntitle: Seite\n---\n"));

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, FindingKind::MissingLanguageTag);
        assert_eq!(findings[0].severity, Severity::Warning);
        assert!(findings[0].message.contains("'de'"));
    }

    #[test]
    fn empty_document_is_warning() {
        let detector = LocaleConsistencyDetector::new();
        let findings = detector.check(&file("docs/en/empty.md", ""));
        assert_eq!(findings[0].kind, FindingKind::MissingFrontMatter);
    }

    #[test]
    fn files_outside_docs_are_not_checked() {
        let detector = LocaleConsistencyDetector::new();
        assert!(detector.check(&file("README.md", "no front matter")).is_empty());
        assert!(detector.check(&file("/tmp/x/test-german.md", "Das ist Text.")).is_empty());
    }

    #[test]
    fn non_documentation_files_are_not_checked() {
        let detector = LocaleConsistencyDetector::new();
        assert!(detector.check(&file("docs/en/script.py", "print(1)")).is_empty());
        assert!(detector.check(&file("docs/en/notes.txt", "text")).is_empty());
    }

    #[test]
    fn yaml_scanner_can_be_substituted() {
        let detector = LocaleConsistencyDetector::with_scanner(Box::new(YamlScanner));
        let findings = detector.check(&file("docs/en/page.md", &doc("language: de")));
        assert_eq!(findings[0].kind, FindingKind::LocaleMismatch);
        assert!(detector.check(&file("docs/en/page.md", &doc("language: en"))).is_empty());
    }
}
