//! Front-matter extraction and language tag scanning.
//!
//! Extraction is delimiter-based: a document must start with `---` and
//! splitting on `---` must give at least three segments. The first
//! enclosed segment is the metadata block. Reading the `language` tag out
//! of that block is delegated to a [`LanguageScanner`].

use crate::config::FrontMatterParser;
use regex::Regex;
use std::sync::LazyLock;

/// Metadata block delimiter.
pub const DELIMITER: &str = "---";

/// `language:` anywhere in the block, followed by an optionally quoted value
/// whose first two word characters are the tag.
static LANGUAGE_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)language\s*:\s*['"]?([a-z0-9_]{2})"#).expect("language key pattern is valid")
});

/// Result of front-matter extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontMatter<'a> {
    /// No leading delimiter, or the block is never closed.
    Missing,
    /// Raw text between the first two delimiters.
    Block(&'a str),
}

/// Extract the metadata block from a document.
///
/// A leading byte-order mark is skipped.
pub fn extract_front_matter(content: &str) -> FrontMatter<'_> {
    let content = content.strip_prefix('\u{FEFF}').unwrap_or(content);
    if !content.starts_with(DELIMITER) {
        return FrontMatter::Missing;
    }

    let mut segments = content.split(DELIMITER);
    segments.next();
    match (segments.next(), segments.next()) {
        (Some(block), Some(_)) => FrontMatter::Block(block),
        _ => FrontMatter::Missing,
    }
}

/// Reads the declared language out of a metadata block.
pub trait LanguageScanner: Send + Sync {
    /// The declared two-letter language code, lowercased, if present.
    fn declared_language(&self, block: &str) -> Option<String>;
}

/// Loose scanner: the first `language:` occurrence wins, case-insensitively,
/// and longer values are cut to their first two characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternScanner;

impl LanguageScanner for PatternScanner {
    fn declared_language(&self, block: &str) -> Option<String> {
        LANGUAGE_KEY
            .captures(block)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_lowercase())
    }
}

/// Structured scanner: parses the block as YAML and reads the top-level
/// `language` key. Unparseable YAML means no tag.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlScanner;

impl LanguageScanner for YamlScanner {
    fn declared_language(&self, block: &str) -> Option<String> {
        let value: serde_yaml::Value = serde_yaml::from_str(block).ok()?;
        let mapping = value.as_mapping()?;

        mapping.iter().find_map(|(key, value)| {
            let key = key.as_str()?;
            if !key.eq_ignore_ascii_case("language") {
                return None;
            }
            let code = value.as_str()?.trim();
            if code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()) {
                Some(code.to_ascii_lowercase())
            } else {
                None
            }
        })
    }
}

/// Build the scanner selected in config.
pub fn scanner_for(parser: FrontMatterParser) -> Box<dyn LanguageScanner> {
    match parser {
        FrontMatterParser::Pattern => Box::new(PatternScanner),
        FrontMatterParser::Yaml => Box::new(YamlScanner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_closed_block() {
        let doc = "---\nlanguage: en\ntitle: Page\n---\n\nBody\n";
        assert_eq!(
            extract_front_matter(doc),
            FrontMatter::Block("\nlanguage: en\ntitle: Page\n")
        );
    }

    #[test]
    fn block_may_end_at_eof() {
        assert_eq!(
            extract_front_matter("---\nlanguage: de\n---"),
            FrontMatter::Block("\nlanguage: de\n")
        );
    }

    #[test]
    fn missing_leading_delimiter() {
        assert_eq!(extract_front_matter("# Title\n---\n"), FrontMatter::Missing);
        assert_eq!(extract_front_matter(""), FrontMatter::Missing);
        assert_eq!(extract_front_matter("\n---\nlanguage: en\n---\n"), FrontMatter::Missing);
    }

    #[test]
    fn unclosed_block_is_missing() {
        assert_eq!(
            extract_front_matter("---\nlanguage: en\n\nBody"),
            FrontMatter::Missing
        );
    }

    #[test]
    fn byte_order_mark_is_skipped() {
        assert_eq!(
            extract_front_matter("\u{FEFF}---\nlanguage: en\n---\n"),
            FrontMatter::Block("\nlanguage: en\n")
        );
    }

    #[test]
    fn pattern_scanner_reads_plain_and_quoted_values() {
        let scanner = PatternScanner;
        assert_eq!(scanner.declared_language("\nlanguage: en\n"), Some("en".into()));
        assert_eq!(scanner.declared_language("\nlanguage: 'de'\n"), Some("de".into()));
        assert_eq!(scanner.declared_language("\nlanguage: \"ru\"\n"), Some("ru".into()));
        assert_eq!(scanner.declared_language("\nlanguage:en\n"), Some("en".into()));
    }

    #[test]
    fn pattern_scanner_is_case_insensitive() {
        let scanner = PatternScanner;
        assert_eq!(scanner.declared_language("\nLanguage: EN\n"), Some("en".into()));
        assert_eq!(scanner.declared_language("\nLANGUAGE: Ru\n"), Some("ru".into()));
    }

    #[test]
    fn pattern_scanner_takes_first_two_characters() {
        let scanner = PatternScanner;
        assert_eq!(scanner.declared_language("\nlanguage: english\n"), Some("en".into()));
        assert_eq!(scanner.declared_language("\nlanguage: russian\n"), Some("ru".into()));
        assert_eq!(scanner.declared_language("\nlanguage: Deutsch\n"), Some("de".into()));
    }

    #[test]
    fn pattern_scanner_needs_two_characters() {
        let scanner = PatternScanner;
        assert_eq!(scanner.declared_language("\nlanguage: e\n"), None);
        assert_eq!(scanner.declared_language("\nlanguage:\n"), None);
        assert_eq!(scanner.declared_language("\nlanguage: -\n"), None);
    }

    #[test]
    fn pattern_scanner_matches_key_anywhere() {
        let scanner = PatternScanner;
        assert_eq!(scanner.declared_language("\ntitle: Language guide\n"), None);
        assert_eq!(
            scanner.declared_language("\ntranslation_language: en\n"),
            Some("en".into())
        );
        assert_eq!(
            scanner.declared_language("\nmeta: { language: de }\n"),
            Some("de".into())
        );
    }

    #[test]
    fn pattern_scanner_accepts_region_suffix() {
        assert_eq!(
            PatternScanner.declared_language("\nlanguage: en-US\n"),
            Some("en".into())
        );
    }

    #[test]
    fn yaml_scanner_reads_top_level_key() {
        let scanner = YamlScanner;
        assert_eq!(
            scanner.declared_language("\ntitle: Page\nlanguage: EN\n"),
            Some("en".into())
        );
        assert_eq!(scanner.declared_language("\nLanguage: 'de'\n"), Some("de".into()));
    }

    #[test]
    fn yaml_scanner_rejects_invalid_values() {
        let scanner = YamlScanner;
        assert_eq!(scanner.declared_language("\nlanguage: english\n"), None);
        assert_eq!(scanner.declared_language("\nlanguage: 12\n"), None);
        assert_eq!(scanner.declared_language("\nmeta:\n  language: en\n"), None);
        assert_eq!(scanner.declared_language("\n: : not yaml [\n"), None);
    }

    #[test]
    fn scanner_for_selects_implementation() {
        let block = "\nmeta: x\nlanguage: en-US\n";
        assert_eq!(
            scanner_for(FrontMatterParser::Pattern).declared_language(block),
            Some("en".into())
        );
        assert_eq!(scanner_for(FrontMatterParser::Yaml).declared_language(block), None);
    }
}
