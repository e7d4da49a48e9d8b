//! File classification: which policy, if any, applies to a path.

use crate::paths::{basename_lower, extension_lower, normalize_path};

/// Root directory of the documentation tree (normalized, with trailing slash).
pub const DOCS_ROOT: &str = "docs/";

/// Source and data/markup config extensions subject to the forbidden-script check.
const CODE_EXTENSIONS: &[&str] = &[
    "js", "jsx", "ts", "tsx", "mjs", "cjs", "go", "py", "sh", "rb", "rs", "java", "php", "yml",
    "yaml",
];

/// Config files recognized by name rather than extension.
const CONFIG_BASENAMES: &[&str] = &[".snyk"];

/// Documentation extensions subject to the locale check.
const DOC_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Which policy applies to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCategory {
    /// Checked for forbidden script.
    CodeOrConfig,
    /// Checked for locale consistency.
    Documentation,
    /// Produces no findings.
    Ignored,
}

/// Classify a path by its extension, basename and location.
///
/// Anything under [`DOCS_ROOT`] is documentation context: code-like files
/// there (example scripts, snippets) are exempt from the forbidden-script
/// check, and only Markdown files get the locale check.
pub fn classify(path: &str) -> FileCategory {
    let normalized = normalize_path(path);
    let extension = extension_lower(&normalized);
    let basename = basename_lower(&normalized);

    if DOC_EXTENSIONS.contains(&extension.as_str()) {
        return FileCategory::Documentation;
    }

    if is_under_docs_root(&normalized) {
        return FileCategory::Ignored;
    }

    if CODE_EXTENSIONS.contains(&extension.as_str())
        || CONFIG_BASENAMES.contains(&basename.as_str())
    {
        return FileCategory::CodeOrConfig;
    }

    FileCategory::Ignored
}

/// Whether a normalized path lies inside the documentation tree.
pub fn is_under_docs_root(normalized: &str) -> bool {
    normalized.starts_with(DOCS_ROOT)
}
