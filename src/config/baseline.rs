//! Compiled baseline allowlist.

use crate::paths::normalize_path;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::collections::HashSet;

/// Baseline allowlist ready for membership tests.
///
/// Every entry matches its own normalized path literally. Entries that also
/// contain glob metacharacters additionally match as patterns, with `*` not
/// crossing `/`. An entry that does not compile as a glob stays literal.
#[derive(Debug, Clone)]
pub struct Baseline {
    exact: HashSet<String>,
    globs: GlobSet,
}

impl Default for Baseline {
    fn default() -> Self {
        Self {
            exact: HashSet::new(),
            globs: GlobSet::empty(),
        }
    }
}

impl Baseline {
    /// Compile baseline entries. Blank entries are skipped.
    pub fn new(entries: &[String]) -> Self {
        let mut exact = HashSet::new();
        let mut builder = GlobSetBuilder::new();

        for entry in entries {
            let normalized = normalize_path(entry);
            if normalized.is_empty() {
                continue;
            }

            if is_glob(&normalized) {
                match GlobBuilder::new(&normalized).literal_separator(true).build() {
                    Ok(glob) => {
                        builder.add(glob);
                    }
                    Err(e) => {
                        tracing::debug!(
                            entry = %entry,
                            error = %e,
                            "baseline entry kept as literal path"
                        );
                    }
                }
            }
            exact.insert(normalized);
        }

        let globs = builder.build().unwrap_or_else(|e| {
            tracing::debug!(error = %e, "baseline globs disabled, literal matching only");
            GlobSet::empty()
        });

        Self { exact, globs }
    }

    /// Whether `path` is exempted. The path is normalized before comparison.
    pub fn contains(&self, path: &str) -> bool {
        let normalized = normalize_path(path);
        self.exact.contains(&normalized) || self.globs.is_match(&normalized)
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.exact.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }
}

fn is_glob(entry: &str) -> bool {
    entry.contains(['*', '?', '[', '{'])
}
