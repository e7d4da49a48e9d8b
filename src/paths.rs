//! Path normalization shared by target resolution, baseline matching and
//! locale inference.
//!
//! Every path that crosses a module boundary is in "normalized" form:
//! forward slashes only, no leading `./`.

use std::path::{Component, Path, PathBuf};

/// Normalize a path string to forward-slash form without a leading `./`.
pub fn normalize_path(path: &str) -> String {
    let mut normalized = path.replace('\\', "/");
    while let Some(rest) = normalized.strip_prefix("./") {
        normalized = rest.to_string();
    }
    normalized
}

/// Convert a user-supplied path to repository-relative normalized form.
///
/// Relative paths are taken as relative to `root` already. Absolute paths
/// under `root` have the prefix stripped; absolute paths elsewhere are kept
/// absolute so they can still be read.
pub fn to_repo_relative(path: &str, root: &Path) -> String {
    let candidate = Path::new(path);
    if candidate.is_absolute() {
        if let Ok(stripped) = candidate.strip_prefix(root) {
            return normalize_path(&stripped.to_string_lossy());
        }
        // Canonical forms may differ (symlinked temp dirs on macOS).
        if let (Ok(canon_path), Ok(canon_root)) = (candidate.canonicalize(), root.canonicalize())
            && let Ok(stripped) = canon_path.strip_prefix(&canon_root)
        {
            return normalize_path(&stripped.to_string_lossy());
        }
        return path.replace('\\', "/");
    }
    normalize_path(path)
}

/// Join `path` onto `base` and fold `.` and `..` components lexically.
///
/// Absolute `path` values ignore `base`. The filesystem is not consulted,
/// so the result is usable for files that do not exist.
pub fn absolutize(path: &str, base: &Path) -> PathBuf {
    let joined = base.join(path.replace('\\', "/"));
    let mut folded = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                folded.pop();
            }
            other => folded.push(other.as_os_str()),
        }
    }
    folded
}

/// Lowercased extension of the final path component, without the dot.
///
/// Dotfiles such as `.snyk` have no extension.
pub fn extension_lower(path: &str) -> String {
    Path::new(path)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// Lowercased final path component.
pub fn basename_lower(path: &str) -> String {
    let normalized = path.replace('\\', "/");
    normalized
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_lowercase()
}
