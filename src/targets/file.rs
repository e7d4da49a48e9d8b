//! Loading of individual target files.

use crate::error::{PolicyError, Result};
use crate::paths::extension_lower;
use std::borrow::Cow;
use std::path::Path;

/// A file selected for checking, with its content loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetFile {
    /// Repository-relative path (forward slashes), or absolute for explicit
    /// paths outside the invocation directory.
    pub path: String,
    /// Lowercased extension without the dot.
    pub extension: String,
    pub raw_content: Vec<u8>,
}

impl TargetFile {
    pub fn new(path: &str, raw_content: Vec<u8>) -> Self {
        Self {
            path: path.to_string(),
            extension: extension_lower(path),
            raw_content,
        }
    }

    /// Load `path` relative to `root`.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(TargetFile))` - The file was read
    /// * `Ok(None)` - The path does not exist or is a directory
    /// * `Err(PolicyError::IoError)` - The file exists but could not be read
    pub fn load(root: &Path, path: &str) -> Result<Option<Self>> {
        let full_path = root.join(path);

        let metadata = match std::fs::metadata(&full_path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path, "skipping missing file");
                return Ok(None);
            }
            Err(e) => {
                return Err(PolicyError::IoError(format!(
                    "failed to stat '{}': {}",
                    full_path.display(),
                    e
                )));
            }
        };

        if metadata.is_dir() {
            tracing::debug!(path, "skipping directory");
            return Ok(None);
        }

        let raw_content = std::fs::read(&full_path).map_err(|e| {
            PolicyError::IoError(format!("failed to read '{}': {}", full_path.display(), e))
        })?;

        Ok(Some(Self::new(path, raw_content)))
    }

    /// Content decoded as UTF-8, with invalid sequences replaced.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.raw_content)
    }
}
