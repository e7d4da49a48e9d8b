//! Target source selection and path resolution.

use crate::error::Result;
use crate::git;
use crate::paths::{absolutize, normalize_path, to_repo_relative};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// What the caller asked for on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetRequest {
    pub explicit_paths: Vec<String>,
    pub full_scan: bool,
}

/// Where the file list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetSource {
    /// Paths given on the command line.
    Explicit(Vec<String>),
    /// Staged files with status Added, Copied, Modified or Renamed.
    Staged,
    /// Every tracked file.
    Full,
}

impl TargetSource {
    /// Select the source by precedence. `full_scan` is ignored when
    /// explicit paths are present.
    pub fn select(request: &TargetRequest) -> Self {
        match (request.explicit_paths.is_empty(), request.full_scan) {
            (false, _) => TargetSource::Explicit(request.explicit_paths.clone()),
            (true, true) => TargetSource::Full,
            (true, false) => TargetSource::Staged,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TargetSource::Explicit(_) => "explicit",
            TargetSource::Staged => "staged",
            TargetSource::Full => "full",
        }
    }
}

/// Ordered, deduplicated list of candidate paths and the directory they
/// are relative to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTargets {
    pub root: PathBuf,
    pub paths: Vec<String>,
}

impl ResolvedTargets {
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Resolve the working file set.
///
/// Every source yields paths relative to the repository root. Explicit
/// paths are taken relative to `cwd` and then rewritten against the root;
/// outside a repository `cwd` itself serves as the root, so explicit mode
/// works without git.
///
/// # Returns
///
/// * `Ok(ResolvedTargets)` - Possibly empty
/// * `Err(PolicyError::ResolutionError)` - git is unavailable or failed
pub fn resolve(request: &TargetRequest, cwd: &Path) -> Result<ResolvedTargets> {
    let source = TargetSource::select(request);

    let (root, raw_paths) = match &source {
        TargetSource::Explicit(paths) => {
            let root = explicit_root(cwd);
            let resolved: Vec<String> = paths
                .iter()
                .map(|p| to_repo_relative(&absolutize(p, cwd).to_string_lossy(), &root))
                .collect();
            (root, resolved)
        }
        TargetSource::Staged => {
            let root = git::repo_root(cwd)?;
            let files = git::list_staged_files(&root)?;
            (root, files)
        }
        TargetSource::Full => {
            let root = git::repo_root(cwd)?;
            let files = git::list_tracked_files(&root)?;
            (root, files)
        }
    };

    let paths = dedup_in_order(raw_paths);
    tracing::debug!(source = source.name(), count = paths.len(), "resolved targets");

    Ok(ResolvedTargets { root, paths })
}

/// Repository root for explicit paths, or `cwd` outside a repository.
fn explicit_root(cwd: &Path) -> PathBuf {
    match git::repo_root(cwd) {
        Ok(root) => root,
        Err(err) => {
            tracing::debug!(error = %err, "not inside a repository, using invocation directory");
            cwd.to_path_buf()
        }
    }
}

/// Drop blanks and repeats, keeping first-occurrence order.
fn dedup_in_order(paths: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    paths
        .into_iter()
        .map(|p| normalize_path(&p))
        .filter(|p| !p.is_empty())
        .filter(|p| seen.insert(p.clone()))
        .collect()
}
