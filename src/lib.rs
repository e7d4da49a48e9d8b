//! Langcheck: language and locale policy checker for repository files.
//!
//! Two independent policies are enforced on a set of files, typically the
//! staged changes of a commit:
//!
//! - code and config files must not contain a forbidden script (Cyrillic),
//!   unless the path is grandfathered in the baseline allowlist;
//! - documentation under `docs/` must declare, in its front matter, the
//!   language implied by the directory it lives in.

pub mod check;
pub mod classify;
pub mod cli;
pub mod config;
pub mod detect;
pub mod error;
pub mod exit_codes;
pub mod findings;
pub mod git;
pub mod paths;
pub mod report;
pub mod targets;

#[cfg(test)]
pub(crate) mod test_support;

pub use check::{CheckOptions, CheckOutcome, run};
