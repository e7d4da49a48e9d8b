//! Target resolution: which files a run inspects.
//!
//! A single decision table picks the source by precedence:
//! explicit paths > staged changes > full tracked-file scan (`--all`).
//! Failing to ask git is fatal for the run; anything that goes wrong with
//! an individual file later is not.

mod file;
mod resolver;


pub use file::TargetFile;
pub use resolver::{ResolvedTargets, TargetRequest, TargetSource, resolve};
