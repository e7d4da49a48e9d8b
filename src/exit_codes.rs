//! Exit code constants for the langcheck CLI.
//!
//! - 0: Success (warnings and baseline notices allowed)
//! - 1: Policy violation (one or more errors)
//! - 2: Target resolution failure (version control unavailable or erroring)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// At least one policy error was reported.
pub const POLICY_VIOLATION: i32 = 1;

/// The file set could not be resolved.
pub const RESOLUTION_FAILURE: i32 = 2;
