//! PolicyConfig struct definition.

use super::types::FrontMatterParser;
use serde::{Deserialize, Serialize};

/// Config file name, resolved against the invocation directory.
pub const DEFAULT_CONFIG_FILE: &str = "language-policy.config.json";

/// Configuration for the language policy.
///
/// Unknown fields in the JSON are ignored for forward compatibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Paths (or glob patterns) exempted from the forbidden-script check
    /// pending remediation.
    pub baseline: Vec<String>,

    /// Scanner used to read the declared language from front matter.
    pub front_matter_parser: FrontMatterParser,
}
