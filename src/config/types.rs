//! Enum types used by the policy configuration.

use serde::{Deserialize, Serialize};

/// Which scanner reads the `language` tag out of a front-matter block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrontMatterParser {
    /// Line-oriented `language: xx` pattern match.
    #[default]
    Pattern,
    /// Full YAML parse of the block.
    Yaml,
}
