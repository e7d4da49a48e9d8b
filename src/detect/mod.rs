//! Policy detectors.
//!
//! - Forbidden script: code and config files must not contain characters
//!   from a forbidden Unicode range unless the path is baselined.
//! - Locale consistency: documentation must declare, in its front matter,
//!   the language implied by its directory.

pub mod forbidden;
pub mod frontmatter;
pub mod locale;

pub use forbidden::{CYRILLIC, ForbiddenScriptDetector, ScriptRange};
pub use frontmatter::{
    FrontMatter, LanguageScanner, PatternScanner, YamlScanner, extract_front_matter,
    scanner_for,
};
pub use locale::{LocaleConsistencyDetector, locale_from_path};
