//! Reference data path resolution.

use std::path::{Path, PathBuf};

/// Environment variable for overriding the standards directory.
pub const STANDARDS_ENV_VAR: &str = "CONTACTS_STANDARDS_DIR";

/// File name of the tag rule table inside the standards directory.
pub const TAG_RULES_FILE: &str = "tag_rules.toml";

/// File name of the country allow-list inside the standards directory.
pub const COUNTRIES_FILE: &str = "countries.csv";

/// Get the standards root directory.
///
/// Resolution order:
/// 1. `CONTACTS_STANDARDS_DIR` environment variable
/// 2. `standards/` directory relative to workspace root
pub fn standards_root() -> PathBuf {
    if let Ok(root) = std::env::var(STANDARDS_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../standards")
}

pub fn tag_rules_path(root: &Path) -> PathBuf {
    root.join(TAG_RULES_FILE)
}

pub fn countries_path(root: &Path) -> PathBuf {
    root.join(COUNTRIES_FILE)
}
