//! Environment variable overrides for the manager.
//!
//! Responsibilities:
//! - Read `SEEKCONF_CONFIG_PATH`, `SEEKCONF_CONFIG_NAME`, and `SEEKCONF_CONFIG_FORMAT`.
//! - Apply them to a `ConfigManager`.
//!
//! Does NOT handle:
//! - Validating the values; `load()` does that.
//!
//! Invariants:
//! - Empty or whitespace-only variables are treated as unset.
//! - Values are trimmed before use.
//! - Path list entries are appended after any paths already configured.

use super::builder::ConfigManager;
use crate::constants::{ENV_CONFIG_FORMAT, ENV_CONFIG_NAME, ENV_CONFIG_PATH};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

impl ConfigManager {
    /// Apply `SEEKCONF_*` environment overrides.
    pub fn apply_env(&mut self) {
        if let Some(list) = env_var_or_none(ENV_CONFIG_PATH) {
            for path in std::env::split_paths(&list) {
                if path.as_os_str().is_empty() {
                    continue;
                }
                tracing::debug!(path = %path.display(), "Adding search path from environment");
                self.add_search_path(path);
            }
        }
        if let Some(name) = env_var_or_none(ENV_CONFIG_NAME) {
            self.set_config_name(name);
        }
        if let Some(format) = env_var_or_none(ENV_CONFIG_FORMAT) {
            self.set_config_format(format);
        }
    }
}
