//! Centralized constants for the seekconf crate.
//!
//! Default values and reserved names shared by the locator, the readers,
//! and the flattener.

// =============================================================================
// Configuration State Defaults
// =============================================================================

/// Base file name used when the caller never sets one.
pub const DEFAULT_CONFIG_NAME: &str = "sso_config";

/// Format tag used when the caller never sets one.
pub const DEFAULT_CONFIG_FORMAT: &str = "ini";

// =============================================================================
// Flattening
// =============================================================================

/// Sentinel section name for entries outside any `[section]` header.
pub const DEFAULT_SECTION_NAME: &str = "DEFAULT";

/// Separator placed between a section name and a key name.
pub const KEY_DELIMITER: char = '.';

// =============================================================================
// Environment Variables
// =============================================================================

/// OS path list of extra search directories (split with `std::env::split_paths`).
pub const ENV_CONFIG_PATH: &str = "SEEKCONF_CONFIG_PATH";

/// Overrides the configured base file name.
pub const ENV_CONFIG_NAME: &str = "SEEKCONF_CONFIG_NAME";

/// Overrides the configured format tag.
pub const ENV_CONFIG_FORMAT: &str = "SEEKCONF_CONFIG_FORMAT";

// =============================================================================
// System Paths
// =============================================================================

/// System-wide configuration root searched by `default_search_paths` on Unix.
#[cfg(unix)]
pub const SYSTEM_CONFIG_ROOT: &str = "/etc";
