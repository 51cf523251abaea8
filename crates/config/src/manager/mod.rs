//! Owned configuration state: search paths, name, format, and the flat map.
//!
//! Responsibilities:
//! - Hold the state callers configure before loading.
//! - Run the load pipeline: format gate, reader dispatch, locate, parse, flatten.
//! - Serve key lookups from the flattened map.
//! - Apply `SEEKCONF_*` environment overrides and platform default search paths.
//!
//! Does NOT handle:
//! - Writing configuration back to disk.
//! - Watching files for changes.
//! - Synchronization; callers sharing a manager across threads must serialize access.
//!
//! Invariants:
//! - Setters never validate; all validation happens in `load()`.
//! - A failed `load()` leaves the flat map exactly as it was.
//! - Under `ReloadPolicy::Merge` keys from earlier loads persist unless overwritten.

mod builder;
mod env;
mod paths;

#[cfg(test)]
mod tests;

pub use builder::{ConfigManager, ReloadPolicy};
pub use env::env_var_or_none;
pub use paths::default_search_paths;
