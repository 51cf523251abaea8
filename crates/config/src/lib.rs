//! Configuration file discovery and flattening.
//!
//! This crate locates a configuration file by base name and format across an
//! ordered list of search directories, parses it into sections, and exposes
//! the result as a flat `"<section>.<key>"` string map.
//!
//! ```no_run
//! use seekconf::ConfigManager;
//!
//! let mut config = ConfigManager::new()
//!     .with_search_path("/etc/myapp")
//!     .with_search_path("./config")
//!     .with_config_name("myapp")
//!     .with_config_format("ini");
//! config.load()?;
//! let host = config.get("db.host");
//! # let _ = host;
//! # Ok::<(), seekconf::ConfigError>(())
//! ```

pub mod constants;
mod error;
pub mod flatten;
pub mod format;
pub mod locator;
mod manager;
pub mod parser;

pub use error::ConfigError;
pub use flatten::FlatMap;
pub use format::{FORMAT_EXTENSIONS, extensions_for, is_supported_format, supported_formats};
pub use locator::Locator;
pub use manager::{ConfigManager, ReloadPolicy, default_search_paths, env_var_or_none};
pub use parser::{IniReader, ParseError, ReaderRegistry, Section, SectionReader, YamlReader};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
