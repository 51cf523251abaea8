//! Platform default search paths.
//!
//! Responsibilities:
//! - List the directories a typical application searches for its config file.
//! - Use the `directories` crate for the platform config directory.
//!
//! Does NOT handle:
//! - Checking whether the directories exist (the locator does that at load time).

use std::path::PathBuf;

use anyhow::Context;

use crate::error::ConfigError;

/// Default search directories for `app_name`, in probe order:
///
/// 1. The current working directory.
/// 2. The platform config directory:
///    - Linux: `~/.config/<app_name>`
///    - macOS: `~/Library/Application Support/<app_name>`
///    - Windows: `%AppData%\<app_name>\config`
/// 3. `/etc/<app_name>` (Unix only).
pub fn default_search_paths(app_name: &str) -> Result<Vec<PathBuf>, ConfigError> {
    let cwd = std::env::current_dir().map_err(ConfigError::CurrentDirUnavailable)?;
    let project = project_config_dir(app_name)
        .map_err(|e| ConfigError::ConfigDirUnavailable(format!("{e:#}")))?;

    #[allow(unused_mut)]
    let mut paths = vec![cwd, project];

    #[cfg(unix)]
    paths.push(PathBuf::from(crate::constants::SYSTEM_CONFIG_ROOT).join(app_name));

    Ok(paths)
}

fn project_config_dir(app_name: &str) -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", app_name)
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().to_path_buf())
}
