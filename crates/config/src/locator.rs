//! Config file locator.
//!
//! Responsibilities:
//! - Validate configured search paths against the filesystem.
//! - Derive the base file name (configured name minus any extension).
//! - Probe `<dir>/<base>.<ext>` candidates and return the first that exists.
//!
//! Does NOT handle:
//! - Checking whether the format may be loaded (see `ConfigManager::load`).
//! - Reading or parsing the located file (see `parser` module).
//!
//! Invariants:
//! - Search path validity is checked fresh on every call; nothing is cached.
//! - Extension order is the primary probe order, directory order the secondary.
//! - The suffix of the located file always comes from the format, never from the configured name.
//! - Every candidate sits under a search directory; a rooted name is re-rooted there.
//! - Directories and candidates are cleaned lexically (`.` dropped, `..` folded).

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use crate::error::ConfigError;

/// Borrowed view of the state needed to find a config file.
#[derive(Debug, Clone, Copy)]
pub struct Locator<'a> {
    name: &'a str,
    extensions: &'a [&'a str],
    search_paths: &'a [PathBuf],
}

impl<'a> Locator<'a> {
    pub fn new(name: &'a str, extensions: &'a [&'a str], search_paths: &'a [PathBuf]) -> Self {
        Self {
            name,
            extensions,
            search_paths,
        }
    }

    /// Resolves the config file path.
    ///
    /// # Errors
    ///
    /// - `ConfigError::NoValidDirectories` if no search path is an existing directory.
    /// - `ConfigError::FileNotFound` if no `<dir>/<base>.<ext>` combination exists.
    pub fn locate(&self) -> Result<PathBuf, ConfigError> {
        let directories = self.valid_directories();
        if directories.is_empty() {
            return Err(ConfigError::NoValidDirectories {
                configured: self.search_paths.to_vec(),
            });
        }

        let base = base_name(self.name);
        let relative = strip_root(&base);
        let stems: Vec<PathBuf> = directories
            .iter()
            .map(|dir| clean(&dir.join(&relative)))
            .collect();

        for ext in self.extensions {
            for stem in &stems {
                let candidate = with_suffix(stem, ext);
                tracing::trace!(candidate = %candidate.display(), "Probing config candidate");
                if candidate.exists() {
                    tracing::debug!(path = %candidate.display(), "Located config file");
                    return Ok(candidate);
                }
            }
        }

        Err(ConfigError::FileNotFound {
            name: base.display().to_string(),
            extensions: self.extensions.iter().map(|e| e.to_string()).collect(),
            directories,
        })
    }

    /// Search paths that are existing directories right now, made absolute
    /// and cleaned, in configured order.
    pub fn valid_directories(&self) -> Vec<PathBuf> {
        self.search_paths
            .iter()
            .filter_map(|path| {
                if !path.is_dir() {
                    tracing::debug!(path = %path.display(), "Skipping search path: not a directory");
                    return None;
                }
                match std::path::absolute(path) {
                    Ok(abs) => Some(clean(&abs)),
                    Err(e) => {
                        tracing::debug!(
                            path = %path.display(),
                            error = %e,
                            "Skipping search path: cannot make absolute"
                        );
                        None
                    }
                }
            })
            .collect()
    }
}

/// Strips the last extension from `name`, if any, keeping parent components.
///
/// `"cfg.ini"` and `"cfg"` both yield `"cfg"`; `"a.b.ini"` yields `"a.b"`.
/// A dotfile name such as `".sso"` has no extension and is kept whole.
pub fn base_name(name: &str) -> PathBuf {
    let path = Path::new(name);
    if path.extension().is_some() {
        path.with_extension("")
    } else {
        path.to_path_buf()
    }
}

/// Drops root and prefix components so the name always joins under a directory.
fn strip_root(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
        .collect()
}

/// Lexical cleanup: drops `.`, folds `name/..`, and discards `..` directly under the root.
pub fn clean(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    parts.iter().collect()
}

fn with_suffix(stem: &Path, ext: &str) -> PathBuf {
    let mut file: OsString = stem.as_os_str().to_owned();
    file.push(".");
    file.push(ext);
    PathBuf::from(file)
}
