//! Error types for locating and loading configuration files.
//!
//! Responsibilities:
//! - Define error variants for every failure `ConfigManager::load()` can surface.
//! - Carry enough context (names, extensions, directories) to diagnose a failed lookup.
//!
//! Does NOT handle:
//! - Producing parse errors (see `parser` module; readers build `ParseError`).
//! - Logging. Errors are returned to the caller, never logged here.
//!
//! Invariants:
//! - `UnsupportedFormat` and `NoReader` are raised before any filesystem I/O.
//! - `NoValidDirectories` is raised before any file is probed.
//! - `Parse` is transparent: the reader's message is shown without extra context.

use std::path::PathBuf;
use thiserror::Error;

use crate::parser::ParseError;

/// Errors that can occur while locating or loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unsupported config format '{format}' (supported: {})", supported.join(", "))]
    UnsupportedFormat {
        format: String,
        supported: Vec<String>,
    },

    /// The format is declared but nothing is registered to read it.
    #[error("No reader registered for config format '{format}'")]
    NoReader { format: String },

    #[error("Cannot find any config directories: {}", display_paths(configured))]
    NoValidDirectories { configured: Vec<PathBuf> },

    #[error(
        "Cannot find config file '{name}' with extensions [{}] in {}",
        extensions.join(", "),
        display_paths(directories)
    )]
    FileNotFound {
        name: String,
        extensions: Vec<String>,
        directories: Vec<PathBuf>,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Unable to determine config directory: {0}")]
    ConfigDirUnavailable(String),

    #[error("Unable to determine current directory")]
    CurrentDirUnavailable(#[source] std::io::Error),
}

fn display_paths(paths: &[PathBuf]) -> String {
    let joined = paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", joined)
}
