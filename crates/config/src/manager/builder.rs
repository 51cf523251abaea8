//! `ConfigManager` and its load pipeline.

use std::path::PathBuf;

use crate::constants::{DEFAULT_CONFIG_FORMAT, DEFAULT_CONFIG_NAME};
use crate::error::ConfigError;
use crate::flatten::{FlatMap, flatten};
use crate::format::{extensions_for, supported_formats};
use crate::locator::Locator;
use crate::parser::{ReaderRegistry, SectionReader};

/// What a successful `load()` does with keys from earlier loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReloadPolicy {
    /// Overwrite colliding keys and keep the rest.
    #[default]
    Merge,
    /// Discard the previous map entirely.
    Replace,
}

/// Locates, loads, and serves one configuration file.
#[derive(Debug)]
pub struct ConfigManager {
    name: String,
    format: String,
    search_paths: Vec<PathBuf>,
    flat: FlatMap,
    reload_policy: ReloadPolicy,
    readers: ReaderRegistry,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    /// Create a manager with the default name and format, no search paths,
    /// and the built-in readers.
    pub fn new() -> Self {
        Self {
            name: DEFAULT_CONFIG_NAME.to_string(),
            format: DEFAULT_CONFIG_FORMAT.to_string(),
            search_paths: Vec::new(),
            flat: FlatMap::new(),
            reload_policy: ReloadPolicy::default(),
            readers: ReaderRegistry::builtin(),
        }
    }

    /// Create a manager and apply `SEEKCONF_*` environment overrides.
    pub fn from_env() -> Self {
        let mut manager = Self::new();
        manager.apply_env();
        manager
    }

    /// Append a directory to search. Duplicates and missing paths are accepted.
    pub fn add_search_path(&mut self, path: impl Into<PathBuf>) {
        self.search_paths.push(path.into());
    }

    /// Append the platform default search paths for `app_name`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::CurrentDirUnavailable` if the working directory
    /// cannot be read, or `ConfigError::ConfigDirUnavailable` if the platform config
    /// directory cannot be determined. Nothing is appended in that case.
    pub fn add_default_search_paths(&mut self, app_name: &str) -> Result<(), ConfigError> {
        let defaults = super::paths::default_search_paths(app_name)?;
        self.search_paths.extend(defaults);
        Ok(())
    }

    /// Set the base file name. A trailing extension is ignored at locate time.
    pub fn set_config_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Set the format tag. Checked only when loading.
    pub fn set_config_format(&mut self, format: impl Into<String>) {
        self.format = format.into();
    }

    pub fn set_reload_policy(&mut self, policy: ReloadPolicy) {
        self.reload_policy = policy;
    }

    /// Register `reader` for `format`, replacing any existing one.
    pub fn set_reader(&mut self, format: impl Into<String>, reader: impl SectionReader + 'static) {
        self.readers.insert(format, reader);
    }

    /// Replace the whole reader registry.
    pub fn set_readers(&mut self, readers: ReaderRegistry) {
        self.readers = readers;
    }

    pub fn with_search_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.add_search_path(path);
        self
    }

    pub fn with_config_name(mut self, name: impl Into<String>) -> Self {
        self.set_config_name(name);
        self
    }

    pub fn with_config_format(mut self, format: impl Into<String>) -> Self {
        self.set_config_format(format);
        self
    }

    pub fn with_reload_policy(mut self, policy: ReloadPolicy) -> Self {
        self.set_reload_policy(policy);
        self
    }

    pub fn with_readers(mut self, readers: ReaderRegistry) -> Self {
        self.set_readers(readers);
        self
    }

    pub fn config_name(&self) -> &str {
        &self.name
    }

    pub fn config_format(&self) -> &str {
        &self.format
    }

    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    pub fn reload_policy(&self) -> ReloadPolicy {
        self.reload_policy
    }

    pub fn readers(&self) -> &ReaderRegistry {
        &self.readers
    }

    /// Resolve the config file path without reading it.
    ///
    /// # Errors
    ///
    /// - `ConfigError::UnsupportedFormat` if the format tag is unknown.
    /// - `ConfigError::NoValidDirectories` / `ConfigError::FileNotFound` from the locator.
    pub fn locate(&self) -> Result<PathBuf, ConfigError> {
        let extensions = self.extensions()?;
        Locator::new(&self.name, extensions, &self.search_paths).locate()
    }

    /// Locate, parse, and flatten the configured file.
    ///
    /// # Errors
    ///
    /// - `ConfigError::UnsupportedFormat` if the format tag is unknown (before any I/O).
    /// - `ConfigError::NoReader` if no reader is registered for the format (before any I/O).
    /// - `ConfigError::NoValidDirectories` / `ConfigError::FileNotFound` from the locator.
    /// - `ConfigError::Parse` from the reader, unchanged.
    ///
    /// On error the flat map is left untouched.
    pub fn load(&mut self) -> Result<(), ConfigError> {
        let extensions = self.extensions()?;
        let reader = self
            .readers
            .get(&self.format)
            .ok_or_else(|| ConfigError::NoReader {
                format: self.format.clone(),
            })?;

        let path = Locator::new(&self.name, extensions, &self.search_paths).locate()?;
        let sections = reader.read(&path)?;
        let fresh = flatten(&sections);

        tracing::debug!(
            path = %path.display(),
            format = %self.format,
            sections = sections.len(),
            keys = fresh.len(),
            policy = ?self.reload_policy,
            "Loaded config file"
        );

        match self.reload_policy {
            ReloadPolicy::Merge => self.flat.extend(fresh),
            ReloadPolicy::Replace => self.flat = fresh,
        }
        Ok(())
    }

    /// Value for `key`, or `""` when absent.
    ///
    /// An absent key and an empty value look the same here; use
    /// [`ConfigManager::lookup`] to tell them apart.
    pub fn get(&self, key: &str) -> &str {
        self.lookup(key).unwrap_or("")
    }

    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.flat.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.flat.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.flat.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flat.is_empty()
    }

    /// Flat keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.flat.keys().map(String::as_str)
    }

    /// Flat entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.flat.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn as_map(&self) -> &FlatMap {
        &self.flat
    }

    /// Drop every loaded key.
    pub fn clear(&mut self) {
        self.flat.clear();
    }

    fn extensions(&self) -> Result<&'static [&'static str], ConfigError> {
        extensions_for(&self.format).ok_or_else(|| ConfigError::UnsupportedFormat {
            format: self.format.clone(),
            supported: supported_formats().map(String::from).collect(),
        })
    }
}
