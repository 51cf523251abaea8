//! Section readers: turn a config file into ordered sections of key/value pairs.
//!
//! Responsibilities:
//! - Define the `Section` shape every reader produces.
//! - Define the `SectionReader` seam and the `ParseError` readers report.
//! - Keep a `ReaderRegistry` mapping format tags to readers.
//!
//! Does NOT handle:
//! - Finding the file to read (see `locator` module).
//! - Flattening sections into dotted keys (see `flatten` module).
//!
//! Invariants:
//! - Readers yield sections and entries in file order.
//! - Entries outside any explicit section are reported under `DEFAULT_SECTION_NAME`.
//! - Readers never touch the flat map; a failed read has no side effects.

mod ini;
mod yaml;

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::constants::DEFAULT_SECTION_NAME;

pub use self::ini::IniReader;
pub use self::yaml::YamlReader;

/// Failure reported by a reader, with the offending path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to parse config file at {}: {message}", path.display())]
pub struct ParseError {
    pub path: PathBuf,
    pub message: String,
}

impl ParseError {
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A named group of key/value pairs, in the order the file declares them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// The implicit top-level section.
    pub fn default_section() -> Self {
        Self::new(DEFAULT_SECTION_NAME)
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Builder form of [`Section::push`].
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, value);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this section holds entries declared outside any header.
    pub fn is_default(&self) -> bool {
        self.name == DEFAULT_SECTION_NAME
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parses a file of one format into sections.
///
/// Closures of the right shape implement this too, which keeps test doubles short.
pub trait SectionReader: Send + Sync {
    fn read(&self, path: &Path) -> Result<Vec<Section>, ParseError>;
}

impl<F> SectionReader for F
where
    F: Fn(&Path) -> Result<Vec<Section>, ParseError> + Send + Sync,
{
    fn read(&self, path: &Path) -> Result<Vec<Section>, ParseError> {
        self(path)
    }
}

/// Format tag -> reader.
pub struct ReaderRegistry {
    readers: BTreeMap<String, Box<dyn SectionReader>>,
}

impl Default for ReaderRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ReaderRegistry {
    /// Registry with the built-in `ini` and `yaml` readers.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.insert("ini", IniReader);
        registry.insert("yaml", YamlReader);
        registry
    }

    /// Registry with no readers at all.
    pub fn empty() -> Self {
        Self {
            readers: BTreeMap::new(),
        }
    }

    /// Registers `reader` for `format`, returning the reader it replaced.
    pub fn insert(
        &mut self,
        format: impl Into<String>,
        reader: impl SectionReader + 'static,
    ) -> Option<Box<dyn SectionReader>> {
        self.readers.insert(format.into(), Box::new(reader))
    }

    pub fn remove(&mut self, format: &str) -> Option<Box<dyn SectionReader>> {
        self.readers.remove(format)
    }

    pub fn get(&self, format: &str) -> Option<&dyn SectionReader> {
        self.readers.get(format).map(|r| r.as_ref())
    }

    pub fn formats(&self) -> impl Iterator<Item = &str> {
        self.readers.keys().map(String::as_str)
    }
}

impl fmt::Debug for ReaderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.formats()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_covers_every_declared_format() {
        let registry = ReaderRegistry::builtin();
        for format in crate::format::supported_formats() {
            assert!(registry.get(format).is_some(), "missing reader for {format}");
        }
    }

    #[test]
    fn test_insert_returns_replaced_reader() {
        let mut registry = ReaderRegistry::empty();
        assert!(registry.insert("ini", IniReader).is_none());
        assert!(registry.insert("ini", IniReader).is_some());
        assert!(registry.remove("ini").is_some());
        assert!(registry.get("ini").is_none());
    }

    #[test]
    fn test_closure_reader() {
        let reader = |_: &Path| -> Result<Vec<Section>, ParseError> {
            Ok(vec![Section::default_section().with_entry("a", "1")])
        };
        let sections = reader.read(Path::new("ignored")).unwrap();

        assert_eq!(sections.len(), 1);
        assert!(sections[0].is_default());
        assert_eq!(sections[0].entries().collect::<Vec<_>>(), vec![("a", "1")]);
    }

    #[test]
    fn test_registry_debug_lists_formats() {
        let registry = ReaderRegistry::builtin();
        assert_eq!(format!("{:?}", registry), r#"{"ini", "yaml"}"#);
    }
}
