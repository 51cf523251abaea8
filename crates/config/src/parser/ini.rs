//! INI reader backed by the `rust-ini` crate.

use std::path::Path;

use ::ini::{Ini, ParseOption};

use super::{ParseError, Section, SectionReader};
use crate::constants::DEFAULT_SECTION_NAME;

/// Reads `.ini` files.
///
/// Backslashes are kept verbatim so Windows paths survive. An unquoted value
/// ends at the first `#` or `;` (inline comment); a value that opens with a
/// quote is taken up to its closing quote and may contain either.
#[derive(Debug, Clone, Copy, Default)]
pub struct IniReader;

impl SectionReader for IniReader {
    fn read(&self, path: &Path) -> Result<Vec<Section>, ParseError> {
        let option = ParseOption {
            enabled_quote: false,
            enabled_escape: false,
            ..ParseOption::default()
        };
        let ini = Ini::load_from_file_opt(path, option)
            .map_err(|e| ParseError::new(path, e.to_string()))?;

        tracing::trace!(path = %path.display(), "Parsed ini file");

        Ok(ini
            .iter()
            .map(|(name, props)| {
                let mut section = Section::new(name.unwrap_or(DEFAULT_SECTION_NAME));
                for (key, value) in props.iter() {
                    section.push(key, value_without_comment(value));
                }
                section
            })
            .collect())
    }
}

/// Applies quote and inline-comment rules to a raw value.
fn value_without_comment(raw: &str) -> &str {
    let raw = raw.trim();
    if let Some(inner) = quoted(raw) {
        return inner;
    }
    match raw.find(['#', ';']) {
        Some(end) => raw[..end].trim_end(),
        None => raw,
    }
}

fn quoted(raw: &str) -> Option<&str> {
    let quote = raw.chars().next().filter(|c| matches!(c, '"' | '\''))?;
    let rest = &raw[quote.len_utf8()..];
    rest.find(quote).map(|close| &rest[..close])
}
