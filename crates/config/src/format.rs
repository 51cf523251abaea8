//! Format tags and the file extensions probed for each.
//!
//! Responsibilities:
//! - Declare the static format -> extension table used by the locator.
//! - Answer whether a format tag may be loaded.
//!
//! Does NOT handle:
//! - Reading files of a given format (see `parser` module).
//!
//! Invariants:
//! - The supported-format set is exactly the set of tags in `FORMAT_EXTENSIONS`.
//! - Extension lists are ordered; the locator tries them front to back.

/// Format tag -> candidate extensions, in probe order.
pub const FORMAT_EXTENSIONS: &[(&str, &[&str])] = &[("ini", &["ini"]), ("yaml", &["yml", "yaml"])];

/// Returns the candidate extensions for `format`, or `None` if the tag is unknown.
pub fn extensions_for(format: &str) -> Option<&'static [&'static str]> {
    FORMAT_EXTENSIONS
        .iter()
        .find(|(tag, _)| *tag == format)
        .map(|(_, exts)| *exts)
}

pub fn is_supported_format(format: &str) -> bool {
    extensions_for(format).is_some()
}

/// All loadable format tags, in table order.
pub fn supported_formats() -> impl Iterator<Item = &'static str> {
    FORMAT_EXTENSIONS.iter().map(|(tag, _)| *tag)
}
