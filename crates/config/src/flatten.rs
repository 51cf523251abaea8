//! Flattening of parsed sections into a single-level string map.
//!
//! Responsibilities:
//! - Insert every entry under `"<section>.<key>"`.
//! - Additionally insert default-section entries under their bare key.
//!
//! Does NOT handle:
//! - Deciding whether a previous map is kept or replaced (see `ReloadPolicy`).
//!
//! Invariants:
//! - Sections are applied in the order given; a later value for the same key wins.
//! - Default-section entries always appear twice: `key` and `DEFAULT.key`.

use std::collections::BTreeMap;

use crate::constants::KEY_DELIMITER;
use crate::parser::Section;

/// Flat key -> value mapping.
pub type FlatMap = BTreeMap<String, String>;

/// Composite key for `key` inside `section`.
pub fn flat_key(section: &str, key: &str) -> String {
    format!("{section}{KEY_DELIMITER}{key}")
}

/// Applies `sections` on top of `target`, overwriting colliding keys.
pub fn flatten_into<'s>(sections: impl IntoIterator<Item = &'s Section>, target: &mut FlatMap) {
    for section in sections {
        if section.is_default() {
            for (key, value) in section.entries() {
                target.insert(key.to_string(), value.to_string());
            }
        }
        for (key, value) in section.entries() {
            target.insert(flat_key(section.name(), key), value.to_string());
        }
    }
}

/// Flattens `sections` into a fresh map.
pub fn flatten(sections: &[Section]) -> FlatMap {
    let mut map = FlatMap::new();
    flatten_into(sections, &mut map);
    map
}
