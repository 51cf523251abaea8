//! YAML reader backed by `serde_yaml`.
//!
//! Top-level scalars form the default section and top-level mappings form
//! named sections. Anything nested deeper is folded into dotted key names
//! inside its section (`pool.size`, `hosts.0`).

use std::path::Path;

use serde_yaml::Value;

use super::{ParseError, Section, SectionReader};
use crate::constants::KEY_DELIMITER;

/// Reads `.yml` / `.yaml` files.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlReader;

impl SectionReader for YamlReader {
    fn read(&self, path: &Path) -> Result<Vec<Section>, ParseError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ParseError::new(path, e.to_string()))?;
        parse_sections(&content).map_err(|message| ParseError::new(path, message))
    }
}

pub(crate) fn parse_sections(content: &str) -> Result<Vec<Section>, String> {
    if is_blank_document(content) {
        return Ok(Vec::new());
    }

    let root: Value = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
    sections_from_value(&root)
}

fn sections_from_value(root: &Value) -> Result<Vec<Section>, String> {
    let map = match root {
        Value::Null => return Ok(Vec::new()),
        Value::Tagged(tagged) => return sections_from_value(&tagged.value),
        Value::Mapping(map) => map,
        other => {
            return Err(format!(
                "expected a mapping at the top level, found {}",
                kind(other)
            ));
        }
    };

    let mut default = Section::default_section();
    let mut named = Vec::new();

    for (key, value) in map {
        let key = key_string(key)?;
        match untag(value) {
            Value::Mapping(_) => {
                let mut section = Section::new(key);
                flatten_into(None, value, &mut section)?;
                named.push(section);
            }
            _ => flatten_into(Some(key), value, &mut default)?,
        }
    }

    let mut sections = Vec::with_capacity(named.len() + 1);
    sections.push(default);
    sections.extend(named);
    Ok(sections)
}

fn flatten_into(prefix: Option<String>, value: &Value, section: &mut Section) -> Result<(), String> {
    match value {
        Value::Mapping(map) => {
            for (key, child) in map {
                let key = key_string(key)?;
                flatten_into(Some(join(prefix.as_deref(), &key)), child, section)?;
            }
        }
        Value::Sequence(items) => {
            for (index, child) in items.iter().enumerate() {
                flatten_into(Some(join(prefix.as_deref(), &index.to_string())), child, section)?;
            }
        }
        Value::Tagged(tagged) => flatten_into(prefix, &tagged.value, section)?,
        scalar => {
            if let Some(key) = prefix {
                section.push(key, scalar_string(scalar));
            }
        }
    }
    Ok(())
}

fn join(prefix: Option<&str>, key: &str) -> String {
    match prefix {
        Some(prefix) => format!("{prefix}{KEY_DELIMITER}{key}"),
        None => key.to_string(),
    }
}

fn untag(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untag(&tagged.value),
        other => other,
    }
}

fn scalar_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => String::new(),
    }
}

fn key_string(key: &Value) -> Result<String, String> {
    match untag(key) {
        Value::String(s) => Ok(s.clone()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(format!("unsupported {} used as a mapping key", kind(other))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

fn is_blank_document(content: &str) -> bool {
    content.lines().map(str::trim).all(|line| {
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}
