//! Format-agnostic document parsing
//!
//! Every supported format is parsed into the same generic tree: a
//! `serde_json::Map` at the top, with nested objects, arrays and scalars
//! below it. Interpreting that tree is the caller's job.

use crate::{DocumentFormat, Error, Result, io};
use serde_json::{Map, Number, Value};
use std::io::Read;
use std::path::Path;

/// A parsed top-level document.
pub type Document = Map<String, Value>;

/// Parses structured text into generic document trees.
///
/// The store carries a default format that applies to streams and to paths
/// whose extension does not name a known format.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentStore {
    default_format: DocumentFormat,
}

impl DocumentStore {
    /// Create a store that defaults to YAML.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with a different default format.
    pub fn with_format(default_format: DocumentFormat) -> Self {
        Self { default_format }
    }

    /// Load and parse a file.
    ///
    /// Format is detected from the file extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    /// - anything else -> the store's default format
    pub fn load(&self, path: &Path) -> Result<Document> {
        let content = io::read_text(path)?;
        let format = DocumentFormat::from_path(path).unwrap_or(self.default_format);
        tracing::debug!(path = %path.display(), %format, "Parsing document");
        parse_str(&content, format, &path.display().to_string())
    }

    /// Parse a stream in the store's default format.
    pub fn read(&self, reader: impl Read, origin: &str) -> Result<Document> {
        let content = io::read_stream(reader, origin)?;
        parse_str(&content, self.default_format, origin)
    }
}

/// Parse `content` as `format`. `origin` labels errors.
///
/// Empty documents parse to an empty mapping; any other non-mapping root is
/// rejected.
pub fn parse_str(content: &str, format: DocumentFormat, origin: &str) -> Result<Document> {
    let parse_error = |message: String| Error::Parse {
        origin: origin.to_string(),
        format: format.display_name().to_string(),
        message,
    };

    let tree = match format {
        DocumentFormat::Yaml => {
            let yaml: serde_yaml::Value =
                serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?;
            yaml_to_json(yaml)
        }
        DocumentFormat::Json => {
            if content.trim().is_empty() {
                Value::Null
            } else {
                serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?
            }
        }
        DocumentFormat::Toml => {
            let table: toml::Table =
                toml::from_str(content).map_err(|e| parse_error(e.to_string()))?;
            toml_to_json(toml::Value::Table(table))
        }
    };

    match tree {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => Err(Error::NotADocument {
            origin: origin.to_string(),
            found: kind_name(&other).to_string(),
        }),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

/// Convert a YAML tree into the generic tree.
///
/// YAML allows non-string mapping keys; those are rendered as text.
fn yaml_to_json(value: serde_yaml::Value) -> Value {
    match value {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Number(i.into())
            } else if let Some(u) = n.as_u64() {
                Value::Number(u.into())
            } else {
                n.as_f64()
                    .and_then(Number::from_f64)
                    .map(Value::Number)
                    .unwrap_or_else(|| Value::String(n.to_string()))
            }
        }
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(items) => {
            Value::Array(items.into_iter().map(yaml_to_json).collect())
        }
        serde_yaml::Value::Mapping(mapping) => Value::Object(
            mapping
                .into_iter()
                .map(|(k, v)| (yaml_key(k), yaml_to_json(v)))
                .collect(),
        ),
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

fn yaml_key(key: serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(s) => s,
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::Null => "null".to_string(),
        other => serde_yaml::to_string(&other)
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
    }
}

fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(f.to_string())),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
    }
}
