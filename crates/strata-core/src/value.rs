//! Resolved configuration values and their coercion rules

use crate::section::Section;
use serde_json::Value as JsonValue;
use std::fmt;

/// The declared primitive type of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    String,
    Int,
    Bool,
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Bool => "bool",
        })
    }
}

/// A value held in the namespace.
///
/// Scalars read from documents keep the kind the parser gave them. The typed
/// accessors coerce on demand and never fail:
///
/// | from \ to | string        | int                    | bool                         | string slice      |
/// |-----------|---------------|------------------------|------------------------------|-------------------|
/// | `String`  | itself        | decimal parse, else 0  | `1 t true y yes on` → true   | whitespace split  |
/// | `Int`     | decimal       | itself                 | non-zero                     | `[decimal]`       |
/// | `Bool`    | `true`/`false`| 1 / 0                  | itself                       | `["true"/"false"]`|
/// | `List`    | space-joined  | 0                      | false                        | itself            |
/// | `Map`     | empty         | 0                      | false                        | empty             |
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Int(i64),
    Bool(bool),
    List(Vec<String>),
    Map(Section),
}

impl Value {
    pub fn as_string(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
            Self::Int(i) => i.to_string(),
            Self::Bool(b) => b.to_string(),
            Self::List(items) => items.join(" "),
            Self::Map(_) => String::new(),
        }
    }

    pub fn as_int(&self) -> i64 {
        match self {
            Self::String(s) => parse_int(s),
            Self::Int(i) => *i,
            Self::Bool(b) => i64::from(*b),
            Self::List(_) | Self::Map(_) => 0,
        }
    }

    pub fn as_bool(&self) -> bool {
        match self {
            Self::String(s) => parse_bool(s),
            Self::Int(i) => *i != 0,
            Self::Bool(b) => *b,
            Self::List(_) | Self::Map(_) => false,
        }
    }

    pub fn as_string_slice(&self) -> Vec<String> {
        match self {
            Self::String(s) => s.split_whitespace().map(str::to_string).collect(),
            Self::Int(i) => vec![i.to_string()],
            Self::Bool(b) => vec![b.to_string()],
            Self::List(items) => items.clone(),
            Self::Map(_) => Vec::new(),
        }
    }

    pub fn as_section(&self) -> Option<&Section> {
        match self {
            Self::Map(section) => Some(section),
            _ => None,
        }
    }

    /// Whether this is an empty string, list or mapping. Integers and
    /// booleans are never empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::String(s) => s.is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Map(section) => section.is_empty(),
            Self::Int(_) | Self::Bool(_) => false,
        }
    }

    /// Convert a scalar to the declared key type. Lists and maps pass through.
    pub fn coerce(self, key_type: KeyType) -> Value {
        if matches!(self, Self::List(_) | Self::Map(_)) {
            return self;
        }
        match key_type {
            KeyType::String => Self::String(self.as_string()),
            KeyType::Int => Self::Int(self.as_int()),
            KeyType::Bool => Self::Bool(self.as_bool()),
        }
    }

    /// Build a value from a parsed document node. Nulls mean "unset".
    ///
    /// Integers that fit in an `i64` stay integers; other numbers keep their
    /// decimal text. Sequence elements are rendered as text.
    pub fn from_json(node: &JsonValue) -> Option<Value> {
        match node {
            JsonValue::Null => None,
            JsonValue::Bool(b) => Some(Self::Bool(*b)),
            JsonValue::Number(n) => Some(match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::String(n.to_string()),
            }),
            JsonValue::String(s) => Some(Self::String(s.clone())),
            JsonValue::Array(items) => Some(Self::List(
                items
                    .iter()
                    .filter(|item| !item.is_null())
                    .map(|item| match item {
                        JsonValue::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect(),
            )),
            JsonValue::Object(map) => Some(Self::Map(Section::from_document(map))),
        }
    }

    pub fn to_json(&self) -> JsonValue {
        match self {
            Self::String(s) => JsonValue::String(s.clone()),
            Self::Int(i) => JsonValue::from(*i),
            Self::Bool(b) => JsonValue::Bool(*b),
            Self::List(items) => {
                JsonValue::Array(items.iter().cloned().map(JsonValue::String).collect())
            }
            Self::Map(section) => JsonValue::Object(section.to_document()),
        }
    }
}

// Lenient on purpose: "2.9" truncates to 2 rather than reading as 0.
fn parse_int(text: &str) -> i64 {
    let text = text.trim();
    if let Ok(i) = text.parse::<i64>() {
        return i;
    }
    match text.parse::<f64>() {
        Ok(f) if f.is_finite() => f.trunc() as i64,
        _ => 0,
    }
}

// Accepts the common yes/on spellings on top of `1`, `t` and `true`.
fn parse_bool(text: &str) -> bool {
    matches!(
        text.trim().to_lowercase().as_str(),
        "1" | "t" | "true" | "y" | "yes" | "on"
    )
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Map(section) => write!(f, "{}", JsonValue::Object(section.to_document())),
            other => f.write_str(&other.as_string()),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl From<Vec<&str>> for Value {
    fn from(items: Vec<&str>) -> Self {
        Self::List(items.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Value {
    fn from(items: &[&str]) -> Self {
        Self::List(items.iter().map(|s| s.to_string()).collect())
    }
}

impl From<Section> for Value {
    fn from(section: Section) -> Self {
        Self::Map(section)
    }
}
