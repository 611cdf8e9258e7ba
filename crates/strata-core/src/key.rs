//! Dotted key paths
//!
//! A key such as `rexray.logLevel` is a sequence of segments. Lookups fold
//! case, but the segments keep the casing they were written with so a
//! document can be re-emitted faithfully.

use std::fmt;

/// A parsed, dot-separated key path.
///
/// Empty segments are dropped, so `"a..b"` and `".a.b."` both parse to
/// `a.b`. The empty string parses to the empty path, which addresses the
/// root of a namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    pub fn parse(key: &str) -> Self {
        Self {
            segments: key
                .split('.')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Append `other` beneath this path.
    pub fn join(&self, other: &KeyPath) -> KeyPath {
        let mut segments = self.segments.clone();
        segments.extend(other.segments.iter().cloned());
        KeyPath { segments }
    }

    /// Lowercase dotted form used for equality and key listings.
    pub fn normalized(&self) -> String {
        self.segments
            .iter()
            .map(|segment| fold(segment))
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Environment variable name for this key.
    ///
    /// `rexray.logLevel` becomes `REXRAY_LOGLEVEL`, or `APP_REXRAY_LOGLEVEL`
    /// when a prefix of `app` is given.
    pub fn env_name(&self, prefix: Option<&str>) -> String {
        let body = self
            .segments
            .iter()
            .map(|segment| segment.to_uppercase())
            .collect::<Vec<_>>()
            .join("_");
        match prefix.filter(|p| !p.is_empty()) {
            Some(prefix) => format!("{}_{}", prefix.to_uppercase(), body),
            None => body,
        }
    }

    /// True if `self` equals `other` or lies beneath it, ignoring case.
    pub fn starts_with(&self, other: &KeyPath) -> bool {
        other.segments.len() <= self.segments.len()
            && other
                .segments
                .iter()
                .zip(&self.segments)
                .all(|(a, b)| fold(a) == fold(b))
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

impl From<&str> for KeyPath {
    fn from(key: &str) -> Self {
        Self::parse(key)
    }
}

/// Case folding applied to every segment before comparison.
pub(crate) fn fold(segment: &str) -> String {
    segment.to_lowercase()
}
