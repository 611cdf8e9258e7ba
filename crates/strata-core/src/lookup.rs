//! Typed read access shared by [`Config`](crate::Config) and
//! [`Scope`](crate::Scope)

use crate::value::Value;

/// Read access to a namespace by dotted, case-insensitive key.
///
/// Only [`get`](Lookup::get) is required. The typed accessors coerce with
/// the rules documented on [`Value`] and return the type's zero value when
/// the key is unset.
pub trait Lookup {
    /// The resolved value at `key`, or `None` if nothing is set there.
    fn get(&self, key: &str) -> Option<Value>;

    fn get_string(&self, key: &str) -> String {
        self.get(key).map(|v| v.as_string()).unwrap_or_default()
    }

    fn get_int(&self, key: &str) -> i64 {
        self.get(key).map(|v| v.as_int()).unwrap_or_default()
    }

    fn get_bool(&self, key: &str) -> bool {
        self.get(key).map(|v| v.as_bool()).unwrap_or_default()
    }

    fn get_string_slice(&self, key: &str) -> Vec<String> {
        self.get(key).map(|v| v.as_string_slice()).unwrap_or_default()
    }

    /// True if `key` resolves to a non-empty value. Empty strings, lists
    /// and subtrees count as unset.
    fn is_set(&self, key: &str) -> bool {
        matches!(self.get(key), Some(value) if !value.is_empty())
    }
}
