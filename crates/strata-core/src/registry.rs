//! Key descriptors and registrations
//!
//! A [`Registration`] bundles the keys one component understands together
//! with an optional YAML document of nested defaults. Registrations are
//! collected in a [`Registry`] whose order decides precedence: later
//! registrations override earlier ones for the same path.

use crate::key::KeyPath;
use crate::value::{KeyType, Value};
use crate::{Error, Result};

/// Declaration of a single configurable key.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyDescriptor {
    key_type: KeyType,
    short_flag: Option<String>,
    default: Value,
    description: String,
    path: String,
}

impl KeyDescriptor {
    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    /// The single-letter flag alias, if the key has one.
    pub fn short_flag(&self) -> Option<&str> {
        self.short_flag.as_deref()
    }

    pub fn default_value(&self) -> &Value {
        &self.default
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Full dotted path as declared.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn key_path(&self) -> KeyPath {
        KeyPath::parse(&self.path)
    }

    /// Flag-bound keys are duplicated as flat entries in expanded exports.
    pub fn is_flag_bound(&self) -> bool {
        self.short_flag.is_some()
    }
}

/// A named bundle of key descriptors plus an optional default document.
#[derive(Debug, Clone, Default)]
pub struct Registration {
    name: String,
    default_document: Option<String>,
    keys: Vec<KeyDescriptor>,
}

impl Registration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attach a YAML document of nested defaults.
    ///
    /// The document is parsed when a [`Config`](crate::Config) is built, not
    /// here, so a malformed document surfaces as a construction error.
    pub fn yaml(&mut self, document: impl Into<String>) -> &mut Self {
        self.default_document = Some(document.into());
        self
    }

    pub fn default_document(&self) -> Option<&str> {
        self.default_document.as_deref()
    }

    /// Declare a key.
    ///
    /// Scalar defaults are converted to `key_type`; an empty `short_flag`
    /// means the key has no flag alias.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `path` has no segments.
    pub fn key(
        &mut self,
        key_type: KeyType,
        short_flag: &str,
        default: impl Into<Value>,
        description: &str,
        path: &str,
    ) -> Result<&mut Self> {
        if KeyPath::parse(path).is_empty() {
            return Err(Error::validation(format!(
                "key in registration '{}' has an empty path",
                self.name
            )));
        }

        self.keys.push(KeyDescriptor {
            key_type,
            short_flag: Some(short_flag.trim())
                .filter(|flag| !flag.is_empty())
                .map(str::to_string),
            default: default.into().coerce(key_type),
            description: description.to_string(),
            path: path.to_string(),
        });
        Ok(self)
    }

    pub fn keys(&self) -> &[KeyDescriptor] {
        &self.keys
    }
}

/// Ordered collection of registrations.
///
/// There is no de-duplication or removal; a registration added twice is
/// simply applied twice.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    registrations: Vec<Registration>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, registration: Registration) {
        tracing::debug!(
            name = registration.name(),
            keys = registration.keys().len(),
            "Registering configuration"
        );
        self.registrations.push(registration);
    }

    pub fn registrations(&self) -> &[Registration] {
        &self.registrations
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Every key descriptor, in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &KeyDescriptor> {
        self.registrations.iter().flat_map(|r| r.keys().iter())
    }

    pub fn flag_bound_keys(&self) -> impl Iterator<Item = &KeyDescriptor> {
        self.keys().filter(|key| key.is_flag_bound())
    }
}
