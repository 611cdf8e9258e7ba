//! The resolution engine
//!
//! A [`Config`] is built from these layers, later ones overriding earlier
//! ones leaf by leaf:
//!
//! 1. Each registration's default document, in registration order
//! 2. Each registration's key defaults, in registration order
//! 3. The global config file (`<global dir>/config.yml`)
//! 4. The user config file (`<user dir>/config.yml`)
//! 5. Environment variables named after the keys (`REXRAY_LOGLEVEL`)
//!
//! Documents read later with [`Config::read_config`] land on top of those.
//! Values written with [`Config::set`] live in a separate explicit layer
//! that nothing read afterwards can override.

use crate::key::KeyPath;
use crate::lookup::Lookup;
use crate::options::ConfigOptions;
use crate::registry::Registry;
use crate::section::Section;
use crate::value::Value;
use crate::{Error, Result};
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use strata_fs::{DocumentFormat, DocumentStore, document, io};

/// A resolved, mutable configuration namespace.
///
/// Cloning (or [`copy`](Config::copy)) yields an independent namespace;
/// only the immutable registry snapshot is shared.
#[derive(Debug, Clone, Default)]
pub struct Config {
    registry: Arc<Registry>,
    pub(crate) layered: Section,
    pub(crate) explicit: Section,
    store: DocumentStore,
    pub(crate) env_prefix: Option<String>,
}

impl Config {
    /// Build with default options: both config files and environment
    /// overrides enabled.
    ///
    /// # Errors
    ///
    /// Fails only if a registration's default document is malformed.
    /// Missing or unreadable config files are logged and skipped.
    pub fn new(registry: &Registry) -> Result<Self> {
        Self::with_options(registry, &ConfigOptions::default())
    }

    /// Build from `registry` with explicit options.
    pub fn with_options(registry: &Registry, options: &ConfigOptions) -> Result<Self> {
        let mut config = Config {
            registry: Arc::new(registry.clone()),
            store: DocumentStore::with_format(options.document_format()),
            env_prefix: options.env_prefix.clone(),
            ..Default::default()
        };

        // Layer 1 - registration default documents
        for registration in registry.registrations() {
            let Some(text) = registration.default_document() else {
                continue;
            };
            let doc = document::parse_str(text, DocumentFormat::Yaml, registration.name())
                .map_err(|source| Error::DefaultDocument {
                    registration: registration.name().to_string(),
                    source,
                })?;
            config.layered.merge(&Section::from_document(&doc));
        }

        // Layer 2 - key defaults
        for key in registry.keys() {
            config
                .layered
                .insert(&key.key_path(), key.default_value().clone());
        }

        // Layers 3 and 4 - global then user config file
        if options.enable_files {
            for (label, path) in [
                ("global", options.global_config_file()),
                ("user", options.user_config_file()),
            ] {
                match path {
                    Some(path) => config.load_file_layer(label, &path),
                    None => tracing::debug!(layer = label, "No config directory available"),
                }
            }
        }

        // Layer 5 - environment overrides
        if options.enable_env {
            let applied = config.apply_env_overrides(&options.env);
            tracing::debug!(applied, "Applied environment overrides");
        }

        Ok(config)
    }

    /// Build a namespace holding only `section`, with no registrations.
    pub(crate) fn from_section(section: Section) -> Self {
        Config {
            layered: section,
            ..Default::default()
        }
    }

    /// Merge a config file layer, logging instead of failing.
    fn load_file_layer(&mut self, label: &str, path: &Path) {
        if !io::is_readable(path) {
            if path.exists() {
                tracing::warn!(layer = label, path = %path.display(), "Config file is not readable, skipping");
            } else {
                tracing::debug!(layer = label, path = %path.display(), "No config file found, skipping");
            }
            return;
        }

        tracing::debug!(layer = label, path = %path.display(), "Loading config file");
        match self.store.load(path) {
            Ok(doc) => self.layered.merge(&Section::from_document(&doc)),
            Err(error) => {
                tracing::warn!(layer = label, path = %path.display(), %error, "Ignoring config file")
            }
        }
    }

    /// Layer a document read from `reader` over everything loaded so far.
    ///
    /// Keys written with [`set`](Config::set) keep their values.
    ///
    /// # Errors
    ///
    /// Fails if the stream cannot be read or is not a valid document in the
    /// configured format.
    pub fn read_config(&mut self, reader: impl Read) -> Result<()> {
        let doc = self.store.read(reader, "<stream>")?;
        tracing::debug!(keys = doc.len(), "Merging config stream");
        self.layered.merge(&Section::from_document(&doc));
        Ok(())
    }

    /// Layer the document at `path`, as [`read_config`](Config::read_config).
    ///
    /// The format comes from the file extension when it names one.
    pub fn read_config_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let doc = self.store.load(path)?;
        tracing::debug!(path = %path.display(), keys = doc.len(), "Merging config file");
        self.layered.merge(&Section::from_document(&doc));
        Ok(())
    }

    /// Set `key` explicitly. Explicit values outrank every other layer.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.set_path(&KeyPath::parse(key), value.into());
    }

    pub(crate) fn set_path(&mut self, path: &KeyPath, value: Value) {
        if path.is_empty() {
            tracing::debug!("Ignoring set on an empty key");
            return;
        }
        self.explicit.insert(path, value);
    }

    pub(crate) fn get_path(&self, path: &KeyPath) -> Option<Value> {
        if path.is_empty() {
            return Some(Value::Map(self.merged()));
        }
        let explicit = self.explicit.lookup(path);
        let layered = if self.explicit.shadows(path) {
            None
        } else {
            self.layered.lookup(path)
        };

        match (explicit, layered) {
            (Some(Value::Map(over)), Some(Value::Map(base))) => {
                let mut merged = base.clone();
                merged.merge(over);
                Some(Value::Map(merged))
            }
            (Some(value), _) => Some(value.clone()),
            (None, value) => value.cloned(),
        }
    }

    /// The full resolved tree, explicit values applied.
    pub fn merged(&self) -> Section {
        let mut merged = self.layered.clone();
        merged.merge(&self.explicit);
        merged
    }

    /// Every resolvable leaf key, lowercase, in a stable tree order.
    pub fn all_keys(&self) -> Vec<String> {
        self.merged().leaf_keys()
    }

    /// A deep, independent duplicate of this namespace.
    pub fn copy(&self) -> Config {
        self.clone()
    }

    /// The registry snapshot this namespace was built from.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Structural equality over the union of both key sets.
    pub fn equivalent(&self, other: &Config) -> bool {
        let mut keys = self.all_keys();
        keys.extend(other.all_keys());
        keys.iter().all(|key| {
            let equal = self.get(key) == other.get(key);
            if !equal {
                tracing::debug!(%key, left = ?self.get(key), right = ?other.get(key), "Configs differ");
            }
            equal
        })
    }
}

impl Lookup for Config {
    fn get(&self, key: &str) -> Option<Value> {
        self.get_path(&KeyPath::parse(key))
    }
}
