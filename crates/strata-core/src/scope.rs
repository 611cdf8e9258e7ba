//! Prefix-rebased views over a [`Config`]
//!
//! A [`Scope`] owns no data. Every key it is given is appended to its
//! prefix and forwarded to the underlying config, so `rexray` scoped
//! `get("logLevel")` reads `rexray.logLevel`.

use crate::config::Config;
use crate::key::KeyPath;
use crate::lookup::Lookup;
use crate::value::Value;
use std::borrow::{Borrow, BorrowMut};

/// A view of a [`Config`] rooted at a key prefix.
///
/// `Scope<&Config>` reads; `Scope<&mut Config>` can also write. An empty
/// key addresses the prefix itself.
#[derive(Debug)]
pub struct Scope<C> {
    config: C,
    prefix: KeyPath,
}

impl Config {
    /// Read-only view rooted at `prefix`.
    pub fn scope(&self, prefix: &str) -> Scope<&Config> {
        Scope {
            config: self,
            prefix: KeyPath::parse(prefix),
        }
    }

    /// Read-write view rooted at `prefix`.
    pub fn scope_mut(&mut self, prefix: &str) -> Scope<&mut Config> {
        Scope {
            config: self,
            prefix: KeyPath::parse(prefix),
        }
    }
}

impl<C: Borrow<Config>> Scope<C> {
    /// The prefix as written.
    pub fn prefix(&self) -> String {
        self.prefix.to_string()
    }

    fn target(&self) -> &Config {
        <C as Borrow<Config>>::borrow(&self.config)
    }

    fn full_path(&self, key: &str) -> KeyPath {
        self.prefix.join(&KeyPath::parse(key))
    }

    /// Narrow this view further; prefixes concatenate.
    pub fn scope(&self, prefix: &str) -> Scope<&Config> {
        Scope {
            config: self.target(),
            prefix: self.full_path(prefix),
        }
    }

    /// Leaf keys beneath the prefix, relative to it.
    pub fn all_keys(&self) -> Vec<String> {
        let prefix = self.prefix.normalized();
        if prefix.is_empty() {
            return self.target().all_keys();
        }
        let lead = format!("{prefix}.");
        self.target()
            .all_keys()
            .into_iter()
            .filter_map(|key| key.strip_prefix(&lead).map(str::to_string))
            .collect()
    }
}

impl<C: BorrowMut<Config>> Scope<C> {
    fn target_mut(&mut self) -> &mut Config {
        <C as BorrowMut<Config>>::borrow_mut(&mut self.config)
    }

    /// Set `key` beneath the prefix on the underlying config.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        let path = self.full_path(key);
        self.target_mut().set_path(&path, value.into());
    }

    /// Writable narrower view.
    pub fn scope_mut(&mut self, prefix: &str) -> Scope<&mut Config> {
        let prefix = self.full_path(prefix);
        Scope {
            config: self.target_mut(),
            prefix,
        }
    }
}

impl<C: Borrow<Config>> Lookup for Scope<C> {
    fn get(&self, key: &str) -> Option<Value> {
        self.target().get_path(&self.full_path(key))
    }
}
