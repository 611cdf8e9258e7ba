//! Environment variable mapping
//!
//! Each leaf key has a derived variable name: `rexray.logLevel` maps to
//! `REXRAY_LOGLEVEL`, optionally behind a prefix token. Overrides are read
//! once, while a [`Config`] is being built.

use crate::config::Config;
use crate::key::KeyPath;
use crate::options::EnvSource;
use crate::value::Value;
use std::collections::HashSet;

impl Config {
    /// Replace every known leaf that has a non-empty variable in `env`.
    /// Returns how many leaves were overridden.
    pub(crate) fn apply_env_overrides(&mut self, env: &EnvSource) -> usize {
        let mut applied = 0;
        for key in self.all_keys() {
            let path = KeyPath::parse(&key);
            let name = path.env_name(self.env_prefix.as_deref());
            if let Some(text) = env.var(&name) {
                tracing::trace!(%key, var = %name, "Environment override");
                let value = self.env_value(&path, text);
                self.layered.insert(&path, value);
                applied += 1;
            }
        }
        applied
    }

    /// Type an override the way the leaf it replaces is typed: lists split
    /// on whitespace, registered keys coerce to their declared type, and
    /// anything else stays text.
    fn env_value(&self, path: &KeyPath, text: String) -> Value {
        if let Some(Value::List(_)) = self.layered.lookup(path) {
            return Value::List(text.split_whitespace().map(str::to_string).collect());
        }
        let normalized = path.normalized();
        let declared = self
            .registry()
            .keys()
            .filter(|key| key.key_path().normalized() == normalized)
            .last()
            .map(|key| key.key_type());
        match declared {
            Some(key_type) => Value::String(text).coerce(key_type),
            None => Value::String(text),
        }
    }

    /// `NAME=value` pairs for every resolvable leaf, duplicates removed.
    ///
    /// Lists are space-joined, booleans are `true`/`false` and integers are
    /// decimal, so the output can be fed back as overrides.
    pub fn env_vars(&self) -> Vec<String> {
        let merged = self.merged();
        let mut seen = HashSet::new();
        let mut vars = Vec::new();
        for (key, value) in merged.leaves() {
            let name = KeyPath::parse(&key).env_name(self.env_prefix.as_deref());
            let var = format!("{}={}", name, value.as_string());
            if seen.insert(var.clone()) {
                vars.push(var);
            }
        }
        vars
    }
}
