//! JSON export and import
//!
//! The expanded export is the resolved tree plus one flat top-level entry
//! per flag-bound key (`"rexray.loglevel": "warn"`), so consumers that only
//! know flat dotted keys can read the same data. Import accepts either
//! shape: flat dotted keys are folded back into the tree.

use crate::config::Config;
use crate::section::Section;
use crate::Result;
use serde_json::{Map, Value as JsonValue};
use strata_fs::{DocumentFormat, document};

impl Config {
    /// Pretty-printed expanded export with sorted keys.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.export_document())?)
    }

    /// The same content as [`to_json`](Config::to_json) without whitespace.
    pub fn to_json_compact(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.export_document())?)
    }

    /// Build a new namespace from JSON text.
    ///
    /// The result has no registrations, so exporting it again emits only
    /// the tree.
    ///
    /// # Errors
    ///
    /// Fails with a parse error on malformed JSON or a non-object root.
    pub fn from_json(text: &str) -> Result<Config> {
        let doc = document::parse_str(text, DocumentFormat::Json, "<json>")?;
        Ok(Config::from_section(Section::from_document(&doc)))
    }

    fn export_document(&self) -> JsonValue {
        let mut doc: Map<String, JsonValue> = self.merged().to_document();
        for key in self.registry().flag_bound_keys() {
            let path = key.key_path();
            if let Some(value) = self.get_path(&path) {
                doc.insert(path.normalized(), value.to_json());
            }
        }
        JsonValue::Object(doc)
    }
}
