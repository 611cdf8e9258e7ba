//! Layered configuration resolution for strata
//!
//! This crate merges configuration from several sources into one
//! case-insensitive, dot-addressed namespace:
//!
//! - **Registrations**: components declare their keys (type, flag alias,
//!   default, description) and an optional YAML document of defaults
//! - **Files**: a global and a per-user config file
//! - **Environment**: `REXRAY_LOGLEVEL` overrides `rexray.logLevel`
//! - **Explicit sets**: values written at runtime, which always win
//!
//! On top of the resolved namespace it provides prefix-scoped views and a
//! JSON export/import.
//!
//! # Example
//!
//! ```
//! use strata_core::{Config, ConfigOptions, KeyType, Lookup, Registration, Registry};
//!
//! # fn main() -> strata_core::Result<()> {
//! let mut reg = Registration::new("Global");
//! reg.yaml("rexray:\n  logLevel: warn\n");
//! reg.key(KeyType::String, "h", "tcp://:7979", "The host", "rexray.host")?;
//!
//! let mut registry = Registry::new();
//! registry.register(reg);
//!
//! let mut config = Config::with_options(&registry, &ConfigOptions::new(false, false, "config", "yml"))?;
//! assert_eq!(config.get_string("REXRAY.LOGLEVEL"), "warn");
//!
//! config.set("rexray.logLevel", "debug");
//! assert_eq!(config.scope("rexray").get_string("loglevel"), "debug");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod env;
pub mod error;
pub mod export;
pub mod key;
pub mod lookup;
pub mod options;
pub mod registry;
pub mod scope;
pub mod section;
pub mod value;

pub use config::Config;
pub use error::{Error, Result};
pub use key::KeyPath;
pub use lookup::Lookup;
pub use options::{ConfigOptions, EnvSource};
pub use registry::{KeyDescriptor, Registration, Registry};
pub use scope::Scope;
pub use section::Section;
pub use value::{KeyType, Value};
