//! File access and document parsing for strata
//!
//! Answers two questions for the resolution engine: "is this config file
//! there and readable" and "what generic tree does this text describe".
//! Documents are always returned as a `serde_json::Value` mapping regardless
//! of the on-disk format.

pub mod document;
pub mod error;
pub mod format;
pub mod io;

pub use document::DocumentStore;
pub use error::{Error, Result};
pub use format::DocumentFormat;
