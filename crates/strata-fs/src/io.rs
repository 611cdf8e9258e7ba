//! Read-only file access for config layers

use crate::{Error, Result};
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

/// Check whether `path` is a regular file that can be opened for reading.
///
/// Permission problems and missing files both report `false`; callers that
/// need the reason should call [`read_text`] and inspect the error.
pub fn is_readable(path: &Path) -> bool {
    path.is_file() && File::open(path).is_ok()
}

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Drain a stream into a string. `origin` only labels errors.
pub fn read_stream(mut reader: impl Read, origin: &str) -> Result<String> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|source| Error::Stream {
            origin: origin.to_string(),
            source,
        })?;
    Ok(content)
}
