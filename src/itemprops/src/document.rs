//! Loading and writing item documents.
//!
//! A document is a UTF-8 JSON file whose root is expected to be an array of
//! item objects. Shape checks beyond "is this an array" are left to the
//! pipelines.

use serde_json::Value;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DocumentError {
    /// True when the document could not be found at all.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DocumentError::NotFound(_))
    }
}

/// Read and parse a JSON document.
pub fn read_document(path: &Path) -> Result<Value, DocumentError> {
    let data = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            DocumentError::NotFound(path.to_path_buf())
        } else {
            DocumentError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let value = serde_json::from_str(&data).map_err(|source| DocumentError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("Loaded document from {}", path.display());
    Ok(value)
}

/// Serialize `value` as pretty-printed JSON (2-space indent) to `path`.
///
/// The file is written in place; a failure part way through leaves whatever
/// the write managed to produce.
pub fn write_document(path: &Path, value: &Value) -> Result<(), DocumentError> {
    let write_err = |source: io::Error| DocumentError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = fs::File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, value).map_err(|e| write_err(e.into()))?;
    writer.flush().map_err(write_err)?;

    tracing::debug!("Wrote document to {}", path.display());
    Ok(())
}

/// Root of a document viewed as a list of items, if it is one.
pub fn items(document: &Value) -> Option<&[Value]> {
    document.as_array().map(Vec::as_slice)
}

/// Display name of an item: its `class_name`, or `"Unknown"`.
///
/// Non-string class names are rendered as compact JSON.
pub fn item_name(item: &Value) -> String {
    match item.get("class_name") {
        Some(Value::String(name)) => name.clone(),
        Some(other) => other.to_string(),
        None => UNKNOWN_ITEM.to_string(),
    }
}

/// Fallback name for items without a `class_name`.
pub const UNKNOWN_ITEM: &str = "Unknown";
