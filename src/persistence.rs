//! Handles the serialization and file I/O for loading and saving a single collection file.
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::matcher::kind_of;
use crate::table::DocumentTable;
use crate::types::{Document, WriteOptions};
use crate::{RdocsError, Result};
use serde_json::Value;

/// Provides file-based persistence for one collection.
#[derive(Debug, Clone)]
pub struct FilePersistence {
    path: PathBuf,
    options: WriteOptions,
}

impl FilePersistence {
    pub fn new(path: PathBuf, options: WriteOptions) -> Self {
        Self { path, options }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the backing file.
    ///
    /// Returns `Ok(None)` if the file does not exist. A file that exists but is not a JSON
    /// object of documents is reported as `CorruptStore`.
    pub async fn load(&self) -> Result<Option<DocumentTable>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(RdocsError::fs(&self.path, e)),
        };
        decode(&self.path, &bytes).map(Some)
    }

    /// Encodes a table as a JSON object keyed by identifier, in table order.
    pub fn encode(&self, table: &DocumentTable) -> Result<Vec<u8>> {
        let bytes = if self.options.pretty {
            serde_json::to_vec_pretty(table)?
        } else {
            serde_json::to_vec(table)?
        };
        Ok(bytes)
    }

    /// Writes encoded bytes with async file I/O, overwriting prior contents.
    pub async fn write(&self, bytes: Vec<u8>) -> Result<()> {
        if self.options.atomic {
            let temp = self.temp_path();
            fs::write(&temp, bytes)
                .await
                .map_err(|e| RdocsError::fs(&temp, e))?;
            fs::rename(&temp, &self.path)
                .await
                .map_err(|e| RdocsError::fs(&self.path, e))
        } else {
            fs::write(&self.path, bytes)
                .await
                .map_err(|e| RdocsError::fs(&self.path, e))
        }
    }

    /// Writes encoded bytes with blocking file I/O on the calling thread.
    pub fn write_blocking(&self, bytes: &[u8]) -> Result<()> {
        if self.options.atomic {
            let temp = self.temp_path();
            std::fs::write(&temp, bytes).map_err(|e| RdocsError::fs(&temp, e))?;
            std::fs::rename(&temp, &self.path).map_err(|e| RdocsError::fs(&self.path, e))
        } else {
            std::fs::write(&self.path, bytes).map_err(|e| RdocsError::fs(&self.path, e))
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

fn decode(path: &Path, bytes: &[u8]) -> Result<DocumentTable> {
    let parsed: Value = serde_json::from_slice(bytes)
        .map_err(|e| RdocsError::corrupt(path, format!("invalid JSON: {}", e)))?;

    let entries = match parsed {
        Value::Object(entries) => entries,
        other => {
            return Err(RdocsError::corrupt(
                path,
                format!("expected a JSON object, found {}", kind_of(&other)),
            ))
        }
    };

    let mut keys = Vec::with_capacity(entries.len());
    let mut documents: Vec<Document> = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        match value {
            Value::Object(document) => documents.push(document),
            other => {
                return Err(RdocsError::corrupt(
                    path,
                    format!("entry '{}' is {}, not a document", key, kind_of(&other)),
                ))
            }
        }
        keys.push(key);
    }

    DocumentTable::from_documents(documents).map_err(|position| {
        RdocsError::corrupt(
            path,
            format!(
                "entry '{}' has no string identifier",
                keys.get(position).map(String::as_str).unwrap_or_default()
            ),
        )
    })
}
