//! The consultations document on disk.
//!
//! A single JSON file is the only integration point between the refresher and the servers.
//! Writes replace the whole file; reads re-open and re-parse it every time, with no caching.

use crate::records::ConsultationRecord;
use crate::{ConsultasError, ConsultasResult};
use serde_json::Value;
use std::fs;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Reads and writes the consultations document at a fixed path.
#[derive(Clone, Debug)]
pub struct DocumentStore {
    path: PathBuf,
}

impl DocumentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Reads the document and returns its contents as untyped JSON.
    ///
    /// Whatever well-formed JSON sits at the path is returned as-is; the shape is not checked
    /// against [`ConsultationRecord`].
    ///
    /// # Errors
    ///
    /// - `DocumentNotFound` if the file does not exist,
    /// - `FileRead` for any other I/O failure (including permission errors),
    /// - `Deserialization` if the contents are not valid JSON.
    pub fn read_document(&self) -> ConsultasResult<Value> {
        let contents = self.read_to_string()?;
        serde_json::from_str(&contents).map_err(ConsultasError::Deserialization)
    }

    /// Reads the document as typed consultation records.
    ///
    /// # Errors
    ///
    /// As [`read_document`](Self::read_document), plus `Deserialization` when the JSON is not
    /// an array of records.
    pub fn read_records(&self) -> ConsultasResult<Vec<ConsultationRecord>> {
        let contents = self.read_to_string()?;
        serde_json::from_str(&contents).map_err(ConsultasError::Deserialization)
    }

    /// Writes `records` as a pretty-printed UTF-8 JSON array, replacing any previous content.
    ///
    /// Non-ASCII characters are written unescaped.
    ///
    /// # Errors
    ///
    /// - `FileWrite` if the file cannot be created or written,
    /// - `Serialization` if a record cannot be serialised.
    pub fn write_records(&self, records: &[ConsultationRecord]) -> ConsultasResult<()> {
        let file = fs::File::create(&self.path).map_err(ConsultasError::FileWrite)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, records).map_err(|e| {
            if e.is_io() {
                ConsultasError::FileWrite(e.into())
            } else {
                ConsultasError::Serialization(e)
            }
        })?;
        writer.flush().map_err(ConsultasError::FileWrite)?;
        Ok(())
    }

    fn read_to_string(&self) -> ConsultasResult<String> {
        fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConsultasError::DocumentNotFound {
                path: self.path.clone(),
            },
            _ => ConsultasError::FileRead(e),
        })
    }
}
