//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. Request handlers and the refresher never read process-wide
//! environment variables themselves, so tests can point each component at its own temporary
//! document without touching global state.

use crate::constants::{
    DEFAULT_DATA_FILE, DEFAULT_STATIC_DIR, HISTORY_HTML_FILENAME, INDEX_HTML_FILENAME,
};
use crate::store::DocumentStore;
use crate::{ConsultasError, ConsultasResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    data_file: PathBuf,
    static_dir: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns `ConsultasError::InvalidInput` if `data_file` is empty.
    pub fn new(data_file: PathBuf, static_dir: PathBuf) -> ConsultasResult<Self> {
        if data_file.as_os_str().is_empty() {
            return Err(ConsultasError::InvalidInput(
                "data file path cannot be empty".into(),
            ));
        }

        Ok(Self {
            data_file,
            static_dir,
        })
    }

    /// Build a `CoreConfig` from optional raw values, falling back to the defaults.
    ///
    /// Empty or whitespace-only values count as unset. This does not read the environment;
    /// entry points pass in whatever `std::env::var(..).ok()` returned.
    pub fn from_env_values(
        data_file: Option<String>,
        static_dir: Option<String>,
    ) -> ConsultasResult<Self> {
        fn non_blank(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        let data_file = non_blank(data_file).unwrap_or_else(|| DEFAULT_DATA_FILE.into());
        let static_dir = non_blank(static_dir).unwrap_or_else(|| DEFAULT_STATIC_DIR.into());

        Self::new(PathBuf::from(data_file), PathBuf::from(static_dir))
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }

    pub fn index_html(&self) -> PathBuf {
        self.static_dir.join(INDEX_HTML_FILENAME)
    }

    pub fn history_html(&self) -> PathBuf {
        self.static_dir.join(HISTORY_HTML_FILENAME)
    }

    /// A store bound to the configured document path.
    pub fn document_store(&self) -> DocumentStore {
        DocumentStore::new(self.data_file.clone())
    }
}
