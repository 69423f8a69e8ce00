//! Refreshing the consultations document.
//!
//! A refresh fetches records from a [`RecordSource`] and overwrites the document with them.
//! Neither step can fail the caller: a failed fetch leaves the existing document untouched so
//! the servers keep serving the last good data, and a failed write is logged and dropped.

use crate::config::CoreConfig;
use crate::records::ConsultationRecord;
use crate::source::RecordSource;
use crate::store::DocumentStore;
use crate::ConsultasResult;

/// What a refresh ended up doing. Informational only; a refresh never returns an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The document now holds `count` freshly fetched records.
    Refreshed { count: usize },
    /// The source failed; the document was not touched.
    FetchFailed,
    /// Records were fetched but could not be written; the previous document (if any) remains.
    WriteFailed,
}

/// Fetches records from a source and persists them to the document store.
#[derive(Debug)]
pub struct DataRefresher<S> {
    source: S,
    store: DocumentStore,
}

impl<S: RecordSource> DataRefresher<S> {
    pub fn new(source: S, store: DocumentStore) -> Self {
        Self { source, store }
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    /// Fetches the current records from the source.
    ///
    /// # Errors
    ///
    /// Returns whatever error the source reports, usually `ConsultasError::Fetch`.
    pub fn fetch(&self) -> ConsultasResult<Vec<ConsultationRecord>> {
        self.source.fetch()
    }

    /// Writes `records` to the document, logging and swallowing any failure.
    ///
    /// Returns `true` when the document was written.
    pub fn save(&self, records: &[ConsultationRecord]) -> bool {
        match self.store.write_records(records) {
            Ok(()) => {
                tracing::info!(
                    "saved {} consultations to {}",
                    records.len(),
                    self.store.path().display()
                );
                true
            }
            Err(e) => {
                tracing::error!(
                    "failed to write consultations to {}: {}",
                    self.store.path().display(),
                    e
                );
                false
            }
        }
    }

    /// Fetches and, on success, saves.
    ///
    /// On a fetch failure the existing document is left as-is.
    pub fn refresh(&self) -> RefreshOutcome {
        let records = match self.fetch() {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("failed to fetch consultations from the external API: {}", e);
                tracing::warn!(
                    "falling back to the local data file {} if it exists",
                    self.store.path().display()
                );
                return RefreshOutcome::FetchFailed;
            }
        };

        if self.save(&records) {
            RefreshOutcome::Refreshed {
                count: records.len(),
            }
        } else {
            RefreshOutcome::WriteFailed
        }
    }
}

/// Runs one refresh against the configured document before a server starts listening.
pub fn initialise_data<S: RecordSource>(cfg: &CoreConfig, source: S) -> RefreshOutcome {
    DataRefresher::new(source, cfg.document_store()).refresh()
}
