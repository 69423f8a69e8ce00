//! # Consultas Core
//!
//! Core data operations for the dental consultations service.
//!
//! This crate contains the data model and everything that touches the consultations document:
//! - Consultation record types and their JSON shape
//! - The document store (read, write, not-found detection)
//! - Record sources, including the mock external API
//! - The refresher that fetches records and overwrites the document
//!
//! **No API concerns**: HTTP routing, static assets and process entry points belong in
//! `api-rest`, `api-shared`, the CLI, or the workspace runner.

pub mod config;
pub mod constants;
pub mod error;
pub mod records;
pub mod refresh;
pub mod source;
pub mod store;

pub use config::CoreConfig;
pub use constants::*;
pub use error::{ConsultasError, ConsultasResult};
pub use records::{ConsultationRecord, Diagnosis, PatientSummary, Treatment};
pub use refresh::{initialise_data, DataRefresher, RefreshOutcome};
pub use source::{MockApiSource, RecordSource};
pub use store::DocumentStore;
