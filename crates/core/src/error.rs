use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConsultasError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to fetch consultations from source: {0}")]
    Fetch(String),
    #[error("data file not found: {}", path.display())]
    DocumentNotFound { path: PathBuf },
    #[error("failed to read data file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to write data file: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to serialize consultations: {0}")]
    Serialization(serde_json::Error),
    #[error("failed to deserialize data file: {0}")]
    Deserialization(serde_json::Error),
}

impl ConsultasError {
    /// Whether this error means the document is simply absent.
    ///
    /// Callers map this case to a not-found response; every other error is a server error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConsultasError::DocumentNotFound { .. })
    }
}

pub type ConsultasResult<T> = std::result::Result<T, ConsultasError>;
