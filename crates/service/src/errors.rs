use thiserror::Error;

/// Failures of the service layer. Absence is not an error, and validation
/// happens before the service is called.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("store error: {0}")]
    Store(String),
}

impl ServiceError {
    pub fn store(err: impl std::fmt::Display) -> Self { Self::Store(err.to_string()) }
}
