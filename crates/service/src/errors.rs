use thiserror::Error;

use models::errors::ModelError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("item not found: {0}")]
    ItemNotFound(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("json error: {0}")]
    Json(String),
}

impl ServiceError {
    pub fn io(path: &std::path::Path, err: impl std::fmt::Display) -> Self {
        Self::Io(format!("{}: {}", path.display(), err))
    }
}

impl From<ModelError> for ServiceError {
    fn from(err: ModelError) -> Self { Self::InvalidArgument(err.to_string()) }
}
