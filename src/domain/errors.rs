use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Artwork not found")]
    NotFound,
    #[error("{0}")]
    Validation(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn missing_field(field: &str) -> Self {
        DomainError::Validation(format!("Missing required field: {field}"))
    }
}
