use thiserror::Error;

#[derive(Error, Debug)]
pub enum PmError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Command failed: {0}")]
    Command(String),
    #[error("Dependency not found: {0}")]
    Dependency(String),
    #[error("Internal error: {0}")]
    Internal(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

impl From<serde_json::Error> for PmError {
    fn from(err: serde_json::Error) -> Self {
        PmError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PmError>;
