use crate::schema::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VocabError {
    #[error("API request failed with status {status}")]
    Request { status: u16 },

    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Unexpected response shape: {0}")]
    Validation(#[from] ValidationError),

    #[error("Cannot request {0}: path segments must not be empty, \".\" or \"..\"")]
    InvalidPath(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl VocabError {
    /// The HTTP status for request failures, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            VocabError::Request { status } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, VocabError>;
