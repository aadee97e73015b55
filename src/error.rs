use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocgenError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Root directory not found: {0}")]
    RootNotFound(String),

    #[error("Class not found: {0}")]
    ClassNotFound(String),
}

pub type Result<T> = std::result::Result<T, DocgenError>;
