use thiserror::Error;

#[derive(Debug, Error)]
pub enum VibeflowError {
    #[error("path not found: {0}")]
    PathNotFound(String),

    #[error("invalid path id '{0}': must be lowercase alphanumeric with hyphens")]
    InvalidPathId(String),

    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("invalid practice type: {0}")]
    InvalidPracticeType(String),

    #[error("home directory not found: set HOME or pass --data-dir")]
    HomeNotFound,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VibeflowError>;
