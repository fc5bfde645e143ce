use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid locale tag: {0:?}")]
    InvalidLocale(String),
    #[error("duplicate field name: {0:?}")]
    DuplicateField(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
