use thiserror::Error;

#[derive(Error, Debug)]
pub enum NetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed CX2: {0}")]
    Malformed(String),
}

pub type Result<T> = std::result::Result<T, NetError>;
