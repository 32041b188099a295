use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("cache io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cache serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no usable cache directory on this platform")]
    NoCacheDir,

    #[error("remote store error: {0}")]
    Remote(String),
}
