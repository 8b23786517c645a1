use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no document with id {id}")]
    NotFound { id: u64 },

    #[error("cannot parse query: {0}")]
    QueryParse(String),

    #[error("cannot read library at {path}: {reason}")]
    Persistence { path: PathBuf, reason: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("data directory does not exist and could not be created: {0}")]
    DataDir(PathBuf),
}
