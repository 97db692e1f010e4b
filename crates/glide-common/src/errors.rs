use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store path error: {0}")]
    PathError(String),

    #[error("store read error: {0}")]
    ReadError(String),

    #[error("store write error: {0}")]
    WriteError(String),

    #[error("store decode error for key '{key}': {reason}")]
    DecodeError { key: String, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum GlideError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("panel error: {0}")]
    Panel(String),

    #[error("chat error: {0}")]
    Chat(String),

    #[error("{0}")]
    Other(String),
}
