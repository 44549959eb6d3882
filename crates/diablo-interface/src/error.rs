use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request resource must not be empty")]
    EmptyResource,

    #[error("Invalid handler root: {0:?}")]
    InvalidHandlerRoot(String),

    #[error("Handler already registered for resource root: {0}")]
    DuplicateHandler(String),

    #[error("Unknown resource: {0}")]
    UnknownResource(String),

    #[error("Character source unavailable: {0}")]
    DataSourceUnavailable(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
