use plasma_core::Hash;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Node returned HTTP status {0}")]
    Status(u16),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("Transaction not found: {0}")]
    NotFound(Hash),

    #[error("Core error: {0}")]
    Core(#[from] plasma_core::CoreError),
}
