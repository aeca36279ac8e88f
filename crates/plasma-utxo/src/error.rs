use plasma_core::{Color, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UtxoError {
    #[error("Insufficient funds for color {color}: have {have}, need {need}")]
    InsufficientFunds { color: Color, have: Value, need: Value },

    #[error("Token {token_id} of color {color} not found in unspent set")]
    TokenNotFound { color: Color, token_id: Value },

    #[error("Empty input set")]
    EmptyInputSet,

    #[error("Core error: {0}")]
    Core(#[from] plasma_core::CoreError),
}
