use plasma_core::Hash;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProofError {
    #[error("Upstream fetch failed: {0}")]
    UpstreamFetchFailure(#[from] plasma_client::ClientError),

    #[error("Transaction has no inputs")]
    EmptyInputSet,

    #[error("Transaction {0} is not included in a block")]
    Unconfirmed(Hash),

    #[error("Proof computation failed: {0}")]
    ProofComputation(String),

    #[error("Core error: {0}")]
    Core(#[from] plasma_core::CoreError),
}
