use async_trait::async_trait;
use plasma_core::{Address, Color, Hash, TransactionRecord, UnspentRecord};

use crate::error::ClientError;

/// Lookup of historical transactions by hash
#[async_trait]
pub trait TransactionSource: Send + Sync {
    /// Fetch a transaction; a hash the node does not know is [`ClientError::NotFound`]
    async fn get_transaction(&self, hash: &Hash) -> Result<TransactionRecord, ClientError>;
}

/// Typed surface of a plasma node
#[async_trait]
pub trait PlasmaClient: TransactionSource {
    /// Unspent outputs owned by `address`, in node order
    async fn get_unspent(&self, address: &Address) -> Result<Vec<UnspentRecord>, ClientError>;

    /// Color assigned to the token contract at `token`
    async fn get_color(&self, token: &Address) -> Result<Color, ClientError>;

    /// Registered token colors, as reported by the node
    async fn get_colors(&self) -> Result<serde_json::Value, ClientError>;

    /// Node sync status
    async fn status(&self) -> Result<String, ClientError>;

    /// Node configuration
    async fn get_config(&self) -> Result<serde_json::Value, ClientError>;

    /// Identity of the validator behind this node
    async fn get_validator_info(&self) -> Result<serde_json::Value, ClientError>;
}
