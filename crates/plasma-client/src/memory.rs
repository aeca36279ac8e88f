use std::collections::HashMap;

use async_trait::async_trait;
use plasma_core::{Address, Color, Hash, TransactionRecord, UnspentRecord};
use serde_json::{json, Value as Json};
use tokio::sync::RwLock;

use crate::error::ClientError;
use crate::source::{PlasmaClient, TransactionSource};

/// In-memory node stand-in backed by hash maps
#[derive(Debug, Default)]
pub struct MemoryClient {
    transactions: RwLock<HashMap<Hash, TransactionRecord>>,
    unspent: RwLock<Vec<UnspentRecord>>,
    colors: RwLock<HashMap<Address, Color>>,
}

impl MemoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_transaction(&self, record: TransactionRecord) {
        self.transactions.write().await.insert(record.hash, record);
    }

    pub async fn insert_unspent(&self, record: UnspentRecord) {
        self.unspent.write().await.push(record);
    }

    pub async fn register_color(&self, token: Address, color: Color) {
        self.colors.write().await.insert(token, color);
    }
}

#[async_trait]
impl TransactionSource for MemoryClient {
    async fn get_transaction(&self, hash: &Hash) -> Result<TransactionRecord, ClientError> {
        self.transactions
            .read()
            .await
            .get(hash)
            .cloned()
            .ok_or(ClientError::NotFound(*hash))
    }
}

#[async_trait]
impl PlasmaClient for MemoryClient {
    async fn get_unspent(&self, address: &Address) -> Result<Vec<UnspentRecord>, ClientError> {
        Ok(self
            .unspent
            .read()
            .await
            .iter()
            .filter(|u| u.output.address == *address)
            .cloned()
            .collect())
    }

    async fn get_color(&self, token: &Address) -> Result<Color, ClientError> {
        self.colors
            .read()
            .await
            .get(token)
            .copied()
            .ok_or_else(|| ClientError::UnexpectedResponse(format!("unknown token {}", token)))
    }

    async fn get_colors(&self) -> Result<Json, ClientError> {
        let colors = self.colors.read().await;
        let mut tokens: Vec<(&Address, &Color)> = colors.iter().collect();
        tokens.sort_by_key(|(_, color)| **color);
        Ok(json!(tokens
            .into_iter()
            .map(|(token, _)| token.as_str())
            .collect::<Vec<_>>()))
    }

    async fn status(&self) -> Result<String, ClientError> {
        Ok("ok".to_string())
    }

    async fn get_config(&self) -> Result<Json, ClientError> {
        Ok(json!({}))
    }

    async fn get_validator_info(&self) -> Result<Json, ClientError> {
        Ok(json!({}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plasma_core::{hash_blake3, Outpoint, Output, Transaction};

    #[tokio::test]
    async fn test_transaction_lookup() {
        let client = MemoryClient::new();
        let record = TransactionRecord::from_transaction(&Transaction::default(), Some(4)).unwrap();
        let hash = record.hash;
        client.insert_transaction(record.clone()).await;

        assert_eq!(client.get_transaction(&hash).await.unwrap(), record);

        let missing = hash_blake3(b"missing");
        match client.get_transaction(&missing).await {
            Err(ClientError::NotFound(h)) => assert_eq!(h, missing),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unspent_by_owner() {
        let client = MemoryClient::new();
        for (i, owner) in ["0xA", "0xB", "0xa"].iter().enumerate() {
            client
                .insert_unspent(UnspentRecord::new(
                    Outpoint::new(hash_blake3(&[i as u8]), 0),
                    Output::new(1u64, *owner, Color(0)),
                ))
                .await;
        }
        let mine = client.get_unspent(&Address::new("0xA")).await.unwrap();
        assert_eq!(mine.len(), 2);
    }

    #[tokio::test]
    async fn test_colors() {
        let client = MemoryClient::new();
        client.register_color(Address::new("0xT2"), Color(2)).await;
        client.register_color(Address::new("0xT1"), Color(1)).await;

        assert_eq!(client.get_color(&Address::new("0xt1")).await.unwrap(), Color(1));
        assert!(client.get_color(&Address::new("0xt3")).await.is_err());
        assert_eq!(client.get_colors().await.unwrap(), json!(["0xt1", "0xt2"]));
    }
}
