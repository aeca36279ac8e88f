use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use plasma_core::{Address, Color, Hash, TransactionRecord, UnspentRecord};
use serde::de::DeserializeOwned;
use serde_json::{json, Value as Json};
use tracing::{debug, warn};

use crate::error::ClientError;
use crate::rpc::{self, RpcRequest, RpcResponse};
use crate::source::{PlasmaClient, TransactionSource};

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// JSON-RPC endpoint
    pub url: String,
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            url: "http://127.0.0.1:8645".to_string(),
            timeout_ms: 10_000,
        }
    }
}

/// JSON-RPC client for a plasma node
pub struct HttpClient {
    url: String,
    client: reqwest::Client,
    next_id: AtomicU64,
}

impl HttpClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(HttpClient {
            url: config.url,
            client,
            next_id: AtomicU64::new(1),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issue one call and return its raw `result` member
    async fn call_raw(&self, method: &str, params: Json) -> Result<Json, ClientError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = RpcRequest::new(id, method, params);

        debug!("RPC {} (id {}) to {}", method, id, self.url);

        let response = self.client.post(&self.url).json(&request).send().await?;
        if !response.status().is_success() {
            warn!("RPC {} failed with status {}", method, response.status());
            return Err(ClientError::Status(response.status().as_u16()));
        }

        let body: RpcResponse = response
            .json()
            .await
            .map_err(|e| ClientError::UnexpectedResponse(format!("{}: {}", method, e)))?;
        body.into_result()
    }

    async fn call<R: DeserializeOwned>(&self, method: &str, params: Json) -> Result<R, ClientError> {
        let result = self.call_raw(method, params).await?;
        rpc::decode(method, result)
    }
}

#[async_trait]
impl TransactionSource for HttpClient {
    async fn get_transaction(&self, hash: &Hash) -> Result<TransactionRecord, ClientError> {
        let tx: Option<TransactionRecord> = self
            .call(rpc::METHOD_GET_TRANSACTION, json!([hash.to_hex()]))
            .await?;
        tx.ok_or(ClientError::NotFound(*hash))
    }
}

#[async_trait]
impl PlasmaClient for HttpClient {
    async fn get_unspent(&self, address: &Address) -> Result<Vec<UnspentRecord>, ClientError> {
        let result = self
            .call_raw(rpc::METHOD_UNSPENT, json!([address.as_str()]))
            .await?;
        rpc::decode_unspent(result)
    }

    async fn get_color(&self, token: &Address) -> Result<Color, ClientError> {
        let result = self
            .call_raw(rpc::METHOD_GET_COLOR, json!([token.as_str()]))
            .await?;
        rpc::decode_color(result)
    }

    async fn get_colors(&self) -> Result<Json, ClientError> {
        self.call_raw(rpc::METHOD_GET_COLORS, json!([])).await
    }

    async fn status(&self) -> Result<String, ClientError> {
        let result = self.call_raw(rpc::METHOD_STATUS, json!([])).await?;
        match result {
            Json::String(s) => Ok(s),
            other => Ok(other.to_string()),
        }
    }

    async fn get_config(&self) -> Result<Json, ClientError> {
        self.call_raw(rpc::METHOD_GET_CONFIG, json!([])).await
    }

    async fn get_validator_info(&self) -> Result<Json, ClientError> {
        self.call_raw(rpc::METHOD_VALIDATOR_ADDRESS, json!([])).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HttpClient::new(ClientConfig::default()).unwrap();
        assert_eq!(client.url(), "http://127.0.0.1:8645");
    }

    #[tokio::test]
    async fn test_unreachable_node_is_http_error() {
        let client = HttpClient::new(ClientConfig {
            url: "http://plasma-node.invalid:8645".to_string(),
            timeout_ms: 500,
        })
        .unwrap();

        let err = client.status().await.unwrap_err();
        assert!(matches!(err, ClientError::Http(_)));
    }
}
