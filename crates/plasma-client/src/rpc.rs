use plasma_core::{Color, HexBytes, Outpoint, Output, UnspentRecord};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

use crate::error::ClientError;

pub const METHOD_UNSPENT: &str = "plasma_unspent";
pub const METHOD_GET_COLOR: &str = "plasma_getColor";
pub const METHOD_GET_COLORS: &str = "plasma_getColors";
pub const METHOD_STATUS: &str = "plasma_status";
pub const METHOD_GET_CONFIG: &str = "plasma_getConfig";
pub const METHOD_VALIDATOR_ADDRESS: &str = "validator_getAddress";
pub const METHOD_GET_TRANSACTION: &str = "eth_getTransactionByHash";

#[derive(Debug, Serialize)]
pub struct RpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: Json,
}

impl<'a> RpcRequest<'a> {
    pub fn new(id: u64, method: &'a str, params: Json) -> Self {
        RpcRequest {
            jsonrpc: "2.0",
            id,
            method,
            params,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub result: Json,
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

impl RpcResponse {
    /// The `result` member, or the node's error object as [`ClientError::Rpc`]
    pub fn into_result(self) -> Result<Json, ClientError> {
        match self.error {
            Some(e) => Err(ClientError::Rpc {
                code: e.code,
                message: e.message,
            }),
            None => Ok(self.result),
        }
    }
}

/// Decode a result payload into the expected type
pub fn decode<R: DeserializeOwned>(method: &str, result: Json) -> Result<R, ClientError> {
    serde_json::from_value(result)
        .map_err(|e| ClientError::UnexpectedResponse(format!("{}: {}", method, e)))
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireOutpoint {
    Raw(HexBytes),
    Structured(Outpoint),
}

#[derive(Debug, Deserialize)]
struct WireUnspent {
    output: Output,
    outpoint: WireOutpoint,
}

impl WireUnspent {
    fn into_record(self) -> Result<UnspentRecord, ClientError> {
        let outpoint = match self.outpoint {
            WireOutpoint::Raw(raw) => Outpoint::from_raw(raw.as_slice())?,
            WireOutpoint::Structured(outpoint) => outpoint,
        };
        Ok(UnspentRecord::new(outpoint, self.output))
    }
}

/// Normalize an unspent response; nodes may answer with a single object
/// instead of an array.
pub fn decode_unspent(result: Json) -> Result<Vec<UnspentRecord>, ClientError> {
    let wire: Vec<WireUnspent> = match result {
        Json::Array(_) => decode(METHOD_UNSPENT, result)?,
        Json::Null => Vec::new(),
        single => vec![decode(METHOD_UNSPENT, single)?],
    };
    wire.into_iter().map(WireUnspent::into_record).collect()
}

/// Colors come back as a number or as a numeric string
pub fn decode_color(result: Json) -> Result<Color, ClientError> {
    let id = match &result {
        Json::Number(n) => n.as_u64(),
        Json::String(s) => match s.strip_prefix("0x") {
            Some(hex) => u64::from_str_radix(hex, 16).ok(),
            None => s.parse().ok(),
        },
        _ => None,
    };
    id.and_then(|id| u32::try_from(id).ok())
        .map(Color)
        .ok_or_else(|| ClientError::UnexpectedResponse(format!("{}: {}", METHOD_GET_COLOR, result)))
}
