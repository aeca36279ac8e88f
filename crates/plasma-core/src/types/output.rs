use serde::{Deserialize, Serialize};

use crate::crypto::Hash;
use crate::error::CoreError;
use crate::serialize;
use crate::types::address::Address;
use crate::types::bytes::HexBytes;
use crate::types::color::Color;
use crate::types::value::Value;

/// Parameters of a state-changing spend that have not been executed yet.
///
/// Stands in for the root the policy script would produce; nothing here has
/// been validated against prior state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingExecution {
    pub script: HexBytes,
    pub msg_data: HexBytes,
}

impl PendingExecution {
    pub fn new(script: HexBytes, msg_data: HexBytes) -> Self {
        PendingExecution { script, msg_data }
    }

    /// JSON form `{"script": "0x..", "msgData": "0x.."}`
    pub fn to_json(&self) -> Result<String, CoreError> {
        serialize::to_json(self)
    }
}

/// State root carried by a storage-bearing output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StorageRoot {
    /// Script and message data threaded through without execution
    Pending(PendingExecution),
    /// Root committed by the chain
    Committed(Hash),
}

impl StorageRoot {
    pub fn is_pending(&self) -> bool {
        matches!(self, StorageRoot::Pending(_))
    }

    /// The committed root, if this is not a pending placeholder
    pub fn committed(&self) -> Option<&Hash> {
        match self {
            StorageRoot::Committed(root) => Some(root),
            StorageRoot::Pending(_) => None,
        }
    }
}

/// A colored transaction output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Output {
    /// Amount for fungible colors, token id for non-fungible ones
    pub value: Value,
    /// Owner
    pub address: Address,
    /// Token class
    pub color: Color,
    /// Present only on storage-bearing tokens
    #[serde(default)]
    pub storage_root: Option<StorageRoot>,
}

impl Output {
    pub fn new(value: impl Into<Value>, address: impl Into<Address>, color: Color) -> Self {
        Output {
            value: value.into(),
            address: address.into(),
            color,
            storage_root: None,
        }
    }

    pub fn with_storage_root(mut self, root: StorageRoot) -> Self {
        self.storage_root = Some(root);
        self
    }

    /// Whether this output belongs to `owner` under `color`
    pub fn is_owned_by(&self, owner: &str, color: Color) -> bool {
        self.color == color && self.address.matches(owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_owned_by_ignores_case() {
        let output = Output::new(10u64, "0xAbC", Color(1));
        assert!(output.is_owned_by("0xabc", Color(1)));
        assert!(output.is_owned_by("0xABC", Color(1)));
        assert!(!output.is_owned_by("0xabc", Color(2)));
        assert!(!output.is_owned_by("0xabd", Color(1)));
    }

    #[test]
    fn test_pending_root_json() {
        let pending = PendingExecution::new(HexBytes(vec![0x01]), HexBytes(vec![0xaa, 0xbb]));
        assert_eq!(pending.to_json().unwrap(), r#"{"script":"0x01","msgData":"0xaabb"}"#);

        let root = StorageRoot::Pending(pending);
        assert!(root.is_pending());
        assert!(root.committed().is_none());
    }

    #[test]
    fn test_output_json_shape() {
        let json = r#"{"value":"5","address":"0xA","color":1}"#;
        let output: Output = serde_json::from_str(json).unwrap();
        assert_eq!(output.value, Value::from(5));
        assert_eq!(output.address.as_str(), "0xa");
        assert!(output.storage_root.is_none());
    }
}
