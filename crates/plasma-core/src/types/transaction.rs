use serde::{Deserialize, Serialize};

use crate::crypto::{hash_blake3, Hash};
use crate::error::CoreError;
use crate::serialize;
use crate::types::bytes::HexBytes;
use crate::types::input::Input;
use crate::types::output::Output;

/// A structured transaction: spend inputs and the outputs they fund
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Transaction {
    pub inputs: Vec<Input>,
    pub outputs: Vec<Output>,
}

impl Transaction {
    pub fn new(inputs: Vec<Input>, outputs: Vec<Output>) -> Self {
        Transaction { inputs, outputs }
    }

    /// Raw encoded form
    pub fn to_raw(&self) -> Result<Vec<u8>, CoreError> {
        serialize::to_bytes(self)
    }

    /// Decode from the raw encoded form
    pub fn from_raw(raw: &[u8]) -> Result<Self, CoreError> {
        serialize::from_bytes(raw)
    }

    /// Hash of the raw encoding
    pub fn hash(&self) -> Result<Hash, CoreError> {
        Ok(hash_blake3(&self.to_raw()?))
    }
}

/// Transaction as returned by a node, with its inclusion height
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub hash: Hash,
    /// Absent while unconfirmed
    #[serde(default, deserialize_with = "quantity::deserialize")]
    pub block_number: Option<u64>,
    #[serde(default)]
    pub inputs: Vec<Input>,
    pub raw: HexBytes,
}

impl TransactionRecord {
    /// Wrap a transaction as a node would report it
    pub fn from_transaction(tx: &Transaction, block_number: Option<u64>) -> Result<Self, CoreError> {
        let raw = tx.to_raw()?;
        Ok(TransactionRecord {
            hash: hash_blake3(&raw),
            block_number,
            inputs: tx.inputs.clone(),
            raw: HexBytes(raw),
        })
    }

    /// Inclusion height, zero when unconfirmed
    pub fn height(&self) -> u64 {
        self.block_number.unwrap_or(0)
    }

    pub fn is_confirmed(&self) -> bool {
        self.height() > 0
    }

    /// Decode the raw form back into a structured transaction
    pub fn decode(&self) -> Result<Transaction, CoreError> {
        Transaction::from_raw(self.raw.as_slice())
    }
}

/// Block heights arrive as numbers or as `0x` quantity strings
mod quantity {
    use serde::de::{self, Visitor};
    use serde::Deserializer;
    use std::fmt;

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
        deserializer.deserialize_any(QuantityVisitor)
    }

    struct QuantityVisitor;

    impl<'de> Visitor<'de> for QuantityVisitor {
        type Value = Option<u64>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a block number, quantity string or null")
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
            d.deserialize_any(self)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            u64::try_from(v)
                .map(Some)
                .map_err(|_| E::custom(format!("negative block number {}", v)))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            let parsed = match v.strip_prefix("0x") {
                Some(hex) => u64::from_str_radix(hex, 16),
                None => v.parse(),
            };
            parsed
                .map(Some)
                .map_err(|e| E::custom(format!("bad block number {}: {}", v, e)))
        }
    }
}
