use serde::{Deserialize, Serialize};
use std::fmt;

use crate::crypto::Hash;
use crate::error::CoreError;

/// Reference to an output of a prior transaction.
///
/// Ordering is by transaction hash, then output index, which is what the
/// explicit sort-by-outpoint selection pre-step relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Outpoint {
    /// Hash of the transaction holding the output
    pub hash: Hash,
    /// Position of the output in that transaction
    pub index: u32,
}

impl Outpoint {
    pub const fn new(hash: Hash, index: u32) -> Self {
        Outpoint { hash, index }
    }

    /// Node wire form: 32-byte hash followed by a one-byte index
    pub fn from_raw(raw: &[u8]) -> Result<Self, CoreError> {
        if raw.len() != 33 {
            return Err(CoreError::Deserialization(format!(
                "outpoint must be 33 bytes, got {}",
                raw.len()
            )));
        }
        let hash = Hash::from_slice(&raw[..32]).ok_or(CoreError::InvalidHashLength)?;
        Ok(Outpoint::new(hash, u32::from(raw[32])))
    }

    /// Inverse of [`Outpoint::from_raw`]; fails if the index does not fit a byte
    pub fn to_raw(&self) -> Result<Vec<u8>, CoreError> {
        let index = u8::try_from(self.index).map_err(|_| {
            CoreError::Serialization(format!("outpoint index {} exceeds one byte", self.index))
        })?;
        let mut raw = Vec::with_capacity(33);
        raw.extend_from_slice(self.hash.as_bytes());
        raw.push(index);
        Ok(raw)
    }
}

impl fmt::Display for Outpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.hash, self.index)
    }
}
