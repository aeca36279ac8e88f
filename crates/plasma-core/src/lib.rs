//! Plasma Core - Ledger types and serialization
//!
//! This crate provides the data model shared by the wallet-side UTXO
//! selection, transaction building and proof crates: outpoints, colored
//! outputs, spend inputs and the transaction shapes returned by a node.

pub mod crypto;
pub mod error;
pub mod serialize;
pub mod types;

pub use crypto::{hash_blake3, Hash};
pub use error::CoreError;
pub use types::*;
