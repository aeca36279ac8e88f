//! Plasma Client - Typed access to a plasma node
//!
//! The node's JSON-RPC methods are exposed through the [`PlasmaClient`]
//! trait. [`HttpClient`] talks to a live node; [`MemoryClient`] serves a
//! fixed set of records for tests and offline planning.

pub mod error;
pub mod http;
pub mod memory;
pub mod rpc;
pub mod source;

pub use error::ClientError;
pub use http::{ClientConfig, HttpClient};
pub use memory::MemoryClient;
pub use source::{PlasmaClient, TransactionSource};
