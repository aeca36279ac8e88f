pub mod hash;

pub use hash::{hash_blake3, Hash};
