//! Plasma Proof - Youngest-input lookup and period inclusion proofs
//!
//! Resolves which parent of a transaction was mined most recently and asks
//! the period subsystem for an inclusion proof anchored at that period.

pub mod error;
pub mod period;
pub mod proof;
pub mod youngest;

pub use error::ProofError;
pub use period::{Period, PeriodSource};
pub use proof::{build_inclusion_proof, prove_youngest_input, ValidatorData};
pub use youngest::{resolve_youngest_input, youngest_of, YoungestInput};
