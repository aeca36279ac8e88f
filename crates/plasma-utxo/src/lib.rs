//! Plasma UTXO - Coin selection and transaction building
//!
//! Selects unspent outputs for a fungible transfer or a single
//! non-fungible token, and builds the matching spend inputs and
//! recipient/change outputs. Everything here is synchronous and works on a
//! caller-supplied snapshot of the unspent set.

pub mod error;
pub mod filter;
pub mod inputs;
pub mod outputs;
pub mod planner;
pub mod selector;

pub use error::UtxoError;
pub use filter::{balance_of, owned_by, sort_by_outpoint};
pub use inputs::{build_inputs, build_state_input};
pub use outputs::{build_state_outputs, build_transfer_outputs};
pub use planner::{plan_state_transfer, plan_transfer, StateTransferRequest, TransferPlan, TransferRequest};
pub use selector::{select_for_amount, select_for_token_id};
