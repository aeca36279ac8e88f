use plasma_core::{Address, Color, HexBytes, Input, Output, TokenId, Transaction, UnspentRecord, Value};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::UtxoError;
use crate::inputs::{build_inputs, build_state_input};
use crate::outputs::{build_state_outputs, build_transfer_outputs};
use crate::selector::select_for_amount;

/// Fungible transfer of `amount` of `color` from `from` to `to`
#[derive(Debug, Clone)]
pub struct TransferRequest {
    pub from: Address,
    pub to: Address,
    pub amount: Value,
    pub color: Color,
}

/// Hand-over of a storage-bearing token with a policy call
#[derive(Debug, Clone)]
pub struct StateTransferRequest {
    /// Current holder of the token
    pub owner: Address,
    pub token_id: TokenId,
    pub color: Color,
    /// Passed to the policy as message data
    pub recipient: Address,
    pub policy: HexBytes,
    /// Owner of the produced output
    pub new_owner: Address,
}

/// Unsigned inputs and outputs ready for assembly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferPlan {
    pub inputs: Vec<Input>,
    pub outputs: Vec<Output>,
}

impl TransferPlan {
    pub fn into_transaction(self) -> Transaction {
        Transaction::new(self.inputs, self.outputs)
    }
}

/// Select inputs for `request` and build its recipient and change outputs
///
/// A zero amount selects nothing and is rejected with
/// [`UtxoError::EmptyInputSet`].
pub fn plan_transfer(
    unspent: &[UnspentRecord],
    request: &TransferRequest,
) -> Result<TransferPlan, UtxoError> {
    let selected = select_for_amount(unspent, &request.from, &request.amount, request.color)?;
    let inputs = build_inputs(&selected);
    let outputs = build_transfer_outputs(
        unspent,
        &inputs,
        &request.from,
        &request.to,
        &request.amount,
        request.color,
    )?;

    info!(
        "Planned transfer of {} (color {}) from {} to {}: {} inputs, {} outputs",
        request.amount,
        request.color,
        request.from,
        request.to,
        inputs.len(),
        outputs.len()
    );

    Ok(TransferPlan { inputs, outputs })
}

/// Build the single state spend and its pending-root output
pub fn plan_state_transfer(
    unspent: &[UnspentRecord],
    request: &StateTransferRequest,
) -> Result<TransferPlan, UtxoError> {
    let input = build_state_input(
        unspent,
        &request.owner,
        &request.token_id,
        request.color,
        &request.recipient,
        request.policy.clone(),
    )?;
    let inputs = vec![input];
    let outputs =
        build_state_outputs(&inputs, &request.new_owner, &request.token_id, request.color)?;

    info!(
        "Planned state transfer of token {} (color {}) to {}",
        request.token_id, request.color, request.new_owner
    );

    Ok(TransferPlan { inputs, outputs })
}
