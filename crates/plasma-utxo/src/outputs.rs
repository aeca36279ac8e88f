use std::collections::HashSet;

use plasma_core::{
    Address, Color, Input, Outpoint, Output, PendingExecution, StorageRoot, TokenId,
    UnspentRecord, Value,
};
use tracing::debug;

use crate::error::UtxoError;

/// Recipient output of `amount` plus, when the consumed records are worth
/// more, a change output back to `from`.
///
/// Only records of `color` referenced by `inputs` count towards the consumed
/// total. Inputs spanning several owners or colors need one call per pair.
pub fn build_transfer_outputs(
    unspent: &[UnspentRecord],
    inputs: &[Input],
    from: &Address,
    to: &Address,
    amount: &Value,
    color: Color,
) -> Result<Vec<Output>, UtxoError> {
    if unspent.is_empty() || inputs.is_empty() {
        return Err(UtxoError::EmptyInputSet);
    }

    let spent: HashSet<Outpoint> = inputs.iter().map(|i| i.prevout).collect();
    let mut counted: HashSet<Outpoint> = HashSet::with_capacity(spent.len());
    let sum: Value = unspent
        .iter()
        .filter(|u| u.output.color == color && spent.contains(&u.outpoint))
        .filter(|u| counted.insert(u.outpoint))
        .map(|u| &u.output.value)
        .sum();

    let change = sum
        .checked_sub(amount)
        .ok_or_else(|| UtxoError::InsufficientFunds {
            color,
            have: sum.clone(),
            need: amount.clone(),
        })?;

    let mut outputs = vec![Output::new(amount.clone(), to.clone(), color)];
    if !change.is_zero() {
        debug!("Returning change {} of color {} to {}", change, color, from);
        outputs.push(Output::new(change, from.clone(), color));
    }

    Ok(outputs)
}

/// One output per input handing `token_id` to `new_owner`.
///
/// The storage root is left as a [`StorageRoot::Pending`] marker holding the
/// input's script and message data; the script is not executed here.
pub fn build_state_outputs(
    inputs: &[Input],
    new_owner: &Address,
    token_id: &TokenId,
    color: Color,
) -> Result<Vec<Output>, UtxoError> {
    if inputs.is_empty() {
        return Err(UtxoError::EmptyInputSet);
    }

    let outputs = inputs
        .iter()
        .map(|input| {
            let pending = PendingExecution::new(
                input.script().cloned().unwrap_or_default(),
                input.msg_data().cloned().unwrap_or_default(),
            );
            Output::new(token_id.clone(), new_owner.clone(), color)
                .with_storage_root(StorageRoot::Pending(pending))
        })
        .collect();

    Ok(outputs)
}
