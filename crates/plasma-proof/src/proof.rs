use plasma_client::TransactionSource;
use plasma_core::{Address, Proof, Transaction, TransactionRecord};
use tracing::info;

use crate::error::ProofError;
use crate::period::{Period, PeriodSource};
use crate::youngest::{resolve_youngest_input, YoungestInput};

/// Validator identity attached to a period before proving
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorData {
    pub slot_id: u32,
    pub address: Address,
}

/// Proof that `tx` is included in its period.
///
/// Period lookup and proof failures are returned as-is.
pub async fn build_inclusion_proof<P>(
    periods: &P,
    tx: &TransactionRecord,
    validator: &ValidatorData,
) -> Result<Proof, ProofError>
where
    P: PeriodSource + ?Sized,
{
    let mut period = periods.period_for_transaction(tx).await?;
    period.set_validator_data(validator.slot_id, validator.address.clone());

    let decoded = tx.decode()?;
    let proof = period.proof(&decoded)?;

    info!(
        "Built inclusion proof for {} at height {} ({} nodes)",
        tx.hash,
        tx.height(),
        proof.len()
    );

    Ok(proof)
}

/// Resolve the youngest input of `tx` and prove inclusion of its parent
pub async fn prove_youngest_input<S, P>(
    source: &S,
    periods: &P,
    tx: &Transaction,
    validator: &ValidatorData,
) -> Result<(YoungestInput, Proof), ProofError>
where
    S: TransactionSource + ?Sized,
    P: PeriodSource + ?Sized,
{
    let youngest = resolve_youngest_input(source, tx).await?;
    let proof = build_inclusion_proof(periods, &youngest.transaction, validator).await?;
    Ok((youngest, proof))
}
