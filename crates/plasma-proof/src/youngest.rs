use futures_util::future::try_join_all;
use plasma_client::TransactionSource;
use plasma_core::{Transaction, TransactionRecord};
use tracing::debug;

use crate::error::ProofError;

/// The parent transaction mined most recently, with the input spending it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YoungestInput {
    pub index: usize,
    pub transaction: TransactionRecord,
}

/// Index and record with the strictly greatest block number; ties keep the
/// earliest. Unconfirmed parents count as height zero.
pub fn youngest_of(parents: &[TransactionRecord]) -> Option<(usize, &TransactionRecord)> {
    let mut iter = parents.iter().enumerate();
    let first = iter.next()?;
    Some(iter.fold(first, |best, candidate| {
        if candidate.1.height() > best.1.height() {
            candidate
        } else {
            best
        }
    }))
}

/// Fetch every parent of `tx` concurrently, then pick the youngest.
///
/// Any failed fetch fails the whole resolution.
pub async fn resolve_youngest_input<S>(source: &S, tx: &Transaction) -> Result<YoungestInput, ProofError>
where
    S: TransactionSource + ?Sized,
{
    if tx.inputs.is_empty() {
        return Err(ProofError::EmptyInputSet);
    }

    debug!("Fetching {} parent transactions", tx.inputs.len());

    let parents = try_join_all(
        tx.inputs
            .iter()
            .map(|input| source.get_transaction(&input.prevout.hash)),
    )
    .await?;

    let (index, youngest) = youngest_of(&parents).ok_or(ProofError::EmptyInputSet)?;

    debug!(
        "Youngest input is #{} spending {} at height {}",
        index,
        youngest.hash,
        youngest.height()
    );

    Ok(YoungestInput {
        index,
        transaction: youngest.clone(),
    })
}
