use async_trait::async_trait;
use plasma_core::{Address, PeriodRange, Proof, Transaction, TransactionRecord};

use crate::error::ProofError;

/// A committed batch of blocks able to prove inclusion of its transactions
pub trait Period: Send {
    /// Attach the identity of the validator that submitted the period
    fn set_validator_data(&mut self, slot_id: u32, validator: Address);

    /// Inclusion proof of `tx` within this period
    fn proof(&self, tx: &Transaction) -> Result<Proof, ProofError>;
}

/// Lookup of periods from the chain
#[async_trait]
pub trait PeriodSource: Send + Sync {
    type Period: Period;

    /// Load the period spanning `range`
    async fn period_for_range(&self, range: PeriodRange) -> Result<Self::Period, ProofError>;

    /// Load the period containing the block `tx` was included in
    async fn period_for_transaction(
        &self,
        tx: &TransactionRecord,
    ) -> Result<Self::Period, ProofError> {
        if !tx.is_confirmed() {
            return Err(ProofError::Unconfirmed(tx.hash));
        }
        self.period_for_range(PeriodRange::containing(tx.height()))
            .await
    }
}
