use anyhow::Result;
use plasma_client::PlasmaClient;
use plasma_core::{Address, Color, Hash, UnspentRecord, Value};
use plasma_proof::{resolve_youngest_input, YoungestInput};
use plasma_utxo::{
    balance_of, plan_state_transfer, plan_transfer, sort_by_outpoint, StateTransferRequest,
    TransferPlan, TransferRequest,
};
use tracing::debug;

use crate::config::WalletConfig;

/// Node-backed front end over selection, building and input resolution
pub struct Wallet<C> {
    client: C,
    config: WalletConfig,
}

impl<C: PlasmaClient> Wallet<C> {
    pub fn new(client: C, config: WalletConfig) -> Self {
        Wallet { client, config }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// `color`, or the configured default
    pub fn color_or_default(&self, color: Option<u32>) -> Color {
        Color(color.unwrap_or(self.config.default_color))
    }

    /// Unspent outputs of `owner`, sorted by outpoint when configured
    pub async fn unspent(&self, owner: &Address) -> Result<Vec<UnspentRecord>> {
        let mut unspent = self.client.get_unspent(owner).await?;
        if self.config.sort_unspent {
            sort_by_outpoint(&mut unspent);
        }
        debug!("Fetched {} unspent outputs for {}", unspent.len(), owner);
        Ok(unspent)
    }

    pub async fn balance(&self, owner: &Address, color: Color) -> Result<Value> {
        let unspent = self.unspent(owner).await?;
        Ok(balance_of(&unspent, owner, color))
    }

    pub async fn transfer(&self, request: &TransferRequest) -> Result<TransferPlan> {
        let unspent = self.unspent(&request.from).await?;
        Ok(plan_transfer(&unspent, request)?)
    }

    pub async fn state_transfer(&self, request: &StateTransferRequest) -> Result<TransferPlan> {
        let unspent = self.unspent(&request.owner).await?;
        Ok(plan_state_transfer(&unspent, request)?)
    }

    /// Fetch `tx_hash` and resolve its youngest input
    pub async fn youngest(&self, tx_hash: &Hash) -> Result<YoungestInput> {
        let record = self.client.get_transaction(tx_hash).await?;
        let tx = record.decode()?;
        Ok(resolve_youngest_input(&self.client, &tx).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plasma_client::MemoryClient;
    use plasma_core::{hash_blake3, Input, Outpoint, Output, Transaction, TransactionRecord};
    use plasma_utxo::UtxoError;

    async fn funded_wallet() -> Wallet<MemoryClient> {
        let client = MemoryClient::new();
        let records = [
            (b"z".as_slice(), 10u64, 1u32),
            (b"y".as_slice(), 5, 1),
            (b"x".as_slice(), 100, 2),
        ];
        for (tag, value, color) in records {
            client
                .insert_unspent(UnspentRecord::new(
                    Outpoint::new(hash_blake3(tag), 0),
                    Output::new(value, "0xA", Color(color)),
                ))
                .await;
        }
        Wallet::new(client, WalletConfig::default())
    }

    #[tokio::test]
    async fn test_balance_per_color() {
        let wallet = funded_wallet().await;
        let owner = Address::new("0xA");
        assert_eq!(wallet.balance(&owner, Color(1)).await.unwrap(), Value::from(15));
        assert_eq!(wallet.balance(&owner, Color(2)).await.unwrap(), Value::from(100));
    }

    #[tokio::test]
    async fn test_transfer_plan_conserves_value() {
        let wallet = funded_wallet().await;
        let plan = wallet
            .transfer(&TransferRequest {
                from: Address::new("0xA"),
                to: Address::new("0xB"),
                amount: Value::from(12),
                color: wallet.color_or_default(Some(1)),
            })
            .await
            .unwrap();

        assert_eq!(plan.inputs.len(), 2);
        let produced: Value = plan.outputs.iter().map(|o| &o.value).sum();
        assert_eq!(produced, Value::from(15));
    }

    #[tokio::test]
    async fn test_transfer_insufficient_is_typed() {
        let wallet = funded_wallet().await;
        let err = wallet
            .transfer(&TransferRequest {
                from: Address::new("0xA"),
                to: Address::new("0xB"),
                amount: Value::from(16),
                color: Color(1),
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<UtxoError>(),
            Some(UtxoError::InsufficientFunds { .. })
        ));
    }

    #[tokio::test]
    async fn test_youngest_via_node() {
        let wallet = funded_wallet().await;
        let parent = TransactionRecord::from_transaction(
            &Transaction::new(vec![], vec![Output::new(3u64, "0xa", Color(0))]),
            Some(33),
        )
        .unwrap();
        let child_tx = Transaction::new(vec![Input::new(Outpoint::new(parent.hash, 0))], vec![]);
        let child = TransactionRecord::from_transaction(&child_tx, Some(40)).unwrap();
        wallet.client().insert_transaction(parent.clone()).await;
        wallet.client().insert_transaction(child.clone()).await;

        let youngest = wallet.youngest(&child.hash).await.unwrap();
        assert_eq!(youngest.index, 0);
        assert_eq!(youngest.transaction, parent);
    }
}
