use serde::{Deserialize, Serialize};

use crate::types::bytes::HexBytes;
use crate::types::outpoint::Outpoint;

/// Gas price attached to state-changing spends until fee estimation exists
pub const STATE_SPEND_GAS_PRICE: u64 = 12345;

/// Extra payload of a spend that executes a policy script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSpend {
    pub gas_price: u64,
    /// Recipient or call payload
    pub msg_data: HexBytes,
    /// Policy to execute
    pub script: HexBytes,
}

/// Spend reference to a prior output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    pub prevout: Outpoint,
    #[serde(default)]
    pub spend: Option<StateSpend>,
}

impl Input {
    /// Plain fungible spend
    pub fn new(prevout: Outpoint) -> Self {
        Input {
            prevout,
            spend: None,
        }
    }

    /// Spend that carries a script, gas price and message data
    pub fn with_state(prevout: Outpoint, spend: StateSpend) -> Self {
        Input {
            prevout,
            spend: Some(spend),
        }
    }

    pub fn is_state_spend(&self) -> bool {
        self.spend.is_some()
    }

    pub fn script(&self) -> Option<&HexBytes> {
        self.spend.as_ref().map(|s| &s.script)
    }

    pub fn msg_data(&self) -> Option<&HexBytes> {
        self.spend.as_ref().map(|s| &s.msg_data)
    }
}

impl From<Outpoint> for Input {
    fn from(prevout: Outpoint) -> Self {
        Input::new(prevout)
    }
}
