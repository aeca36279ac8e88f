use serde::{Deserialize, Serialize};

use crate::types::outpoint::Outpoint;
use crate::types::output::Output;

/// An output not yet consumed, as reported by the node for one holder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnspentRecord {
    pub output: Output,
    pub outpoint: Outpoint,
}

impl UnspentRecord {
    pub fn new(outpoint: Outpoint, output: Output) -> Self {
        UnspentRecord { output, outpoint }
    }
}
