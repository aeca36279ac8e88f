pub mod address;
pub mod bytes;
pub mod color;
pub mod input;
pub mod outpoint;
pub mod output;
pub mod period;
pub mod transaction;
pub mod unspent;
pub mod value;

pub use address::Address;
pub use bytes::HexBytes;
pub use color::Color;
pub use input::{Input, StateSpend, STATE_SPEND_GAS_PRICE};
pub use outpoint::Outpoint;
pub use output::{Output, PendingExecution, StorageRoot};
pub use period::{period_block_range, PeriodRange, Proof, BLOCKS_PER_PERIOD};
pub use transaction::{Transaction, TransactionRecord};
pub use unspent::UnspentRecord;
pub use value::{TokenId, Value};
