use serde::{Deserialize, Serialize};

use crate::crypto::Hash;

/// Number of blocks committed together as one period
pub const BLOCKS_PER_PERIOD: u64 = 32;

/// Inclusive block interval of a period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeriodRange {
    pub start: u64,
    pub end: u64,
}

impl PeriodRange {
    /// The period `block_number` falls into
    pub fn containing(block_number: u64) -> Self {
        let period = block_number / BLOCKS_PER_PERIOD;
        PeriodRange {
            start: period * BLOCKS_PER_PERIOD,
            end: (period + 1) * BLOCKS_PER_PERIOD - 1,
        }
    }

    pub fn contains(&self, block_number: u64) -> bool {
        (self.start..=self.end).contains(&block_number)
    }
}

/// Returns `[start, end]` of the period containing `block_number`
pub fn period_block_range(block_number: u64) -> (u64, u64) {
    let range = PeriodRange::containing(block_number);
    (range.start, range.end)
}

/// Inclusion proof produced by the period subsystem
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Proof(pub Vec<Hash>);

impl Proof {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_block_range() {
        assert_eq!(period_block_range(0), (0, 31));
        assert_eq!(period_block_range(31), (0, 31));
        assert_eq!(period_block_range(32), (32, 63));
        assert_eq!(period_block_range(100), (96, 127));
    }

    #[test]
    fn test_range_contains() {
        let range = PeriodRange::containing(40);
        assert!(range.contains(32));
        assert!(range.contains(63));
        assert!(!range.contains(64));
    }
}
