use plasma_core::{Address, Color, TokenId, UnspentRecord, Value};
use tracing::debug;

use crate::error::UtxoError;
use crate::filter::owned_by;

/// Pick unspent records of `owner` under `color` covering `amount`.
///
/// A single record worth exactly `amount` wins outright. Otherwise records
/// are taken first-fit in the order given until the running sum reaches
/// `amount`; callers wanting reproducible picks should
/// [`sort_by_outpoint`](crate::filter::sort_by_outpoint) first.
pub fn select_for_amount<'a>(
    unspent: &'a [UnspentRecord],
    owner: &Address,
    amount: &Value,
    color: Color,
) -> Result<Vec<&'a UnspentRecord>, UtxoError> {
    if amount.is_zero() {
        return Ok(Vec::new());
    }

    let candidates: Vec<&UnspentRecord> = owned_by(unspent, owner, color).collect();

    if let Some(exact) = candidates.iter().find(|u| &u.output.value == amount) {
        debug!("Exact match {} for {} of color {}", exact.outpoint, amount, color);
        return Ok(vec![*exact]);
    }

    let mut selected = Vec::new();
    let mut sum = Value::zero();
    for candidate in &candidates {
        selected.push(*candidate);
        sum += &candidate.output.value;
        if &sum >= amount {
            debug!(
                "Selected {} inputs totalling {} for {} of color {}",
                selected.len(),
                sum,
                amount,
                color
            );
            return Ok(selected);
        }
    }

    Err(UtxoError::InsufficientFunds {
        color,
        have: sum,
        need: amount.clone(),
    })
}

/// Find the record of `owner` under `color` carrying `token_id`.
///
/// Token ids are expected to be unique per color; the first match wins.
pub fn select_for_token_id<'a>(
    unspent: &'a [UnspentRecord],
    owner: &Address,
    token_id: &TokenId,
    color: Color,
) -> Result<&'a UnspentRecord, UtxoError> {
    owned_by(unspent, owner, color)
        .find(|u| &u.output.value == token_id)
        .ok_or_else(|| UtxoError::TokenNotFound {
            color,
            token_id: token_id.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use plasma_core::{hash_blake3, Outpoint, Output};

    fn record(tag: &[u8], value: u64, owner: &str, color: u32) -> UnspentRecord {
        UnspentRecord::new(
            Outpoint::new(hash_blake3(tag), 0),
            Output::new(value, owner, Color(color)),
        )
    }

    fn owner() -> Address {
        Address::new("0xA")
    }

    #[test]
    fn test_greedy_takes_in_order() {
        let unspent = vec![record(b"1", 10, "0xA", 1), record(b"2", 5, "0xA", 1)];
        let selected = select_for_amount(&unspent, &owner(), &Value::from(12), Color(1)).unwrap();
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].outpoint, unspent[0].outpoint);
        assert_eq!(selected[1].outpoint, unspent[1].outpoint);
    }

    #[test]
    fn test_exact_match_preferred() {
        let unspent = vec![
            record(b"1", 4, "0xA", 1),
            record(b"2", 9, "0xA", 1),
            record(b"3", 12, "0xA", 1),
        ];
        let selected = select_for_amount(&unspent, &owner(), &Value::from(12), Color(1)).unwrap();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].outpoint, unspent[2].outpoint);
    }

    #[test]
    fn test_stops_once_covered() {
        let unspent = vec![
            record(b"1", 6, "0xA", 1),
            record(b"2", 6, "0xA", 1),
            record(b"3", 6, "0xA", 1),
        ];
        let selected = select_for_amount(&unspent, &owner(), &Value::from(7), Color(1)).unwrap();
        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn test_ignores_other_colors_and_owners() {
        let unspent = vec![
            record(b"1", 100, "0xB", 1),
            record(b"2", 100, "0xA", 2),
            record(b"3", 3, "0xa", 1),
        ];
        let err = select_for_amount(&unspent, &owner(), &Value::from(10), Color(1)).unwrap_err();
        match err {
            UtxoError::InsufficientFunds { have, need, color } => {
                assert_eq!(have, Value::from(3));
                assert_eq!(need, Value::from(10));
                assert_eq!(color, Color(1));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_candidates_fail() {
        let err = select_for_amount(&[], &owner(), &Value::from(1), Color(1)).unwrap_err();
        assert!(matches!(err, UtxoError::InsufficientFunds { .. }));
    }

    #[test]
    fn test_zero_amount_selects_nothing() {
        let unspent = vec![record(b"1", 0, "0xA", 1), record(b"2", 5, "0xA", 1)];
        let selected = select_for_amount(&unspent, &owner(), &Value::zero(), Color(1)).unwrap();
        assert!(selected.is_empty());
    }

    #[test]
    fn test_selection_covers_amount_for_every_reachable_target() {
        let unspent = vec![
            record(b"1", 3, "0xA", 1),
            record(b"2", 8, "0xA", 1),
            record(b"3", 1, "0xA", 1),
            record(b"4", 20, "0xA", 1),
        ];
        for target in 1..=32u64 {
            let amount = Value::from(target);
            let selected = select_for_amount(&unspent, &owner(), &amount, Color(1)).unwrap();
            let total: Value = selected.iter().map(|u| &u.output.value).sum();
            assert!(total >= amount, "target {target}");
            if let Some(exact) = unspent.iter().find(|u| u.output.value == amount) {
                assert_eq!(selected, vec![exact]);
            }
        }
        assert!(select_for_amount(&unspent, &owner(), &Value::from(33), Color(1)).is_err());
    }

    #[test]
    fn test_token_lookup() {
        let unspent = vec![
            record(b"1", 1001, "0xA", 49153),
            record(b"2", 1002, "0xA", 49153),
            record(b"3", 1002, "0xB", 49153),
        ];
        let found =
            select_for_token_id(&unspent, &owner(), &Value::from(1002), Color(49153)).unwrap();
        assert_eq!(found.outpoint, unspent[1].outpoint);

        let again =
            select_for_token_id(&unspent, &owner(), &Value::from(1002), Color(49153)).unwrap();
        assert_eq!(found, again);
    }

    #[test]
    fn test_token_not_found() {
        let unspent = vec![record(b"1", 1001, "0xB", 49153)];
        let err = select_for_token_id(&unspent, &owner(), &Value::from(1001), Color(49153))
            .unwrap_err();
        assert!(matches!(err, UtxoError::TokenNotFound { .. }));
    }
}
