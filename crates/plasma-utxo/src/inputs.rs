use plasma_core::{
    Address, Color, HexBytes, Input, StateSpend, TokenId, UnspentRecord, STATE_SPEND_GAS_PRICE,
};
use tracing::debug;

use crate::error::UtxoError;
use crate::selector::select_for_token_id;

/// Plain spends for the selected records, in selection order
pub fn build_inputs(selected: &[&UnspentRecord]) -> Vec<Input> {
    selected.iter().map(|u| Input::new(u.outpoint)).collect()
}

/// Spend of the storage-bearing token `token_id` that executes `policy`
/// with `recipient` as its message data.
pub fn build_state_input(
    unspent: &[UnspentRecord],
    owner: &Address,
    token_id: &TokenId,
    color: Color,
    recipient: &Address,
    policy: HexBytes,
) -> Result<Input, UtxoError> {
    let record = select_for_token_id(unspent, owner, token_id, color)?;
    let msg_data = HexBytes(recipient.to_payload());

    debug!("Building state spend of token {} at {}", token_id, record.outpoint);

    Ok(Input::with_state(
        record.outpoint,
        StateSpend {
            gas_price: STATE_SPEND_GAS_PRICE,
            msg_data,
            script: policy,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use plasma_core::{hash_blake3, Outpoint, Output, Value};

    const OWNER: &str = "0x8ab21c65041778dfc7ec7995f9cdef3d5221a5ad";
    const DEVICE: &str = "0x4436373705394267350db2c06613990d34621d69";

    fn nst(tag: &[u8], token: u64, owner: &str) -> UnspentRecord {
        UnspentRecord::new(
            Outpoint::new(hash_blake3(tag), 0),
            Output::new(token, owner, Color(49153)),
        )
    }

    #[test]
    fn test_build_inputs_keeps_order() {
        let a = nst(b"a", 1, OWNER);
        let b = nst(b"b", 2, OWNER);
        let inputs = build_inputs(&[&b, &a]);
        assert_eq!(inputs[0].prevout, b.outpoint);
        assert_eq!(inputs[1].prevout, a.outpoint);
        assert!(inputs.iter().all(|i| !i.is_state_spend()));
    }

    #[test]
    fn test_state_input_carries_payload() {
        let unspent = vec![nst(b"a", 77, OWNER), nst(b"b", 78, OWNER)];
        let input = build_state_input(
            &unspent,
            &Address::new(OWNER),
            &Value::from(78),
            Color(49153),
            &Address::new(DEVICE),
            HexBytes(vec![0x07]),
        )
        .unwrap();

        assert_eq!(input.prevout, unspent[1].outpoint);
        let spend = input.spend.as_ref().unwrap();
        assert_eq!(spend.gas_price, STATE_SPEND_GAS_PRICE);
        assert_eq!(spend.msg_data.to_hex(), DEVICE);
        assert_eq!(spend.script, HexBytes(vec![0x07]));
    }

    #[test]
    fn test_state_input_short_recipient() {
        let unspent = vec![nst(b"a", 77, OWNER)];
        let input = build_state_input(
            &unspent,
            &Address::new(OWNER),
            &Value::from(77),
            Color(49153),
            &Address::new("0xB"),
            HexBytes::default(),
        )
        .unwrap();
        assert_eq!(input.msg_data(), Some(&HexBytes(vec![0x0b])));
    }

    #[test]
    fn test_state_input_missing_token() {
        let unspent = vec![nst(b"a", 77, OWNER)];
        let err = build_state_input(
            &unspent,
            &Address::new(OWNER),
            &Value::from(99),
            Color(49153),
            &Address::new(DEVICE),
            HexBytes::default(),
        )
        .unwrap_err();
        assert!(matches!(err, UtxoError::TokenNotFound { .. }));
    }
}
