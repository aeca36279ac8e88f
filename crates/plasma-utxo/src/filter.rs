use plasma_core::{Address, Color, UnspentRecord, Value};

/// Records owned by `owner` under `color`, in their given order
pub fn owned_by<'a, 'b>(
    unspent: &'a [UnspentRecord],
    owner: &'b Address,
    color: Color,
) -> impl Iterator<Item = &'a UnspentRecord> + 'b
where
    'a: 'b,
{
    unspent
        .iter()
        .filter(move |u| u.output.is_owned_by(owner.as_str(), color))
}

/// Total selectable value for `owner` under `color`
pub fn balance_of(unspent: &[UnspentRecord], owner: &Address, color: Color) -> Value {
    owned_by(unspent, owner, color).map(|u| &u.output.value).sum()
}

/// Sort by outpoint so that selection is reproducible across node responses.
///
/// Selection itself never reorders its candidates.
pub fn sort_by_outpoint(unspent: &mut [UnspentRecord]) {
    unspent.sort_by(|a, b| a.outpoint.cmp(&b.outpoint));
}
