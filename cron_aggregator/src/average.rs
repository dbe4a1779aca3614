use multiversx_sc::imports::*;

/// Arithmetic mean of `values`, truncated toward zero.
/// Returns `None` for an empty list.
pub fn calculate<M: ManagedTypeApi>(values: &ManagedVec<M, BigUint<M>>) -> Option<BigUint<M>> {
    if values.is_empty() {
        return None;
    }

    let mut sum = BigUint::zero();
    for value in values.iter() {
        sum += &*value;
    }

    Some(sum / BigUint::from(values.len()))
}
