use multiversx_sc::{api::ManagedTypeApi, types::BigUint};

/// Percentage fee with an absolute ceiling:
/// `min(floor(raw * fee_percent / fee_denominator), fee_cap)`.
///
/// Truncation favours the participant, so `raw - fee` is never short of
/// what the exact percentage would leave.
pub fn compute_fee<M: ManagedTypeApi>(
    raw_reward: &BigUint<M>,
    fee_percent: u64,
    fee_denominator: u64,
    fee_cap: &BigUint<M>,
) -> BigUint<M> {
    if fee_denominator == 0 {
        return BigUint::zero();
    }
    let fee = (raw_reward * fee_percent) / fee_denominator;
    if fee > *fee_cap {
        fee_cap.clone()
    } else {
        fee
    }
}

/// Splits `balance` across `count` recipients.
///
/// Returns `(first_share, other_share)`: every recipient gets
/// `floor(balance / count)` and the first one also takes the remainder,
/// so `first_share + (count - 1) * other_share == balance`.
pub fn split_votes<M: ManagedTypeApi>(balance: &BigUint<M>, count: u64) -> (BigUint<M>, BigUint<M>) {
    if count == 0 {
        return (BigUint::zero(), BigUint::zero());
    }
    let other_share = balance / count;
    let remainder = balance - &(&other_share * count);
    let first_share = &other_share + &remainder;
    (first_share, other_share)
}

/// `total * part / whole`, floored. Zero when `whole` is zero.
pub fn proportional_share<M: ManagedTypeApi>(total: &BigUint<M>, part: u64, whole: u64) -> BigUint<M> {
    if whole == 0 || part == 0 {
        return BigUint::zero();
    }
    (total * part) / whole
}
