multiversx_sc::imports!();

use crate::errors::*;
use crate::math;

pub const FEE_DENOMINATOR: u64 = 100;

#[multiversx_sc::module]
pub trait FeesModule {
    #[only_owner]
    #[endpoint(setFeePercent)]
    fn set_fee_percent(&self, fee_percent: u64) {
        require!(fee_percent <= FEE_DENOMINATOR, ERR_INVALID_FEE_PERCENT);
        self.fee_percent().set(fee_percent);
        self.fee_config_updated_event(fee_percent, &self.fee_cap().get());
    }

    #[only_owner]
    #[endpoint(setFeeCap)]
    fn set_fee_cap(&self, fee_cap: BigUint) {
        self.fee_cap().set(&fee_cap);
        self.fee_config_updated_event(self.fee_percent().get(), &fee_cap);
    }

    /// Fee withheld from an auto-voting participant's reward of `raw_reward`.
    #[view(getRelayerFee)]
    fn relayer_fee(&self, raw_reward: &BigUint) -> BigUint {
        math::compute_fee(
            raw_reward,
            self.fee_percent().get(),
            FEE_DENOMINATOR,
            &self.fee_cap().get(),
        )
    }

    #[event("feeConfigUpdated")]
    fn fee_config_updated_event(&self, #[indexed] fee_percent: u64, fee_cap: &BigUint);

    #[view(getFeePercent)]
    #[storage_mapper("feePercent")]
    fn fee_percent(&self) -> SingleValueMapper<u64>;

    #[view(getFeeCap)]
    #[storage_mapper("feeCap")]
    fn fee_cap(&self) -> SingleValueMapper<BigUint>;
}
