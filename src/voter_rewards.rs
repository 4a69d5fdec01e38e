multiversx_sc::imports!();

use crate::errors::*;

/// Per-round voter rewards: the owner funds a round's emission, each cast
/// vote earns a weight equal to the voting power spent, and once the round
/// has ended every voter may claim `emission * weight / total_weight`.
#[multiversx_sc::module]
pub trait VoterRewardsModule: crate::rounds::RoundsModule {
    #[only_owner]
    #[payable("EGLD")]
    #[endpoint(fundRound)]
    fn fund_round(&self, round_id: u64) {
        self.require_round(round_id);
        let payment = self.call_value().egld_value().clone_value();
        require!(payment > 0u64, ERR_ZERO_PAYMENT);

        self.round_emission(round_id).update(|emission| *emission += &payment);
        self.round_funded_event(round_id, &payment);
    }

    #[view(pendingReward)]
    fn pending_reward(&self, round_id: u64, participant: &ManagedAddress) -> BigUint {
        if self.rounds(round_id).is_empty() || self.reward_paid(round_id, participant).get() {
            return BigUint::zero();
        }
        if !self.has_ended(&self.rounds(round_id).get()) {
            return BigUint::zero();
        }

        let total_weight = self.total_voter_weight(round_id).get();
        if total_weight == 0u64 {
            return BigUint::zero();
        }
        let weight = self.voter_weight(round_id, participant).get();
        (&self.round_emission(round_id).get() * &weight) / &total_weight
    }

    fn record_voter_weight(&self, round_id: u64, participant: &ManagedAddress, weight: &BigUint) {
        self.voter_weight(round_id, participant).set(weight);
        self.total_voter_weight(round_id).update(|total| *total += weight);
    }

    fn mark_reward_paid(&self, round_id: u64, participant: &ManagedAddress) {
        self.reward_paid(round_id, participant).set(true);
    }

    #[event("roundFunded")]
    fn round_funded_event(&self, #[indexed] round_id: u64, amount: &BigUint);

    #[view(getRoundEmission)]
    #[storage_mapper("roundEmission")]
    fn round_emission(&self, round_id: u64) -> SingleValueMapper<BigUint>;

    #[view(getVoterWeight)]
    #[storage_mapper("voterWeight")]
    fn voter_weight(&self, round_id: u64, participant: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(getTotalVoterWeight)]
    #[storage_mapper("totalVoterWeight")]
    fn total_voter_weight(&self, round_id: u64) -> SingleValueMapper<BigUint>;

    #[view(isRewardClaimed)]
    #[storage_mapper("rewardPaid")]
    fn reward_paid(&self, round_id: u64, participant: &ManagedAddress) -> SingleValueMapper<bool>;
}
