multiversx_sc::imports!();

use crate::errors::*;
use crate::math;

/// Fees withheld from auto-voting claims, shared between the relayers of
/// the round in proportion to their completed weighted actions.
#[multiversx_sc::module]
pub trait RelayerPoolModule:
    crate::rounds::RoundsModule
    + crate::facts::FactsModule
    + crate::auto_voting::AutoVotingModule
    + crate::relayers::RelayersModule
    + crate::action_ledger::ActionLedgerModule
{
    fn deposit_fee(&self, round_id: u64, amount: &BigUint) {
        self.total_deposited(round_id).update(|total| *total += amount);
        self.fee_deposited_event(round_id, amount);
    }

    /// Pays the relayer its share of the round's pool. Anyone may trigger
    /// it; the funds always go to the relayer, registered or not anymore.
    #[endpoint(claimRelayerRewards)]
    fn claim_relayer_rewards(&self, round_id: u64, relayer: ManagedAddress) {
        self.require_round(round_id);
        require!(self.is_reward_claimable(round_id), ERR_REWARDS_NOT_CLAIMABLE);
        require!(
            !self.relayer_rewards_claimed(round_id, &relayer).get(),
            ERR_REWARDS_ALREADY_CLAIMED
        );

        let snapshot = self.payout_snapshot(round_id);
        if snapshot.is_empty() {
            snapshot.set(self.round_ledger(round_id).get().completed_weighted_actions);
        }

        let amount = self.relayer_share(round_id, &relayer);
        require!(amount > 0u64, ERR_NO_RELAYER_REWARDS);

        self.relayer_rewards_claimed(round_id, &relayer).set(true);
        self.total_relayer_claimed(round_id)
            .update(|claimed| *claimed += &amount);

        self.send().direct_egld(&relayer, &amount);
        self.relayer_reward_claimed_event(round_id, &relayer, &amount);
    }

    /// The pool opens once the round has ended and every expected action
    /// has been completed or released.
    #[view(isRewardClaimable)]
    fn is_reward_claimable(&self, round_id: u64) -> bool {
        if self.rounds(round_id).is_empty() || self.round_ledger(round_id).is_empty() {
            return false;
        }
        self.has_ended(&self.rounds(round_id).get())
            && self.round_ledger(round_id).get().is_fully_completed()
    }

    #[view(claimableRewards)]
    fn claimable_rewards(&self, relayer: &ManagedAddress, round_id: u64) -> BigUint {
        if self.relayer_rewards_claimed(round_id, relayer).get() {
            return BigUint::zero();
        }
        self.relayer_share(round_id, relayer)
    }

    /// `deposited * relayer_weighted / denominator`, where the denominator
    /// is frozen by the first claim of the round.
    fn relayer_share(&self, round_id: u64, relayer: &ManagedAddress) -> BigUint {
        if self.round_ledger(round_id).is_empty() {
            return BigUint::zero();
        }
        let completed = self.round_ledger(round_id).get().completed_weighted_actions;
        if completed == 0 {
            return BigUint::zero();
        }

        let denominator = if self.payout_snapshot(round_id).is_empty() {
            completed
        } else {
            self.payout_snapshot(round_id).get()
        };
        math::proportional_share(
            &self.total_deposited(round_id).get(),
            self.relayer_completed_weighted_actions(round_id, relayer).get(),
            denominator,
        )
    }

    #[event("feeDeposited")]
    fn fee_deposited_event(&self, #[indexed] round_id: u64, amount: &BigUint);

    #[event("relayerRewardClaimed")]
    fn relayer_reward_claimed_event(
        &self,
        #[indexed] round_id: u64,
        #[indexed] relayer: &ManagedAddress,
        amount: &BigUint,
    );

    #[view(getTotalDeposited)]
    #[storage_mapper("totalDeposited")]
    fn total_deposited(&self, round_id: u64) -> SingleValueMapper<BigUint>;

    #[view(getTotalRelayerClaimed)]
    #[storage_mapper("totalRelayerClaimed")]
    fn total_relayer_claimed(&self, round_id: u64) -> SingleValueMapper<BigUint>;

    #[view(isRelayerRewardsClaimed)]
    #[storage_mapper("relayerRewardsClaimed")]
    fn relayer_rewards_claimed(&self, round_id: u64, relayer: &ManagedAddress) -> SingleValueMapper<bool>;

    #[storage_mapper("payoutSnapshot")]
    fn payout_snapshot(&self, round_id: u64) -> SingleValueMapper<u64>;
}
