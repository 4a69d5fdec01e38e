multiversx_sc::imports!();

use crate::errors::*;
use crate::types::{ActionKind, ActionStatus, Round};

// ============================================================
// Delegated vote and claim paths
//
// Both share one shape: authorize the caller for the action kind, make
// sure the (round, participant, kind) key is still Pending, perform the
// kind-specific effect, then move the key to a terminal state.
// ============================================================

#[multiversx_sc::module]
pub trait ActionsModule:
    crate::rounds::RoundsModule
    + crate::facts::FactsModule
    + crate::auto_voting::AutoVotingModule
    + crate::relayers::RelayersModule
    + crate::early_access::EarlyAccessModule
    + crate::fees::FeesModule
    + crate::voter_rewards::VoterRewardsModule
    + crate::allocation::AllocationModule
    + crate::action_ledger::ActionLedgerModule
    + crate::relayer_pool::RelayerPoolModule
{
    // ========================================================
    // ENDPOINT: castVoteOnBehalfOf
    // Splits the participant's voting power over its still-eligible
    // preferences, or skips the participant when there is nothing to vote
    // with.
    // ========================================================

    #[endpoint(castVoteOnBehalfOf)]
    fn cast_vote_on_behalf_of(&self, round_id: u64, participant: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        let round = self.require_active_round(round_id);

        self.require_authorized_for(ActionKind::Vote, &round, &participant, &caller);
        require!(
            self.is_effective_in_round(&participant, round_id),
            ERR_AUTO_VOTING_NOT_ENABLED
        );
        self.require_action_pending(round_id, &participant, ActionKind::Vote);

        let eligible = self.eligible_preferences(&participant, &round);
        let power = self.voting_power_of(&participant);
        if eligible.is_empty()
            || !self.has_min_voting_power(&power)
            || !self.is_person_now(&participant)
        {
            self.skip_vote_action(round_id, &participant);
            self.disable_auto_voting(&participant);
            self.vote_skipped_event(round_id, &participant, &caller);
            return;
        }

        self.distribute_votes(&round, &participant, &eligible, &power);
        self.vote_cast_event(round_id, &participant, &caller, caller != participant, &power);
        self.complete_action(round_id, &participant, &caller, ActionKind::Vote);
    }

    // ========================================================
    // ENDPOINT: claimReward
    // Pays a voter's round reward. For auto-voters the claim is a ledger
    // action and carries the relayer fee; manual voters are paid in full.
    // ========================================================

    #[endpoint(claimReward)]
    fn claim_reward(&self, round_id: u64, participant: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        let round = self.require_ended_round(round_id);

        let auto_voting = self.is_effective_in_round(&participant, round_id);
        if auto_voting {
            self.require_authorized_for(ActionKind::Claim, &round, &participant, &caller);
            self.require_action_pending(round_id, &participant, ActionKind::Claim);
        }
        require!(
            !self.reward_paid(round_id, &participant).get(),
            ERR_REWARD_ALREADY_CLAIMED
        );

        let raw_reward = self.pending_reward(round_id, &participant);
        require!(raw_reward > 0u64, ERR_ZERO_REWARD);

        let fee = if auto_voting {
            self.relayer_fee(&raw_reward)
        } else {
            BigUint::zero()
        };
        let net_reward = &raw_reward - &fee;

        self.mark_reward_paid(round_id, &participant);
        if fee > 0u64 {
            self.deposit_fee(round_id, &fee);
        }
        if net_reward > 0u64 {
            self.send().direct_egld(&participant, &net_reward);
        }
        self.reward_claimed_event(round_id, &participant, &caller, &net_reward);

        if auto_voting {
            self.complete_action(round_id, &participant, &caller, ActionKind::Claim);
        }
    }

    // ========================================================
    // ENDPOINT: skipMissedVote
    // After the deadline, releases the reservation of an auto-voter nobody
    // voted for, so the round's relayer pool does not stay locked.
    // ========================================================

    #[endpoint(skipMissedVote)]
    fn skip_missed_vote(&self, round_id: u64, participant: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        self.require_ended_round(round_id);
        require!(
            self.is_effective_in_round(&participant, round_id),
            ERR_AUTO_VOTING_NOT_ENABLED
        );
        self.require_action_pending(round_id, &participant, ActionKind::Vote);

        self.skip_vote_action(round_id, &participant);
        self.vote_skipped_event(round_id, &participant, &caller);
    }

    // ========================================================
    // ENDPOINT: releaseZeroRewardClaim
    // After the deadline, settles the claim of an auto-voter whose vote
    // went through but whose reward rounds down to nothing. Without it the
    // claim reservation would keep the round's relayer pool closed.
    // ========================================================

    #[endpoint(releaseZeroRewardClaim)]
    fn release_zero_reward_claim(&self, round_id: u64, participant: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        self.require_ended_round(round_id);
        require!(
            self.is_effective_in_round(&participant, round_id),
            ERR_AUTO_VOTING_NOT_ENABLED
        );
        // A skipped vote already released the claim reservation.
        match self.action_status_of(round_id, &participant, ActionKind::Vote) {
            ActionStatus::Completed => {}
            ActionStatus::Pending => sc_panic!(ERR_VOTE_STILL_PENDING),
            ActionStatus::Skipped => sc_panic!(ERR_ALREADY_SKIPPED),
        }
        self.require_action_pending(round_id, &participant, ActionKind::Claim);
        require!(
            self.pending_reward(round_id, &participant) == 0u64,
            ERR_REWARD_STILL_CLAIMABLE
        );

        self.release_claim_action(round_id, &participant);
        self.claim_released_event(round_id, &participant, &caller);
    }

    /// During early access only a registered relayer other than the
    /// participant may act. Afterwards the participant itself may too.
    fn require_authorized_for(
        &self,
        kind: ActionKind,
        round: &Round,
        participant: &ManagedAddress,
        caller: &ManagedAddress,
    ) {
        let early_access = match kind {
            ActionKind::Vote => self.vote_early_access_active(round),
            ActionKind::Claim => self.claim_early_access_active(round),
        };

        if early_access {
            require!(
                self.is_acting_relayer(participant, caller),
                ERR_UNAUTHORIZED_DURING_EARLY_ACCESS
            );
        } else {
            require!(
                caller == participant || self.relayers().contains(caller),
                ERR_UNAUTHORIZED_CALLER
            );
        }
    }

    #[event("voteSkipped")]
    fn vote_skipped_event(
        &self,
        #[indexed] round_id: u64,
        #[indexed] participant: &ManagedAddress,
        #[indexed] caller: &ManagedAddress,
    );

    #[event("claimReleased")]
    fn claim_released_event(
        &self,
        #[indexed] round_id: u64,
        #[indexed] participant: &ManagedAddress,
        #[indexed] caller: &ManagedAddress,
    );

    #[event("rewardClaimed")]
    fn reward_claimed_event(
        &self,
        #[indexed] round_id: u64,
        #[indexed] participant: &ManagedAddress,
        #[indexed] caller: &ManagedAddress,
        net_reward: &BigUint,
    );
}
