multiversx_sc::imports!();

use crate::auto_voting::MAX_PREFERENCES;
use crate::errors::*;
use crate::math;
use crate::types::Round;

/// Per-recipient vote tally of a round, plus the manual voting path for
/// participants who are not auto-voting.
#[multiversx_sc::module]
pub trait AllocationModule:
    crate::rounds::RoundsModule
    + crate::facts::FactsModule
    + crate::auto_voting::AutoVotingModule
    + crate::voter_rewards::VoterRewardsModule
{
    #[endpoint(castVote)]
    fn cast_vote(&self, round_id: u64, apps: MultiValueEncoded<u64>) {
        let participant = self.blockchain().get_caller();
        let round = self.require_active_round(round_id);
        require!(
            !self.is_effective_in_round(&participant, round_id),
            ERR_AUTO_VOTER_CANNOT_VOTE
        );
        require!(!self.has_voted(round_id, &participant).get(), ERR_ALREADY_VOTED);

        let mut recipients: ManagedVec<u64> = ManagedVec::new();
        for app_id in apps.into_iter() {
            recipients.push(app_id);
        }
        require!(!recipients.is_empty(), ERR_EMPTY_PREFERENCES);
        require!(recipients.len() <= MAX_PREFERENCES, ERR_TOO_MANY_PREFERENCES);
        for app_id in recipients.iter() {
            require!(self.is_eligible_for_vote(app_id, round_id), ERR_RECIPIENT_NOT_ELIGIBLE);
        }

        require!(self.is_person_now(&participant), ERR_PERSONHOOD_CHECK_FAILED);
        let power = self.voting_power_of(&participant);
        require!(self.has_min_voting_power(&power), ERR_INSUFFICIENT_VOTING_POWER);

        self.distribute_votes(&round, &participant, &recipients, &power);
        self.vote_cast_event(round_id, &participant, &participant, false, &power);
    }

    /// Preferred recipients still eligible in `round`, in preference order.
    fn eligible_preferences(&self, participant: &ManagedAddress, round: &Round) -> ManagedVec<u64> {
        let mut eligible: ManagedVec<u64> = ManagedVec::new();
        for app_id in self.preferences_of(participant).iter() {
            if self.is_eligible_for_vote(app_id, round.id) {
                eligible.push(app_id);
            }
        }
        eligible
    }

    /// Splits `power` evenly across `recipients`; the first one also gets
    /// the division remainder, so the tally grows by exactly `power`.
    fn distribute_votes(
        &self,
        round: &Round,
        participant: &ManagedAddress,
        recipients: &ManagedVec<u64>,
        power: &BigUint,
    ) {
        let (first_share, other_share) = math::split_votes(power, recipients.len() as u64);
        for (index, app_id) in recipients.iter().enumerate() {
            let share = if index == 0 { &first_share } else { &other_share };
            self.app_votes(round.id, app_id).update(|votes| *votes += share);
        }

        self.round_total_votes(round.id).update(|total| *total += power);
        self.has_voted(round.id, participant).set(true);
        self.record_voter_weight(round.id, participant, power);
    }

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] round_id: u64,
        #[indexed] participant: &ManagedAddress,
        #[indexed] performer: &ManagedAddress,
        #[indexed] delegated: bool,
        power: &BigUint,
    );

    #[view(getAppVotes)]
    #[storage_mapper("appVotes")]
    fn app_votes(&self, round_id: u64, app_id: u64) -> SingleValueMapper<BigUint>;

    #[view(getRoundTotalVotes)]
    #[storage_mapper("roundTotalVotes")]
    fn round_total_votes(&self, round_id: u64) -> SingleValueMapper<BigUint>;

    #[view(hasVotedInRound)]
    #[storage_mapper("hasVoted")]
    fn has_voted(&self, round_id: u64, participant: &ManagedAddress) -> SingleValueMapper<bool>;
}
