multiversx_sc::imports!();

use crate::errors::*;
use crate::types::Round;

#[multiversx_sc::module]
pub trait RoundsModule {
    #[only_owner]
    #[endpoint(setVotingPeriod)]
    fn set_voting_period(&self, voting_period: u64) {
        require!(voting_period > 0, ERR_INVALID_VOTING_PERIOD);
        self.voting_period().set(voting_period);
    }

    /// Opens the next round. The previous one must be past its deadline.
    fn open_round(&self) -> Round {
        let now = self.blockchain().get_block_nonce();
        let current_id = self.current_round_id().get();
        if current_id > 0 {
            let current = self.rounds(current_id).get();
            require!(now > current.deadline, ERR_ROUND_STILL_ACTIVE);
        }

        let round = Round {
            id: current_id + 1,
            snapshot: now,
            deadline: now + self.voting_period().get(),
        };
        self.rounds(round.id).set(&round);
        self.current_round_id().set(round.id);

        self.round_started_event(round.id, round.snapshot, round.deadline);
        round
    }

    fn require_round(&self, round_id: u64) -> Round {
        require!(!self.rounds(round_id).is_empty(), ERR_ROUND_NOT_FOUND);
        self.rounds(round_id).get()
    }

    fn require_active_round(&self, round_id: u64) -> Round {
        let round = self.require_round(round_id);
        require!(self.is_active(&round), ERR_ROUND_NOT_ACTIVE);
        round
    }

    fn require_ended_round(&self, round_id: u64) -> Round {
        let round = self.require_round(round_id);
        require!(self.has_ended(&round), ERR_ROUND_NOT_ENDED);
        round
    }

    fn is_active(&self, round: &Round) -> bool {
        let now = self.blockchain().get_block_nonce();
        round.snapshot <= now && now <= round.deadline
    }

    fn has_ended(&self, round: &Round) -> bool {
        self.blockchain().get_block_nonce() > round.deadline
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getRound)]
    fn get_round(&self, round_id: u64) -> Round {
        self.require_round(round_id)
    }

    #[view(roundSnapshot)]
    fn round_snapshot(&self, round_id: u64) -> u64 {
        self.require_round(round_id).snapshot
    }

    #[view(roundDeadline)]
    fn round_deadline(&self, round_id: u64) -> u64 {
        self.require_round(round_id).deadline
    }

    #[view(isRoundActive)]
    fn is_round_active(&self, round_id: u64) -> bool {
        if self.rounds(round_id).is_empty() {
            return false;
        }
        self.is_active(&self.rounds(round_id).get())
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("roundStarted")]
    fn round_started_event(
        &self,
        #[indexed] round_id: u64,
        #[indexed] snapshot: u64,
        deadline: u64,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getCurrentRoundId)]
    #[storage_mapper("currentRoundId")]
    fn current_round_id(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("rounds")]
    fn rounds(&self, round_id: u64) -> SingleValueMapper<Round>;

    #[view(getVotingPeriod)]
    #[storage_mapper("votingPeriod")]
    fn voting_period(&self) -> SingleValueMapper<u64>;
}
