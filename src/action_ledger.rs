multiversx_sc::imports!();

use crate::errors::*;
use crate::types::{ActionKind, ActionStatus, Round, RoundLedger};

pub const DEFAULT_VOTE_WEIGHT: u64 = 3;
pub const DEFAULT_CLAIM_WEIGHT: u64 = 1;
/// Keeps `participants * (vote_weight + claim_weight)` far from `u64::MAX`.
pub const MAX_ACTION_WEIGHT: u64 = 1_000;

// ============================================================
// Round action ledger
//
// Every (round, participant, kind) key moves at most once out of Pending,
// to Completed or (votes only) Skipped. Seeding reserves both actions of
// each effective auto-voter; completions and reductions then have to meet
// the reservation exactly so the relayer pool of the round can open.
// ============================================================

#[multiversx_sc::module]
pub trait ActionLedgerModule:
    crate::rounds::RoundsModule
    + crate::facts::FactsModule
    + crate::auto_voting::AutoVotingModule
    + crate::relayers::RelayersModule
{
    #[only_owner]
    #[endpoint(setActionWeights)]
    fn set_action_weights(&self, vote_weight: u64, claim_weight: u64) {
        require!(vote_weight > 0 && claim_weight > 0, ERR_INVALID_ACTION_WEIGHT);
        require!(
            vote_weight <= MAX_ACTION_WEIGHT && claim_weight <= MAX_ACTION_WEIGHT,
            ERR_ACTION_WEIGHT_TOO_HIGH
        );
        self.vote_weight().set(vote_weight);
        self.claim_weight().set(claim_weight);
        self.action_weights_updated_event(vote_weight, claim_weight);
    }

    /// Reserves the expected actions of a freshly opened round. Nothing is
    /// written, and no event fires, when nobody is auto-voting.
    fn seed_round(&self, round: &Round) {
        let participants = self.effective_auto_voters(round);
        if participants == 0 {
            return;
        }

        let ledger = RoundLedger::seeded(
            participants,
            self.vote_weight().get(),
            self.claim_weight().get(),
            self.relayers().len() as u64,
        );
        self.round_ledger(round.id).set(&ledger);
        self.round_totals_set_event(round.id, &ledger);
    }

    fn action_status_of(&self, round_id: u64, participant: &ManagedAddress, kind: ActionKind) -> ActionStatus {
        let status = self.action_status(round_id, participant, kind);
        if status.is_empty() {
            ActionStatus::Pending
        } else {
            status.get()
        }
    }

    fn require_action_pending(&self, round_id: u64, participant: &ManagedAddress, kind: ActionKind) {
        match self.action_status_of(round_id, participant, kind) {
            ActionStatus::Pending => {}
            ActionStatus::Completed => sc_panic!(ERR_ALREADY_COMPLETED),
            ActionStatus::Skipped => sc_panic!(ERR_ALREADY_SKIPPED),
        }
    }

    fn action_weight(&self, round_id: u64, kind: ActionKind) -> u64 {
        if !self.round_ledger(round_id).is_empty() {
            return self.round_ledger(round_id).get().weight_of(kind);
        }
        match kind {
            ActionKind::Vote => self.vote_weight().get(),
            ActionKind::Claim => self.claim_weight().get(),
        }
    }

    fn is_acting_relayer(&self, participant: &ManagedAddress, caller: &ManagedAddress) -> bool {
        caller != participant && self.relayers().contains(caller)
    }

    /// Moves the key to Completed. A relayer gets credited with the action
    /// weight; an action the participant performed itself is credited to
    /// nobody and leaves the expected totals instead.
    fn complete_action(
        &self,
        round_id: u64,
        participant: &ManagedAddress,
        caller: &ManagedAddress,
        kind: ActionKind,
    ) {
        self.action_status(round_id, participant, kind)
            .set(ActionStatus::Completed);

        let weight = self.action_weight(round_id, kind);
        if !self.is_acting_relayer(participant, caller) {
            self.reduce_expected_actions(round_id, weight, 1);
            return;
        }

        let ledger_mapper = self.round_ledger(round_id);
        if ledger_mapper.is_empty() {
            self.ledger_inconsistency_event(round_id);
            return;
        }
        let mut ledger = ledger_mapper.get();
        let headroom = ledger
            .total_expected_weighted_actions
            .saturating_sub(ledger.completed_weighted_actions);
        if weight > headroom {
            self.ledger_inconsistency_event(round_id);
            return;
        }
        ledger.completed_actions += 1;
        ledger.completed_weighted_actions += weight;
        ledger_mapper.set(&ledger);

        self.relayer_completed_actions(round_id, caller).update(|n| *n += 1);
        self.relayer_completed_weighted_actions(round_id, caller)
            .update(|w| *w += weight);
        self.relayer_action_registered_event(round_id, caller, participant, kind, weight);
    }

    /// Moves a vote to Skipped and releases both reserved actions of the
    /// participant for this round.
    fn skip_vote_action(&self, round_id: u64, participant: &ManagedAddress) {
        self.action_status(round_id, participant, ActionKind::Vote)
            .set(ActionStatus::Skipped);

        let weighted = self.action_weight(round_id, ActionKind::Vote)
            + self.action_weight(round_id, ActionKind::Claim);
        self.reduce_expected_actions(round_id, weighted, 2);
    }

    /// Settles a claim with nothing to pay. The key goes to Completed and
    /// its reservation leaves the expected totals, credited to nobody.
    fn release_claim_action(&self, round_id: u64, participant: &ManagedAddress) {
        self.action_status(round_id, participant, ActionKind::Claim)
            .set(ActionStatus::Completed);

        let weight = self.action_weight(round_id, ActionKind::Claim);
        self.reduce_expected_actions(round_id, weight, 1);
    }

    /// Shrinks the expected totals, never below what is already completed.
    /// Hitting that floor means the round was seeded wrong; the cut is
    /// clamped and flagged rather than reverted.
    fn reduce_expected_actions(&self, round_id: u64, weighted: u64, actions: u64) {
        let ledger_mapper = self.round_ledger(round_id);
        if ledger_mapper.is_empty() {
            self.ledger_inconsistency_event(round_id);
            return;
        }

        let mut ledger = ledger_mapper.get();
        let weighted_headroom = ledger
            .total_expected_weighted_actions
            .saturating_sub(ledger.completed_weighted_actions);
        let actions_headroom = ledger
            .total_expected_actions
            .saturating_sub(ledger.completed_actions);
        let weighted_cut = core::cmp::min(weighted, weighted_headroom);
        let actions_cut = core::cmp::min(actions, actions_headroom);
        if weighted_cut < weighted || actions_cut < actions {
            self.ledger_inconsistency_event(round_id);
        }

        ledger.total_expected_weighted_actions -= weighted_cut;
        ledger.total_expected_actions -= actions_cut;
        ledger_mapper.set(&ledger);

        self.expected_actions_reduced_event(round_id, weighted_cut, &ledger);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getRoundLedger)]
    fn get_round_ledger(&self, round_id: u64) -> RoundLedger {
        if self.round_ledger(round_id).is_empty() {
            return RoundLedger::seeded(
                0,
                self.vote_weight().get(),
                self.claim_weight().get(),
                0,
            );
        }
        self.round_ledger(round_id).get()
    }

    #[view(getActionStatus)]
    fn get_action_status(
        &self,
        round_id: u64,
        participant: &ManagedAddress,
        kind: ActionKind,
    ) -> ActionStatus {
        self.action_status_of(round_id, participant, kind)
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("roundTotalsSet")]
    fn round_totals_set_event(&self, #[indexed] round_id: u64, ledger: &RoundLedger);

    #[event("expectedActionsReduced")]
    fn expected_actions_reduced_event(
        &self,
        #[indexed] round_id: u64,
        #[indexed] weighted_reduction: u64,
        ledger: &RoundLedger,
    );

    #[event("relayerActionRegistered")]
    fn relayer_action_registered_event(
        &self,
        #[indexed] round_id: u64,
        #[indexed] relayer: &ManagedAddress,
        #[indexed] participant: &ManagedAddress,
        #[indexed] kind: ActionKind,
        weight: u64,
    );

    #[event("ledgerInconsistency")]
    fn ledger_inconsistency_event(&self, #[indexed] round_id: u64);

    #[event("actionWeightsUpdated")]
    fn action_weights_updated_event(&self, #[indexed] vote_weight: u64, #[indexed] claim_weight: u64);

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getVoteWeight)]
    #[storage_mapper("voteWeight")]
    fn vote_weight(&self) -> SingleValueMapper<u64>;

    #[view(getClaimWeight)]
    #[storage_mapper("claimWeight")]
    fn claim_weight(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("roundLedger")]
    fn round_ledger(&self, round_id: u64) -> SingleValueMapper<RoundLedger>;

    #[storage_mapper("actionStatus")]
    fn action_status(
        &self,
        round_id: u64,
        participant: &ManagedAddress,
        kind: ActionKind,
    ) -> SingleValueMapper<ActionStatus>;

    #[view(getRelayerCompletedActions)]
    #[storage_mapper("relayerCompletedActions")]
    fn relayer_completed_actions(&self, round_id: u64, relayer: &ManagedAddress) -> SingleValueMapper<u64>;

    #[view(getRelayerCompletedWeightedActions)]
    #[storage_mapper("relayerCompletedWeightedActions")]
    fn relayer_completed_weighted_actions(
        &self,
        round_id: u64,
        relayer: &ManagedAddress,
    ) -> SingleValueMapper<u64>;
}
