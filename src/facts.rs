multiversx_sc::imports!();

use crate::checkpoints;
use crate::errors::*;

const REASON_VERIFIED: &[u8] = b"verified";
const REASON_NOT_VERIFIED: &[u8] = b"not verified";

/// Recipient registry, personhood and voting power: the facts the engine
/// consumes but does not own. Recipients and personhood are written by the
/// facts oracle (or the owner); voting power is the amount of voting token
/// a participant keeps locked in the contract.
#[multiversx_sc::module]
pub trait FactsModule: crate::rounds::RoundsModule {
    #[only_owner]
    #[endpoint(setFactsOracle)]
    fn set_facts_oracle(&self, oracle: ManagedAddress) {
        self.facts_oracle().set(&oracle);
    }

    #[endpoint(registerApp)]
    fn register_app(&self, app_id: u64) {
        self.require_facts_oracle();
        require!(self.apps().insert(app_id), ERR_APP_ALREADY_REGISTERED);

        let now = self.blockchain().get_block_nonce();
        checkpoints::push(&mut self.app_eligibility_history(app_id), now, true);
        self.app_registered_event(app_id);
    }

    #[endpoint(setAppEligibility)]
    fn set_app_eligibility(&self, app_id: u64, eligible: bool) {
        self.require_facts_oracle();
        require!(self.apps().contains(&app_id), ERR_INVALID_RECIPIENT);

        let now = self.blockchain().get_block_nonce();
        checkpoints::push(&mut self.app_eligibility_history(app_id), now, eligible);
        self.app_eligibility_updated_event(app_id, eligible);
    }

    #[endpoint(setPersonhood)]
    fn set_personhood(&self, participant: ManagedAddress, verified: bool) {
        self.require_facts_oracle();

        let now = self.blockchain().get_block_nonce();
        checkpoints::push(&mut self.personhood_history(&participant), now, verified);
        self.personhood_updated_event(&participant, verified);
    }

    fn require_facts_oracle(&self) {
        let caller = self.blockchain().get_caller();
        let allowed = (!self.facts_oracle().is_empty() && caller == self.facts_oracle().get())
            || caller == self.blockchain().get_owner_address();
        require!(allowed, ERR_NOT_FACTS_ORACLE);
    }

    fn is_recognized_app(&self, app_id: u64) -> bool {
        self.apps().contains(&app_id)
    }

    /// Eligibility as of the round snapshot: changes made in the snapshot
    /// block or later apply from the next round.
    #[view(isEligibleForVote)]
    fn is_eligible_for_vote(&self, app_id: u64, round_id: u64) -> bool {
        if !self.is_recognized_app(app_id) || self.rounds(round_id).is_empty() {
            return false;
        }
        let snapshot = self.rounds(round_id).get().snapshot;
        checkpoints::value_before(&self.app_eligibility_history(app_id), snapshot).unwrap_or(false)
    }

    #[view(isVerifiedPerson)]
    fn is_verified_person(
        &self,
        participant: &ManagedAddress,
        timepoint: u64,
    ) -> MultiValue2<bool, ManagedBuffer> {
        let verified = self.is_person_at(participant, timepoint);
        let reason = if verified {
            ManagedBuffer::from(REASON_VERIFIED)
        } else {
            ManagedBuffer::from(REASON_NOT_VERIFIED)
        };
        (verified, reason).into()
    }

    fn is_person_at(&self, participant: &ManagedAddress, timepoint: u64) -> bool {
        checkpoints::value_at(&self.personhood_history(participant), timepoint).unwrap_or(false)
    }

    fn is_person_now(&self, participant: &ManagedAddress) -> bool {
        self.is_person_at(participant, self.blockchain().get_block_nonce())
    }

    // ========================================================
    // Voting power: voting tokens locked in the contract
    // ========================================================

    #[payable("*")]
    #[endpoint(depositVotingPower)]
    fn deposit_voting_power(&self) {
        let caller = self.blockchain().get_caller();
        let (token_id, amount) = self.call_value().single_fungible_esdt();
        require!(token_id == self.voting_token().get(), ERR_WRONG_VOTING_TOKEN);
        require!(amount > 0u64, ERR_ZERO_PAYMENT);

        self.locked_voting_power(&caller).update(|power| *power += &amount);
        self.voting_power_changed_event(&caller, &self.locked_voting_power(&caller).get());
    }

    /// Unlocks voting tokens. Votes already cast keep the power they were
    /// cast with; the next vote uses what is left.
    #[endpoint(withdrawVotingPower)]
    fn withdraw_voting_power(&self, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        require!(amount > 0u64, ERR_ZERO_PAYMENT);
        let locked = self.locked_voting_power(&caller).get();
        require!(amount <= locked, ERR_INSUFFICIENT_LOCKED_POWER);

        let remaining = &locked - &amount;
        self.locked_voting_power(&caller).set(&remaining);
        self.send()
            .direct_esdt(&caller, &self.voting_token().get(), 0, &amount);
        self.voting_power_changed_event(&caller, &remaining);
    }

    #[view(votingPowerOf)]
    fn voting_power_of(&self, participant: &ManagedAddress) -> BigUint {
        self.locked_voting_power(participant).get()
    }

    fn has_min_voting_power(&self, power: &BigUint) -> bool {
        *power >= self.min_voting_power().get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("appRegistered")]
    fn app_registered_event(&self, #[indexed] app_id: u64);

    #[event("appEligibilityUpdated")]
    fn app_eligibility_updated_event(&self, #[indexed] app_id: u64, #[indexed] eligible: bool);

    #[event("votingPowerChanged")]
    fn voting_power_changed_event(&self, #[indexed] participant: &ManagedAddress, power: &BigUint);

    #[event("personhoodUpdated")]
    fn personhood_updated_event(
        &self,
        #[indexed] participant: &ManagedAddress,
        #[indexed] verified: bool,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getFactsOracle)]
    #[storage_mapper("factsOracle")]
    fn facts_oracle(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getVotingToken)]
    #[storage_mapper("votingToken")]
    fn voting_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getMinVotingPower)]
    #[storage_mapper("minVotingPower")]
    fn min_voting_power(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("lockedVotingPower")]
    fn locked_voting_power(&self, participant: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("apps")]
    fn apps(&self) -> UnorderedSetMapper<u64>;

    #[storage_mapper("appEligibility")]
    fn app_eligibility_history(&self, app_id: u64) -> VecMapper<(u64, bool)>;

    #[storage_mapper("personhood")]
    fn personhood_history(&self, participant: &ManagedAddress) -> VecMapper<(u64, bool)>;
}
