multiversx_sc::imports!();

use crate::checkpoints;
use crate::errors::*;
use crate::types::Round;

pub const MAX_PREFERENCES: usize = 15;

// ============================================================
// Auto-voting registry
//
// The enabled flag, the preference list and the number of enabled
// participants are all checkpointed by block nonce. A round reads them as
// they stood strictly before its snapshot block, so toggling mid-round
// only affects the following rounds.
// ============================================================

#[multiversx_sc::module]
pub trait AutoVotingModule: crate::rounds::RoundsModule + crate::facts::FactsModule {
    #[endpoint(setUserVotingPreferences)]
    fn set_user_voting_preferences(&self, apps: MultiValueEncoded<u64>) {
        let participant = self.blockchain().get_caller();

        let mut preferences: ManagedVec<u64> = ManagedVec::new();
        for app_id in apps.into_iter() {
            preferences.push(app_id);
        }
        require!(!preferences.is_empty(), ERR_EMPTY_PREFERENCES);
        require!(preferences.len() <= MAX_PREFERENCES, ERR_TOO_MANY_PREFERENCES);
        for app_id in preferences.iter() {
            require!(self.is_recognized_app(app_id), ERR_INVALID_RECIPIENT);
        }

        self.store_preferences(&participant, &preferences);
    }

    #[endpoint(toggleAutoVoting)]
    fn toggle_auto_voting(&self) {
        let participant = self.blockchain().get_caller();

        if self.is_auto_voting_enabled(&participant) {
            self.disable_auto_voting(&participant);
            return;
        }

        require!(
            !self.preferences_of(&participant).is_empty(),
            ERR_NO_PREFERENCES_SET
        );
        require!(self.is_person_now(&participant), ERR_PERSONHOOD_CHECK_FAILED);
        let power = self.voting_power_of(&participant);
        require!(self.has_min_voting_power(&power), ERR_INSUFFICIENT_VOTING_POWER);

        self.write_auto_voting_flag(&participant, true);
    }

    /// Turns auto-voting off and drops the preference list. Safe to call
    /// on a participant that is already disabled.
    fn disable_auto_voting(&self, participant: &ManagedAddress) {
        if self.is_auto_voting_enabled(participant) {
            self.write_auto_voting_flag(participant, false);
        }
        if !self.preferences_of(participant).is_empty() {
            self.store_preferences(participant, &ManagedVec::new());
        }
    }

    fn write_auto_voting_flag(&self, participant: &ManagedAddress, enabled: bool) {
        let now = self.blockchain().get_block_nonce();
        checkpoints::push(&mut self.auto_voting_history(participant), now, enabled);

        let users = checkpoints::latest(&self.auto_voting_users_history()).unwrap_or(0);
        let users = if enabled {
            users + 1
        } else {
            users.saturating_sub(1)
        };
        checkpoints::push(&mut self.auto_voting_users_history(), now, users);

        self.auto_voting_toggled_event(participant, enabled);
    }

    fn store_preferences(&self, participant: &ManagedAddress, preferences: &ManagedVec<u64>) {
        let now = self.blockchain().get_block_nonce();
        checkpoints::push(
            &mut self.preferences_history(participant),
            now,
            preferences.clone(),
        );
        self.preferences_updated_event(participant, preferences);
    }

    fn preferences_of(&self, participant: &ManagedAddress) -> ManagedVec<u64> {
        checkpoints::latest(&self.preferences_history(participant)).unwrap_or_else(ManagedVec::new)
    }

    /// Number of participants whose auto-voting is effective in `round`.
    fn effective_auto_voters(&self, round: &Round) -> u64 {
        checkpoints::value_before(&self.auto_voting_users_history(), round.snapshot).unwrap_or(0)
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isAutoVotingEnabled)]
    fn is_auto_voting_enabled(&self, participant: &ManagedAddress) -> bool {
        checkpoints::latest(&self.auto_voting_history(participant)).unwrap_or(false)
    }

    #[view(isAutoVotingEnabledAtTimepoint)]
    fn is_auto_voting_enabled_at(&self, participant: &ManagedAddress, timepoint: u64) -> bool {
        checkpoints::value_at(&self.auto_voting_history(participant), timepoint).unwrap_or(false)
    }

    #[view(isAutoVotingEffectiveInRound)]
    fn is_effective_in_round(&self, participant: &ManagedAddress, round_id: u64) -> bool {
        if self.rounds(round_id).is_empty() {
            return false;
        }
        let snapshot = self.rounds(round_id).get().snapshot;
        checkpoints::value_before(&self.auto_voting_history(participant), snapshot).unwrap_or(false)
    }

    #[view(getPreferences)]
    fn get_preferences(&self, participant: &ManagedAddress) -> MultiValueEncoded<u64> {
        let mut result = MultiValueEncoded::new();
        for app_id in self.preferences_of(participant).iter() {
            result.push(app_id);
        }
        result
    }

    #[view(getPreferencesAtTimepoint)]
    fn get_preferences_at(
        &self,
        participant: &ManagedAddress,
        timepoint: u64,
    ) -> MultiValueEncoded<u64> {
        let mut result = MultiValueEncoded::new();
        let preferences: ManagedVec<u64> =
            checkpoints::value_at(&self.preferences_history(participant), timepoint)
                .unwrap_or_else(ManagedVec::new);
        for app_id in preferences.iter() {
            result.push(app_id);
        }
        result
    }

    #[view(getTotalAutoVotingUsers)]
    fn total_auto_voting_users(&self) -> u64 {
        checkpoints::latest(&self.auto_voting_users_history()).unwrap_or(0)
    }

    #[view(getTotalAutoVotingUsersAtTimepoint)]
    fn total_auto_voting_users_at(&self, timepoint: u64) -> u64 {
        checkpoints::value_at(&self.auto_voting_users_history(), timepoint).unwrap_or(0)
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("preferencesUpdated")]
    fn preferences_updated_event(
        &self,
        #[indexed] participant: &ManagedAddress,
        apps: &ManagedVec<u64>,
    );

    #[event("autoVotingToggled")]
    fn auto_voting_toggled_event(
        &self,
        #[indexed] participant: &ManagedAddress,
        #[indexed] enabled: bool,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("autoVotingFlag")]
    fn auto_voting_history(&self, participant: &ManagedAddress) -> VecMapper<(u64, bool)>;

    #[storage_mapper("preferences")]
    fn preferences_history(&self, participant: &ManagedAddress) -> VecMapper<(u64, ManagedVec<u64>)>;

    #[storage_mapper("autoVotingUsers")]
    fn auto_voting_users_history(&self) -> VecMapper<(u64, u64)>;
}
