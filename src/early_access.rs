multiversx_sc::imports!();

use crate::types::Round;

/// Windows during which only registered relayers may act on a
/// participant's behalf. Both are evaluated from the current block and the
/// round's timepoints alone, so a new window length applies to every
/// round, ended ones included, from the next block on.
#[multiversx_sc::module]
pub trait EarlyAccessModule: crate::rounds::RoundsModule {
    #[only_owner]
    #[endpoint(setVoteEarlyAccessBlocks)]
    fn set_vote_early_access_blocks(&self, blocks: u64) {
        self.vote_early_access_blocks().set(blocks);
        self.early_access_updated_event(true, blocks);
    }

    #[only_owner]
    #[endpoint(setClaimEarlyAccessBlocks)]
    fn set_claim_early_access_blocks(&self, blocks: u64) {
        self.claim_early_access_blocks().set(blocks);
        self.early_access_updated_event(false, blocks);
    }

    #[view(isVoteEarlyAccessActive)]
    fn is_vote_early_access_active(&self, round_id: u64) -> bool {
        if self.rounds(round_id).is_empty() {
            return false;
        }
        self.vote_early_access_active(&self.rounds(round_id).get())
    }

    #[view(isClaimEarlyAccessActive)]
    fn is_claim_early_access_active(&self, round_id: u64) -> bool {
        if self.rounds(round_id).is_empty() {
            return false;
        }
        self.claim_early_access_active(&self.rounds(round_id).get())
    }

    /// Anchored at the round snapshot, not the deadline: votes close at the
    /// deadline, so the relayer-only vote window runs from the round start.
    fn vote_early_access_active(&self, round: &Round) -> bool {
        let now = self.blockchain().get_block_nonce();
        now < round.snapshot + self.vote_early_access_blocks().get()
    }

    fn claim_early_access_active(&self, round: &Round) -> bool {
        let now = self.blockchain().get_block_nonce();
        now < round.deadline + self.claim_early_access_blocks().get()
    }

    #[event("earlyAccessUpdated")]
    fn early_access_updated_event(&self, #[indexed] vote_window: bool, #[indexed] blocks: u64);

    #[view(getVoteEarlyAccessBlocks)]
    #[storage_mapper("voteEarlyAccessBlocks")]
    fn vote_early_access_blocks(&self) -> SingleValueMapper<u64>;

    #[view(getClaimEarlyAccessBlocks)]
    #[storage_mapper("claimEarlyAccessBlocks")]
    fn claim_early_access_blocks(&self) -> SingleValueMapper<u64>;
}
