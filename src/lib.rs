#![no_std]

multiversx_sc::imports!();

pub mod action_ledger;
pub mod actions;
pub mod allocation;
pub mod auto_voting;
pub mod checkpoints;
pub mod early_access;
pub mod errors;
pub mod facts;
pub mod fees;
pub mod math;
pub mod relayer_pool;
pub mod relayers;
pub mod rounds;
pub mod types;
pub mod voter_rewards;

use errors::*;

// ============================================================
// Defaults
// ============================================================

/// 10% of an auto-voter's reward goes to the relayer pool, before the cap.
const DEFAULT_FEE_PERCENT: u64 = 10;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait AutoVotingRewards:
    rounds::RoundsModule
    + facts::FactsModule
    + auto_voting::AutoVotingModule
    + relayers::RelayersModule
    + early_access::EarlyAccessModule
    + fees::FeesModule
    + voter_rewards::VoterRewardsModule
    + allocation::AllocationModule
    + action_ledger::ActionLedgerModule
    + relayer_pool::RelayerPoolModule
    + actions::ActionsModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        voting_token: TokenIdentifier,
        min_voting_power: BigUint,
        voting_period: u64,
        facts_oracle: ManagedAddress,
        fee_cap: BigUint,
    ) {
        require!(voting_period > 0, ERR_INVALID_VOTING_PERIOD);

        self.voting_token().set(&voting_token);
        self.min_voting_power().set(&min_voting_power);
        self.voting_period().set(voting_period);
        self.facts_oracle().set(&facts_oracle);
        self.fee_cap().set(&fee_cap);
        self.fee_percent().set(DEFAULT_FEE_PERCENT);
        self.vote_weight().set(action_ledger::DEFAULT_VOTE_WEIGHT);
        self.claim_weight().set(action_ledger::DEFAULT_CLAIM_WEIGHT);
        self.vote_early_access_blocks().set(0u64);
        self.claim_early_access_blocks().set(0u64);
        self.current_round_id().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: startNewRound
    // Round transition. Anyone can call it once the current round is past
    // its deadline; the new round's expected actions are seeded in the
    // same transaction.
    // ========================================================

    #[endpoint(startNewRound)]
    fn start_new_round(&self) -> u64 {
        let round = self.open_round();
        self.seed_round(&round);
        round.id
    }

    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue6<u64, u64, u64, u64, u64, BigUint> {
        (
            self.voting_period().get(),
            self.vote_weight().get(),
            self.claim_weight().get(),
            self.vote_early_access_blocks().get(),
            self.claim_early_access_blocks().get(),
            self.fee_cap().get(),
        )
            .into()
    }
}
