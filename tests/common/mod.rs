#![allow(dead_code)]

use auto_voting_rewards::{
    action_ledger::ActionLedgerModule,
    actions::ActionsModule,
    allocation::AllocationModule,
    auto_voting::AutoVotingModule,
    facts::FactsModule,
    relayer_pool::RelayerPoolModule,
    relayers::RelayersModule,
    early_access::EarlyAccessModule,
    types::{ActionKind, ActionStatus, RoundLedger},
    voter_rewards::VoterRewardsModule,
    AutoVotingRewards,
};
use multiversx_sc::types::{Address, MultiValueEncoded};
use multiversx_sc_scenario::{
    api::DebugApi, managed_address, managed_biguint, managed_token_id, rust_biguint,
    whitebox_legacy::*,
};

pub const WASM_PATH: &str = "output/auto-voting-rewards.wasm";
pub const VOTING_TOKEN: &[u8] = b"VOT3-abcdef";

pub const VOTING_PERIOD: u64 = 100;
pub const EARLY_ACCESS_BLOCKS: u64 = 10;
pub const VOTE_WEIGHT: u64 = 3;
pub const CLAIM_WEIGHT: u64 = 1;
pub const FEE_CAP: u64 = 1_000_000;
pub const OWNER_BALANCE: u64 = 100_000_000;

pub const APP_A: u64 = 1;
pub const APP_B: u64 = 2;
pub const APP_C: u64 = 3;

/// Timeline used by most tests: participants set up before block 10,
/// round 1 opens at block 10 and accepts votes until block 110.
pub const SETUP_NONCE: u64 = 5;
pub const ROUND_ONE_START: u64 = 10;
pub const ROUND_ONE_DEADLINE: u64 = ROUND_ONE_START + VOTING_PERIOD;

pub struct EngineSetup<Builder>
where
    Builder: 'static + Copy + Fn() -> auto_voting_rewards::ContractObj<DebugApi>,
{
    pub b_mock: BlockchainStateWrapper,
    pub owner: Address,
    pub oracle: Address,
    pub relayer_a: Address,
    pub relayer_b: Address,
    pub contract: ContractObjWrapper<auto_voting_rewards::ContractObj<DebugApi>, Builder>,
}

impl<Builder> EngineSetup<Builder>
where
    Builder: 'static + Copy + Fn() -> auto_voting_rewards::ContractObj<DebugApi>,
{
    pub fn new(builder: Builder) -> Self {
        let rust_zero = rust_biguint!(0);
        let mut b_mock = BlockchainStateWrapper::new();
        let owner = b_mock.create_user_account(&rust_biguint!(OWNER_BALANCE));
        let oracle = b_mock.create_user_account(&rust_zero);
        let relayer_a = b_mock.create_user_account(&rust_zero);
        let relayer_b = b_mock.create_user_account(&rust_zero);
        let contract = b_mock.create_sc_account(&rust_zero, Some(&owner), builder, WASM_PATH);

        b_mock.set_block_nonce(1);
        b_mock
            .execute_tx(&owner, &contract, &rust_zero, |sc| {
                sc.init(
                    managed_token_id!(VOTING_TOKEN),
                    managed_biguint!(1),
                    VOTING_PERIOD,
                    managed_address!(&oracle),
                    managed_biguint!(FEE_CAP),
                );
                sc.set_action_weights(VOTE_WEIGHT, CLAIM_WEIGHT);
                sc.set_vote_early_access_blocks(EARLY_ACCESS_BLOCKS);
                sc.set_claim_early_access_blocks(EARLY_ACCESS_BLOCKS);
                sc.register_relayer(managed_address!(&relayer_a));
                sc.register_relayer(managed_address!(&relayer_b));
            })
            .assert_ok();

        b_mock
            .execute_tx(&oracle, &contract, &rust_zero, |sc| {
                sc.register_app(APP_A);
                sc.register_app(APP_B);
                sc.register_app(APP_C);
            })
            .assert_ok();

        b_mock.set_block_nonce(SETUP_NONCE);

        EngineSetup {
            b_mock,
            owner,
            oracle,
            relayer_a,
            relayer_b,
            contract,
        }
    }

    pub fn set_nonce(&mut self, nonce: u64) {
        self.b_mock.set_block_nonce(nonce);
    }

    // ========================================================
    // Facts
    // ========================================================

    /// Verified person with `power` voting tokens locked in the contract.
    pub fn new_participant(&mut self, power: u64) -> Address {
        let participant = self.b_mock.create_user_account(&rust_biguint!(0));
        self.set_voting_power(&participant, power);
        self.set_personhood(&participant, true);
        participant
    }

    /// Locks or unlocks voting tokens until exactly `power` is locked.
    pub fn set_voting_power(&mut self, participant: &Address, power: u64) {
        let locked = self.voting_power(participant);
        if power > locked {
            let top_up = power - locked;
            self.b_mock
                .set_esdt_balance(participant, VOTING_TOKEN, &rust_biguint!(top_up));
            self.b_mock
                .execute_esdt_transfer(
                    participant,
                    &self.contract,
                    VOTING_TOKEN,
                    0,
                    &rust_biguint!(top_up),
                    |sc| {
                        sc.deposit_voting_power();
                    },
                )
                .assert_ok();
        } else if power < locked {
            self.b_mock
                .execute_tx(participant, &self.contract, &rust_biguint!(0), |sc| {
                    sc.withdraw_voting_power(managed_biguint!(locked - power));
                })
                .assert_ok();
        }
    }

    pub fn voting_power(&mut self, participant: &Address) -> u64 {
        let mut power = 0u64;
        self.b_mock
            .execute_query(&self.contract, |sc| {
                power = sc
                    .voting_power_of(&managed_address!(participant))
                    .to_u64()
                    .unwrap();
            })
            .assert_ok();
        power
    }

    pub fn set_personhood(&mut self, participant: &Address, verified: bool) {
        self.b_mock
            .execute_tx(&self.oracle, &self.contract, &rust_biguint!(0), |sc| {
                sc.set_personhood(managed_address!(participant), verified);
            })
            .assert_ok();
    }

    pub fn set_app_eligibility(&mut self, app_id: u64, eligible: bool) {
        self.b_mock
            .execute_tx(&self.oracle, &self.contract, &rust_biguint!(0), |sc| {
                sc.set_app_eligibility(app_id, eligible);
            })
            .assert_ok();
    }

    // ========================================================
    // Participant actions
    // ========================================================

    pub fn set_preferences(&mut self, participant: &Address, apps: &[u64]) -> TxResult {
        self.b_mock
            .execute_tx(participant, &self.contract, &rust_biguint!(0), |sc| {
                let mut preferences = MultiValueEncoded::new();
                for app_id in apps {
                    preferences.push(*app_id);
                }
                sc.set_user_voting_preferences(preferences);
            })
    }

    pub fn toggle_auto_voting(&mut self, participant: &Address) -> TxResult {
        self.b_mock
            .execute_tx(participant, &self.contract, &rust_biguint!(0), |sc| {
                sc.toggle_auto_voting();
            })
    }

    pub fn new_auto_voter(&mut self, power: u64, apps: &[u64]) -> Address {
        let participant = self.new_participant(power);
        self.set_preferences(&participant, apps).assert_ok();
        self.toggle_auto_voting(&participant).assert_ok();
        participant
    }

    pub fn cast_vote(&mut self, participant: &Address, round_id: u64, apps: &[u64]) -> TxResult {
        self.b_mock
            .execute_tx(participant, &self.contract, &rust_biguint!(0), |sc| {
                let mut recipients = MultiValueEncoded::new();
                for app_id in apps {
                    recipients.push(*app_id);
                }
                sc.cast_vote(round_id, recipients);
            })
    }

    // ========================================================
    // Rounds and funding
    // ========================================================

    pub fn start_round(&mut self) -> u64 {
        let mut round_id = 0u64;
        self.b_mock
            .execute_tx(&self.owner, &self.contract, &rust_biguint!(0), |sc| {
                round_id = sc.start_new_round();
            })
            .assert_ok();
        round_id
    }

    pub fn fund_round(&mut self, round_id: u64, amount: u64) {
        self.b_mock
            .execute_tx(&self.owner, &self.contract, &rust_biguint!(amount), |sc| {
                sc.fund_round(round_id);
            })
            .assert_ok();
    }

    // ========================================================
    // Delegated actions
    // ========================================================

    pub fn vote_on_behalf(&mut self, caller: &Address, round_id: u64, participant: &Address) -> TxResult {
        self.b_mock
            .execute_tx(caller, &self.contract, &rust_biguint!(0), |sc| {
                sc.cast_vote_on_behalf_of(round_id, managed_address!(participant));
            })
    }

    pub fn claim_reward(&mut self, caller: &Address, round_id: u64, participant: &Address) -> TxResult {
        self.b_mock
            .execute_tx(caller, &self.contract, &rust_biguint!(0), |sc| {
                sc.claim_reward(round_id, managed_address!(participant));
            })
    }

    pub fn skip_missed_vote(&mut self, caller: &Address, round_id: u64, participant: &Address) -> TxResult {
        self.b_mock
            .execute_tx(caller, &self.contract, &rust_biguint!(0), |sc| {
                sc.skip_missed_vote(round_id, managed_address!(participant));
            })
    }

    pub fn release_zero_reward_claim(&mut self, caller: &Address, round_id: u64, participant: &Address) -> TxResult {
        self.b_mock
            .execute_tx(caller, &self.contract, &rust_biguint!(0), |sc| {
                sc.release_zero_reward_claim(round_id, managed_address!(participant));
            })
    }

    pub fn claim_relayer_rewards(&mut self, caller: &Address, round_id: u64, relayer: &Address) -> TxResult {
        self.b_mock
            .execute_tx(caller, &self.contract, &rust_biguint!(0), |sc| {
                sc.claim_relayer_rewards(round_id, managed_address!(relayer));
            })
    }

    // ========================================================
    // Queries
    // ========================================================

    pub fn ledger(&mut self, round_id: u64) -> RoundLedger {
        let mut ledger = None;
        self.b_mock
            .execute_query(&self.contract, |sc| {
                ledger = Some(sc.get_round_ledger(round_id));
            })
            .assert_ok();
        ledger.unwrap()
    }

    pub fn has_ledger_entry(&mut self, round_id: u64) -> bool {
        let mut exists = false;
        self.b_mock
            .execute_query(&self.contract, |sc| {
                exists = !sc.round_ledger(round_id).is_empty();
            })
            .assert_ok();
        exists
    }

    pub fn action_status(&mut self, round_id: u64, participant: &Address, kind: ActionKind) -> ActionStatus {
        let mut status = ActionStatus::Pending;
        self.b_mock
            .execute_query(&self.contract, |sc| {
                status = sc.get_action_status(round_id, &managed_address!(participant), kind);
            })
            .assert_ok();
        status
    }

    /// `(completed actions, completed weighted actions)` of a relayer.
    pub fn relayer_actions(&mut self, round_id: u64, relayer: &Address) -> (u64, u64) {
        let mut actions = (0u64, 0u64);
        self.b_mock
            .execute_query(&self.contract, |sc| {
                let relayer = managed_address!(relayer);
                actions = (
                    sc.relayer_completed_actions(round_id, &relayer).get(),
                    sc.relayer_completed_weighted_actions(round_id, &relayer).get(),
                );
            })
            .assert_ok();
        actions
    }

    pub fn claimable(&mut self, relayer: &Address, round_id: u64) -> u64 {
        let mut amount = 0u64;
        self.b_mock
            .execute_query(&self.contract, |sc| {
                amount = sc
                    .claimable_rewards(&managed_address!(relayer), round_id)
                    .to_u64()
                    .unwrap();
            })
            .assert_ok();
        amount
    }

    pub fn total_deposited(&mut self, round_id: u64) -> u64 {
        let mut amount = 0u64;
        self.b_mock
            .execute_query(&self.contract, |sc| {
                amount = sc.total_deposited(round_id).get().to_u64().unwrap();
            })
            .assert_ok();
        amount
    }

    pub fn pending_reward(&mut self, round_id: u64, participant: &Address) -> u64 {
        let mut amount = 0u64;
        self.b_mock
            .execute_query(&self.contract, |sc| {
                amount = sc
                    .pending_reward(round_id, &managed_address!(participant))
                    .to_u64()
                    .unwrap();
            })
            .assert_ok();
        amount
    }

    pub fn app_votes(&mut self, round_id: u64, app_id: u64) -> u64 {
        let mut votes = 0u64;
        self.b_mock
            .execute_query(&self.contract, |sc| {
                votes = sc.app_votes(round_id, app_id).get().to_u64().unwrap();
            })
            .assert_ok();
        votes
    }

    pub fn is_auto_voting_enabled(&mut self, participant: &Address) -> bool {
        let mut enabled = false;
        self.b_mock
            .execute_query(&self.contract, |sc| {
                enabled = sc.is_auto_voting_enabled(&managed_address!(participant));
            })
            .assert_ok();
        enabled
    }

    pub fn is_effective(&mut self, participant: &Address, round_id: u64) -> bool {
        let mut effective = false;
        self.b_mock
            .execute_query(&self.contract, |sc| {
                effective = sc.is_effective_in_round(&managed_address!(participant), round_id);
            })
            .assert_ok();
        effective
    }

    pub fn preferences(&mut self, participant: &Address) -> Vec<u64> {
        let mut preferences = Vec::new();
        self.b_mock
            .execute_query(&self.contract, |sc| {
                preferences = sc
                    .preferences_of(&managed_address!(participant))
                    .iter()
                    .collect();
            })
            .assert_ok();
        preferences
    }

    pub fn is_vote_early_access_active(&mut self, round_id: u64) -> bool {
        let mut active = false;
        self.b_mock
            .execute_query(&self.contract, |sc| {
                active = sc.is_vote_early_access_active(round_id);
            })
            .assert_ok();
        active
    }

    pub fn is_claim_early_access_active(&mut self, round_id: u64) -> bool {
        let mut active = false;
        self.b_mock
            .execute_query(&self.contract, |sc| {
                active = sc.is_claim_early_access_active(round_id);
            })
            .assert_ok();
        active
    }

    pub fn is_relayer(&mut self, address: &Address) -> bool {
        let mut registered = false;
        self.b_mock
            .execute_query(&self.contract, |sc| {
                registered = sc.is_relayer(&managed_address!(address));
            })
            .assert_ok();
        registered
    }
}
