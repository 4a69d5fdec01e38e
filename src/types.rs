multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Round: one voting epoch
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Round {
    pub id: u64,
    /// Block nonce the round opened at. Registry state is read as of this block.
    pub snapshot: u64,
    /// Last block nonce at which votes are accepted.
    pub deadline: u64,
}

// ============================================================
// Delegated actions a relayer can perform for a participant
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ActionKind {
    Vote,
    Claim,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ActionStatus {
    /// Nothing recorded yet for the (round, participant, kind) key.
    Pending,
    /// Terminal. Vote cast, or claim settled (paid, or released with a zero
    /// reward).
    Completed,
    /// Terminal, vote kind only. Participant had nothing to vote with.
    Skipped,
}

// ============================================================
// Round ledger: expected vs. completed weighted actions
// ============================================================

/// Per-round accounting entry. Only exists for rounds that started with
/// at least one effective auto-voting participant.
///
/// `completed_weighted_actions` only counts actions credited to a relayer,
/// and never exceeds `total_expected_weighted_actions`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct RoundLedger {
    /// Weights frozen at seeding time, used for every action of this round.
    pub vote_weight: u64,
    pub claim_weight: u64,
    pub total_expected_actions: u64,
    pub total_expected_weighted_actions: u64,
    pub completed_actions: u64,
    pub completed_weighted_actions: u64,
    pub registered_relayer_count_at_start: u64,
}

impl RoundLedger {
    pub fn seeded(participants: u64, vote_weight: u64, claim_weight: u64, relayers: u64) -> Self {
        RoundLedger {
            vote_weight,
            claim_weight,
            total_expected_actions: participants.saturating_mul(2),
            total_expected_weighted_actions: participants
                .saturating_mul(vote_weight.saturating_add(claim_weight)),
            completed_actions: 0,
            completed_weighted_actions: 0,
            registered_relayer_count_at_start: relayers,
        }
    }

    pub fn weight_of(&self, kind: ActionKind) -> u64 {
        match kind {
            ActionKind::Vote => self.vote_weight,
            ActionKind::Claim => self.claim_weight,
        }
    }

    pub fn is_fully_completed(&self) -> bool {
        self.completed_weighted_actions >= self.total_expected_weighted_actions
    }
}
