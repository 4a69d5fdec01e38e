// Auto-voting registry
pub const ERR_EMPTY_PREFERENCES: &str = "Preferences cannot be empty";
pub const ERR_TOO_MANY_PREFERENCES: &str = "Too many preferences";
pub const ERR_INVALID_RECIPIENT: &str = "Unknown recipient";
pub const ERR_NO_PREFERENCES_SET: &str = "No preferences set";
pub const ERR_PERSONHOOD_CHECK_FAILED: &str = "Personhood check failed";
pub const ERR_INSUFFICIENT_VOTING_POWER: &str = "Insufficient voting power";

// Voting power
pub const ERR_WRONG_VOTING_TOKEN: &str = "Wrong voting token";
pub const ERR_INSUFFICIENT_LOCKED_POWER: &str = "Not enough locked voting power";

// Delegated actions
pub const ERR_UNAUTHORIZED_DURING_EARLY_ACCESS: &str = "Only relayers can act during early access";
pub const ERR_UNAUTHORIZED_CALLER: &str = "Caller is neither the participant nor a relayer";
pub const ERR_AUTO_VOTING_NOT_ENABLED: &str = "Auto-voting not enabled for this round";
pub const ERR_ALREADY_COMPLETED: &str = "Action already completed";
pub const ERR_ALREADY_SKIPPED: &str = "Action already skipped";
pub const ERR_ZERO_REWARD: &str = "No reward to claim";
pub const ERR_REWARD_ALREADY_CLAIMED: &str = "Reward already claimed";
pub const ERR_REWARD_STILL_CLAIMABLE: &str = "Reward still claimable";
pub const ERR_VOTE_STILL_PENDING: &str = "Vote still pending";

// Manual voting
pub const ERR_AUTO_VOTER_CANNOT_VOTE: &str = "Auto-voting participants vote through relayers";
pub const ERR_ALREADY_VOTED: &str = "Already voted in this round";
pub const ERR_RECIPIENT_NOT_ELIGIBLE: &str = "Recipient not eligible in this round";

// Relayer rewards pool
pub const ERR_REWARDS_ALREADY_CLAIMED: &str = "Relayer rewards already claimed";
pub const ERR_REWARDS_NOT_CLAIMABLE: &str = "Relayer rewards not claimable yet";
pub const ERR_NO_RELAYER_REWARDS: &str = "No relayer rewards for this round";

// Rounds
pub const ERR_ROUND_NOT_FOUND: &str = "Round does not exist";
pub const ERR_ROUND_NOT_ACTIVE: &str = "Round is not active";
pub const ERR_ROUND_NOT_ENDED: &str = "Round has not ended";
pub const ERR_ROUND_STILL_ACTIVE: &str = "Current round has not ended";

// Administration
pub const ERR_RELAYER_ALREADY_REGISTERED: &str = "Relayer already registered";
pub const ERR_RELAYER_NOT_REGISTERED: &str = "Relayer not registered";
pub const ERR_NOT_FACTS_ORACLE: &str = "Caller is not the facts oracle";
pub const ERR_APP_ALREADY_REGISTERED: &str = "Recipient already registered";
pub const ERR_INVALID_FEE_PERCENT: &str = "Fee percent above denominator";
pub const ERR_INVALID_ACTION_WEIGHT: &str = "Action weights must be positive";
pub const ERR_ACTION_WEIGHT_TOO_HIGH: &str = "Action weight above maximum";
pub const ERR_INVALID_VOTING_PERIOD: &str = "Voting period must be positive";
pub const ERR_ZERO_PAYMENT: &str = "Payment must be positive";
