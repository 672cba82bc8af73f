//! Events emitted by the token staking program.
//!
//! One event per successful mutating operation, carrying the principal
//! identifiers and amounts for off-chain observability. The program itself
//! never consumes them.

use anchor_lang::prelude::*;

/// Emitted once, when the pool is created.
#[event]
pub struct PoolInitializedEvent {
    pub admin: Pubkey,
    pub reward_rate: u64,
    pub lockup_duration: i64,
}

/// Emitted when a user stakes tokens into the pool.
#[event]
pub struct StakeEvent {
    pub user: Pubkey,
    pub amount: u64,
}

/// Emitted when a user withdraws staked principal.
#[event]
pub struct UnstakeEvent {
    pub user: Pubkey,
    pub amount: u64,
}

/// Emitted when a user claims accrued rewards.
#[event]
pub struct ClaimEvent {
    pub user: Pubkey,
    pub amount: u64,
}

/// Emitted when a user closes an emptied stake info account.
#[event]
pub struct CloseStakeInfoEvent {
    pub user: Pubkey,
}

/// Emitted when the admin funds the reward vault.
#[event]
pub struct FundRewardsEvent {
    pub amount: u64,
}

/// Emitted when the admin changes the reward rate.
#[event]
pub struct UpdateRewardRateEvent {
    pub new_rate: u64,
}

/// Emitted when the admin changes the lockup duration.
#[event]
pub struct UpdateLockupDurationEvent {
    pub new_duration: i64,
}

/// Emitted when admin authority is handed over.
#[event]
pub struct ChangeAdminEvent {
    pub previous_admin: Pubkey,
    pub new_admin: Pubkey,
}

/// Emitted when the pool is paused.
#[event]
pub struct PauseEvent {}

/// Emitted when the pool is unpaused.
#[event]
pub struct UnpauseEvent {}

/// Emitted when the admin pulls tokens out of a vault, bypassing the
/// accounting ledger.
#[event]
pub struct EmergencyWithdrawEvent {
    pub vault: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
}
