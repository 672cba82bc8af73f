//! Error types for the token staking program.
//!
//! Every error is a local precondition failure surfaced to the caller; none
//! are recovered internally. A failed instruction leaves the pool and all
//! stake records untouched (the runtime discards staged account writes).

use anchor_lang::prelude::*;

/// Custom error codes for the token staking program.
#[error_code]
pub enum StakingError {
    /// Cannot stake a zero amount.
    #[msg("Stake amount must be greater than zero")]
    ZeroStakeAmount,

    /// Cannot unstake a zero amount.
    #[msg("Unstake amount must be greater than zero")]
    ZeroUnstakeAmount,

    /// Cannot fund the reward vault with a zero amount.
    #[msg("Funding amount must be greater than zero")]
    ZeroFundAmount,

    /// Requested unstake exceeds the user's staked principal.
    #[msg("Insufficient staked amount")]
    InsufficientStakeAmount,

    /// Principal is still locked; the lockup window has not elapsed.
    #[msg("Lockup period has not ended yet")]
    LockupPeriodNotEnded,

    /// Reconciled reward balance is zero.
    #[msg("No rewards to claim")]
    NoRewardsToClaim,

    /// Stake info can only be closed once all principal is withdrawn.
    #[msg("Stake amount must be zero to close the account")]
    StakeNotZero,

    /// Stake info can only be closed once all rewards are claimed.
    #[msg("All rewards must be claimed to close the account")]
    RewardsNotClaimed,

    /// Signer is not the pool admin.
    #[msg("Only the admin can perform this action")]
    NotAdmin,

    /// A checked arithmetic operation overflowed. Never clamped: clamping
    /// would silently corrupt the conservation invariant.
    #[msg("An arithmetic operation overflowed")]
    ArithmeticOverflow,

    /// Pool is paused; stake, unstake and claim are rejected.
    #[msg("Program is paused")]
    ProgramPaused,

    /// `pause` called while already paused.
    #[msg("Program is already paused")]
    AlreadyPaused,

    /// `unpause` called while not paused.
    #[msg("Program is not paused")]
    NotPaused,

    /// Reward vault holds less than the amount owed.
    #[msg("Insufficient balance in reward vault")]
    InsufficientVaultBalance,
}
