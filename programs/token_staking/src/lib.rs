//! # Token Staking Program
//!
//! A single-pool staking program: users lock a fungible token into a shared
//! vault and accrue rewards continuously, pro rata to their share of the
//! pool's total stake.
//!
//! ## Features
//! - Reward-per-token accumulator: O(1) accrual per user, no iteration over
//!   stakers at any point
//! - Claim rewards without unstaking
//! - Admin-configurable reward rate and lockup duration
//! - Pause control and emergency vault withdrawals for incident response
//! - Overflow-checked arithmetic throughout; any overflow aborts the
//!   instruction with no partial effect

#![allow(clippy::result_large_err)]

use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

#[program]
pub mod token_staking {
    use super::*;

    /// Initializes the pool and its two vaults. Callable once; the pool PDA
    /// uses a constant seed, so a second call fails at account creation.
    ///
    /// # Arguments
    /// * `ctx` - The context containing all accounts needed for initialization
    /// * `reward_rate` - Reward units emitted per second across all stake
    /// * `lockup_duration` - Seconds principal stays locked after staking
    pub fn initialize(
        ctx: Context<Initialize>,
        reward_rate: u64,
        lockup_duration: i64,
    ) -> Result<()> {
        instructions::initialize::handler(ctx, reward_rate, lockup_duration)
    }

    /// Stakes tokens into the pool.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The pool is paused
    /// - Amount is zero
    /// - A balance update would overflow
    pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
        instructions::stake::handler(ctx, amount)
    }

    /// Withdraws staked principal.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The pool is paused
    /// - Amount is zero or exceeds the staked balance
    /// - The lockup period has not ended
    pub fn unstake(ctx: Context<Unstake>, amount: u64) -> Result<()> {
        instructions::unstake::handler(ctx, amount)
    }

    /// Claims all accrued rewards without unstaking.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The pool is paused
    /// - No rewards are owed after settlement
    /// - The reward vault balance is insufficient
    pub fn claim_rewards(ctx: Context<ClaimRewards>) -> Result<()> {
        instructions::claim_rewards::handler(ctx)
    }

    /// Closes an emptied stake record and refunds its rent to the user.
    ///
    /// # Errors
    /// Returns an error if the record still holds principal or unclaimed
    /// rewards.
    pub fn close_stake_info(ctx: Context<CloseStakeInfo>) -> Result<()> {
        instructions::close_stake_info::handler(ctx)
    }

    /// Admin: deposits reward tokens into the reward vault.
    ///
    /// # Errors
    /// Returns an error if the caller is not the admin or the amount is zero.
    pub fn fund_rewards(ctx: Context<FundRewards>, amount: u64) -> Result<()> {
        instructions::fund_rewards::handler(ctx, amount)
    }

    /// Admin: changes the reward emission rate. Accrual up to this point is
    /// settled at the old rate first; already-earned rewards are unaffected.
    pub fn update_reward_rate(ctx: Context<AdminAction>, new_rate: u64) -> Result<()> {
        instructions::admin::update_reward_rate_handler(ctx, new_rate)
    }

    /// Admin: changes the lockup duration for all future lockup checks.
    pub fn update_lockup_duration(ctx: Context<AdminAction>, new_duration: i64) -> Result<()> {
        instructions::admin::update_lockup_duration_handler(ctx, new_duration)
    }

    /// Admin: pauses stake, unstake and claim.
    ///
    /// # Errors
    /// Returns an error if already paused.
    pub fn pause(ctx: Context<AdminAction>) -> Result<()> {
        instructions::admin::pause_handler(ctx)
    }

    /// Admin: resumes normal operation.
    ///
    /// # Errors
    /// Returns an error if not paused.
    pub fn unpause(ctx: Context<AdminAction>) -> Result<()> {
        instructions::admin::unpause_handler(ctx)
    }

    /// Admin: hands authority to a new key, effective immediately.
    pub fn change_admin(ctx: Context<AdminAction>, new_admin: Pubkey) -> Result<()> {
        instructions::admin::change_admin_handler(ctx, new_admin)
    }

    /// Admin: pulls staked tokens out of the staking vault without touching
    /// the accounting ledger. Incident-response escape hatch.
    pub fn emergency_withdraw_staked_tokens(
        ctx: Context<EmergencyWithdrawStaked>,
        amount: u64,
    ) -> Result<()> {
        instructions::emergency_withdraw::withdraw_staked_handler(ctx, amount)
    }

    /// Admin: pulls reward tokens out of the reward vault without touching
    /// the accounting ledger.
    pub fn emergency_withdraw_reward_tokens(
        ctx: Context<EmergencyWithdrawRewards>,
        amount: u64,
    ) -> Result<()> {
        instructions::emergency_withdraw::withdraw_rewards_handler(ctx, amount)
    }
}
