//! Admin instruction handlers.
//!
//! Parameter updates, pause control and admin handover. Every handler runs
//! behind the same `has_one = admin` gate; a non-admin signer is rejected
//! before any state is touched.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakingError;
use crate::events::{
    ChangeAdminEvent, PauseEvent, UnpauseEvent, UpdateLockupDurationEvent, UpdateRewardRateEvent,
};
use crate::state::Pool;

/// Accounts required for admin operations.
#[derive(Accounts)]
pub struct AdminAction<'info> {
    /// The pool to modify.
    #[account(
        mut,
        seeds = [POOL_SEED],
        bump = pool.bump,
        has_one = admin @ StakingError::NotAdmin
    )]
    pub pool: Account<'info, Pool>,

    /// The current pool admin.
    pub admin: Signer<'info>,
}

/// Change the reward emission rate.
///
/// Refreshes the accumulator first so accrual up to this point is closed out
/// at the old rate; the change is never retroactive.
pub fn update_reward_rate_handler(ctx: Context<AdminAction>, new_rate: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let pool = &mut ctx.accounts.pool;

    pool.update_rewards(now, None)?;
    pool.reward_rate = new_rate;

    emit!(UpdateRewardRateEvent { new_rate });
    Ok(())
}

/// Change the lockup duration. Applies to lockup checks from now on,
/// including stakes already in flight.
pub fn update_lockup_duration_handler(ctx: Context<AdminAction>, new_duration: i64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let pool = &mut ctx.accounts.pool;

    pool.update_rewards(now, None)?;
    pool.lockup_duration = new_duration;

    emit!(UpdateLockupDurationEvent { new_duration });
    Ok(())
}

/// Pause the pool. Stake, unstake and claim are rejected until `unpause`;
/// admin operations and stake-record closing stay available.
pub fn pause_handler(ctx: Context<AdminAction>) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    require!(!pool.paused, StakingError::AlreadyPaused);

    pool.paused = true;
    emit!(PauseEvent {});
    Ok(())
}

/// Unpause the pool.
pub fn unpause_handler(ctx: Context<AdminAction>) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    require!(pool.paused, StakingError::NotPaused);

    pool.paused = false;
    emit!(UnpauseEvent {});
    Ok(())
}

/// Hand admin authority to a new key. Takes effect immediately; the previous
/// admin keeps no residual capability.
pub fn change_admin_handler(ctx: Context<AdminAction>, new_admin: Pubkey) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    let previous_admin = pool.admin;

    pool.admin = new_admin;

    emit!(ChangeAdminEvent {
        previous_admin,
        new_admin,
    });
    Ok(())
}
