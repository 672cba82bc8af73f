//! Close stake info instruction handler.
//!
//! Destroys an emptied stake record and refunds its rent deposit. Available
//! even while the pool is paused, so users are never stuck paying rent.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::events::CloseStakeInfoEvent;
use crate::state::UserStakeInfo;

/// Accounts required for closing a stake record.
#[derive(Accounts)]
pub struct CloseStakeInfo<'info> {
    /// The user closing their record; receives the rent deposit.
    #[account(mut)]
    pub user: Signer<'info>,

    /// User's stake record, closed on success.
    #[account(
        mut,
        seeds = [STAKE_INFO_SEED, user.key().as_ref()],
        bump = stake_info.bump,
        constraint = stake_info.owner == user.key(),
        close = user
    )]
    pub stake_info: Account<'info, UserStakeInfo>,
}

/// Close an emptied stake record.
///
/// # Arguments
/// * `ctx` - CloseStakeInfo accounts context
pub fn handler(ctx: Context<CloseStakeInfo>) -> Result<()> {
    ctx.accounts.stake_info.ensure_closable()?;

    emit!(CloseStakeInfoEvent {
        user: ctx.accounts.user.key(),
    });

    Ok(())
}
