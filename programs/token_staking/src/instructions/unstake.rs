//! Unstake instruction handler.
//!
//! Returns staked principal to the user once the lockup window has elapsed.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::UnstakeEvent;
use crate::state::{Pool, UserStakeInfo};

/// Accounts required for unstaking.
#[derive(Accounts)]
pub struct Unstake<'info> {
    /// The user unstaking tokens.
    #[account(mut)]
    pub user: Signer<'info>,

    /// The pool.
    #[account(
        mut,
        seeds = [POOL_SEED],
        bump = pool.bump,
        has_one = staking_vault
    )]
    pub pool: Account<'info, Pool>,

    /// User's stake record.
    #[account(
        mut,
        seeds = [STAKE_INFO_SEED, user.key().as_ref()],
        bump = stake_info.bump,
        constraint = stake_info.owner == user.key()
    )]
    pub stake_info: Account<'info, UserStakeInfo>,

    /// User's token account receiving the principal.
    #[account(
        mut,
        constraint = user_staking_wallet.mint == pool.staking_mint,
        constraint = user_staking_wallet.owner == user.key()
    )]
    pub user_staking_wallet: Account<'info, TokenAccount>,

    /// Pool's staking vault.
    #[account(mut)]
    pub staking_vault: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Unstake tokens from the pool.
///
/// # Arguments
/// * `ctx` - Unstake accounts context
/// * `amount` - Amount of tokens to withdraw
pub fn handler(ctx: Context<Unstake>, amount: u64) -> Result<()> {
    ctx.accounts.pool.ensure_not_paused()?;
    require!(amount > 0, StakingError::ZeroUnstakeAmount);
    require!(
        ctx.accounts.stake_info.stake_amount >= amount,
        StakingError::InsufficientStakeAmount
    );

    let now = Clock::get()?.unix_timestamp;
    require!(
        ctx.accounts
            .stake_info
            .lockup_ended(now, ctx.accounts.pool.lockup_duration),
        StakingError::LockupPeriodNotEnded
    );

    let pool = &mut ctx.accounts.pool;
    let stake_info = &mut ctx.accounts.stake_info;

    // Settle accrual against the old principal before shrinking it.
    pool.update_rewards(now, Some(stake_info))?;

    stake_info.stake_amount = stake_info
        .stake_amount
        .checked_sub(amount)
        .ok_or(StakingError::ArithmeticOverflow)?;
    pool.total_staked = pool
        .total_staked
        .checked_sub(amount)
        .ok_or(StakingError::ArithmeticOverflow)?;

    // A fresh stake after a full exit starts a new lockup window.
    if stake_info.stake_amount == 0 {
        stake_info.stake_start_time = 0;
    }

    let pool_seeds = &[POOL_SEED, &[ctx.accounts.pool.bump]];
    let signer_seeds = &[&pool_seeds[..]];

    let cpi_accounts = Transfer {
        from: ctx.accounts.staking_vault.to_account_info(),
        to: ctx.accounts.user_staking_wallet.to_account_info(),
        authority: ctx.accounts.pool.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        cpi_accounts,
        signer_seeds,
    );
    token::transfer(cpi_ctx, amount)?;

    emit!(UnstakeEvent {
        user: ctx.accounts.user.key(),
        amount,
    });

    Ok(())
}
