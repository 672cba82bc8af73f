//! Stake instruction handler.
//!
//! Moves tokens from the user into the staking vault and grows the user's
//! stake record, settling previously accrued rewards first.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::StakeEvent;
use crate::state::{Pool, UserStakeInfo};

/// Accounts required for staking.
#[derive(Accounts)]
pub struct Stake<'info> {
    /// The user staking tokens.
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

    /// User's stake record (created on first stake).
    #[account(
        init_if_needed,
        payer = user,
        space = 8 + UserStakeInfo::INIT_SPACE,
        seeds = [STAKE_INFO_SEED, user.key().as_ref()],
        bump
    )]
    pub stake_info: Account<'info, UserStakeInfo>,

    /// User's token account holding the tokens to stake.
    #[account(
        mut,
        constraint = user_staking_wallet.mint == pool.staking_mint,
        constraint = user_staking_wallet.owner == user.key()
    )]
    pub user_staking_wallet: Account<'info, TokenAccount>,

    /// Pool's staking vault.
    #[account(mut)]
    pub staking_vault: Account<'info, TokenAccount>,

    /// System program (stake record creation).
    pub system_program: Program<'info, System>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Stake tokens into the pool.
///
/// # Arguments
/// * `ctx` - Stake accounts context
/// * `amount` - Amount of tokens to stake
pub fn handler(ctx: Context<Stake>, amount: u64) -> Result<()> {
    ctx.accounts.pool.ensure_not_paused()?;
    require!(amount > 0, StakingError::ZeroStakeAmount);

    let now = Clock::get()?.unix_timestamp;
    let pool = &mut ctx.accounts.pool;
    let stake_info = &mut ctx.accounts.stake_info;

    // Settle accrual against the old principal before growing it.
    pool.update_rewards(now, Some(stake_info))?;

    if stake_info.owner == Pubkey::default() {
        stake_info.owner = ctx.accounts.user.key();
        stake_info.bump = ctx.bumps.stake_info;
    }

    // Staking from a fully-unstaked position restarts the lockup clock;
    // topping up an existing stake does not.
    if stake_info.stake_amount == 0 {
        stake_info.stake_start_time = now;
    }

    stake_info.stake_amount = stake_info
        .stake_amount
        .checked_add(amount)
        .ok_or(StakingError::ArithmeticOverflow)?;
    pool.total_staked = pool
        .total_staked
        .checked_add(amount)
        .ok_or(StakingError::ArithmeticOverflow)?;

    let cpi_accounts = Transfer {
        from: ctx.accounts.user_staking_wallet.to_account_info(),
        to: ctx.accounts.staking_vault.to_account_info(),
        authority: ctx.accounts.user.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts);
    token::transfer(cpi_ctx, amount)?;

    emit!(StakeEvent {
        user: ctx.accounts.user.key(),
        amount,
    });

    Ok(())
}
