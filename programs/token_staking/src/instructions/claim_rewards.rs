//! Claim rewards instruction handler.
//!
//! Pays out the user's settled reward balance from the reward vault.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::ClaimEvent;
use crate::state::{Pool, UserStakeInfo};

/// Accounts required for claiming rewards.
#[derive(Accounts)]
pub struct ClaimRewards<'info> {
    /// The user claiming rewards.
    #[account(mut)]
    pub user: Signer<'info>,

    /// The pool.
    #[account(
        mut,
        seeds = [POOL_SEED],
        bump = pool.bump,
        has_one = reward_vault
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

    /// User's token account receiving the rewards.
    #[account(
        mut,
        constraint = user_reward_wallet.mint == pool.reward_mint,
        constraint = user_reward_wallet.owner == user.key()
    )]
    pub user_reward_wallet: Account<'info, TokenAccount>,

    /// Pool's reward vault.
    #[account(mut)]
    pub reward_vault: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Claim all settled rewards.
///
/// # Arguments
/// * `ctx` - ClaimRewards accounts context
pub fn handler(ctx: Context<ClaimRewards>) -> Result<()> {
    ctx.accounts.pool.ensure_not_paused()?;

    let now = Clock::get()?.unix_timestamp;
    let pool = &mut ctx.accounts.pool;
    let stake_info = &mut ctx.accounts.stake_info;

    pool.update_rewards(now, Some(stake_info))?;

    let rewards_to_claim = stake_info.rewards;
    require!(rewards_to_claim > 0, StakingError::NoRewardsToClaim);
    require!(
        ctx.accounts.reward_vault.amount >= rewards_to_claim,
        StakingError::InsufficientVaultBalance
    );

    ctx.accounts.stake_info.rewards = 0;

    let pool_seeds = &[POOL_SEED, &[ctx.accounts.pool.bump]];
    let signer_seeds = &[&pool_seeds[..]];

    let cpi_accounts = Transfer {
        from: ctx.accounts.reward_vault.to_account_info(),
        to: ctx.accounts.user_reward_wallet.to_account_info(),
        authority: ctx.accounts.pool.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        cpi_accounts,
        signer_seeds,
    );
    token::transfer(cpi_ctx, rewards_to_claim)?;

    emit!(ClaimEvent {
        user: ctx.accounts.user.key(),
        amount: rewards_to_claim,
    });

    Ok(())
}
