//! Initialize instruction handler.
//!
//! Creates the singleton pool and its two custodial vaults. The pool PDA uses
//! a constant seed, so a second initialization fails at account creation.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::events::PoolInitializedEvent;
use crate::state::Pool;

/// Accounts required for pool initialization.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The signer becomes the pool admin and pays for account creation.
    #[account(mut)]
    pub admin: Signer<'info>,

    /// The pool account to be created. Constant seed enforces the singleton.
    #[account(
        init,
        payer = admin,
        space = 8 + Pool::INIT_SPACE,
        seeds = [POOL_SEED],
        bump
    )]
    pub pool: Account<'info, Pool>,

    /// Mint of the token users will stake.
    pub staking_mint: Account<'info, Mint>,

    /// Mint of the token rewards are paid in.
    pub reward_mint: Account<'info, Mint>,

    /// Vault for staked principal; transfer authority is the pool PDA.
    #[account(
        init,
        payer = admin,
        seeds = [STAKING_VAULT_SEED],
        bump,
        token::mint = staking_mint,
        token::authority = pool
    )]
    pub staking_vault: Account<'info, TokenAccount>,

    /// Vault for reward funds; transfer authority is the pool PDA.
    #[account(
        init,
        payer = admin,
        seeds = [REWARD_VAULT_SEED],
        bump,
        token::mint = reward_mint,
        token::authority = pool
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    /// System program for account creation.
    pub system_program: Program<'info, System>,

    /// Token program for vault creation.
    pub token_program: Program<'info, Token>,
}

/// Initialize the staking pool.
///
/// # Arguments
/// * `ctx` - Initialize accounts context
/// * `reward_rate` - Reward units emitted per second across all stake
/// * `lockup_duration` - Seconds principal stays locked after staking from zero
pub fn handler(ctx: Context<Initialize>, reward_rate: u64, lockup_duration: i64) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    let now = Clock::get()?.unix_timestamp;

    pool.admin = ctx.accounts.admin.key();
    pool.staking_mint = ctx.accounts.staking_mint.key();
    pool.staking_vault = ctx.accounts.staking_vault.key();
    pool.reward_mint = ctx.accounts.reward_mint.key();
    pool.reward_vault = ctx.accounts.reward_vault.key();
    pool.reward_rate = reward_rate;
    pool.last_update_time = now;
    pool.total_staked = 0;
    pool.reward_per_token_stored = 0;
    pool.lockup_duration = lockup_duration;
    pool.paused = false;
    pool.bump = ctx.bumps.pool;

    msg!("Pool initialized");
    msg!("Admin: {}", pool.admin);
    msg!("Reward rate: {}/s, lockup: {}s", reward_rate, lockup_duration);

    emit!(PoolInitializedEvent {
        admin: ctx.accounts.admin.key(),
        reward_rate,
        lockup_duration,
    });

    Ok(())
}
