//! Emergency withdraw instruction handlers.
//!
//! Admin-only escape hatch for incident response: pulls tokens straight out
//! of a vault to an admin-chosen destination. Deliberately does not touch
//! `total_staked` or any user record, so using it can desynchronize vault
//! balances from the accounting ledger. The admin owns that consequence.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::EmergencyWithdrawEvent;
use crate::state::Pool;

/// Accounts required for emergency withdrawal from the staking vault.
#[derive(Accounts)]
pub struct EmergencyWithdrawStaked<'info> {
    /// The pool.
    #[account(
        has_one = admin @ StakingError::NotAdmin,
        has_one = staking_vault
    )]
    pub pool: Account<'info, Pool>,

    /// The pool admin.
    pub admin: Signer<'info>,

    /// Pool's staking vault.
    #[account(mut)]
    pub staking_vault: Account<'info, TokenAccount>,

    /// Destination token account chosen by the admin.
    #[account(mut)]
    pub destination_wallet: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Accounts required for emergency withdrawal from the reward vault.
#[derive(Accounts)]
pub struct EmergencyWithdrawRewards<'info> {
    /// The pool.
    #[account(
        has_one = admin @ StakingError::NotAdmin,
        has_one = reward_vault
    )]
    pub pool: Account<'info, Pool>,

    /// The pool admin.
    pub admin: Signer<'info>,

    /// Pool's reward vault.
    #[account(mut)]
    pub reward_vault: Account<'info, TokenAccount>,

    /// Destination token account chosen by the admin.
    #[account(mut)]
    pub destination_wallet: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Pull staked tokens out of the staking vault, bypassing accounting.
pub fn withdraw_staked_handler(ctx: Context<EmergencyWithdrawStaked>, amount: u64) -> Result<()> {
    let pool_seeds = &[POOL_SEED, &[ctx.accounts.pool.bump]];
    let signer_seeds = &[&pool_seeds[..]];

    let cpi_accounts = Transfer {
        from: ctx.accounts.staking_vault.to_account_info(),
        to: ctx.accounts.destination_wallet.to_account_info(),
        authority: ctx.accounts.pool.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        cpi_accounts,
        signer_seeds,
    );
    token::transfer(cpi_ctx, amount)?;

    emit!(EmergencyWithdrawEvent {
        vault: ctx.accounts.staking_vault.key(),
        destination: ctx.accounts.destination_wallet.key(),
        amount,
    });

    Ok(())
}

/// Pull reward tokens out of the reward vault, bypassing accounting.
pub fn withdraw_rewards_handler(ctx: Context<EmergencyWithdrawRewards>, amount: u64) -> Result<()> {
    let pool_seeds = &[POOL_SEED, &[ctx.accounts.pool.bump]];
    let signer_seeds = &[&pool_seeds[..]];

    let cpi_accounts = Transfer {
        from: ctx.accounts.reward_vault.to_account_info(),
        to: ctx.accounts.destination_wallet.to_account_info(),
        authority: ctx.accounts.pool.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        cpi_accounts,
        signer_seeds,
    );
    token::transfer(cpi_ctx, amount)?;

    emit!(EmergencyWithdrawEvent {
        vault: ctx.accounts.reward_vault.key(),
        destination: ctx.accounts.destination_wallet.key(),
        amount,
    });

    Ok(())
}
