//! Fund rewards instruction handler.
//!
//! Moves reward tokens from an admin wallet into the reward vault.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::StakingError;
use crate::events::FundRewardsEvent;
use crate::state::Pool;

/// Accounts required for funding the reward vault.
#[derive(Accounts)]
pub struct FundRewards<'info> {
    /// The pool; `has_one` binds both the admin and the vault.
    #[account(
        has_one = admin @ StakingError::NotAdmin,
        has_one = reward_vault
    )]
    pub pool: Account<'info, Pool>,

    /// The pool admin, paying out of their own wallet.
    pub admin: Signer<'info>,

    /// Admin's token account holding the reward tokens.
    #[account(
        mut,
        constraint = funder_wallet.mint == pool.reward_mint,
        constraint = funder_wallet.owner == admin.key()
    )]
    pub funder_wallet: Account<'info, TokenAccount>,

    /// Pool's reward vault.
    #[account(mut)]
    pub reward_vault: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Fund the reward vault.
///
/// # Arguments
/// * `ctx` - FundRewards accounts context
/// * `amount` - Amount of reward tokens to deposit
pub fn handler(ctx: Context<FundRewards>, amount: u64) -> Result<()> {
    require!(amount > 0, StakingError::ZeroFundAmount);

    let cpi_accounts = Transfer {
        from: ctx.accounts.funder_wallet.to_account_info(),
        to: ctx.accounts.reward_vault.to_account_info(),
        authority: ctx.accounts.admin.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts);
    token::transfer(cpi_ctx, amount)?;

    emit!(FundRewardsEvent { amount });

    Ok(())
}
