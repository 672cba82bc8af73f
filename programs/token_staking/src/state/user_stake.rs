//! Per-user stake record.

use anchor_lang::prelude::*;

use crate::constants::PRECISION;
use crate::error::StakingError;
use crate::state::Pool;

/// Per-user stake state, at PDA `["stake_info", user]`. Created lazily on the
/// first stake; closable only once both `stake_amount` and `rewards` are zero.
#[account]
#[derive(Default, InitSpace)]
pub struct UserStakeInfo {
    /// The user this record belongs to.
    pub owner: Pubkey,
    /// Principal currently staked. Zero is a valid, persisted state.
    pub stake_amount: u64,
    /// Set when the stake goes from zero to nonzero; topping up an existing
    /// stake does not reset it, so the lockup clock keeps running.
    pub stake_start_time: i64,
    /// Snapshot of `Pool::reward_per_token_stored` at the last settlement.
    pub reward_per_token_paid: u128,
    /// Accrued but unclaimed rewards.
    pub rewards: u64,
    /// Record PDA bump.
    pub bump: u8,
}

impl UserStakeInfo {
    /// Fold rewards accrued since the last settlement into `rewards` and move
    /// the snapshot up to the pool's current accumulator.
    ///
    /// Must run after the pool's global refresh and before any change to
    /// `stake_amount`. Touches only this record; accrual never iterates other
    /// users.
    pub fn settle(&mut self, pool: &Pool) -> Result<()> {
        let pending = self.pending_rewards(pool)?;
        self.rewards = self
            .rewards
            .checked_add(pending)
            .ok_or(StakingError::ArithmeticOverflow)?;
        self.reward_per_token_paid = pool.reward_per_token_stored;
        Ok(())
    }

    /// Rewards earned since the last settlement, not yet folded in.
    pub fn pending_rewards(&self, pool: &Pool) -> Result<u64> {
        let delta = pool
            .reward_per_token_stored
            .checked_sub(self.reward_per_token_paid)
            .ok_or(StakingError::ArithmeticOverflow)?;
        let pending = (self.stake_amount as u128)
            .checked_mul(delta)
            .ok_or(StakingError::ArithmeticOverflow)?
            .checked_div(PRECISION)
            .ok_or(StakingError::ArithmeticOverflow)?;
        u64::try_from(pending).map_err(|_| StakingError::ArithmeticOverflow.into())
    }

    /// Whether the lockup window has elapsed. Expiry is a pure function of
    /// the clock read at operation time, not a scheduled event.
    pub fn lockup_ended(&self, now: i64, lockup_duration: i64) -> bool {
        now.saturating_sub(self.stake_start_time) >= lockup_duration
    }

    /// Closable only from the empty state: no principal, no unclaimed
    /// rewards. Principal is checked first, so a record holding both reports
    /// `StakeNotZero`.
    pub fn ensure_closable(&self) -> Result<()> {
        require!(self.stake_amount == 0, StakingError::StakeNotZero);
        require!(self.rewards == 0, StakingError::RewardsNotClaimed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool_with_accumulator(reward_per_token_stored: u128) -> Pool {
        Pool {
            admin: Pubkey::new_unique(),
            staking_mint: Pubkey::new_unique(),
            staking_vault: Pubkey::new_unique(),
            reward_mint: Pubkey::new_unique(),
            reward_vault: Pubkey::new_unique(),
            reward_rate: 0,
            last_update_time: 0,
            total_staked: 0,
            reward_per_token_stored,
            lockup_duration: 0,
            paused: false,
            bump: 255,
        }
    }

    #[test]
    fn settle_folds_pending_into_rewards() {
        let pool = pool_with_accumulator(3 * PRECISION / 10);
        let mut info = UserStakeInfo {
            stake_amount: 1000,
            ..Default::default()
        };

        info.settle(&pool).unwrap();

        assert_eq!(info.rewards, 300);
        assert_eq!(info.reward_per_token_paid, pool.reward_per_token_stored);
    }

    #[test]
    fn settle_is_idempotent_without_new_accrual() {
        let pool = pool_with_accumulator(5 * PRECISION);
        let mut info = UserStakeInfo {
            stake_amount: 42,
            ..Default::default()
        };

        info.settle(&pool).unwrap();
        let after_first = info.rewards;
        info.settle(&pool).unwrap();

        // Second settlement against an unchanged accumulator adds nothing;
        // this is what makes an immediate second claim fail with
        // NoRewardsToClaim.
        assert_eq!(info.rewards, after_first);
    }

    #[test]
    fn settle_with_zero_stake_accrues_nothing() {
        let pool = pool_with_accumulator(7 * PRECISION);
        let mut info = UserStakeInfo::default();

        info.settle(&pool).unwrap();

        assert_eq!(info.rewards, 0);
        // The snapshot still advances so a later stake does not back-accrue.
        assert_eq!(info.reward_per_token_paid, 7 * PRECISION);
    }

    #[test]
    fn pending_rewards_truncate_sub_unit_fractions() {
        // delta of half a unit across 3 staked tokens -> 1.5, truncated to 1.
        let pool = pool_with_accumulator(PRECISION / 2);
        let info = UserStakeInfo {
            stake_amount: 3,
            ..Default::default()
        };

        assert_eq!(info.pending_rewards(&pool).unwrap(), 1);
    }

    #[test]
    fn lockup_boundary_is_inclusive() {
        let info = UserStakeInfo {
            stake_start_time: 100,
            ..Default::default()
        };

        assert!(!info.lockup_ended(101, 2));
        assert!(info.lockup_ended(102, 2));
        assert!(info.lockup_ended(103, 2));
    }

    #[test]
    fn close_allowed_only_when_empty() {
        let mut info = UserStakeInfo::default();
        assert!(info.ensure_closable().is_ok());

        info.stake_amount = 1;
        assert_eq!(
            info.ensure_closable(),
            Err(StakingError::StakeNotZero.into())
        );

        // Principal gone but rewards pending: still not closable.
        info.stake_amount = 0;
        info.rewards = 1;
        assert_eq!(
            info.ensure_closable(),
            Err(StakingError::RewardsNotClaimed.into())
        );

        info.rewards = 0;
        assert!(info.ensure_closable().is_ok());
    }

    #[test]
    fn zero_lockup_never_locks() {
        let info = UserStakeInfo {
            stake_start_time: 100,
            ..Default::default()
        };

        assert!(info.lockup_ended(100, 0));
    }
}
