//! Pool state account.
//!
//! The pool is the singleton ledger for the staking program: configuration,
//! aggregate stake, and the reward-per-token accumulator that makes reward
//! accrual O(1) per user regardless of how many users are staked.

use anchor_lang::prelude::*;

use crate::constants::PRECISION;
use crate::error::StakingError;
use crate::state::UserStakeInfo;

/// Global pool state. One per deployment, at PDA `["pool"]`.
#[account]
#[derive(InitSpace)]
pub struct Pool {
    /// Authority for admin operations.
    pub admin: Pubkey,
    /// Mint of the staked token.
    pub staking_mint: Pubkey,
    /// Vault holding staked principal; authority is the pool PDA.
    pub staking_vault: Pubkey,
    /// Mint of the reward token.
    pub reward_mint: Pubkey,
    /// Vault holding reward funds; authority is the pool PDA.
    pub reward_vault: Pubkey,
    /// Reward units emitted per second, split pro rata across all stake.
    pub reward_rate: u64,
    /// Timestamp of the last accumulator refresh.
    pub last_update_time: i64,
    /// Sum of all users' staked principal.
    pub total_staked: u64,
    /// Cumulative reward per staked token since inception, scaled by
    /// [`PRECISION`]. Monotonically non-decreasing.
    pub reward_per_token_stored: u128,
    /// Seconds a user's principal stays locked after staking from zero.
    pub lockup_duration: i64,
    /// While paused, stake/unstake/claim are rejected.
    pub paused: bool,
    /// Pool PDA bump, kept for vault-transfer signing.
    pub bump: u8,
}

impl Pool {
    /// Gate for user-facing operations (stake, unstake, claim). Admin
    /// operations and stake-record closing bypass it.
    pub fn ensure_not_paused(&self) -> Result<()> {
        require!(!self.paused, StakingError::ProgramPaused);
        Ok(())
    }

    /// Refresh the global accumulator and optionally reconcile one user's
    /// record against it.
    ///
    /// Called at the start of every mutating operation, before any change to
    /// stake sizes; otherwise past accrual would be computed against the
    /// wrong principal. The clock is injected so the math stays testable.
    pub fn update_rewards(
        &mut self,
        now: i64,
        user_stake_info: Option<&mut UserStakeInfo>,
    ) -> Result<()> {
        // Clamp to zero in case the host clock regresses between slots; a
        // negative difference must not wrap through the unsigned cast.
        let elapsed = now.saturating_sub(self.last_update_time).max(0) as u128;

        if elapsed > 0 && self.total_staked > 0 {
            let increment = elapsed
                .checked_mul(self.reward_rate as u128)
                .ok_or(StakingError::ArithmeticOverflow)?
                .checked_mul(PRECISION)
                .ok_or(StakingError::ArithmeticOverflow)?
                .checked_div(self.total_staked as u128)
                .ok_or(StakingError::ArithmeticOverflow)?;
            self.reward_per_token_stored = self
                .reward_per_token_stored
                .checked_add(increment)
                .ok_or(StakingError::ArithmeticOverflow)?;
        }

        self.last_update_time = now;

        if let Some(info) = user_stake_info {
            info.settle(self)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_pool(reward_rate: u64, total_staked: u64) -> Pool {
        Pool {
            admin: Pubkey::new_unique(),
            staking_mint: Pubkey::new_unique(),
            staking_vault: Pubkey::new_unique(),
            reward_mint: Pubkey::new_unique(),
            reward_vault: Pubkey::new_unique(),
            reward_rate,
            last_update_time: 0,
            total_staked,
            reward_per_token_stored: 0,
            lockup_duration: 0,
            paused: false,
            bump: 255,
        }
    }

    #[test]
    fn accumulator_tracks_elapsed_time() {
        let mut pool = test_pool(100, 1000);

        pool.update_rewards(3, None).unwrap();

        // 3s * 100/s * PRECISION / 1000 staked
        assert_eq!(pool.reward_per_token_stored, 3 * 100 * PRECISION / 1000);
        assert_eq!(pool.last_update_time, 3);
    }

    #[test]
    fn accumulator_idle_without_stake() {
        let mut pool = test_pool(100, 0);

        pool.update_rewards(1000, None).unwrap();

        // No stake means no one to attribute rewards to; only the clock moves.
        assert_eq!(pool.reward_per_token_stored, 0);
        assert_eq!(pool.last_update_time, 1000);
    }

    #[test]
    fn clock_regression_is_clamped() {
        let mut pool = test_pool(100, 1000);
        pool.update_rewards(10, None).unwrap();
        let stored = pool.reward_per_token_stored;

        pool.update_rewards(5, None).unwrap();

        assert_eq!(pool.reward_per_token_stored, stored);
        assert_eq!(pool.last_update_time, 5);
    }

    #[test]
    fn accumulator_is_monotonic() {
        let mut pool = test_pool(7, 333);
        let mut last = 0u128;
        for now in [1, 2, 2, 10, 9, 50, 1000] {
            pool.update_rewards(now, None).unwrap();
            assert!(pool.reward_per_token_stored >= last);
            last = pool.reward_per_token_stored;
        }
    }

    #[test]
    fn rate_change_is_not_retroactive() {
        let mut pool = test_pool(100, 1000);

        // Accrue 10s at rate 100, then switch to rate 0.
        pool.update_rewards(10, None).unwrap();
        let at_old_rate = pool.reward_per_token_stored;
        pool.reward_rate = 0;
        pool.update_rewards(20, None).unwrap();

        assert_eq!(pool.reward_per_token_stored, at_old_rate);

        // And back up: only the segment after the change accrues at the new
        // rate; the earlier segment is untouched.
        pool.reward_rate = 50;
        pool.update_rewards(30, None).unwrap();
        assert_eq!(
            pool.reward_per_token_stored,
            at_old_rate + 10 * 50 * PRECISION / 1000
        );
    }

    #[test]
    fn refresh_overflow_is_an_error() {
        let mut pool = test_pool(u64::MAX, 1);
        pool.last_update_time = 0;

        let res = pool.update_rewards(i64::MAX, None);

        assert_eq!(res, Err(StakingError::ArithmeticOverflow.into()));
        // Failed refresh must not half-apply.
        assert_eq!(pool.reward_per_token_stored, 0);
    }

    #[test]
    fn pause_gate_rejects_user_operations() {
        let mut pool = test_pool(100, 1000);
        assert!(pool.ensure_not_paused().is_ok());

        pool.paused = true;
        assert_eq!(
            pool.ensure_not_paused(),
            Err(StakingError::ProgramPaused.into())
        );

        pool.paused = false;
        assert!(pool.ensure_not_paused().is_ok());
    }

    #[test]
    fn refresh_settles_user_against_new_accumulator() {
        let mut pool = test_pool(100, 1000);
        let mut info = UserStakeInfo {
            stake_amount: 1000,
            ..Default::default()
        };

        pool.update_rewards(3, Some(&mut info)).unwrap();

        // Single staker: totalStaked == stakeAmount cancels out.
        assert_eq!(info.rewards, 300);
        assert_eq!(info.reward_per_token_paid, pool.reward_per_token_stored);
    }

    #[test]
    fn rewards_split_pro_rata_and_conserve_total() {
        let mut pool = test_pool(90, 0);
        let mut alice = UserStakeInfo::default();
        let mut bob = UserStakeInfo::default();

        // Alice stakes 100 at t=0.
        pool.update_rewards(0, Some(&mut alice)).unwrap();
        alice.stake_amount = 100;
        pool.total_staked += 100;

        // Bob stakes 200 at t=10; Alice alone earned the first 10s.
        pool.update_rewards(10, Some(&mut bob)).unwrap();
        bob.stake_amount = 200;
        pool.total_staked += 200;

        // Settle both at t=20.
        pool.update_rewards(20, Some(&mut alice)).unwrap();
        pool.update_rewards(20, Some(&mut bob)).unwrap();

        // Alice: 10s solo (900) + a third of the next 10s (300).
        assert_eq!(alice.rewards, 1200);
        // Bob: two thirds of the second window.
        assert_eq!(bob.rewards, 600);
        assert_eq!(pool.total_staked, alice.stake_amount + bob.stake_amount);
    }
}
