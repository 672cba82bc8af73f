//! Program constants for the token staking program.
//!
//! This module defines the PDA seeds and the fixed-point precision used
//! throughout reward accounting.

/// Seed for deriving the pool PDA. The pool is a singleton: the seed carries
/// no further discriminant, so at most one pool exists per deployment.
pub const POOL_SEED: &[u8] = b"pool";

/// Seed for deriving per-user stake info PDAs (combined with the user key).
pub const STAKE_INFO_SEED: &[u8] = b"stake_info";

/// Seed for deriving the staking vault PDA (holds staked principal).
pub const STAKING_VAULT_SEED: &[u8] = b"staking_vault";

/// Seed for deriving the reward vault PDA (holds reward funds).
pub const REWARD_VAULT_SEED: &[u8] = b"reward_vault";

/// Fixed-point scale for the reward-per-token accumulator.
///
/// The accumulator is a `u128` scaled by 10^12, so sub-unit reward fractions
/// survive repeated truncating divisions over the pool's lifetime while still
/// leaving headroom for `elapsed * reward_rate * PRECISION` at realistic rates.
pub const PRECISION: u128 = 1_000_000_000_000;
