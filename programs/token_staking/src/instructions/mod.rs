//! Instruction handlers for the token staking program.

pub mod admin;
pub mod claim_rewards;
pub mod close_stake_info;
pub mod emergency_withdraw;
pub mod fund_rewards;
pub mod initialize;
pub mod stake;
pub mod unstake;

pub use admin::*;
pub use claim_rewards::*;
pub use close_stake_info::*;
pub use emergency_withdraw::*;
pub use fund_rewards::*;
pub use initialize::*;
pub use stake::*;
pub use unstake::*;
