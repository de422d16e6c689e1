//! Block-driven reward accrual.
//!
//! The pool keeps a single accumulator, `acc_reward_per_share`, holding the
//! reward earned by one unit of stake since the pool was created, scaled by
//! [`ACC_PRECISION`]. A participant's reward is their stake times the growth
//! of the accumulator since their last checkpoint, so no per-block iteration
//! over participants is ever needed.
//!
//! Products are formed in 256 bits and only the quotient has to fit back
//! into `i128`.

use common::StakeError;
use soroban_sdk::{Env, I256};

use crate::ledger::{PoolConfig, PoolState};

/// Fixed-point scale of `acc_reward_per_share`.
///
/// Large enough that a single staker of `10^18` units loses nothing to
/// truncation at a rate of one reward unit per block.
pub const ACC_PRECISION: i128 = 1_000_000_000_000_000_000;

/// `a * b / d` without an intermediate `i128` product. `None` if the
/// quotient does not fit or `d` is zero.
pub fn mul_div(env: &Env, a: i128, b: i128, d: i128) -> Option<i128> {
    if d == 0 {
        return None;
    }
    I256::from_i128(env, a)
        .mul(&I256::from_i128(env, b))
        .div(&I256::from_i128(env, d))
        .to_i128()
}

/// Largest total emission (`reward_per_block` times window length) whose
/// accumulator still fits in `i128` when a single unit is staked.
pub fn max_emission() -> i128 {
    i128::MAX / ACC_PRECISION
}

/// Number of rewarded blocks between `last_reward_block` and `current`,
/// clipped to the `[start_block, end_block]` window.
pub fn reward_blocks(start_block: u32, end_block: u32, last_reward_block: u32, current: u32) -> u32 {
    let from = last_reward_block.max(start_block);
    let to = current.min(end_block);
    to.saturating_sub(from)
}

/// Grow the accumulator by `blocks * reward_per_block` spread over
/// `total_staked`. Returns `acc` unchanged for an empty pool or no elapsed
/// blocks; `None` on overflow.
pub fn accumulate(
    env: &Env,
    acc: i128,
    reward_per_block: i128,
    blocks: u32,
    total_staked: i128,
) -> Option<i128> {
    if total_staked <= 0 || blocks == 0 {
        return Some(acc);
    }
    let reward = reward_per_block.checked_mul(blocks as i128)?;
    let increment = mul_div(env, reward, ACC_PRECISION, total_staked)?;
    acc.checked_add(increment)
}

/// Reward owed to a participant: what accrued on `staked` since the
/// `reward_debt` checkpoint, plus what was already settled.
pub fn earned(
    env: &Env,
    staked: i128,
    acc: i128,
    reward_debt: i128,
    pending_reward: i128,
) -> Option<i128> {
    let delta = acc.checked_sub(reward_debt)?;
    let accrued = mul_div(env, staked, delta, ACC_PRECISION)?;
    accrued.checked_add(pending_reward)
}

/// Bring the pool accumulator up to `current`.
///
/// `last_reward_block` advances even when nothing is staked, so blocks spent
/// empty are neither paid out later nor lost to the next staker. Calling
/// this twice with the same `current` changes nothing the second time.
pub fn advance(
    env: &Env,
    config: &PoolConfig,
    state: &PoolState,
    current: u32,
) -> Result<PoolState, StakeError> {
    if current <= state.last_reward_block {
        return Ok(state.clone());
    }

    let blocks = reward_blocks(
        config.start_block,
        config.end_block,
        state.last_reward_block,
        current,
    );
    let acc_reward_per_share = accumulate(
        env,
        state.acc_reward_per_share,
        config.reward_per_block,
        blocks,
        state.total_staked,
    )
    .ok_or(StakeError::ArithmeticOverflow)?;

    Ok(PoolState {
        last_reward_block: current,
        acc_reward_per_share,
        ..state.clone()
    })
}
