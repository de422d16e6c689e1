//! Pool configuration, pool-wide state and per-participant stake records,
//! plus the storage accessors for each.

use common::{Asset, StakeError, TTL_EXTEND_TO, TTL_THRESHOLD};
use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::rewards;

// ── Storage key constants ────────────────────────────────────────────────────

const CONFIG: Symbol = symbol_short!("CONFIG");
const STATE: Symbol = symbol_short!("STATE");

// Per-participant persistent storage uses tuple keys: (prefix, participant)
const STAKE_INFO: Symbol = symbol_short!("STK_INFO");

// ── Types ────────────────────────────────────────────────────────────────────

/// Fixed at `initialize`; never changes afterwards.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    /// What this pool accepts as stake.
    pub asset: Asset,
    /// Token contract that moves the staked asset. Equal to the token
    /// address for `Asset::Token`, the native asset contract for
    /// `Asset::Native`.
    pub asset_contract: Address,
    /// Token paid out by `claim`.
    pub reward_token: Address,
    /// First block of the reward window.
    pub start_block: u32,
    /// Last block of the reward window.
    pub end_block: u32,
    /// Reward units emitted per block across all stakers.
    pub reward_per_block: i128,
    /// Blocks an unstaked amount waits before it can be withdrawn.
    pub unlock_delay: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolState {
    pub last_reward_block: u32,
    pub acc_reward_per_share: i128,
    pub total_staked: i128,
    pub total_pending_withdraw: i128,
}

/// One participant's position in the pool.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StakeInfo {
    pub staked_amount: i128,
    /// Unstaked but not yet withdrawn.
    pub pending_withdraw: i128,
    /// Accumulator value at the last settlement.
    pub reward_debt: i128,
    /// Settled reward not yet claimed.
    pub pending_reward: i128,
    /// First block at which `pending_withdraw` may be withdrawn.
    pub unlock_block: u32,
}

impl PoolConfig {
    /// Rejects inverted windows, negative rates and emissions too large
    /// for the accumulator, so accrual over any part of the window cannot
    /// overflow.
    pub fn validate(&self) -> Result<(), StakeError> {
        if self.start_block > self.end_block || self.reward_per_block < 0 {
            return Err(StakeError::InvalidConfig);
        }
        let window = (self.end_block - self.start_block) as i128;
        match self.reward_per_block.checked_mul(window) {
            Some(emission) if emission <= rewards::max_emission() => {}
            _ => return Err(StakeError::InvalidConfig),
        }
        if let Asset::Token(token) = &self.asset {
            if *token != self.asset_contract {
                return Err(StakeError::InvalidConfig);
            }
        }
        if self.asset_contract == self.reward_token {
            return Err(StakeError::InvalidConfig);
        }
        Ok(())
    }
}

impl StakeInfo {
    /// Fold everything accrued since the last checkpoint into
    /// `pending_reward` and move the checkpoint to `acc_reward_per_share`.
    pub fn settle(&mut self, env: &Env, acc_reward_per_share: i128) -> Result<(), StakeError> {
        self.pending_reward = rewards::earned(
            env,
            self.staked_amount,
            acc_reward_per_share,
            self.reward_debt,
            self.pending_reward,
        )
        .ok_or(StakeError::ArithmeticOverflow)?;
        self.reward_debt = acc_reward_per_share;
        Ok(())
    }
}

// ── Storage helpers ──────────────────────────────────────────────────────────

fn stake_info_key(participant: &Address) -> (Symbol, Address) {
    (STAKE_INFO, participant.clone())
}

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&CONFIG)
}

pub fn load_config(env: &Env) -> Result<PoolConfig, StakeError> {
    env.storage()
        .instance()
        .get(&CONFIG)
        .ok_or(StakeError::NotInitialized)
}

pub fn store_config(env: &Env, config: &PoolConfig) {
    env.storage().instance().set(&CONFIG, config);
    extend_instance_ttl(env);
}

pub fn load_state(env: &Env) -> Result<PoolState, StakeError> {
    env.storage()
        .instance()
        .get(&STATE)
        .ok_or(StakeError::NotInitialized)
}

pub fn store_state(env: &Env, state: &PoolState) {
    env.storage().instance().set(&STATE, state);
    extend_instance_ttl(env);
}

/// Missing records read as an empty position.
pub fn load_stake_info(env: &Env, participant: &Address) -> StakeInfo {
    env.storage()
        .persistent()
        .get(&stake_info_key(participant))
        .unwrap_or_default()
}

pub fn store_stake_info(env: &Env, participant: &Address, info: &StakeInfo) {
    let key = stake_info_key(participant);
    env.storage().persistent().set(&key, info);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}
