#![no_std]

pub mod events;
pub mod ledger;
pub mod rewards;

use common::{Asset, StakeError};
use soroban_sdk::{contract, contractimpl, token, Address, Env};

pub use ledger::{PoolConfig, PoolState, StakeInfo};

// ── Contract ─────────────────────────────────────────────────────────────────

/// Staking ledger and reward accrual for a single asset.
#[contract]
pub struct StakePoolContract;

#[contractimpl]
impl StakePoolContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the pool.
    ///
    /// Accrual starts at the later of the current block and
    /// `config.start_block`. The reward token balance is funded separately,
    /// by transferring or minting reward tokens to the pool's address.
    pub fn initialize(env: Env, config: PoolConfig) -> Result<(), StakeError> {
        if ledger::is_initialized(&env) {
            return Err(StakeError::AlreadyInitialized);
        }
        config.validate()?;

        let state = PoolState {
            last_reward_block: env.ledger().sequence().max(config.start_block),
            acc_reward_per_share: 0,
            total_staked: 0,
            total_pending_withdraw: 0,
        };

        ledger::store_config(&env, &config);
        ledger::store_state(&env, &state);

        events::publish_initialized(
            &env,
            config.asset,
            config.reward_token,
            config.start_block,
            config.end_block,
            config.reward_per_block,
        );

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Deposit `amount` of the pool's asset for `participant`.
    ///
    /// Token pools pull the funds with `transfer_from`, so the participant
    /// must have approved the pool for at least `amount` beforehand. The
    /// native pool takes the funds with a plain transfer authorised by the
    /// participant, and also accepts `amount == 0`, which only settles
    /// accrued rewards.
    pub fn stake(env: Env, participant: Address, amount: i128) -> Result<(), StakeError> {
        participant.require_auth();
        let config = ledger::load_config(&env)?;

        if amount < 0 || (amount == 0 && !config.asset.is_native()) {
            return Err(StakeError::InvalidAmount);
        }

        let pool = env.current_contract_address();
        let asset = token::Client::new(&env, &config.asset_contract);
        if amount > 0 {
            if !config.asset.is_native() && asset.allowance(&participant, &pool) < amount {
                return Err(StakeError::InsufficientAllowance);
            }
            if asset.balance(&participant) < amount {
                return Err(StakeError::InsufficientBalance);
            }
        }

        let (mut state, mut info) = Self::checkpoint(&env, &config, &participant)?;

        info.staked_amount = info
            .staked_amount
            .checked_add(amount)
            .ok_or(StakeError::ArithmeticOverflow)?;
        state.total_staked = state
            .total_staked
            .checked_add(amount)
            .ok_or(StakeError::ArithmeticOverflow)?;

        ledger::store_state(&env, &state);
        ledger::store_stake_info(&env, &participant, &info);

        // Funds move only after the ledger is consistent.
        if amount > 0 {
            match &config.asset {
                Asset::Native => asset.transfer(&participant, &pool, &amount),
                Asset::Token(_) => asset.transfer_from(&pool, &participant, &pool, &amount),
            }
        }

        events::publish_stake(&env, participant, amount);

        Ok(())
    }

    /// Move `amount` from the staked balance into the pending withdrawal.
    ///
    /// No funds leave the pool here; they become withdrawable after the
    /// pool's unlock delay. A later unstake restarts the delay for the whole
    /// pending amount.
    pub fn unstake(env: Env, participant: Address, amount: i128) -> Result<(), StakeError> {
        participant.require_auth();
        let config = ledger::load_config(&env)?;

        if amount <= 0 {
            return Err(StakeError::InvalidAmount);
        }

        let (mut state, mut info) = Self::checkpoint(&env, &config, &participant)?;
        if info.staked_amount < amount {
            return Err(StakeError::InsufficientBalance);
        }

        info.staked_amount -= amount;
        info.pending_withdraw = info
            .pending_withdraw
            .checked_add(amount)
            .ok_or(StakeError::ArithmeticOverflow)?;
        info.unlock_block = env.ledger().sequence().saturating_add(config.unlock_delay);

        state.total_staked -= amount;
        state.total_pending_withdraw = state
            .total_pending_withdraw
            .checked_add(amount)
            .ok_or(StakeError::ArithmeticOverflow)?;

        ledger::store_state(&env, &state);
        ledger::store_stake_info(&env, &participant, &info);

        events::publish_unstake(&env, participant, amount);

        Ok(())
    }

    /// Pay out the whole pending withdrawal in the pool's asset.
    ///
    /// Fails with `InsufficientBalance` when nothing is pending and with
    /// `WithdrawLocked` before the unlock block. Pending funds earn nothing,
    /// so the participant is not settled, and a failed accrual never holds
    /// the payout back.
    pub fn withdraw(env: Env, participant: Address) -> Result<i128, StakeError> {
        participant.require_auth();
        let config = ledger::load_config(&env)?;

        let stored = ledger::load_state(&env)?;
        let mut state = rewards::advance(&env, &config, &stored, env.ledger().sequence())
            .unwrap_or(stored);
        let mut info = ledger::load_stake_info(&env, &participant);
        let amount = info.pending_withdraw;
        if amount <= 0 {
            return Err(StakeError::InsufficientBalance);
        }
        if env.ledger().sequence() < info.unlock_block {
            return Err(StakeError::WithdrawLocked);
        }

        info.pending_withdraw = 0;
        state.total_pending_withdraw -= amount;

        ledger::store_state(&env, &state);
        ledger::store_stake_info(&env, &participant, &info);

        token::Client::new(&env, &config.asset_contract).transfer(
            &env.current_contract_address(),
            &participant,
            &amount,
        );

        events::publish_withdraw(&env, participant, amount);

        Ok(amount)
    }

    // ── Rewards ─────────────────────────────────────────────────────────────

    /// Pay `participant` every reward accrued so far.
    ///
    /// The pool must hold enough reward tokens; otherwise nothing changes
    /// and `InsufficientRewardFunds` is returned. Claiming with nothing
    /// accrued succeeds and returns 0.
    pub fn claim(env: Env, participant: Address) -> Result<i128, StakeError> {
        participant.require_auth();
        let config = ledger::load_config(&env)?;

        let (state, mut info) = Self::checkpoint(&env, &config, &participant)?;
        let reward = info.pending_reward;

        let pool = env.current_contract_address();
        let reward_token = token::Client::new(&env, &config.reward_token);
        if reward > 0 && reward_token.balance(&pool) < reward {
            return Err(StakeError::InsufficientRewardFunds);
        }

        info.pending_reward = 0;

        ledger::store_state(&env, &state);
        ledger::store_stake_info(&env, &participant, &info);

        if reward > 0 {
            reward_token.transfer(&pool, &participant, &reward);
        }

        events::publish_claim(&env, participant, reward);

        Ok(reward)
    }

    /// Bring the reward accumulator up to the current block.
    pub fn update_pool(env: Env) -> Result<PoolState, StakeError> {
        let config = ledger::load_config(&env)?;
        let state = ledger::load_state(&env)?;

        let state = rewards::advance(&env, &config, &state, env.ledger().sequence())?;
        ledger::store_state(&env, &state);

        Ok(state)
    }

    // ── View functions ───────────────────────────────────────────────────────

    pub fn staking_balance(env: Env, participant: Address) -> i128 {
        ledger::load_stake_info(&env, &participant).staked_amount
    }

    pub fn pending_withdraw(env: Env, participant: Address) -> i128 {
        ledger::load_stake_info(&env, &participant).pending_withdraw
    }

    /// Reward `participant` could claim at the current block, without
    /// mutating state.
    pub fn pending_reward(env: Env, participant: Address) -> Result<i128, StakeError> {
        let config = ledger::load_config(&env)?;
        let state = ledger::load_state(&env)?;
        let state = rewards::advance(&env, &config, &state, env.ledger().sequence())?;

        let info = ledger::load_stake_info(&env, &participant);
        rewards::earned(
            &env,
            info.staked_amount,
            state.acc_reward_per_share,
            info.reward_debt,
            info.pending_reward,
        )
        .ok_or(StakeError::ArithmeticOverflow)
    }

    pub fn stake_info(env: Env, participant: Address) -> StakeInfo {
        ledger::load_stake_info(&env, &participant)
    }

    pub fn config(env: Env) -> Result<PoolConfig, StakeError> {
        ledger::load_config(&env)
    }

    /// What this pool accepts as stake.
    pub fn asset(env: Env) -> Result<Asset, StakeError> {
        ledger::load_config(&env).map(|config| config.asset)
    }

    pub fn state(env: Env) -> Result<PoolState, StakeError> {
        ledger::load_state(&env)
    }

    pub fn total_staked(env: Env) -> Result<i128, StakeError> {
        ledger::load_state(&env).map(|state| state.total_staked)
    }

    pub fn is_initialized(env: Env) -> bool {
        ledger::is_initialized(&env)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    /// Advance the pool to the current block and settle `participant`
    /// against it. Nothing is written; callers store both values once all
    /// of their own checks have passed.
    fn checkpoint(
        env: &Env,
        config: &PoolConfig,
        participant: &Address,
    ) -> Result<(PoolState, StakeInfo), StakeError> {
        let state = ledger::load_state(env)?;
        let state = rewards::advance(env, config, &state, env.ledger().sequence())?;

        let mut info = ledger::load_stake_info(env, participant);
        info.settle(env, state.acc_reward_per_share)?;

        Ok((state, info))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
