#![no_std]

pub mod events;

use common::{forward, Asset, StakeError, StakeFactoryClient, StakePoolClient};
use common::{TTL_EXTEND_TO, TTL_THRESHOLD};
use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, Symbol};

// ── Storage key constants ────────────────────────────────────────────────────

const FACTORY: Symbol = symbol_short!("FACTORY");

// ── Contract ─────────────────────────────────────────────────────────────────

/// Single entry point for stakers.
///
/// Every call names an asset; the router looks the pool up in the factory
/// and forwards the call. It keeps no balances of its own, and errors raised
/// by the factory or the pool come back to the caller unchanged.
#[contract]
pub struct StakeRouterContract;

#[contractimpl]
impl StakeRouterContract {
    pub fn initialize(env: Env, factory: Address) -> Result<(), StakeError> {
        if env.storage().instance().has(&FACTORY) {
            return Err(StakeError::AlreadyInitialized);
        }

        env.storage().instance().set(&FACTORY, &factory);
        env.storage()
            .instance()
            .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);

        events::publish_initialized(&env, factory);
        Ok(())
    }

    pub fn factory(env: Env) -> Result<Address, StakeError> {
        Self::load_factory(&env)
    }

    /// Pool registered for `asset`; `UnknownAsset` if there is none.
    pub fn get_pool(env: Env, asset: Asset) -> Result<Address, StakeError> {
        let factory = Self::load_factory(&env)?;
        forward(StakeFactoryClient::new(&env, &factory).try_get_pool(&asset))
    }

    // ── Forwarded operations ────────────────────────────────────────────────

    /// Stake `amount` of `asset` for `recipient`.
    ///
    /// For a token asset the recipient must have approved the pool (the
    /// address `get_pool` returns), not the router.
    pub fn stake(env: Env, asset: Asset, recipient: Address, amount: i128) -> Result<(), StakeError> {
        recipient.require_auth();
        let pool = Self::get_pool(env.clone(), asset)?;
        forward(StakePoolClient::new(&env, &pool).try_stake(&recipient, &amount))
    }

    pub fn unstake(
        env: Env,
        asset: Asset,
        participant: Address,
        amount: i128,
    ) -> Result<(), StakeError> {
        participant.require_auth();
        let pool = Self::get_pool(env.clone(), asset)?;
        forward(StakePoolClient::new(&env, &pool).try_unstake(&participant, &amount))
    }

    pub fn withdraw(env: Env, asset: Asset, participant: Address) -> Result<i128, StakeError> {
        participant.require_auth();
        let pool = Self::get_pool(env.clone(), asset)?;
        forward(StakePoolClient::new(&env, &pool).try_withdraw(&participant))
    }

    pub fn claim(env: Env, asset: Asset, participant: Address) -> Result<i128, StakeError> {
        participant.require_auth();
        let pool = Self::get_pool(env.clone(), asset)?;
        forward(StakePoolClient::new(&env, &pool).try_claim(&participant))
    }

    // ── View functions ───────────────────────────────────────────────────────

    pub fn staking_balance(env: Env, asset: Asset, participant: Address) -> Result<i128, StakeError> {
        let pool = Self::get_pool(env.clone(), asset)?;
        Ok(StakePoolClient::new(&env, &pool).staking_balance(&participant))
    }

    pub fn pending_withdraw(
        env: Env,
        asset: Asset,
        participant: Address,
    ) -> Result<i128, StakeError> {
        let pool = Self::get_pool(env.clone(), asset)?;
        Ok(StakePoolClient::new(&env, &pool).pending_withdraw(&participant))
    }

    pub fn pending_reward(env: Env, asset: Asset, participant: Address) -> Result<i128, StakeError> {
        let pool = Self::get_pool(env.clone(), asset)?;
        forward(StakePoolClient::new(&env, &pool).try_pending_reward(&participant))
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn load_factory(env: &Env) -> Result<Address, StakeError> {
        env.storage()
            .instance()
            .get(&FACTORY)
            .ok_or(StakeError::NotInitialized)
    }
}
