#![no_std]

pub mod events;

use common::{forward, Asset, StakeError, StakePoolClient, TTL_EXTEND_TO, TTL_THRESHOLD};
use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, Symbol, Vec};

// ── Storage keys ────────────────────────────────────────────────────────────────

const ADMIN: Symbol = symbol_short!("ADMIN");
const ASSETS: Symbol = symbol_short!("ASSETS");
const POOL: Symbol = symbol_short!("POOL");

// ── Helpers ────────────────────────────────────────────────────────────────────

fn pool_key(asset: &Asset) -> (Symbol, Asset) {
    (POOL, asset.clone())
}

fn load_admin(env: &Env) -> Result<Address, StakeError> {
    env.storage()
        .instance()
        .get(&ADMIN)
        .ok_or(StakeError::NotInitialized)
}

// ── Contract ───────────────────────────────────────────────────────────────────

/// Registry of staking pools, one per asset.
#[contract]
pub struct StakeFactoryContract;

#[contractimpl]
impl StakeFactoryContract {
    pub fn initialize(env: Env, admin: Address) -> Result<(), StakeError> {
        if env.storage().instance().has(&ADMIN) {
            return Err(StakeError::AlreadyInitialized);
        }

        env.storage().instance().set(&ADMIN, &admin);
        env.storage().instance().set(&ASSETS, &Vec::<Asset>::new(&env));
        env.storage()
            .instance()
            .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);

        events::publish_initialized(&env, admin);
        Ok(())
    }

    /// Register `pool` as the staking pool for `asset`.
    ///
    /// Each asset can be registered once; a second registration fails with
    /// `DuplicateRegistration` and leaves the first in place. The pool is
    /// asked which asset it stakes: `AssetMismatch` if it is not `asset`,
    /// `PoolCallFailed` if `pool` is not a pool at all.
    pub fn add_pool(env: Env, asset: Asset, pool: Address) -> Result<(), StakeError> {
        let admin = load_admin(&env)?;
        admin.require_auth();

        let key = pool_key(&asset);
        if env.storage().persistent().has(&key) {
            return Err(StakeError::DuplicateRegistration);
        }

        let staked = forward(StakePoolClient::new(&env, &pool).try_asset())?;
        if staked != asset {
            return Err(StakeError::AssetMismatch);
        }

        env.storage().persistent().set(&key, &pool);
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);

        let mut assets: Vec<Asset> = env
            .storage()
            .instance()
            .get(&ASSETS)
            .unwrap_or(Vec::new(&env));
        assets.push_back(asset.clone());
        env.storage().instance().set(&ASSETS, &assets);
        env.storage()
            .instance()
            .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);

        events::publish_pool_added(&env, asset, pool);
        Ok(())
    }

    /// Pool registered for `asset`; `UnknownAsset` if there is none.
    pub fn get_pool(env: Env, asset: Asset) -> Result<Address, StakeError> {
        env.storage()
            .persistent()
            .get(&pool_key(&asset))
            .ok_or(StakeError::UnknownAsset)
    }

    pub fn has_pool(env: Env, asset: Asset) -> bool {
        env.storage().persistent().has(&pool_key(&asset))
    }

    /// Every registered asset, in registration order.
    pub fn assets(env: Env) -> Vec<Asset> {
        env.storage()
            .instance()
            .get(&ASSETS)
            .unwrap_or(Vec::new(&env))
    }

    pub fn admin(env: Env) -> Result<Address, StakeError> {
        load_admin(&env)
    }
}
