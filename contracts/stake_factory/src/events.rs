use common::Asset;
use soroban_sdk::{symbol_short, Address, Env};

pub fn publish_initialized(env: &Env, admin: Address) {
    env.events().publish((symbol_short!("INIT"),), admin);
}

pub fn publish_pool_added(env: &Env, asset: Asset, pool: Address) {
    env.events().publish((symbol_short!("POOL_ADD"), asset), pool);
}
