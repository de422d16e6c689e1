use soroban_sdk::{symbol_short, Address, Env};

pub fn publish_initialized(env: &Env, factory: Address) {
    env.events().publish((symbol_short!("INIT"),), factory);
}
