use common::Asset;
use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the pool is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub asset: Asset,
    pub reward_token: Address,
    pub start_block: u32,
    pub end_block: u32,
    pub reward_per_block: i128,
}

/// Payload shared by `STAKE`, `UNSTAKE`, `WITHDRAW` and `CLAIM`.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParticipantEvent {
    pub participant: Address,
    pub amount: i128,
    pub block: u32,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(
    env: &Env,
    asset: Asset,
    reward_token: Address,
    start_block: u32,
    end_block: u32,
    reward_per_block: i128,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            asset,
            reward_token,
            start_block,
            end_block,
            reward_per_block,
        },
    );
}

fn publish_participant(env: &Env, name: soroban_sdk::Symbol, participant: Address, amount: i128) {
    env.events().publish(
        (name, participant.clone()),
        ParticipantEvent {
            participant,
            amount,
            block: env.ledger().sequence(),
        },
    );
}

pub fn publish_stake(env: &Env, participant: Address, amount: i128) {
    publish_participant(env, symbol_short!("STAKE"), participant, amount);
}

pub fn publish_unstake(env: &Env, participant: Address, amount: i128) {
    publish_participant(env, symbol_short!("UNSTAKE"), participant, amount);
}

pub fn publish_withdraw(env: &Env, participant: Address, amount: i128) {
    publish_participant(env, symbol_short!("WITHDRAW"), participant, amount);
}

pub fn publish_claim(env: &Env, participant: Address, amount: i128) {
    publish_participant(env, symbol_short!("CLAIM"), participant, amount);
}
