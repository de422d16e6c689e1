#![no_main]

use arbitrary::Arbitrary;
use common::Asset;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env,
};
use stake_pool::{PoolConfig, StakePoolContract, StakePoolContractClient};

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Stake { who: u8, amount: u64 },
    Unstake { who: u8, amount: u64 },
    Withdraw { who: u8 },
    Claim { who: u8 },
    Advance { blocks: u8 },
}

#[derive(Arbitrary, Debug)]
pub struct FuzzInput {
    pub native: bool,
    pub reward_per_block: u32,
    pub unlock_delay: u8,
    pub actions: Vec<FuzzAction>,
}

fuzz_target!(|input: FuzzInput| {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_sequence_number(1);

    let asset = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let reward = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    let contract_id = env.register(StakePoolContract, ());
    let pool = StakePoolContractClient::new(&env, &contract_id);
    pool.initialize(&PoolConfig {
        asset: if input.native {
            Asset::Native
        } else {
            Asset::Token(asset.clone())
        },
        asset_contract: asset.clone(),
        reward_token: reward.clone(),
        start_block: 1,
        end_block: 10_000,
        reward_per_block: input.reward_per_block as i128,
        unlock_delay: input.unlock_delay as u32,
    });
    StellarAssetClient::new(&env, &reward).mint(&contract_id, &(i64::MAX as i128));

    let token = TokenClient::new(&env, &asset);
    let mut users = Vec::new();
    for _ in 0..4 {
        let user = Address::generate(&env);
        StellarAssetClient::new(&env, &asset).mint(&user, &(u64::MAX as i128));
        token.approve(&user, &contract_id, &(u64::MAX as i128), &100_000);
        users.push(user);
    }

    // Errors are expected; panics and broken invariants are not.
    for action in input.actions {
        match action {
            FuzzAction::Stake { who, amount } => {
                let _ = pool.try_stake(&users[who as usize % users.len()], &(amount as i128));
            }
            FuzzAction::Unstake { who, amount } => {
                let _ = pool.try_unstake(&users[who as usize % users.len()], &(amount as i128));
            }
            FuzzAction::Withdraw { who } => {
                let _ = pool.try_withdraw(&users[who as usize % users.len()]);
            }
            FuzzAction::Claim { who } => {
                let _ = pool.try_claim(&users[who as usize % users.len()]);
            }
            FuzzAction::Advance { blocks } => {
                let next = env.ledger().sequence() + blocks as u32;
                env.ledger().set_sequence_number(next);
            }
        }

        let state = pool.state();
        let (mut staked, mut pending) = (0i128, 0i128);
        for user in users.iter() {
            let info = pool.stake_info(user);
            assert!(info.staked_amount >= 0);
            assert!(info.pending_withdraw >= 0);
            staked += info.staked_amount;
            pending += info.pending_withdraw;
        }
        assert_eq!(state.total_staked, staked);
        assert_eq!(state.total_pending_withdraw, pending);
        assert!(token.balance(&contract_id) >= staked + pending);
    }
});
