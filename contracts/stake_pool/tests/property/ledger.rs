#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based tests for the pool ledger driven through the contract.
//!
//! Invariants tested:
//! - `total_staked` always equals the sum of every participant's stake
//! - `total_pending_withdraw` always equals the sum of pending withdrawals
//! - The pool's asset balance always covers staked plus pending funds
//! - A participant's stake equals what they staked minus what they unstaked
//! - The accumulator never decreases across operations

use common::Asset;
use proptest::prelude::*;
use soroban_sdk::testutils::{Address as _, Ledger as _};
use soroban_sdk::token::{Client as TokenClient, StellarAssetClient};
use soroban_sdk::{Address, Env};
use stake_pool::{PoolConfig, StakePoolContract, StakePoolContractClient};

const PARTICIPANTS: usize = 3;
const FUNDING: i128 = 1_000_000;

#[derive(Clone, Debug)]
enum Action {
    Stake { who: usize, amount: i128 },
    Unstake { who: usize, amount: i128 },
    Withdraw { who: usize },
    Claim { who: usize },
    Advance { blocks: u32 },
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        (0..PARTICIPANTS, 1i128..=10_000i128).prop_map(|(who, amount)| Action::Stake { who, amount }),
        (0..PARTICIPANTS, 1i128..=10_000i128)
            .prop_map(|(who, amount)| Action::Unstake { who, amount }),
        (0..PARTICIPANTS).prop_map(|who| Action::Withdraw { who }),
        (0..PARTICIPANTS).prop_map(|who| Action::Claim { who }),
        (1u32..=50u32).prop_map(|blocks| Action::Advance { blocks }),
    ]
}

// ── Helpers ───────────────────────────────────────────────────────────────────

struct Harness {
    env: Env,
    pool: StakePoolContractClient<'static>,
    asset: Address,
    participants: Vec<Address>,
}

fn setup() -> Harness {
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
        asset: Asset::Native,
        asset_contract: asset.clone(),
        reward_token: reward.clone(),
        start_block: 1,
        end_block: 100_000,
        reward_per_block: 7,
        unlock_delay: 0,
    });
    StellarAssetClient::new(&env, &reward).mint(&contract_id, &1_000_000_000);

    let participants = (0..PARTICIPANTS)
        .map(|_| {
            let who = Address::generate(&env);
            StellarAssetClient::new(&env, &asset).mint(&who, &FUNDING);
            who
        })
        .collect();

    Harness {
        env,
        pool,
        asset,
        participants,
    }
}

// ── proptest! blocks ──────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_ledger_totals_conserved(actions in prop::collection::vec(action(), 1..40)) {
        let h = setup();
        let mut net_staked = [0i128; PARTICIPANTS];
        let mut last_acc = 0i128;

        for action in actions {
            match action {
                Action::Stake { who, amount } => {
                    if h.pool.try_stake(&h.participants[who], &amount).is_ok() {
                        net_staked[who] += amount;
                    }
                }
                Action::Unstake { who, amount } => {
                    if h.pool.try_unstake(&h.participants[who], &amount).is_ok() {
                        net_staked[who] -= amount;
                    }
                }
                Action::Withdraw { who } => {
                    let _ = h.pool.try_withdraw(&h.participants[who]);
                }
                Action::Claim { who } => {
                    let _ = h.pool.try_claim(&h.participants[who]);
                }
                Action::Advance { blocks } => {
                    let next = h.env.ledger().sequence() + blocks;
                    h.env.ledger().set_sequence_number(next);
                }
            }

            let state = h.pool.state();
            let mut staked_sum = 0i128;
            let mut pending_sum = 0i128;
            for (i, who) in h.participants.iter().enumerate() {
                let info = h.pool.stake_info(who);
                prop_assert!(info.staked_amount >= 0);
                prop_assert!(info.pending_withdraw >= 0);
                prop_assert_eq!(info.staked_amount, net_staked[i]);
                staked_sum += info.staked_amount;
                pending_sum += info.pending_withdraw;
            }

            prop_assert_eq!(state.total_staked, staked_sum);
            prop_assert_eq!(state.total_pending_withdraw, pending_sum);
            let held = TokenClient::new(&h.env, &h.asset).balance(&h.pool.address);
            prop_assert!(held >= state.total_staked + state.total_pending_withdraw);
            prop_assert!(state.acc_reward_per_share >= last_acc);
            last_acc = state.acc_reward_per_share;
        }
    }

    #[test]
    fn prop_stake_then_unstake_same_block(amount in 1i128..=FUNDING) {
        let h = setup();
        let who = &h.participants[0];

        h.pool.stake(who, &amount);
        h.pool.unstake(who, &amount);

        prop_assert_eq!(h.pool.staking_balance(who), 0);
        prop_assert_eq!(h.pool.pending_withdraw(who), amount);
        prop_assert_eq!(h.pool.pending_reward(who), 0);
    }
}
