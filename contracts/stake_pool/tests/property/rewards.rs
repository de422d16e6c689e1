#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Properties of the pure accrual functions.
//!
//! Invariants tested:
//! - A sole staker earns `blocks * reward_per_block`, short only by
//!   fixed-point truncation
//! - The accumulator never decreases
//! - Splitting the same elapsed blocks over several updates never pays more
//!   than a single update
//! - Any configuration `validate` accepts accrues over its whole window
//!   without overflow, however little is staked

use common::Asset;
use proptest::prelude::*;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};
use stake_pool::rewards::{accumulate, advance, earned, max_emission, reward_blocks, ACC_PRECISION};
use stake_pool::{PoolConfig, PoolState};

proptest! {
    #[test]
    fn prop_sole_staker_linear(
        staked in 1i128..=1_000_000_000_000_000_000_000i128,
        reward_per_block in 0i128..=1_000i128,
        blocks in 0u32..=100_000u32,
    ) {
        let env = Env::default();
        let acc = accumulate(&env, 0, reward_per_block, blocks, staked).unwrap();
        let reward = earned(&env, staked, acc, 0, 0).unwrap();
        let expected = reward_per_block * blocks as i128;

        // Truncation can only lose value, at most one unit per whole
        // ACC_PRECISION of stake.
        prop_assert!(reward <= expected);
        prop_assert!(expected - reward <= staked / ACC_PRECISION + 1);
        if staked == 1_000_000_000_000_000_000 || staked == 1 {
            prop_assert_eq!(reward, expected);
        }
    }

    #[test]
    fn prop_accumulator_monotonic(
        start in 0i128..=1_000_000_000i128,
        reward_per_block in 0i128..=1_000_000i128,
        blocks in 0u32..=10_000u32,
        total in 0i128..=1_000_000_000_000_000_000_000i128,
    ) {
        let env = Env::default();
        let next = accumulate(&env, start, reward_per_block, blocks, total).unwrap();
        prop_assert!(next >= start);
    }

    #[test]
    fn prop_split_updates_never_overpay(
        staked in 1i128..=1_000_000_000_000_000_000_000i128,
        reward_per_block in 0i128..=1_000i128,
        first in 0u32..=5_000u32,
        second in 0u32..=5_000u32,
    ) {
        let env = Env::default();
        let once = accumulate(&env, 0, reward_per_block, first + second, staked).unwrap();
        let split = accumulate(
            &env,
            accumulate(&env, 0, reward_per_block, first, staked).unwrap(),
            reward_per_block,
            second,
            staked,
        )
        .unwrap();

        prop_assert!(
            earned(&env, staked, split, 0, 0).unwrap() <= earned(&env, staked, once, 0, 0).unwrap()
        );
    }

    #[test]
    fn prop_reward_blocks_within_window(
        start in 0u32..=1_000u32,
        len in 0u32..=1_000u32,
        last in 0u32..=3_000u32,
        current in 0u32..=3_000u32,
    ) {
        let end = start + len;
        let blocks = reward_blocks(start, end, last, current);
        prop_assert!(blocks <= len);
        prop_assert!(blocks <= current.saturating_sub(last));
    }

    #[test]
    fn prop_valid_config_never_overflows(
        window in 1u32..=1_000_000u32,
        rate_fraction in 0u32..=1_000u32,
        staked in 1i128..=1_000_000_000_000_000_000_000i128,
        idle in 0u32..=2_000_000u32,
    ) {
        let env = Env::default();
        let token = Address::generate(&env);
        let max_rate = max_emission() / window as i128;
        let config = PoolConfig {
            asset: Asset::Token(token.clone()),
            asset_contract: token,
            reward_token: Address::generate(&env),
            start_block: 0,
            end_block: window,
            reward_per_block: max_rate / 1_000 * rate_fraction as i128,
            unlock_delay: 0,
        };
        prop_assert!(config.validate().is_ok());

        let state = PoolState {
            last_reward_block: 0,
            acc_reward_per_share: 0,
            total_staked: staked,
            total_pending_withdraw: 0,
        };
        let next = advance(&env, &config, &state, idle);
        prop_assert!(next.is_ok());
        let acc = next.unwrap().acc_reward_per_share;
        prop_assert!(earned(&env, staked, acc, 0, 0).is_some());
    }
}
