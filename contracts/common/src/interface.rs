//! Client interfaces for the cross-contract calls made by the router and
//! the factory.
//!
//! Only the entry points those callers use are listed here; each contract
//! exposes more than its interface.

use soroban_sdk::{contractclient, Address, Env};

use crate::{Asset, StakeError};

#[allow(dead_code)]
#[contractclient(name = "StakePoolClient")]
pub trait StakePoolInterface {
    fn stake(env: Env, participant: Address, amount: i128) -> Result<(), StakeError>;
    fn unstake(env: Env, participant: Address, amount: i128) -> Result<(), StakeError>;
    fn withdraw(env: Env, participant: Address) -> Result<i128, StakeError>;
    fn claim(env: Env, participant: Address) -> Result<i128, StakeError>;
    fn staking_balance(env: Env, participant: Address) -> i128;
    fn pending_withdraw(env: Env, participant: Address) -> i128;
    fn pending_reward(env: Env, participant: Address) -> Result<i128, StakeError>;
    fn asset(env: Env) -> Result<Asset, StakeError>;
}

#[allow(dead_code)]
#[contractclient(name = "StakeFactoryClient")]
pub trait StakeFactoryInterface {
    fn get_pool(env: Env, asset: Asset) -> Result<Address, StakeError>;
}

/// Collapse the nested result of a `try_*` client call.
///
/// A `StakeError` raised by the callee is passed through untouched. Anything
/// else (a trap, a missing entry point, or a return value that fails to
/// decode) becomes [`StakeError::PoolCallFailed`].
pub fn forward<T, C, I>(
    result: Result<Result<T, C>, Result<StakeError, I>>,
) -> Result<T, StakeError> {
    match result {
        Ok(Ok(value)) => Ok(value),
        Err(Ok(err)) => Err(err),
        Ok(Err(_)) | Err(Err(_)) => Err(StakeError::PoolCallFailed),
    }
}
