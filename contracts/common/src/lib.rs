//! Shared types for the staking contract suite.
//!
//! This crate provides:
//! - [`StakeError`] — the error codes every staking contract returns, so a
//!   forwarded failure reaches the caller unchanged.
//! - [`Asset`] — identifies what a pool accepts (native currency or a token).
//! - Client interfaces for cross-contract calls into pools and the factory.

#![no_std]

pub mod asset;
pub mod interface;

pub use asset::*;
pub use interface::*;

use soroban_sdk::contracterror;

/// Storage entries are bumped to `TTL_EXTEND_TO` ledgers whenever their
/// remaining lifetime drops below `TTL_THRESHOLD`.
pub const TTL_THRESHOLD: u32 = 518_400;
pub const TTL_EXTEND_TO: u32 = 1_036_800;

// ── Shared error enum ────────────────────────────────────────────────────────

/// Error codes shared by the pool, factory and router contracts.
///
/// # Code ranges
/// | Range   | Purpose                        |
/// |---------|--------------------------------|
/// | 1 – 9   | Lifecycle / initialisation     |
/// | 20 – 29 | Registry                       |
/// | 30 – 39 | Validation / input             |
/// | 40 – 49 | Balances & funds               |
/// | 50 – 59 | Arithmetic                     |
/// | 60 – 69 | Cross-contract calls           |
#[contracterror]
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
#[repr(u32)]
pub enum StakeError {
    // ── Lifecycle (1–9) ──────────────────────────────────────
    /// The contract has not been initialised yet.
    NotInitialized = 1,

    /// `initialize` was called more than once.
    AlreadyInitialized = 2,

    // ── Registry (20–29) ─────────────────────────────────────
    /// No pool is registered for the requested asset.
    UnknownAsset = 20,

    /// A pool is already registered for the asset.
    DuplicateRegistration = 21,

    /// The pool being registered stakes a different asset.
    AssetMismatch = 22,

    // ── Validation (30–39) ───────────────────────────────────
    /// Zero or negative amount where a positive amount is required.
    InvalidAmount = 30,

    /// Pool configuration is inconsistent (window, rate, asset contract).
    InvalidConfig = 31,

    // ── Funds (40–49) ────────────────────────────────────────
    /// The approved allowance does not cover the requested transfer.
    InsufficientAllowance = 40,

    /// Unstake beyond the staked balance, withdraw with nothing pending,
    /// or a stake larger than the participant's wallet balance.
    InsufficientBalance = 41,

    /// The pending withdrawal is still inside its unlock delay.
    WithdrawLocked = 42,

    /// The pool does not hold enough reward tokens to pay what is owed.
    InsufficientRewardFunds = 43,

    // ── Arithmetic (50–59) ───────────────────────────────────
    ArithmeticOverflow = 50,

    // ── Cross-contract (60–69) ───────────────────────────────
    /// A forwarded call failed without returning a `StakeError`.
    PoolCallFailed = 60,
}
