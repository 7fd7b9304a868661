//! Swap Model - Pure fixed-ratio pool accounting (1 SOL : 10 MOVE)
//!
//! This crate contains the reserve ledger, the fixed-ratio quote math and the
//! pool state machine. The on-chain program and the in-process registry both
//! drive pools exclusively through these functions.

#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]

pub mod ledger;
pub mod math;
pub mod state;
pub mod transitions;

pub use ledger::ReserveLedger;
pub use math::{quote_native_to_secondary, quote_secondary_to_native, SwapQuote};
pub use state::{Address, PoolState, Settlement};
pub use transitions::{apply, create_pool, PoolInstruction};

/// Base units per whole secondary-asset token (9 decimals)
pub const DECIMAL: u64 = 1_000_000_000;

/// Lamports per SOL
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Secondary base units exchanged per lamport (1 SOL : 10 MOVE)
pub const SWAP_RATIO: u64 = 10;

/// Error types for pool operations
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolError {
    /// Zero quantity supplied to a deposit or swap
    InvalidAmount = 0,
    /// Swap would drive a reserve negative under the fixed ratio
    InsufficientReserve = 1,
    /// Caller cannot fund the deposit or swap
    InsufficientCallerBalance = 2,
    /// Swap attempted while the pool is paused
    PoolPaused = 3,
    /// Pause/unpause attempted by someone other than the authority
    Unauthorized = 4,
    /// Pool record already exists at this address
    AlreadyInitialized = 5,
    /// Reserve counter would exceed u64::MAX
    Overflow = 6,
}

impl PoolError {
    /// Stable numeric code, shared with the program's custom errors
    pub const fn code(self) -> u32 {
        self as u32
    }

    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(PoolError::InvalidAmount),
            1 => Some(PoolError::InsufficientReserve),
            2 => Some(PoolError::InsufficientCallerBalance),
            3 => Some(PoolError::PoolPaused),
            4 => Some(PoolError::Unauthorized),
            5 => Some(PoolError::AlreadyInitialized),
            6 => Some(PoolError::Overflow),
            _ => None,
        }
    }
}

impl core::fmt::Display for PoolError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            PoolError::InvalidAmount => "amount must be greater than zero",
            PoolError::InsufficientReserve => "pool reserve too small for this swap",
            PoolError::InsufficientCallerBalance => "caller balance too small",
            PoolError::PoolPaused => "pool is paused",
            PoolError::Unauthorized => "only the pool authority may do this",
            PoolError::AlreadyInitialized => "pool already initialized",
            PoolError::Overflow => "reserve overflow",
        };
        f.write_str(msg)
    }
}
