//! Program error codes
//!
//! Codes 0..=6 mirror `swap_model::PoolError` so clients can decode either.

use pinocchio::program_error::ProgramError;
use swap_model::PoolError;

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapError {
    InvalidAmount = 0,
    InsufficientReserve = 1,
    InsufficientCallerBalance = 2,
    PoolPaused = 3,
    Unauthorized = 4,
    AlreadyInitialized = 5,
    Overflow = 6,
    /// Unknown discriminator or truncated instruction data
    InvalidInstruction = 100,
    /// Wrong owner, address, size or layout
    InvalidAccount = 101,
    /// Required signer did not sign
    MissingSignature = 102,
    /// Pool record has not been created yet
    NotInitialized = 103,
}

impl SwapError {
    pub const fn code(self) -> u32 {
        self as u32
    }

    pub fn from_code(code: u32) -> Option<Self> {
        if let Some(err) = PoolError::from_code(code) {
            return Some(err.into());
        }
        match code {
            100 => Some(SwapError::InvalidInstruction),
            101 => Some(SwapError::InvalidAccount),
            102 => Some(SwapError::MissingSignature),
            103 => Some(SwapError::NotInitialized),
            _ => None,
        }
    }
}

impl From<PoolError> for SwapError {
    fn from(err: PoolError) -> Self {
        match err {
            PoolError::InvalidAmount => SwapError::InvalidAmount,
            PoolError::InsufficientReserve => SwapError::InsufficientReserve,
            PoolError::InsufficientCallerBalance => SwapError::InsufficientCallerBalance,
            PoolError::PoolPaused => SwapError::PoolPaused,
            PoolError::Unauthorized => SwapError::Unauthorized,
            PoolError::AlreadyInitialized => SwapError::AlreadyInitialized,
            PoolError::Overflow => SwapError::Overflow,
        }
    }
}

impl From<SwapError> for ProgramError {
    fn from(err: SwapError) -> Self {
        ProgramError::Custom(err.code())
    }
}

impl core::fmt::Display for SwapError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if let Some(pool_err) = PoolError::from_code(self.code()) {
            return core::fmt::Display::fmt(&pool_err, f);
        }
        let msg = match self {
            SwapError::InvalidInstruction => "invalid instruction data",
            SwapError::InvalidAccount => "invalid account",
            SwapError::MissingSignature => "missing required signature",
            SwapError::NotInitialized => "pool not initialized",
            _ => "unknown error",
        };
        f.write_str(msg)
    }
}
