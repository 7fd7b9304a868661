//! Fixed-ratio swap math (1 lamport : 10 MOVE base units)
//!
//! Integer-only. Liquidity guards compare in u128 instead of dividing, so no
//! precision is lost at the boundary.

use crate::{PoolError, SWAP_RATIO};

/// Quote for one swap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapQuote {
    /// Amount the pool takes from the caller
    pub amount_in: u64,
    /// Amount the pool pays to the caller
    pub amount_out: u64,
}

/// Quote a MOVE → SOL swap
///
/// The caller pays `amount` MOVE and receives `amount / 10` lamports.
///
/// # Arguments
/// * `sol_reserve` - Current native reserve
/// * `amount` - MOVE base units offered (must be a non-zero multiple of 10)
///
/// # Errors
/// * `InvalidAmount` - zero, or not a whole multiple of the ratio
/// * `InsufficientReserve` - `sol_reserve * 10 < amount`
pub fn quote_secondary_to_native(sol_reserve: u64, amount: u64) -> Result<SwapQuote, PoolError> {
    if amount == 0 {
        return Err(PoolError::InvalidAmount);
    }

    let available = sol_reserve as u128 * SWAP_RATIO as u128;
    if available < amount as u128 {
        return Err(PoolError::InsufficientReserve);
    }

    // Dust below one lamport would be absorbed by the pool
    if amount % SWAP_RATIO != 0 {
        return Err(PoolError::InvalidAmount);
    }

    Ok(SwapQuote {
        amount_in: amount,
        amount_out: amount / SWAP_RATIO,
    })
}

/// Quote a SOL → MOVE swap
///
/// The caller pays `amount` lamports and receives `amount * 10` MOVE.
///
/// # Errors
/// * `InvalidAmount` - zero amount
/// * `InsufficientReserve` - `move_token_reserve < amount * 10`
pub fn quote_native_to_secondary(
    move_token_reserve: u64,
    amount: u64,
) -> Result<SwapQuote, PoolError> {
    if amount == 0 {
        return Err(PoolError::InvalidAmount);
    }

    let required = amount as u128 * SWAP_RATIO as u128;
    if (move_token_reserve as u128) < required {
        return Err(PoolError::InsufficientReserve);
    }

    // required <= move_token_reserve, so it fits in u64
    Ok(SwapQuote {
        amount_in: amount,
        amount_out: required as u64,
    })
}
