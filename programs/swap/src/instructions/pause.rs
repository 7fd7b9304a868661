//! Pause instruction
//!
//! Allows the pool authority to halt swaps. Deposits stay open.

use crate::state::{
    model_bridge::{apply_verified, CallerBalances},
    LiquidityPool,
};
use pinocchio::{msg, pubkey::Pubkey};
use solana_swap_common::SwapError;
use swap_model::PoolInstruction;

/// Process pause instruction
///
/// # Errors
/// * Unauthorized - caller is not the pool authority
pub fn process_pause(pool: &mut LiquidityPool, authority: &Pubkey) -> Result<(), SwapError> {
    apply_verified(pool, authority, PoolInstruction::Pause, CallerBalances::default())
        .inspect_err(|err| {
            if *err == SwapError::Unauthorized {
                msg!("Error: Only pool authority can pause");
            }
        })?;

    msg!("Pool paused");
    Ok(())
}
