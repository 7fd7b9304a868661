//! Unpause instruction

use crate::state::{
    model_bridge::{apply_verified, CallerBalances},
    LiquidityPool,
};
use pinocchio::{msg, pubkey::Pubkey};
use solana_swap_common::SwapError;
use swap_model::PoolInstruction;

/// Process unpause instruction
///
/// Re-enables swaps. Reserves are untouched. Only the pool authority can
/// call this.
pub fn process_unpause(pool: &mut LiquidityPool, authority: &Pubkey) -> Result<(), SwapError> {
    apply_verified(pool, authority, PoolInstruction::Unpause, CallerBalances::default())
        .inspect_err(|err| {
            if *err == SwapError::Unauthorized {
                msg!("Error: Only pool authority can unpause");
            }
        })?;

    msg!("Pool unpaused");
    Ok(())
}
