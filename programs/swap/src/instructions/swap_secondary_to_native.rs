//! SwapSecondaryToNative instruction - pay MOVE, receive SOL at 10:1

use crate::state::{
    model_bridge::{apply_verified, CallerBalances},
    LiquidityPool,
};
use pinocchio::pubkey::Pubkey;
use pinocchio_log::log;
use solana_swap_common::SwapError;
use swap_model::{PoolInstruction, Settlement};

/// Process swap_secondary_to_native instruction
///
/// # Arguments
/// * `pool` - Pool record (mut)
/// * `caller` - Swapper
/// * `caller_move_tokens` - Balance of the swapper's MOVE account
/// * `amount` - MOVE base units offered, a multiple of 10
///
/// # Errors
/// * PoolPaused - swaps halted by the authority
/// * InvalidAmount - zero or not a multiple of 10
/// * InsufficientReserve - native reserve cannot cover `amount / 10`
/// * InsufficientCallerBalance - swapper holds less than `amount`
pub fn process_swap_secondary_to_native(
    pool: &mut LiquidityPool,
    caller: &Pubkey,
    caller_move_tokens: u64,
    amount: u64,
) -> Result<Settlement, SwapError> {
    let settlement = apply_verified(
        pool,
        caller,
        PoolInstruction::SwapSecondaryToNative { amount },
        CallerBalances {
            lamports: 0,
            move_tokens: caller_move_tokens,
        },
    )?;

    log!(
        "Swapped {} MOVE for {} lamports",
        settlement.secondary_in,
        settlement.native_out
    );
    Ok(settlement)
}
