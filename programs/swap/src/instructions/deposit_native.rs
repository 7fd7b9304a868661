//! DepositNative instruction - add lamports to the native reserve

use crate::state::{
    model_bridge::{apply_verified, CallerBalances},
    LiquidityPool,
};
use pinocchio::pubkey::Pubkey;
use pinocchio_log::log;
use solana_swap_common::SwapError;
use swap_model::{PoolInstruction, Settlement};

/// Process deposit_native instruction
///
/// Allowed while paused. Any signer may deposit.
///
/// # Arguments
/// * `pool` - Pool record (mut)
/// * `caller` - Depositor
/// * `caller_lamports` - Depositor's spendable lamports
/// * `amount` - Lamports to deposit
///
/// # Returns
/// Settlement with `native_in == amount`
pub fn process_deposit_native(
    pool: &mut LiquidityPool,
    caller: &Pubkey,
    caller_lamports: u64,
    amount: u64,
) -> Result<Settlement, SwapError> {
    let settlement = apply_verified(
        pool,
        caller,
        PoolInstruction::DepositNative { amount },
        CallerBalances {
            lamports: caller_lamports,
            move_tokens: 0,
        },
    )?;

    log!("Deposited {} lamports", amount);
    Ok(settlement)
}
