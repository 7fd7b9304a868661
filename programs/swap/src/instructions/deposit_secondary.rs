//! DepositSecondary instruction - add MOVE to the secondary reserve

use crate::state::{
    model_bridge::{apply_verified, CallerBalances},
    LiquidityPool,
};
use pinocchio::pubkey::Pubkey;
use pinocchio_log::log;
use solana_swap_common::SwapError;
use swap_model::{PoolInstruction, Settlement};

/// Process deposit_secondary instruction
///
/// `caller_move_tokens` is the balance of the source token account.
pub fn process_deposit_secondary(
    pool: &mut LiquidityPool,
    caller: &Pubkey,
    caller_move_tokens: u64,
    amount: u64,
) -> Result<Settlement, SwapError> {
    let settlement = apply_verified(
        pool,
        caller,
        PoolInstruction::DepositSecondary { amount },
        CallerBalances {
            lamports: 0,
            move_tokens: caller_move_tokens,
        },
    )?;

    log!("Deposited {} MOVE base units", amount);
    Ok(settlement)
}
