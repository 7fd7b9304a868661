//! Model bridge for pool accounting
//!
//! Converts the on-chain `LiquidityPool` record into `swap_model::PoolState`,
//! runs the state machine, and writes the successor reserves and flags back.
//! The record is only touched once every guard has passed.

use crate::state::LiquidityPool;
use pinocchio::{msg, pubkey::Pubkey};
use solana_swap_common::SwapError;
use swap_model::{self as model, PoolInstruction, PoolState, ReserveLedger, Settlement};

/// Balances the caller can spend on the inbound legs of a settlement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallerBalances {
    pub lamports: u64,
    pub move_tokens: u64,
}

pub fn ensure_initialized(pool: &LiquidityPool) -> Result<(), SwapError> {
    if !pool.is_initialized() {
        msg!("Error: Pool not initialized");
        return Err(SwapError::NotInitialized);
    }
    Ok(())
}

pub fn pool_to_model(pool: &LiquidityPool) -> PoolState {
    PoolState {
        authority: pool.authority,
        sol_account: pool.sol_account,
        move_token_account: pool.move_token_account,
        ledger: ReserveLedger::new(pool.sol_reserve, pool.move_token_reserve),
        paused: pool.is_paused(),
    }
}

fn write_back(pool: &mut LiquidityPool, state: &PoolState) {
    pool.sol_reserve = state.sol_reserve();
    pool.move_token_reserve = state.move_token_reserve();
    pool.paused = state.paused as u8;
}

/// Apply one instruction through the model
///
/// # Errors
/// * `NotInitialized` - record was never created
/// * Any `PoolError` raised by the state machine
/// * `InsufficientCallerBalance` - caller cannot fund the settlement
pub fn apply_verified(
    pool: &mut LiquidityPool,
    caller: &Pubkey,
    instruction: PoolInstruction,
    balances: CallerBalances,
) -> Result<Settlement, SwapError> {
    ensure_initialized(pool)?;

    let (next, settlement) = model::apply(&pool_to_model(pool), caller, instruction)?;
    settlement.check_caller(balances.lamports, balances.move_tokens)?;

    write_back(pool, &next);
    Ok(settlement)
}
