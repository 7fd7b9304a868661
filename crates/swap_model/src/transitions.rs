//! Pool state machine
//!
//! `apply` never mutates its input. It returns the successor state and the
//! settlement the caller's custody layer must perform, or the first guard
//! that failed.

use crate::{
    math, Address, PoolError, PoolState, ReserveLedger, Settlement,
};

/// Instructions accepted by an existing pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolInstruction {
    DepositNative { amount: u64 },
    DepositSecondary { amount: u64 },
    SwapSecondaryToNative { amount: u64 },
    SwapNativeToSecondary { amount: u64 },
    Pause,
    Unpause,
}

impl PoolInstruction {
    pub fn is_swap(&self) -> bool {
        matches!(
            self,
            PoolInstruction::SwapSecondaryToNative { .. }
                | PoolInstruction::SwapNativeToSecondary { .. }
        )
    }
}

/// Fresh pool: zero reserves, not paused
pub fn create_pool(
    authority: Address,
    sol_account: Address,
    move_token_account: Address,
) -> PoolState {
    PoolState {
        authority,
        sol_account,
        move_token_account,
        ledger: ReserveLedger::default(),
        paused: false,
    }
}

/// Apply one instruction issued by `caller`
pub fn apply(
    pool: &PoolState,
    caller: &Address,
    instruction: PoolInstruction,
) -> Result<(PoolState, Settlement), PoolError> {
    let mut next = *pool;

    let settlement = match instruction {
        PoolInstruction::DepositNative { amount } => {
            next.ledger.credit_native(amount)?;
            Settlement {
                native_in: amount,
                ..Settlement::NONE
            }
        }
        PoolInstruction::DepositSecondary { amount } => {
            next.ledger.credit_secondary(amount)?;
            Settlement {
                secondary_in: amount,
                ..Settlement::NONE
            }
        }
        PoolInstruction::SwapSecondaryToNative { amount } => {
            ensure_active(pool)?;
            let quote = math::quote_secondary_to_native(pool.sol_reserve(), amount)?;
            next.ledger.debit_native(quote.amount_out)?;
            next.ledger.credit_secondary(quote.amount_in)?;
            Settlement {
                native_out: quote.amount_out,
                secondary_in: quote.amount_in,
                ..Settlement::NONE
            }
        }
        PoolInstruction::SwapNativeToSecondary { amount } => {
            ensure_active(pool)?;
            let quote = math::quote_native_to_secondary(pool.move_token_reserve(), amount)?;
            next.ledger.debit_secondary(quote.amount_out)?;
            next.ledger.credit_native(quote.amount_in)?;
            Settlement {
                native_in: quote.amount_in,
                secondary_out: quote.amount_out,
                ..Settlement::NONE
            }
        }
        PoolInstruction::Pause => {
            ensure_authority(pool, caller)?;
            next.paused = true;
            Settlement::NONE
        }
        PoolInstruction::Unpause => {
            ensure_authority(pool, caller)?;
            next.paused = false;
            Settlement::NONE
        }
    };

    Ok((next, settlement))
}

fn ensure_active(pool: &PoolState) -> Result<(), PoolError> {
    if pool.paused {
        return Err(PoolError::PoolPaused);
    }
    Ok(())
}

fn ensure_authority(pool: &PoolState, caller: &Address) -> Result<(), PoolError> {
    if &pool.authority != caller {
        return Err(PoolError::Unauthorized);
    }
    Ok(())
}
