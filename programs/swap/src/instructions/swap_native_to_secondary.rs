//! SwapNativeToSecondary instruction - pay SOL, receive MOVE at 1:10

use crate::state::{
    model_bridge::{apply_verified, CallerBalances},
    LiquidityPool,
};
use pinocchio::pubkey::Pubkey;
use pinocchio_log::log;
use solana_swap_common::SwapError;
use swap_model::{PoolInstruction, Settlement};

pub fn process_swap_native_to_secondary(
    pool: &mut LiquidityPool,
    caller: &Pubkey,
    caller_lamports: u64,
    amount: u64,
) -> Result<Settlement, SwapError> {
    let settlement = apply_verified(
        pool,
        caller,
        PoolInstruction::SwapNativeToSecondary { amount },
        CallerBalances {
            lamports: caller_lamports,
            move_tokens: 0,
        },
    )?;

    log!(
        "Swapped {} lamports for {} MOVE",
        settlement.native_in,
        settlement.secondary_out
    );
    Ok(settlement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instructions::test_support::{live_pool, USER};
    use swap_model::DECIMAL;

    #[test]
    fn test_swap_tenth_sol() {
        let mut pool = live_pool(0, 2 * DECIMAL);
        let settlement =
            process_swap_native_to_secondary(&mut pool, &USER, DECIMAL, DECIMAL / 10).unwrap();

        assert_eq!(settlement.native_in, DECIMAL / 10);
        assert_eq!(settlement.secondary_out, DECIMAL);
        assert_eq!(pool.sol_reserve, DECIMAL / 10);
        assert_eq!(pool.move_token_reserve, DECIMAL);
    }

    #[test]
    fn test_drains_secondary_reserve_exactly() {
        let mut pool = live_pool(0, 1_000);
        process_swap_native_to_secondary(&mut pool, &USER, 100, 100).unwrap();
        assert_eq!(pool.move_token_reserve, 0);

        assert_eq!(
            process_swap_native_to_secondary(&mut pool, &USER, 100, 1),
            Err(SwapError::InsufficientReserve)
        );
    }
}
