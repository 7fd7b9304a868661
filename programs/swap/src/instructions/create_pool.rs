//! CreatePool instruction

use crate::state::LiquidityPool;
use pinocchio::{msg, pubkey::Pubkey};
use solana_swap_common::SwapError;

/// Custody accounts recorded at creation
#[derive(Debug, Clone, Copy)]
pub struct PoolCustody {
    pub sol_account: Pubkey,
    pub move_mint: Pubkey,
    pub move_token_account: Pubkey,
    pub sol_account_nonce: u8,
    pub pool_signer_nonce: u8,
}

/// Process create_pool instruction
///
/// Writes a fresh record: zero reserves, not paused. The custody addresses
/// are fixed from here on.
///
/// # Errors
/// * AlreadyInitialized - record was created before
pub fn process_create_pool(
    pool: &mut LiquidityPool,
    authority: &Pubkey,
    custody: &PoolCustody,
) -> Result<(), SwapError> {
    if pool.is_initialized() {
        msg!("Error: Pool already initialized");
        return Err(SwapError::AlreadyInitialized);
    }

    let fresh = swap_model::create_pool(*authority, custody.sol_account, custody.move_token_account);

    *pool = LiquidityPool {
        authority: fresh.authority,
        sol_account: fresh.sol_account,
        move_mint: custody.move_mint,
        move_token_account: fresh.move_token_account,
        sol_reserve: fresh.sol_reserve(),
        move_token_reserve: fresh.move_token_reserve(),
        is_initialized: 1,
        paused: fresh.paused as u8,
        sol_account_nonce: custody.sol_account_nonce,
        pool_signer_nonce: custody.pool_signer_nonce,
        _padding: [0; 4],
    };

    msg!("Liquidity pool created");
    Ok(())
}
