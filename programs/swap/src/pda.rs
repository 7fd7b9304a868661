//! Custody address derivation
//!
//! Both custody addresses hang off the pool record's address:
//! - native custody: `["sol-account", pool]`
//! - token signer: `["liquidity-pool", pool]`, owner of the MOVE custody ATA

use pinocchio::{msg, pubkey::{create_program_address, Pubkey}};
use solana_swap_common::SwapError;

pub const SOL_ACCOUNT_SEED: &[u8] = b"sol-account";
pub const POOL_SIGNER_SEED: &[u8] = b"liquidity-pool";

/// Re-derive `[seed, pool, nonce]` and compare with the supplied account
pub fn verify_pool_pda(
    program_id: &Pubkey,
    seed: &[u8],
    pool: &Pubkey,
    nonce: u8,
    candidate: &Pubkey,
) -> Result<(), SwapError> {
    let expected = create_program_address(&[seed, pool.as_ref(), &[nonce]], program_id)
        .map_err(|_| {
            msg!("Error: Invalid custody nonce");
            SwapError::InvalidAccount
        })?;

    if &expected != candidate {
        msg!("Error: Custody address does not match derivation");
        return Err(SwapError::InvalidAccount);
    }
    Ok(())
}
