//! Custody address derivation for pools
//!
//! Must match the seeds the program re-derives in `create_pool`.

use anyhow::{Context, Result};
use solana_sdk::pubkey::Pubkey;
use solana_swap::{
    pda::{POOL_SIGNER_SEED, SOL_ACCOUNT_SEED},
    LiquidityPool,
};
use spl_associated_token_account::get_associated_token_address;

/// Every address hanging off one pool record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolAddresses {
    pub pool: Pubkey,
    pub sol_account: Pubkey,
    pub sol_account_nonce: u8,
    pub pool_signer: Pubkey,
    pub pool_signer_nonce: u8,
    pub move_token_account: Pubkey,
}

pub fn derive_sol_account(program_id: &Pubkey, pool: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[SOL_ACCOUNT_SEED, pool.as_ref()], program_id)
}

pub fn derive_pool_signer(program_id: &Pubkey, pool: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[POOL_SIGNER_SEED, pool.as_ref()], program_id)
}

impl PoolAddresses {
    pub fn derive(program_id: &Pubkey, pool: &Pubkey, move_mint: &Pubkey) -> Self {
        let (sol_account, sol_account_nonce) = derive_sol_account(program_id, pool);
        let (pool_signer, pool_signer_nonce) = derive_pool_signer(program_id, pool);
        let move_token_account = get_associated_token_address(&pool_signer, move_mint);

        Self {
            pool: *pool,
            sol_account,
            sol_account_nonce,
            pool_signer,
            pool_signer_nonce,
            move_token_account,
        }
    }

    /// Addresses recorded in an existing pool, with the signer rebuilt from its nonce
    pub fn from_record(program_id: &Pubkey, pool: &Pubkey, record: &LiquidityPool) -> Result<Self> {
        let pool_signer = Pubkey::create_program_address(
            &[POOL_SIGNER_SEED, pool.as_ref(), &[record.pool_signer_nonce]],
            program_id,
        )
        .context("Pool record holds an invalid signer nonce")?;

        Ok(Self {
            pool: *pool,
            sol_account: Pubkey::new_from_array(record.sol_account),
            sol_account_nonce: record.sol_account_nonce,
            pool_signer,
            pool_signer_nonce: record.pool_signer_nonce,
            move_token_account: Pubkey::new_from_array(record.move_token_account),
        })
    }
}
