//! Instruction builders for the swap program
//!
//! Account order and flags mirror the program's `process_*_inner` handlers.

use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_instruction, system_program,
};
use solana_swap::{instructions::SwapInstruction, LiquidityPool};

use crate::pda::PoolAddresses;

fn amount_data(instruction: SwapInstruction, amount: u64) -> Vec<u8> {
    let mut data = Vec::with_capacity(9);
    data.push(instruction as u8);
    data.extend_from_slice(&amount.to_le_bytes());
    data
}

/// Allocate a zeroed, rent-exempt pool record owned by the program
pub fn allocate_pool(program_id: &Pubkey, payer: &Pubkey, pool: &Pubkey, lamports: u64) -> Instruction {
    system_instruction::create_account(payer, pool, lamports, LiquidityPool::LEN as u64, program_id)
}

/// The pool keypair co-signs; an unsigned pool record is rejected
pub fn create_pool(
    program_id: &Pubkey,
    addrs: &PoolAddresses,
    authority: &Pubkey,
    move_mint: &Pubkey,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(addrs.pool, true),
            AccountMeta::new(*authority, true),
            AccountMeta::new(addrs.sol_account, false),
            AccountMeta::new_readonly(*move_mint, false),
            AccountMeta::new_readonly(addrs.move_token_account, false),
            AccountMeta::new_readonly(addrs.pool_signer, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: vec![
            SwapInstruction::CreatePool as u8,
            addrs.sol_account_nonce,
            addrs.pool_signer_nonce,
        ],
    }
}

pub fn deposit_native(
    program_id: &Pubkey,
    pool: &Pubkey,
    authority: &Pubkey,
    sol_account: &Pubkey,
    lamports: u64,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new(*pool, false),
            AccountMeta::new(*sol_account, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: amount_data(SwapInstruction::DepositNative, lamports),
    }
}

pub fn deposit_secondary(
    program_id: &Pubkey,
    addrs: &PoolAddresses,
    authority: &Pubkey,
    from_move: &Pubkey,
    amount: u64,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(addrs.pool, false),
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(addrs.move_token_account, false),
            AccountMeta::new(*from_move, false),
            AccountMeta::new_readonly(addrs.pool_signer, false),
            AccountMeta::new_readonly(spl_token::id(), false),
        ],
        data: amount_data(SwapInstruction::DepositSecondary, amount),
    }
}

/// Pay `amount` MOVE from `from_move`, receive `amount / 10` lamports at `destination`
pub fn swap_secondary_to_native(
    program_id: &Pubkey,
    addrs: &PoolAddresses,
    authority: &Pubkey,
    from_move: &Pubkey,
    destination: &Pubkey,
    amount: u64,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(addrs.pool, false),
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(addrs.sol_account, false),
            AccountMeta::new(addrs.move_token_account, false),
            AccountMeta::new(*from_move, false),
            AccountMeta::new(*destination, false),
            AccountMeta::new_readonly(system_program::id(), false),
            AccountMeta::new_readonly(spl_token::id(), false),
        ],
        data: amount_data(SwapInstruction::SwapSecondaryToNative, amount),
    }
}

/// Pay `lamports`, receive `lamports * 10` MOVE at `destination`
pub fn swap_native_to_secondary(
    program_id: &Pubkey,
    addrs: &PoolAddresses,
    authority: &Pubkey,
    destination: &Pubkey,
    lamports: u64,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(addrs.pool, false),
            AccountMeta::new(*authority, true),
            AccountMeta::new(addrs.sol_account, false),
            AccountMeta::new(addrs.move_token_account, false),
            AccountMeta::new(*destination, false),
            AccountMeta::new_readonly(addrs.pool_signer, false),
            AccountMeta::new_readonly(spl_token::id(), false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: amount_data(SwapInstruction::SwapNativeToSecondary, lamports),
    }
}

pub fn pause(program_id: &Pubkey, pool: &Pubkey, authority: &Pubkey) -> Instruction {
    toggle(program_id, pool, authority, SwapInstruction::Pause)
}

pub fn unpause(program_id: &Pubkey, pool: &Pubkey, authority: &Pubkey) -> Instruction {
    toggle(program_id, pool, authority, SwapInstruction::Unpause)
}

fn toggle(program_id: &Pubkey, pool: &Pubkey, authority: &Pubkey, ix: SwapInstruction) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*pool, false),
            AccountMeta::new_readonly(*authority, true),
        ],
        data: vec![ix as u8],
    }
}
