//! Swap program entrypoint

use pinocchio::{
    account_info::AccountInfo,
    instruction::{Seed, Signer},
    msg,
    pubkey::Pubkey,
    sysvars::{rent::Rent, Sysvar},
    ProgramResult,
};

use crate::cpi::{create_program_account, pay_out_lamports, system_transfer, token_transfer, SYSTEM_PROGRAM_ID};
use crate::instructions::{
    process_create_pool, process_deposit_native, process_deposit_secondary, process_pause,
    process_swap_native_to_secondary, process_swap_secondary_to_native, process_unpause,
    PoolCustody, SwapInstruction,
};
use crate::pda::{verify_pool_pda, POOL_SIGNER_SEED, SOL_ACCOUNT_SEED};
use crate::state::{model_bridge::ensure_initialized, LiquidityPool};
use crate::token::{read_token_account, require_mint, TOKEN_PROGRAM_ID};
use solana_swap_common::{
    borrow_account_data_mut, validate_key, validate_owner, validate_signer, validate_writable,
    InstructionReader, SwapError,
};

#[cfg(any(feature = "bpf-entrypoint", target_os = "solana"))]
pinocchio::entrypoint!(process_instruction);

pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    // Check minimum instruction data length
    if instruction_data.is_empty() {
        msg!("Error: Instruction data is empty");
        return Err(SwapError::InvalidInstruction.into());
    }

    let Some(instruction) = SwapInstruction::from_discriminator(instruction_data[0]) else {
        msg!("Error: Unknown instruction");
        return Err(SwapError::InvalidInstruction.into());
    };

    let data = &instruction_data[1..];
    match instruction {
        SwapInstruction::CreatePool => {
            msg!("Instruction: CreatePool");
            process_create_pool_inner(program_id, accounts, data)
        }
        SwapInstruction::DepositNative => {
            msg!("Instruction: DepositNative");
            process_deposit_native_inner(program_id, accounts, data)
        }
        SwapInstruction::DepositSecondary => {
            msg!("Instruction: DepositSecondary");
            process_deposit_secondary_inner(program_id, accounts, data)
        }
        SwapInstruction::SwapSecondaryToNative => {
            msg!("Instruction: SwapSecondaryToNative");
            process_swap_secondary_to_native_inner(program_id, accounts, data)
        }
        SwapInstruction::SwapNativeToSecondary => {
            msg!("Instruction: SwapNativeToSecondary");
            process_swap_native_to_secondary_inner(program_id, accounts, data)
        }
        SwapInstruction::Pause => {
            msg!("Instruction: Pause");
            process_pause_inner(program_id, accounts, data)
        }
        SwapInstruction::Unpause => {
            msg!("Instruction: Unpause");
            process_unpause_inner(program_id, accounts, data)
        }
    }
}

// Instruction processors with account validation

/// Borrow the pool record after owner and writability checks
fn load_pool<'a>(program_id: &Pubkey, pool_account: &'a AccountInfo) -> Result<&'a mut LiquidityPool, SwapError> {
    validate_owner(pool_account, program_id)?;
    validate_writable(pool_account)?;
    unsafe { borrow_account_data_mut::<LiquidityPool>(pool_account) }
}

/// Process create_pool instruction
///
/// Expected accounts:
/// 0. `[signer, writable]` Pool record (program-owned, zeroed, >= 152 bytes)
/// 1. `[signer, writable]` Authority, pays for the native custody account
/// 2. `[writable]` Native custody (PDA ["sol-account", pool])
/// 3. MOVE mint
/// 4. MOVE custody token account (ATA of the pool signer)
/// 5. Pool signer (PDA ["liquidity-pool", pool])
/// 6. System program
///
/// Expected data layout (2 bytes):
/// - sol_account_nonce: u8
/// - pool_signer_nonce: u8
fn process_create_pool_inner(program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    if accounts.len() < 7 {
        msg!("Error: CreatePool instruction requires 7 accounts");
        return Err(SwapError::InvalidInstruction.into());
    }

    let pool_account = &accounts[0];
    let authority = &accounts[1];
    let sol_account = &accounts[2];
    let move_mint = &accounts[3];
    let move_token_account = &accounts[4];
    let pool_signer = &accounts[5];
    let system_program = &accounts[6];

    validate_signer(pool_account)?;
    validate_signer(authority)?;
    validate_writable(authority)?;
    validate_writable(sol_account)?;
    validate_key(system_program, &SYSTEM_PROGRAM_ID)?;

    let mut reader = InstructionReader::new(data);
    let sol_account_nonce = reader.read_u8()?;
    let pool_signer_nonce = reader.read_u8()?;

    verify_pool_pda(program_id, SOL_ACCOUNT_SEED, pool_account.key(), sol_account_nonce, sol_account.key())?;
    verify_pool_pda(program_id, POOL_SIGNER_SEED, pool_account.key(), pool_signer_nonce, pool_signer.key())?;

    // MOVE custody must hold the pool's mint and be controlled by the pool signer
    let custody = read_token_account(move_token_account)?;
    require_mint(&custody, move_mint.key())?;
    if &custody.owner != pool_signer.key() {
        msg!("Error: MOVE custody not owned by pool signer");
        return Err(SwapError::InvalidAccount.into());
    }

    let pool = load_pool(program_id, pool_account)?;
    process_create_pool(
        pool,
        authority.key(),
        &PoolCustody {
            sol_account: *sol_account.key(),
            move_mint: *move_mint.key(),
            move_token_account: *move_token_account.key(),
            sol_account_nonce,
            pool_signer_nonce,
        },
    )?;

    // Native custody: zero-data, rent-exempt, owned by this program
    let lamports = Rent::get()?.minimum_balance(0);
    let bump = [sol_account_nonce];
    let seeds = [
        Seed::from(SOL_ACCOUNT_SEED),
        Seed::from(pool_account.key()),
        Seed::from(&bump),
    ];
    create_program_account(
        authority,
        sol_account,
        system_program,
        program_id,
        lamports,
        0,
        &[Signer::from(&seeds)],
    )?;

    Ok(())
}

/// Process deposit_native instruction
///
/// Expected accounts:
/// 0. `[signer, writable]` Depositor
/// 1. `[writable]` Pool record
/// 2. `[writable]` Native custody
/// 3. System program
///
/// Expected data layout (8 bytes):
/// - amount: u64 (lamports)
fn process_deposit_native_inner(program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    if accounts.len() < 4 {
        msg!("Error: DepositNative instruction requires 4 accounts");
        return Err(SwapError::InvalidInstruction.into());
    }

    let authority = &accounts[0];
    let pool_account = &accounts[1];
    let sol_account = &accounts[2];
    let system_program = &accounts[3];

    validate_signer(authority)?;
    validate_writable(authority)?;
    validate_writable(sol_account)?;
    validate_key(system_program, &SYSTEM_PROGRAM_ID)?;

    let amount = InstructionReader::new(data).read_u64()?;

    let pool = load_pool(program_id, pool_account)?;
    ensure_initialized(pool)?;
    validate_key(sol_account, &pool.sol_account)?;

    let settlement = process_deposit_native(pool, authority.key(), authority.lamports(), amount)?;
    system_transfer(authority, sol_account, system_program, settlement.native_in)?;

    Ok(())
}

/// Process deposit_secondary instruction
///
/// Expected accounts:
/// 0. `[writable]` Pool record
/// 1. `[signer]` Depositor, owner of the source token account
/// 2. `[writable]` MOVE custody
/// 3. `[writable]` Source MOVE token account
/// 4. Pool signer
/// 5. Token program
///
/// Expected data layout (8 bytes):
/// - amount: u64 (MOVE base units)
fn process_deposit_secondary_inner(program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    if accounts.len() < 6 {
        msg!("Error: DepositSecondary instruction requires 6 accounts");
        return Err(SwapError::InvalidInstruction.into());
    }

    let pool_account = &accounts[0];
    let authority = &accounts[1];
    let move_token_account = &accounts[2];
    let from_move = &accounts[3];
    let pool_signer = &accounts[4];
    let token_program = &accounts[5];

    validate_signer(authority)?;
    validate_writable(move_token_account)?;
    validate_writable(from_move)?;
    validate_key(token_program, &TOKEN_PROGRAM_ID)?;

    let amount = InstructionReader::new(data).read_u64()?;

    let pool = load_pool(program_id, pool_account)?;
    ensure_initialized(pool)?;
    validate_key(move_token_account, &pool.move_token_account)?;
    verify_pool_pda(program_id, POOL_SIGNER_SEED, pool_account.key(), pool.pool_signer_nonce, pool_signer.key())?;

    let source = read_token_account(from_move)?;
    require_mint(&source, &pool.move_mint)?;

    let settlement = process_deposit_secondary(pool, authority.key(), source.amount, amount)?;
    token_transfer(from_move, move_token_account, authority, token_program, settlement.secondary_in, &[])?;

    Ok(())
}

/// Process swap_secondary_to_native instruction
///
/// Expected accounts:
/// 0. `[writable]` Pool record
/// 1. `[signer]` Swapper, owner of the source token account
/// 2. `[writable]` Native custody
/// 3. `[writable]` MOVE custody
/// 4. `[writable]` Source MOVE token account
/// 5. `[writable]` Lamport destination
/// 6. System program
/// 7. Token program
///
/// Expected data layout (8 bytes):
/// - amount: u64 (MOVE base units, multiple of 10)
fn process_swap_secondary_to_native_inner(program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    if accounts.len() < 8 {
        msg!("Error: SwapSecondaryToNative instruction requires 8 accounts");
        return Err(SwapError::InvalidInstruction.into());
    }

    let pool_account = &accounts[0];
    let authority = &accounts[1];
    let sol_account = &accounts[2];
    let move_token_account = &accounts[3];
    let from_move = &accounts[4];
    let destination = &accounts[5];
    let system_program = &accounts[6];
    let token_program = &accounts[7];

    validate_signer(authority)?;
    validate_writable(sol_account)?;
    validate_writable(move_token_account)?;
    validate_writable(from_move)?;
    validate_writable(destination)?;
    validate_key(system_program, &SYSTEM_PROGRAM_ID)?;
    validate_key(token_program, &TOKEN_PROGRAM_ID)?;

    let amount = InstructionReader::new(data).read_u64()?;

    let pool = load_pool(program_id, pool_account)?;
    ensure_initialized(pool)?;
    validate_key(sol_account, &pool.sol_account)?;
    validate_key(move_token_account, &pool.move_token_account)?;

    let source = read_token_account(from_move)?;
    require_mint(&source, &pool.move_mint)?;

    let settlement = process_swap_secondary_to_native(pool, authority.key(), source.amount, amount)?;

    token_transfer(from_move, move_token_account, authority, token_program, settlement.secondary_in, &[])?;
    pay_out_lamports(sol_account, destination, settlement.native_out)?;

    Ok(())
}

/// Process swap_native_to_secondary instruction
///
/// Expected accounts:
/// 0. `[writable]` Pool record
/// 1. `[signer, writable]` Swapper, pays lamports
/// 2. `[writable]` Native custody
/// 3. `[writable]` MOVE custody
/// 4. `[writable]` Destination MOVE token account
/// 5. Pool signer
/// 6. Token program
/// 7. System program
///
/// Expected data layout (8 bytes):
/// - amount: u64 (lamports)
fn process_swap_native_to_secondary_inner(program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    if accounts.len() < 8 {
        msg!("Error: SwapNativeToSecondary instruction requires 8 accounts");
        return Err(SwapError::InvalidInstruction.into());
    }

    let pool_account = &accounts[0];
    let authority = &accounts[1];
    let sol_account = &accounts[2];
    let move_token_account = &accounts[3];
    let destination = &accounts[4];
    let pool_signer = &accounts[5];
    let token_program = &accounts[6];
    let system_program = &accounts[7];

    validate_signer(authority)?;
    validate_writable(authority)?;
    validate_writable(sol_account)?;
    validate_writable(move_token_account)?;
    validate_writable(destination)?;
    validate_key(token_program, &TOKEN_PROGRAM_ID)?;
    validate_key(system_program, &SYSTEM_PROGRAM_ID)?;

    let amount = InstructionReader::new(data).read_u64()?;

    let pool = load_pool(program_id, pool_account)?;
    ensure_initialized(pool)?;
    validate_key(sol_account, &pool.sol_account)?;
    validate_key(move_token_account, &pool.move_token_account)?;
    verify_pool_pda(program_id, POOL_SIGNER_SEED, pool_account.key(), pool.pool_signer_nonce, pool_signer.key())?;

    let pool_signer_nonce = pool.pool_signer_nonce;
    let settlement = process_swap_native_to_secondary(pool, authority.key(), authority.lamports(), amount)?;

    system_transfer(authority, sol_account, system_program, settlement.native_in)?;

    let bump = [pool_signer_nonce];
    let seeds = [
        Seed::from(POOL_SIGNER_SEED),
        Seed::from(pool_account.key()),
        Seed::from(&bump),
    ];
    token_transfer(
        move_token_account,
        destination,
        pool_signer,
        token_program,
        settlement.secondary_out,
        &[Signer::from(&seeds)],
    )?;

    Ok(())
}

/// Process pause instruction
///
/// Accounts expected:
/// 0. `[writable]` Pool record
/// 1. `[signer]` Pool authority
fn process_pause_inner(program_id: &Pubkey, accounts: &[AccountInfo], _data: &[u8]) -> ProgramResult {
    if accounts.len() < 2 {
        msg!("Error: Pause instruction requires 2 accounts");
        return Err(SwapError::InvalidInstruction.into());
    }

    let pool_account = &accounts[0];
    let authority = &accounts[1];

    validate_signer(authority)?;

    let pool = load_pool(program_id, pool_account)?;
    process_pause(pool, authority.key())?;

    Ok(())
}

/// Process unpause instruction
///
/// Accounts expected:
/// 0. `[writable]` Pool record
/// 1. `[signer]` Pool authority
fn process_unpause_inner(program_id: &Pubkey, accounts: &[AccountInfo], _data: &[u8]) -> ProgramResult {
    if accounts.len() < 2 {
        msg!("Error: Unpause instruction requires 2 accounts");
        return Err(SwapError::InvalidInstruction.into());
    }

    let pool_account = &accounts[0];
    let authority = &accounts[1];

    validate_signer(authority)?;

    let pool = load_pool(program_id, pool_account)?;
    process_unpause(pool, authority.key())?;

    Ok(())
}
