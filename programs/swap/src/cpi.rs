//! Cross-program invocations into the System and SPL Token programs

use pinocchio::{
    account_info::AccountInfo,
    instruction::{AccountMeta, Instruction, Signer},
    program::{invoke, invoke_signed},
    pubkey::Pubkey,
    ProgramResult,
};
use solana_swap_common::SwapError;

pub const SYSTEM_PROGRAM_ID: Pubkey = [0; 32];

/// System transfer: discriminator 2u32, lamports u64
pub fn system_transfer(
    from: &AccountInfo,
    to: &AccountInfo,
    system_program: &AccountInfo,
    lamports: u64,
) -> ProgramResult {
    let mut instruction_data = [0u8; 12];
    instruction_data[0..4].copy_from_slice(&2u32.to_le_bytes());
    instruction_data[4..12].copy_from_slice(&lamports.to_le_bytes());

    let instruction = Instruction {
        program_id: system_program.key(),
        accounts: &[
            AccountMeta::writable_signer(from.key()),
            AccountMeta::writable(to.key()),
        ],
        data: &instruction_data,
    };

    invoke(&instruction, &[from, to, system_program])
}

/// System create_account: discriminator 0u32, lamports u64, space u64, owner
pub fn create_program_account(
    payer: &AccountInfo,
    new_account: &AccountInfo,
    system_program: &AccountInfo,
    owner: &Pubkey,
    lamports: u64,
    space: u64,
    signers: &[Signer],
) -> ProgramResult {
    let mut instruction_data = [0u8; 52];
    instruction_data[4..12].copy_from_slice(&lamports.to_le_bytes());
    instruction_data[12..20].copy_from_slice(&space.to_le_bytes());
    instruction_data[20..52].copy_from_slice(owner);

    let instruction = Instruction {
        program_id: system_program.key(),
        accounts: &[
            AccountMeta::writable_signer(payer.key()),
            AccountMeta::writable_signer(new_account.key()),
        ],
        data: &instruction_data,
    };

    invoke_signed(&instruction, &[payer, new_account, system_program], signers)
}

/// SPL token Transfer: discriminator 3, amount u64
pub fn token_transfer(
    source: &AccountInfo,
    destination: &AccountInfo,
    authority: &AccountInfo,
    token_program: &AccountInfo,
    amount: u64,
    signers: &[Signer],
) -> ProgramResult {
    let mut instruction_data = [0u8; 9];
    instruction_data[0] = 3;
    instruction_data[1..9].copy_from_slice(&amount.to_le_bytes());

    let instruction = Instruction {
        program_id: token_program.key(),
        accounts: &[
            AccountMeta::writable(source.key()),
            AccountMeta::writable(destination.key()),
            AccountMeta::readonly_signer(authority.key()),
        ],
        data: &instruction_data,
    };

    invoke_signed(&instruction, &[source, destination, authority, token_program], signers)
}

/// Move lamports out of a program-owned account without a CPI
pub fn pay_out_lamports(from: &AccountInfo, to: &AccountInfo, lamports: u64) -> Result<(), SwapError> {
    {
        let mut balance = from
            .try_borrow_mut_lamports()
            .map_err(|_| SwapError::InvalidAccount)?;
        *balance = balance
            .checked_sub(lamports)
            .ok_or(SwapError::InsufficientReserve)?;
    }

    let mut balance = to
        .try_borrow_mut_lamports()
        .map_err(|_| SwapError::InvalidAccount)?;
    *balance = balance.checked_add(lamports).ok_or(SwapError::Overflow)?;
    Ok(())
}
