//! Account validation helpers

use crate::SwapError;
use pinocchio::{account_info::AccountInfo, msg, pubkey::Pubkey};

pub fn validate_owner(account: &AccountInfo, program_id: &Pubkey) -> Result<(), SwapError> {
    if !account.is_owned_by(program_id) {
        msg!("Error: Account has incorrect owner");
        return Err(SwapError::InvalidAccount);
    }
    Ok(())
}

pub fn validate_writable(account: &AccountInfo) -> Result<(), SwapError> {
    if !account.is_writable() {
        msg!("Error: Account must be writable");
        return Err(SwapError::InvalidAccount);
    }
    Ok(())
}

pub fn validate_signer(account: &AccountInfo) -> Result<(), SwapError> {
    if !account.is_signer() {
        msg!("Error: Account must be a signer");
        return Err(SwapError::MissingSignature);
    }
    Ok(())
}

/// Check an account sits at the address recorded for it
pub fn validate_key(account: &AccountInfo, expected: &Pubkey) -> Result<(), SwapError> {
    if account.key() != expected {
        msg!("Error: Account address mismatch");
        return Err(SwapError::InvalidAccount);
    }
    Ok(())
}

/// Reinterpret account data as `T`
///
/// # Safety
/// `T` must be `repr(C)` plain data valid for any bit pattern, and no other
/// borrow of this account's data may be live.
pub unsafe fn borrow_account_data_mut<T>(account: &AccountInfo) -> Result<&mut T, SwapError> {
    let data = account.borrow_mut_data_unchecked();
    if data.len() < core::mem::size_of::<T>() {
        msg!("Error: Account data too small");
        return Err(SwapError::InvalidAccount);
    }
    if data.as_ptr() as usize % core::mem::align_of::<T>() != 0 {
        msg!("Error: Account data misaligned");
        return Err(SwapError::InvalidAccount);
    }
    Ok(&mut *(data.as_mut_ptr() as *mut T))
}
