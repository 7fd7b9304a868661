//! Read-only view of SPL token accounts

use pinocchio::{account_info::AccountInfo, msg, pubkey::Pubkey};
use solana_swap_common::SwapError;

pub const TOKEN_PROGRAM_ID: Pubkey =
    pinocchio_pubkey::pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");

/// Packed size of an SPL token account
pub const TOKEN_ACCOUNT_LEN: usize = 165;

/// Fields of a token account the pool cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenAccountView {
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
}

impl TokenAccountView {
    /// Layout: mint (0..32), owner (32..64), amount (64..72)
    pub fn parse(data: &[u8]) -> Option<Self> {
        if data.len() != TOKEN_ACCOUNT_LEN {
            return None;
        }
        let mut mint = [0u8; 32];
        let mut owner = [0u8; 32];
        let mut amount = [0u8; 8];
        mint.copy_from_slice(&data[0..32]);
        owner.copy_from_slice(&data[32..64]);
        amount.copy_from_slice(&data[64..72]);

        Some(Self {
            mint,
            owner,
            amount: u64::from_le_bytes(amount),
        })
    }
}

pub fn read_token_account(account: &AccountInfo) -> Result<TokenAccountView, SwapError> {
    if !account.is_owned_by(&TOKEN_PROGRAM_ID) {
        msg!("Error: Not a token account");
        return Err(SwapError::InvalidAccount);
    }
    let data = account.try_borrow_data().map_err(|_| SwapError::InvalidAccount)?;
    TokenAccountView::parse(&data).ok_or_else(|| {
        msg!("Error: Malformed token account");
        SwapError::InvalidAccount
    })
}

/// Token account must hold `mint`
pub fn require_mint(view: &TokenAccountView, mint: &Pubkey) -> Result<(), SwapError> {
    if &view.mint != mint {
        msg!("Error: Token account mint mismatch");
        return Err(SwapError::InvalidAccount);
    }
    Ok(())
}
