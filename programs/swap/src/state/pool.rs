//! Liquidity pool record

use pinocchio::pubkey::Pubkey;

/// On-chain pool account (152 bytes, little-endian)
///
/// Layout:
/// - authority: Pubkey (0..32)
/// - sol_account: Pubkey (32..64)
/// - move_mint: Pubkey (64..96)
/// - move_token_account: Pubkey (96..128)
/// - sol_reserve: u64 (128..136)
/// - move_token_reserve: u64 (136..144)
/// - is_initialized, paused, sol_account_nonce, pool_signer_nonce: u8 (144..148)
/// - padding (148..152)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiquidityPool {
    /// May pause and unpause swaps
    pub authority: Pubkey,
    /// Native custody account (PDA ["sol-account", pool])
    pub sol_account: Pubkey,
    /// Secondary asset mint
    pub move_mint: Pubkey,
    /// Secondary custody token account, owned by the pool signer
    pub move_token_account: Pubkey,
    /// Lamports held for the pool, rent excluded
    pub sol_reserve: u64,
    /// MOVE base units held for the pool
    pub move_token_reserve: u64,
    pub is_initialized: u8,
    pub paused: u8,
    pub sol_account_nonce: u8,
    pub pool_signer_nonce: u8,
    pub _padding: [u8; 4],
}

const _: () = assert!(LiquidityPool::LEN == 152);

impl LiquidityPool {
    pub const LEN: usize = core::mem::size_of::<Self>();

    pub fn is_initialized(&self) -> bool {
        self.is_initialized != 0
    }

    pub fn is_paused(&self) -> bool {
        self.paused != 0
    }

    /// Decode from raw account data without relying on alignment
    pub fn decode(data: &[u8]) -> Option<Self> {
        if data.len() < Self::LEN {
            return None;
        }

        let key = |offset: usize| -> Pubkey {
            let mut out = [0u8; 32];
            out.copy_from_slice(&data[offset..offset + 32]);
            out
        };
        let word = |offset: usize| -> u64 {
            let mut out = [0u8; 8];
            out.copy_from_slice(&data[offset..offset + 8]);
            u64::from_le_bytes(out)
        };

        Some(Self {
            authority: key(0),
            sol_account: key(32),
            move_mint: key(64),
            move_token_account: key(96),
            sol_reserve: word(128),
            move_token_reserve: word(136),
            is_initialized: data[144],
            paused: data[145],
            sol_account_nonce: data[146],
            pool_signer_nonce: data[147],
            _padding: [0; 4],
        })
    }

    pub fn encode(&self) -> [u8; Self::LEN] {
        let mut out = [0u8; Self::LEN];
        out[0..32].copy_from_slice(&self.authority);
        out[32..64].copy_from_slice(&self.sol_account);
        out[64..96].copy_from_slice(&self.move_mint);
        out[96..128].copy_from_slice(&self.move_token_account);
        out[128..136].copy_from_slice(&self.sol_reserve.to_le_bytes());
        out[136..144].copy_from_slice(&self.move_token_reserve.to_le_bytes());
        out[144] = self.is_initialized;
        out[145] = self.paused;
        out[146] = self.sol_account_nonce;
        out[147] = self.pool_signer_nonce;
        out
    }
}

impl Default for LiquidityPool {
    fn default() -> Self {
        Self {
            authority: [0; 32],
            sol_account: [0; 32],
            move_mint: [0; 32],
            move_token_account: [0; 32],
            sol_reserve: 0,
            move_token_reserve: 0,
            is_initialized: 0,
            paused: 0,
            sol_account_nonce: 0,
            pool_signer_nonce: 0,
            _padding: [0; 4],
        }
    }
}
