//! In-process pool registry
//!
//! Runs the same state machine as the program without a cluster. Each pool
//! sits behind its own mutex; the pool map is read-locked on the hot path and
//! write-locked only to insert. Wallet balances are locked after the pool.

use solana_sdk::{pubkey::Pubkey, signature::Keypair, signer::Signer};
use std::collections::HashMap;
use std::sync::{Mutex, RwLock};
use swap_model::{apply, create_pool, PoolError, PoolInstruction, PoolState, Settlement};
use thiserror::Error;

use crate::pda::PoolAddresses;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocalError {
    #[error("pool rejected instruction: {0}")]
    Rejected(PoolError),
    #[error("unknown pool {0}")]
    UnknownPool(Pubkey),
    #[error("registry lock poisoned")]
    LockPoisoned,
}

impl From<PoolError> for LocalError {
    fn from(err: PoolError) -> Self {
        LocalError::Rejected(err)
    }
}

/// Spendable balances of one simulated wallet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalletBalance {
    pub lamports: u64,
    pub move_tokens: u64,
}

impl WalletBalance {
    /// Move the caller's side of a settlement; checked by `check_caller` first
    fn settle(&mut self, settlement: &Settlement) -> Result<(), LocalError> {
        settlement.check_caller(self.lamports, self.move_tokens)?;

        let lamports = (self.lamports - settlement.native_in)
            .checked_add(settlement.native_out)
            .ok_or(PoolError::Overflow)?;
        let move_tokens = (self.move_tokens - settlement.secondary_in)
            .checked_add(settlement.secondary_out)
            .ok_or(PoolError::Overflow)?;

        self.lamports = lamports;
        self.move_tokens = move_tokens;
        Ok(())
    }
}

pub struct PoolRegistry {
    program_id: Pubkey,
    move_mint: Pubkey,
    pools: RwLock<HashMap<Pubkey, Mutex<PoolState>>>,
    wallets: Mutex<HashMap<Pubkey, WalletBalance>>,
}

impl PoolRegistry {
    pub fn new(program_id: Pubkey, move_mint: Pubkey) -> Self {
        Self {
            program_id,
            move_mint,
            pools: RwLock::new(HashMap::new()),
            wallets: Mutex::new(HashMap::new()),
        }
    }

    /// Credit a simulated wallet (airdrop / mint)
    pub fn fund(&self, wallet: &Pubkey, lamports: u64, move_tokens: u64) -> Result<(), LocalError> {
        let mut wallets = self.wallets.lock().map_err(|_| LocalError::LockPoisoned)?;
        let balance = wallets.entry(*wallet).or_default();
        balance.lamports = balance.lamports.checked_add(lamports).ok_or(PoolError::Overflow)?;
        balance.move_tokens = balance
            .move_tokens
            .checked_add(move_tokens)
            .ok_or(PoolError::Overflow)?;
        Ok(())
    }

    pub fn balance(&self, wallet: &Pubkey) -> Result<WalletBalance, LocalError> {
        let wallets = self.wallets.lock().map_err(|_| LocalError::LockPoisoned)?;
        Ok(wallets.get(wallet).copied().unwrap_or_default())
    }

    /// Allocate a new pool identity and register a fresh pool for it
    pub fn create_pool(&self, authority: &Pubkey) -> Result<PoolAddresses, LocalError> {
        let pool = Keypair::new().pubkey();
        let addrs = PoolAddresses::derive(&self.program_id, &pool, &self.move_mint);

        let state = create_pool(
            authority.to_bytes(),
            addrs.sol_account.to_bytes(),
            addrs.move_token_account.to_bytes(),
        );

        let mut pools = self.pools.write().map_err(|_| LocalError::LockPoisoned)?;
        if pools.contains_key(&pool) {
            return Err(PoolError::AlreadyInitialized.into());
        }
        pools.insert(pool, Mutex::new(state));

        log::debug!("Registered local pool {}", pool);
        Ok(addrs)
    }

    pub fn pool(&self, pool: &Pubkey) -> Result<PoolState, LocalError> {
        let pools = self.pools.read().map_err(|_| LocalError::LockPoisoned)?;
        let slot = pools.get(pool).ok_or(LocalError::UnknownPool(*pool))?;
        let state = slot.lock().map_err(|_| LocalError::LockPoisoned)?;
        Ok(*state)
    }

    pub fn pool_count(&self) -> Result<usize, LocalError> {
        Ok(self.pools.read().map_err(|_| LocalError::LockPoisoned)?.len())
    }

    /// Apply one instruction atomically: pool and wallet change together or not at all
    pub fn execute(
        &self,
        pool: &Pubkey,
        caller: &Pubkey,
        instruction: PoolInstruction,
    ) -> Result<PoolState, LocalError> {
        let pools = self.pools.read().map_err(|_| LocalError::LockPoisoned)?;
        let slot = pools.get(pool).ok_or(LocalError::UnknownPool(*pool))?;
        let mut state = slot.lock().map_err(|_| LocalError::LockPoisoned)?;

        let (next, settlement) = apply(&state, &caller.to_bytes(), instruction)?;

        {
            let mut wallets = self.wallets.lock().map_err(|_| LocalError::LockPoisoned)?;
            let mut balance = wallets.get(caller).copied().unwrap_or_default();
            balance.settle(&settlement)?;
            wallets.insert(*caller, balance);
        }

        *state = next;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use swap_model::{DECIMAL, LAMPORTS_PER_SOL};

    fn registry() -> PoolRegistry {
        PoolRegistry::new(Pubkey::new_unique(), Pubkey::new_unique())
    }

    #[test]
    fn test_create_registers_fresh_pool() {
        let reg = registry();
        let authority = Pubkey::new_unique();
        let addrs = reg.create_pool(&authority).unwrap();

        let state = reg.pool(&addrs.pool).unwrap();
        assert_eq!(state.sol_reserve(), 0);
        assert_eq!(state.move_token_reserve(), 0);
        assert!(!state.paused);
        assert_eq!(state.authority, authority.to_bytes());
        assert_eq!(state.sol_account, addrs.sol_account.to_bytes());
        assert_eq!(reg.pool_count().unwrap(), 1);
    }

    #[test]
    fn test_unknown_pool() {
        let reg = registry();
        let pool = Pubkey::new_unique();
        assert_eq!(
            reg.execute(&pool, &Pubkey::new_unique(), PoolInstruction::Pause),
            Err(LocalError::UnknownPool(pool))
        );
    }

    #[test]
    fn test_swap_moves_wallet_balances() {
        let reg = registry();
        let user = Pubkey::new_unique();
        reg.fund(&user, LAMPORTS_PER_SOL, 10 * DECIMAL).unwrap();
        let pool = reg.create_pool(&user).unwrap().pool;

        reg.execute(&pool, &user, PoolInstruction::DepositNative { amount: LAMPORTS_PER_SOL / 10 }).unwrap();
        reg.execute(&pool, &user, PoolInstruction::DepositSecondary { amount: DECIMAL }).unwrap();
        let state = reg
            .execute(&pool, &user, PoolInstruction::SwapSecondaryToNative { amount: DECIMAL })
            .unwrap();

        assert_eq!(state.sol_reserve(), 0);
        assert_eq!(state.move_token_reserve(), 2 * DECIMAL);
        assert_eq!(
            reg.balance(&user).unwrap(),
            WalletBalance {
                lamports: LAMPORTS_PER_SOL,
                move_tokens: 8 * DECIMAL,
            }
        );
    }

    #[test]
    fn test_underfunded_caller_changes_nothing() {
        let reg = registry();
        let user = Pubkey::new_unique();
        reg.fund(&user, 10, 0).unwrap();
        let pool = reg.create_pool(&user).unwrap().pool;

        assert_eq!(
            reg.execute(&pool, &user, PoolInstruction::DepositNative { amount: 11 }),
            Err(LocalError::Rejected(PoolError::InsufficientCallerBalance))
        );
        assert_eq!(reg.pool(&pool).unwrap().sol_reserve(), 0);
        assert_eq!(reg.balance(&user).unwrap().lamports, 10);
    }

    #[test]
    fn test_concurrent_swaps_serialize_per_pool() {
        let reg = Arc::new(registry());
        let authority = Pubkey::new_unique();
        reg.fund(&authority, 1_000_000, 0).unwrap();
        let pool = reg.create_pool(&authority).unwrap().pool;
        reg.execute(&pool, &authority, PoolInstruction::DepositNative { amount: 1_000 }).unwrap();

        // 8 threads x 20 swaps of 10 MOVE each want 160 lamports out of 1_000
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let reg = Arc::clone(&reg);
                thread::spawn(move || {
                    let user = Pubkey::new_unique();
                    reg.fund(&user, 0, 200).unwrap();
                    for _ in 0..20 {
                        reg.execute(&pool, &user, PoolInstruction::SwapSecondaryToNative { amount: 10 })
                            .unwrap();
                    }
                    reg.balance(&user).unwrap()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(
                handle.join().unwrap(),
                WalletBalance {
                    lamports: 20,
                    move_tokens: 0,
                }
            );
        }

        let state = reg.pool(&pool).unwrap();
        assert_eq!(state.sol_reserve(), 1_000 - 160);
        assert_eq!(state.move_token_reserve(), 1_600);
    }

    #[test]
    fn test_pools_are_independent() {
        let reg = Arc::new(registry());
        let authority = Pubkey::new_unique();
        let a = reg.create_pool(&authority).unwrap().pool;
        let b = reg.create_pool(&authority).unwrap().pool;
        assert_ne!(a, b);

        reg.execute(&a, &authority, PoolInstruction::Pause).unwrap();
        assert!(reg.pool(&a).unwrap().paused);
        assert!(!reg.pool(&b).unwrap().paused);
    }
}
