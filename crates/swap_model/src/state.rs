//! Pool state as seen by the state machine

use crate::{PoolError, ReserveLedger};

/// Raw 32-byte account address
pub type Address = [u8; 32];

/// Snapshot of one pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolState {
    /// Identity allowed to pause/unpause
    pub authority: Address,
    /// Native custody account
    pub sol_account: Address,
    /// Secondary custody token account
    pub move_token_account: Address,
    /// Custodied reserves
    pub ledger: ReserveLedger,
    /// Swaps are rejected while set
    pub paused: bool,
}

impl PoolState {
    pub fn sol_reserve(&self) -> u64 {
        self.ledger.sol_reserve
    }

    pub fn move_token_reserve(&self) -> u64 {
        self.ledger.move_token_reserve
    }
}

/// Asset movements implied by an accepted instruction, from the pool's side
///
/// `*_in` is taken from the caller into custody, `*_out` is paid from custody
/// to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settlement {
    pub native_in: u64,
    pub native_out: u64,
    pub secondary_in: u64,
    pub secondary_out: u64,
}

impl Settlement {
    pub const NONE: Settlement = Settlement {
        native_in: 0,
        native_out: 0,
        secondary_in: 0,
        secondary_out: 0,
    };

    /// Lamports the caller must hold for this settlement
    pub fn native_required(&self) -> u64 {
        self.native_in
    }

    /// MOVE base units the caller must hold for this settlement
    pub fn secondary_required(&self) -> u64 {
        self.secondary_in
    }

    /// Reject if the caller cannot fund the inbound legs
    pub fn check_caller(&self, native_balance: u64, secondary_balance: u64) -> Result<(), PoolError> {
        if native_balance < self.native_required() || secondary_balance < self.secondary_required() {
            return Err(PoolError::InsufficientCallerBalance);
        }
        Ok(())
    }
}
