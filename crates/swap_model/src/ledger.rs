//! Reserve ledger - the two custody counters backing one pool
//!
//! Every operation is all-or-nothing: on error the ledger is left untouched.

use crate::PoolError;

/// Reserves held for one pool
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReserveLedger {
    /// Lamports in the native custody account (rent excluded)
    pub sol_reserve: u64,
    /// MOVE base units in the secondary custody account
    pub move_token_reserve: u64,
}

impl ReserveLedger {
    pub const fn new(sol_reserve: u64, move_token_reserve: u64) -> Self {
        Self {
            sol_reserve,
            move_token_reserve,
        }
    }

    pub fn credit_native(&mut self, amount: u64) -> Result<(), PoolError> {
        self.sol_reserve = credit(self.sol_reserve, amount)?;
        Ok(())
    }

    pub fn credit_secondary(&mut self, amount: u64) -> Result<(), PoolError> {
        self.move_token_reserve = credit(self.move_token_reserve, amount)?;
        Ok(())
    }

    pub fn debit_native(&mut self, amount: u64) -> Result<(), PoolError> {
        self.sol_reserve = debit(self.sol_reserve, amount)?;
        Ok(())
    }

    pub fn debit_secondary(&mut self, amount: u64) -> Result<(), PoolError> {
        self.move_token_reserve = debit(self.move_token_reserve, amount)?;
        Ok(())
    }
}

fn credit(balance: u64, amount: u64) -> Result<u64, PoolError> {
    if amount == 0 {
        return Err(PoolError::InvalidAmount);
    }
    balance.checked_add(amount).ok_or(PoolError::Overflow)
}

fn debit(balance: u64, amount: u64) -> Result<u64, PoolError> {
    if amount == 0 {
        return Err(PoolError::InvalidAmount);
    }
    balance
        .checked_sub(amount)
        .ok_or(PoolError::InsufficientReserve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_credit_and_debit() {
        let mut ledger = ReserveLedger::default();
        ledger.credit_native(500).unwrap();
        ledger.credit_secondary(7_000).unwrap();
        ledger.debit_native(200).unwrap();
        ledger.debit_secondary(7_000).unwrap();

        assert_eq!(ledger, ReserveLedger::new(300, 0));
    }

    #[test]
    fn test_zero_amount_rejected() {
        let mut ledger = ReserveLedger::new(10, 10);
        assert_eq!(ledger.credit_native(0), Err(PoolError::InvalidAmount));
        assert_eq!(ledger.credit_secondary(0), Err(PoolError::InvalidAmount));
        assert_eq!(ledger.debit_native(0), Err(PoolError::InvalidAmount));
        assert_eq!(ledger.debit_secondary(0), Err(PoolError::InvalidAmount));
        assert_eq!(ledger, ReserveLedger::new(10, 10));
    }

    #[test]
    fn test_debit_whole_balance() {
        let mut ledger = ReserveLedger::new(42, 0);
        ledger.debit_native(42).unwrap();
        assert_eq!(ledger.sol_reserve, 0);
    }

    #[test]
    fn test_overdraw_leaves_ledger_unchanged() {
        let mut ledger = ReserveLedger::new(42, 9);
        assert_eq!(ledger.debit_native(43), Err(PoolError::InsufficientReserve));
        assert_eq!(ledger.debit_secondary(10), Err(PoolError::InsufficientReserve));
        assert_eq!(ledger, ReserveLedger::new(42, 9));
    }

    #[test]
    fn test_credit_overflow() {
        let mut ledger = ReserveLedger::new(u64::MAX, 0);
        assert_eq!(ledger.credit_native(1), Err(PoolError::Overflow));
        assert_eq!(ledger.sol_reserve, u64::MAX);
    }

    proptest! {
        #[test]
        fn prop_credit_then_debit_restores(start in 0u64..u64::MAX / 2, amount in 1u64..u64::MAX / 2) {
            let mut ledger = ReserveLedger::new(start, start);
            ledger.credit_native(amount).unwrap();
            ledger.credit_secondary(amount).unwrap();
            prop_assert_eq!(ledger.sol_reserve, start + amount);

            ledger.debit_native(amount).unwrap();
            ledger.debit_secondary(amount).unwrap();
            prop_assert_eq!(ledger, ReserveLedger::new(start, start));
        }

        #[test]
        fn prop_failed_debit_is_noop(balance in 0u64..1_000_000, extra in 1u64..1_000_000) {
            let mut ledger = ReserveLedger::new(balance, balance);
            let before = ledger;
            prop_assert!(ledger.debit_native(balance + extra).is_err());
            prop_assert!(ledger.debit_secondary(balance + extra).is_err());
            prop_assert_eq!(ledger, before);
        }
    }
}
