//! Fixed-ratio SOL/MOVE liquidity pool program
//!
//! Accounting lives in `swap_model`; this crate checks accounts, moves
//! lamports and tokens, and persists the pool record.

pub mod cpi;
pub mod entrypoint;
pub mod instructions;
pub mod pda;
pub mod state;
pub mod token;

pub use entrypoint::process_instruction;
pub use state::LiquidityPool;

pinocchio_pubkey::declare_id!("G8wxZbx3xzSzsLBHaEuNcCeN14nVoBLiHoW3QVEL8dP5");
