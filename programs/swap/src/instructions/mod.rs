pub mod create_pool;
pub mod deposit_native;
pub mod deposit_secondary;
pub mod pause;
pub mod swap_native_to_secondary;
pub mod swap_secondary_to_native;
pub mod unpause;

pub use create_pool::*;
pub use deposit_native::*;
pub use deposit_secondary::*;
pub use pause::*;
pub use swap_native_to_secondary::*;
pub use swap_secondary_to_native::*;
pub use unpause::*;

/// Instruction discriminator
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapInstruction {
    /// Initialize pool record and native custody
    CreatePool = 0,
    /// Add lamports to the native reserve
    DepositNative = 1,
    /// Add MOVE to the secondary reserve
    DepositSecondary = 2,
    /// Pay MOVE, receive SOL
    SwapSecondaryToNative = 3,
    /// Pay SOL, receive MOVE
    SwapNativeToSecondary = 4,
    /// Halt swaps (authority only)
    Pause = 5,
    /// Resume swaps (authority only)
    Unpause = 6,
}

impl SwapInstruction {
    pub fn from_discriminator(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(SwapInstruction::CreatePool),
            1 => Some(SwapInstruction::DepositNative),
            2 => Some(SwapInstruction::DepositSecondary),
            3 => Some(SwapInstruction::SwapSecondaryToNative),
            4 => Some(SwapInstruction::SwapNativeToSecondary),
            5 => Some(SwapInstruction::Pause),
            6 => Some(SwapInstruction::Unpause),
            _ => None,
        }
    }
}
