//! Typed client errors

use solana_client::client_error::ClientError as RpcClientError;
use solana_sdk::{instruction::InstructionError, pubkey::Pubkey, transaction::TransactionError};
use solana_swap_common::SwapError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("program rejected instruction: {0} (code {})", .0.code())]
    Program(SwapError),
    #[error("pool account {0} not found")]
    PoolNotFound(Pubkey),
    #[error("account {0} is not a liquidity pool owned by {1}")]
    NotAPool(Pubkey, Pubkey),
}

/// Custom program error code carried by a failed transaction, if any
pub fn program_error_code(err: &TransactionError) -> Option<u32> {
    match err {
        TransactionError::InstructionError(_, InstructionError::Custom(code)) => Some(*code),
        _ => None,
    }
}

/// Map an RPC failure back to the program's error, when it is one
pub fn decode_rpc_error(err: &RpcClientError) -> Option<ClientError> {
    let code = program_error_code(&err.get_transaction_error()?)?;
    SwapError::from_code(code).map(ClientError::Program)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_code_decoding() {
        let err = TransactionError::InstructionError(0, InstructionError::Custom(3));
        let code = program_error_code(&err).unwrap();
        assert_eq!(SwapError::from_code(code), Some(SwapError::PoolPaused));

        let err = TransactionError::InstructionError(1, InstructionError::MissingRequiredSignature);
        assert_eq!(program_error_code(&err), None);
        assert_eq!(program_error_code(&TransactionError::AccountNotFound), None);
    }

    #[test]
    fn test_display() {
        let msg = ClientError::Program(SwapError::InsufficientReserve).to_string();
        assert!(msg.contains("code 1"));
    }
}
