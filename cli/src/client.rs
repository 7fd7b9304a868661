//! Solana RPC client utilities and helpers

use anyhow::{Context, Result};
use colored::Colorize;
use solana_client::rpc_client::RpcClient;
use solana_sdk::{
    account::Account,
    commitment_config::CommitmentConfig,
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};
use solana_swap::LiquidityPool;

use crate::{
    config::NetworkConfig,
    error::{decode_rpc_error, ClientError},
};

/// Create an RPC client from the network configuration
pub fn create_rpc_client(config: &NetworkConfig) -> RpcClient {
    RpcClient::new_with_commitment(config.rpc_url.clone(), CommitmentConfig::confirmed())
}

/// Send and confirm a transaction paid by `payer`
///
/// Program rejections are reported as `ClientError::Program`.
pub async fn send_and_confirm_with(
    config: &NetworkConfig,
    instructions: &[Instruction],
    payer: &Keypair,
    extra_signers: &[&Keypair],
) -> Result<Signature> {
    let client = create_rpc_client(config);

    let recent_blockhash = client
        .get_latest_blockhash()
        .context("Failed to get recent blockhash")?;

    let mut signers: Vec<&Keypair> = vec![payer];
    signers.extend_from_slice(extra_signers);

    let transaction = Transaction::new_signed_with_payer(
        instructions,
        Some(&payer.pubkey()),
        &signers,
        recent_blockhash,
    );

    println!("{}", "Sending transaction...".dimmed());

    let signature = client
        .send_and_confirm_transaction(&transaction)
        .map_err(|err| match decode_rpc_error(&err) {
            Some(decoded) => anyhow::Error::new(decoded),
            None => anyhow::Error::new(err).context("Failed to send and confirm transaction"),
        })?;

    println!("{} {}", "Transaction confirmed:".bright_green(), signature);
    log::debug!("Confirmed {} instruction(s) in {}", instructions.len(), signature);

    Ok(signature)
}

/// Send and confirm a transaction paid by the configured wallet
pub async fn send_and_confirm_transaction(
    config: &NetworkConfig,
    instructions: &[Instruction],
    extra_signers: &[&Keypair],
) -> Result<Signature> {
    send_and_confirm_with(config, instructions, &config.keypair, extra_signers).await
}

/// Fetch and decode a pool record
///
/// A missing account is `ClientError::PoolNotFound`; transport failures keep their cause.
pub fn fetch_pool(config: &NetworkConfig, pool: &Pubkey) -> Result<LiquidityPool> {
    let client = create_rpc_client(config);

    let account = client
        .get_account_with_commitment(pool, client.commitment())
        .with_context(|| format!("Failed to fetch pool account: {}", pool))?
        .value;

    decode_pool_account(pool, &config.program_id, account)
}

/// Check owner and initialization of a fetched pool account
pub fn decode_pool_account(
    pool: &Pubkey,
    program_id: &Pubkey,
    account: Option<Account>,
) -> Result<LiquidityPool> {
    let account = account.ok_or(ClientError::PoolNotFound(*pool))?;

    if account.owner != *program_id {
        return Err(ClientError::NotAPool(*pool, *program_id).into());
    }

    LiquidityPool::decode(&account.data)
        .filter(|record| record.is_initialized())
        .ok_or_else(|| ClientError::NotAPool(*pool, *program_id).into())
}

/// Get SOL balance
pub fn get_balance(config: &NetworkConfig, address: &Pubkey) -> Result<u64> {
    let client = create_rpc_client(config);

    client
        .get_balance(address)
        .with_context(|| format!("Failed to get balance for: {}", address))
}

/// Token balance in base units
pub fn get_token_balance(config: &NetworkConfig, token_account: &Pubkey) -> Result<u64> {
    let client = create_rpc_client(config);

    let balance = client
        .get_token_account_balance(token_account)
        .with_context(|| format!("Failed to get token balance for: {}", token_account))?;

    balance
        .amount
        .parse()
        .with_context(|| format!("Malformed token amount: {}", balance.amount))
}

/// Parse a decimal amount of whole tokens into base units (`decimals` places)
///
/// Exact: "0.1" with 9 decimals is 100_000_000, never 99_999_999.
pub fn parse_units(amount: &str, decimals: u32) -> Result<u64> {
    let amount = amount.trim();
    let (whole, fraction) = amount.split_once('.').unwrap_or((amount, ""));

    if whole.is_empty() && fraction.is_empty() {
        anyhow::bail!("Empty amount");
    }
    if fraction.len() > decimals as usize {
        anyhow::bail!("Amount {} has more than {} decimal places", amount, decimals);
    }
    if !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
        anyhow::bail!("Invalid amount: {}", amount);
    }

    let scale = 10u64.pow(decimals);
    let whole: u64 = if whole.is_empty() { 0 } else { whole.parse()? };
    let fraction: u64 = if fraction.is_empty() {
        0
    } else {
        fraction.parse::<u64>()? * 10u64.pow(decimals - fraction.len() as u32)
    };

    whole
        .checked_mul(scale)
        .and_then(|v| v.checked_add(fraction))
        .with_context(|| format!("Amount {} is too large", amount))
}

/// Format base units as a decimal amount of whole tokens
pub fn format_units(amount: u64, decimals: u32) -> String {
    let scale = 10u64.pow(decimals);
    let fraction = format!("{:0width$}", amount % scale, width = decimals as usize);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        format!("{}", amount / scale)
    } else {
        format!("{}.{}", amount / scale, fraction)
    }
}

/// Pretty print a signature as a shortened explorer link
pub fn format_signature(signature: &Signature, network: &str) -> String {
    let sig_str = signature.to_string();
    let short = format!("{}...{}", &sig_str[0..8], &sig_str[sig_str.len() - 8..]);

    let explorer_url = match network {
        "mainnet-beta" | "mainnet" => format!("https://explorer.solana.com/tx/{}", sig_str),
        "devnet" => format!("https://explorer.solana.com/tx/{}?cluster=devnet", sig_str),
        "testnet" => format!("https://explorer.solana.com/tx/{}?cluster=testnet", sig_str),
        _ => sig_str.clone(),
    };

    format!("{} ({})", short.bright_blue(), explorer_url.dimmed())
}

/// Pretty print a pubkey as shortened address
pub fn format_pubkey(pubkey: &Pubkey) -> String {
    let addr = pubkey.to_string();
    format!("{}...{}", &addr[0..8], &addr[addr.len() - 8..])
        .bright_yellow()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SwapSettings;
    use std::path::PathBuf;

    fn pool_account(owner: Pubkey, record: &LiquidityPool) -> Account {
        Account {
            lamports: 1,
            data: record.encode().to_vec(),
            owner,
            executable: false,
            rent_epoch: 0,
        }
    }

    fn live_record() -> LiquidityPool {
        LiquidityPool {
            is_initialized: 1,
            sol_reserve: 42,
            ..LiquidityPool::default()
        }
    }

    fn unreachable_config() -> NetworkConfig {
        NetworkConfig {
            network: "localnet".to_string(),
            // Nothing listens on port 1
            rpc_url: "http://127.0.0.1:1".to_string(),
            keypair: Keypair::new(),
            keypair_path: PathBuf::new(),
            program_id: Pubkey::new_unique(),
            move_mint: Pubkey::new_unique(),
            settings: SwapSettings::default(),
            settings_path: PathBuf::new(),
        }
    }

    #[test]
    fn test_decode_pool_account() {
        let pool = Pubkey::new_unique();
        let program_id = Pubkey::new_unique();

        let record = decode_pool_account(&pool, &program_id, Some(pool_account(program_id, &live_record()))).unwrap();
        assert_eq!(record.sol_reserve, 42);

        let err = decode_pool_account(&pool, &program_id, None).unwrap_err();
        assert!(matches!(err.downcast_ref::<ClientError>(), Some(ClientError::PoolNotFound(p)) if *p == pool));

        let foreign = pool_account(Pubkey::new_unique(), &live_record());
        let err = decode_pool_account(&pool, &program_id, Some(foreign)).unwrap_err();
        assert!(matches!(err.downcast_ref::<ClientError>(), Some(ClientError::NotAPool(..))));

        let fresh = pool_account(program_id, &LiquidityPool::default());
        let err = decode_pool_account(&pool, &program_id, Some(fresh)).unwrap_err();
        assert!(matches!(err.downcast_ref::<ClientError>(), Some(ClientError::NotAPool(..))));
    }

    #[test]
    fn test_fetch_pool_keeps_transport_errors() {
        let pool = Pubkey::new_unique();
        let err = fetch_pool(&unreachable_config(), &pool).unwrap_err();

        assert!(err.downcast_ref::<ClientError>().is_none());
        assert!(err.to_string().contains("Failed to fetch pool account"));
    }

    #[test]
    fn test_parse_units() {
        assert_eq!(parse_units("1", 9).unwrap(), 1_000_000_000);
        assert_eq!(parse_units("0.1", 9).unwrap(), 100_000_000);
        assert_eq!(parse_units(".5", 9).unwrap(), 500_000_000);
        assert_eq!(parse_units("2.", 9).unwrap(), 2_000_000_000);
        assert_eq!(parse_units("0.000000001", 9).unwrap(), 1);
    }

    #[test]
    fn test_parse_units_rejects() {
        assert!(parse_units("0.0000000001", 9).is_err());
        assert!(parse_units("-1", 9).is_err());
        assert!(parse_units("1e3", 9).is_err());
        assert!(parse_units(".", 9).is_err());
        assert!(parse_units("99999999999", 9).is_err());
    }

    #[test]
    fn test_format_units() {
        assert_eq!(format_units(100_000_000, 9), "0.1");
        assert_eq!(format_units(2_000_000_000, 9), "2");
        assert_eq!(format_units(1, 9), "0.000000001");
    }
}
