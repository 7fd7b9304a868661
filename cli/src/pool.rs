//! Liquidity pool commands

use anyhow::{Context, Result};
use colored::Colorize;
use solana_sdk::{
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
};
use solana_swap::LiquidityPool;
use spl_associated_token_account::{
    get_associated_token_address, instruction::create_associated_token_account_idempotent,
};
use swap_model::{DECIMAL, SWAP_RATIO};

use crate::{
    client::{self, format_pubkey, format_signature, format_units, parse_units},
    config::{parse_pubkey, NetworkConfig},
    instruction,
    pda::PoolAddresses,
};

/// SOL and MOVE both use 9 decimal places
const DECIMALS: u32 = 9;

/// Addresses and mint of a deployed pool
pub struct LivePool {
    pub addrs: PoolAddresses,
    pub move_mint: Pubkey,
    pub record: LiquidityPool,
}

pub fn load_pool(config: &NetworkConfig, pool: &Pubkey) -> Result<LivePool> {
    let record = client::fetch_pool(config, pool)?;
    let addrs = PoolAddresses::from_record(&config.program_id, pool, &record)?;
    Ok(LivePool {
        addrs,
        move_mint: Pubkey::new_from_array(record.move_mint),
        record,
    })
}

// ============================================================================
// Transaction builders parameterised by wallet (shared with the test suite)
// ============================================================================

/// Allocate and initialise a pool owned by `authority`
pub async fn create_pool_with(
    config: &NetworkConfig,
    authority: &Keypair,
    move_mint: &Pubkey,
) -> Result<PoolAddresses> {
    let rpc_client = client::create_rpc_client(config);
    let pool_keypair = Keypair::new();
    let addrs = PoolAddresses::derive(&config.program_id, &pool_keypair.pubkey(), move_mint);

    let rent = rpc_client
        .get_minimum_balance_for_rent_exemption(LiquidityPool::LEN)
        .context("Failed to get rent for pool record")?;

    log::debug!(
        "Pool {} sol_account {} (nonce {}) pool_signer {} (nonce {})",
        addrs.pool,
        addrs.sol_account,
        addrs.sol_account_nonce,
        addrs.pool_signer,
        addrs.pool_signer_nonce
    );

    let instructions = [
        create_associated_token_account_idempotent(
            &authority.pubkey(),
            &addrs.pool_signer,
            move_mint,
            &spl_token::id(),
        ),
        instruction::allocate_pool(&config.program_id, &authority.pubkey(), &addrs.pool, rent),
        instruction::create_pool(&config.program_id, &addrs, &authority.pubkey(), move_mint),
    ];

    client::send_and_confirm_with(config, &instructions, authority, &[&pool_keypair]).await?;
    Ok(addrs)
}

pub async fn deposit_sol_with(
    config: &NetworkConfig,
    wallet: &Keypair,
    pool: &LivePool,
    lamports: u64,
) -> Result<Signature> {
    let ix = instruction::deposit_native(
        &config.program_id,
        &pool.addrs.pool,
        &wallet.pubkey(),
        &pool.addrs.sol_account,
        lamports,
    );
    client::send_and_confirm_with(config, &[ix], wallet, &[]).await
}

/// The wallet's MOVE account, created first if missing
fn wallet_move_account(wallet: &Pubkey, move_mint: &Pubkey) -> (Pubkey, Instruction) {
    let create = create_associated_token_account_idempotent(wallet, wallet, move_mint, &spl_token::id());
    (get_associated_token_address(wallet, move_mint), create)
}

pub fn deposit_move_instructions(program_id: &Pubkey, wallet: &Pubkey, pool: &LivePool, amount: u64) -> Vec<Instruction> {
    let (from_move, create) = wallet_move_account(wallet, &pool.move_mint);
    vec![
        create,
        instruction::deposit_secondary(program_id, &pool.addrs, wallet, &from_move, amount),
    ]
}

/// Lamports are paid back to the wallet itself
pub fn swap_move_to_sol_instructions(program_id: &Pubkey, wallet: &Pubkey, pool: &LivePool, amount: u64) -> Vec<Instruction> {
    let (from_move, create) = wallet_move_account(wallet, &pool.move_mint);
    vec![
        create,
        instruction::swap_secondary_to_native(program_id, &pool.addrs, wallet, &from_move, wallet, amount),
    ]
}

/// MOVE lands in the wallet's associated token account
pub fn swap_sol_to_move_instructions(program_id: &Pubkey, wallet: &Pubkey, pool: &LivePool, lamports: u64) -> Vec<Instruction> {
    let (destination, create) = wallet_move_account(wallet, &pool.move_mint);
    vec![
        create,
        instruction::swap_native_to_secondary(program_id, &pool.addrs, wallet, &destination, lamports),
    ]
}

pub async fn deposit_move_with(
    config: &NetworkConfig,
    wallet: &Keypair,
    pool: &LivePool,
    amount: u64,
) -> Result<Signature> {
    let instructions = deposit_move_instructions(&config.program_id, &wallet.pubkey(), pool, amount);
    client::send_and_confirm_with(config, &instructions, wallet, &[]).await
}

pub async fn swap_move_to_sol_with(
    config: &NetworkConfig,
    wallet: &Keypair,
    pool: &LivePool,
    amount: u64,
) -> Result<Signature> {
    let instructions = swap_move_to_sol_instructions(&config.program_id, &wallet.pubkey(), pool, amount);
    client::send_and_confirm_with(config, &instructions, wallet, &[]).await
}

pub async fn swap_sol_to_move_with(
    config: &NetworkConfig,
    wallet: &Keypair,
    pool: &LivePool,
    lamports: u64,
) -> Result<Signature> {
    let instructions = swap_sol_to_move_instructions(&config.program_id, &wallet.pubkey(), pool, lamports);
    client::send_and_confirm_with(config, &instructions, wallet, &[]).await
}

pub async fn set_paused_with(
    config: &NetworkConfig,
    wallet: &Keypair,
    pool: &Pubkey,
    paused: bool,
) -> Result<Signature> {
    let ix = if paused {
        instruction::pause(&config.program_id, pool, &wallet.pubkey())
    } else {
        instruction::unpause(&config.program_id, pool, &wallet.pubkey())
    };
    client::send_and_confirm_with(config, &[ix], wallet, &[]).await
}

// ============================================================================
// CLI commands
// ============================================================================

pub async fn init_liquidity_pool(config: &mut NetworkConfig, mint: Option<String>) -> Result<()> {
    println!("{}", "=== Initialize Liquidity Pool ===".bright_green().bold());

    let move_mint = match mint {
        Some(mint) => parse_pubkey(&mint)?,
        None => config.move_mint,
    };

    println!("{} {}", "Program:".bright_cyan(), config.program_id);
    println!("{} {}", "MOVE mint:".bright_cyan(), move_mint);
    println!("{} {}", "Authority:".bright_cyan(), config.pubkey());

    let addrs = create_pool_with(config, &config.keypair, &move_mint).await?;

    println!("\n{} {}", "Pool:".bright_green(), addrs.pool);
    println!("{} {}", "SOL account:".bright_cyan(), addrs.sol_account);
    println!("{} {}", "MOVE account:".bright_cyan(), addrs.move_token_account);
    println!("{} {}", "Pool signer:".bright_cyan(), addrs.pool_signer);

    config.record_pool(&addrs.pool)?;
    println!(
        "{} {}",
        "Recorded as last_pool in".dimmed(),
        config.settings_path.display().to_string().dimmed()
    );
    Ok(())
}

pub async fn deposit_sol(config: &NetworkConfig, pool: Option<String>, amount: String) -> Result<()> {
    let pool = load_pool(config, &config.resolve_pool(pool)?)?;
    let lamports = parse_units(&amount, DECIMALS)?;

    println!("{} {} SOL into {}", "Depositing".bright_green(), amount, format_pubkey(&pool.addrs.pool));
    let before = pool.record.sol_reserve;
    let signature = deposit_sol_with(config, &config.keypair, &pool, lamports).await?;

    let after = client::fetch_pool(config, &pool.addrs.pool)?.sol_reserve;
    println!("{} {}", "Signature:".bright_cyan(), format_signature(&signature, &config.network));
    println!(
        "{} {} -> {} SOL",
        "SOL reserve:".bright_cyan(),
        format_units(before, DECIMALS),
        format_units(after, DECIMALS)
    );
    Ok(())
}

pub async fn deposit_move(config: &NetworkConfig, pool: Option<String>, amount: String) -> Result<()> {
    let pool = load_pool(config, &config.resolve_pool(pool)?)?;
    let amount_units = parse_units(&amount, DECIMALS)?;

    println!("{} {} MOVE into {}", "Depositing".bright_green(), amount, format_pubkey(&pool.addrs.pool));
    let before = pool.record.move_token_reserve;
    let signature = deposit_move_with(config, &config.keypair, &pool, amount_units).await?;

    let after = client::fetch_pool(config, &pool.addrs.pool)?.move_token_reserve;
    println!("{} {}", "Signature:".bright_cyan(), format_signature(&signature, &config.network));
    println!(
        "{} {} -> {} MOVE",
        "MOVE reserve:".bright_cyan(),
        format_units(before, DECIMALS),
        format_units(after, DECIMALS)
    );
    Ok(())
}

pub async fn swap_move_to_sol(config: &NetworkConfig, pool: Option<String>, amount: String) -> Result<()> {
    let pool = load_pool(config, &config.resolve_pool(pool)?)?;
    let amount_units = parse_units(&amount, DECIMALS)?;

    if amount_units % SWAP_RATIO != 0 {
        log::warn!("{} base units is not a multiple of {}; the program will reject it", amount_units, SWAP_RATIO);
    }

    println!(
        "{} {} MOVE for {} SOL",
        "Swapping".bright_green(),
        amount,
        format_units(amount_units / SWAP_RATIO, DECIMALS)
    );
    let signature = swap_move_to_sol_with(config, &config.keypair, &pool, amount_units).await?;
    println!("{} {}", "Signature:".bright_cyan(), format_signature(&signature, &config.network));
    Ok(())
}

pub async fn swap_sol_to_move(config: &NetworkConfig, pool: Option<String>, amount: String) -> Result<()> {
    let pool = load_pool(config, &config.resolve_pool(pool)?)?;
    let lamports = parse_units(&amount, DECIMALS)?;

    println!(
        "{} {} SOL for {} MOVE",
        "Swapping".bright_green(),
        amount,
        format_units(lamports.saturating_mul(SWAP_RATIO), DECIMALS)
    );
    let signature = swap_sol_to_move_with(config, &config.keypair, &pool, lamports).await?;
    println!("{} {}", "Signature:".bright_cyan(), format_signature(&signature, &config.network));
    Ok(())
}

pub async fn set_paused(config: &NetworkConfig, pool: Option<String>, paused: bool) -> Result<()> {
    let pool = config.resolve_pool(pool)?;
    let signature = set_paused_with(config, &config.keypair, &pool, paused).await?;

    let state = if paused { "paused".bright_red() } else { "active".bright_green() };
    println!("{} {} is now {}", "Pool".bright_cyan(), format_pubkey(&pool), state);
    println!("{} {}", "Signature:".bright_cyan(), format_signature(&signature, &config.network));
    Ok(())
}

pub async fn show_pool(config: &NetworkConfig, pool: Option<String>) -> Result<()> {
    let pool = load_pool(config, &config.resolve_pool(pool)?)?;
    let record = &pool.record;

    println!("{}", "=== Liquidity Pool ===".bright_green().bold());
    println!("{} {}", "Address:".bright_cyan(), pool.addrs.pool);
    println!("{} {}", "Authority:".bright_cyan(), Pubkey::new_from_array(record.authority));
    println!("{} {}", "MOVE mint:".bright_cyan(), pool.move_mint);
    println!("{} {}", "SOL account:".bright_cyan(), pool.addrs.sol_account);
    println!("{} {}", "MOVE account:".bright_cyan(), pool.addrs.move_token_account);
    println!(
        "{} {} SOL ({} lamports)",
        "SOL reserve:".bright_cyan(),
        format_units(record.sol_reserve, DECIMALS),
        record.sol_reserve
    );
    println!(
        "{} {} MOVE ({} base units)",
        "MOVE reserve:".bright_cyan(),
        format_units(record.move_token_reserve, DECIMALS),
        record.move_token_reserve
    );
    let status = if record.is_paused() { "paused".bright_red() } else { "active".bright_green() };
    println!("{} {}", "Status:".bright_cyan(), status);
    println!(
        "{} 1 SOL = {} MOVE",
        "Rate:".bright_cyan(),
        format_units(SWAP_RATIO * DECIMAL, DECIMALS)
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live_pool() -> (Pubkey, LivePool) {
        let program_id = Pubkey::new_unique();
        let move_mint = Pubkey::new_unique();
        let addrs = PoolAddresses::derive(&program_id, &Pubkey::new_unique(), &move_mint);
        let pool = LivePool {
            addrs,
            move_mint,
            record: LiquidityPool::default(),
        };
        (program_id, pool)
    }

    #[test]
    fn test_move_source_account_created_first() {
        let (program_id, pool) = live_pool();
        let wallet = Pubkey::new_unique();
        let wallet_move = get_associated_token_address(&wallet, &pool.move_mint);

        for instructions in [
            deposit_move_instructions(&program_id, &wallet, &pool, DECIMAL),
            swap_move_to_sol_instructions(&program_id, &wallet, &pool, DECIMAL),
            swap_sol_to_move_instructions(&program_id, &wallet, &pool, 1),
        ] {
            assert_eq!(instructions.len(), 2);
            assert_eq!(instructions[0].program_id, spl_associated_token_account::id());
            assert_eq!(instructions[0].accounts[1].pubkey, wallet_move);
            assert_eq!(instructions[1].program_id, program_id);
            assert!(instructions[1].accounts.iter().any(|meta| meta.pubkey == wallet_move));
        }
    }

    #[test]
    fn test_move_to_sol_pays_wallet() {
        let (program_id, pool) = live_pool();
        let wallet = Pubkey::new_unique();
        let instructions = swap_move_to_sol_instructions(&program_id, &wallet, &pool, 10);

        // destination sits at index 5
        assert_eq!(instructions[1].accounts[5].pubkey, wallet);
    }
}
