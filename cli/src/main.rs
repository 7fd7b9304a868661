//! solana-swap CLI - drive the fixed-ratio SOL/MOVE pool
//!
//! Creates pools, deposits liquidity, swaps in both directions and toggles
//! the pause switch on a deployed program, and runs the end-to-end suite
//! either against a cluster or the in-process registry.

use clap::{Parser, Subcommand};
use colored::Colorize;
use solana_sdk::pubkey::Pubkey;
use std::path::PathBuf;

mod client;
mod config;
mod error;
mod instruction;
mod local;
mod pda;
mod pool;
mod simulate;

use config::NetworkConfig;

#[derive(Parser)]
#[command(name = "solana-swap")]
#[command(about = "Fixed-ratio SOL/MOVE liquidity pool CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Network to connect to (localnet, devnet, testnet, mainnet-beta, config)
    #[arg(short, long, default_value = "devnet")]
    network: String,

    /// RPC URL (overrides network default)
    #[arg(short, long)]
    url: Option<String>,

    /// Path to keypair file (falls back to $SOLANA_SWAP_WALLET, then the Solana CLI keypair)
    #[arg(short, long, env = config::WALLET_ENV)]
    keypair: Option<PathBuf>,

    /// Settings file holding program_id, move_mint and last_pool
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a pool owned by the configured wallet
    InitLiquidityPool {
        /// MOVE mint (defaults to the settings file, then the built-in mint)
        #[arg(short, long)]
        mint: Option<String>,
    },

    /// Deposit SOL into the native reserve
    DepositSol {
        /// Pool address (defaults to last_pool)
        #[arg(short, long)]
        pool: Option<String>,

        /// Amount in SOL
        #[arg(short, long)]
        amount: String,
    },

    /// Deposit MOVE into the secondary reserve
    DepositMove {
        /// Pool address (defaults to last_pool)
        #[arg(short, long)]
        pool: Option<String>,

        /// Amount in MOVE
        #[arg(short, long)]
        amount: String,
    },

    /// Pay MOVE, receive SOL (10 MOVE = 1 SOL)
    SwapMoveToSol {
        /// Pool address (defaults to last_pool)
        #[arg(short, long)]
        pool: Option<String>,

        /// Amount in MOVE
        #[arg(short, long)]
        amount: String,
    },

    /// Pay SOL, receive MOVE (1 SOL = 10 MOVE)
    SwapSolToMove {
        /// Pool address (defaults to last_pool)
        #[arg(short, long)]
        pool: Option<String>,

        /// Amount in SOL
        #[arg(short, long)]
        amount: String,
    },

    /// Halt swaps (pool authority only)
    Pause {
        #[arg(short, long)]
        pool: Option<String>,
    },

    /// Resume swaps (pool authority only)
    Unpause {
        #[arg(short, long)]
        pool: Option<String>,
    },

    /// Show pool reserves and status
    Show {
        #[arg(short, long)]
        pool: Option<String>,
    },

    /// Run the end-to-end suite against the cluster
    Test,

    /// Run the end-to-end scenario in-process, without a cluster
    Simulate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // No wallet or RPC needed
    if let Commands::Simulate = cli.command {
        let move_mint = config::parse_pubkey(config::DEFAULT_MOVE_MINT)?;
        return simulate::run_simulation(Pubkey::new_from_array(solana_swap::ID), move_mint);
    }

    // Initialize network configuration
    let mut config = NetworkConfig::new(
        &cli.network,
        cli.url.clone(),
        cli.keypair.clone(),
        cli.config.clone(),
    )?;

    if cli.verbose {
        println!("{} {}", "Network:".bright_cyan(), config.network);
        println!("{} {}", "RPC URL:".bright_cyan(), config.rpc_url);
        println!("{} {}", "Keypair:".bright_cyan(), config.keypair_path.display());
        println!("{} {}", "Program:".bright_cyan(), config.program_id);
        println!("{} {}", "Settings:".bright_cyan(), config.settings_path.display());
    }

    // Execute command
    match cli.command {
        Commands::InitLiquidityPool { mint } => {
            pool::init_liquidity_pool(&mut config, mint).await?;
        }
        Commands::DepositSol { pool, amount } => {
            pool::deposit_sol(&config, pool, amount).await?;
        }
        Commands::DepositMove { pool, amount } => {
            pool::deposit_move(&config, pool, amount).await?;
        }
        Commands::SwapMoveToSol { pool, amount } => {
            pool::swap_move_to_sol(&config, pool, amount).await?;
        }
        Commands::SwapSolToMove { pool, amount } => {
            pool::swap_sol_to_move(&config, pool, amount).await?;
        }
        Commands::Pause { pool } => {
            pool::set_paused(&config, pool, true).await?;
        }
        Commands::Unpause { pool } => {
            pool::set_paused(&config, pool, false).await?;
        }
        Commands::Show { pool } => {
            pool::show_pool(&config, pool).await?;
        }
        Commands::Test => {
            tests::run_e2e_tests(&config).await?;
        }
        // Handled before network setup
        Commands::Simulate => {}
    }

    Ok(())
}

#[cfg(test)]
mod cli_tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_swap_command() {
        let cli = Cli::try_parse_from([
            "solana-swap",
            "--network",
            "localnet",
            "swap-move-to-sol",
            "--pool",
            "11111111111111111111111111111111",
            "--amount",
            "1",
        ])
        .unwrap();

        assert_eq!(cli.network, "localnet");
        match cli.command {
            Commands::SwapMoveToSol { pool, amount } => {
                assert_eq!(pool.as_deref(), Some("11111111111111111111111111111111"));
                assert_eq!(amount, "1");
            }
            _ => panic!("wrong command"),
        }
    }

    #[test]
    fn test_keypair_reads_wallet_env() {
        let cmd = Cli::command();
        let keypair = cmd
            .get_arguments()
            .find(|arg| arg.get_id() == "keypair")
            .unwrap();
        assert_eq!(keypair.get_env(), Some(std::ffi::OsStr::new(config::WALLET_ENV)));
    }
}
