//! Network configuration, keypair management and the local settings file

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Wallet path override, checked after `--keypair`
pub const WALLET_ENV: &str = "SOLANA_SWAP_WALLET";

/// Default settings file, relative to the home directory
pub const DEFAULT_SETTINGS_PATH: &str = "~/.config/solana-swap/config.toml";

/// MOVE mint used when neither the settings file nor `--mint` names one
pub const DEFAULT_MOVE_MINT: &str = "sy4LXfLXTmMQUCUVjaNf59Kc274NWKXZPjCzMPhM1je";

/// Persisted between runs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapSettings {
    /// Deployed swap program (defaults to the compiled-in id)
    pub program_id: Option<String>,
    /// MOVE mint pools are created for
    pub move_mint: Option<String>,
    /// Pool created by the most recent `init-liquidity-pool`
    pub last_pool: Option<String>,
}

impl SwapSettings {
    /// Missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
        toml::from_str(&data)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let data = toml::to_string_pretty(self).context("Failed to serialize settings")?;
        fs::write(path, data)
            .with_context(|| format!("Failed to write settings file: {}", path.display()))
    }
}

pub struct NetworkConfig {
    pub network: String,
    pub rpc_url: String,
    pub keypair: Keypair,
    pub keypair_path: PathBuf,
    pub program_id: Pubkey,
    pub move_mint: Pubkey,
    pub settings: SwapSettings,
    pub settings_path: PathBuf,
}

impl NetworkConfig {
    pub fn new(
        network: &str,
        rpc_url: Option<String>,
        keypair_path: Option<PathBuf>,
        settings_path: Option<PathBuf>,
    ) -> Result<Self> {
        let cli_config = load_solana_cli_config();

        let rpc_url = match rpc_url {
            Some(url) => url,
            None => network_url(network, &cli_config.json_rpc_url)?,
        };

        let keypair_path = resolve_keypair_path(keypair_path, &cli_config.keypair_path);
        let keypair = load_keypair(&keypair_path)?;

        let settings_path = match settings_path {
            Some(path) => path,
            None => expand_path(DEFAULT_SETTINGS_PATH),
        };
        let settings = SwapSettings::load(&settings_path)?;

        let program_id = match &settings.program_id {
            Some(id) => parse_pubkey(id).context("Invalid program_id in settings")?,
            None => Pubkey::new_from_array(solana_swap::ID),
        };
        let move_mint = parse_pubkey(settings.move_mint.as_deref().unwrap_or(DEFAULT_MOVE_MINT))
            .context("Invalid move_mint in settings")?;

        Ok(Self {
            network: network.to_string(),
            rpc_url,
            keypair,
            keypair_path,
            program_id,
            move_mint,
            settings,
            settings_path,
        })
    }

    pub fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    /// Remember the most recently created pool
    pub fn record_pool(&mut self, pool: &Pubkey) -> Result<()> {
        self.settings.last_pool = Some(pool.to_string());
        self.settings.save(&self.settings_path)
    }

    /// Explicit `--pool`, else the last pool recorded in the settings file
    pub fn resolve_pool(&self, pool: Option<String>) -> Result<Pubkey> {
        let pool = pool
            .or_else(|| self.settings.last_pool.clone())
            .context("No pool given and no last_pool recorded; pass --pool")?;
        parse_pubkey(&pool)
    }
}

/// RPC endpoint for a named cluster; `config` uses the Solana CLI setting
pub fn network_url(network: &str, cli_config_url: &str) -> Result<String> {
    let url = match network {
        "localnet" | "local" => "http://127.0.0.1:8899",
        "devnet" => "https://api.devnet.solana.com",
        "testnet" => "https://api.testnet.solana.com",
        "mainnet-beta" | "mainnet" => "https://api.mainnet-beta.solana.com",
        "config" => cli_config_url,
        _ => anyhow::bail!(
            "Unknown network: {}. Use localnet, devnet, testnet, mainnet-beta or config",
            network
        ),
    };
    Ok(url.to_string())
}

/// `--keypair` (or `$SOLANA_SWAP_WALLET`, read by clap), else the Solana CLI keypair
pub fn resolve_keypair_path(flag: Option<PathBuf>, cli_config_keypair: &str) -> PathBuf {
    match flag.filter(|path| !path.as_os_str().is_empty()) {
        Some(path) => expand_path(&path.to_string_lossy()),
        None => expand_path(cli_config_keypair),
    }
}

pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

pub fn parse_pubkey(value: &str) -> Result<Pubkey> {
    Pubkey::from_str(value).with_context(|| format!("Invalid address: {}", value))
}

fn load_solana_cli_config() -> solana_cli_config::Config {
    solana_cli_config::CONFIG_FILE
        .as_ref()
        .and_then(|path| solana_cli_config::Config::load(path).ok())
        .unwrap_or_default()
}

/// Load a keypair from a JSON file
pub fn load_keypair(path: &Path) -> Result<Keypair> {
    if !path.exists() {
        anyhow::bail!(
            "Keypair file not found: {}\n\
             Create one with: solana-keygen new --outfile {}",
            path.display(),
            path.display()
        );
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read keypair file: {}", path.display()))?;

    let bytes: Vec<u8> = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse keypair JSON: {}", path.display()))?;

    Keypair::from_bytes(&bytes)
        .with_context(|| format!("Invalid keypair data in: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_urls() {
        assert_eq!(
            network_url("devnet", "").unwrap(),
            "https://api.devnet.solana.com"
        );
        assert_eq!(network_url("local", "").unwrap(), "http://127.0.0.1:8899");
        assert_eq!(
            network_url("config", "http://example:8899").unwrap(),
            "http://example:8899"
        );
        assert!(network_url("moonnet", "").is_err());
    }

    #[test]
    fn test_keypair_precedence() {
        assert_eq!(
            resolve_keypair_path(Some(PathBuf::from("/flag.json")), "/cli.json"),
            PathBuf::from("/flag.json")
        );
        assert_eq!(resolve_keypair_path(None, "/cli.json"), PathBuf::from("/cli.json"));
        assert_eq!(
            resolve_keypair_path(Some(PathBuf::new()), "/cli.json"),
            PathBuf::from("/cli.json")
        );
    }

    #[test]
    fn test_settings_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        assert_eq!(SwapSettings::load(&path).unwrap(), SwapSettings::default());

        let settings = SwapSettings {
            program_id: None,
            move_mint: Some(DEFAULT_MOVE_MINT.to_string()),
            last_pool: Some(Pubkey::new_unique().to_string()),
        };
        settings.save(&path).unwrap();
        assert_eq!(SwapSettings::load(&path).unwrap(), settings);
    }

    #[test]
    fn test_malformed_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "last_pool = [").unwrap();
        assert!(SwapSettings::load(&path).is_err());
    }

    #[test]
    fn test_load_keypair() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("id.json");
        let keypair = Keypair::new();
        fs::write(&path, serde_json::to_string(&keypair.to_bytes().to_vec()).unwrap()).unwrap();

        assert_eq!(load_keypair(&path).unwrap().pubkey(), keypair.pubkey());

        let missing = load_keypair(&dir.path().join("missing.json"));
        assert!(missing.unwrap_err().to_string().contains("Keypair file not found"));
    }
}
