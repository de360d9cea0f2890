//! Oracle key conversion CLI
//!
//! - oracle-keys pubkey --chain waves <base58>        -> canonical hex
//! - oracle-keys pubkey-text --chain waves <0x...>    -> native text
//! - oracle-keys privkey --chain ethereum <0x...>     -> decoded length only
//! - oracle-keys validator <hex>                      -> normalised hex
//! - oracle-keys config <path>                        -> parsed config
//! - oracle-keys chains                               -> supported chains

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use oracle_keys::{decode_private_key, CanonicalPublicKey, ChainType, Config, ValidatorPublicKey};

#[derive(Parser)]
#[command(name = "oracle-keys")]
#[command(about = "Convert oracle keys between chain-native and canonical form", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Native public key text to canonical hex
    Pubkey {
        /// Chain the key belongs to (e.g. ethereum, waves, solana)
        #[arg(short, long)]
        chain: ChainType,

        /// Native public key text
        key: String,
    },

    /// Canonical hex back to native public key text
    PubkeyText {
        /// Chain the key belongs to
        #[arg(short, long)]
        chain: ChainType,

        /// Canonical key as 0x-prefixed hex (33 bytes)
        canonical: String,
    },

    /// Check that a private key decodes; prints only its length
    Privkey {
        /// Chain the key belongs to
        #[arg(short, long)]
        chain: ChainType,

        /// Private key text (hex, seed phrase or base58 depending on chain)
        key: String,
    },

    /// Decode a validator public key
    Validator {
        /// Hex public key, with or without 0x
        key: String,
    },

    /// Load a node config file (environment overrides applied)
    Config {
        /// Path to the JSON config file
        path: PathBuf,
    },

    /// List supported chains
    Chains,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Pubkey { chain, key } => {
            let canonical = CanonicalPublicKey::from_text(&key, chain)
                .wrap_err_with(|| format!("Failed to decode {} public key", chain))?;
            tracing::debug!(chain = %chain, group = %chain.group(), "Decoded public key");
            println!("{}", canonical);
        }
        Commands::PubkeyText { chain, canonical } => {
            let key: CanonicalPublicKey = canonical
                .parse()
                .wrap_err("Canonical key must be 0x-prefixed hex of 33 bytes")?;
            println!("{}", key.to_text(chain));
        }
        Commands::Privkey { chain, key } => {
            let raw = decode_private_key(&key, chain)
                .wrap_err_with(|| format!("Failed to decode {} private key", chain))?;
            tracing::info!(chain = %chain, len = raw.len(), "Private key decoded");
            println!("ok: {} bytes", raw.len());
        }
        Commands::Validator { key } => {
            let key = ValidatorPublicKey::from_hex(&key)?;
            println!("{}", key);
        }
        Commands::Config { path } => {
            let config = Config::load_with_env(&path)?;
            tracing::info!(chain_type = %config.chain_type, "Configuration loaded");
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Commands::Chains => {
            for chain in ChainType::ALL {
                println!(
                    "{:<10} {:<7} {} bytes",
                    chain.as_str(),
                    chain.group().as_str(),
                    chain.group().native_public_key_len()
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_every_argument_is_documented() {
        let cli = Cli::command();
        for sub in cli.get_subcommands() {
            for arg in sub.get_arguments() {
                if arg.get_id() == "verbose" || arg.get_id() == "help" {
                    continue;
                }
                assert!(
                    arg.get_help().is_some(),
                    "{} {} has no help text",
                    sub.get_name(),
                    arg.get_id()
                );
            }
        }
    }

    #[test]
    fn test_parse_privkey_and_config() {
        let cli = Cli::try_parse_from(["oracle-keys", "privkey", "--chain", "waves", "some seed"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Privkey {
                chain: ChainType::Waves,
                ..
            }
        ));

        let cli = Cli::try_parse_from(["oracle-keys", "config", "node.json"]).unwrap();
        match cli.command {
            Commands::Config { path } => assert_eq!(path, PathBuf::from("node.json")),
            _ => panic!("expected config command"),
        }

        assert!(Cli::try_parse_from(["oracle-keys", "pubkey", "--chain", "tron", "x"]).is_err());
    }
}
