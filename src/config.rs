//! Node configuration
//!
//! The node reads a JSON file using its historical field names:
//!
//! ```json
//! {
//!   "NodeUrl": "http://localhost:26657",
//!   "GHNodeURL": "http://localhost:2500",
//!   "Timeout": 10,
//!   "NebulaId": "...",
//!   "ChainType": "ethereum",
//!   "NebulaContract": "0x..."
//! }
//! ```
//!
//! `ChainType` is required; everything else falls back to empty/zero.

use eyre::{eyre, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::time::Duration;

use crate::chain::ChainType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "NodeUrl", alias = "node_url", default)]
    pub node_url: String,
    #[serde(rename = "GHNodeURL", alias = "gh_node_url", default)]
    pub gh_node_url: String,
    /// Request timeout in seconds
    #[serde(rename = "Timeout", alias = "timeout", default)]
    pub timeout: u64,
    #[serde(rename = "NebulaId", alias = "nebula_id", default)]
    pub nebula_id: String,
    #[serde(rename = "ChainType", alias = "chain_type")]
    pub chain_type: ChainType,
    #[serde(rename = "NebulaContract", alias = "nebula_contract", default)]
    pub nebula_contract: String,
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = serde_json::from_str(&raw)
            .wrap_err_with(|| format!("Failed to parse config file {}", path.display()))?;

        tracing::debug!(
            path = %path.display(),
            chain_type = %config.chain_type,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Load from a JSON file, then apply overrides from `.env` and the environment
    pub fn load_with_env(path: impl AsRef<Path>) -> Result<Self> {
        if let Ok(env_path) = dotenvy::dotenv() {
            tracing::debug!("Loaded .env from {:?}", env_path);
        }

        let mut config = Self::load(path)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Override fields from environment variables that are set
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(v) = env::var("NODE_URL") {
            self.node_url = v;
        }
        if let Ok(v) = env::var("GH_NODE_URL") {
            self.gh_node_url = v;
        }
        if let Ok(v) = env::var("TIMEOUT") {
            self.timeout = v
                .trim()
                .parse()
                .map_err(|_| eyre!("TIMEOUT must be a whole number of seconds, got {:?}", v))?;
        }
        if let Ok(v) = env::var("NEBULA_ID") {
            self.nebula_id = v;
        }
        if let Ok(v) = env::var("CHAIN_TYPE") {
            self.chain_type = v.parse().wrap_err("Invalid CHAIN_TYPE")?;
        }
        if let Ok(v) = env::var("NEBULA_CONTRACT") {
            self.nebula_contract = v;
        }
        Ok(())
    }

    /// Timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    const OVERRIDE_VARS: [&str; 6] = [
        "NODE_URL",
        "GH_NODE_URL",
        "TIMEOUT",
        "NEBULA_ID",
        "CHAIN_TYPE",
        "NEBULA_CONTRACT",
    ];

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn clear_overrides() {
        for var in OVERRIDE_VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_node_field_names() {
        let file = write_config(
            r#"{
                "NodeUrl": "http://localhost:26657",
                "GHNodeURL": "http://localhost:2500",
                "Timeout": 10,
                "NebulaId": "nebula-1",
                "ChainType": "Waves",
                "NebulaContract": "3MxSb7oiUV4DCCPyBh3mwBYdkLanVzCuuzu"
            }"#,
        );

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.node_url, "http://localhost:26657");
        assert_eq!(config.gh_node_url, "http://localhost:2500");
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.nebula_id, "nebula-1");
        assert_eq!(config.chain_type, ChainType::Waves);
        assert_eq!(config.nebula_contract, "3MxSb7oiUV4DCCPyBh3mwBYdkLanVzCuuzu");
    }

    #[test]
    fn test_load_snake_case_and_defaults() {
        let file = write_config(r#"{ "node_url": "http://node", "chain_type": "polygon" }"#);

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.node_url, "http://node");
        assert_eq!(config.chain_type, ChainType::Polygon);
        assert_eq!(config.timeout, 0);
        assert!(config.nebula_contract.is_empty());
    }

    #[test]
    fn test_unknown_chain_rejected() {
        let file = write_config(r#"{ "ChainType": "tron" }"#);
        let err = Config::load(file.path()).unwrap_err();
        assert!(format!("{:?}", err).contains("Unsupported chain"));
    }

    #[test]
    fn test_missing_chain_rejected() {
        let file = write_config(r#"{ "NodeUrl": "http://node" }"#);
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load("/nonexistent/oracle-keys/config.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_overrides();
        let file = write_config(r#"{ "NodeUrl": "http://file", "ChainType": "ethereum", "Timeout": 5 }"#);

        env::set_var("NODE_URL", "http://env");
        env::set_var("TIMEOUT", "30");
        env::set_var("CHAIN_TYPE", "solana");

        let mut config = Config::load(file.path()).unwrap();
        config.apply_env_overrides().unwrap();
        clear_overrides();

        assert_eq!(config.node_url, "http://env");
        assert_eq!(config.timeout, 30);
        assert_eq!(config.chain_type, ChainType::Solana);
    }

    #[test]
    #[serial]
    fn test_env_override_invalid_values() {
        clear_overrides();
        let file = write_config(r#"{ "ChainType": "ethereum" }"#);
        let mut config = Config::load(file.path()).unwrap();

        env::set_var("TIMEOUT", "ten");
        assert!(config.apply_env_overrides().is_err());
        env::remove_var("TIMEOUT");

        env::set_var("CHAIN_TYPE", "bitcoin");
        assert!(config.apply_env_overrides().is_err());
        clear_overrides();
    }
}
