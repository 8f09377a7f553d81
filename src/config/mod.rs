use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Default Etherscan-compatible gas oracle endpoint
pub const DEFAULT_GAS_ORACLE_URL: &str = "https://api.etherscan.io/api";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub environment: String,
    pub port: u16,
    /// Server-side timeout applied to every inbound request, in seconds
    pub request_timeout: u64,
    pub gas_oracle: GasOracleConfig,
}

/// Upstream gas oracle settings, established once at startup.
///
/// Handed by reference into the oracle client; nothing reads the process
/// environment after `Config::from_env` returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GasOracleConfig {
    pub base_url: String,
    pub api_key: String,
    /// Where the upstream expects the credential (query parameter or header)
    pub credential: CredentialPlacement,
    /// Outbound request timeout, in seconds
    pub timeout_secs: u64,
}

/// Credential placement is upstream-specific: Etherscan takes an `apikey`
/// query parameter, other oracles expect a header such as `OK-ACCESS-KEY`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CredentialPlacement {
    QueryParam { name: String },
    Header { name: String },
}

impl GasOracleConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let gas_oracle = GasOracleConfig {
            base_url: env::var("GAS_ORACLE_URL")
                .unwrap_or_else(|_| DEFAULT_GAS_ORACLE_URL.to_string()),
            api_key: env::var("ETHERSCAN_API_KEY").map_err(|_| {
                anyhow::anyhow!("ETHERSCAN_API_KEY environment variable is required")
            })?,
            credential: match env::var("GAS_ORACLE_API_KEY_HEADER") {
                Ok(name) => CredentialPlacement::Header { name },
                Err(_) => CredentialPlacement::QueryParam {
                    name: env::var("GAS_ORACLE_API_KEY_PARAM")
                        .unwrap_or_else(|_| "apikey".to_string()),
                },
            },
            timeout_secs: env::var("GAS_ORACLE_TIMEOUT")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
        };

        let config = Config {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse()?,
            request_timeout: env::var("REQUEST_TIMEOUT")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
            gas_oracle,
        };

        config.validate()?;
        Ok(config)
    }

    /// Fail-fast checks, run once at startup
    fn validate(&self) -> Result<()> {
        if self.gas_oracle.api_key.trim().is_empty() {
            anyhow::bail!("ETHERSCAN_API_KEY must not be empty");
        }
        if !self.gas_oracle.base_url.starts_with("http://")
            && !self.gas_oracle.base_url.starts_with("https://")
        {
            anyhow::bail!(
                "GAS_ORACLE_URL must be an absolute http(s) URL, got {}",
                self.gas_oracle.base_url
            );
        }
        if self.gas_oracle.timeout_secs == 0 {
            anyhow::bail!("GAS_ORACLE_TIMEOUT must be at least 1 second");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            environment: "test".to_string(),
            port: 3001,
            request_timeout: 30,
            gas_oracle: GasOracleConfig {
                base_url: DEFAULT_GAS_ORACLE_URL.to_string(),
                api_key: "test-key".to_string(),
                credential: CredentialPlacement::QueryParam {
                    name: "apikey".to_string(),
                },
                timeout_secs: 10,
            },
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn empty_api_key_is_rejected() {
        let mut config = base_config();
        config.gas_oracle.api_key = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn relative_oracle_url_is_rejected() {
        let mut config = base_config();
        config.gas_oracle.base_url = "api.etherscan.io/api".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = base_config();
        config.gas_oracle.timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
