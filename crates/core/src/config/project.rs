//! Deployment configuration assembly.
//!
//! Single entry point for building the config the deployment tool runs
//! against: the built-in network table bound to the process environment,
//! or a TOML file with `${VAR}` expansion.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{CompilerSettings, NetworkProfile};

/// RPC endpoint for the primary network target.
pub const API_URL_VAR: &str = "API_URL";
/// Hex-encoded signing key for the primary network target.
pub const PRIVATE_KEY_VAR: &str = "PRIVATE_KEY";

/// BSC testnet public endpoint.
const BSC_TESTNET_URL: &str = "https://data-seed-prebsc-1-s1.binance.org:8545";
const BSC_TESTNET_CHAIN_ID: u64 = 97;

/// Full deployment configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployConfig {
    /// Network used when no override is given.
    pub default_network: String,
    /// Compiler settings, forwarded opaquely to the external toolchain.
    #[serde(default)]
    pub solidity: CompilerSettings,
    /// Named network profiles.
    #[serde(default)]
    pub networks: BTreeMap<String, NetworkProfile>,
}

impl DeployConfig {
    /// Built-in network table with injected credentials.
    ///
    /// Absent values leave the corresponding profile without an endpoint or
    /// accounts. That is not an error here; it surfaces later, when the
    /// deploy resolves its signer.
    pub fn builtin(api_url: Option<String>, private_key: Option<String>) -> Self {
        let mut networks = BTreeMap::new();
        networks.insert("hardhat".to_string(), NetworkProfile::empty());
        networks.insert(
            "ropsten".to_string(),
            NetworkProfile {
                url: api_url,
                chain_id: None,
                accounts: private_key.as_deref().map(prefixed_key).into_iter().collect(),
            },
        );
        networks.insert(
            "bsc_testnet".to_string(),
            NetworkProfile {
                url: Some(BSC_TESTNET_URL.to_string()),
                chain_id: Some(BSC_TESTNET_CHAIN_ID),
                accounts: private_key.into_iter().collect(),
            },
        );

        Self {
            default_network: "ropsten".to_string(),
            solidity: CompilerSettings::default(),
            networks,
        }
    }

    /// Built-in table bound to the process environment.
    pub fn from_env() -> Self {
        Self::builtin(env_var(API_URL_VAR), env_var(PRIVATE_KEY_VAR))
    }

    /// Load config from a TOML file, then expand `${VAR}` bindings.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config: DeployConfig = toml::from_str(&content)?;
        config.expand_env_vars();
        Ok(config)
    }

    /// Profile for a named network.
    pub fn network(&self, name: &str) -> Option<&NetworkProfile> {
        self.networks.get(name)
    }

    /// Expand `${VAR_NAME}` patterns in endpoint URLs and account entries.
    ///
    /// An account entry whose variable does not resolve is dropped, so a
    /// missing credential leaves the profile without a signer instead of
    /// carrying a literal placeholder.
    pub fn expand_env_vars(&mut self) {
        for profile in self.networks.values_mut() {
            if let Some(ref mut url) = profile.url {
                *url = expand_env(url);
            }
            profile.accounts = profile
                .accounts
                .iter()
                .map(|account| expand_env(account))
                .filter(|account| !account.contains("${"))
                .collect();
        }
    }

    /// Log the resolved configuration at startup.
    pub fn log_summary(&self) {
        info!(
            default_network = %self.default_network,
            networks = self.networks.len(),
            solidity = %self.solidity.version,
            optimizer_enabled = self.solidity.optimizer.enabled,
            optimizer_runs = self.solidity.optimizer.runs,
            "Deployment configuration loaded"
        );
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

/// Normalize a raw key to the `0x`-prefixed form.
fn prefixed_key(key: &str) -> String {
    if key.starts_with("0x") {
        key.to_string()
    } else {
        format!("0x{key}")
    }
}

/// Expand `${VAR_NAME}` patterns with environment variable values.
fn expand_env(s: &str) -> String {
    let mut result = s.to_string();
    let re = regex_lite::Regex::new(r"\$\{([^}]+)\}").unwrap();

    for cap in re.captures_iter(s) {
        if let (Some(full_match), Some(var_match)) = (cap.get(0), cap.get(1)) {
            if let Ok(value) = std::env::var(var_match.as_str()) {
                result = result.replace(full_match.as_str(), &value);
            }
        }
    }

    result
}
