//! Deployment target resolution.
//!
//! Turns the active network profile into a concrete endpoint plus signing
//! identity. Resolution is lazy: configuration gaps only surface here,
//! when a deploy actually needs the credentials.

use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::providers::{Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use tracing::{debug, info};

use deployer_core::DeployConfig;

use crate::error::DeployError;

/// Resolved endpoint and signing identity for one deployment.
pub struct DeployTarget {
    /// Network name the target was resolved from.
    pub network: String,
    /// RPC endpoint URL.
    pub rpc_url: String,
    /// Chain id pinned by the profile, if any.
    pub chain_id: Option<u64>,
    /// Signer address.
    pub address: Address,
    /// Wallet used to sign the deployment transaction.
    wallet: EthereumWallet,
}

impl DeployTarget {
    /// Resolve the configured default network into a deploy target.
    pub fn resolve(config: &DeployConfig) -> Result<Self, DeployError> {
        let network = config.default_network.clone();
        let profile = config
            .network(&network)
            .ok_or_else(|| DeployError::UnknownNetwork(network.clone()))?;

        let rpc_url = profile
            .url
            .clone()
            .ok_or_else(|| DeployError::MissingEndpoint(network.clone()))?;

        let raw_key = profile
            .signing_key()
            .ok_or_else(|| DeployError::NoSigner(network.clone()))?;

        // Accounts entries are hex private keys, with or without 0x prefix.
        let key = raw_key.trim_start_matches("0x");
        hex::decode(key).map_err(|e| DeployError::InvalidKey {
            network: network.clone(),
            reason: e.to_string(),
        })?;
        let signer: PrivateKeySigner = key.parse().map_err(|e| DeployError::InvalidKey {
            network: network.clone(),
            reason: format!("{e}"),
        })?;

        let address = signer.address();
        let wallet = EthereumWallet::from(signer);

        info!(network = %network, signer = %address, "Deployment target resolved");

        Ok(Self {
            network,
            rpc_url,
            chain_id: profile.chain_id,
            address,
            wallet,
        })
    }

    /// Wallet for signing transactions against this target.
    pub fn wallet(&self) -> EthereumWallet {
        self.wallet.clone()
    }

    /// Verify the endpoint is reachable and on the expected chain.
    ///
    /// Returns the chain id the node reports. When the profile pins a
    /// chain id, a disagreeing node is an error before anything is signed.
    pub async fn verify_endpoint(&self) -> Result<u64, DeployError> {
        let url = self.rpc_url.parse().map_err(|e| DeployError::InvalidEndpoint {
            url: self.rpc_url.clone(),
            reason: format!("{e}"),
        })?;
        let provider = ProviderBuilder::new().on_http(url);
        let actual = provider.get_chain_id().await?;

        if let Some(expected) = self.chain_id {
            if expected != actual {
                return Err(DeployError::ChainIdMismatch {
                    network: self.network.clone(),
                    expected,
                    actual,
                });
            }
        }

        debug!(network = %self.network, chain_id = actual, "Endpoint verified");
        Ok(actual)
    }
}

impl std::fmt::Debug for DeployTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeployTarget")
            .field("network", &self.network)
            .field("rpc_url", &self.rpc_url)
            .field("chain_id", &self.chain_id)
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}
