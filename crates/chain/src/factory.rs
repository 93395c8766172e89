//! Contract factory abstraction and its on-chain implementation.
//!
//! The deployment flow only sees `DeployBackend` and `ContractFactory`;
//! the EVM-backed implementation resolves credentials and artifacts
//! lazily, builds the creation transaction, and waits for the receipt.

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, B256};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use async_trait::async_trait;
use tracing::{debug, info};

use deployer_core::DeployConfig;

use crate::artifact::{ArtifactStore, ContractArtifact};
use crate::error::DeployError;
use crate::target::DeployTarget;

/// Confirmed deployment record.
#[derive(Debug, Clone)]
pub struct DeployedContract {
    /// Address the contract was created at.
    pub address: Address,
    /// Hash of the deployment transaction.
    pub transaction_hash: B256,
    /// Block the deployment was included in.
    pub block_number: Option<u64>,
}

/// Resolves contract factories by name against the active network.
#[async_trait]
pub trait DeployBackend: Send + Sync {
    async fn get_factory(&self, name: &str) -> Result<Box<dyn ContractFactory>, DeployError>;
}

/// Knows how to deploy one compiled contract.
#[async_trait]
pub trait ContractFactory: Send + Sync + std::fmt::Debug {
    /// Name of the contract this factory deploys.
    fn contract_name(&self) -> &str;

    /// Submit the deployment transaction and wait for confirmation.
    async fn deploy(&self) -> Result<DeployedContract, DeployError>;
}

/// Backend deploying through a JSON-RPC node.
pub struct EvmBackend {
    config: DeployConfig,
    artifacts: ArtifactStore,
}

impl EvmBackend {
    pub fn new(config: DeployConfig, artifacts: ArtifactStore) -> Self {
        Self { config, artifacts }
    }
}

#[async_trait]
impl DeployBackend for EvmBackend {
    async fn get_factory(&self, name: &str) -> Result<Box<dyn ContractFactory>, DeployError> {
        // Credentials resolve here, not at config load time.
        let target = DeployTarget::resolve(&self.config)?;
        let artifact = self.artifacts.load(name)?;
        Ok(Box::new(EvmFactory { artifact, target }))
    }
}

/// Factory bound to a resolved target and a loaded artifact.
#[derive(Debug)]
pub struct EvmFactory {
    artifact: ContractArtifact,
    target: DeployTarget,
}

#[async_trait]
impl ContractFactory for EvmFactory {
    fn contract_name(&self) -> &str {
        &self.artifact.contract_name
    }

    async fn deploy(&self) -> Result<DeployedContract, DeployError> {
        // Also proves the endpoint is reachable before anything is signed.
        let chain_id = self.target.verify_endpoint().await?;

        debug!(
            contract = %self.artifact.contract_name,
            bytecode_len = self.artifact.bytecode.len(),
            chain_id = chain_id,
            "Preparing deployment transaction"
        );

        let tx = TransactionRequest::default()
            .with_deploy_code(self.artifact.bytecode.clone())
            .with_chain_id(chain_id);

        let url = self.target.rpc_url.parse().map_err(|e| DeployError::InvalidEndpoint {
            url: self.target.rpc_url.clone(),
            reason: format!("{e}"),
        })?;
        let provider = ProviderBuilder::new().wallet(self.target.wallet()).on_http(url);

        let pending = provider.send_transaction(tx).await?;
        let tx_hash = *pending.tx_hash();

        info!(
            tx_hash = %tx_hash,
            network = %self.target.network,
            signer = %self.target.address,
            "Deployment transaction submitted, waiting for confirmation"
        );

        let receipt = pending.get_receipt().await?;

        if !receipt.status() {
            return Err(DeployError::Reverted(tx_hash));
        }

        let address = receipt
            .contract_address
            .ok_or(DeployError::MissingAddress(tx_hash))?;

        info!(
            address = %address,
            block = receipt.block_number.unwrap_or(0),
            gas_used = receipt.gas_used,
            "Deployment confirmed"
        );

        Ok(DeployedContract {
            address,
            transaction_hash: tx_hash,
            block_number: receipt.block_number,
        })
    }
}
