//! Single-shot deployment flow.
//!
//! The address is recorded and reported only after the network confirms
//! the transaction, never before. One attempt per invocation, no retry.

use alloy::primitives::Address;
use tracing::info;

use crate::error::DeployError;
use crate::factory::DeployBackend;

/// Outcome of one deployment invocation.
///
/// Starts empty and is populated exactly once, after confirmation.
#[derive(Debug, Default)]
pub struct DeploymentResult {
    contract_address: Option<Address>,
}

impl DeploymentResult {
    /// Empty result for a deployment that has not confirmed yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Address of the deployed contract, once confirmed.
    pub fn contract_address(&self) -> Option<Address> {
        self.contract_address
    }

    /// Whether the deployment confirmed.
    pub fn is_confirmed(&self) -> bool {
        self.contract_address.is_some()
    }

    fn confirm(&mut self, address: Address) {
        debug_assert!(
            self.contract_address.is_none(),
            "deployment result already confirmed"
        );
        self.contract_address = Some(address);
    }
}

/// Deploy `contract` through `backend`, once.
pub async fn run(
    backend: &dyn DeployBackend,
    contract: &str,
) -> Result<DeploymentResult, DeployError> {
    let mut result = DeploymentResult::new();

    let factory = backend.get_factory(contract).await?;
    let deployed = factory.deploy().await?;

    result.confirm(deployed.address);
    info!(
        contract = contract,
        address = %deployed.address,
        tx_hash = %deployed.transaction_hash,
        "Deployment recorded"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    use alloy::primitives::{Address, B256};
    use async_trait::async_trait;

    use super::*;
    use crate::factory::{ContractFactory, DeployedContract};

    /// Backend that mints a fresh address per deployment, no network.
    struct FakeBackend {
        sequence: Arc<AtomicU64>,
    }

    impl FakeBackend {
        fn new() -> Self {
            Self {
                sequence: Arc::new(AtomicU64::new(1)),
            }
        }
    }

    #[async_trait]
    impl DeployBackend for FakeBackend {
        async fn get_factory(&self, name: &str) -> Result<Box<dyn ContractFactory>, DeployError> {
            Ok(Box::new(FakeFactory {
                name: name.to_string(),
                sequence: self.sequence.clone(),
            }))
        }
    }

    #[derive(Debug)]
    struct FakeFactory {
        name: String,
        sequence: Arc<AtomicU64>,
    }

    #[async_trait]
    impl ContractFactory for FakeFactory {
        fn contract_name(&self) -> &str {
            &self.name
        }

        async fn deploy(&self) -> Result<DeployedContract, DeployError> {
            // Every deployment creates a new on-chain instance.
            let seq = self.sequence.fetch_add(1, Ordering::SeqCst);
            let mut bytes = [0u8; 20];
            bytes[12..].copy_from_slice(&seq.to_be_bytes());
            Ok(DeployedContract {
                address: Address::from(bytes),
                transaction_hash: B256::with_last_byte(seq as u8),
                block_number: Some(seq),
            })
        }
    }

    /// Backend whose credential resolution always fails.
    struct NoSignerBackend;

    #[async_trait]
    impl DeployBackend for NoSignerBackend {
        async fn get_factory(&self, _name: &str) -> Result<Box<dyn ContractFactory>, DeployError> {
            Err(DeployError::NoSigner("ropsten".to_string()))
        }
    }

    #[tokio::test]
    async fn deploy_confirms_with_address() {
        let backend = FakeBackend::new();
        let result = run(&backend, "MetaNFT").await.unwrap();

        assert!(result.is_confirmed());
        let printed = result.contract_address().unwrap().to_string();
        assert_eq!(printed.len(), 42);
        assert!(printed.starts_with("0x"));
        assert!(printed[2..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn repeated_deploys_get_distinct_addresses() {
        let backend = FakeBackend::new();
        let first = run(&backend, "MetaNFT").await.unwrap();
        let second = run(&backend, "MetaNFT").await.unwrap();

        assert!(first.is_confirmed());
        assert!(second.is_confirmed());
        assert_ne!(first.contract_address(), second.contract_address());
    }

    #[tokio::test]
    async fn missing_signer_fails_without_address() {
        match run(&NoSignerBackend, "MetaNFT").await {
            Err(DeployError::NoSigner(network)) => assert_eq!(network, "ropsten"),
            other => panic!("expected NoSigner, got {other:?}"),
        }
    }

    #[test]
    fn result_starts_empty() {
        let result = DeploymentResult::new();
        assert!(!result.is_confirmed());
        assert_eq!(result.contract_address(), None);
    }
}
