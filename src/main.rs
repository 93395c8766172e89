//! MetaNFT deployment tool.
//!
//! Deploys the compiled MetaNFT artifact to the configured network and
//! prints the resulting contract address. One attempt per invocation; any
//! failure is reported on stderr and the process exits non-zero.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use deployer_chain::{deploy, ArtifactStore, EvmBackend};
use deployer_core::DeployConfig;

/// Environment variable names.
mod env {
    /// Path to a TOML config file replacing the built-in network table.
    pub const DEPLOY_CONFIG: &str = "DEPLOY_CONFIG";
    /// Network name overriding the configured default.
    pub const DEPLOY_NETWORK: &str = "DEPLOY_NETWORK";
    /// Directory holding compiled contract artifacts.
    pub const ARTIFACTS_DIR: &str = "ARTIFACTS_DIR";
}

/// Contract this tool deploys.
const CONTRACT_NAME: &str = "MetaNFT";

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing; stdout is reserved for the deployed address.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Assemble configuration once; the deploy flow never reads the
    // environment after this point.
    let mut config = match std::env::var(env::DEPLOY_CONFIG) {
        Ok(path) => DeployConfig::from_file(&path)
            .with_context(|| format!("Failed to load deployment config from {path}"))?,
        Err(_) => DeployConfig::from_env(),
    };
    if let Ok(network) = std::env::var(env::DEPLOY_NETWORK) {
        config.default_network = network;
    }
    config.log_summary();

    let artifacts_dir =
        std::env::var(env::ARTIFACTS_DIR).unwrap_or_else(|_| "artifacts".to_string());
    let backend = EvmBackend::new(config, ArtifactStore::new(artifacts_dir));

    info!(contract = CONTRACT_NAME, "Starting deployment");
    let result = deploy::run(&backend, CONTRACT_NAME).await?;
    let address = result
        .contract_address()
        .context("Deployment confirmed without an address")?;

    println!("Contract deployed to address: {address}");

    Ok(())
}
