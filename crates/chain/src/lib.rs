//! Deployer chain interaction layer.
//!
//! This crate provides:
//! - Deployment target resolution (endpoint + signer) from network profiles
//! - Compiled contract artifact loading
//! - The contract factory abstraction and its JSON-RPC implementation
//! - The single-shot deployment flow
//!
//! All consensus, compilation, and transaction-pool work happens on the
//! external node; this crate only drives it through Alloy providers.

mod artifact;
pub mod deploy;
mod error;
mod factory;
mod target;

pub use artifact::{ArtifactStore, ContractArtifact};
pub use deploy::DeploymentResult;
pub use error::DeployError;
pub use factory::{ContractFactory, DeployBackend, DeployedContract, EvmBackend, EvmFactory};
pub use target::DeployTarget;
