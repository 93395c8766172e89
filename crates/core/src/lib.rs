//! Deployer configuration layer.
//!
//! This crate provides the configuration consumed by the deployment tool:
//! - Named network profiles (RPC endpoint, chain id, signing accounts)
//! - Compiler settings forwarded opaquely to the external toolchain
//! - Assembly from built-in defaults, the environment, or a TOML file
//!
//! Configuration is built once at process start and passed by value into
//! the deployment flow; nothing here performs network or signing work.

pub mod config;

pub use config::{
    CompilerSettings, DeployConfig, NetworkProfile, OptimizerSettings, API_URL_VAR,
    PRIVATE_KEY_VAR,
};
