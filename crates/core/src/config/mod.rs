//! Configuration system for the deployment tool.
//!
//! This module provides:
//! - Network profiles (name, RPC endpoint, chain id, signing accounts)
//! - Compiler settings (version, optimizer flags)
//! - Loading from built-in defaults, the environment, or a TOML file

mod compiler;
mod network;
mod project;

pub use compiler::{CompilerSettings, OptimizerSettings};
pub use network::NetworkProfile;
pub use project::{DeployConfig, API_URL_VAR, PRIVATE_KEY_VAR};
