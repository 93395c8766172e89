//! Deployment error taxonomy.
//!
//! Three classes surface here: configuration gaps (endpoint/signer
//! resolution), artifact resolution, and network/transaction failures.
//! None are recovered locally; every variant propagates unchanged to the
//! binary's top-level handler.

use std::path::PathBuf;

use alloy::primitives::B256;
use alloy::providers::PendingTransactionError;
use alloy::transports::{RpcError, TransportErrorKind};

/// Errors raised while resolving a deployment target or deploying.
#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    #[error("network '{0}' is not configured")]
    UnknownNetwork(String),

    #[error("network '{0}' has no RPC endpoint configured")]
    MissingEndpoint(String),

    #[error("no signing account configured for network '{0}'")]
    NoSigner(String),

    #[error("invalid signing key for network '{network}': {reason}")]
    InvalidKey { network: String, reason: String },

    #[error("invalid RPC endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("contract artifact '{name}' not found at {path}")]
    ArtifactNotFound { name: String, path: PathBuf },

    #[error("failed to read artifact '{name}'")]
    ArtifactUnreadable {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed artifact '{name}'")]
    MalformedArtifact {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("artifact '{0}' has no deployable bytecode")]
    EmptyBytecode(String),

    #[error("chain id mismatch for network '{network}': configured {expected}, node reports {actual}")]
    ChainIdMismatch {
        network: String,
        expected: u64,
        actual: u64,
    },

    #[error("rpc error: {0}")]
    Rpc(#[from] RpcError<TransportErrorKind>),

    #[error("failed while awaiting confirmation: {0}")]
    Confirmation(#[from] PendingTransactionError),

    #[error("deployment transaction {0} reverted")]
    Reverted(B256),

    #[error("transaction {0} confirmed without a contract address")]
    MissingAddress(B256),
}
