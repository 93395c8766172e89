//! Compiled contract artifacts.
//!
//! The external compiler writes one JSON file per contract under the
//! artifacts directory. Only the creation bytecode matters for deployment;
//! the ABI is carried opaquely for diagnostics.

use std::path::{Path, PathBuf};

use alloy::primitives::Bytes;
use serde::Deserialize;
use tracing::debug;

use crate::error::DeployError;

/// Compiled contract artifact as written by the external toolchain.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    /// Contract name recorded by the compiler.
    pub contract_name: String,
    /// Contract ABI, kept opaque.
    #[serde(default)]
    pub abi: serde_json::Value,
    /// Creation bytecode, hex-encoded in the file.
    pub bytecode: Bytes,
}

impl ContractArtifact {
    /// Parse an artifact from its JSON source.
    ///
    /// An empty `bytecode` field means the contract cannot be deployed
    /// (abstract contract or interface) and is rejected here rather than
    /// producing a doomed transaction.
    pub fn from_json(name: &str, raw: &str) -> Result<Self, DeployError> {
        let artifact: ContractArtifact =
            serde_json::from_str(raw).map_err(|source| DeployError::MalformedArtifact {
                name: name.to_string(),
                source,
            })?;

        if artifact.bytecode.is_empty() {
            return Err(DeployError::EmptyBytecode(name.to_string()));
        }

        Ok(artifact)
    }
}

/// Artifact directory lookup.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    /// Create a store rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory this store reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path the artifact for `name` is expected at.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.json"))
    }

    /// Load the artifact for a named contract.
    pub fn load(&self, name: &str) -> Result<ContractArtifact, DeployError> {
        let path = self.path_for(name);
        let raw = std::fs::read_to_string(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                DeployError::ArtifactNotFound {
                    name: name.to_string(),
                    path: path.clone(),
                }
            } else {
                DeployError::ArtifactUnreadable {
                    name: name.to_string(),
                    source,
                }
            }
        })?;

        let artifact = ContractArtifact::from_json(name, &raw)?;
        debug!(
            contract = %artifact.contract_name,
            bytecode_len = artifact.bytecode.len(),
            path = %path.display(),
            "Artifact loaded"
        );
        Ok(artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_ARTIFACT: &str = r#"{
        "contractName": "MetaNFT",
        "abi": [],
        "bytecode": "0x6080604052600a600c600039600a6000f3"
    }"#;

    #[test]
    fn parses_minimal_artifact() {
        let artifact = ContractArtifact::from_json("MetaNFT", MINIMAL_ARTIFACT).unwrap();
        assert_eq!(artifact.contract_name, "MetaNFT");
        assert!(!artifact.bytecode.is_empty());
    }

    #[test]
    fn rejects_empty_bytecode() {
        let raw = r#"{"contractName": "IMetaNFT", "abi": [], "bytecode": "0x"}"#;
        let err = ContractArtifact::from_json("IMetaNFT", raw).unwrap_err();
        assert!(matches!(err, DeployError::EmptyBytecode(ref name) if name == "IMetaNFT"));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = ContractArtifact::from_json("MetaNFT", "not json").unwrap_err();
        assert!(matches!(err, DeployError::MalformedArtifact { .. }));
    }

    #[test]
    fn missing_file_maps_to_not_found() {
        let store = ArtifactStore::new("definitely-not-a-directory");
        let err = store.load("MetaNFT").unwrap_err();
        assert!(matches!(err, DeployError::ArtifactNotFound { .. }));
    }

    #[test]
    fn loads_artifact_from_directory() {
        let dir = std::env::temp_dir().join(format!("deployer-artifacts-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("MetaNFT.json"), MINIMAL_ARTIFACT).unwrap();

        let store = ArtifactStore::new(&dir);
        let artifact = store.load("MetaNFT").unwrap();
        assert_eq!(artifact.contract_name, "MetaNFT");

        std::fs::remove_dir_all(&dir).ok();
    }
}
