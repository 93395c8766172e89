//! Network profile configuration.

use serde::{Deserialize, Serialize};

/// Connection and signing parameters for one named network.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkProfile {
    /// RPC endpoint URL. Absent means the network has no reachable endpoint.
    #[serde(default)]
    pub url: Option<String>,
    /// Expected chain id. When set, the node's reported chain id must match.
    #[serde(default)]
    pub chain_id: Option<u64>,
    /// Hex-encoded signing keys, in priority order. Empty means no signer
    /// is configured; a deploy against this profile fails when credentials
    /// are resolved, not before.
    #[serde(default)]
    pub accounts: Vec<String>,
}

impl NetworkProfile {
    /// Profile with no endpoint and no accounts.
    pub fn empty() -> Self {
        Self::default()
    }

    /// First configured signing key, if any.
    pub fn signing_key(&self) -> Option<&str> {
        self.accounts.first().map(String::as_str)
    }

    /// Whether a signer is configured.
    pub fn has_signer(&self) -> bool {
        !self.accounts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_profile_has_no_signer() {
        let profile = NetworkProfile::empty();
        assert!(profile.url.is_none());
        assert!(profile.chain_id.is_none());
        assert!(!profile.has_signer());
        assert_eq!(profile.signing_key(), None);
    }

    #[test]
    fn signing_key_is_first_account() {
        let profile = NetworkProfile {
            url: Some("https://rpc.example".to_string()),
            chain_id: None,
            accounts: vec!["0xaa".to_string(), "0xbb".to_string()],
        };
        assert!(profile.has_signer());
        assert_eq!(profile.signing_key(), Some("0xaa"));
    }
}
