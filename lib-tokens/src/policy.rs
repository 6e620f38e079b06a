//! Issuer Authorization Policy
//!
//! The deployed contract this engine replaces hard-coded a single
//! organization into its authorization checks. Here the rule is an injected
//! policy, so deployments configure the issuer set without recompiling.
//! MSP identity remains the sole authorization signal.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Organizations allowed to initialize the contract and mint tokens
///
/// The default policy authorizes nothing; a usable policy comes from
/// [`ContractConfig`] or the constructors below.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuerPolicy {
    issuers: HashSet<String>,
}

impl IssuerPolicy {
    /// Policy that authorizes nothing.
    pub fn deny_all() -> Self {
        Self::default()
    }

    /// Policy with a single authorized issuer organization.
    pub fn single(msp_id: &str) -> Self {
        Self {
            issuers: [msp_id.to_string()].into_iter().collect(),
        }
    }

    /// Add an authorized issuer.
    pub fn allow(&mut self, msp_id: &str) {
        self.issuers.insert(msp_id.to_string());
    }

    /// Whether `msp_id` may initialize the contract and mint.
    pub fn can_issue(&self, msp_id: &str) -> bool {
        self.issuers.contains(msp_id)
    }
}

/// Deployment configuration for a token contract instance
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContractConfig {
    /// MSP identifiers allowed to initialize and mint.
    pub authorized_issuers: Vec<String>,
}

impl From<ContractConfig> for IssuerPolicy {
    fn from(config: ContractConfig) -> Self {
        Self {
            issuers: config.authorized_issuers.into_iter().collect(),
        }
    }
}
