use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;
use deployer_trait::{DEPLOYER_ROLE, NamedAccounts};
use std::collections::HashMap;

/// Account #0 of the default hardhat/anvil mnemonic. Only meaningful on a
/// local development node.
pub const DEV_PRIVATE_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

pub fn signer_from_key(key: &str) -> eyre::Result<PrivateKeySigner> {
    key.trim()
        .parse::<PrivateKeySigner>()
        .map_err(|err| eyre::eyre!("invalid private key: {err}"))
}

/// Named roles backed by locally held keys.
#[derive(Debug, Clone, Default)]
pub struct LocalAccounts {
    roles: HashMap<String, Address>,
}

impl LocalAccounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_signer(signer: &PrivateKeySigner) -> Self {
        Self::new().with_role(DEPLOYER_ROLE, signer.address())
    }

    pub fn with_role(mut self, role: impl Into<String>, address: Address) -> Self {
        self.roles.insert(role.into(), address);
        self
    }
}

#[async_trait::async_trait]
impl NamedAccounts for LocalAccounts {
    async fn named_account(&self, role: &str) -> eyre::Result<Address> {
        self.roles
            .get(role)
            .copied()
            .ok_or_else(|| eyre::eyre!("no account configured for named role {role}"))
    }
}
