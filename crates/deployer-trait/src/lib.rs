use alloy::dyn_abi::DynSolValue;
use alloy::primitives::{Address, B256, Bytes, U256};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Named account every deploy step sends from.
pub const DEPLOYER_ROLE: &str = "deployer";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum ConstructorArg {
    Uint(U256),
    Address(Address),
    Bytes32(B256),
}

impl ConstructorArg {
    fn to_sol_value(&self) -> DynSolValue {
        match self {
            ConstructorArg::Uint(value) => DynSolValue::Uint(*value, 256),
            ConstructorArg::Address(address) => DynSolValue::Address(*address),
            ConstructorArg::Bytes32(word) => DynSolValue::FixedBytes(*word, 32),
        }
    }
}

impl From<U256> for ConstructorArg {
    fn from(value: U256) -> Self {
        ConstructorArg::Uint(value)
    }
}

impl From<u64> for ConstructorArg {
    fn from(value: u64) -> Self {
        ConstructorArg::Uint(U256::from(value))
    }
}

impl From<Address> for ConstructorArg {
    fn from(address: Address) -> Self {
        ConstructorArg::Address(address)
    }
}

impl From<B256> for ConstructorArg {
    fn from(word: B256) -> Self {
        ConstructorArg::Bytes32(word)
    }
}

/// ABI-encode constructor arguments, ready to be appended to creation bytecode.
pub fn encode_constructor_args(args: &[ConstructorArg]) -> Bytes {
    if args.is_empty() {
        return Bytes::new();
    }

    let params = DynSolValue::Tuple(args.iter().map(ConstructorArg::to_sol_value).collect());
    params.abi_encode_params().into()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOptions {
    pub from: Address,
    pub args: Vec<ConstructorArg>,
    /// Report the deployment through the deployer's own logging.
    pub log: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRecord {
    pub contract: String,
    pub address: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<B256>,
    pub args: Vec<ConstructorArg>,
}

/// Executes contract deployments. Implementations record every successful
/// deployment in their [`DeploymentStore`] before returning.
#[async_trait::async_trait]
pub trait Deployer: Send + Sync {
    async fn deploy(&self, contract: &str, opts: DeployOptions) -> eyre::Result<DeploymentRecord>;
}

/// Resolves named roles such as [`DEPLOYER_ROLE`] to accounts.
#[async_trait::async_trait]
pub trait NamedAccounts: Send + Sync {
    async fn named_account(&self, role: &str) -> eyre::Result<Address>;
}

/// Deployments made on one network, keyed by contract name. The latest
/// deployment of a contract replaces the previous record.
#[async_trait::async_trait]
pub trait DeploymentStore: Send + Sync {
    async fn save(&self, record: &DeploymentRecord) -> eyre::Result<()>;
    async fn get(&self, contract: &str) -> eyre::Result<Option<DeploymentRecord>>;
}

#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, DeploymentRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl DeploymentStore for MemoryStore {
    async fn save(&self, record: &DeploymentRecord) -> eyre::Result<()> {
        self.records
            .write()
            .await
            .insert(record.contract.clone(), record.clone());
        Ok(())
    }

    async fn get(&self, contract: &str) -> eyre::Result<Option<DeploymentRecord>> {
        Ok(self.records.read().await.get(contract).cloned())
    }
}
