use crate::artifact::Artifact;
use alloy::network::{EthereumWallet, ReceiptResponse, TransactionBuilder};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use alloy::signers::local::PrivateKeySigner;
use alloy::transports::http::reqwest::Url;
use deployer_trait::{DeployOptions, Deployer, DeploymentRecord, DeploymentStore};
use eyre::WrapErr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Deploys compiled artifacts over JSON-RPC and records the result.
pub struct AlloyDeployer {
    provider: DynProvider,
    artifacts_dir: PathBuf,
    store: Arc<dyn DeploymentStore>,
}

impl AlloyDeployer {
    pub fn new(
        provider: DynProvider,
        artifacts_dir: impl Into<PathBuf>,
        store: Arc<dyn DeploymentStore>,
    ) -> Self {
        Self {
            provider,
            artifacts_dir: artifacts_dir.into(),
            store,
        }
    }

    /// HTTP provider that fills nonce, gas and chain id, and signs with `signer`.
    pub fn connect(
        rpc_url: &str,
        signer: PrivateKeySigner,
        artifacts_dir: impl Into<PathBuf>,
        store: Arc<dyn DeploymentStore>,
    ) -> eyre::Result<Self> {
        let rpc_url: Url = rpc_url
            .parse()
            .wrap_err_with(|| format!("invalid RPC URL {rpc_url}"))?;

        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_http(rpc_url)
            .erased();

        Ok(Self::new(provider, artifacts_dir, store))
    }

    /// Checks the creation receipt and stores the resulting record.
    async fn record_deployment(
        &self,
        contract: &str,
        opts: DeployOptions,
        receipt: &TransactionReceipt,
    ) -> eyre::Result<DeploymentRecord> {
        let tx_hash = receipt.transaction_hash();

        if !receipt.status() {
            return Err(eyre::eyre!(
                "deployment of {contract} reverted (tx: {tx_hash:?})"
            ));
        }

        let address = receipt.contract_address().ok_or_else(|| {
            eyre::eyre!("receipt for {contract} has no contract address (tx: {tx_hash:?})")
        })?;

        let record = DeploymentRecord {
            contract: contract.to_string(),
            address,
            transaction_hash: Some(tx_hash),
            args: opts.args,
        };
        self.store.save(&record).await?;

        if opts.log {
            info!(
                contract,
                %address,
                tx = ?tx_hash,
                gas_used = receipt.gas_used(),
                "deployed"
            );
        }

        Ok(record)
    }
}

#[async_trait::async_trait]
impl Deployer for AlloyDeployer {
    async fn deploy(&self, contract: &str, opts: DeployOptions) -> eyre::Result<DeploymentRecord> {
        let artifact = Artifact::load(&self.artifacts_dir, contract)?;

        let tx = TransactionRequest::default()
            .with_from(opts.from)
            .with_deploy_code(artifact.deploy_code(&opts.args));

        let pending = self.provider.send_transaction(tx).await?;
        let receipt = pending.get_receipt().await?;

        self.record_deployment(contract, opts, &receipt).await
    }
}
