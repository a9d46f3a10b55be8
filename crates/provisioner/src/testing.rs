use async_trait::async_trait;
use deployer_trait::{
    DEPLOYER_ROLE, DeployOptions, Deployer, DeploymentRecord, DeploymentStore, MemoryStore,
    NamedAccounts,
};
use network_config::Address;
use std::sync::{Arc, Mutex};

use crate::ProvisionObserver;

pub const DEPLOYER: Address = Address::new([0x11; 20]);

#[derive(Debug, thiserror::Error)]
#[error("insufficient funds for gas * price + value")]
pub struct InsufficientFunds;

/// Deployer that hands out sequential addresses and saves into a shared store.
pub struct FakeDeployer {
    store: Arc<MemoryStore>,
    calls: Mutex<Vec<(String, DeployOptions)>>,
    fail: bool,
}

impl FakeDeployer {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self {
            store,
            calls: Mutex::new(vec![]),
            fail: false,
        }
    }

    pub fn failing(store: Arc<MemoryStore>) -> Self {
        Self {
            fail: true,
            ..Self::new(store)
        }
    }

    pub fn calls(&self) -> Vec<(String, DeployOptions)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Deployer for FakeDeployer {
    async fn deploy(&self, contract: &str, opts: DeployOptions) -> eyre::Result<DeploymentRecord> {
        let count = {
            let mut calls = self.calls.lock().unwrap();
            calls.push((contract.to_string(), opts.clone()));
            calls.len()
        };

        if self.fail {
            return Err(InsufficientFunds.into());
        }

        let record = DeploymentRecord {
            contract: contract.to_string(),
            address: Address::with_last_byte(count as u8),
            transaction_hash: None,
            args: opts.args,
        };
        self.store.save(&record).await?;
        Ok(record)
    }
}

pub struct FixedAccounts;

#[async_trait]
impl NamedAccounts for FixedAccounts {
    async fn named_account(&self, role: &str) -> eyre::Result<Address> {
        match role {
            DEPLOYER_ROLE => Ok(DEPLOYER),
            _ => Err(eyre::eyre!("no account configured for named role {role}")),
        }
    }
}

#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<String>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl ProvisionObserver for RecordingObserver {
    fn before_deploy(&self, network: &str) {
        self.events.lock().unwrap().push(format!("before:{network}"));
    }

    fn after_deploy(&self, network: &str, record: &DeploymentRecord) {
        self.events
            .lock()
            .unwrap()
            .push(format!("after:{network}:{}", record.contract));
    }
}
