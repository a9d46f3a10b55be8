use deployer_trait::DeploymentRecord;
use tracing::info;

/// Hooks around the mock coordinator deployment. Called inline and expected to
/// return immediately; they cannot fail the provisioning.
pub trait ProvisionObserver: Send + Sync {
    fn before_deploy(&self, _network: &str) {}

    fn after_deploy(&self, _network: &str, _record: &DeploymentRecord) {}
}

pub struct TracingObserver;

impl ProvisionObserver for TracingObserver {
    fn before_deploy(&self, network: &str) {
        info!(network, "Local network detected! Deploying mocks...");
    }

    fn after_deploy(&self, network: &str, record: &DeploymentRecord) {
        info!(network, address = %record.address, "Mocks Deployed!");
        info!("--------------------------------------------");
    }
}

pub struct NoopObserver;

impl ProvisionObserver for NoopObserver {}
