use deployer_trait::{DEPLOYER_ROLE, DeployOptions, Deployer, DeploymentRecord, NamedAccounts};
use network_config::Registry;

use crate::{ProvisionObserver, SimulatedOracleCostModel};

pub const MOCK_COORDINATOR: &str = "VRFCoordinatorV2Mock";

/// Everything [`provision_if_local`] needs from the surrounding deploy run.
pub struct ProvisionContext<'a> {
    pub registry: &'a Registry,
    pub deployer: &'a dyn Deployer,
    pub accounts: &'a dyn NamedAccounts,
    pub observer: &'a dyn ProvisionObserver,
    pub cost_model: SimulatedOracleCostModel,
}

/// Deploy a mock VRF coordinator when `active_network` is a local network.
///
/// Returns `None` without touching the deployer or the observer on any other
/// network. Every call on a local network deploys a fresh mock; the returned
/// record is a convenience, the deployer's store remains the reference for
/// later steps. Deployer errors are returned unchanged and the after-deploy
/// hook is skipped.
pub async fn provision_if_local(
    ctx: &ProvisionContext<'_>,
    active_network: &str,
) -> eyre::Result<Option<DeploymentRecord>> {
    if !ctx.registry.is_local_network(active_network) {
        return Ok(None);
    }

    let from = ctx.accounts.named_account(DEPLOYER_ROLE).await?;

    ctx.observer.before_deploy(active_network);

    let record = ctx
        .deployer
        .deploy(
            MOCK_COORDINATOR,
            DeployOptions {
                from,
                args: ctx.cost_model.constructor_args(),
                log: true,
            },
        )
        .await?;

    ctx.observer.after_deploy(active_network, &record);

    Ok(Some(record))
}
