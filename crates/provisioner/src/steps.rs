use deployer_trait::{DEPLOYER_ROLE, DeployOptions, Deployer, DeploymentStore, NamedAccounts};
use network_config::Registry;
use tracing::info;

use crate::{
    ProvisionContext, ProvisionObserver, RAFFLE, RaffleArgs, SimulatedOracleCostModel,
    provision_if_local,
};

/// The active network and the collaborators shared by all steps of one run.
pub struct StepContext<'a> {
    pub network: &'a str,
    pub chain_id: u64,
    pub registry: &'a Registry,
    pub deployer: &'a dyn Deployer,
    pub accounts: &'a dyn NamedAccounts,
    pub store: &'a dyn DeploymentStore,
    pub observer: &'a dyn ProvisionObserver,
}

#[async_trait::async_trait]
pub trait DeployStep: Send + Sync {
    fn name(&self) -> &str;

    /// Tags this step is selected by.
    fn tags(&self) -> &[&str];

    async fn run(&self, ctx: &StepContext<'_>) -> eyre::Result<()>;
}

#[derive(Default)]
pub struct MocksStep {
    pub cost_model: SimulatedOracleCostModel,
}

#[async_trait::async_trait]
impl DeployStep for MocksStep {
    fn name(&self) -> &str {
        "mocks"
    }

    fn tags(&self) -> &[&str] {
        &["all", "mocks"]
    }

    async fn run(&self, ctx: &StepContext<'_>) -> eyre::Result<()> {
        let provision = ProvisionContext {
            registry: ctx.registry,
            deployer: ctx.deployer,
            accounts: ctx.accounts,
            observer: ctx.observer,
            cost_model: self.cost_model,
        };

        provision_if_local(&provision, ctx.network).await?;
        Ok(())
    }
}

pub struct RaffleStep;

#[async_trait::async_trait]
impl DeployStep for RaffleStep {
    fn name(&self) -> &str {
        "raffle"
    }

    fn tags(&self) -> &[&str] {
        &["all", "raffle"]
    }

    async fn run(&self, ctx: &StepContext<'_>) -> eyre::Result<()> {
        let args = RaffleArgs::resolve(ctx.registry, ctx.chain_id, ctx.network, ctx.store).await?;
        let from = ctx.accounts.named_account(DEPLOYER_ROLE).await?;

        let record = ctx
            .deployer
            .deploy(
                RAFFLE,
                DeployOptions {
                    from,
                    args: args.constructor_args(),
                    log: true,
                },
            )
            .await?;

        info!(
            network = ctx.network,
            address = %record.address,
            coordinator = %args.vrf_coordinator,
            "Raffle deployed"
        );

        Ok(())
    }
}
