use clap::Parser;
use deployer_alloy::{AlloyDeployer, DEV_PRIVATE_KEY, FileStore, LocalAccounts, signer_from_key};
use deployer_trait::DeploymentStore;
use network_config::Registry;
use provisioner::{MocksStep, RaffleStep, Runner, StepContext, TracingObserver};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "raffle-deploy")]
#[command(about = "Deploy the raffle contract and, on local networks, a mock VRF coordinator", long_about = None)]
struct Cli {
    /// Network name, e.g. hardhat, localhost, rinkeby
    #[arg(long)]
    network: String,

    /// Chain id of the network
    #[arg(long)]
    chain_id: u64,

    /// JSON-RPC endpoint of the network
    #[arg(long, env = "RPC_URL", default_value = "http://127.0.0.1:8545")]
    rpc_url: String,

    /// Key of the deployer account. Local networks fall back to the first dev account
    #[arg(long, env = "DEPLOYER_PRIVATE_KEY", hide_env_values = true)]
    private_key: Option<String>,

    /// Directory with compiled contract artifacts
    #[arg(long, default_value = "artifacts")]
    artifacts: PathBuf,

    /// Directory deployment records are written to
    #[arg(long, default_value = "deployments")]
    deployments: PathBuf,

    /// Only run steps with these tags (all, mocks, raffle)
    #[arg(long, value_delimiter = ',')]
    tags: Vec<String>,

    /// JSON file replacing the builtin network registry
    #[arg(long)]
    registry: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let registry = match &cli.registry {
        Some(path) => Registry::from_json(&std::fs::read_to_string(path)?)?,
        None => Registry::builtin(),
    };

    let signer = match &cli.private_key {
        Some(key) => signer_from_key(key)?,
        None if registry.is_local_network(&cli.network) => signer_from_key(DEV_PRIVATE_KEY)?,
        None => {
            return Err(eyre::eyre!(
                "no deployer key for network {}, set DEPLOYER_PRIVATE_KEY or --private-key",
                cli.network
            ));
        }
    };

    tracing::info!(
        network = %cli.network,
        chain_id = cli.chain_id,
        rpc = %cli.rpc_url,
        deployer = %signer.address(),
        "Starting deployment"
    );

    let accounts = LocalAccounts::from_signer(&signer);
    let store: Arc<dyn DeploymentStore> = Arc::new(FileStore::new(&cli.deployments, &cli.network));
    let deployer = AlloyDeployer::connect(&cli.rpc_url, signer, &cli.artifacts, store.clone())?;

    let ctx = StepContext {
        network: &cli.network,
        chain_id: cli.chain_id,
        registry: &registry,
        deployer: &deployer,
        accounts: &accounts,
        store: store.as_ref(),
        observer: &TracingObserver,
    };

    let runner = Runner::new().step(MocksStep::default()).step(RaffleStep);
    let completed = runner.run(&ctx, &cli.tags).await?;

    tracing::info!(steps = ?completed, "Deployment finished");

    Ok(())
}
