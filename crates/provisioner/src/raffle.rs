use deployer_trait::{ConstructorArg, DeploymentStore};
use network_config::{Address, B256, ConfigError, Registry, U256};

use crate::MOCK_COORDINATOR;

pub const RAFFLE: &str = "Raffle";

/// Constructor arguments of the raffle contract for one network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaffleArgs {
    pub vrf_coordinator: Address,
    pub entrance_fee: U256,
    pub gas_lane: B256,
    pub subscription_id: u64,
    pub callback_gas_limit: u32,
    pub interval: u64,
}

impl RaffleArgs {
    /// Local networks take the coordinator from the mock recorded in `store`,
    /// all others from the registry entry of `chain_id`.
    pub async fn resolve(
        registry: &Registry,
        chain_id: u64,
        network: &str,
        store: &dyn DeploymentStore,
    ) -> eyre::Result<Self> {
        let entry = registry.require(chain_id)?;

        let vrf_coordinator = if registry.is_local_network(network) {
            store
                .get(MOCK_COORDINATOR)
                .await?
                .map(|record| record.address)
                .ok_or_else(|| ConfigError::MissingField {
                    network: network.to_string(),
                    field: "vrfCoordinatorAddress",
                })?
        } else {
            entry
                .vrf_coordinator()
                .ok_or_else(|| ConfigError::MissingField {
                    network: entry.name.clone(),
                    field: "vrfCoordinatorAddress",
                })?
        };

        Ok(Self {
            vrf_coordinator,
            entrance_fee: entry.entrance_fee,
            gas_lane: entry.gas_lane,
            subscription_id: entry.subscription_id,
            callback_gas_limit: entry.callback_gas_limit,
            interval: entry.interval,
        })
    }

    pub fn constructor_args(&self) -> Vec<ConstructorArg> {
        vec![
            ConstructorArg::Address(self.vrf_coordinator),
            ConstructorArg::Uint(self.entrance_fee),
            ConstructorArg::Bytes32(self.gas_lane),
            ConstructorArg::Uint(U256::from(self.subscription_id)),
            ConstructorArg::Uint(U256::from(self.callback_gas_limit)),
            ConstructorArg::Uint(U256::from(self.interval)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deployer_trait::{DeploymentRecord, MemoryStore};
    use network_config::{DEFAULT_GAS_LANE, NetworkConfigEntry, NetworkKind};

    const MOCK_ADDRESS: Address = Address::new([0x42; 20]);

    async fn store_with_mock() -> MemoryStore {
        let store = MemoryStore::new();
        store
            .save(&DeploymentRecord {
                contract: MOCK_COORDINATOR.to_string(),
                address: MOCK_ADDRESS,
                transaction_hash: None,
                args: vec![],
            })
            .await
            .unwrap();
        store
    }

    fn config_error(err: &eyre::Report) -> &ConfigError {
        err.downcast_ref::<ConfigError>().expect("configuration error")
    }

    #[tokio::test]
    async fn live_network_uses_registry_coordinator() {
        let registry = Registry::builtin();
        let args = RaffleArgs::resolve(&registry, 4, "rinkeby", &MemoryStore::new())
            .await
            .unwrap();

        assert_eq!(
            args.vrf_coordinator,
            registry.config_for(4).unwrap().vrf_coordinator().unwrap()
        );
        assert_eq!(args.subscription_id, 10222);
        assert_eq!(args.callback_gas_limit, 600_000);
        assert_eq!(args.interval, 30);
    }

    #[tokio::test]
    async fn local_network_uses_deployed_mock() {
        let registry = Registry::builtin();
        let store = store_with_mock().await;

        let args = RaffleArgs::resolve(&registry, 31337, "hardhat", &store)
            .await
            .unwrap();

        assert_eq!(args.vrf_coordinator, MOCK_ADDRESS);
        assert_eq!(args.gas_lane, DEFAULT_GAS_LANE);
        assert_eq!(args.subscription_id, 0);
    }

    #[tokio::test]
    async fn unknown_chain_is_a_configuration_error() {
        let registry = Registry::builtin();
        let err = RaffleArgs::resolve(&registry, 11155111, "sepolia", &MemoryStore::new())
            .await
            .unwrap_err();

        assert_eq!(config_error(&err), &ConfigError::MissingNetwork(11155111));
    }

    #[tokio::test]
    async fn local_network_without_mock_fails() {
        let registry = Registry::builtin();
        let err = RaffleArgs::resolve(&registry, 31337, "localhost", &MemoryStore::new())
            .await
            .unwrap_err();

        assert!(matches!(
            config_error(&err),
            ConfigError::MissingField {
                field: "vrfCoordinatorAddress",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn simulated_entry_on_non_local_network_fails() {
        let registry = Registry::builder()
            .network(
                1337,
                NetworkConfigEntry {
                    name: "devnet".to_string(),
                    kind: NetworkKind::Simulated,
                    entrance_fee: U256::from(1u64),
                    gas_lane: DEFAULT_GAS_LANE,
                    subscription_id: 0,
                    callback_gas_limit: 100_000,
                    interval: 10,
                },
            )
            .build()
            .unwrap();

        let err = RaffleArgs::resolve(&registry, 1337, "devnet", &store_with_mock().await)
            .await
            .unwrap_err();

        assert_eq!(
            config_error(&err),
            &ConfigError::MissingField {
                network: "devnet".to_string(),
                field: "vrfCoordinatorAddress",
            }
        );
    }

    #[test]
    fn constructor_args_follow_raffle_signature() {
        let args = RaffleArgs {
            vrf_coordinator: MOCK_ADDRESS,
            entrance_fee: U256::from(5u64),
            gas_lane: DEFAULT_GAS_LANE,
            subscription_id: 1,
            callback_gas_limit: 2,
            interval: 3,
        };

        assert_eq!(
            args.constructor_args(),
            vec![
                ConstructorArg::Address(MOCK_ADDRESS),
                ConstructorArg::Uint(U256::from(5u64)),
                ConstructorArg::Bytes32(DEFAULT_GAS_LANE),
                ConstructorArg::Uint(U256::from(1u64)),
                ConstructorArg::Uint(U256::from(2u64)),
                ConstructorArg::Uint(U256::from(3u64)),
            ]
        );
    }
}
