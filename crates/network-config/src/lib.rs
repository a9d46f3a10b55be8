use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

mod networks;
pub mod units;

pub use alloy::primitives::{Address, B256, U256};
pub use networks::{DEFAULT_GAS_LANE, LOCAL_NETWORKS};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no configuration for network with chain id {0}")]
    MissingNetwork(u64),
    #[error("network {network} has no {field} configured")]
    MissingField {
        network: String,
        field: &'static str,
    },
    #[error("invalid {field} for network {network}: {reason}")]
    InvalidField {
        network: String,
        field: &'static str,
        reason: String,
    },
    #[error("chain id {0} is configured more than once")]
    DuplicateNetwork(u64),
    #[error("invalid amount {value:?}: {reason}")]
    InvalidAmount { value: String, reason: String },
    #[error("invalid registry document: {0}")]
    Document(String),
}

/// Where the VRF coordinator for a network comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkKind {
    /// A coordinator is already deployed and operated on this network.
    Live { vrf_coordinator: Address },
    /// The coordinator is a mock deployed at runtime.
    Simulated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfigEntry {
    pub name: String,
    pub kind: NetworkKind,
    /// Raffle entrance fee in wei.
    pub entrance_fee: U256,
    pub gas_lane: B256,
    pub subscription_id: u64,
    pub callback_gas_limit: u32,
    /// Seconds between raffle draws.
    pub interval: u64,
}

impl NetworkConfigEntry {
    pub fn vrf_coordinator(&self) -> Option<Address> {
        match self.kind {
            NetworkKind::Live { vrf_coordinator } => Some(vrf_coordinator),
            NetworkKind::Simulated => None,
        }
    }

    pub fn is_simulated(&self) -> bool {
        matches!(self.kind, NetworkKind::Simulated)
    }

    /// Parse the human-authored form of an entry. Every field is validated here,
    /// so a constructed entry never carries an unparsed value.
    pub fn from_raw(raw: RawNetworkConfig) -> Result<Self, ConfigError> {
        let network = raw.name.clone();
        let invalid = |field: &'static str, reason: String| ConfigError::InvalidField {
            network: network.clone(),
            field,
            reason,
        };

        let kind = match raw.vrf_coordinator_address.as_deref() {
            Some(address) => NetworkKind::Live {
                vrf_coordinator: Address::from_str(address)
                    .map_err(|err| invalid("vrfCoordinatorAddress", err.to_string()))?,
            },
            None => NetworkKind::Simulated,
        };

        let entrance_fee = units::parse_ether(&raw.entrance_fee)
            .map_err(|err| invalid("entranceFee", err.to_string()))?;
        let gas_lane =
            B256::from_str(&raw.gas_lane).map_err(|err| invalid("gasLane", err.to_string()))?;
        let subscription_id = raw
            .subscription_id
            .parse::<u64>()
            .map_err(|err| invalid("subscriptionId", err.to_string()))?;
        let callback_gas_limit = raw
            .callback_gas_limit
            .parse::<u32>()
            .map_err(|err| invalid("callbackGasLimit", err.to_string()))?;
        let interval = raw
            .interval
            .parse::<u64>()
            .map_err(|err| invalid("interval", err.to_string()))?;

        Ok(Self {
            name: raw.name,
            kind,
            entrance_fee,
            gas_lane,
            subscription_id,
            callback_gas_limit,
            interval,
        })
    }
}

/// Network parameters as written by hand: amounts in ether, integers as
/// decimal strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNetworkConfig {
    pub name: String,
    #[serde(default, alias = "vrfCoordinatorV2")]
    pub vrf_coordinator_address: Option<String>,
    pub entrance_fee: String,
    pub gas_lane: String,
    pub subscription_id: String,
    pub callback_gas_limit: String,
    pub interval: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegistryDocument {
    #[serde(deserialize_with = "network_entries")]
    networks: Vec<(u64, RawNetworkConfig)>,
    #[serde(default)]
    local_networks: Option<Vec<String>>,
}

/// Every `chain id -> entry` pair in document order. Repeated chain ids are
/// kept so the registry builder can reject them.
fn network_entries<'de, D>(deserializer: D) -> Result<Vec<(u64, RawNetworkConfig)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct EntriesVisitor;

    impl<'de> Visitor<'de> for EntriesVisitor {
        type Value = Vec<(u64, RawNetworkConfig)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map from chain id to network configuration")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry::<u64, RawNetworkConfig>()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(EntriesVisitor)
}

/// Read-only table of per-network deployment parameters, keyed by chain id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    networks: BTreeMap<u64, NetworkConfigEntry>,
    local_networks: BTreeSet<String>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    pub fn builtin() -> Self {
        networks::builtin()
    }

    /// Load a registry from JSON:
    ///
    /// ```json
    /// { "networks": { "4": { "name": "rinkeby", ... } }, "localNetworks": ["hardhat"] }
    /// ```
    ///
    /// `localNetworks` falls back to the builtin set when omitted.
    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let document: RegistryDocument =
            serde_json::from_str(contents).map_err(|err| ConfigError::Document(err.to_string()))?;

        let mut builder = Registry::builder();
        for (chain_id, raw) in document.networks {
            builder = builder.network(chain_id, NetworkConfigEntry::from_raw(raw)?);
        }

        match document.local_networks {
            Some(names) => builder = builder.local_networks(names),
            None => builder = builder.local_networks(LOCAL_NETWORKS.iter().copied()),
        }

        builder.build()
    }

    pub fn config_for(&self, chain_id: u64) -> Option<&NetworkConfigEntry> {
        self.networks.get(&chain_id)
    }

    /// Like [`Registry::config_for`], for callers that cannot proceed without an entry.
    pub fn require(&self, chain_id: u64) -> Result<&NetworkConfigEntry, ConfigError> {
        self.config_for(chain_id)
            .ok_or(ConfigError::MissingNetwork(chain_id))
    }

    /// Exact, case-sensitive membership in the local network set.
    pub fn is_local_network(&self, name: &str) -> bool {
        self.local_networks.contains(name)
    }

    pub fn chain_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.networks.keys().copied()
    }

    pub fn local_networks(&self) -> impl Iterator<Item = &str> {
        self.local_networks.iter().map(String::as_str)
    }
}

#[derive(Default)]
pub struct RegistryBuilder {
    networks: BTreeMap<u64, NetworkConfigEntry>,
    local_networks: BTreeSet<String>,
    error: Option<ConfigError>,
}

impl RegistryBuilder {
    pub fn network(mut self, chain_id: u64, entry: NetworkConfigEntry) -> Self {
        if self.networks.insert(chain_id, entry).is_some() && self.error.is_none() {
            self.error = Some(ConfigError::DuplicateNetwork(chain_id));
        }
        self
    }

    pub fn local_network(mut self, name: impl Into<String>) -> Self {
        self.local_networks.insert(name.into());
        self
    }

    pub fn local_networks<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.local_networks
            .extend(names.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> Result<Registry, ConfigError> {
        if let Some(err) = self.error {
            return Err(err);
        }

        Ok(Registry {
            networks: self.networks,
            local_networks: self.local_networks,
        })
    }
}
