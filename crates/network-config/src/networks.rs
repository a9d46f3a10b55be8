use crate::{NetworkConfigEntry, NetworkKind, Registry};
use alloy::primitives::{Address, B256, U256, address, b256};
use std::collections::BTreeMap;

/// Networks that get a mock VRF coordinator instead of a live one.
pub const LOCAL_NETWORKS: [&str; 2] = ["hardhat", "localhost"];

/// 30 gwei key hash. Mocks ignore it, but the raffle constructor still needs one.
pub const DEFAULT_GAS_LANE: B256 =
    b256!("d89b2bf150e3b9e13446986e571fb9cab24b13cea0a43ea20a6049a85cc807cc");

const RINKEBY_CHAIN_ID: u64 = 4;
const HARDHAT_CHAIN_ID: u64 = 31337;

const RINKEBY_VRF_COORDINATOR: Address = address!("6168499c0cFfCaCD319c818142124B7A15E857ab");

// 0.01 ether
const ENTRANCE_FEE: U256 = U256::from_limbs([10_000_000_000_000_000, 0, 0, 0]);
const CALLBACK_GAS_LIMIT: u32 = 600_000;
const INTERVAL_SECS: u64 = 30;

pub(crate) fn builtin() -> Registry {
    let rinkeby = NetworkConfigEntry {
        name: "rinkeby".to_string(),
        kind: NetworkKind::Live {
            vrf_coordinator: RINKEBY_VRF_COORDINATOR,
        },
        entrance_fee: ENTRANCE_FEE,
        gas_lane: DEFAULT_GAS_LANE,
        subscription_id: 10222,
        callback_gas_limit: CALLBACK_GAS_LIMIT,
        interval: INTERVAL_SECS,
    };

    // subscription 0 is a placeholder until one is created on the mock
    let hardhat = NetworkConfigEntry {
        name: "hardhat".to_string(),
        kind: NetworkKind::Simulated,
        entrance_fee: ENTRANCE_FEE,
        gas_lane: DEFAULT_GAS_LANE,
        subscription_id: 0,
        callback_gas_limit: CALLBACK_GAS_LIMIT,
        interval: INTERVAL_SECS,
    };

    Registry {
        networks: BTreeMap::from([(RINKEBY_CHAIN_ID, rinkeby), (HARDHAT_CHAIN_ID, hardhat)]),
        local_networks: LOCAL_NETWORKS.iter().map(|name| name.to_string()).collect(),
    }
}
