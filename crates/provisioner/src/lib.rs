//! Provisioning of the VRF coordinator dependency for raffle deployments.
//!
//! On networks listed as local in the [`Registry`](network_config::Registry) a
//! `VRFCoordinatorV2Mock` is deployed first; everywhere else the raffle is
//! pointed at the live coordinator from the registry.

mod cost_model;
mod observer;
mod provision;
mod raffle;
mod runner;
mod steps;

#[cfg(test)]
mod testing;

pub use cost_model::{BASE_FEE, GAS_PRICE_LINK, SimulatedOracleCostModel};
pub use observer::{NoopObserver, ProvisionObserver, TracingObserver};
pub use provision::{MOCK_COORDINATOR, ProvisionContext, provision_if_local};
pub use raffle::{RAFFLE, RaffleArgs};
pub use runner::Runner;
pub use steps::{DeployStep, MocksStep, RaffleStep, StepContext};
