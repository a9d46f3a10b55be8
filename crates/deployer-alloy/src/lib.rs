mod accounts;
mod artifact;
mod deployer;
mod store;

pub use accounts::{DEV_PRIVATE_KEY, LocalAccounts, signer_from_key};
pub use artifact::Artifact;
pub use deployer::AlloyDeployer;
pub use store::FileStore;
