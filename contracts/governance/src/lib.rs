#![no_std]

mod contract;
mod executor;
mod offchain;
mod storage;
mod threshold;
mod types;

pub use contract::{GovernanceContract, GovernanceContractClient};
pub use shared::GovernanceError;
pub use threshold::ThresholdPolicy;
pub use types::{Quorum, Transaction};
