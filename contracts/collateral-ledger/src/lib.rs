#![no_std]

mod contract;
mod errors;
mod events;
mod feeds;
mod storage;
mod utils;

pub use crate::contract::{CollateralLedgerContract, CollateralLedgerContractClient};
pub use crate::errors::ContractErrors;
pub use crate::feeds::{FeedRate, PriceFeedClient, PriceFeedInterface};
