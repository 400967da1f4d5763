use soroban_sdk::{contractclient, contracttype, Env};

/// Latest exchange rate reported by a feed, `rate / 10^decimals` units of account per asset unit.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeedRate {
    pub rate: i128,
    pub decimals: u32,
    pub timestamp: u64, // Ledger timestamp of the last update
}

/// Interface every collateral price feed must expose.
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeedInterface {
    fn latest_rate(e: Env) -> FeedRate;
}
