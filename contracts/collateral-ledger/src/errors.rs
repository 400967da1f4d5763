use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractErrors {
    // Core
    AlreadyInit = 1,
    NotStarted = 2,
    Unauthorized = 3,

    // Collateral assets
    AlreadyActive = 10,
    InactiveAsset = 11,

    // Amounts
    ZeroAmount = 20,
    InvalidAmount = 21,
    Overflow = 22,

    // Positions
    InsufficientCollateral = 30,
    InsufficientBalance = 31,
    Safe = 32,

    // Price feeds
    InvalidRate = 40,
    FeedUnavailable = 41,
    StaleRate = 42,

    // Token movements
    TransferFailed = 50,
}
