use soroban_sdk::{contracttype, Address, Env};

pub const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_BUMP_CONSTANT: u32 = DAY_IN_LEDGERS * 28;
pub const INSTANCE_BUMP_CONSTANT_THRESHOLD: u32 = DAY_IN_LEDGERS * 14;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CoreState {
    pub admin: Address,
    pub collateral_manager: Address,
    pub liquidator: Address,
    pub unit_token: Address, // Token every collateral value is converted into and loans are paid in
    pub max_feed_age: u64,   // Seconds, 0 disables the freshness check
}

#[contracttype]
pub enum CoreDataKeys {
    CoreState,
}

pub trait CoreFunc {
    fn set_core_state(&self, core_state: &CoreState);
    fn core_state(&self) -> Option<CoreState>;
    fn bump_instance(&self);
}

impl CoreFunc for Env {
    fn set_core_state(&self, core_state: &CoreState) {
        self.storage()
            .instance()
            .set(&CoreDataKeys::CoreState, core_state);
    }

    fn core_state(&self) -> Option<CoreState> {
        self.storage().instance().get(&CoreDataKeys::CoreState)
    }

    fn bump_instance(&self) {
        self.storage()
            .instance()
            .extend_ttl(INSTANCE_BUMP_CONSTANT_THRESHOLD, INSTANCE_BUMP_CONSTANT);
    }
}
