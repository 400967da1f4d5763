use crate::errors::ContractErrors;
use crate::storage::core::{CoreFunc, CoreState};
use soroban_sdk::{panic_with_error, Address, Env};

pub enum Role {
    CollateralManager,
    Liquidator,
}

pub fn core_state(e: &Env) -> CoreState {
    e.core_state()
        .unwrap_or_else(|| panic_with_error!(e, &ContractErrors::NotStarted))
}

/// Rejects a `caller` that doesn't hold `role`, then requires its signature.
pub fn validate(e: &Env, role: Role, caller: &Address) {
    let core_state: CoreState = core_state(e);
    let holder: Address = match role {
        Role::CollateralManager => core_state.collateral_manager,
        Role::Liquidator => core_state.liquidator,
    };

    if &holder != caller {
        panic_with_error!(e, &ContractErrors::Unauthorized);
    }

    caller.require_auth();
}

pub fn unwrap_or_panic<T>(e: &Env, result: Result<T, ContractErrors>) -> T {
    result.unwrap_or_else(|error| panic_with_error!(e, error))
}
