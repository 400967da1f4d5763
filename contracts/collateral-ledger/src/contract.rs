use crate::errors::ContractErrors;
use crate::events;
use crate::storage::assets::{Asset, AssetsDataFunc};
use crate::storage::core::{CoreFunc, CoreState};
use crate::storage::positions::{Position, PositionsStorageFunc};
use crate::utils::core::{core_state, validate, Role};
use crate::utils::settlement::{commit, Movement};
use crate::utils::valuation::{active_asset, convert, total_value};
use soroban_sdk::{
    contract, contractimpl, log, panic_with_error, Address, BytesN, Env, Vec,
};

pub trait CollateralLedgerContractTrait {
    fn init(
        e: Env,
        admin: Address,
        collateral_manager: Address,
        liquidator: Address,
        unit_token: Address,
        max_feed_age: u64,
    );
    fn get_core_state(e: Env) -> CoreState;
    fn set_admin(e: Env, address: Address);
    fn set_collateral_manager(e: Env, address: Address);
    fn set_liquidator(e: Env, address: Address);
    fn set_max_feed_age(e: Env, max_feed_age: u64);
    fn upgrade(e: Env, hash: BytesN<32>);

    // Collateral assets
    fn add_collateral(e: Env, caller: Address, asset: Address, feed: Address);
    fn get_asset(e: Env, asset: Address) -> Asset;
    fn get_assets(e: Env) -> Vec<Address>;

    // Valuation
    fn convert(e: Env, asset: Address, amount: u128) -> u128;
    fn total_value(e: Env, account: Address) -> u128;
    fn available_credit(e: Env, account: Address) -> u128;
    fn is_liquidatable(e: Env, account: Address) -> bool;

    // Positions
    fn get_position(e: Env, account: Address) -> Position;
    fn holdings(e: Env, account: Address) -> Vec<Address>;
    fn deposit(e: Env, account: Address, asset: Address, amount: u128);
    fn withdraw(e: Env, account: Address, asset: Address, amount: u128);
    fn borrow(e: Env, account: Address, amount: u128);
    fn repay(e: Env, account: Address, amount: u128);

    // Liquidation
    fn liquidate(e: Env, liquidator: Address, account: Address);
}

#[contract]
pub struct CollateralLedgerContract;

#[contractimpl]
impl CollateralLedgerContractTrait for CollateralLedgerContract {
    fn init(
        e: Env,
        admin: Address,
        collateral_manager: Address,
        liquidator: Address,
        unit_token: Address,
        max_feed_age: u64,
    ) {
        e.bump_instance();
        if e.core_state().is_some() {
            panic_with_error!(&e, &ContractErrors::AlreadyInit);
        }

        e.set_core_state(&CoreState {
            admin,
            collateral_manager,
            liquidator,
            unit_token,
            max_feed_age,
        });
    }

    fn get_core_state(e: Env) -> CoreState {
        e.bump_instance();
        core_state(&e)
    }

    fn set_admin(e: Env, address: Address) {
        e.bump_instance();
        let mut core_state: CoreState = core_state(&e);
        core_state.admin.require_auth();
        log!(&e, "admin replaced", core_state.admin, address);
        core_state.admin = address;
        e.set_core_state(&core_state);
    }

    fn set_collateral_manager(e: Env, address: Address) {
        e.bump_instance();
        let mut core_state: CoreState = core_state(&e);
        core_state.admin.require_auth();
        log!(&e, "collateral manager replaced", core_state.collateral_manager, address);
        core_state.collateral_manager = address;
        e.set_core_state(&core_state);
    }

    fn set_liquidator(e: Env, address: Address) {
        e.bump_instance();
        let mut core_state: CoreState = core_state(&e);
        core_state.admin.require_auth();
        log!(&e, "liquidator replaced", core_state.liquidator, address);
        core_state.liquidator = address;
        e.set_core_state(&core_state);
    }

    fn set_max_feed_age(e: Env, max_feed_age: u64) {
        e.bump_instance();
        let mut core_state: CoreState = core_state(&e);
        core_state.admin.require_auth();
        core_state.max_feed_age = max_feed_age;
        e.set_core_state(&core_state);
    }

    fn upgrade(e: Env, hash: BytesN<32>) {
        e.bump_instance();
        core_state(&e).admin.require_auth();
        e.deployer().update_current_contract_wasm(hash);
    }

    fn add_collateral(e: Env, caller: Address, asset: Address, feed: Address) {
        e.bump_instance();
        validate(&e, Role::CollateralManager, &caller);

        if e._assets().asset(&asset).is_some() {
            panic_with_error!(&e, &ContractErrors::AlreadyActive);
        }

        e._assets().set_asset(&Asset {
            id: asset.clone(),
            feed: feed.clone(),
            active: true,
        });
        e._assets().bump_asset(&asset);
        e._assets().push_to_list(&asset);

        events::collateral_added(&e, &asset, &feed);
    }

    fn get_asset(e: Env, asset: Address) -> Asset {
        e.bump_instance();
        let asset: Asset = active_asset(&e, &asset);
        e._assets().bump_asset(&asset.id);
        asset
    }

    fn get_assets(e: Env) -> Vec<Address> {
        e.bump_instance();
        e._assets().list()
    }

    fn convert(e: Env, asset: Address, amount: u128) -> u128 {
        e.bump_instance();
        let max_feed_age: u64 = core_state(&e).max_feed_age;
        convert(&e, &active_asset(&e, &asset), amount, max_feed_age)
    }

    fn total_value(e: Env, account: Address) -> u128 {
        e.bump_instance();
        let max_feed_age: u64 = core_state(&e).max_feed_age;
        total_value(&e, &e._positions().position(&account), max_feed_age)
    }

    fn available_credit(e: Env, account: Address) -> u128 {
        e.bump_instance();
        let max_feed_age: u64 = core_state(&e).max_feed_age;
        let position: Position = e._positions().position(&account);
        total_value(&e, &position, max_feed_age).saturating_sub(position.loan)
    }

    fn is_liquidatable(e: Env, account: Address) -> bool {
        e.bump_instance();
        let max_feed_age: u64 = core_state(&e).max_feed_age;
        let position: Position = e._positions().position(&account);
        total_value(&e, &position, max_feed_age) < position.loan
    }

    fn get_position(e: Env, account: Address) -> Position {
        e.bump_instance();
        if e._positions().get(&account).is_some() {
            e._positions().bump(&account);
        }
        e._positions().position(&account)
    }

    fn holdings(e: Env, account: Address) -> Vec<Address> {
        e.bump_instance();
        e._positions().position(&account).deposits.keys()
    }

    fn deposit(e: Env, account: Address, asset: Address, amount: u128) {
        e.bump_instance();
        account.require_auth();
        let asset: Asset = active_asset(&e, &asset);

        if amount == 0 {
            panic_with_error!(&e, &ContractErrors::ZeroAmount);
        }

        let movement: Movement = Movement::pull(&e, &asset.id, amount);

        let mut position: Position = e._positions().position(&account);
        let deposited: u128 = position
            .deposited(&asset.id)
            .checked_add(amount)
            .unwrap_or_else(|| panic_with_error!(&e, &ContractErrors::Overflow));
        position.set_deposited(&asset.id, deposited);

        commit(&e, &account, &position, movement).execute(&e);

        events::deposit(&e, &account, &asset.id, amount);
        e._assets().bump_asset(&asset.id);
    }

    fn withdraw(e: Env, account: Address, asset: Address, amount: u128) {
        e.bump_instance();
        account.require_auth();
        let asset: Asset = active_asset(&e, &asset);

        if amount == 0 {
            panic_with_error!(&e, &ContractErrors::ZeroAmount);
        }

        let mut position: Position = e._positions().position(&account);
        let held: u128 = position.deposited(&asset.id);

        if held < amount {
            panic_with_error!(&e, &ContractErrors::InsufficientCollateral);
        }

        // Both values come from the current feed rates, the withdrawn asset still counted in the total
        let max_feed_age: u64 = core_state(&e).max_feed_age;
        let collateral_value: u128 = total_value(&e, &position, max_feed_age);
        let withdrawn_value: u128 = convert(&e, &asset, amount, max_feed_age);
        let remaining_value: u128 = collateral_value
            .checked_sub(withdrawn_value)
            .unwrap_or_else(|| panic_with_error!(&e, &ContractErrors::Overflow));

        if remaining_value < position.loan {
            panic_with_error!(&e, &ContractErrors::InsufficientBalance);
        }

        let movement: Movement = Movement::push(&e, &asset.id, amount);
        position.set_deposited(&asset.id, held - amount);

        commit(&e, &account, &position, movement).execute(&e);

        events::withdraw(&e, &account, &asset.id, amount);
        e._assets().bump_asset(&asset.id);
    }

    fn borrow(e: Env, account: Address, amount: u128) {
        e.bump_instance();
        account.require_auth();
        let core_state: CoreState = core_state(&e);

        let mut position: Position = e._positions().position(&account);
        let collateral_value: u128 = total_value(&e, &position, core_state.max_feed_age);

        if amount > collateral_value.saturating_sub(position.loan) {
            panic_with_error!(&e, &ContractErrors::InsufficientCollateral);
        }

        let movement: Movement = Movement::push(&e, &core_state.unit_token, amount);
        position.loan = position
            .loan
            .checked_add(amount)
            .unwrap_or_else(|| panic_with_error!(&e, &ContractErrors::Overflow));

        commit(&e, &account, &position, movement).execute(&e);

        events::borrow(&e, &account, amount);
    }

    fn repay(e: Env, account: Address, amount: u128) {
        e.bump_instance();
        account.require_auth();
        let core_state: CoreState = core_state(&e);

        let mut position: Position = e._positions().position(&account);

        if amount > position.loan {
            panic_with_error!(&e, &ContractErrors::InvalidAmount);
        }

        let movement: Movement = Movement::pull(&e, &core_state.unit_token, amount);
        position.loan -= amount;

        commit(&e, &account, &position, movement).execute(&e);

        events::repay(&e, &account, amount);
    }

    fn liquidate(e: Env, liquidator: Address, account: Address) {
        e.bump_instance();
        validate(&e, Role::Liquidator, &liquidator);
        let core_state: CoreState = core_state(&e);

        let position: Position = e._positions().position(&account);
        let collateral_value: u128 = total_value(&e, &position, core_state.max_feed_age);

        if collateral_value >= position.loan {
            panic_with_error!(&e, &ContractErrors::Safe);
        }

        // The collateral stays in the ledger, nothing is paid out to the liquidator
        e._positions().remove(&account);

        log!(&e, "position liquidated", account, position.loan, collateral_value);
        events::liquidate(&e, &account, position.loan, collateral_value);
    }
}
