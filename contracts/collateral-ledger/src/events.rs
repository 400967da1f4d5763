use soroban_sdk::{symbol_short, Address, Env};

pub fn collateral_added(e: &Env, asset: &Address, feed: &Address) {
    e.events()
        .publish((symbol_short!("col_added"), asset.clone()), feed.clone());
}

pub fn deposit(e: &Env, account: &Address, asset: &Address, amount: u128) {
    e.events()
        .publish((symbol_short!("deposit"), account.clone()), (asset.clone(), amount));
}

pub fn withdraw(e: &Env, account: &Address, asset: &Address, amount: u128) {
    e.events()
        .publish((symbol_short!("withdraw"), account.clone()), (asset.clone(), amount));
}

pub fn borrow(e: &Env, account: &Address, amount: u128) {
    e.events()
        .publish((symbol_short!("borrow"), account.clone()), amount);
}

pub fn repay(e: &Env, account: &Address, amount: u128) {
    e.events()
        .publish((symbol_short!("repay"), account.clone()), amount);
}

pub fn liquidate(e: &Env, account: &Address, written_off_loan: u128, collateral_value: u128) {
    e.events().publish(
        (symbol_short!("liquidate"), account.clone()),
        (written_off_loan, collateral_value),
    );
}
