use crate::errors::ContractErrors;
use crate::storage::positions::{Position, PositionsStorageFunc};
use soroban_sdk::{panic_with_error, token, Address, Env};

/// A token movement between an account and the ledger.
pub enum Movement {
    Pull { token: Address, amount: i128 },
    Push { token: Address, amount: i128 },
}

impl Movement {
    pub fn pull(e: &Env, token: &Address, amount: u128) -> Movement {
        Movement::Pull {
            token: token.clone(),
            amount: token_amount(e, amount),
        }
    }

    pub fn push(e: &Env, token: &Address, amount: u128) -> Movement {
        Movement::Push {
            token: token.clone(),
            amount: token_amount(e, amount),
        }
    }
}

fn token_amount(e: &Env, amount: u128) -> i128 {
    i128::try_from(amount).unwrap_or_else(|_| panic_with_error!(e, &ContractErrors::Overflow))
}

/// A movement whose position update has already been stored.
///
/// Only `commit` creates one, so a token contract is never called while a position is half
/// updated.
pub struct Settlement {
    account: Address,
    movement: Movement,
}

/// Stores `position` for `account` (or removes it once empty) and releases the movement.
pub fn commit(e: &Env, account: &Address, position: &Position, movement: Movement) -> Settlement {
    if position.is_empty() {
        e._positions().remove(account);
    } else {
        e._positions().set(account, position);
        e._positions().bump(account);
    }

    Settlement {
        account: account.clone(),
        movement,
    }
}

impl Settlement {
    pub fn execute(self, e: &Env) {
        let ledger: Address = e.current_contract_address();
        let result = match &self.movement {
            Movement::Pull { token, amount } => {
                token::Client::new(e, token).try_transfer(&self.account, &ledger, amount)
            }
            Movement::Push { token, amount } => {
                token::Client::new(e, token).try_transfer(&ledger, &self.account, amount)
            }
        };

        if result.is_err() {
            panic_with_error!(e, &ContractErrors::TransferFailed);
        }
    }
}
