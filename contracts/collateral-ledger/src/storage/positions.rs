use crate::storage::core::DAY_IN_LEDGERS;
use soroban_sdk::{contracttype, Address, Env, Map};

/// Collateral held and debt owed by one account.
///
/// `deposits` only ever holds nonzero amounts, so its keys are the set of assets the account
/// currently holds. An asset is removed from the map the moment its amount reaches zero.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Position {
    pub deposits: Map<Address, u128>,
    pub loan: u128, // Denominated in the unit of account token
}

impl Position {
    pub fn empty(e: &Env) -> Position {
        Position {
            deposits: Map::new(e),
            loan: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.deposits.is_empty() && self.loan == 0
    }

    pub fn deposited(&self, asset: &Address) -> u128 {
        self.deposits.get(asset.clone()).unwrap_or(0)
    }

    /// Stores `amount` as the holding of `asset`, dropping the entry when it is zero.
    pub fn set_deposited(&mut self, asset: &Address, amount: u128) {
        if amount == 0 {
            self.deposits.remove(asset.clone());
        } else {
            self.deposits.set(asset.clone(), amount);
        }
    }
}

#[contracttype]
pub enum PositionsDataKeys {
    Position(Address),
}

pub struct Positions {
    pub env: Env,
}

impl Positions {
    #[inline(always)]
    fn new(e: &Env) -> Positions {
        Positions { env: e.clone() }
    }

    pub fn get(&self, account: &Address) -> Option<Position> {
        self.env
            .storage()
            .persistent()
            .get(&PositionsDataKeys::Position(account.clone()))
    }

    /// Stored position of `account`, or an empty one if it never deposited.
    pub fn position(&self, account: &Address) -> Position {
        self.get(account).unwrap_or(Position::empty(&self.env))
    }

    pub fn set(&self, account: &Address, position: &Position) {
        self.env
            .storage()
            .persistent()
            .set(&PositionsDataKeys::Position(account.clone()), position);
    }

    pub fn bump(&self, account: &Address) {
        self.env.storage().persistent().extend_ttl(
            &PositionsDataKeys::Position(account.clone()),
            DAY_IN_LEDGERS,
            DAY_IN_LEDGERS * 30,
        );
    }

    pub fn remove(&self, account: &Address) {
        self.env
            .storage()
            .persistent()
            .remove(&PositionsDataKeys::Position(account.clone()))
    }
}

pub trait PositionsStorageFunc {
    fn _positions(&self) -> Positions;
}

impl PositionsStorageFunc for Env {
    fn _positions(&self) -> Positions {
        Positions::new(self)
    }
}
