use crate::storage::core::DAY_IN_LEDGERS;
use soroban_sdk::{contracttype, Address, Env, Vec};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Asset {
    pub id: Address,   // Token contract of the collateral
    pub feed: Address, // Price feed quoting the collateral in the unit of account
    pub active: bool,
}

#[contracttype]
pub enum AssetsDataKeys {
    Asset(Address),

    /// Every approved asset in the order it was added
    List,
}

pub struct Assets {
    pub env: Env,
}

impl Assets {
    #[inline(always)]
    pub fn new(e: &Env) -> Assets {
        Assets { env: e.clone() }
    }

    pub fn asset(&self, id: &Address) -> Option<Asset> {
        self.env
            .storage()
            .persistent()
            .get(&AssetsDataKeys::Asset(id.clone()))
    }

    pub fn set_asset(&self, asset: &Asset) {
        self.env
            .storage()
            .persistent()
            .set(&AssetsDataKeys::Asset(asset.id.clone()), asset);
    }

    pub fn bump_asset(&self, id: &Address) {
        self.env.storage().persistent().extend_ttl(
            &AssetsDataKeys::Asset(id.clone()),
            DAY_IN_LEDGERS,
            DAY_IN_LEDGERS * 30,
        );
    }

    pub fn list(&self) -> Vec<Address> {
        self.env
            .storage()
            .instance()
            .get(&AssetsDataKeys::List)
            .unwrap_or(Vec::new(&self.env))
    }

    pub fn push_to_list(&self, id: &Address) {
        let mut list: Vec<Address> = self.list();
        list.push_back(id.clone());
        self.env.storage().instance().set(&AssetsDataKeys::List, &list);
    }
}

pub trait AssetsDataFunc {
    fn _assets(&self) -> Assets;
}

impl AssetsDataFunc for Env {
    #[inline(always)]
    fn _assets(&self) -> Assets {
        Assets::new(self)
    }
}
