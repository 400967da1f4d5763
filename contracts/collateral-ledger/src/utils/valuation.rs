use crate::errors::ContractErrors;
use crate::feeds::{FeedRate, PriceFeedClient};
use crate::storage::assets::{Asset, AssetsDataFunc};
use crate::storage::positions::Position;
use crate::utils::core::unwrap_or_panic;
use soroban_sdk::{log, panic_with_error, Address, Env, U256};

/// `u128::MAX * i128::MAX` is below 10^77, so past this many decimals every value floors to zero.
const MAX_PRECISION_DECIMALS: u32 = 76;

/// Converts `amount` of an asset into the unit of account: `amount * rate / 10^decimals`.
///
/// The product is computed in 256 bits and the division floors, so the result never overstates
/// the collateral value. Only a quotient above `u128::MAX` is an `Overflow`.
pub fn scale_to_unit(
    e: &Env,
    amount: u128,
    rate: i128,
    decimals: u32,
) -> Result<u128, ContractErrors> {
    if rate <= 0 {
        return Err(ContractErrors::InvalidRate);
    }

    if decimals > MAX_PRECISION_DECIMALS {
        return Ok(0);
    }

    let precision: U256 = U256::from_u32(e, 10).pow(decimals);

    U256::from_u128(e, amount)
        .mul(&U256::from_u128(e, rate as u128))
        .div(&precision)
        .to_u128()
        .ok_or(ContractErrors::Overflow)
}

pub fn active_asset(e: &Env, id: &Address) -> Asset {
    match e._assets().asset(id) {
        Some(asset) if asset.active => asset,
        _ => panic_with_error!(e, &ContractErrors::InactiveAsset),
    }
}

/// Reads the feed of `asset`, rejecting stale reports when `max_feed_age` is set.
pub fn latest_rate(e: &Env, asset: &Asset, max_feed_age: u64) -> FeedRate {
    let feed_rate: FeedRate = match PriceFeedClient::new(e, &asset.feed).try_latest_rate() {
        Ok(Ok(feed_rate)) => feed_rate,
        _ => {
            log!(e, "price feed unavailable", asset.id, asset.feed);
            panic_with_error!(e, &ContractErrors::FeedUnavailable)
        }
    };

    if max_feed_age > 0
        && feed_rate.timestamp < e.ledger().timestamp().saturating_sub(max_feed_age)
    {
        panic_with_error!(e, &ContractErrors::StaleRate);
    }

    feed_rate
}

pub fn convert(e: &Env, asset: &Asset, amount: u128, max_feed_age: u64) -> u128 {
    let feed_rate: FeedRate = latest_rate(e, asset, max_feed_age);
    unwrap_or_panic(
        e,
        scale_to_unit(e, amount, feed_rate.rate, feed_rate.decimals),
    )
}

/// Sums the converted value of every asset the position holds.
pub fn total_value(e: &Env, position: &Position, max_feed_age: u64) -> u128 {
    let mut total: u128 = 0;
    for (id, amount) in position.deposits.iter() {
        let value: u128 = convert(e, &active_asset(e, &id), amount, max_feed_age);
        total = unwrap_or_panic(e, total.checked_add(value).ok_or(ContractErrors::Overflow));
    }

    total
}
