//! Proportional rent accounting.
//!
//! Each parcel keeps a running total of rent split to it. A holder's share
//! of everything split since their last checkpoint is
//! `balance * (total - checkpoint) / meterage`, rounded down. Holders are
//! settled before any change to their balance, so rent always follows the
//! shares that were held when it was split. The truncated part of every
//! settlement is collected per parcel in 1/meterage units and moved to the
//! platform pool a whole unit at a time.

use soroban_sdk::{log, token, Address, Env};

use crate::error::Error;
use crate::events;
use crate::registry::ParcelRegistryClient;
use crate::storage;
use crate::types::ShareHolderInfo;

/// Folds rent accrued at the holder's current balance into `credited` and
/// moves the checkpoint up to the parcel's running total.
pub fn settle(e: &Env, parcel_id: u64, holder: &Address) {
    let total = storage::rent_total(e, parcel_id);
    let mut account = storage::rent_account(e, parcel_id, holder);
    if account.checkpoint == total {
        return;
    }

    let delta = total - account.checkpoint;
    let balance = storage::balance(e, parcel_id, holder);
    if balance > 0 {
        if let Some(meterage) = storage::meterage(e, parcel_id) {
            let exact = balance * delta;
            account.credited += exact / meterage;
            collect_dust(e, parcel_id, exact % meterage, meterage);
        }
    }
    account.checkpoint = total;
    storage::put_rent_account(e, parcel_id, holder, &account);
}

fn collect_dust(e: &Env, parcel_id: u64, remainder: i128, meterage: i128) {
    if remainder == 0 {
        return;
    }
    let dust = storage::rent_dust(e, parcel_id) + remainder;
    if dust >= meterage {
        let pool = storage::non_shares_rents(e);
        storage::set_non_shares_rents(e, pool + dust / meterage);
    }
    storage::set_rent_dust(e, parcel_id, dust % meterage);
}

pub fn claimable(e: &Env, parcel_id: u64, holder: &Address) -> i128 {
    let account = storage::rent_account(e, parcel_id, holder);
    let delta = storage::rent_total(e, parcel_id) - account.checkpoint;
    let balance = storage::balance(e, parcel_id, holder);
    let accrued = match storage::meterage(e, parcel_id) {
        Some(meterage) if balance > 0 && delta > 0 => balance * delta / meterage,
        _ => 0,
    };
    account.credited + accrued
}

pub fn share_holder_info(e: &Env, parcel_id: u64, holder: Address) -> ShareHolderInfo {
    ShareHolderInfo {
        balance: storage::balance(e, parcel_id, &holder),
        claimable: claimable(e, parcel_id, &holder),
        holder,
    }
}

/// Pulls the parcel's accrued rent from the registry and makes it claimable.
pub fn split(e: &Env, parcel_id: u64) -> Result<i128, Error> {
    if storage::meterage(e, parcel_id).is_none() {
        return Err(Error::TokenIdNotSet);
    }
    let registry = ParcelRegistryClient::new(e, &storage::registry(e)?);
    let amount = registry.rent_due(&parcel_id);
    if amount <= 0 {
        return Err(Error::InvalidRentAmountToWithdraw);
    }

    let total = storage::rent_total(e, parcel_id);
    storage::set_rent_total(e, parcel_id, total + amount);

    let received = registry.withdraw_rent(&e.current_contract_address(), &parcel_id);
    if received != amount {
        log!(e, "registry paid out a different rent amount", parcel_id, amount, received);
        return Err(Error::InvalidRentAmountToWithdraw);
    }

    events::rent_split(e, parcel_id, amount);
    Ok(amount)
}

pub fn withdraw(e: &Env, holder: &Address, parcel_id: u64) -> Result<i128, Error> {
    settle(e, parcel_id, holder);
    let mut account = storage::rent_account(e, parcel_id, holder);
    let amount = account.credited;
    if amount <= 0 {
        return Err(Error::InvalidRentAmountToWithdraw);
    }

    let token = token::Client::new(e, &storage::rent_token(e)?);
    let this = e.current_contract_address();
    if token.balance(&this) < amount {
        return Err(Error::AddressInsufficientBalance);
    }

    account.credited = 0;
    storage::put_rent_account(e, parcel_id, holder, &account);
    token.transfer(&this, holder, &amount);

    events::rent_withdrawn(e, parcel_id, holder, amount);
    Ok(amount)
}

pub fn withdraw_pool(e: &Env, owner: &Address) -> Result<i128, Error> {
    let amount = storage::non_shares_rents(e);
    if amount <= 0 {
        return Err(Error::InvalidRentAmountToWithdraw);
    }

    let token = token::Client::new(e, &storage::rent_token(e)?);
    let this = e.current_contract_address();
    if token.balance(&this) < amount {
        return Err(Error::AddressInsufficientBalance);
    }

    storage::set_non_shares_rents(e, 0);
    token.transfer(&this, owner, &amount);

    events::pool_withdrawn(e, owner, amount);
    Ok(amount)
}
