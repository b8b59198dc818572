use soroban_sdk::{Address, Env, Vec};

use crate::error::Error;
use crate::events;
use crate::registry::ParcelRegistryClient;
use crate::rent;
use crate::storage;

pub fn transfer(
    e: &Env,
    from: &Address,
    to: &Address,
    parcel_id: u64,
    amount: i128,
) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }
    if storage::locks(e, parcel_id) > 0 {
        return Err(Error::TokenLocked);
    }
    let from_balance = storage::balance(e, parcel_id, from);
    if from_balance < amount {
        return Err(Error::InsufficientBalance);
    }

    rent::settle(e, parcel_id, from);
    rent::settle(e, parcel_id, to);

    storage::set_balance(e, parcel_id, from, from_balance - amount);
    let to_balance = storage::balance(e, parcel_id, to);
    storage::set_balance(e, parcel_id, to, to_balance + amount);

    events::transfer(e, from, to, parcel_id, amount);
    Ok(())
}

pub fn batch_transfer(
    e: &Env,
    from: &Address,
    to: &Address,
    parcel_ids: &Vec<u64>,
    amounts: &Vec<i128>,
) -> Result<(), Error> {
    if parcel_ids.len() != amounts.len() {
        return Err(Error::LengthMismatch);
    }
    for (parcel_id, amount) in parcel_ids.iter().zip(amounts.iter()) {
        transfer(e, from, to, parcel_id, amount)?;
    }
    Ok(())
}

/// Creates the full share supply of a parcel. The amount minted becomes the
/// parcel's meterage.
pub fn mint(e: &Env, to: &Address, parcel_id: u64, amount: i128) -> Result<(), Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    if storage::meterage(e, parcel_id).is_some() {
        return Err(Error::AlreadyFractionized);
    }

    // pins the checkpoint so rent from an earlier fractionization is not
    // credited to the new supply
    rent::settle(e, parcel_id, to);

    storage::set_meterage(e, parcel_id, amount);
    storage::set_balance(e, parcel_id, to, amount);

    events::mint(e, to, parcel_id, amount);
    Ok(())
}

pub fn mint_batch(
    e: &Env,
    to: &Address,
    parcel_ids: &Vec<u64>,
    amounts: &Vec<i128>,
) -> Result<(), Error> {
    if parcel_ids.len() != amounts.len() {
        return Err(Error::LengthMismatch);
    }
    for (parcel_id, amount) in parcel_ids.iter().zip(amounts.iter()) {
        mint(e, to, parcel_id, amount)?;
    }
    Ok(())
}

/// Burns a sole holder's shares and returns the parcel to them.
pub fn rebuild(e: &Env, caller: &Address, parcel_id: u64) -> Result<(), Error> {
    let meterage = storage::meterage(e, parcel_id).ok_or(Error::TokenIdNotSet)?;
    if storage::locks(e, parcel_id) > 0 {
        return Err(Error::TokenLocked);
    }
    let balance = storage::balance(e, parcel_id, caller);
    if balance != meterage {
        return Err(Error::OwnerDoesNotOwnAllTokens);
    }
    let registry = storage::registry(e)?;

    rent::settle(e, parcel_id, caller);
    storage::set_balance(e, parcel_id, caller, 0);
    storage::remove_meterage(e, parcel_id);
    events::burn(e, caller, parcel_id, balance);

    ParcelRegistryClient::new(e, &registry).release(
        &e.current_contract_address(),
        &parcel_id,
        caller,
    );
    Ok(())
}
