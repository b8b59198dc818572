use soroban_sdk::{contracttype, Address, Env};

use crate::error::Error;
use crate::types::{Proposal, RentAccount};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    // instance
    Owner,
    Registry,
    RentToken,
    ProposalCount,
    NonSharesRents,
    // persistent, per parcel
    Meterage(u64),
    Locks(u64),
    RentTotal(u64),
    RentDust(u64),
    Balance(u64, Address),
    RentAccount(u64, Address),
    // persistent, per proposal
    Proposal(u64),
    Voted(u64, Address),
}

fn config(e: &Env, key: &DataKey) -> Result<Address, Error> {
    e.storage().instance().get(key).ok_or(Error::NotInitialized)
}

pub fn owner(e: &Env) -> Result<Address, Error> {
    config(e, &DataKey::Owner)
}

pub fn set_owner(e: &Env, owner: &Address) {
    e.storage().instance().set(&DataKey::Owner, owner);
}

pub fn registry(e: &Env) -> Result<Address, Error> {
    config(e, &DataKey::Registry)
}

pub fn set_registry(e: &Env, registry: &Address) {
    e.storage().instance().set(&DataKey::Registry, registry);
}

pub fn rent_token(e: &Env) -> Result<Address, Error> {
    config(e, &DataKey::RentToken)
}

pub fn set_rent_token(e: &Env, token: &Address) {
    e.storage().instance().set(&DataKey::RentToken, token);
}

// ── shares ──

pub fn balance(e: &Env, parcel_id: u64, holder: &Address) -> i128 {
    e.storage()
        .persistent()
        .get(&DataKey::Balance(parcel_id, holder.clone()))
        .unwrap_or(0)
}

pub fn set_balance(e: &Env, parcel_id: u64, holder: &Address, amount: i128) {
    let key = DataKey::Balance(parcel_id, holder.clone());
    if amount == 0 {
        e.storage().persistent().remove(&key);
    } else {
        e.storage().persistent().set(&key, &amount);
    }
}

pub fn meterage(e: &Env, parcel_id: u64) -> Option<i128> {
    e.storage().persistent().get(&DataKey::Meterage(parcel_id))
}

pub fn set_meterage(e: &Env, parcel_id: u64, meterage: i128) {
    e.storage()
        .persistent()
        .set(&DataKey::Meterage(parcel_id), &meterage);
}

pub fn remove_meterage(e: &Env, parcel_id: u64) {
    e.storage().persistent().remove(&DataKey::Meterage(parcel_id));
}

pub fn locks(e: &Env, parcel_id: u64) -> u32 {
    e.storage()
        .persistent()
        .get(&DataKey::Locks(parcel_id))
        .unwrap_or(0)
}

pub fn set_locks(e: &Env, parcel_id: u64, count: u32) {
    e.storage().persistent().set(&DataKey::Locks(parcel_id), &count);
}

// ── proposals ──

pub fn next_proposal_id(e: &Env) -> u64 {
    let mut n: u64 = e
        .storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0);
    n += 1;
    e.storage().instance().set(&DataKey::ProposalCount, &n);
    n
}

pub fn proposal_count(e: &Env) -> u64 {
    e.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0)
}

pub fn proposal(e: &Env, id: u64) -> Option<Proposal> {
    e.storage().persistent().get(&DataKey::Proposal(id))
}

pub fn put_proposal(e: &Env, proposal: &Proposal) {
    e.storage()
        .persistent()
        .set(&DataKey::Proposal(proposal.id), proposal);
}

pub fn has_voted(e: &Env, id: u64, voter: &Address) -> bool {
    e.storage()
        .persistent()
        .has(&DataKey::Voted(id, voter.clone()))
}

pub fn set_voted(e: &Env, id: u64, voter: &Address) {
    e.storage()
        .persistent()
        .set(&DataKey::Voted(id, voter.clone()), &true);
}

// ── rent ──

pub fn rent_total(e: &Env, parcel_id: u64) -> i128 {
    e.storage()
        .persistent()
        .get(&DataKey::RentTotal(parcel_id))
        .unwrap_or(0)
}

pub fn set_rent_total(e: &Env, parcel_id: u64, total: i128) {
    e.storage()
        .persistent()
        .set(&DataKey::RentTotal(parcel_id), &total);
}

pub fn rent_dust(e: &Env, parcel_id: u64) -> i128 {
    e.storage()
        .persistent()
        .get(&DataKey::RentDust(parcel_id))
        .unwrap_or(0)
}

pub fn set_rent_dust(e: &Env, parcel_id: u64, dust: i128) {
    e.storage()
        .persistent()
        .set(&DataKey::RentDust(parcel_id), &dust);
}

pub fn rent_account(e: &Env, parcel_id: u64, holder: &Address) -> RentAccount {
    e.storage()
        .persistent()
        .get(&DataKey::RentAccount(parcel_id, holder.clone()))
        .unwrap_or_default()
}

pub fn put_rent_account(e: &Env, parcel_id: u64, holder: &Address, account: &RentAccount) {
    e.storage()
        .persistent()
        .set(&DataKey::RentAccount(parcel_id, holder.clone()), account);
}

pub fn non_shares_rents(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::NonSharesRents)
        .unwrap_or(0)
}

pub fn set_non_shares_rents(e: &Env, amount: i128) {
    e.storage()
        .instance()
        .set(&DataKey::NonSharesRents, &amount);
}
