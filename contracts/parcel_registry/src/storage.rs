use soroban_sdk::{contracttype, Address, Env};

use crate::types::{Error, Parcel};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    RentToken,
    Fractions,
    Parcel(u64),
}

pub fn admin(e: &Env) -> Result<Address, Error> {
    e.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInitialized)
}

pub fn set_admin(e: &Env, admin: &Address) {
    e.storage().instance().set(&DataKey::Admin, admin);
}

pub fn rent_token(e: &Env) -> Result<Address, Error> {
    e.storage()
        .instance()
        .get(&DataKey::RentToken)
        .ok_or(Error::NotInitialized)
}

pub fn set_rent_token(e: &Env, token: &Address) {
    e.storage().instance().set(&DataKey::RentToken, token);
}

pub fn fractions(e: &Env) -> Result<Address, Error> {
    e.storage()
        .instance()
        .get(&DataKey::Fractions)
        .ok_or(Error::FractionsNotSet)
}

pub fn set_fractions(e: &Env, fractions: &Address) {
    e.storage().instance().set(&DataKey::Fractions, fractions);
}

pub fn parcel(e: &Env, id: u64) -> Option<Parcel> {
    e.storage().persistent().get(&DataKey::Parcel(id))
}

pub fn put_parcel(e: &Env, parcel: &Parcel) {
    e.storage()
        .persistent()
        .set(&DataKey::Parcel(parcel.id), parcel);
}
