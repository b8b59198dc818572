#![no_std]
use soroban_sdk::{
    contract, contractclient, contractimpl, symbol_short, token, Address, Env, Vec,
};

mod storage;
mod types;

pub use types::{Error, Parcel};

/// The share ledger that takes custody of fractionized parcels.
#[contractclient(name = "ParcelFractionsClient")]
pub trait ParcelFractionsInterface {
    fn mint(e: Env, from: Address, to: Address, parcel_id: u64, amount: i128);
}

#[contract]
pub struct ParcelRegistry;

#[contractimpl]
impl ParcelRegistry {
    pub fn __constructor(e: Env, admin: Address, rent_token: Address) {
        storage::set_admin(&e, &admin);
        storage::set_rent_token(&e, &rent_token);
    }

    pub fn admin(e: Env) -> Result<Address, Error> {
        storage::admin(&e)
    }

    pub fn rent_token(e: Env) -> Result<Address, Error> {
        storage::rent_token(&e)
    }

    pub fn fractions(e: Env) -> Result<Address, Error> {
        storage::fractions(&e)
    }

    /// Points the registry at the share ledger used by `fractionize`.
    /// Only admin may call.
    pub fn set_fractions(e: Env, fractions: Address) -> Result<(), Error> {
        storage::admin(&e)?.require_auth();
        storage::set_fractions(&e, &fractions);
        Ok(())
    }

    /// Sets the share count of parcels that have not been minted yet.
    /// Only admin may call.
    pub fn set_meterages(e: Env, parcel_ids: Vec<u64>, meterages: Vec<i128>) -> Result<(), Error> {
        storage::admin(&e)?.require_auth();
        if parcel_ids.len() != meterages.len() {
            return Err(Error::LengthMismatch);
        }

        for (id, meterage) in parcel_ids.iter().zip(meterages.iter()) {
            if meterage <= 0 {
                return Err(Error::InvalidMeterage);
            }
            let parcel = match storage::parcel(&e, id) {
                Some(p) if p.owner.is_some() => return Err(Error::ParcelAlreadyMinted),
                Some(p) => Parcel { meterage, ..p },
                None => Parcel {
                    id,
                    meterage,
                    owner: None,
                    resident: None,
                    rent_fee: 0,
                    rent_due: 0,
                },
            };
            storage::put_parcel(&e, &parcel);
            e.events()
                .publish((symbol_short!("meterage"), id), meterage);
        }
        Ok(())
    }

    /// Only admin may call.
    pub fn mint(e: Env, to: Address, parcel_id: u64) -> Result<(), Error> {
        storage::admin(&e)?.require_auth();
        Self::mint_one(&e, &to, parcel_id)
    }

    /// Only admin may call.
    pub fn batch_mint(e: Env, to: Address, parcel_ids: Vec<u64>) -> Result<(), Error> {
        storage::admin(&e)?.require_auth();
        for id in parcel_ids.iter() {
            Self::mint_one(&e, &to, id)?;
        }
        Ok(())
    }

    pub fn parcel(e: Env, parcel_id: u64) -> Result<Parcel, Error> {
        Self::load(&e, parcel_id)
    }

    pub fn owner_of(e: Env, parcel_id: u64) -> Result<Address, Error> {
        Self::load(&e, parcel_id)?
            .owner
            .ok_or(Error::ParcelNotFound)
    }

    pub fn meterage(e: Env, parcel_id: u64) -> Result<i128, Error> {
        storage::parcel(&e, parcel_id)
            .map(|p| p.meterage)
            .ok_or(Error::MeterageNotSet)
    }

    pub fn resident(e: Env, parcel_id: u64) -> Result<Option<Address>, Error> {
        Ok(Self::load(&e, parcel_id)?.resident)
    }

    pub fn rent_fee(e: Env, parcel_id: u64) -> Result<i128, Error> {
        Ok(Self::load(&e, parcel_id)?.rent_fee)
    }

    pub fn rent_due(e: Env, parcel_id: u64) -> Result<i128, Error> {
        Ok(Self::load(&e, parcel_id)?.rent_due)
    }

    /// Only the current owner may call.
    pub fn transfer(e: Env, from: Address, to: Address, parcel_id: u64) -> Result<(), Error> {
        from.require_auth();
        let mut parcel = Self::owned(&e, parcel_id, &from)?;
        parcel.owner = Some(to.clone());
        storage::put_parcel(&e, &parcel);
        e.events()
            .publish((symbol_short!("transfer"), from, to), parcel_id);
        Ok(())
    }

    /// Hands the parcel to the share ledger, which mints its full meterage
    /// of shares to `owner`.
    pub fn fractionize(e: Env, owner: Address, parcel_id: u64) -> Result<(), Error> {
        owner.require_auth();
        let mut parcel = Self::owned(&e, parcel_id, &owner)?;
        let fractions = storage::fractions(&e)?;

        parcel.owner = Some(fractions.clone());
        storage::put_parcel(&e, &parcel);
        e.events()
            .publish((symbol_short!("fraction"), parcel_id), owner.clone());

        ParcelFractionsClient::new(&e, &fractions).mint(
            &e.current_contract_address(),
            &owner,
            &parcel_id,
            &parcel.meterage,
        );
        Ok(())
    }

    /// Returns a fractionized parcel to a single owner. Only the share
    /// ledger may call, and only for parcels it holds.
    pub fn release(e: Env, caller: Address, parcel_id: u64, to: Address) -> Result<(), Error> {
        caller.require_auth();
        if caller != storage::fractions(&e)? {
            return Err(Error::Unauthorized);
        }
        let mut parcel = Self::owned(&e, parcel_id, &caller)?;
        parcel.owner = Some(to.clone());
        storage::put_parcel(&e, &parcel);
        e.events()
            .publish((symbol_short!("released"), parcel_id), to);
        Ok(())
    }

    /// Only the current owner may call.
    pub fn set_resident(
        e: Env,
        caller: Address,
        parcel_id: u64,
        resident: Address,
    ) -> Result<(), Error> {
        caller.require_auth();
        let mut parcel = Self::owned(&e, parcel_id, &caller)?;
        parcel.resident = Some(resident.clone());
        storage::put_parcel(&e, &parcel);
        e.events()
            .publish((symbol_short!("resident"), parcel_id), resident);
        Ok(())
    }

    /// Only the current owner may call.
    pub fn set_rent_fee(e: Env, caller: Address, parcel_id: u64, fee: i128) -> Result<(), Error> {
        caller.require_auth();
        if fee <= 0 {
            return Err(Error::InvalidRentFee);
        }
        let mut parcel = Self::owned(&e, parcel_id, &caller)?;
        parcel.rent_fee = fee;
        storage::put_parcel(&e, &parcel);
        e.events()
            .publish((symbol_short!("rent_fee"), parcel_id), fee);
        Ok(())
    }

    /// The resident pays one period of rent into the registry.
    pub fn pay_rent(e: Env, payer: Address, parcel_id: u64) -> Result<(), Error> {
        payer.require_auth();
        let mut parcel = Self::load(&e, parcel_id)?;
        if parcel.resident.as_ref() != Some(&payer) {
            return Err(Error::NotResident);
        }
        if parcel.rent_fee <= 0 {
            return Err(Error::RentFeeNotSet);
        }

        let fee = parcel.rent_fee;
        parcel.rent_due += fee;
        storage::put_parcel(&e, &parcel);

        let token = token::Client::new(&e, &storage::rent_token(&e)?);
        token.transfer(&payer, &e.current_contract_address(), &fee);
        e.events()
            .publish((symbol_short!("rent_paid"), parcel_id), (payer, fee));
        Ok(())
    }

    /// Pays all accrued rent to the parcel owner. Only the current owner
    /// may call.
    pub fn withdraw_rent(e: Env, caller: Address, parcel_id: u64) -> Result<i128, Error> {
        caller.require_auth();
        let mut parcel = Self::owned(&e, parcel_id, &caller)?;
        let amount = parcel.rent_due;
        if amount <= 0 {
            return Err(Error::NoRentDue);
        }

        parcel.rent_due = 0;
        storage::put_parcel(&e, &parcel);

        let token = token::Client::new(&e, &storage::rent_token(&e)?);
        token.transfer(&e.current_contract_address(), &caller, &amount);
        e.events()
            .publish((symbol_short!("rent_out"), parcel_id), (caller, amount));
        Ok(amount)
    }

    // Helper functions

    fn load(e: &Env, parcel_id: u64) -> Result<Parcel, Error> {
        storage::parcel(e, parcel_id)
            .filter(|p| p.owner.is_some())
            .ok_or(Error::ParcelNotFound)
    }

    fn owned(e: &Env, parcel_id: u64, caller: &Address) -> Result<Parcel, Error> {
        let parcel = Self::load(e, parcel_id)?;
        if parcel.owner.as_ref() != Some(caller) {
            return Err(Error::NotParcelOwner);
        }
        Ok(parcel)
    }

    fn mint_one(e: &Env, to: &Address, parcel_id: u64) -> Result<(), Error> {
        let mut parcel = storage::parcel(e, parcel_id).ok_or(Error::MeterageNotSet)?;
        if parcel.owner.is_some() {
            return Err(Error::ParcelAlreadyMinted);
        }
        parcel.owner = Some(to.clone());
        storage::put_parcel(e, &parcel);
        e.events()
            .publish((symbol_short!("minted"), parcel_id), to.clone());
        Ok(())
    }
}

#[cfg(test)]
mod test;
