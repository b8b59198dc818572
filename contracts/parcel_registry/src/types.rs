use soroban_sdk::{contracterror, contracttype, Address};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    Unauthorized = 2,
    LengthMismatch = 3,
    InvalidMeterage = 4,
    MeterageNotSet = 5,
    ParcelAlreadyMinted = 6,
    ParcelNotFound = 7,
    NotParcelOwner = 8,
    FractionsNotSet = 9,
    NotResident = 10,
    InvalidRentFee = 11,
    RentFeeNotSet = 12,
    NoRentDue = 13,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Parcel {
    pub id: u64,
    pub meterage: i128,
    pub owner: Option<Address>, // None until minted
    pub resident: Option<Address>,
    pub rent_fee: i128,
    pub rent_due: i128,
}
