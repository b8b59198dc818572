use soroban_sdk::{contractclient, Address, Env};

/// The parcel registry as seen from the share ledger.
///
/// Only the calls the ledger makes are listed here; the registry address is
/// fixed at construction.
#[allow(dead_code)]
#[contractclient(name = "ParcelRegistryClient")]
pub trait ParcelRegistry {
    fn rent_due(e: Env, parcel_id: u64) -> i128;
    /// Moves the parcel's accrued rent to `caller` and returns the amount.
    fn withdraw_rent(e: Env, caller: Address, parcel_id: u64) -> i128;
    /// Hands custody of the parcel from `caller` to `to`.
    fn release(e: Env, caller: Address, parcel_id: u64, to: Address);
}
