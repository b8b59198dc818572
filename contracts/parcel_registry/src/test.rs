#![cfg(test)]
extern crate std;

use soroban_sdk::testutils::Address as _;
use soroban_sdk::{contract, contractimpl, contracttype, token, vec, Address, Env};

use crate::{Error, ParcelRegistry, ParcelRegistryClient};

// ── share ledger stand-in ──

#[contracttype]
#[derive(Clone)]
enum MockKey {
    Minted(u64),
}

#[contract]
pub struct MockFractions;

#[contractimpl]
impl MockFractions {
    pub fn mint(e: Env, from: Address, to: Address, parcel_id: u64, amount: i128) {
        from.require_auth();
        e.storage()
            .persistent()
            .set(&MockKey::Minted(parcel_id), &(to, amount));
    }

    pub fn minted(e: Env, parcel_id: u64) -> Option<(Address, i128)> {
        e.storage().persistent().get(&MockKey::Minted(parcel_id))
    }

    pub fn rebuild(e: Env, registry: Address, parcel_id: u64, to: Address) {
        ParcelRegistryClient::new(&e, &registry).release(
            &e.current_contract_address(),
            &parcel_id,
            &to,
        );
    }

    pub fn collect(e: Env, registry: Address, parcel_id: u64) -> i128 {
        ParcelRegistryClient::new(&e, &registry)
            .withdraw_rent(&e.current_contract_address(), &parcel_id)
    }
}

struct Setup<'a> {
    e: Env,
    admin: Address,
    registry: ParcelRegistryClient<'a>,
    fractions: MockFractionsClient<'a>,
    token: token::Client<'a>,
    token_admin: token::StellarAssetClient<'a>,
}

impl<'a> Setup<'a> {
    fn new() -> Self {
        let e = Env::default();
        e.mock_all_auths();

        let admin = Address::generate(&e);
        let asset = e.register_stellar_asset_contract_v2(Address::generate(&e));
        let registry_id = e.register(ParcelRegistry, (admin.clone(), asset.address()));
        let fractions_id = e.register(MockFractions, ());

        let registry = ParcelRegistryClient::new(&e, &registry_id);
        registry.set_fractions(&fractions_id);

        Setup {
            registry,
            fractions: MockFractionsClient::new(&e, &fractions_id),
            token: token::Client::new(&e, &asset.address()),
            token_admin: token::StellarAssetClient::new(&e, &asset.address()),
            admin,
            e,
        }
    }

    fn minted_to(&self, parcel_id: u64, meterage: i128, owner: &Address) {
        self.registry
            .set_meterages(&vec![&self.e, parcel_id], &vec![&self.e, meterage]);
        self.registry.mint(owner, &parcel_id);
    }
}

#[test]
fn test_constructor_stores_config() {
    let s = Setup::new();
    assert_eq!(s.registry.admin(), s.admin);
    assert_eq!(s.registry.rent_token(), s.token.address);
    assert_eq!(s.registry.fractions(), s.fractions.address);
}

#[test]
fn test_set_meterages_and_mint() {
    let s = Setup::new();
    let owner = Address::generate(&s.e);

    assert_eq!(
        s.registry
            .try_set_meterages(&vec![&s.e, 1u64, 2u64], &vec![&s.e, 10i128]),
        Err(Ok(Error::LengthMismatch))
    );
    assert_eq!(
        s.registry
            .try_set_meterages(&vec![&s.e, 1u64], &vec![&s.e, 0i128]),
        Err(Ok(Error::InvalidMeterage))
    );
    assert_eq!(s.registry.try_mint(&owner, &1), Err(Ok(Error::MeterageNotSet)));

    s.registry
        .set_meterages(&vec![&s.e, 1u64, 2u64, 3u64], &vec![&s.e, 10i128, 20i128, 30i128]);
    s.registry.set_meterages(&vec![&s.e, 1u64], &vec![&s.e, 11i128]);
    assert_eq!(s.registry.meterage(&1), 11);
    assert_eq!(s.registry.try_owner_of(&1), Err(Ok(Error::ParcelNotFound)));

    s.registry.mint(&owner, &1);
    s.registry.batch_mint(&owner, &vec![&s.e, 2u64, 3u64]);
    assert_eq!(s.registry.owner_of(&1), owner);
    assert_eq!(s.registry.owner_of(&3), owner);

    assert_eq!(
        s.registry.try_mint(&owner, &1),
        Err(Ok(Error::ParcelAlreadyMinted))
    );
    assert_eq!(
        s.registry
            .try_set_meterages(&vec![&s.e, 2u64], &vec![&s.e, 5i128]),
        Err(Ok(Error::ParcelAlreadyMinted))
    );
}

#[test]
fn test_transfer_only_by_owner() {
    let s = Setup::new();
    let owner = Address::generate(&s.e);
    let buyer = Address::generate(&s.e);
    s.minted_to(1, 10, &owner);

    assert_eq!(
        s.registry.try_transfer(&buyer, &buyer, &1),
        Err(Ok(Error::NotParcelOwner))
    );
    s.registry.transfer(&owner, &buyer, &1);
    assert_eq!(s.registry.owner_of(&1), buyer);
}

#[test]
fn test_fractionize_moves_custody_and_mints() {
    let s = Setup::new();
    let owner = Address::generate(&s.e);
    s.minted_to(4, 12, &owner);

    s.registry.fractionize(&owner, &4);

    assert_eq!(s.registry.owner_of(&4), s.fractions.address);
    assert_eq!(s.fractions.minted(&4), Some((owner.clone(), 12)));
    assert_eq!(
        s.registry.try_fractionize(&owner, &4),
        Err(Ok(Error::NotParcelOwner))
    );
}

#[test]
fn test_fractionize_requires_share_ledger() {
    let e = Env::default();
    e.mock_all_auths();
    let admin = Address::generate(&e);
    let owner = Address::generate(&e);
    let registry_id = e.register(ParcelRegistry, (admin, Address::generate(&e)));
    let registry = ParcelRegistryClient::new(&e, &registry_id);

    registry.set_meterages(&vec![&e, 1u64], &vec![&e, 5i128]);
    registry.mint(&owner, &1);
    assert_eq!(
        registry.try_fractionize(&owner, &1),
        Err(Ok(Error::FractionsNotSet))
    );
}

#[test]
fn test_release_only_from_share_ledger() {
    let s = Setup::new();
    let owner = Address::generate(&s.e);
    s.minted_to(1, 10, &owner);
    s.registry.fractionize(&owner, &1);

    assert_eq!(
        s.registry.try_release(&owner, &1, &owner),
        Err(Ok(Error::Unauthorized))
    );

    s.fractions.rebuild(&s.registry.address, &1, &owner);
    assert_eq!(s.registry.owner_of(&1), owner);
}

#[test]
fn test_resident_and_fee_by_owner() {
    let s = Setup::new();
    let owner = Address::generate(&s.e);
    let resident = Address::generate(&s.e);
    s.minted_to(1, 10, &owner);

    assert_eq!(
        s.registry.try_set_resident(&resident, &1, &resident),
        Err(Ok(Error::NotParcelOwner))
    );
    assert_eq!(
        s.registry.try_set_rent_fee(&owner, &1, &0),
        Err(Ok(Error::InvalidRentFee))
    );

    s.registry.set_resident(&owner, &1, &resident);
    s.registry.set_rent_fee(&owner, &1, &25);
    assert_eq!(s.registry.resident(&1), Some(resident));
    assert_eq!(s.registry.rent_fee(&1), 25);
}

#[test]
fn test_pay_and_withdraw_rent() {
    let s = Setup::new();
    let owner = Address::generate(&s.e);
    let resident = Address::generate(&s.e);
    let stranger = Address::generate(&s.e);
    s.minted_to(1, 10, &owner);
    s.registry.set_resident(&owner, &1, &resident);
    s.token_admin.mint(&resident, &100);

    assert_eq!(
        s.registry.try_pay_rent(&resident, &1),
        Err(Ok(Error::RentFeeNotSet))
    );
    s.registry.set_rent_fee(&owner, &1, &30);
    assert_eq!(
        s.registry.try_pay_rent(&stranger, &1),
        Err(Ok(Error::NotResident))
    );
    assert_eq!(
        s.registry.try_withdraw_rent(&owner, &1),
        Err(Ok(Error::NoRentDue))
    );

    s.registry.pay_rent(&resident, &1);
    s.registry.pay_rent(&resident, &1);
    assert_eq!(s.registry.rent_due(&1), 60);
    assert_eq!(s.token.balance(&resident), 40);
    assert_eq!(s.token.balance(&s.registry.address), 60);

    assert_eq!(
        s.registry.try_withdraw_rent(&stranger, &1),
        Err(Ok(Error::NotParcelOwner))
    );
    assert_eq!(s.registry.withdraw_rent(&owner, &1), 60);
    assert_eq!(s.token.balance(&owner), 60);
    assert_eq!(s.registry.rent_due(&1), 0);
}

#[test]
fn test_share_ledger_collects_rent_of_fractionized_parcel() {
    let s = Setup::new();
    let owner = Address::generate(&s.e);
    let resident = Address::generate(&s.e);
    s.minted_to(1, 10, &owner);
    s.registry.set_resident(&owner, &1, &resident);
    s.registry.set_rent_fee(&owner, &1, &15);
    s.registry.fractionize(&owner, &1);
    s.token_admin.mint(&resident, &15);

    s.registry.pay_rent(&resident, &1);
    assert_eq!(
        s.registry.try_withdraw_rent(&owner, &1),
        Err(Ok(Error::NotParcelOwner))
    );
    assert_eq!(s.fractions.collect(&s.registry.address, &1), 15);
    assert_eq!(s.token.balance(&s.fractions.address), 15);
}
