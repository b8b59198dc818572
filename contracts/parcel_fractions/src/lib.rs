#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env, String, Symbol, Val, Vec};
use soroban_token_sdk::metadata::TokenMetadata;
use soroban_token_sdk::TokenUtils;

mod error;
mod events;
mod governance;
mod ledger;
mod registry;
mod rent;
mod storage;
mod types;

pub use error::Error;
pub use registry::ParcelRegistryClient;
pub use types::{Proposal, ProposalStatus, RentAccount, ShareHolderInfo};

use governance::Submission;

const SHARE_DECIMALS: u32 = 0;

#[contract]
pub struct ParcelFractions;

#[contractimpl]
impl ParcelFractions {
    /// `registry` is the only address allowed to mint; `rent_token` is the
    /// token rent is collected and paid out in.
    pub fn __constructor(e: Env, owner: Address, registry: Address, rent_token: Address) {
        storage::set_owner(&e, &owner);
        storage::set_registry(&e, &registry);
        storage::set_rent_token(&e, &rent_token);
        TokenUtils::new(&e).metadata().set_metadata(&TokenMetadata {
            decimal: SHARE_DECIMALS,
            name: String::from_str(&e, "Parcel Shares"),
            symbol: String::from_str(&e, "PSHR"),
        });
    }

    // ── ownership ──

    pub fn owner(e: Env) -> Result<Address, Error> {
        storage::owner(&e)
    }

    pub fn registry(e: Env) -> Result<Address, Error> {
        storage::registry(&e)
    }

    pub fn rent_token(e: Env) -> Result<Address, Error> {
        storage::rent_token(&e)
    }

    pub fn transfer_ownership(e: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        Self::require_owner(&e, &caller)?;
        storage::set_owner(&e, &new_owner);
        Ok(())
    }

    // ── share ledger ──

    pub fn name(e: Env) -> String {
        TokenUtils::new(&e).metadata().get_metadata().name
    }

    pub fn symbol(e: Env) -> String {
        TokenUtils::new(&e).metadata().get_metadata().symbol
    }

    pub fn decimals(e: Env) -> u32 {
        TokenUtils::new(&e).metadata().get_metadata().decimal
    }

    pub fn balance(e: Env, parcel_id: u64, holder: Address) -> i128 {
        storage::balance(&e, parcel_id, &holder)
    }

    /// Total shares of a fractionized parcel, `None` otherwise.
    pub fn meterage(e: Env, parcel_id: u64) -> Option<i128> {
        storage::meterage(&e, parcel_id)
    }

    /// Number of open proposals on the parcel; shares move only at zero.
    pub fn lock_count(e: Env, parcel_id: u64) -> u32 {
        storage::locks(&e, parcel_id)
    }

    pub fn transfer(
        e: Env,
        from: Address,
        to: Address,
        parcel_id: u64,
        amount: i128,
    ) -> Result<(), Error> {
        from.require_auth();
        ledger::transfer(&e, &from, &to, parcel_id, amount)
    }

    pub fn batch_transfer(
        e: Env,
        from: Address,
        to: Address,
        parcel_ids: Vec<u64>,
        amounts: Vec<i128>,
    ) -> Result<(), Error> {
        from.require_auth();
        ledger::batch_transfer(&e, &from, &to, &parcel_ids, &amounts)
    }

    /// Called by the registry when a parcel is fractionized.
    pub fn mint(
        e: Env,
        from: Address,
        to: Address,
        parcel_id: u64,
        amount: i128,
    ) -> Result<(), Error> {
        Self::require_registry(&e, &from)?;
        ledger::mint(&e, &to, parcel_id, amount)
    }

    pub fn mint_batch(
        e: Env,
        from: Address,
        to: Address,
        parcel_ids: Vec<u64>,
        amounts: Vec<i128>,
    ) -> Result<(), Error> {
        Self::require_registry(&e, &from)?;
        ledger::mint_batch(&e, &to, &parcel_ids, &amounts)
    }

    /// Burns all shares of the parcel held by `caller` and hands the parcel
    /// itself back to them.
    pub fn rebuild_nft(e: Env, caller: Address, parcel_id: u64) -> Result<(), Error> {
        caller.require_auth();
        ledger::rebuild(&e, &caller, parcel_id)
    }

    // ── governance ──

    #[allow(clippy::too_many_arguments)]
    pub fn submit_proposal(
        e: Env,
        proposer: Address,
        parcel_id: u64,
        stake: i128,
        target: Address,
        function: Symbol,
        args: Vec<Val>,
        description: String,
        deadline: u64,
    ) -> Result<u64, Error> {
        proposer.require_auth();
        governance::submit(
            &e,
            Submission {
                proposer,
                parcel_id,
                stake,
                target,
                function,
                args,
                description,
                deadline,
            },
        )
    }

    pub fn cast_vote(e: Env, voter: Address, proposal_id: u64, support: bool) -> Result<(), Error> {
        voter.require_auth();
        governance::cast_vote(&e, &voter, proposal_id, support)
    }

    /// Anyone may execute a proposal that has passed.
    pub fn execute_proposal(e: Env, proposal_id: u64) -> Result<Val, Error> {
        governance::execute(&e, proposal_id)
    }

    /// Anyone may reject an expired proposal that did not pass, releasing
    /// its transfer lock.
    pub fn close_proposal(e: Env, proposal_id: u64) -> Result<(), Error> {
        governance::close(&e, proposal_id)
    }

    pub fn proposal(e: Env, proposal_id: u64) -> Result<Proposal, Error> {
        governance::load(&e, proposal_id)
    }

    pub fn proposal_count(e: Env) -> u64 {
        storage::proposal_count(&e)
    }

    pub fn has_voted(e: Env, proposal_id: u64, voter: Address) -> bool {
        storage::has_voted(&e, proposal_id, &voter)
    }

    pub fn is_passed(e: Env, proposal_id: u64) -> Result<bool, Error> {
        governance::is_passed(&e, proposal_id)
    }

    // ── rent ──

    pub fn split_rent(e: Env, parcel_id: u64) -> Result<i128, Error> {
        rent::split(&e, parcel_id)
    }

    pub fn share_holder_info(e: Env, parcel_id: u64, holder: Address) -> ShareHolderInfo {
        rent::share_holder_info(&e, parcel_id, holder)
    }

    pub fn withdraw_rent(e: Env, holder: Address, parcel_id: u64) -> Result<i128, Error> {
        holder.require_auth();
        rent::withdraw(&e, &holder, parcel_id)
    }

    /// Platform share of split rent. Rounding remainders reach the pool only
    /// as holders settle, so it lags until every holder of a parcel has
    /// transferred or withdrawn since the last split.
    pub fn non_shares_rents(e: Env) -> i128 {
        storage::non_shares_rents(&e)
    }

    pub fn withdraw_non_shares_rents(e: Env, caller: Address) -> Result<i128, Error> {
        Self::require_owner(&e, &caller)?;
        rent::withdraw_pool(&e, &caller)
    }

    // ── helpers ──

    fn require_owner(e: &Env, caller: &Address) -> Result<(), Error> {
        if *caller != storage::owner(e)? {
            return Err(Error::OwnableUnauthorizedAccount);
        }
        caller.require_auth();
        Ok(())
    }

    fn require_registry(e: &Env, caller: &Address) -> Result<(), Error> {
        if *caller != storage::registry(e)? {
            return Err(Error::OnlyRegistryAllowed);
        }
        caller.require_auth();
        Ok(())
    }
}
