//! Per-parcel proposals, share-weighted voting and execution.
//!
//! A proposal is open from submission until it is rejected or executed.
//! While any proposal on a parcel is open, that parcel's shares cannot move,
//! so a voter's balance is also their weight for the whole voting window.
//!
//! A proposal passes once `for` votes exceed half the meterage, or once the
//! deadline has passed with more `for` than `against` votes. It is rejected
//! as soon as `against` votes exceed half the meterage.
//!
//! This contract's own address authorizes whatever a proposal calls, so a
//! proposal may not target this contract or the rent token, and may only
//! reach the registry's per-parcel settings for its own parcel.

use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{
    log, Address, Env, Error as HostError, InvokeError, String, Symbol, TryFromVal, Val, Vec,
};

use crate::error::Error;
use crate::events;
use crate::storage;
use crate::types::{Proposal, ProposalStatus};

// byte holding the ScAddressType discriminant in an ScVal::Address encoding
const ADDRESS_TYPE_BYTE: u32 = 7;
const ADDRESS_TYPE_CONTRACT: u8 = 1;

// registry calls shaped `(caller, parcel_id, ..)` that a parcel may govern
const REGISTRY_FUNCTIONS: [&str; 2] = ["set_resident", "set_rent_fee"];
const REGISTRY_PARCEL_ARG: u32 = 1;

pub struct Submission {
    pub proposer: Address,
    pub parcel_id: u64,
    pub stake: i128,
    pub target: Address,
    pub function: Symbol,
    pub args: Vec<Val>,
    pub description: String,
    pub deadline: u64,
}

pub fn submit(e: &Env, s: Submission) -> Result<u64, Error> {
    let balance = storage::balance(e, s.parcel_id, &s.proposer);
    if balance <= 0 {
        return Err(Error::TokenOwnershipRequired);
    }
    if s.stake < 0 || s.stake > balance {
        return Err(Error::InvalidStake);
    }
    if !is_contract(e, &s.target) {
        return Err(Error::AddressEmptyCode);
    }
    check_call(e, &s)?;
    if s.deadline <= e.ledger().timestamp() {
        return Err(Error::InvalidDeadline);
    }

    let id = storage::next_proposal_id(e);
    let proposal = Proposal {
        id,
        parcel_id: s.parcel_id,
        proposer: s.proposer,
        proposer_stake: s.stake,
        deadline: s.deadline,
        target: s.target,
        function: s.function,
        args: s.args,
        description: s.description,
        for_votes: 0,
        against_votes: 0,
        status: ProposalStatus::Open,
    };
    storage::put_proposal(e, &proposal);
    storage::set_locks(e, proposal.parcel_id, storage::locks(e, proposal.parcel_id) + 1);

    events::proposal_created(e, id, proposal.parcel_id, &proposal.proposer);
    Ok(id)
}

pub fn cast_vote(e: &Env, voter: &Address, proposal_id: u64, support: bool) -> Result<(), Error> {
    let mut proposal = load_open(e, proposal_id)?;

    let weight = storage::balance(e, proposal.parcel_id, voter);
    if weight <= 0 {
        return Err(Error::TokenOwnershipRequired);
    }
    if storage::has_voted(e, proposal_id, voter) {
        return Err(Error::AlreadyVoted);
    }
    if e.ledger().timestamp() >= proposal.deadline {
        return Err(Error::VotingPeriodEnded);
    }

    storage::set_voted(e, proposal_id, voter);
    if support {
        proposal.for_votes += weight;
    } else {
        proposal.against_votes += weight;
    }
    events::vote_cast(e, proposal_id, voter, support, weight);

    let meterage = parcel_meterage(e, proposal.parcel_id)?;
    if 2 * proposal.against_votes > meterage {
        reject(e, &mut proposal);
    }
    storage::put_proposal(e, &proposal);
    Ok(())
}

/// Runs the proposal's call. The proposal is marked executed before the
/// call is made; a failed call fails the whole invocation, which leaves it
/// open.
pub fn execute(e: &Env, proposal_id: u64) -> Result<Val, Error> {
    let mut proposal = load_open(e, proposal_id)?;
    let meterage = parcel_meterage(e, proposal.parcel_id)?;
    if !passes(e, &proposal, meterage) {
        return Err(Error::ProposalNotPassed);
    }

    proposal.status = ProposalStatus::Executed;
    storage::put_proposal(e, &proposal);
    release_lock(e, proposal.parcel_id);

    let outcome = e.try_invoke_contract::<Val, HostError>(
        &proposal.target,
        &proposal.function,
        proposal.args.clone(),
    );
    match outcome {
        Ok(Ok(result)) => {
            events::proposal_executed(e, proposal_id, result);
            Ok(result)
        }
        Ok(Err(_)) => {
            log!(e, "proposal call returned an unreadable value", proposal_id);
            Err(Error::ProposalExecutionFailed)
        }
        Err(Ok(err)) => {
            log!(e, "proposal call failed", proposal_id, err.get_code());
            Err(Error::ProposalExecutionFailed)
        }
        Err(Err(err)) => {
            let err: InvokeError = err.into();
            match err {
                InvokeError::Contract(code) => log!(e, "proposal call failed", proposal_id, code),
                InvokeError::Abort => log!(e, "proposal call aborted", proposal_id),
            }
            Err(Error::ProposalExecutionFailed)
        }
    }
}

/// Rejects an open proposal whose deadline has passed without it passing.
pub fn close(e: &Env, proposal_id: u64) -> Result<(), Error> {
    let mut proposal = load_open(e, proposal_id)?;
    if e.ledger().timestamp() < proposal.deadline {
        return Err(Error::VotingNotEnded);
    }
    let meterage = parcel_meterage(e, proposal.parcel_id)?;
    if passes(e, &proposal, meterage) {
        return Err(Error::ProposalPassed);
    }

    reject(e, &mut proposal);
    storage::put_proposal(e, &proposal);
    Ok(())
}

pub fn load(e: &Env, proposal_id: u64) -> Result<Proposal, Error> {
    storage::proposal(e, proposal_id).ok_or(Error::ProposalNotFound)
}

pub fn is_passed(e: &Env, proposal_id: u64) -> Result<bool, Error> {
    let proposal = load(e, proposal_id)?;
    match proposal.status {
        ProposalStatus::Executed => Ok(true),
        ProposalStatus::Rejected => Ok(false),
        ProposalStatus::Open => {
            let meterage = parcel_meterage(e, proposal.parcel_id)?;
            Ok(passes(e, &proposal, meterage))
        }
    }
}

fn load_open(e: &Env, proposal_id: u64) -> Result<Proposal, Error> {
    let proposal = load(e, proposal_id)?;
    match proposal.status {
        ProposalStatus::Open => Ok(proposal),
        ProposalStatus::Executed => Err(Error::ProposalAlreadyExecuted),
        ProposalStatus::Rejected => Err(Error::ProposalAlreadyRejected),
    }
}

fn passes(e: &Env, proposal: &Proposal, meterage: i128) -> bool {
    2 * proposal.for_votes > meterage
        || (e.ledger().timestamp() >= proposal.deadline
            && proposal.for_votes > proposal.against_votes)
}

fn reject(e: &Env, proposal: &mut Proposal) {
    proposal.status = ProposalStatus::Rejected;
    release_lock(e, proposal.parcel_id);
    events::proposal_rejected(e, proposal.id);
}

fn release_lock(e: &Env, parcel_id: u64) {
    let locks = storage::locks(e, parcel_id);
    storage::set_locks(e, parcel_id, locks.saturating_sub(1));
}

fn parcel_meterage(e: &Env, parcel_id: u64) -> Result<i128, Error> {
    storage::meterage(e, parcel_id).ok_or(Error::TokenIdNotSet)
}

fn check_call(e: &Env, s: &Submission) -> Result<(), Error> {
    if s.target == e.current_contract_address() || s.target == storage::rent_token(e)? {
        return Err(Error::ForbiddenTarget);
    }
    if s.target != storage::registry(e)? {
        return Ok(());
    }

    let governed = REGISTRY_FUNCTIONS
        .iter()
        .any(|name| s.function == Symbol::new(e, name));
    if !governed {
        return Err(Error::ForbiddenTarget);
    }
    let parcel_id = s
        .args
        .get(REGISTRY_PARCEL_ARG)
        .and_then(|arg| u64::try_from_val(e, &arg).ok());
    if parcel_id != Some(s.parcel_id) {
        return Err(Error::ParcelMismatch);
    }
    Ok(())
}

fn is_contract(e: &Env, address: &Address) -> bool {
    address.clone().to_xdr(e).get(ADDRESS_TYPE_BYTE) == Some(ADDRESS_TYPE_CONTRACT)
}
