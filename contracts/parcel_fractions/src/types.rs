use soroban_sdk::{contracttype, Address, String, Symbol, Val, Vec};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProposalStatus {
    Open,
    Rejected,
    Executed,
}

/// A governance proposal scoped to one parcel.
///
/// `function` and `args` are passed untouched to `target` when the proposal
/// is executed; nothing here interprets them.
#[contracttype]
#[derive(Clone, Debug)]
pub struct Proposal {
    pub id: u64,
    pub parcel_id: u64,
    pub proposer: Address,
    pub proposer_stake: i128,
    pub deadline: u64, // unix seconds
    pub target: Address,
    pub function: Symbol,
    pub args: Vec<Val>,
    pub description: String,
    pub for_votes: i128,
    pub against_votes: i128,
    pub status: ProposalStatus,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShareHolderInfo {
    pub holder: Address,
    pub balance: i128,
    pub claimable: i128,
}

/// Per-holder rent bookkeeping for a parcel.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RentAccount {
    pub checkpoint: i128, // parcel rent total at last settlement
    pub credited: i128,   // settled but not yet withdrawn
}
