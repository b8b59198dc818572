use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // authorization
    OnlyRegistryAllowed = 1,
    OwnableUnauthorizedAccount = 2,
    TokenOwnershipRequired = 3,
    // proposal and parcel state
    TokenIdNotSet = 4,
    ProposalAlreadyExecuted = 5,
    ProposalAlreadyRejected = 6,
    ProposalNotPassed = 7,
    VotingPeriodEnded = 8,
    AlreadyVoted = 9,
    TokenLocked = 10,
    ProposalNotFound = 11,
    VotingNotEnded = 12,
    ProposalPassed = 13,
    AlreadyFractionized = 14,
    NotInitialized = 15,
    // balances and funds
    OwnerDoesNotOwnAllTokens = 16,
    InvalidRentAmountToWithdraw = 17,
    AddressInsufficientBalance = 18,
    InsufficientBalance = 19,
    // external call
    ProposalExecutionFailed = 20,
    // input
    AddressEmptyCode = 21,
    LengthMismatch = 22,
    InvalidAmount = 23,
    InvalidStake = 24,
    InvalidDeadline = 25,
    ForbiddenTarget = 26,
    ParcelMismatch = 27,
}
