use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    InvalidAmount = 4,
    NotStaking = 5,
    NoRewards = 6,
    TransferFailed = 7,
    MintFailed = 8,
    Overflow = 9,
    NoPendingOwner = 10,
}
