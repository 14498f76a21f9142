use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the contract is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
    pub stake_token: Address,
    pub reward_token: Address,
    pub reward_rate: i128,
    pub tick: u32,
}

/// Fired when a staker deposits into the pool.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositedEvent {
    pub staker: Address,
    pub amount: i128,
    pub new_total_staked: i128,
    pub tick: u32,
}

/// Fired when a staker withdraws their full stake.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub staker: Address,
    pub amount: i128,
    pub new_total_staked: i128,
    pub tick: u32,
}

/// Fired after a distribution pass settles a batch of stakers.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardsDistributedEvent {
    pub settled: u32,
    pub total_staked: i128,
    pub tick: u32,
}

/// Fired when a staker claims pending rewards.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardsClaimedEvent {
    pub staker: Address,
    pub amount: i128,
    pub tick: u32,
}

/// Fired when the owner changes the emission rate.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardRateSetEvent {
    pub new_rate: i128,
    pub tick: u32,
}

/// Fired when an ownership transfer is proposed.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerProposedEvent {
    pub owner: Address,
    pub proposed_owner: Address,
    pub tick: u32,
}

/// Fired when the proposed owner accepts the transfer.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerAcceptedEvent {
    pub old_owner: Address,
    pub new_owner: Address,
    pub tick: u32,
}

/// Fired when a pending ownership transfer is cancelled.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerTransferCancelledEvent {
    pub owner: Address,
    pub cancelled_proposed: Address,
    pub tick: u32,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(
    env: &Env,
    owner: Address,
    stake_token: Address,
    reward_token: Address,
    reward_rate: i128,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            owner,
            stake_token,
            reward_token,
            reward_rate,
            tick: env.ledger().sequence(),
        },
    );
}

pub fn publish_deposited(env: &Env, staker: Address, amount: i128, new_total_staked: i128) {
    env.events().publish(
        (symbol_short!("DEPOSIT"), staker.clone()),
        DepositedEvent {
            staker,
            amount,
            new_total_staked,
            tick: env.ledger().sequence(),
        },
    );
}

pub fn publish_withdrawn(env: &Env, staker: Address, amount: i128, new_total_staked: i128) {
    env.events().publish(
        (symbol_short!("WITHDRAW"), staker.clone()),
        WithdrawnEvent {
            staker,
            amount,
            new_total_staked,
            tick: env.ledger().sequence(),
        },
    );
}

pub fn publish_rewards_distributed(env: &Env, settled: u32, total_staked: i128) {
    env.events().publish(
        (symbol_short!("DISTRIB"),),
        RewardsDistributedEvent {
            settled,
            total_staked,
            tick: env.ledger().sequence(),
        },
    );
}

pub fn publish_rewards_claimed(env: &Env, staker: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("CLAIMED"), staker.clone()),
        RewardsClaimedEvent {
            staker,
            amount,
            tick: env.ledger().sequence(),
        },
    );
}

pub fn publish_reward_rate_set(env: &Env, new_rate: i128) {
    env.events().publish(
        (symbol_short!("RATE_SET"),),
        RewardRateSetEvent {
            new_rate,
            tick: env.ledger().sequence(),
        },
    );
}

pub fn publish_owner_proposed(env: &Env, owner: Address, proposed_owner: Address) {
    env.events().publish(
        (symbol_short!("OWN_PROP"),),
        OwnerProposedEvent {
            owner,
            proposed_owner,
            tick: env.ledger().sequence(),
        },
    );
}

pub fn publish_owner_accepted(env: &Env, old_owner: Address, new_owner: Address) {
    env.events().publish(
        (symbol_short!("OWN_ACPT"),),
        OwnerAcceptedEvent {
            old_owner,
            new_owner,
            tick: env.ledger().sequence(),
        },
    );
}

pub fn publish_owner_transfer_cancelled(env: &Env, owner: Address, cancelled_proposed: Address) {
    env.events().publish(
        (symbol_short!("OWN_CANC"),),
        OwnerTransferCancelledEvent {
            owner,
            cancelled_proposed,
            tick: env.ledger().sequence(),
        },
    );
}
