use soroban_sdk::{contracttype, Address, Env, Vec};

// Storage TTL constants (in ledgers, ~5 seconds each)
const INSTANCE_TTL_THRESHOLD: u32 = 17_280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518_400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17_280;
const PERSISTENT_TTL_EXTEND: u32 = 518_400;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    PendingOwner,
    StakeToken,
    RewardToken,
    RewardRatePerTick,
    TotalStaked,
    ActiveStakers,
    Staker(Address),
}

/// Per-staker ledger entry.
///
/// `checkpoint_tick` is the ledger sequence at which this staker's rewards
/// were last settled; accrual for the open interval is computed from it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakerInfo {
    pub staked_balance: i128,
    pub checkpoint_tick: u32,
    pub pending_rewards: i128,
}

impl StakerInfo {
    pub fn zeroed() -> Self {
        StakerInfo {
            staked_balance: 0,
            checkpoint_tick: 0,
            pending_rewards: 0,
        }
    }
}

// --- Instance storage helpers (Owner, tokens, rate, pool total) ---

pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn get_owner(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Owner).unwrap()
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_pending_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::PendingOwner)
}

pub fn set_pending_owner(env: &Env, pending: &Address) {
    env.storage().instance().set(&DataKey::PendingOwner, pending);
}

pub fn remove_pending_owner(env: &Env) {
    env.storage().instance().remove(&DataKey::PendingOwner);
}

pub fn get_stake_token(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::StakeToken).unwrap()
}

pub fn set_stake_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::StakeToken, token);
}

pub fn get_reward_token(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::RewardToken).unwrap()
}

pub fn set_reward_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::RewardToken, token);
}

pub fn get_reward_rate(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::RewardRatePerTick)
        .unwrap_or(0)
}

pub fn set_reward_rate(env: &Env, rate: i128) {
    env.storage()
        .instance()
        .set(&DataKey::RewardRatePerTick, &rate);
}

pub fn get_total_staked(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalStaked)
        .unwrap_or(0)
}

pub fn set_total_staked(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::TotalStaked, &total);
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

// --- Persistent storage helpers (Staker, ActiveStakers) ---

pub fn has_staker(env: &Env, staker: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Staker(staker.clone()))
}

/// Missing records read back as an all-zero entry, so view calls never trap
/// on identities the contract has not seen.
pub fn get_staker(env: &Env, staker: &Address) -> StakerInfo {
    let key = DataKey::Staker(staker.clone());
    match env.storage().persistent().get(&key) {
        Some(info) => {
            extend_persistent(env, &key);
            info
        }
        None => StakerInfo::zeroed(),
    }
}

pub fn set_staker(env: &Env, staker: &Address, info: &StakerInfo) {
    let key = DataKey::Staker(staker.clone());
    env.storage().persistent().set(&key, info);
    extend_persistent(env, &key);
}

pub fn remove_staker(env: &Env, staker: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Staker(staker.clone()));
}

/// Registry of addresses with a non-zero staked balance. Enumeration order is
/// insertion order, which keeps a single distribution pass deterministic.
pub fn get_active_stakers(env: &Env) -> Vec<Address> {
    let key = DataKey::ActiveStakers;
    match env.storage().persistent().get(&key) {
        Some(stakers) => {
            extend_persistent(env, &key);
            stakers
        }
        None => Vec::new(env),
    }
}

pub fn set_active_stakers(env: &Env, stakers: &Vec<Address>) {
    let key = DataKey::ActiveStakers;
    env.storage().persistent().set(&key, stakers);
    extend_persistent(env, &key);
}

pub fn add_active_staker(env: &Env, staker: &Address) {
    let mut stakers = get_active_stakers(env);
    if !stakers.contains(staker) {
        stakers.push_back(staker.clone());
        set_active_stakers(env, &stakers);
    }
}

pub fn remove_active_staker(env: &Env, staker: &Address) {
    let mut stakers = get_active_stakers(env);
    if let Some(index) = stakers.first_index_of(staker) {
        stakers.remove(index);
        set_active_stakers(env, &stakers);
    }
}

fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}
