#![no_std]

mod errors;
mod events;
mod rewards;
mod storage;


use errors::ContractError;
use soroban_sdk::{contract, contractimpl, token, Address, Env, Vec};
use storage::StakerInfo;

/// Proportional token farm: stakers deposit one asset into shared custody and
/// are minted a second asset in proportion to their share of the pool and the
/// ticks (ledger sequence numbers) elapsed since their last settlement.
#[contract]
pub struct TokenFarm;

#[contractimpl]
impl TokenFarm {
    // ========== Setup ==========

    /// One-time initialization.
    ///
    /// The reward asset's mint authority must be handed to this contract out
    /// of band; until that happens `claim_rewards` fails with `MintFailed`.
    pub fn initialize(
        env: Env,
        owner: Address,
        stake_token: Address,
        reward_token: Address,
        reward_rate_per_tick: i128,
    ) -> Result<(), ContractError> {
        if storage::has_owner(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        if reward_rate_per_tick < 0 {
            return Err(ContractError::InvalidAmount);
        }

        storage::set_owner(&env, &owner);
        storage::set_stake_token(&env, &stake_token);
        storage::set_reward_token(&env, &reward_token);
        storage::set_reward_rate(&env, reward_rate_per_tick);
        storage::extend_instance_ttl(&env);

        events::publish_initialized(&env, owner, stake_token, reward_token, reward_rate_per_tick);

        Ok(())
    }

    // ========== Staker Functions ==========

    /// Deposit `amount` of the staked asset into pool custody.
    ///
    /// An already-active staker is settled first, so the interval that ends
    /// here accrues at the pre-deposit stake.
    pub fn deposit(env: Env, staker: Address, amount: i128) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }
        storage::extend_instance_ttl(&env);

        let tick = env.ledger().sequence();
        let total = storage::get_total_staked(&env);
        let mut info = storage::get_staker(&env, &staker);

        if info.staked_balance > 0 {
            Self::settle(&env, &mut info, total, tick)?;
        } else {
            storage::add_active_staker(&env, &staker);
            info.checkpoint_tick = tick;
        }

        info.staked_balance = info
            .staked_balance
            .checked_add(amount)
            .ok_or(ContractError::Overflow)?;
        storage::set_staker(&env, &staker, &info);

        let new_total = total.checked_add(amount).ok_or(ContractError::Overflow)?;
        storage::set_total_staked(&env, new_total);

        // Interactions last: pull the staked asset into custody. An error
        // return rolls back every write above.
        let stake_token = storage::get_stake_token(&env);
        let transfer = token::Client::new(&env, &stake_token).try_transfer(
            &staker,
            &env.current_contract_address(),
            &amount,
        );
        if transfer.is_err() {
            return Err(ContractError::TransferFailed);
        }

        events::publish_deposited(&env, staker, amount, new_total);

        Ok(())
    }

    /// Return the staker's full balance and deactivate them.
    ///
    /// The final interval is settled before the stake is zeroed; any pending
    /// rewards stay claimable afterwards.
    pub fn withdraw(env: Env, staker: Address) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        let mut info = storage::get_staker(&env, &staker);
        if info.staked_balance <= 0 {
            return Err(ContractError::NotStaking);
        }
        storage::extend_instance_ttl(&env);

        let tick = env.ledger().sequence();
        let total = storage::get_total_staked(&env);
        Self::settle(&env, &mut info, total, tick)?;

        let amount = info.staked_balance;
        info.staked_balance = 0;
        if info.pending_rewards > 0 {
            storage::set_staker(&env, &staker, &info);
        } else {
            storage::remove_staker(&env, &staker);
        }
        storage::remove_active_staker(&env, &staker);
        let new_total = total - amount;
        storage::set_total_staked(&env, new_total);

        let stake_token = storage::get_stake_token(&env);
        let transfer = token::Client::new(&env, &stake_token).try_transfer(
            &env.current_contract_address(),
            &staker,
            &amount,
        );
        if transfer.is_err() {
            return Err(ContractError::TransferFailed);
        }

        events::publish_withdrawn(&env, staker, amount, new_total);

        Ok(amount)
    }

    /// Mint the staker's pending rewards to them. Returns the amount minted.
    ///
    /// Drains only what previous settlements credited; the open interval
    /// keeps accruing against the unchanged checkpoint.
    pub fn claim_rewards(env: Env, staker: Address) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        let mut info = storage::get_staker(&env, &staker);
        if info.pending_rewards <= 0 {
            return Err(ContractError::NoRewards);
        }
        storage::extend_instance_ttl(&env);

        let amount = info.pending_rewards;
        info.pending_rewards = 0;
        if info.staked_balance > 0 {
            storage::set_staker(&env, &staker, &info);
        } else {
            // Fully exited and now fully claimed.
            storage::remove_staker(&env, &staker);
        }

        let reward_token = storage::get_reward_token(&env);
        let mint = token::StellarAssetClient::new(&env, &reward_token).try_mint(&staker, &amount);
        if mint.is_err() {
            return Err(ContractError::MintFailed);
        }

        events::publish_rewards_claimed(&env, staker, amount);

        Ok(amount)
    }

    // ========== Owner Functions ==========

    /// Settle accrual for every active staker up to the current tick.
    /// Returns the number of stakers settled. The batch is atomic.
    pub fn distribute_rewards_all(env: Env, caller: Address) -> Result<u32, ContractError> {
        Self::require_owner(&env, &caller)?;
        storage::extend_instance_ttl(&env);

        let stakers = storage::get_active_stakers(&env);
        let len = stakers.len();
        Self::settle_range(&env, &stakers, 0, len)?;

        events::publish_rewards_distributed(&env, len, storage::get_total_staked(&env));

        Ok(len)
    }

    /// Bounded distribution pass over registry indices
    /// `[start, min(start + limit, len))`. Returns the next cursor; callers
    /// page until it reaches `staker_count`.
    pub fn distribute_rewards(
        env: Env,
        caller: Address,
        start: u32,
        limit: u32,
    ) -> Result<u32, ContractError> {
        Self::require_owner(&env, &caller)?;
        storage::extend_instance_ttl(&env);

        let stakers = storage::get_active_stakers(&env);
        let end = start.saturating_add(limit).min(stakers.len());
        Self::settle_range(&env, &stakers, start, end)?;

        events::publish_rewards_distributed(
            &env,
            end.saturating_sub(start),
            storage::get_total_staked(&env),
        );

        Ok(end)
    }

    /// Change the emission rate.
    ///
    /// Every active staker is settled at the old rate first, so the change
    /// never applies retroactively to an open interval.
    pub fn set_reward_rate(env: Env, caller: Address, new_rate: i128) -> Result<(), ContractError> {
        Self::require_owner(&env, &caller)?;
        if new_rate < 0 {
            return Err(ContractError::InvalidAmount);
        }
        storage::extend_instance_ttl(&env);

        let stakers = storage::get_active_stakers(&env);
        Self::settle_range(&env, &stakers, 0, stakers.len())?;

        storage::set_reward_rate(&env, new_rate);

        events::publish_reward_rate_set(&env, new_rate);

        Ok(())
    }

    // ========== Ownership Transfer (two-step) ==========

    /// Propose a new owner. The proposal takes effect only when the proposed
    /// address calls `accept_owner`; re-proposing overwrites the previous one.
    pub fn propose_owner(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), ContractError> {
        Self::require_owner(&env, &caller)?;
        storage::extend_instance_ttl(&env);

        storage::set_pending_owner(&env, &new_owner);

        events::publish_owner_proposed(&env, caller, new_owner);

        Ok(())
    }

    /// Complete a proposed ownership transfer. Callable only by the proposed
    /// owner.
    pub fn accept_owner(env: Env, new_owner: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        new_owner.require_auth();

        let pending = storage::get_pending_owner(&env).ok_or(ContractError::Unauthorized)?;
        if new_owner != pending {
            return Err(ContractError::Unauthorized);
        }
        storage::extend_instance_ttl(&env);

        let old_owner = storage::get_owner(&env);
        storage::set_owner(&env, &new_owner);
        storage::remove_pending_owner(&env);

        events::publish_owner_accepted(&env, old_owner, new_owner);

        Ok(())
    }

    /// Withdraw a pending ownership proposal.
    pub fn cancel_owner_transfer(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::require_owner(&env, &caller)?;

        let pending = storage::get_pending_owner(&env).ok_or(ContractError::NoPendingOwner)?;
        storage::remove_pending_owner(&env);

        events::publish_owner_transfer_cancelled(&env, caller, pending);

        Ok(())
    }

    // ========== View Functions ==========

    /// Current stake held for `staker`.
    pub fn staking_balance(env: Env, staker: Address) -> i128 {
        storage::get_staker(&env, &staker).staked_balance
    }

    /// Sum of all staked balances.
    pub fn total_staking_balance(env: Env) -> i128 {
        storage::get_total_staked(&env)
    }

    /// Rewards settled for `staker` but not yet claimed.
    pub fn pending_rewards(env: Env, staker: Address) -> i128 {
        storage::get_staker(&env, &staker).pending_rewards
    }

    /// Tick at which `staker` was last settled (0 if never tracked).
    pub fn checkpoints(env: Env, staker: Address) -> u32 {
        storage::get_staker(&env, &staker).checkpoint_tick
    }

    pub fn is_staking(env: Env, staker: Address) -> bool {
        storage::get_staker(&env, &staker).staked_balance > 0
    }

    pub fn owner(env: Env) -> Result<Address, ContractError> {
        if !storage::has_owner(&env) {
            return Err(ContractError::NotInitialized);
        }
        Ok(storage::get_owner(&env))
    }

    pub fn pending_owner(env: Env) -> Option<Address> {
        storage::get_pending_owner(&env)
    }

    /// Reward units emitted per tick across the whole pool.
    pub fn reward_rate(env: Env) -> i128 {
        storage::get_reward_rate(&env)
    }

    /// Number of addresses currently in the active-staker registry.
    pub fn staker_count(env: Env) -> u32 {
        storage::get_active_stakers(&env).len()
    }

    // ========== Internal Helpers ==========

    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !storage::has_owner(env) {
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }

    fn require_owner(env: &Env, caller: &Address) -> Result<(), ContractError> {
        Self::require_initialized(env)?;
        caller.require_auth();
        if *caller != storage::get_owner(env) {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    /// Credit accrual for the interval since `info`'s checkpoint and advance
    /// the checkpoint to `tick`. Pure bookkeeping; does not write storage.
    fn settle(
        env: &Env,
        info: &mut StakerInfo,
        pool_total: i128,
        tick: u32,
    ) -> Result<(), ContractError> {
        let elapsed = tick.saturating_sub(info.checkpoint_tick);
        let rate = storage::get_reward_rate(env);
        let accrued = rewards::compute_accrual(info.staked_balance, pool_total, elapsed, rate)
            .ok_or(ContractError::Overflow)?;
        info.pending_rewards = info
            .pending_rewards
            .checked_add(accrued)
            .ok_or(ContractError::Overflow)?;
        info.checkpoint_tick = tick;
        Ok(())
    }

    /// Settle registry entries `[start, end)` against the pool total as it
    /// stands now. Any failure aborts the whole batch.
    fn settle_range(
        env: &Env,
        stakers: &Vec<Address>,
        start: u32,
        end: u32,
    ) -> Result<(), ContractError> {
        let tick = env.ledger().sequence();
        let total = storage::get_total_staked(env);

        for i in start..end {
            let staker = stakers.get_unchecked(i);
            let mut info = storage::get_staker(env, &staker);
            Self::settle(env, &mut info, total, tick)?;
            storage::set_staker(env, &staker, &info);
        }

        Ok(())
    }
}
