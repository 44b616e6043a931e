//! # Stock Token Contract
//!
//! A share-like token with a single owner, a pauser role and a snapshot
//! role. Balances may only move to accounts the owner has registered an
//! identity for, and nothing moves while the contract is paused.
//!
//! Soroban has no implicit sender, so every gated operation takes the calling
//! identity explicitly (`caller` or `from`) and requires its authorization.
//!
//! ## Transfer checks
//! Evaluated in this order, first failure wins:
//! 1. contract is paused → [`StockError::Paused`] (`0x42`)
//! 2. receiver has no identity → [`StockError::ReceiverNotIdentified`]
//! 3. sender balance below amount → [`StockError::InsufficientBalance`] (`0x54`)

#![no_std]

use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String, Vec};

pub mod access_control;
pub mod error;
pub mod events;
pub mod storage;

pub use error::StockError;
pub use storage::DataKey;


fn require_non_negative(amount: i128) -> Result<(), StockError> {
    if amount < 0 {
        return Err(StockError::InvalidAmount);
    }
    Ok(())
}

#[contract]
pub struct StockContract;

#[contractimpl]
impl StockContract {
    // ── Deployment ──────────────────────────────────────────────────

    /// Deploys the token. `owner` becomes owner, pauser and snapshot-role
    /// holder; total supply starts at zero.
    pub fn __constructor(
        env: Env,
        owner: Address,
        name: String,
        symbol: String,
        url: String,
        contact_name: String,
    ) {
        storage::set_metadata(&env, &name, &symbol, &url, &contact_name);
        storage::set_owner(&env, &owner);
        storage::set_pauser(&env, &owner);
        storage::set_snapshotter(&env, &owner);
        storage::set_total_supply(&env, 0);
    }

    // ── Owner operations ────────────────────────────────────────────

    /// Mint `amount` new units to the owner.
    pub fn issue(env: Env, caller: Address, amount: i128) -> Result<(), StockError> {
        access_control::require_owner(&env, &caller)?;
        require_non_negative(amount)?;

        let supply = storage::get_total_supply(&env)
            .checked_add(amount)
            .ok_or(StockError::InvalidAmount)?;
        let balance = storage::get_balance(&env, &caller)
            .checked_add(amount)
            .ok_or(StockError::InvalidAmount)?;
        storage::set_total_supply(&env, supply);
        storage::set_balance(&env, &caller, balance);

        events::emit_issued(&env, &caller, amount);
        Ok(())
    }

    /// Register the identity code of `account`. A code of `0` clears it.
    pub fn set_identity(
        env: Env,
        caller: Address,
        account: Address,
        code: u64,
    ) -> Result<(), StockError> {
        access_control::require_owner(&env, &caller)?;
        storage::set_identity(&env, &account, code);
        events::emit_identity_set(&env, &account, code);
        Ok(())
    }

    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), StockError> {
        access_control::require_owner(&env, &caller)?;
        storage::set_owner(&env, &new_owner);
        events::emit_ownership_transferred(&env, &caller, &new_owner);
        Ok(())
    }

    /// Hand the pauser role to `account`. There is a single holder.
    pub fn grant_pauser_role(
        env: Env,
        caller: Address,
        account: Address,
    ) -> Result<(), StockError> {
        access_control::require_owner(&env, &caller)?;
        storage::set_pauser(&env, &account);
        events::emit_role_granted(&env, symbol_short!("pauser"), &account, &caller);
        Ok(())
    }

    /// Hand the snapshot role to `account`. There is a single holder.
    pub fn grant_snapshot_role(
        env: Env,
        caller: Address,
        account: Address,
    ) -> Result<(), StockError> {
        access_control::require_owner(&env, &caller)?;
        storage::set_snapshotter(&env, &account);
        events::emit_role_granted(&env, symbol_short!("snapshot"), &account, &caller);
        Ok(())
    }

    // ── Pauser operations ───────────────────────────────────────────

    pub fn pause(env: Env, caller: Address) -> Result<(), StockError> {
        access_control::require_pauser(&env, &caller)?;
        if !storage::is_paused(&env) {
            storage::set_paused(&env, true);
            events::emit_paused(&env, &caller);
        }
        Ok(())
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), StockError> {
        access_control::require_pauser(&env, &caller)?;
        if storage::is_paused(&env) {
            storage::set_paused(&env, false);
            events::emit_unpaused(&env, &caller);
        }
        Ok(())
    }

    // ── Snapshot operations ─────────────────────────────────────────

    /// Schedule a balance snapshot at `timestamp` (ledger seconds).
    ///
    /// The timestamp must lie strictly after the current ledger time.
    /// Scheduling an already scheduled timestamp is a no-op.
    pub fn schedule_snapshot(env: Env, caller: Address, timestamp: u64) -> Result<(), StockError> {
        access_control::require_snapshotter(&env, &caller)?;
        if timestamp <= env.ledger().timestamp() {
            return Err(StockError::SnapshotInPast);
        }
        if storage::insert_snapshot(&env, timestamp) {
            events::emit_snapshot_scheduled(&env, &caller, timestamp);
        }
        Ok(())
    }

    // ── Holder operations ───────────────────────────────────────────

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), StockError> {
        from.require_auth();
        access_control::require_not_paused(&env)?;
        require_non_negative(amount)?;
        if !storage::is_identified(&env, &to) {
            return Err(StockError::ReceiverNotIdentified);
        }

        let from_balance = storage::get_balance(&env, &from);
        if from_balance < amount {
            return Err(StockError::InsufficientBalance);
        }
        storage::set_balance(&env, &from, from_balance - amount);
        let to_balance = storage::get_balance(&env, &to)
            .checked_add(amount)
            .ok_or(StockError::InvalidAmount)?;
        storage::set_balance(&env, &to, to_balance);

        events::emit_transfer(&env, &from, &to, amount);
        Ok(())
    }

    // ── Queries ─────────────────────────────────────────────────────

    pub fn name(env: Env) -> String {
        storage::get_name(&env)
    }

    pub fn symbol(env: Env) -> String {
        storage::get_symbol(&env)
    }

    pub fn url(env: Env) -> String {
        storage::get_url(&env)
    }

    /// Returns `(contact_name, url)`.
    pub fn get_contact_information(env: Env) -> (String, String) {
        (storage::get_contact_name(&env), storage::get_url(&env))
    }

    pub fn total_supply(env: Env) -> i128 {
        storage::get_total_supply(&env)
    }

    pub fn balance_of(env: Env, account: Address) -> i128 {
        storage::get_balance(&env, &account)
    }

    pub fn owner(env: Env) -> Address {
        storage::get_owner(&env)
    }

    /// Current holder of the pauser role.
    pub fn has_pauser_role(env: Env) -> Address {
        storage::get_pauser(&env)
    }

    /// Current holder of the snapshot role.
    pub fn has_snapshot_role(env: Env) -> Address {
        storage::get_snapshotter(&env)
    }

    /// Identity code of `account`, `0` if none is registered.
    pub fn identity_of(env: Env, account: Address) -> u64 {
        storage::get_identity(&env, &account)
    }

    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    /// Scheduled snapshot timestamps in ascending order.
    pub fn scheduled_snapshots(env: Env) -> Vec<u64> {
        storage::get_snapshots(&env)
    }
}
