//! Storage helpers. All state lives in instance storage.

use soroban_sdk::{contracttype, Address, Env, String, Vec};

/// Data keys for contract storage
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum DataKey {
    Name,
    Symbol,
    Url,
    ContactName,
    Owner,
    Pauser,
    Snapshotter,
    Paused,
    TotalSupply,
    Balance(Address),
    Identity(Address),
    Snapshots,
}

pub fn set_metadata(env: &Env, name: &String, symbol: &String, url: &String, contact_name: &String) {
    let store = env.storage().instance();
    store.set(&DataKey::Name, name);
    store.set(&DataKey::Symbol, symbol);
    store.set(&DataKey::Url, url);
    store.set(&DataKey::ContactName, contact_name);
}

fn get_string(env: &Env, key: &DataKey) -> String {
    env.storage()
        .instance()
        .get(key)
        .unwrap_or_else(|| String::from_str(env, ""))
}

pub fn get_name(env: &Env) -> String {
    get_string(env, &DataKey::Name)
}

pub fn get_symbol(env: &Env) -> String {
    get_string(env, &DataKey::Symbol)
}

pub fn get_url(env: &Env) -> String {
    get_string(env, &DataKey::Url)
}

pub fn get_contact_name(env: &Env) -> String {
    get_string(env, &DataKey::ContactName)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_owner(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Owner).expect("owner not set")
}

pub fn set_pauser(env: &Env, pauser: &Address) {
    env.storage().instance().set(&DataKey::Pauser, pauser);
}

pub fn get_pauser(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Pauser).expect("pauser not set")
}

pub fn set_snapshotter(env: &Env, snapshotter: &Address) {
    env.storage().instance().set(&DataKey::Snapshotter, snapshotter);
}

pub fn get_snapshotter(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Snapshotter)
        .expect("snapshotter not set")
}

pub fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&DataKey::Paused).unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::TotalSupply).unwrap_or(0)
}

pub fn set_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
}

pub fn get_balance(env: &Env, account: &Address) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::Balance(account.clone()))
        .unwrap_or(0)
}

pub fn set_balance(env: &Env, account: &Address, balance: i128) {
    env.storage()
        .instance()
        .set(&DataKey::Balance(account.clone()), &balance);
}

/// Identity code for `account`; `0` means unregistered.
pub fn get_identity(env: &Env, account: &Address) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::Identity(account.clone()))
        .unwrap_or(0)
}

pub fn set_identity(env: &Env, account: &Address, code: u64) {
    let key = DataKey::Identity(account.clone());
    if code == 0 {
        env.storage().instance().remove(&key);
    } else {
        env.storage().instance().set(&key, &code);
    }
}

pub fn is_identified(env: &Env, account: &Address) -> bool {
    get_identity(env, account) != 0
}

pub fn get_snapshots(env: &Env) -> Vec<u64> {
    env.storage()
        .instance()
        .get(&DataKey::Snapshots)
        .unwrap_or(Vec::new(env))
}

/// Inserts `timestamp` keeping the schedule ascending. Returns `false` if it
/// was already scheduled.
pub fn insert_snapshot(env: &Env, timestamp: u64) -> bool {
    let mut snapshots = get_snapshots(env);
    let mut index = snapshots.len();
    for (i, scheduled) in snapshots.iter().enumerate() {
        if scheduled == timestamp {
            return false;
        }
        if scheduled > timestamp {
            index = i as u32;
            break;
        }
    }
    snapshots.insert(index, timestamp);
    env.storage().instance().set(&DataKey::Snapshots, &snapshots);
    true
}
