//! Role checks. Each gate compares the claimed caller against the stored role
//! holder first, then requires that caller's authorization.

use soroban_sdk::{Address, Env};

use crate::{storage, StockError};

pub fn require_owner(env: &Env, caller: &Address) -> Result<(), StockError> {
    if storage::get_owner(env) != *caller {
        return Err(StockError::NotOwner);
    }
    caller.require_auth();
    Ok(())
}

pub fn require_pauser(env: &Env, caller: &Address) -> Result<(), StockError> {
    if storage::get_pauser(env) != *caller {
        return Err(StockError::NotAuthorized);
    }
    caller.require_auth();
    Ok(())
}

pub fn require_snapshotter(env: &Env, caller: &Address) -> Result<(), StockError> {
    if storage::get_snapshotter(env) != *caller {
        return Err(StockError::NotAuthorized);
    }
    caller.require_auth();
    Ok(())
}

pub fn require_not_paused(env: &Env) -> Result<(), StockError> {
    if storage::is_paused(env) {
        return Err(StockError::Paused);
    }
    Ok(())
}
