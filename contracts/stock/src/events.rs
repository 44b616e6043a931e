use soroban_sdk::{symbol_short, Address, Env, Symbol};

pub fn emit_issued(env: &Env, owner: &Address, amount: i128) {
    const ISSUE: Symbol = symbol_short!("issue");
    env.events().publish((ISSUE, owner.clone()), amount);
}

pub fn emit_transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
    const TRANSFER: Symbol = symbol_short!("transfer");
    env.events()
        .publish((TRANSFER, from.clone(), to.clone()), amount);
}

pub fn emit_identity_set(env: &Env, account: &Address, code: u64) {
    const IDENTITY: Symbol = symbol_short!("ident");
    env.events().publish((IDENTITY, account.clone()), code);
}

pub fn emit_paused(env: &Env, caller: &Address) {
    const PAUSED: Symbol = symbol_short!("pause");
    env.events().publish((PAUSED,), caller.clone());
}

pub fn emit_unpaused(env: &Env, caller: &Address) {
    const UNPAUSED: Symbol = symbol_short!("unpause");
    env.events().publish((UNPAUSED,), caller.clone());
}

pub fn emit_snapshot_scheduled(env: &Env, caller: &Address, timestamp: u64) {
    const SNAPSHOT: Symbol = symbol_short!("snap_sch");
    env.events().publish((SNAPSHOT, caller.clone()), timestamp);
}

pub fn emit_ownership_transferred(env: &Env, previous: &Address, new_owner: &Address) {
    const OWNER: Symbol = symbol_short!("owner");
    env.events()
        .publish((OWNER, previous.clone()), new_owner.clone());
}

/// `role` is `"pauser"` or `"snapshot"`.
pub fn emit_role_granted(env: &Env, role: Symbol, account: &Address, granter: &Address) {
    const ROLE_GRANTED: Symbol = symbol_short!("role_g");
    env.events()
        .publish((ROLE_GRANTED, role, account.clone()), granter.clone());
}
