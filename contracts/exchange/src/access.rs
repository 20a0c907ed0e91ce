use crate::errors::{fail, Error};
use crate::storage;
use soroban_sdk::{Address, Env};

pub fn is_operator(env: &Env, identity: &Address) -> Result<bool, Error> {
    Ok(storage::get_operator(env)? == *identity)
}

/// Authenticate `caller` and require it to hold the operator role.
pub fn require_operator(env: &Env, op: &str, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    if !is_operator(env, caller).map_err(|e| fail(env, op, e))? {
        return Err(fail(env, op, Error::NotAuthorized));
    }
    Ok(())
}
