use crate::errors::Error;
use crate::storage_types::*;
use soroban_sdk::{Address, Env};

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// Configuration

pub fn set_config(env: &Env, asset_a: &Address, asset_b: &Address) {
    env.storage().instance().set(&DataKey::AssetA, asset_a);
    env.storage().instance().set(&DataKey::AssetB, asset_b);
}

pub fn get_asset_a(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::AssetA)
        .ok_or(Error::NotInitialized)
}

pub fn get_asset_b(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::AssetB)
        .ok_or(Error::NotInitialized)
}

pub fn set_operator(env: &Env, operator: &Address) {
    env.storage().instance().set(&DataKey::Operator, operator);
}

pub fn get_operator(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Operator)
        .ok_or(Error::NotInitialized)
}

// Version state

/// Active logic version; zero before `initialize`.
pub fn get_version(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::Version)
        .unwrap_or(0)
}

pub fn set_version(env: &Env, version: u32) {
    env.storage().instance().set(&DataKey::Version, &version);
}

pub fn is_initialized(env: &Env, version: u32) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Initialized(version))
        .unwrap_or(false)
}

pub fn mark_initialized(env: &Env, version: u32) {
    env.storage()
        .instance()
        .set(&DataKey::Initialized(version), &true);
}

pub fn get_min_deposit(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::MinDeposit)
        .unwrap_or(0)
}

pub fn set_min_deposit(env: &Env, min_deposit: i128) {
    env.storage().instance().set(&DataKey::MinDeposit, &min_deposit);
}

// Account balances

fn read_amount(env: &Env, key: &DataKey) -> i128 {
    env.storage().persistent().get(key).unwrap_or(0)
}

fn write_amount(env: &Env, key: &DataKey, amount: i128) {
    env.storage().persistent().set(key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn get_deposit(env: &Env, user: &Address) -> i128 {
    read_amount(env, &DataKey::Deposit(user.clone()))
}

pub fn get_withdrawal_request(env: &Env, user: &Address) -> i128 {
    read_amount(env, &DataKey::WithdrawalRequest(user.clone()))
}

pub fn get_claimed(env: &Env, user: &Address) -> i128 {
    read_amount(env, &DataKey::Claimed(user.clone()))
}

/// Credit a deposit. Only called once the asset A transfer has landed.
pub fn add_deposit(env: &Env, user: &Address, amount: i128) -> Result<(), Error> {
    let key = DataKey::Deposit(user.clone());
    let updated = read_amount(env, &key)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    write_amount(env, &key, updated);
    Ok(())
}

/// Move `amount` from the deposit into the pending withdrawal request.
/// Both writes happen together or not at all.
pub fn move_to_withdrawal_request(env: &Env, user: &Address, amount: i128) -> Result<(), Error> {
    let deposit_key = DataKey::Deposit(user.clone());
    let request_key = DataKey::WithdrawalRequest(user.clone());

    let deposit = read_amount(env, &deposit_key);
    if amount > deposit {
        return Err(Error::InsufficientBalance);
    }
    let remaining = deposit.checked_sub(amount).ok_or(Error::Overflow)?;
    let requested = read_amount(env, &request_key)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;

    write_amount(env, &deposit_key, remaining);
    write_amount(env, &request_key, requested);
    Ok(())
}

/// Zero the pending withdrawal request and return what was due.
pub fn take_withdrawal_request(env: &Env, user: &Address) -> i128 {
    let key = DataKey::WithdrawalRequest(user.clone());
    let due = read_amount(env, &key);
    if due != 0 {
        write_amount(env, &key, 0);
    }
    due
}

pub fn add_claimed(env: &Env, user: &Address, amount: i128) -> Result<(), Error> {
    let key = DataKey::Claimed(user.clone());
    let updated = read_amount(env, &key)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    write_amount(env, &key, updated);
    Ok(())
}

// Asset B reserve

/// Cached asset B reserve. The token balance stays authoritative.
pub fn get_held_asset_b(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::HeldAssetB)
        .unwrap_or(0)
}

pub fn add_held_asset_b(env: &Env, amount: i128) -> Result<(), Error> {
    let updated = get_held_asset_b(env)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    env.storage().instance().set(&DataKey::HeldAssetB, &updated);
    Ok(())
}

/// Asset B can arrive outside `fund_contract`, so the cache saturates at zero.
pub fn subtract_held_asset_b(env: &Env, amount: i128) {
    let updated = get_held_asset_b(env).saturating_sub(amount).max(0);
    env.storage().instance().set(&DataKey::HeldAssetB, &updated);
}
