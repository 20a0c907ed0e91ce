use soroban_sdk::{contracttype, Address};

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const BALANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

// Main storage key enum.
//
// Keys are encoded by variant name, so a variant's name and value type are its
// storage identity. Versions only ever append variants; the per-version slot
// tables in `upgrade.rs` list them in order.
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    // Version 1
    Operator,
    AssetA,
    AssetB,
    Version,
    Initialized(u32),         // logic version
    Deposit(Address),         // account
    WithdrawalRequest(Address), // account
    HeldAssetB,
    // Version 2
    MinDeposit,
    Claimed(Address), // account
}
