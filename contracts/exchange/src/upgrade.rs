//! Logic versions and the append-only storage layout discipline.
//!
//! Every logic version owns a slot table describing the persisted keys it
//! reads and writes, in `DataKey` declaration order. A later version's table
//! must start with the exact slots of the version before it and may only add
//! slots at the end. This is asserted at compile time for the shipped
//! versions and checked again by `upgrade` before the version tag moves.

use crate::errors::Error;
use crate::storage;
use soroban_sdk::Env;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SlotType {
    Address,
    Amount,
    Version,
    Flag,
}

/// How a slot is addressed in storage.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SlotKey {
    Single,
    PerAccount,
    PerVersion,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Slot {
    pub name: &'static str,
    pub ty: SlotType,
    pub key: SlotKey,
}

const fn slot(name: &'static str, ty: SlotType, key: SlotKey) -> Slot {
    Slot { name, ty, key }
}

pub const LAYOUT_V1: &[Slot] = &[
    slot("Operator", SlotType::Address, SlotKey::Single),
    slot("AssetA", SlotType::Address, SlotKey::Single),
    slot("AssetB", SlotType::Address, SlotKey::Single),
    slot("Version", SlotType::Version, SlotKey::Single),
    slot("Initialized", SlotType::Flag, SlotKey::PerVersion),
    slot("Deposit", SlotType::Amount, SlotKey::PerAccount),
    slot("WithdrawalRequest", SlotType::Amount, SlotKey::PerAccount),
    slot("HeldAssetB", SlotType::Amount, SlotKey::Single),
];

pub const LAYOUT_V2: &[Slot] = &[
    slot("Operator", SlotType::Address, SlotKey::Single),
    slot("AssetA", SlotType::Address, SlotKey::Single),
    slot("AssetB", SlotType::Address, SlotKey::Single),
    slot("Version", SlotType::Version, SlotKey::Single),
    slot("Initialized", SlotType::Flag, SlotKey::PerVersion),
    slot("Deposit", SlotType::Amount, SlotKey::PerAccount),
    slot("WithdrawalRequest", SlotType::Amount, SlotKey::PerAccount),
    slot("HeldAssetB", SlotType::Amount, SlotKey::Single),
    slot("MinDeposit", SlotType::Amount, SlotKey::Single),
    slot("Claimed", SlotType::Amount, SlotKey::PerAccount),
];

const _: () = assert!(extends(LAYOUT_V1, LAYOUT_V2));

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const fn slot_eq(a: &Slot, b: &Slot) -> bool {
    str_eq(a.name, b.name) && a.ty as u8 == b.ty as u8 && a.key as u8 == b.key as u8
}

/// True when `new` keeps every slot of `old` at the same position with the
/// same name and type, adding slots only after them.
pub const fn extends(old: &[Slot], new: &[Slot]) -> bool {
    if new.len() < old.len() {
        return false;
    }
    let mut i = 0;
    while i < old.len() {
        if !slot_eq(&old[i], &new[i]) {
            return false;
        }
        i += 1;
    }
    true
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LogicVersion {
    V1 = 1,
    V2 = 2,
}

impl LogicVersion {
    pub fn from_u32(version: u32) -> Option<Self> {
        match version {
            1 => Some(LogicVersion::V1),
            2 => Some(LogicVersion::V2),
            _ => None,
        }
    }

    pub fn as_u32(self) -> u32 {
        self as u32
    }

    pub fn layout(self) -> &'static [Slot] {
        match self {
            LogicVersion::V1 => LAYOUT_V1,
            LogicVersion::V2 => LAYOUT_V2,
        }
    }
}

/// The logic version currently selected by the stored version tag.
pub fn active(env: &Env) -> Result<LogicVersion, Error> {
    LogicVersion::from_u32(storage::get_version(env)).ok_or(Error::NotInitialized)
}

/// Validate a move from `from` to the raw version `to`.
///
/// Unknown targets, non-increasing targets and layouts that are not
/// append-only extensions are all `IncompatibleLayout`.
pub fn check_upgrade(from: LogicVersion, to: u32) -> Result<LogicVersion, Error> {
    let target = LogicVersion::from_u32(to).ok_or(Error::IncompatibleLayout)?;
    if target <= from || !extends(from.layout(), target.layout()) {
        return Err(Error::IncompatibleLayout);
    }
    Ok(target)
}

/// One-shot guard shared by every version initializer.
pub fn claim_initializer(env: &Env, version: LogicVersion) -> Result<(), Error> {
    if storage::is_initialized(env, version.as_u32()) {
        return Err(Error::AlreadyInitialized);
    }
    storage::mark_initialized(env, version.as_u32());
    Ok(())
}
