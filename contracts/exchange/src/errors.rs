use soroban_sdk::{contracterror, log, Env, String};

// Codes are part of the contract ABI; append new variants, never renumber.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    InvalidAmount = 1,
    InsufficientBalance = 2,
    TransferFailed = 3,
    NoWithdrawalRequest = 4,
    InsufficientFunding = 5,
    NotAuthorized = 6,
    AlreadyInitialized = 7,
    IncompatibleLayout = 8,
    NotInitialized = 9,
    NotUpgraded = 10,
    Overflow = 11,
    BelowMinimumDeposit = 12,
}

impl Error {
    /// Human-readable reason, logged at the failure site.
    pub fn reason(&self) -> &'static str {
        match self {
            Error::InvalidAmount => "Amount must be greater than 0",
            Error::InsufficientBalance => "Insufficient balance",
            Error::TransferFailed => "Asset transfer failed",
            Error::NoWithdrawalRequest => "No withdrawal requests",
            Error::InsufficientFunding => "Insufficient asset B balance",
            Error::NotAuthorized => "Caller is not the operator",
            Error::AlreadyInitialized => "Already initialized",
            Error::IncompatibleLayout => "Storage layout is not append-only compatible",
            Error::NotInitialized => "Contract is not initialized",
            Error::NotUpgraded => "Logic version has not been upgraded to",
            Error::Overflow => "Arithmetic overflow",
            Error::BelowMinimumDeposit => "Deposit is below the minimum deposit",
        }
    }
}

/// Log `err` with the operation it aborted and hand it back for `Err(..)`.
pub(crate) fn fail(env: &Env, op: &str, err: Error) -> Error {
    log!(
        env,
        "ERROR",
        String::from_str(env, op),
        String::from_str(env, err.reason())
    );
    err
}
