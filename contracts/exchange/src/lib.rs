#![no_std]
use soroban_sdk::{contract, contractimpl, log, token::TokenClient, Address, Env};

mod access;
mod errors;
mod events;
mod storage;
mod storage_types;
mod types;
mod upgrade;


pub use errors::Error;
pub use types::*;
pub use upgrade::LogicVersion;

use errors::fail;

#[contract]
pub struct ExchangeContract;

/// Amounts are token units and must be positive
fn check_positive_amount(env: &Env, op: &str, amount: i128) -> Result<(), Error> {
    if amount <= 0 {
        return Err(fail(env, op, Error::InvalidAmount));
    }
    Ok(())
}

/// Pull `amount` of `token` from `from` into the contract through the
/// allowance `from` granted the contract.
fn pull_from(env: &Env, token: &Address, from: &Address, amount: i128) -> Result<(), Error> {
    let contract = env.current_contract_address();
    let token_client = TokenClient::new(env, token);
    match token_client.try_transfer_from(&contract, from, &contract, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailed),
    }
}

/// Send `amount` of `token` from the contract to `to`.
fn push_to(env: &Env, token: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    let contract = env.current_contract_address();
    let token_client = TokenClient::new(env, token);
    match token_client.try_transfer(&contract, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailed),
    }
}

#[contractimpl]
impl ExchangeContract {
    // Initialization and upgrade

    /// One-time setup of the asset pair and the operator.
    ///
    /// `operator` must authorize the call and becomes the only identity able
    /// to fund the contract and upgrade its logic.
    pub fn initialize(
        env: Env,
        operator: Address,
        asset_a: Address,
        asset_b: Address,
    ) -> Result<(), Error> {
        const OP: &str = "initialize";
        operator.require_auth();

        upgrade::claim_initializer(&env, LogicVersion::V1).map_err(|e| fail(&env, OP, e))?;
        storage::set_config(&env, &asset_a, &asset_b);
        storage::set_operator(&env, &operator);
        storage::set_version(&env, LogicVersion::V1.as_u32());
        storage::extend_instance(&env);

        log!(&env, "initialize: Contract initialized at version", LogicVersion::V1.as_u32());
        Ok(())
    }

    /// Move the active logic to `new_version`. Operator only.
    ///
    /// No stored data is touched: slots the new version appends read as
    /// zero until written.
    pub fn upgrade(env: Env, caller: Address, new_version: u32) -> Result<(), Error> {
        const OP: &str = "upgrade";
        access::require_operator(&env, OP, &caller)?;

        let from = upgrade::active(&env).map_err(|e| fail(&env, OP, e))?;
        let to = upgrade::check_upgrade(from, new_version).map_err(|e| fail(&env, OP, e))?;
        storage::set_version(&env, to.as_u32());
        storage::extend_instance(&env);

        log!(&env, "upgrade: Logic version moved", from.as_u32(), to.as_u32());
        events::emit_upgraded_event(&env, from.as_u32(), to.as_u32());
        Ok(())
    }

    /// One-time setup for logic version 2, callable once the upgrade to it
    /// has happened. Sets the minimum accepted deposit.
    pub fn initialize_v2(env: Env, caller: Address, min_deposit: i128) -> Result<(), Error> {
        const OP: &str = "initialize_v2";
        access::require_operator(&env, OP, &caller)?;

        if upgrade::active(&env).map_err(|e| fail(&env, OP, e))? != LogicVersion::V2 {
            return Err(fail(&env, OP, Error::NotUpgraded));
        }
        upgrade::claim_initializer(&env, LogicVersion::V2).map_err(|e| fail(&env, OP, e))?;
        if min_deposit < 0 {
            return Err(fail(&env, OP, Error::InvalidAmount));
        }
        storage::set_min_deposit(&env, min_deposit);
        storage::extend_instance(&env);

        log!(&env, "initialize_v2: Minimum deposit set", min_deposit);
        Ok(())
    }

    /// Hand the operator role to `new_operator`. Operator only.
    pub fn transfer_operator(env: Env, caller: Address, new_operator: Address) -> Result<(), Error> {
        const OP: &str = "transfer_operator";
        access::require_operator(&env, OP, &caller)?;

        storage::set_operator(&env, &new_operator);
        storage::extend_instance(&env);

        log!(&env, "transfer_operator: Operator replaced", new_operator.clone());
        events::emit_operator_transferred_event(&env, &caller, &new_operator);
        Ok(())
    }

    // Exchange

    /// Deposit asset A into the contract.
    /// User must approve the contract to spend `amount` before calling this.
    pub fn deposit(env: Env, user: Address, amount: i128) -> Result<(), Error> {
        const OP: &str = "deposit";
        user.require_auth();
        log!(&env, "deposit: Starting deposit", amount);

        let version = upgrade::active(&env).map_err(|e| fail(&env, OP, e))?;
        check_positive_amount(&env, OP, amount)?;
        match version {
            LogicVersion::V1 => {}
            LogicVersion::V2 => {
                let min_deposit = storage::get_min_deposit(&env);
                if amount < min_deposit {
                    log!(&env, "deposit: Below minimum deposit", min_deposit);
                    return Err(fail(&env, OP, Error::BelowMinimumDeposit));
                }
            }
        }

        let asset_a = storage::get_asset_a(&env).map_err(|e| fail(&env, OP, e))?;
        pull_from(&env, &asset_a, &user, amount).map_err(|e| fail(&env, OP, e))?;

        // The transfer landed; crediting must not be skipped from here on.
        storage::add_deposit(&env, &user, amount).map_err(|e| fail(&env, OP, e))?;
        storage::extend_instance(&env);

        events::emit_deposit_event(&env, &user, amount);
        Ok(())
    }

    /// Convert part of the deposit into a pending withdrawal request, 1:1.
    pub fn request_withdrawal(env: Env, user: Address, amount: i128) -> Result<(), Error> {
        const OP: &str = "request_withdrawal";
        user.require_auth();
        log!(&env, "request_withdrawal: Starting request", amount);

        upgrade::active(&env).map_err(|e| fail(&env, OP, e))?;
        check_positive_amount(&env, OP, amount)?;

        storage::move_to_withdrawal_request(&env, &user, amount).map_err(|e| fail(&env, OP, e))?;
        storage::extend_instance(&env);

        events::emit_withdrawal_requested_event(&env, &user, amount);
        Ok(())
    }

    /// Pay out the whole pending withdrawal request in asset B and clear it.
    pub fn claim(env: Env, user: Address) -> Result<i128, Error> {
        const OP: &str = "claim";
        user.require_auth();

        let version = upgrade::active(&env).map_err(|e| fail(&env, OP, e))?;
        let due = storage::get_withdrawal_request(&env, &user);
        if due == 0 {
            return Err(fail(&env, OP, Error::NoWithdrawalRequest));
        }
        log!(&env, "claim: Amount due", due);

        let asset_b = storage::get_asset_b(&env).map_err(|e| fail(&env, OP, e))?;
        let held = TokenClient::new(&env, &asset_b).balance(&env.current_contract_address());
        if held < due {
            log!(&env, "claim: Contract holds less asset B than due", held);
            return Err(fail(&env, OP, Error::InsufficientFunding));
        }

        // Effects are committed before the outgoing transfer so a re-entrant
        // call finds nothing left to claim.
        storage::take_withdrawal_request(&env, &user);
        storage::subtract_held_asset_b(&env, due);
        match version {
            LogicVersion::V1 => {}
            LogicVersion::V2 => {
                storage::add_claimed(&env, &user, due).map_err(|e| fail(&env, OP, e))?
            }
        }
        storage::extend_instance(&env);

        push_to(&env, &asset_b, &user, due).map_err(|e| fail(&env, OP, e))?;

        events::emit_claimed_event(&env, &user, due);
        Ok(due)
    }

    /// Add asset B to the reserve backing future claims. Operator only.
    /// The operator must approve the contract to spend `amount` first.
    pub fn fund_contract(env: Env, caller: Address, amount: i128) -> Result<(), Error> {
        const OP: &str = "fund_contract";
        access::require_operator(&env, OP, &caller)?;
        check_positive_amount(&env, OP, amount)?;

        let asset_b = storage::get_asset_b(&env).map_err(|e| fail(&env, OP, e))?;
        pull_from(&env, &asset_b, &caller, amount).map_err(|e| fail(&env, OP, e))?;
        storage::add_held_asset_b(&env, amount).map_err(|e| fail(&env, OP, e))?;
        storage::extend_instance(&env);

        log!(&env, "fund_contract: Reserve funded", amount);
        events::emit_funded_event(&env, amount);
        Ok(())
    }

    // Queries

    pub fn deposit_of(env: Env, user: Address) -> i128 {
        storage::get_deposit(&env, &user)
    }

    pub fn withdrawal_request_of(env: Env, user: Address) -> i128 {
        storage::get_withdrawal_request(&env, &user)
    }

    /// Lifetime asset B claimed; zero for claims made before version 2.
    pub fn claimed_of(env: Env, user: Address) -> i128 {
        storage::get_claimed(&env, &user)
    }

    pub fn account(env: Env, user: Address) -> AccountBalances {
        AccountBalances {
            deposit: storage::get_deposit(&env, &user),
            withdrawal_request: storage::get_withdrawal_request(&env, &user),
            claimed: storage::get_claimed(&env, &user),
        }
    }

    /// Cached asset B reserve. The asset B token balance is authoritative.
    pub fn held_asset_b(env: Env) -> i128 {
        storage::get_held_asset_b(&env)
    }

    pub fn min_deposit(env: Env) -> i128 {
        storage::get_min_deposit(&env)
    }

    pub fn asset_a(env: Env) -> Result<Address, Error> {
        storage::get_asset_a(&env)
    }

    pub fn asset_b(env: Env) -> Result<Address, Error> {
        storage::get_asset_b(&env)
    }

    pub fn operator(env: Env) -> Result<Address, Error> {
        storage::get_operator(&env)
    }

    pub fn version(env: Env) -> u32 {
        storage::get_version(&env)
    }

    pub fn is_initialized(env: Env, version: u32) -> bool {
        storage::is_initialized(&env, version)
    }
}
