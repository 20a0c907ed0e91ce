use soroban_sdk::{contractevent, Address, Env};

#[contractevent(topics = ["DEPOSIT"])]
#[derive(Clone, Debug)]
pub struct DepositEvent {
    pub account: Address,
    pub amount: i128,
}

#[contractevent(topics = ["WITHDRAWAL_REQUESTED"])]
#[derive(Clone, Debug)]
pub struct WithdrawalRequestedEvent {
    pub account: Address,
    pub amount: i128,
}

#[contractevent(topics = ["CLAIMED"])]
#[derive(Clone, Debug)]
pub struct ClaimedEvent {
    pub account: Address,
    pub amount: i128,
}

#[contractevent(topics = ["FUNDED"])]
#[derive(Clone, Debug)]
pub struct FundedEvent {
    pub amount: i128,
}

#[contractevent(topics = ["UPGRADED"])]
#[derive(Clone, Debug)]
pub struct UpgradedEvent {
    pub from: u32,
    pub to: u32,
}

#[contractevent(topics = ["OPERATOR_TRANSFERRED"])]
#[derive(Clone, Debug)]
pub struct OperatorTransferredEvent {
    pub previous: Address,
    pub new_operator: Address,
}

pub fn emit_deposit_event(env: &Env, account: &Address, amount: i128) {
    DepositEvent {
        account: account.clone(),
        amount,
    }
    .publish(env);
}

pub fn emit_withdrawal_requested_event(env: &Env, account: &Address, amount: i128) {
    WithdrawalRequestedEvent {
        account: account.clone(),
        amount,
    }
    .publish(env);
}

pub fn emit_claimed_event(env: &Env, account: &Address, amount: i128) {
    ClaimedEvent {
        account: account.clone(),
        amount,
    }
    .publish(env);
}

pub fn emit_funded_event(env: &Env, amount: i128) {
    FundedEvent { amount }.publish(env);
}

pub fn emit_upgraded_event(env: &Env, from: u32, to: u32) {
    UpgradedEvent { from, to }.publish(env);
}

pub fn emit_operator_transferred_event(env: &Env, previous: &Address, new_operator: &Address) {
    OperatorTransferredEvent {
        previous: previous.clone(),
        new_operator: new_operator.clone(),
    }
    .publish(env);
}
