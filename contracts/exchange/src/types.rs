use soroban_sdk::contracttype;

/// All ledger balances of one account.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccountBalances {
    pub deposit: i128,
    pub withdrawal_request: i128,
    /// Lifetime asset B claimed under logic version 2 and later.
    pub claimed: i128,
}
