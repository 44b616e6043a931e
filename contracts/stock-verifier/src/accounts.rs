//! Calling identities used by the suites.
//!
//! Identities are generated per test host and handed to the fixture
//! explicitly; nothing is shared between hosts.

use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Account {
    pub label: &'static str,
    pub address: Address,
}

impl Account {
    pub fn generate(env: &Env, label: &'static str) -> Self {
        Self {
            label,
            address: Address::generate(env),
        }
    }
}

/// The operator deploys and owns the contract; `dummy` and `third` hold no
/// role.
#[derive(Clone, Debug)]
pub struct Accounts {
    pub operator: Account,
    pub dummy: Account,
    pub third: Account,
}

impl Accounts {
    pub fn generate(env: &Env) -> Self {
        Self {
            operator: Account::generate(env, "operator"),
            dummy: Account::generate(env, "dummy"),
            third: Account::generate(env, "acc3"),
        }
    }

    /// All accounts in declaration order.
    pub fn all(&self) -> [&Account; 3] {
        [&self.operator, &self.dummy, &self.third]
    }
}
