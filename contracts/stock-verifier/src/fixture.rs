//! Fixture provisioning: one deployed stock contract per suite.

use core::fmt;

use soroban_sdk::{Env, String};
use stock_token::{StockContract, StockContractClient};
use tracing::info;

use crate::accounts::Accounts;
use crate::config::DeployArgs;

/// A deployed contract together with the identities that talk to it.
///
/// Deployment failure aborts the suite; there is no retry.
pub struct StockFixture {
    pub env: Env,
    pub client: StockContractClient<'static>,
    pub accounts: Accounts,
}

impl StockFixture {
    /// Deploys the contract with `accounts.operator` as deployer.
    pub fn deploy(env: &Env, accounts: Accounts, args: &DeployArgs) -> Self {
        env.mock_all_auths();

        let contract_id = env.register(
            StockContract,
            (
                accounts.operator.address.clone(),
                String::from_str(env, args.name),
                String::from_str(env, args.symbol),
                String::from_str(env, args.url),
                String::from_str(env, args.contact_name),
            ),
        );
        info!(
            name = args.name,
            symbol = args.symbol,
            deployer = accounts.operator.label,
            "deployed stock contract"
        );

        let client = StockContractClient::new(env, &contract_id);
        Self {
            env: env.clone(),
            client,
            accounts,
        }
    }

    /// Fresh host, fresh identities, fresh contract.
    pub fn deploy_fresh(args: &DeployArgs) -> Self {
        let env = Env::default();
        let accounts = Accounts::generate(&env);
        Self::deploy(&env, accounts, args)
    }

    /// Total supply and the balance of every known account.
    pub fn ledger_state(&self) -> LedgerState {
        let balances = self
            .accounts
            .all()
            .map(|account| (account.label, self.client.balance_of(&account.address)));
        LedgerState {
            total_supply: self.client.total_supply(),
            balances,
        }
    }
}

/// Observable token state used to prove a rejected call changed nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerState {
    pub total_supply: i128,
    pub balances: [(&'static str, i128); 3],
}

impl fmt::Display for LedgerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "supply={}", self.total_supply)?;
        for (label, balance) in &self.balances {
            write!(f, " {label}={balance}")?;
        }
        Ok(())
    }
}
