//! Invariant and property suite.
//!
//! Post-deployment invariants are checked on the suite's own fresh
//! instance. The issuance property deploys a new instance per sampled
//! amount so samples never see each other's supply.

use soroban_sdk::String;
use tracing::{debug, info};

use crate::config::VerifierConfig;
use crate::error::{Result, VerifyError};
use crate::fixture::StockFixture;
use crate::outcome::{expect_eq, expect_success, CallOutcome};
use crate::report::VerificationReport;

pub const SUITE: &str = "invariants";

pub struct InvariantVerifier<'a> {
    fixture: &'a StockFixture,
    config: &'a VerifierConfig,
}

impl<'a> InvariantVerifier<'a> {
    pub fn new(fixture: &'a StockFixture, config: &'a VerifierConfig) -> Self {
        Self { fixture, config }
    }

    /// Post-deployment invariants followed by the issuance property at both
    /// ends of its domain.
    pub fn run(&self) -> Result<VerificationReport> {
        self.config.validate()?;
        info!(suite = SUITE, "starting");

        let mut report = self.verify_post_deployment()?;
        for amount in [0, self.config.property_max_amount] {
            verify_issue_property(self.config, amount)?;
            report.record(format!("issue property at {amount}"), "balance and supply match");
        }

        info!(suite = SUITE, steps = report.len(), "finished");
        Ok(report)
    }

    pub fn verify_post_deployment(&self) -> Result<VerificationReport> {
        let client = &self.fixture.client;
        let env = &self.fixture.env;
        let operator = &self.fixture.accounts.operator.address;
        let args = &self.config.deploy;
        let mut report = VerificationReport::new(SUITE);

        expect_eq("total supply", "total supply", 0, client.total_supply())?;
        report.record("total supply", "zero");

        expect_eq("owner", "owner", operator.clone(), client.owner())?;
        report.record("owner", "operator");

        expect_eq("pauser", "pauser role holder", operator.clone(), client.has_pauser_role())?;
        report.record("pauser", "operator");

        expect_eq(
            "snapshotter",
            "snapshot role holder",
            operator.clone(),
            client.has_snapshot_role(),
        )?;
        report.record("snapshotter", "operator");

        let expected_contact = (
            String::from_str(env, args.contact_name),
            String::from_str(env, args.url),
        );
        expect_eq(
            "contact information",
            "contact information",
            expected_contact,
            client.get_contact_information(),
        )?;
        report.record(
            "contact information",
            format!("({}, {})", args.contact_name, args.url),
        );

        expect_eq("name", "name", String::from_str(env, args.name), client.name())?;
        report.record("name", args.name);

        expect_eq("symbol", "symbol", String::from_str(env, args.symbol), client.symbol())?;
        report.record("symbol", args.symbol);

        Ok(report)
    }
}

/// Issuing `amount` on a freshly deployed instance leaves the operator's
/// balance and the total supply at exactly `amount`.
///
/// `amount` must lie in `[0, property_max_amount]`.
pub fn verify_issue_property(config: &VerifierConfig, amount: i128) -> Result<()> {
    if !(0..=config.property_max_amount).contains(&amount) {
        return Err(VerifyError::Config(format!(
            "issue amount {amount} outside [0, {}]",
            config.property_max_amount
        )));
    }

    let step = format!("issue property at {amount}");
    let fixture = StockFixture::deploy_fresh(&config.deploy);
    let operator = &fixture.accounts.operator.address;

    expect_success(
        &step,
        CallOutcome::from_try(fixture.client.try_issue(operator, &amount)),
    )?;
    expect_eq(&step, "operator balance", amount, fixture.client.balance_of(operator))?;
    expect_eq(&step, "total supply", amount, fixture.client.total_supply())?;

    debug!(amount, "issue property holds");
    Ok(())
}
