//! Failure-path suite.
//!
//! Drives one deployed instance through calls that must be rejected, in a
//! fixed order. Steps 3 to 5 mutate the instance cumulatively (base
//! issuance, identity registrations, pause), so [`FailurePathVerifier::run`]
//! is the only supported entry point for the full sequence.
//!
//! Every expected rejection is bracketed by a [`LedgerState`] capture: a
//! reverted call must leave total supply and all known balances untouched.

use stock_token::StockError;
use tracing::info;

use crate::accounts::Account;
use crate::config::VerifierConfig;
use crate::error::{Result, VerifyError};
use crate::fixture::{LedgerState, StockFixture};
use crate::outcome::{expect_eq, expect_revert, expect_success, CallOutcome};
use crate::report::VerificationReport;

pub const SUITE: &str = "failure-path";

pub struct FailurePathVerifier<'a> {
    fixture: &'a StockFixture,
    config: &'a VerifierConfig,
}

impl<'a> FailurePathVerifier<'a> {
    pub fn new(fixture: &'a StockFixture, config: &'a VerifierConfig) -> Self {
        Self { fixture, config }
    }

    /// Runs all six steps in order, stopping at the first failure.
    pub fn run(&self) -> Result<VerificationReport> {
        self.config.validate()?;
        info!(suite = SUITE, "starting");

        let mut report = VerificationReport::new(SUITE);
        self.issue_from_non_owner(&mut report)?;
        self.transfer_to_unidentified_receivers(&mut report)?;
        self.issue_base_supply(&mut report)?;
        self.overdraft_to_identified_receivers(&mut report)?;
        self.transfer_while_paused(&mut report)?;
        self.schedule_snapshot_from_non_holder(&mut report)?;

        info!(suite = SUITE, steps = report.len(), "finished");
        Ok(report)
    }

    /// Step 1: issuance from a non-owner.
    pub fn issue_from_non_owner(&self, report: &mut VerificationReport) -> Result<()> {
        let step = "issue from non-owner";
        let caller = &self.fixture.accounts.dummy;
        self.expect_rejected(step, StockError::NotOwner, || {
            CallOutcome::from_try(
                self.fixture
                    .client
                    .try_issue(&caller.address, &self.config.probe_amount),
            )
        })?;
        report.record(step, format!("{} rejected", caller.label));
        Ok(())
    }

    /// Step 2: transfers to every known account while none has an identity.
    /// The operator is among the receivers and is rejected like the others.
    pub fn transfer_to_unidentified_receivers(&self, report: &mut VerificationReport) -> Result<()> {
        for receiver in self.fixture.accounts.all() {
            let step = format!("transfer to unidentified {}", receiver.label);
            self.expect_transfer_rejected(
                &step,
                receiver,
                self.config.probe_amount,
                StockError::ReceiverNotIdentified,
            )?;
            report.record(step, StockError::ReceiverNotIdentified.reason());
        }
        Ok(())
    }

    /// Step 3: the operator issues the base supply the later balance checks
    /// rely on.
    pub fn issue_base_supply(&self, report: &mut VerificationReport) -> Result<()> {
        let step = "issue base supply";
        let operator = &self.fixture.accounts.operator;
        let before = self.fixture.client.total_supply();
        expect_success(
            step,
            CallOutcome::from_try(
                self.fixture
                    .client
                    .try_issue(&operator.address, &self.config.base_issuance),
            ),
        )?;
        let after = self.fixture.client.total_supply();
        expect_eq(step, "total supply", before + self.config.base_issuance, after)?;
        report.record(step, format!("supply {before} -> {after}"));
        Ok(())
    }

    /// Step 4: register an identity, then overdraw towards it. The identity
    /// moves the rejection past the receiver check onto the balance check.
    pub fn overdraft_to_identified_receivers(&self, report: &mut VerificationReport) -> Result<()> {
        let accounts = &self.fixture.accounts;
        let pairs = [
            (&accounts.dummy, self.config.dummy_identity),
            (&accounts.third, self.config.third_identity),
        ];
        for (receiver, code) in pairs {
            let step = format!("overdraft to identified {}", receiver.label);
            expect_success(
                &step,
                CallOutcome::from_try(self.fixture.client.try_set_identity(
                    &accounts.operator.address,
                    &receiver.address,
                    &code,
                )),
            )?;
            expect_eq(
                &step,
                "identity code",
                code,
                self.fixture.client.identity_of(&receiver.address),
            )?;
            self.expect_transfer_rejected(
                &step,
                receiver,
                self.config.overdraft_amount,
                StockError::InsufficientBalance,
            )?;
            report.record(step, StockError::InsufficientBalance.reason());
        }
        Ok(())
    }

    /// Step 5: pause, then any transfer is rejected with the paused code.
    pub fn transfer_while_paused(&self, report: &mut VerificationReport) -> Result<()> {
        let step = "transfer while paused";
        let accounts = &self.fixture.accounts;
        expect_success(
            step,
            CallOutcome::from_try(self.fixture.client.try_pause(&accounts.operator.address)),
        )?;
        expect_eq(step, "paused flag", true, self.fixture.client.is_paused())?;
        self.expect_transfer_rejected(
            step,
            &accounts.dummy,
            self.config.probe_amount,
            StockError::Paused,
        )?;
        report.record(step, StockError::Paused.reason());
        Ok(())
    }

    /// Step 6: snapshot scheduling from an account without the snapshot role.
    pub fn schedule_snapshot_from_non_holder(&self, report: &mut VerificationReport) -> Result<()> {
        let step = "schedule snapshot from non-holder";
        let caller = &self.fixture.accounts.dummy;
        let scheduled_before = self.fixture.client.scheduled_snapshots().len();
        self.expect_rejected(step, StockError::NotAuthorized, || {
            CallOutcome::from_try(
                self.fixture
                    .client
                    .try_schedule_snapshot(&caller.address, &self.config.snapshot_timestamp),
            )
        })?;
        expect_eq(
            step,
            "scheduled snapshots",
            scheduled_before,
            self.fixture.client.scheduled_snapshots().len(),
        )?;
        report.record(step, format!("{} rejected", caller.label));
        Ok(())
    }

    fn expect_transfer_rejected(
        &self,
        step: &str,
        receiver: &Account,
        amount: i128,
        expected: StockError,
    ) -> Result<()> {
        let sender = &self.fixture.accounts.operator;
        self.expect_rejected(step, expected, || {
            CallOutcome::from_try(self.fixture.client.try_transfer(
                &sender.address,
                &receiver.address,
                &amount,
            ))
        })
    }

    fn expect_rejected<F>(&self, step: &str, expected: StockError, call: F) -> Result<()>
    where
        F: FnOnce() -> CallOutcome<()>,
    {
        let before = self.fixture.ledger_state();
        expect_revert(step, call(), expected)?;
        let after = self.fixture.ledger_state();
        ensure_unchanged(step, &before, &after)
    }
}

fn ensure_unchanged(step: &str, before: &LedgerState, after: &LedgerState) -> Result<()> {
    if before == after {
        return Ok(());
    }
    Err(VerifyError::StateChanged {
        step: step.to_string(),
        before: before.to_string(),
        after: after.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(supply: i128, operator: i128) -> LedgerState {
        LedgerState {
            total_supply: supply,
            balances: [("operator", operator), ("dummy", 0), ("acc3", 0)],
        }
    }

    #[test]
    fn ensure_unchanged_accepts_identical_state() {
        assert!(ensure_unchanged("s", &state(5000, 5000), &state(5000, 5000)).is_ok());
    }

    #[test]
    fn ensure_unchanged_reports_both_states() {
        let err = ensure_unchanged("s", &state(5000, 5000), &state(5010, 5010)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "s: rejected call changed state: before supply=5000 operator=5000 dummy=0 acc3=0, \
             after supply=5010 operator=5010 dummy=0 acc3=0"
        );
    }
}
