//! # Stock Contract Behavior Verifier
//!
//! Deploys the stock token into the Soroban test host and checks its
//! observable behavior from the outside, through the generated client only.
//!
//! Two independent suites, each against its own deployment:
//!
//! 1. **Failure path** ([`FailurePathVerifier`]): calls that must be rejected
//!    (non-owner issuance, unidentified receivers, overdrafts, paused
//!    transfers, unauthorized snapshot scheduling), run as one ordered
//!    scenario on a shared instance. Every rejection is also checked to leave
//!    supply and balances untouched.
//! 2. **Invariants** ([`InvariantVerifier`]): post-deployment state of a
//!    fresh instance, plus the issuance property checked by
//!    [`verify_issue_property`].
//!
//! Revert expectations are expressed as [`stock_token::StockError`] values;
//! their [`reason`](stock_token::StockError::reason) strings are what
//! failures report.

pub mod accounts;
pub mod config;
pub mod error;
pub mod failure_path;
pub mod fixture;
pub mod invariants;
pub mod outcome;
pub mod report;

pub use accounts::{Account, Accounts};
pub use config::{DeployArgs, VerifierConfig};
pub use error::{Result, VerifyError};
pub use failure_path::FailurePathVerifier;
pub use fixture::{LedgerState, StockFixture};
pub use invariants::{verify_issue_property, InvariantVerifier};
pub use outcome::{expect_eq, expect_revert, expect_success, CallOutcome};
pub use report::{StepRecord, VerificationReport};

#[cfg(test)]
mod test;
