//! Deployment arguments and the tunables the suites drive.

use crate::error::{Result, VerifyError};

/// Constructor arguments for the stock contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeployArgs {
    pub name: &'static str,
    pub symbol: &'static str,
    pub url: &'static str,
    pub contact_name: &'static str,
}

impl Default for DeployArgs {
    fn default() -> Self {
        Self {
            name: "someStock",
            symbol: "SST",
            url: "www.MyURL.ch",
            contact_name: "jeremiah",
        }
    }
}

/// Amounts, identity codes and timestamps driven through both suites.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifierConfig {
    pub deploy: DeployArgs,
    /// Amount used for transfers whose outcome does not depend on balance.
    pub probe_amount: i128,
    /// Supply issued by the failure-path suite before the balance checks.
    pub base_issuance: i128,
    /// Transfer amount for the insufficient-balance checks.
    pub overdraft_amount: i128,
    pub dummy_identity: u64,
    pub third_identity: u64,
    pub snapshot_timestamp: u64,
    /// Inclusive upper bound of the issuance property domain.
    pub property_max_amount: i128,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            deploy: DeployArgs::default(),
            probe_amount: 10,
            base_issuance: 5000,
            overdraft_amount: 5001,
            dummy_identity: 0x9876_5432_1098_7654,
            third_identity: 0x1234_5678_9012_3456,
            snapshot_timestamp: 3_030_303_030,
            property_max_amount: 100,
        }
    }
}

impl VerifierConfig {
    pub fn validate(&self) -> Result<()> {
        if self.base_issuance < 0 || self.probe_amount < 0 || self.property_max_amount < 0 {
            return Err(VerifyError::Config(
                "amounts must be non-negative".to_string(),
            ));
        }
        if self.overdraft_amount <= self.base_issuance {
            return Err(VerifyError::Config(format!(
                "overdraft amount {} must exceed base issuance {}",
                self.overdraft_amount, self.base_issuance
            )));
        }
        if self.dummy_identity == 0 || self.third_identity == 0 {
            return Err(VerifyError::Config(
                "identity code 0 means unregistered".to_string(),
            ));
        }
        Ok(())
    }
}
