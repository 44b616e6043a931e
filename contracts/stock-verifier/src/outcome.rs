//! Classification of contract call results and the expectation helpers built
//! on top of it.

use core::fmt::Debug;

use stock_token::StockError;
use tracing::{debug, warn};

use crate::error::{Result, VerifyError};

/// Shape of a generated `try_*` client method's return value: the outer
/// `Err` carries either a contract error or the host's invoke error.
pub type TryResult<T, C, I> =
    core::result::Result<core::result::Result<T, C>, core::result::Result<StockError, I>>;

/// What a `try_*` client call observed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallOutcome<T> {
    Success(T),
    /// The contract rejected the call with an error from its error contract.
    Reverted(StockError),
    /// The host aborted the call for a reason outside the error contract
    /// (auth failure, panic, value conversion).
    Aborted(String),
}

impl<T> CallOutcome<T> {
    /// Folds the nested result returned by generated `try_*` client methods.
    pub fn from_try<C, I>(result: TryResult<T, C, I>) -> Self
    where
        C: Debug,
        I: Debug,
    {
        match result {
            Ok(Ok(value)) => CallOutcome::Success(value),
            Ok(Err(conversion)) => {
                CallOutcome::Aborted(format!("return value conversion failed: {conversion:?}"))
            }
            Err(Ok(error)) => CallOutcome::Reverted(error),
            Err(Err(invoke)) => CallOutcome::Aborted(format!("{invoke:?}")),
        }
    }
}

/// The call must revert with exactly `expected`.
pub fn expect_revert<T>(step: &str, outcome: CallOutcome<T>, expected: StockError) -> Result<()> {
    match outcome {
        CallOutcome::Reverted(actual) if actual == expected => {
            debug!(step, reason = expected.reason(), "call reverted as expected");
            Ok(())
        }
        CallOutcome::Reverted(actual) => {
            warn!(step, expected = expected.reason(), actual = actual.reason(), "wrong revert reason");
            Err(VerifyError::WrongRevert {
                step: step.to_string(),
                expected: expected.reason(),
                actual: actual.reason(),
            })
        }
        CallOutcome::Success(_) => {
            warn!(step, expected = expected.reason(), "call succeeded but should have reverted");
            Err(VerifyError::UnexpectedSuccess {
                step: step.to_string(),
                expected: expected.reason(),
            })
        }
        CallOutcome::Aborted(detail) => Err(VerifyError::Aborted {
            step: step.to_string(),
            detail,
        }),
    }
}

/// The call must succeed; returns its value.
pub fn expect_success<T>(step: &str, outcome: CallOutcome<T>) -> Result<T> {
    match outcome {
        CallOutcome::Success(value) => {
            debug!(step, "call succeeded");
            Ok(value)
        }
        CallOutcome::Reverted(error) => {
            warn!(step, reason = error.reason(), "call reverted but should have succeeded");
            Err(VerifyError::UnexpectedRevert {
                step: step.to_string(),
                reason: error.reason(),
            })
        }
        CallOutcome::Aborted(detail) => Err(VerifyError::Aborted {
            step: step.to_string(),
            detail,
        }),
    }
}

pub fn expect_eq<T>(step: &str, what: &'static str, expected: T, actual: T) -> Result<()>
where
    T: PartialEq + Debug,
{
    if expected == actual {
        return Ok(());
    }
    warn!(step, what, ?expected, ?actual, "value mismatch");
    Err(VerifyError::Mismatch {
        step: step.to_string(),
        what,
        expected: format!("{expected:?}"),
        actual: format!("{actual:?}"),
    })
}
