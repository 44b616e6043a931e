use soroban_sdk::contracterror;

/// Error contract of the stock token.
///
/// Authorization failures carry human-readable reasons. Value and state
/// failures (`Paused`, `InsufficientBalance`) carry short status codes whose
/// numeric value matches the hex string they are reported as.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum StockError {
    /// Caller is not the contract owner.
    NotOwner = 1,
    /// Transfer target has no registered identity.
    ReceiverNotIdentified = 2,
    /// Caller does not hold the role the operation is gated on.
    NotAuthorized = 3,
    /// Amount is negative or the resulting balance would overflow.
    InvalidAmount = 4,
    /// Snapshot timestamp is not after the current ledger time.
    SnapshotInPast = 5,
    /// Contract is paused (0x42).
    Paused = 66,
    /// Sender balance is below the transfer amount (0x54).
    InsufficientBalance = 84,
}

impl StockError {
    /// Revert reason as reported to callers.
    pub const fn reason(self) -> &'static str {
        match self {
            StockError::NotOwner => "Ownable: caller is not the owner",
            StockError::ReceiverNotIdentified => "Receiver not identified",
            StockError::NotAuthorized => "not authorized",
            StockError::InvalidAmount => "invalid amount",
            StockError::SnapshotInPast => "snapshot time must be in the future",
            StockError::Paused => "0x42",
            StockError::InsufficientBalance => "0x54",
        }
    }
}
