use thiserror::Error;

/// Failure raised while computing a split.
///
/// Propagated unchanged through `BalanceLedger::record`; the ledger never
/// recovers from it.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidSplitError {
    #[error("at least one participant must share the expense")]
    NoParticipants,

    #[error("expense amount must be positive and finite (got {amount})")]
    NonPositiveAmount { amount: f64 },

    /// Raised by custom strategies with their own reason.
    #[error("split rejected: {0}")]
    Rejected(String),
}

impl InvalidSplitError {
    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::Rejected(msg.into())
    }
}
