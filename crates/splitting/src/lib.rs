//! Split computation: how one expense turns into per-participant debts.
//!
//! Pure functions only; the ledger depends on the [`SplitStrategy`] contract,
//! never on a concrete policy.

pub mod equal;
pub mod error;
pub mod strategy;

pub use equal::EqualSplit;
pub use error::InvalidSplitError;
pub use strategy::{SplitResult, SplitStrategy, validate_inputs};
